use std::fmt;

use crate::salary_table::SalaryAmount;

/// League payroll lines a team can cross, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Threshold {
    SalaryCap,
    LuxuryTax,
    FirstApron,
    SecondApron,
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Threshold::SalaryCap => "Salary Cap",
            Threshold::LuxuryTax => "Luxury Tax",
            Threshold::FirstApron => "First Apron",
            Threshold::SecondApron => "Second Apron",
        };
        f.write_str(label)
    }
}

/// 2025 season figures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapThresholds {
    /// Room that cap space is measured against.
    pub total_cap: SalaryAmount,
    pub salary_cap: SalaryAmount,
    pub luxury_tax: SalaryAmount,
    pub first_apron: SalaryAmount,
    pub second_apron: SalaryAmount,
}

impl Default for CapThresholds {
    fn default() -> Self {
        Self {
            total_cap: 240_000_000,
            salary_cap: 154_647_000,
            luxury_tax: 187_895_000,
            first_apron: 195_945_000,
            second_apron: 207_824_000,
        }
    }
}

impl CapThresholds {
    pub fn value(&self, threshold: Threshold) -> SalaryAmount {
        match threshold {
            Threshold::SalaryCap => self.salary_cap,
            Threshold::LuxuryTax => self.luxury_tax,
            Threshold::FirstApron => self.first_apron,
            Threshold::SecondApron => self.second_apron,
        }
    }

    /// `total_cap - payroll`; negative once a team is over, clamped to `i64`.
    pub fn cap_space(&self, payroll: SalaryAmount) -> i64 {
        let space = i128::from(self.total_cap) - i128::from(payroll);
        space.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
    }

    /// Highest line the payroll has reached. Landing exactly on a line counts.
    pub fn highest_crossed(&self, payroll: SalaryAmount) -> Option<Threshold> {
        [
            Threshold::SecondApron,
            Threshold::FirstApron,
            Threshold::LuxuryTax,
            Threshold::SalaryCap,
        ]
        .into_iter()
        .find(|threshold| payroll >= self.value(*threshold))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cap_space_goes_negative_when_over() {
        let thresholds = CapThresholds::default();
        assert_eq!(thresholds.cap_space(0), 240_000_000);
        assert_eq!(thresholds.cap_space(240_000_000), 0);
        assert_eq!(thresholds.cap_space(250_000_000), -10_000_000);
    }

    #[test]
    fn cap_space_saturates() {
        let thresholds = CapThresholds {
            total_cap: 0,
            ..CapThresholds::default()
        };
        assert_eq!(thresholds.cap_space(u64::MAX), i64::MIN);
    }

    #[test]
    fn nothing_crossed_below_the_cap() {
        let thresholds = CapThresholds::default();
        assert_eq!(thresholds.highest_crossed(0), None);
    }

    #[test]
    fn each_line_is_crossed_at_its_value() {
        let thresholds = CapThresholds::default();
        let lines = [
            (Threshold::SalaryCap, None),
            (Threshold::LuxuryTax, Some(Threshold::SalaryCap)),
            (Threshold::FirstApron, Some(Threshold::LuxuryTax)),
            (Threshold::SecondApron, Some(Threshold::FirstApron)),
        ];
        for (line, below) in lines {
            let value = thresholds.value(line);
            assert_eq!(thresholds.highest_crossed(value - 1), below, "{line} - 1");
            assert_eq!(thresholds.highest_crossed(value), Some(line), "{line}");
            assert_eq!(thresholds.highest_crossed(value + 1), Some(line), "{line} + 1");
        }
    }

    #[test]
    fn labels_match_league_terms() {
        assert_eq!(Threshold::FirstApron.to_string(), "First Apron");
    }
}
