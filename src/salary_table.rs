use serde::{Serialize, Serializer, ser::SerializeMap};

pub type PlayerName = String;
pub type SalaryAmount = u64;
pub type TeamLabel = String;

/// Player name -> salary for a single team page.
///
/// Keeps the order in which players were first seen. Inserting a name that is
/// already present replaces its salary in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamSalaryTable {
    entries: Vec<(PlayerName, SalaryAmount)>,
}

impl TeamSalaryTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: PlayerName, salary: SalaryAmount) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = salary,
            None => self.entries.push((name, salary)),
        }
    }

    pub fn get(&self, name: &str) -> Option<SalaryAmount> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, salary)| *salary)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, SalaryAmount)> {
        self.entries
            .iter()
            .map(|(name, salary)| (name.as_str(), *salary))
    }

    /// Sum of every recorded salary.
    pub fn total_payroll(&self) -> SalaryAmount {
        self.entries
            .iter()
            .fold(0, |acc: SalaryAmount, (_, salary)| acc.saturating_add(*salary))
    }
}

impl Serialize for TeamSalaryTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, salary) in &self.entries {
            map.serialize_entry(name, salary)?;
        }
        map.end()
    }
}

/// Team label -> salary table for one batch run, in roster order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeagueSalarySnapshot {
    teams: Vec<(TeamLabel, TeamSalaryTable)>,
}

impl LeagueSalarySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: TeamLabel, table: TeamSalaryTable) {
        match self.teams.iter_mut().find(|(existing, _)| *existing == label) {
            Some(entry) => entry.1 = table,
            None => self.teams.push((label, table)),
        }
    }

    pub fn get(&self, label: &str) -> Option<&TeamSalaryTable> {
        self.teams
            .iter()
            .find(|(existing, _)| existing == label)
            .map(|(_, table)| table)
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TeamSalaryTable)> {
        self.teams.iter().map(|(label, table)| (label.as_str(), table))
    }
}

impl Serialize for LeagueSalarySnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.teams.len()))?;
        for (label, table) in &self.teams {
            map.serialize_entry(label, table)?;
        }
        map.end()
    }
}
