use scraper::ElementRef;

use crate::salary_table::SalaryAmount;

pub fn extract_text(node: ElementRef) -> String {
    node.text().collect::<String>()
}

/// Accepts only a plain run of ASCII digits, e.g. `"5000000"`.
/// Signs, separators, whitespace and values that overflow are rejected.
pub fn parse_salary(raw: &str) -> Option<SalaryAmount> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}
