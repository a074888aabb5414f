use scraper::{ElementRef, Html, Selector};
use serde::Deserialize;

use crate::{
    salary_table::TeamSalaryTable,
    text_manipulators::{extract_text, parse_salary},
};

/// Header text of the cap-hold table, which lists qualifying offers rather
/// than salaries.
pub const CAP_HOLD_TABLE_MARKER: &str = "Qualifying Offer";

/// Which of the known page layouts to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Cap,
    Export,
}

/// Whole-table admission test, applied before any of its rows are looked at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableFilter {
    pub min_header_cells: usize,
    pub excluded_header_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionPolicy {
    pub min_cells: usize,
    pub name_cell: usize,
    pub salary_cell: usize,
    pub marker_class: String,
    pub salary_attribute: String,
    /// `None` scans every row in the document.
    pub table_filter: Option<TableFilter>,
}

impl ExtractionPolicy {
    /// Team cap page: 9+ column tables, salary sort key on the fifth cell.
    pub fn cap_table() -> Self {
        Self {
            min_cells: 9,
            name_cell: 0,
            salary_cell: 4,
            marker_class: "link".to_string(),
            salary_attribute: "data-sort".to_string(),
            table_filter: Some(TableFilter {
                min_header_cells: 9,
                excluded_header_text: CAP_HOLD_TABLE_MARKER.to_string(),
            }),
        }
    }

    /// Export layout: 4+ cells, raw figure in `data-export` on the fourth cell.
    pub fn export_table() -> Self {
        Self {
            min_cells: 4,
            name_cell: 0,
            salary_cell: 3,
            marker_class: "link".to_string(),
            salary_attribute: "data-export".to_string(),
            table_filter: None,
        }
    }

    pub fn for_layout(layout: Layout) -> Self {
        match layout {
            Layout::Cap => Self::cap_table(),
            Layout::Export => Self::export_table(),
        }
    }
}

struct RowSelectors {
    table: Selector,
    header: Selector,
    row: Selector,
    cell: Selector,
    anchor: Selector,
}

impl RowSelectors {
    fn new() -> anyhow::Result<Self> {
        Ok(Self {
            table: parse_selector("table")?,
            header: parse_selector("th")?,
            row: parse_selector("tr")?,
            cell: parse_selector("td")?,
            anchor: parse_selector("a")?,
        })
    }
}

fn parse_selector(css: &str) -> anyhow::Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow::anyhow!("invalid selector {css:?}: {e}"))
}

/// Pulls (player, salary) pairs out of a team page according to an
/// [`ExtractionPolicy`].
///
/// Extraction is best effort: markup that does not fit the policy is skipped
/// and an empty table is a normal result.
pub struct SalaryExtractor {
    policy: ExtractionPolicy,
    selectors: RowSelectors,
}

impl SalaryExtractor {
    pub fn new(policy: ExtractionPolicy) -> anyhow::Result<Self> {
        let selectors = RowSelectors::new()?;
        Ok(Self { policy, selectors })
    }

    pub fn extract(&self, html: &str) -> TeamSalaryTable {
        let document = Html::parse_document(html);
        let mut salaries = TeamSalaryTable::new();

        match &self.policy.table_filter {
            None => {
                for row in document.select(&self.selectors.row) {
                    self.read_row(row, &mut salaries);
                }
            }
            Some(filter) => {
                for table in document.select(&self.selectors.table) {
                    if !self.table_admitted(table, filter) {
                        continue;
                    }
                    for row in table.select(&self.selectors.row) {
                        self.read_row(row, &mut salaries);
                    }
                }
            }
        }

        salaries
    }

    fn table_admitted(&self, table: ElementRef, filter: &TableFilter) -> bool {
        let headers: Vec<String> = table
            .select(&self.selectors.header)
            .map(|th| extract_text(th).trim().to_string())
            .collect();
        if headers.is_empty() || headers.len() < filter.min_header_cells {
            return false;
        }
        !headers
            .iter()
            .any(|header| header.contains(&filter.excluded_header_text))
    }

    fn read_row(&self, row: ElementRef, salaries: &mut TeamSalaryTable) {
        let cells: Vec<ElementRef> = row.select(&self.selectors.cell).collect();
        if cells.len() < self.policy.min_cells {
            return;
        }
        let (Some(name_cell), Some(salary_cell)) = (
            cells.get(self.policy.name_cell),
            cells.get(self.policy.salary_cell),
        ) else {
            return;
        };

        let Some(anchor) = name_cell.select(&self.selectors.anchor).find(|a| {
            a.value()
                .classes()
                .any(|class| class == self.policy.marker_class)
        }) else {
            return;
        };
        let name = extract_text(anchor).trim().to_string();
        if name.is_empty() {
            return;
        }

        let Some(salary) = salary_cell
            .value()
            .attr(&self.policy.salary_attribute)
            .and_then(parse_salary)
        else {
            return;
        };

        salaries.insert(name, salary);
    }
}
