use futures::stream::{self, StreamExt};
use log::{info, warn};

use crate::{
    cap_thresholds::CapThresholds,
    fetch_error::FetchError,
    requests::PageFetcher,
    roster::{Roster, RosterEntry},
    salary_extractor::SalaryExtractor,
    salary_table::{LeagueSalarySnapshot, TeamSalaryTable},
};

/// Runs the fetch-then-extract cycle for every team on a roster.
pub struct LeagueScraper<F> {
    fetcher: F,
    extractor: SalaryExtractor,
    concurrency: usize,
    thresholds: CapThresholds,
}

/// One-line payroll summary used in the per-team log.
pub fn team_summary(label: &str, table: &TeamSalaryTable, thresholds: &CapThresholds) -> String {
    let payroll = table.total_payroll();
    let standing = match thresholds.highest_crossed(payroll) {
        Some(threshold) => format!("over {threshold}"),
        None => "under Salary Cap".to_string(),
    };
    format!(
        "{label}: {} players, payroll {payroll}, cap space {}, {standing}",
        table.len(),
        thresholds.cap_space(payroll)
    )
}

impl<F: PageFetcher> LeagueScraper<F> {
    pub fn new(fetcher: F, extractor: SalaryExtractor, concurrency: usize) -> Self {
        Self {
            fetcher,
            extractor,
            concurrency: concurrency.max(1),
            thresholds: CapThresholds::default(),
        }
    }

    pub async fn scrape_team(&self, entry: &RosterEntry) -> Result<TeamSalaryTable, FetchError> {
        let html = self.fetcher.fetch_page(&entry.url).await?;
        Ok(self.extractor.extract(&html))
    }

    /// Scrapes the whole roster. A team whose page cannot be fetched gets an
    /// empty table; nothing here aborts the batch.
    ///
    /// `on_team_done` is called once per entry, in completion order. The
    /// returned snapshot is always in roster order.
    pub async fn scrape(
        &self,
        roster: &Roster,
        mut on_team_done: impl FnMut(&RosterEntry),
    ) -> LeagueSalarySnapshot {
        let mut tables: Vec<Option<TeamSalaryTable>> = vec![None; roster.len()];

        let mut outcomes = stream::iter(roster.entries().iter().enumerate())
            .map(|(index, entry)| async move { (index, self.scrape_team(entry).await) })
            .buffer_unordered(self.concurrency);

        while let Some((index, outcome)) = outcomes.next().await {
            let entry = &roster.entries()[index];
            let table = match outcome {
                Ok(table) => {
                    info!("{}", team_summary(&entry.label, &table, &self.thresholds));
                    table
                }
                Err(e) => {
                    warn!("{}: {e}", entry.label);
                    TeamSalaryTable::new()
                }
            };
            tables[index] = Some(table);
            on_team_done(entry);
        }

        let mut snapshot = LeagueSalarySnapshot::new();
        for (entry, table) in roster.entries().iter().zip(tables) {
            snapshot.insert(entry.label.clone(), table.unwrap_or_default());
        }
        snapshot
    }
}
