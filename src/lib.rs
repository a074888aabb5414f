pub mod cap_thresholds;
pub mod config;
pub mod fetch_error;
pub mod league_scraper;
pub mod requests;
pub mod roster;
pub mod salary_extractor;
pub mod salary_table;
pub mod scraping_context;
pub mod snapshot_writer;
mod text_manipulators;

pub use cap_thresholds::{CapThresholds, Threshold};
pub use config::ScrapingConfig;
pub use fetch_error::FetchError;
pub use league_scraper::LeagueScraper;
pub use requests::{PageFetcher, RequestClient};
pub use roster::{Roster, RosterEntry};
pub use salary_extractor::{ExtractionPolicy, Layout, SalaryExtractor, TableFilter};
pub use salary_table::{LeagueSalarySnapshot, TeamSalaryTable};
pub use scraping_context::ScrapingContext;
pub use snapshot_writer::write_snapshot;
