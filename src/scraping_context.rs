use crate::{
    config::ScrapingConfig,
    league_scraper::LeagueScraper,
    requests::RequestClient,
    roster::Roster,
    salary_extractor::{ExtractionPolicy, SalaryExtractor},
};

pub struct ScrapingContext {
    pub scraping_config: ScrapingConfig,
    pub roster: Roster,
    pub league_scraper: LeagueScraper<RequestClient>,
}

impl ScrapingContext {
    pub fn new() -> anyhow::Result<Self> {
        Self::from_config(ScrapingConfig::new()?)
    }

    pub fn from_config(scraping_config: ScrapingConfig) -> anyhow::Result<Self> {
        let roster = match &scraping_config.roster_path {
            Some(path) => Roster::load(path)?,
            None => Roster::builtin()?,
        };
        let request_client = RequestClient::new(&scraping_config)?;
        let extractor = SalaryExtractor::new(ExtractionPolicy::for_layout(scraping_config.layout))?;
        let league_scraper =
            LeagueScraper::new(request_client, extractor, scraping_config.concurrency());
        Ok(ScrapingContext {
            scraping_config,
            roster,
            league_scraper,
        })
    }
}
