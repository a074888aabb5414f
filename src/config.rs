use std::{path::PathBuf, time::Duration};

use anyhow::Context;
use serde::{Deserialize, de::DeserializeOwned};

use crate::salary_extractor::Layout;

pub const ENV_PREFIX: &str = "CAPSHEET_";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Runtime settings. Every field has a default, so an empty environment
/// yields the standard run: built-in roster, cap layout, `nba_salaries.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct ScrapingConfig {
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default)]
    pub layout: Layout,
    #[serde(default)]
    pub roster_path: Option<PathBuf>,
    #[serde(default = "default_max_concurrent_fetches")]
    pub max_concurrent_fetches: usize,
}

fn default_output_path() -> PathBuf {
    PathBuf::from("nba_salaries.json")
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_max_concurrent_fetches() -> usize {
    1
}

impl Default for ScrapingConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            layout: Layout::default(),
            roster_path: None,
            max_concurrent_fetches: default_max_concurrent_fetches(),
        }
    }
}

impl ScrapingConfig {
    pub fn new() -> anyhow::Result<Self> {
        Self::load_from_env()
    }

    /// Per-request timeout; zero is raised to one second.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    pub fn concurrency(&self) -> usize {
        self.max_concurrent_fetches.max(1)
    }
}

// Extension trait.
pub trait LoadFromEnv: DeserializeOwned {
    fn load_from_env() -> anyhow::Result<Self> {
        // Don't throw an error if .env file doesn't exist.
        let _ = dotenv::dotenv();
        let config = envy::prefixed(ENV_PREFIX)
            .from_env::<Self>()
            .context("failed to load env variables into config struct")?;
        Ok(config)
    }
}

impl<T: DeserializeOwned> LoadFromEnv for T {}
