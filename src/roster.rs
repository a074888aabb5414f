use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use crate::salary_table::TeamLabel;

const BUILTIN_ROSTER: &str = include_str!("../data/roster.json");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RosterEntry {
    pub label: TeamLabel,
    pub url: String,
}

/// The teams to scrape, in the order their results are written out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    pub fn new(entries: Vec<RosterEntry>) -> anyhow::Result<Self> {
        if let Some(position) = entries.iter().position(|e| e.label.trim().is_empty()) {
            anyhow::bail!("roster entry {position} has an empty label");
        }
        Ok(Self { entries })
    }

    /// Every NBA team's cap page for the 2025 season.
    pub fn builtin() -> anyhow::Result<Self> {
        Self::from_json(BUILTIN_ROSTER).context("built-in roster is malformed")
    }

    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        let entries: Vec<RosterEntry> =
            serde_json::from_str(text).context("failed to parse roster JSON")?;
        Self::new(entries)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read roster from {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("invalid roster in {}", path.display()))
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
