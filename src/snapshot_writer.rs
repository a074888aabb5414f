use std::path::Path;

use anyhow::Context;

use crate::salary_table::LeagueSalarySnapshot;

/// Writes the snapshot as pretty JSON (2-space indent), replacing any file
/// already at `path`.
pub fn write_snapshot(snapshot: &LeagueSalarySnapshot, path: &Path) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(snapshot).context("failed to serialize snapshot")?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write snapshot to {}", path.display()))?;
    Ok(())
}
