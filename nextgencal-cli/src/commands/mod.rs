pub mod add;
pub mod events;
pub mod export;
pub mod search;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use nextgencal_core::Event;
use nextgencal_core::config::NextgencalConfig;

/// Simulated search latency, matching the original assistant's fixed delay.
pub const SEARCH_DELAY_MS: u64 = 1500;

/// Write the ICS document for an event into the configured export dir.
/// Returns the path written.
pub(crate) fn write_ics(config: &NextgencalConfig, event: &Event) -> Result<PathBuf> {
    let dir = config.export_path();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let path = dir.join(nextgencal_core::export::filename_for(&event.title));
    let content = nextgencal_core::export::to_ics(event, Utc::now());
    std::fs::write(&path, &content)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}
