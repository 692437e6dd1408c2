//! List locally stored events.

use anyhow::Result;
use nextgencal_core::config::NextgencalConfig;
use nextgencal_core::store::EventStore;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run() -> Result<()> {
    let config = NextgencalConfig::load()?;
    let store = EventStore::new(&config.data_path()?);
    let events = store.load()?;

    if events.is_empty() {
        println!("{}", "No events stored yet".dimmed());
        return Ok(());
    }

    for (i, event) in events.iter().enumerate() {
        println!("{:>3}. {}", i + 1, event.render());
    }

    Ok(())
}
