//! Re-export a stored event.

use anyhow::{Result, bail};
use nextgencal_core::config::NextgencalConfig;
use nextgencal_core::export;
use nextgencal_core::store::EventStore;
use owo_colors::OwoColorize;

pub fn run(number: usize) -> Result<()> {
    let config = NextgencalConfig::load()?;
    let store = EventStore::new(&config.data_path()?);
    let events = store.load()?;

    if number == 0 || number > events.len() {
        bail!(
            "No stored event #{number} ({} stored). Run `nextgencal events` to list them.",
            events.len()
        );
    }
    let event = &events[number - 1];

    let path = super::write_ics(&config, event)?;

    println!("{}", format!("Exported: {}", event.title).green());
    println!("  {} {}", "ICS:".dimmed(), path.display());
    println!(
        "  {} {}",
        "Google:".dimmed(),
        export::google_calendar_url(event)
    );
    println!(
        "  {} {}",
        "Outlook:".dimmed(),
        export::outlook_calendar_url(event)
    );

    Ok(())
}
