//! Add an event directly from the command line.

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use nextgencal_core::Event;
use nextgencal_core::config::NextgencalConfig;
use nextgencal_core::export;
use nextgencal_core::store::EventStore;
use owo_colors::OwoColorize;

pub fn run(title: &str, link: Option<String>, date: &str, time: &str) -> Result<()> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .with_context(|| format!("Could not parse date: \"{date}\" (expected YYYY-MM-DD)"))?;
    let time = NaiveTime::parse_from_str(time, "%H:%M")
        .with_context(|| format!("Could not parse time: \"{time}\" (expected HH:MM)"))?;

    let event = Event::new(
        title,
        link,
        date.year(),
        date.month(),
        date.day(),
        time.hour(),
        time.minute(),
    )?;

    let config = NextgencalConfig::load()?;
    let store = EventStore::new(&config.data_path()?);
    store.append(&event)?;

    let path = super::write_ics(&config, &event)?;

    println!("{}", format!("Created: {}", event.title).green());
    println!("  {} {}", "ICS:".dimmed(), path.display());
    println!(
        "  {} {}",
        "Google:".dimmed(),
        export::google_calendar_url(&event)
    );
    println!(
        "  {} {}",
        "Outlook:".dimmed(),
        export::outlook_calendar_url(&event)
    );

    Ok(())
}
