//! The event details form.
//!
//! Collects raw field values (as typed, or prefilled from a search result)
//! and builds a validated [`Event`]. Field-level messages mirror the
//! assistant's original validation feedback.

use anyhow::{Result, anyhow, bail};
use chrono::Datelike;
use nextgencal_core::Event;

use crate::results::SearchResult;

/// Month names shown in the landing-page month selector.
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Zero-based index of the current month, the selector's default.
pub fn default_month_index() -> usize {
    chrono::Local::now().month0() as usize
}

/// Raw field values, exactly as typed.
#[derive(Debug, Clone, Default)]
pub struct EventForm {
    pub title: String,
    pub link: String,
    pub day: String,
    pub month: String,
    pub year: String,
    pub hours: String,
    pub minutes: String,
}

impl EventForm {
    /// Prefill from a search result, splitting its date and time strings.
    pub fn from_result(result: &SearchResult) -> Self {
        let mut form = EventForm {
            title: result.title.to_string(),
            link: result.link.to_string(),
            ..Default::default()
        };

        let mut date = result.date.splitn(3, '-');
        if let (Some(year), Some(month), Some(day)) = (date.next(), date.next(), date.next()) {
            form.year = year.to_string();
            form.month = month.to_string();
            form.day = day.to_string();
        }

        if let Some((hours, minutes)) = result.time.split_once(':') {
            form.hours = hours.to_string();
            form.minutes = minutes.to_string();
        }

        form
    }

    /// Parse and validate all fields, constructing the normalized event.
    pub fn build(&self) -> Result<Event> {
        let title = self.title.trim();
        if title.is_empty() {
            bail!("Event title is required");
        }

        let day = parse_field(&self.day, "Day", 1, 31)?;
        let month = parse_field(&self.month, "Month", 1, 12)?;
        let year = parse_field(&self.year, "Year", 2024, 2030)?;
        let hours = parse_field(&self.hours, "Hours", 0, 23)?;
        let minutes = parse_field(&self.minutes, "Minutes", 0, 59)?;

        let link = self.link.trim();
        let link = if link.is_empty() {
            None
        } else {
            Some(link.to_string())
        };

        let event = Event::new(title, link, year as i32, month, day, hours, minutes)?;
        Ok(event)
    }
}

fn parse_field(raw: &str, name: &str, min: u32, max: u32) -> Result<u32> {
    let raw = raw.trim();
    if raw.is_empty() {
        bail!("{name} is required");
    }

    let value: u32 = raw
        .parse()
        .map_err(|_| anyhow!("{name} must be a number"))?;

    if value < min || value > max {
        bail!("{name} must be between {min} and {max}");
    }

    Ok(value)
}
