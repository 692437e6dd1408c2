//! Terminal rendering for nextgencal types.
//!
//! Colored one-line renderings with owo_colors, plus the human-readable
//! date/time helpers used in event listings.

use chrono::{NaiveDate, NaiveTime};
use nextgencal_core::Event;
use owo_colors::OwoColorize;

use crate::results::SearchResult;

/// Extension trait for terminal rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let when = format!("{} at {}", long_date(self.date), twelve_hour(self.time));
        let place = self.link.as_deref().unwrap_or("Online");

        format!("{} {} {}", self.title.bold(), when, place.dimmed())
    }
}

impl Render for SearchResult {
    fn render(&self) -> String {
        format!(
            "{} ({} {}) {}",
            self.title.bold(),
            self.date,
            self.time,
            self.description.dimmed()
        )
    }
}

/// Long-form date, e.g. "Friday, August 2, 2024".
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// 12-hour clock time, e.g. "10:30 AM".
pub fn twelve_hour(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_date_spells_out_the_weekday() {
        let date = NaiveDate::from_ymd_opt(2024, 8, 2).unwrap();
        assert_eq!(long_date(date), "Friday, August 2, 2024");
    }

    #[test]
    fn twelve_hour_morning_and_afternoon() {
        assert_eq!(
            twelve_hour(NaiveTime::from_hms_opt(10, 30, 0).unwrap()),
            "10:30 AM"
        );
        assert_eq!(
            twelve_hour(NaiveTime::from_hms_opt(16, 0, 0).unwrap()),
            "4:00 PM"
        );
        assert_eq!(
            twelve_hour(NaiveTime::from_hms_opt(0, 5, 0).unwrap()),
            "12:05 AM"
        );
    }
}
