//! The normalized calendar event.
//!
//! An `Event` is constructed once, after validation, and never mutated.
//! Its `date`/`time` fields are local wall-clock values; the UTC instants
//! used by the export module are derived on demand.

use chrono::{DateTime, Duration, Local, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use crate::error::{NextgencalError, NextgencalResult};

/// Every event blocks exactly one hour. Not configurable.
const EVENT_DURATION_MINUTES: i64 = 60;

/// A validated calendar event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Opaque unique identifier (UUID v4), assigned at construction.
    pub id: String,
    pub title: String,
    /// Meeting link. `None` renders as "Online" / "Calendar event" in exports.
    pub link: Option<String>,
    /// Local wall-clock date of the event start.
    pub date: NaiveDate,
    /// Local start time-of-day.
    pub time: NaiveTime,
    /// When the record was created. Informational only.
    pub created_at: DateTime<Utc>,
}

impl Event {
    /// Build a validated event from raw field values.
    ///
    /// Fails with [`NextgencalError::InvalidEvent`] if the title is empty,
    /// the date or time fields are out of range, or the link is present but
    /// not a parseable URL.
    pub fn new(
        title: &str,
        link: Option<String>,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    ) -> NextgencalResult<Self> {
        let title = title.trim();
        if title.is_empty() {
            return Err(NextgencalError::InvalidEvent(
                "Event title must not be empty".to_string(),
            ));
        }

        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            NextgencalError::InvalidEvent(format!("Invalid date: {year:04}-{month:02}-{day:02}"))
        })?;

        let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| {
            NextgencalError::InvalidEvent(format!("Invalid time: {hour:02}:{minute:02}"))
        })?;

        let link = match link {
            Some(raw) => {
                let raw = raw.trim();
                Url::parse(raw).map_err(|_| {
                    NextgencalError::InvalidEvent(format!("Invalid link URL: {raw}"))
                })?;
                Some(raw.to_string())
            }
            None => None,
        };

        Ok(Event {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            link,
            date,
            time,
            created_at: Utc::now(),
        })
    }

    /// The event start as a UTC instant.
    ///
    /// `date` + `time` are interpreted in the local timezone. Ambiguous
    /// local times (DST fold) take the earlier mapping; nonexistent local
    /// times (DST gap) are interpreted as UTC.
    pub fn start_instant(&self) -> DateTime<Utc> {
        let naive = self.date.and_time(self.time);
        match Local.from_local_datetime(&naive) {
            LocalResult::Single(dt) => dt.with_timezone(&Utc),
            LocalResult::Ambiguous(earlier, _) => earlier.with_timezone(&Utc),
            LocalResult::None => naive.and_utc(),
        }
    }

    /// The event end: always exactly 60 minutes after [`Self::start_instant`].
    pub fn end_instant(&self) -> DateTime<Utc> {
        self.start_instant() + Duration::minutes(EVENT_DURATION_MINUTES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_validated_event() {
        let event = Event::new(
            "Final Interview",
            Some("https://zoom.us/j/123456789".to_string()),
            2024,
            8,
            2,
            10,
            30,
        )
        .unwrap();

        assert_eq!(event.title, "Final Interview");
        assert_eq!(event.link.as_deref(), Some("https://zoom.us/j/123456789"));
        assert_eq!(event.date, NaiveDate::from_ymd_opt(2024, 8, 2).unwrap());
        assert_eq!(event.time, NaiveTime::from_hms_opt(10, 30, 0).unwrap());
        assert!(!event.id.is_empty());
    }

    #[test]
    fn trims_title_and_link() {
        let event = Event::new(
            "  Technical Interview  ",
            Some(" https://meet.google.com/abc-defg-hij ".to_string()),
            2024,
            8,
            1,
            14,
            0,
        )
        .unwrap();

        assert_eq!(event.title, "Technical Interview");
        assert_eq!(
            event.link.as_deref(),
            Some("https://meet.google.com/abc-defg-hij")
        );
    }

    #[test]
    fn rejects_empty_title() {
        let err = Event::new("   ", None, 2024, 8, 2, 10, 30).unwrap_err();
        assert!(matches!(err, NextgencalError::InvalidEvent(_)));
    }

    #[test]
    fn rejects_out_of_range_date() {
        assert!(Event::new("x", None, 2024, 13, 1, 10, 0).is_err());
        assert!(Event::new("x", None, 2024, 2, 30, 10, 0).is_err());
        assert!(Event::new("x", None, 2024, 8, 32, 10, 0).is_err());
    }

    #[test]
    fn rejects_out_of_range_time() {
        assert!(Event::new("x", None, 2024, 8, 2, 24, 0).is_err());
        assert!(Event::new("x", None, 2024, 8, 2, 10, 60).is_err());
    }

    #[test]
    fn rejects_unparseable_link() {
        let err = Event::new("x", Some("not a url".to_string()), 2024, 8, 2, 10, 30).unwrap_err();
        assert!(matches!(err, NextgencalError::InvalidEvent(_)));

        // Relative links are not well-formed URLs either
        assert!(Event::new("x", Some("zoom.us/j/123".to_string()), 2024, 8, 2, 10, 30).is_err());
    }

    #[test]
    fn end_is_always_sixty_minutes_after_start() {
        let event = Event::new("x", None, 2024, 8, 2, 10, 30).unwrap();
        assert_eq!(
            event.end_instant() - event.start_instant(),
            Duration::minutes(60)
        );

        // Also across a midnight boundary
        let late = Event::new("x", None, 2024, 12, 31, 23, 30).unwrap();
        assert_eq!(
            late.end_instant() - late.start_instant(),
            Duration::minutes(60)
        );
    }

    #[test]
    fn serde_round_trip() {
        let event = Event::new("Portfolio Review", None, 2024, 9, 1, 16, 0).unwrap();
        let json = serde_json::to_string(&event).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();

        assert_eq!(back.id, event.id);
        assert_eq!(back.title, event.title);
        assert_eq!(back.date, event.date);
        assert_eq!(back.time, event.time);
        assert_eq!(back.created_at, event.created_at);
    }
}
