//! ICS document generation.
//!
//! The output is a fixed, ordered sequence of lines joined with CRLF.
//! Reserved ICS characters in title/link are not escaped; the output stays
//! byte-compatible with what downstream calendar apps already accept from
//! this exporter.

use chrono::{DateTime, NaiveDateTime, Utc};

use super::{description, location};
use crate::event::Event;

/// Identifies this product in generated VCALENDARs.
const PRODID: &str = "-//Next Gen Calendar//EN";

/// Domain part of VEVENT UIDs, keeping them globally unique per event id.
const UID_DOMAIN: &str = "nextgencalendar.com";

/// Generate the ICS document for an event.
///
/// `now` populates the DTSTAMP field and must be supplied by the caller so
/// the function stays deterministic. Two calls with the same event are
/// byte-identical except for that line.
pub fn to_ics(event: &Event, now: DateTime<Utc>) -> String {
    let start = event.start_instant();
    let end = event.end_instant();

    [
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{PRODID}"),
        "CALSCALE:GREGORIAN".to_string(),
        "METHOD:PUBLISH".to_string(),
        "BEGIN:VEVENT".to_string(),
        format!("UID:event-{}@{}", event.id, UID_DOMAIN),
        format!("DTSTART:{}", format_utc_basic(start)),
        format!("DTEND:{}", format_utc_basic(end)),
        format!("DTSTAMP:{}", format_utc_basic(now)),
        format!("SUMMARY:{}", event.title),
        format!("DESCRIPTION:{}", description(event)),
        format!("LOCATION:{}", location(event)),
        "STATUS:CONFIRMED".to_string(),
        "TRANSP:OPAQUE".to_string(),
        "END:VEVENT".to_string(),
        "END:VCALENDAR".to_string(),
    ]
    .join("\r\n")
}

/// Format an instant in the UTC "basic" form used by DTSTART/DTEND/DTSTAMP
/// and by Google's `dates` parameter: `YYYYMMDDTHHMMSSZ`, whole seconds.
pub fn format_utc_basic(instant: DateTime<Utc>) -> String {
    instant.format("%Y%m%dT%H%M%SZ").to_string()
}

/// Parse a UTC "basic" datetime back into an instant.
///
/// Inverse of [`format_utc_basic`]: formatting the parsed value reproduces
/// the input exactly.
pub fn parse_utc_basic(value: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, "%Y%m%dT%H%M%SZ")
        .ok()
        .map(|naive| naive.and_utc())
}
