//! Provider deep-link URL generation.
//!
//! Builds "create event" URLs for Google Calendar and Outlook. The URLs are
//! only constructed here; opening them is the caller's concern.

use chrono::SecondsFormat;
use url::form_urlencoded;

use super::ics::format_utc_basic;
use super::{description, location};
use crate::event::Event;

const GOOGLE_RENDER_BASE: &str = "https://calendar.google.com/calendar/render";
const OUTLOOK_COMPOSE_BASE: &str = "https://outlook.live.com/calendar/0/deeplink/compose";

/// Deep link that pre-fills Google Calendar's event template.
///
/// The `dates` parameter uses the same UTC-basic format as the ICS
/// DTSTART/DTEND fields, start and end separated by `/`.
pub fn google_calendar_url(event: &Event) -> String {
    let start = event.start_instant();
    let end = event.end_instant();

    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("action", "TEMPLATE")
        .append_pair("text", &event.title)
        .append_pair(
            "dates",
            &format!("{}/{}", format_utc_basic(start), format_utc_basic(end)),
        )
        .append_pair("details", &description(event))
        .append_pair("location", &location(event))
        .finish();

    format!("{GOOGLE_RENDER_BASE}?{query}")
}

/// Deep link that pre-fills Outlook's compose-event page.
///
/// Unlike Google, `startdt`/`enddt` use full ISO-8601 UTC with punctuation
/// retained.
pub fn outlook_calendar_url(event: &Event) -> String {
    let start = event.start_instant();
    let end = event.end_instant();

    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("path", "/calendar/action/compose")
        .append_pair("rru", "addevent")
        .append_pair("subject", &event.title)
        .append_pair("startdt", &start.to_rfc3339_opts(SecondsFormat::Secs, true))
        .append_pair("enddt", &end.to_rfc3339_opts(SecondsFormat::Secs, true))
        .append_pair("body", &description(event))
        .append_pair("location", &location(event))
        .finish();

    format!("{OUTLOOK_COMPOSE_BASE}?{query}")
}
