//! Calendar export.
//!
//! Pure, stateless transformations from an [`Event`](crate::event::Event)
//! into the three artifacts external collaborators consume: an ICS text
//! document, a Google Calendar deep link, and an Outlook deep link, plus
//! the filename used when saving the ICS document.

mod filename;
mod ics;
mod links;

pub use filename::filename_for;
pub use ics::{format_utc_basic, parse_utc_basic, to_ics};
pub use links::{google_calendar_url, outlook_calendar_url};

use crate::event::Event;

/// DESCRIPTION/details/body text shared by all three export formats.
pub(crate) fn description(event: &Event) -> String {
    match &event.link {
        Some(link) => format!("Link: {link}"),
        None => "Calendar event".to_string(),
    }
}

/// LOCATION text shared by all three export formats.
pub(crate) fn location(event: &Event) -> String {
    event.link.clone().unwrap_or_else(|| "Online".to_string())
}
