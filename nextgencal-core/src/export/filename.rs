//! Download filename generation for exported ICS documents.

/// Filename for an exported event, derived from its title.
///
/// Every character outside `[A-Za-z0-9]` becomes `_`, the result is
/// lowercased, and `.ics` is appended.
pub fn filename_for(title: &str) -> String {
    let slug: String = title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();

    format!("{slug}.ics")
}
