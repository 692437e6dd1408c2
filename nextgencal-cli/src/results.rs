//! Mock search results.
//!
//! There is no real search: the assistant always returns the same three
//! interview slots, whatever the job description and month.

#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Event date as YYYY-MM-DD.
    pub date: &'static str,
    /// Start time as HH:MM, 24-hour.
    pub time: &'static str,
    pub title: &'static str,
    pub link: &'static str,
    pub description: &'static str,
}

pub fn mock_results() -> Vec<SearchResult> {
    vec![
        SearchResult {
            date: "2024-08-01",
            time: "14:00",
            title: "Technical Interview",
            link: "https://meet.google.com/abc-defg-hij",
            description: "Senior Developer Interview - Technical Assessment",
        },
        SearchResult {
            date: "2024-08-02",
            time: "10:30",
            title: "Final Interview",
            link: "https://zoom.us/j/123456789",
            description: "Product Manager Role - Final Round Interview",
        },
        SearchResult {
            date: "2024-09-01",
            time: "16:00",
            title: "Portfolio Review",
            link: "https://teams.microsoft.com/l/meetup",
            description: "UX Designer Position - Portfolio Review",
        },
    ]
}
