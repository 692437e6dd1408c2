//! The locally persisted event list.
//!
//! Events live in a single JSON file with a fixed name under the data
//! directory. The store is append-only from the caller's perspective: an
//! event is added once and never mutated.

use std::path::{Path, PathBuf};

use crate::error::{NextgencalError, NextgencalResult};
use crate::event::Event;

/// Fixed filename for the persisted event list.
const EVENTS_FILE: &str = "events.json";

pub struct EventStore {
    path: PathBuf,
}

impl EventStore {
    /// Store rooted at the given data directory.
    pub fn new(data_dir: &Path) -> Self {
        EventStore {
            path: data_dir.join(EVENTS_FILE),
        }
    }

    /// Load the stored event list. A missing file is an empty list; a
    /// corrupt file is an error rather than a silent reset.
    pub fn load(&self) -> NextgencalResult<Vec<Event>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&content).map_err(|e| {
            NextgencalError::Store(format!("Could not parse {}: {e}", self.path.display()))
        })
    }

    /// Append an event and rewrite the list.
    pub fn append(&self, event: &Event) -> NextgencalResult<()> {
        let mut events = self.load()?;
        events.push(event.clone());

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(&events)
            .map_err(|e| NextgencalError::Store(e.to_string()))?;
        std::fs::write(&self.path, content)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(title: &str) -> Event {
        Event::new(title, None, 2024, 8, 2, 10, 30).unwrap()
    }

    #[test]
    fn missing_file_is_an_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let store = EventStore::new(dir.path());

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn append_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = EventStore::new(dir.path());

        let first = sample("Technical Interview");
        let second = sample("Final Interview");
        store.append(&first).unwrap();
        store.append(&second).unwrap();

        let events = store.load().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].id, first.id);
        assert_eq!(events[0].title, "Technical Interview");
        assert_eq!(events[1].id, second.id);
        assert_eq!(events[1].date, second.date);
        assert_eq!(events[1].time, second.time);
    }

    #[test]
    fn append_creates_the_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("deep").join("nested");
        let store = EventStore::new(&nested);

        store.append(&sample("Portfolio Review")).unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(EVENTS_FILE), "not json").unwrap();

        let store = EventStore::new(dir.path());
        let err = store.load().unwrap_err();
        assert!(matches!(err, NextgencalError::Store(_)));
    }
}
