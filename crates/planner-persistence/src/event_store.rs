//! Event list persistence.
//!
//! The whole event list lives in one JSON file and is rewritten in full
//! after every mutation. There is no incremental diffing; the list is
//! small and local, and the atomic rename keeps each rewrite crash-safe.

use std::path::PathBuf;

use planner_models::Event;

use crate::atomic::{atomic_write_json, read_json_optional};
use crate::error::Result;

/// Filename of the event list blob under the base directory.
const EVENTS_FILE: &str = "events.json";

/// Persists the event list as a single JSON blob.
///
/// ```text
/// base_path/
/// └── events.json
/// ```
pub struct EventStore {
    base_path: PathBuf,
}

impl EventStore {
    /// Creates a new EventStore rooted at the given base path.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn events_path(&self) -> PathBuf {
        self.base_path.join(EVENTS_FILE)
    }

    /// Loads the stored event list.
    ///
    /// A missing file means no events yet and yields an empty list. A file
    /// that exists but does not parse surfaces as
    /// [`crate::PersistenceError::Corrupt`] so the caller can report it
    /// instead of silently losing data.
    pub fn load(&self) -> Result<Vec<Event>> {
        Ok(read_json_optional(&self.events_path())?.unwrap_or_default())
    }

    /// Overwrites the stored event list unconditionally.
    pub fn save(&self, events: &[Event]) -> Result<()> {
        atomic_write_json(&self.events_path(), &events)
    }
}
