//! Persistence layer for Planner.
//!
//! This crate provides crash-safe persistence for Planner state using
//! atomic file operations (write to temp file, then rename). Each
//! collection lives in a single JSON file that is rewritten in full on
//! every save, matching the single-writer model of the application.
//!
//! # Example
//!
//! ```no_run
//! use planner_persistence::EventStore;
//! use planner_models::{Event, EventBuilder};
//! use chrono::{NaiveDate, NaiveTime};
//!
//! let store = EventStore::new("/home/user/.planner");
//!
//! let event = EventBuilder::new(
//!     "Picnic",
//!     NaiveDate::from_ymd_opt(2026, 6, 1).unwrap(),
//!     NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
//!     NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
//!     "Park",
//! )
//! .build();
//!
//! store.save(&[event]).unwrap();
//! let events = store.load().unwrap();
//! ```

pub mod atomic;
pub mod error;
pub mod event_store;
pub mod session_store;
pub mod user_store;

pub use error::{PersistenceError, Result};
pub use event_store::EventStore;
pub use session_store::SessionStore;
pub use user_store::UserStore;
