//! Event store for Planner.
//!
//! State management is a single pure reducer over the event list, wrapped
//! by a thread-safe [`EventManager`] that persists the full list after
//! every successful mutation:
//!
//! - [`EventAction`] — the five mutations the list supports
//! - [`reduce`] — pure `(list, action) -> new list`
//! - [`EventManager`] — dispatch, validation, persistence, rehydration
//!
//! # Example
//!
//! ```no_run
//! use planner_events::EventManager;
//! use planner_persistence::EventStore;
//! use planner_models::{Attendee, EventBuilder, RsvpStatus};
//! use chrono::{NaiveDate, NaiveTime};
//!
//! let store = EventStore::new("/tmp/planner");
//! let manager = EventManager::load(store).unwrap();
//!
//! let event = EventBuilder::new(
//!     "Standup",
//!     NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
//!     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
//!     NaiveTime::from_hms_opt(9, 15, 0).unwrap(),
//!     "Office",
//! )
//! .build();
//!
//! let id = manager.add_event(event).unwrap();
//! manager.add_attendee(&id, Attendee::new("a@example.com")).unwrap();
//! manager.rsvp(&id, "a@example.com", RsvpStatus::Yes).unwrap();
//! ```

pub mod action;
pub mod error;
pub mod manager;
pub mod reducer;
pub mod validate;

pub use action::EventAction;
pub use error::{EventError, Result};
pub use manager::EventManager;
pub use reducer::reduce;
pub use validate::validate_event;
