//! Error types for event store operations.

use planner_persistence::PersistenceError;
use thiserror::Error;

/// Errors that can occur during event store operations.
#[derive(Error, Debug)]
pub enum EventError {
    /// Event not found.
    #[error("event not found: {0}")]
    NotFound(String),

    /// Attendee not found on the event.
    #[error("attendee not found: {0}")]
    AttendeeNotFound(String),

    /// Attendee email already invited to the event.
    #[error("attendee already added: {0}")]
    DuplicateAttendee(String),

    /// Event draft failed validation.
    #[error("invalid event: {0}")]
    Validation(String),

    /// Persistence error.
    #[error("persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    /// Lock poisoned (thread panicked while holding lock).
    #[error("lock poisoned: {0}")]
    LockPoisoned(String),
}

/// Result type alias for event store operations.
pub type Result<T> = std::result::Result<T, EventError>;
