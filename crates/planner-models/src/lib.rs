//! Core data models for Planner.
//!
//! This crate provides the fundamental data types used throughout the
//! Planner system: events, attendees, users, and sessions.

pub mod builders;
pub mod event;
pub mod ids;
pub mod user;

// Re-export main types
pub use builders::EventBuilder;
pub use event::{Attendee, Event, Privacy, Recurrence, RsvpStatus};
pub use ids::{EventId, UserId};
pub use user::{Role, Session, User, UserSummary};
