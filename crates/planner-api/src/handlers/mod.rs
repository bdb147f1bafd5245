//! HTTP request handlers.

pub mod auth;
pub mod events;
pub mod health;

pub use auth::{login, register};
pub use events::{
    add_attendee, create_event, delete_event, get_event, list_events, rsvp, update_event,
};
pub use health::health;
