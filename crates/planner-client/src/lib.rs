//! HTTP client for the Planner API.
//!
//! Wraps the auth endpoints and keeps the logged-in session on disk, so
//! the CLI (and any other caller) can stay logged in between runs.

pub mod auth;
pub mod error;

pub use auth::AuthClient;
pub use error::{ClientError, Result};
