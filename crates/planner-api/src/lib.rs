//! REST API for Planner.
//!
//! This crate exposes the event store and the auth layer over HTTP:
//! - Registration and login (`/api/auth/register`, `/api/auth/login`)
//! - Event CRUD, attendee invites, and RSVP updates (`/api/events...`)
//! - Filtered, sorted, paginated event listing
//! - Health check (`/api/health`)
//!
//! # Example
//!
//! ```ignore
//! use planner_api::{ApiConfig, AppState, serve};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApiConfig::from_env();
//!     let state = AppState::open(config.clone(), "/home/user/.planner")?;
//!     serve(config, state).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
pub mod types;

pub use config::ApiConfig;
pub use error::{ApiError, Result};
pub use router::{create_router, serve};
pub use state::AppState;
