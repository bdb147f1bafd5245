//! Client error types.

use thiserror::Error;

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors from talking to the Planner API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request itself failed (connection refused, timeout, bad URL).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with an error status.
    #[error("api error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Reading or writing the local session failed.
    #[error("session error: {0}")]
    Persistence(#[from] planner_persistence::PersistenceError),
}
