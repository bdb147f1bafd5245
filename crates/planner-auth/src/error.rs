//! Error types for auth operations.

use planner_persistence::PersistenceError;
use thiserror::Error;

/// Errors that can occur during registration and login.
#[derive(Error, Debug)]
pub enum AuthError {
    /// A required field was missing or blank.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// The email is already registered.
    #[error("email already registered: {0}")]
    EmailTaken(String),

    /// Unknown email or wrong password. Deliberately not distinguished.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Password hashing failed.
    #[error("password hashing failed: {0}")]
    Hash(#[from] argon2::Error),

    /// Token signing or verification failed.
    #[error("token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Persistence error.
    #[error("persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    /// Lock poisoned (thread panicked while holding lock).
    #[error("lock poisoned: {0}")]
    LockPoisoned(String),
}

/// Result type alias for auth operations.
pub type Result<T> = std::result::Result<T, AuthError>;
