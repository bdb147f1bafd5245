//! User and session types for the auth layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ids::UserId;

/// Role of a registered user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    User,
    Admin,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

/// A registered user as stored server-side.
///
/// The password is kept only as a salted argon2 hash. This type never
/// appears in API responses; use [`UserSummary`] there.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier.
    pub id: UserId,

    /// Display name.
    pub name: String,

    /// Email address, unique across users.
    pub email: String,

    /// Role of the user.
    #[serde(default)]
    pub role: Role,

    /// Encoded argon2 hash of the password.
    pub password_hash: String,

    /// When the user registered.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new user with a fresh id.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: UserId::new(),
            name: name.into(),
            email: email.into(),
            role,
            password_hash: password_hash.into(),
            created_at: Utc::now(),
        }
    }

    /// Returns the hash-free projection of this user.
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
        }
    }
}

/// The user fields safe to send to clients and persist locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        user.summary()
    }
}

/// A logged-in session: the signed token plus the user it belongs to.
///
/// Persisted client-side after a successful login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_omits_hash() {
        let user = User::new("Ada", "ada@example.com", "$argon2id$...", Role::Admin);
        let summary = user.summary();

        assert_eq!(summary.email, "ada@example.com");
        assert_eq!(summary.role, Role::Admin);

        let json = serde_json::to_string(&summary).unwrap();
        assert!(!json.contains("argon2"));
        assert!(!json.contains("password"));
    }

    #[test]
    fn test_role_default_is_user() {
        let summary: UserSummary = serde_json::from_str(
            r#"{"id": "user-1", "name": "Ada", "email": "ada@example.com"}"#,
        )
        .unwrap();
        assert_eq!(summary.role, Role::User);
    }

    #[test]
    fn test_session_roundtrip() {
        let user = User::new("Ada", "ada@example.com", "hash", Role::User);
        let session = Session {
            token: "token-abc".to_string(),
            user: user.summary(),
        };

        let json = serde_json::to_string(&session).unwrap();
        let parsed: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, session);
    }
}
