//! Client-side session persistence.
//!
//! Holds the signed token plus the user summary returned by a successful
//! login. Nothing is written for a failed login.

use std::fs;
use std::path::PathBuf;

use planner_models::Session;

use crate::atomic::{atomic_write_json, read_json_optional};
use crate::error::{PersistenceError, Result};

/// Filename of the session snapshot under the base directory.
const SESSION_FILE: &str = "session.json";

/// Persists the logged-in session snapshot.
pub struct SessionStore {
    base_path: PathBuf,
}

impl SessionStore {
    /// Creates a new SessionStore rooted at the given base path.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn session_path(&self) -> PathBuf {
        self.base_path.join(SESSION_FILE)
    }

    /// Loads the stored session, if logged in.
    pub fn load(&self) -> Result<Option<Session>> {
        read_json_optional(&self.session_path())
    }

    /// Saves the session after a successful login.
    pub fn save(&self, session: &Session) -> Result<()> {
        atomic_write_json(&self.session_path(), session)
    }

    /// Removes the stored session on logout. Idempotent.
    pub fn clear(&self) -> Result<()> {
        let path = self.session_path();
        if path.exists() {
            fs::remove_file(&path).map_err(|source| PersistenceError::WriteError { path, source })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_models::{Role, User};
    use tempfile::tempdir;

    fn make_session() -> Session {
        let user = User::new("Ada", "ada@example.com", "hash", Role::User);
        Session {
            token: "jwt-token".to_string(),
            user: user.summary(),
        }
    }

    #[test]
    fn test_load_missing_is_none() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_load_clear() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path());

        let session = make_session();
        store.save(&session).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, session);

        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = SessionStore::new(dir.path());

        store.clear().unwrap();
        store.clear().unwrap();
    }
}
