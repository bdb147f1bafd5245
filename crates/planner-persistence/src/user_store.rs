//! Registered-user persistence.

use std::path::PathBuf;

use planner_models::User;

use crate::atomic::{atomic_write_json, read_json_optional};
use crate::error::Result;

/// Filename of the user list under the base directory.
const USERS_FILE: &str = "users.json";

/// Persists the registered-user list as a single JSON blob.
pub struct UserStore {
    base_path: PathBuf,
}

impl UserStore {
    /// Creates a new UserStore rooted at the given base path.
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    fn users_path(&self) -> PathBuf {
        self.base_path.join(USERS_FILE)
    }

    /// Loads all registered users; empty list when none have registered.
    pub fn load(&self) -> Result<Vec<User>> {
        Ok(read_json_optional(&self.users_path())?.unwrap_or_default())
    }

    /// Overwrites the stored user list.
    pub fn save(&self, users: &[User]) -> Result<()> {
        atomic_write_json(&self.users_path(), &users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planner_models::Role;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_is_empty() {
        let dir = tempdir().unwrap();
        let store = UserStore::new(dir.path());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let store = UserStore::new(dir.path());

        let user = User::new("Ada", "ada@example.com", "hash", Role::User);
        store.save(std::slice::from_ref(&user)).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].email, "ada@example.com");
        assert_eq!(loaded[0].password_hash, "hash");
    }
}
