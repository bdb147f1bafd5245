//! The registered-user registry.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use planner_models::{Role, User};
use planner_persistence::UserStore;

use crate::error::{AuthError, Result};
use crate::password::{hash_password, verify_password};

/// Thread-safe registry of registered users, keyed by email.
///
/// The full user list is rewritten to the store after every successful
/// registration; login never mutates a user record.
pub struct UserRegistry {
    store: UserStore,
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl UserRegistry {
    /// Creates a registry rehydrated from the store.
    pub fn load(store: UserStore) -> Result<Self> {
        let users = store
            .load()?
            .into_iter()
            .map(|u| (u.email.clone(), u))
            .collect();
        Ok(Self {
            store,
            users: Arc::new(RwLock::new(users)),
        })
    }

    /// Registers a new user.
    ///
    /// Name, email, and password must be present and non-blank; the email
    /// must not already be registered. Returns the stored user. No token
    /// is issued here; the caller logs in afterwards.
    pub fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: Option<Role>,
    ) -> Result<User> {
        if name.trim().is_empty() {
            return Err(AuthError::MissingField("name"));
        }
        if email.trim().is_empty() {
            return Err(AuthError::MissingField("email"));
        }
        if password.is_empty() {
            return Err(AuthError::MissingField("password"));
        }

        let mut users = self
            .users
            .write()
            .map_err(|e| AuthError::LockPoisoned(e.to_string()))?;

        if users.contains_key(email) {
            return Err(AuthError::EmailTaken(email.to_string()));
        }

        let hash = hash_password(password)?;
        let user = User::new(name, email, hash, role.unwrap_or_default());

        users.insert(email.to_string(), user.clone());
        let all: Vec<User> = users.values().cloned().collect();
        self.store.save(&all)?;

        Ok(user)
    }

    /// Verifies credentials, returning the user on success.
    ///
    /// Unknown email and wrong password both answer
    /// [`AuthError::InvalidCredentials`].
    pub fn login(&self, email: &str, password: &str) -> Result<User> {
        if email.trim().is_empty() {
            return Err(AuthError::MissingField("email"));
        }
        if password.is_empty() {
            return Err(AuthError::MissingField("password"));
        }

        let users = self
            .users
            .read()
            .map_err(|e| AuthError::LockPoisoned(e.to_string()))?;

        let user = users.get(email).ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(&user.password_hash, password) {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(user.clone())
    }

    /// Looks up a user by email.
    pub fn get(&self, email: &str) -> Option<User> {
        self.users
            .read()
            .ok()
            .and_then(|users| users.get(email).cloned())
    }

    /// Number of registered users.
    pub fn len(&self) -> usize {
        self.users.read().map(|u| u.len()).unwrap_or(0)
    }

    /// Returns true if no users have registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
