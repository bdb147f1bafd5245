//! Application state shared across handlers.

use std::path::Path;
use std::sync::Arc;

use planner_auth::{TokenSigner, UserRegistry};
use planner_events::EventManager;
use planner_persistence::{EventStore, UserStore};

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// API configuration.
    pub config: Arc<ApiConfig>,
    /// Event list manager.
    pub events: Arc<EventManager>,
    /// Registered users.
    pub users: Arc<UserRegistry>,
    /// Session token signer.
    pub signer: Arc<TokenSigner>,
}

impl AppState {
    /// Creates a new AppState from already-built components.
    pub fn new(config: ApiConfig, events: EventManager, users: UserRegistry) -> Self {
        let signer = TokenSigner::new(&config.jwt_secret);
        Self {
            config: Arc::new(config),
            events: Arc::new(events),
            users: Arc::new(users),
            signer: Arc::new(signer),
        }
    }

    /// Opens the stores under the given state directory and rehydrates.
    pub fn open(config: ApiConfig, state_dir: impl AsRef<Path>) -> Result<Self> {
        let state_dir = state_dir.as_ref();
        let events = EventManager::load(EventStore::new(state_dir))
            .map_err(|e| ApiError::Internal(e.to_string()))?;
        let users = UserRegistry::load(UserStore::new(state_dir))
            .map_err(|e| ApiError::Internal(e.to_string()))?;
        Ok(Self::new(config, events, users))
    }
}
