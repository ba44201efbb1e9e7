//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::{Config, StatusPolicy};
use crate::infra::{Database, UserRepository, UserStore};

/// Application state shared across handlers.
///
/// The repository is injected rather than global, so tests can hand in a
/// mock or an in-memory store per router.
#[derive(Clone)]
pub struct AppState {
    /// User repository
    pub users: Arc<dyn UserRepository>,
    /// Failure to HTTP status mapping
    pub status_policy: StatusPolicy,
}

impl AppState {
    /// Create new application state with a manually injected repository.
    pub fn new(users: Arc<dyn UserRepository>, status_policy: StatusPolicy) -> Self {
        Self {
            users,
            status_policy,
        }
    }

    /// Create application state backed by the given database.
    pub fn from_config(database: &Database, config: &Config) -> Self {
        let users = Arc::new(UserStore::new(database.get_connection()));
        Self::new(users, config.status_policy)
    }
}
