//! Application state management

use std::sync::Arc;

use sqlx::MySqlPool;

use crate::config::Config;
use crate::reviews::ReviewClient;

/// Shared application state
///
/// Everything here is read-only after startup; per-request values such
/// as the current letter and offset travel through handler parameters.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    db: MySqlPool,
    reviews: ReviewClient,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: Config, db: MySqlPool, reviews: ReviewClient) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                db,
                reviews,
            }),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get the store pool
    pub fn db(&self) -> &MySqlPool {
        &self.inner.db
    }

    /// Get the review API client
    pub fn reviews(&self) -> &ReviewClient {
        &self.inner.reviews
    }
}
