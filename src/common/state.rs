use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::config::Config;

/// Shared handler state: the connection pool and immutable configuration.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }

    /// Current wall-clock time in the configured timezone, truncated to seconds.
    pub fn now_local(&self) -> chrono::NaiveDateTime {
        super::time::now_in(&self.config.timezone)
    }
}
