//! Shared application state for the Axum server.

use std::sync::Arc;

use crate::config::AppConfig;

/// Shared application state, cloned into every handler.
///
/// Holds nothing mutable: the configuration snapshot is fixed at startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
