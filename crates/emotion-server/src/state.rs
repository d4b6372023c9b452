//! Application state shared by all handlers.
//!
//! [`AppState`] is built once from [`Config`] at startup and cloned into each
//! handler by axum. It holds no mutable state, so handlers never lock.

use std::sync::Arc;

use crate::classifier::ClassificationClient;
use crate::config::Config;
use crate::error::ConfigError;

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// Outbound inference client (credential and model baked in).
    pub classifier: Arc<ClassificationClient>,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let classifier = ClassificationClient::new(config)?;

        Ok(AppState {
            classifier: Arc::new(classifier),
        })
    }
}
