//! Application state for the proxy service.

use std::sync::Arc;

use common::config::{AppConfig, AuroraConfig};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub aurora: Arc<AuroraConfig>,
    pub http_client: reqwest::Client,
}

impl AppState {
    /// Creates a new application state.
    ///
    /// The client keeps reqwest's defaults, which means no request timeout.
    pub fn new(config: AppConfig, aurora: AuroraConfig) -> Self {
        Self {
            config,
            aurora: Arc::new(aurora),
            http_client: reqwest::Client::new(),
        }
    }
}
