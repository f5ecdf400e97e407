//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::service::PasswordGenerator;

/// Application state shared by all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Password generation service.
    pub generator: Arc<PasswordGenerator>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        let generator = Arc::new(PasswordGenerator::new(&config.generator));

        Self { generator }
    }
}
