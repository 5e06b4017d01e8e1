//! Application state shared across HTTP handlers

use std::sync::Arc;

use crate::config::Config;
use crate::core::completion::Dispatcher;
use crate::core::providers::ProviderRegistry;

/// HTTP server state shared across handlers
///
/// Cloning is cheap; every field is reference counted.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// Providers currently usable
    pub registry: Arc<ProviderRegistry>,
    /// Routes generate requests through `registry`
    pub dispatcher: Dispatcher,
}

impl AppState {
    /// Create state around an existing registry
    pub fn new(config: Config, registry: ProviderRegistry) -> Self {
        let registry = Arc::new(registry);
        let dispatcher = Dispatcher::new(registry.clone(), config.server.request_timeout());
        Self {
            config: Arc::new(config),
            registry,
            dispatcher,
        }
    }

    /// Create state with providers built from the configured credentials
    pub fn from_config(config: Config) -> Self {
        let registry = ProviderRegistry::from_config(&config.providers);
        Self::new(config, registry)
    }

    /// Get gateway configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
