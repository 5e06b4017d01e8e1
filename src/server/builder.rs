//! Server builder and run_server function

use tracing::info;

use crate::config::Config;
use crate::core::providers::ProviderRegistry;
use crate::server::server::HttpServer;
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
    registry: Option<ProviderRegistry>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Use a prepared registry instead of building one from credentials
    pub fn with_registry(mut self, registry: ProviderRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Build the HTTP server
    pub fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| GatewayError::Config("Configuration is required".to_string()))?;
        config.validate()?;

        let state = match self.registry {
            Some(registry) => AppState::new(config, registry),
            None => AppState::from_config(config),
        };
        Ok(HttpServer::with_state(state))
    }
}

/// Run the server with a loaded configuration
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting LLM gateway v{}", env!("CARGO_PKG_VERSION"));

    let server = ServerBuilder::new().with_config(config).build()?;
    info!("API endpoints:");
    info!("   POST /generate - Generate a response");
    info!("   GET  /providers - Configured providers");
    info!("   GET  /models - Models of every provider");
    info!("   GET  /models/{{provider}} - Models of one provider");
    info!("   GET  /health - Health check");

    server.start().await
}
