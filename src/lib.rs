//! # LLM Gateway
//!
//! One HTTP API in front of several text-generation vendors. Callers send a
//! uniform `{provider, model, messages, options}` request; the gateway
//! validates it, routes it to the named provider adapter and returns a
//! uniform `{provider, model, response, usage, error}` response.
//!
//! ## Features
//!
//! - **Provider contract**: every vendor adapter implements [`LLMProvider`]
//! - **Registry**: adapters are registered only when their credential is set
//! - **Adapters**: OpenAI, Anthropic and Google Gemini
//! - **Validation**: every structural problem in a request is reported at once
//!
//! ## Gateway Mode
//!
//! ```rust,no_run
//! use llm_gateway::{Config, Gateway};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     Gateway::new(config)?.run().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Library Mode
//!
//! ```rust,no_run
//! use llm_gateway::{Dispatcher, GenerateRequest, Message, ProviderRegistry, ProviderType};
//! use llm_gateway::core::providers::BaseConfig;
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! # async fn run() -> llm_gateway::Result<()> {
//! let registry = Arc::new(ProviderRegistry::new());
//! registry.try_register(ProviderType::Anthropic, BaseConfig::with_api_key("sk-ant-..."));
//!
//! let dispatcher = Dispatcher::new(registry, Duration::from_secs(60));
//! let request = GenerateRequest::new(
//!     "anthropic",
//!     "claude-3-haiku-20240307",
//!     vec![Message::user("What is the capital of France?")],
//! );
//! let response = dispatcher.generate(request).await?;
//! println!("{}", response.response);
//! # Ok(())
//! # }
//! ```

#![allow(clippy::module_inception)]
#![warn(clippy::all)]

pub mod config;
pub mod core;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::completion::Dispatcher;
pub use core::providers::{LLMProvider, ProviderError, ProviderRegistry, ProviderType};
pub use core::types::{
    GenerateOptions, GenerateRequest, GenerateResponse, Message, MessageRole, ModelInfo, Usage,
};
pub use utils::error::{GatewayError, Result};

use tracing::info;

/// The gateway HTTP service
pub struct Gateway {
    server: server::HttpServer,
}

impl Gateway {
    /// Create a new gateway instance
    pub fn new(config: Config) -> Result<Self> {
        info!("Creating new gateway instance");
        let server = server::ServerBuilder::new().with_config(config).build()?;
        Ok(Self { server })
    }

    /// Providers that were successfully registered
    pub fn providers(&self) -> Vec<String> {
        self.server.state().registry.list_names()
    }

    /// Run the gateway server
    pub async fn run(self) -> Result<()> {
        self.server.start().await
    }
}

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
