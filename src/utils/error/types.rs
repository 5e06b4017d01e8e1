//! Error types for the Gateway

use crate::core::providers::unified_provider::ProviderError;
use thiserror::Error;

/// Result type alias for the Gateway
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Main error type for the Gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Request body failed schema validation; every violation is kept
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// The requested provider is not in the registry
    #[error("Provider '{0}' not configured")]
    NotConfigured(String),

    /// A provider adapter call failed
    #[error("Failed to generate response: {0}")]
    AdapterFailure(String),

    /// Request body could not be decoded
    #[error("Invalid JSON body: {0}")]
    InvalidJson(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP server errors
    #[error("Server error: {0}")]
    Server(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Anything else; the detail is logged but not returned to clients
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a server error
    pub fn server(msg: impl Into<String>) -> Self {
        Self::Server(msg.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Create a not-configured error for a provider name
    pub fn not_configured(provider: impl Into<String>) -> Self {
        Self::NotConfigured(provider.into())
    }
}

impl From<ProviderError> for GatewayError {
    fn from(error: ProviderError) -> Self {
        Self::AdapterFailure(error.to_string())
    }
}
