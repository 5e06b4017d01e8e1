//! Unified Provider Error Handling
//!
//! Single error type for all provider adapters.
//!
//! | Variant | Purpose | Typical vendor status |
//! |------|------|------------|
//! | Configuration | Adapter could not be built | - |
//! | Authentication | Credential rejected | 401 / 403 |
//! | RateLimit | Vendor throttled the call | 429 |
//! | ModelNotFound | Unknown model | 404 |
//! | InvalidRequest | Vendor rejected the payload | 400 |
//! | Network | Transport failure | - |
//! | Timeout | Call exceeded its deadline | - |
//! | Serialization | Response body could not be decoded | - |
//! | ApiError | Any other vendor status | 5xx, others |
//!
//! ```rust,ignore
//! use llm_gateway::ProviderError;
//!
//! let err = ProviderError::authentication("openai", "Invalid API key");
//! let err = ProviderError::rate_limit("anthropic", "slow down", Some(60));
//! assert_eq!(err.provider(), "anthropic");
//! ```

/// Unified provider error type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProviderError {
    #[error("Configuration error for {provider}: {message}")]
    Configuration {
        provider: &'static str,
        message: String,
    },

    #[error("Authentication failed for {provider}: {message}")]
    Authentication {
        provider: &'static str,
        message: String,
    },

    #[error("Rate limit exceeded for {provider}: {message}")]
    RateLimit {
        provider: &'static str,
        message: String,
        retry_after: Option<u64>,
    },

    #[error("Model '{model}' not found for {provider}: {message}")]
    ModelNotFound {
        provider: &'static str,
        model: String,
        message: String,
    },

    #[error("Invalid request for {provider}: {message}")]
    InvalidRequest {
        provider: &'static str,
        message: String,
    },

    #[error("Network error for {provider}: {message}")]
    Network {
        provider: &'static str,
        message: String,
    },

    #[error("Timeout for {provider}: {message}")]
    Timeout {
        provider: &'static str,
        message: String,
    },

    #[error("Failed to parse {provider} response: {message}")]
    Serialization {
        provider: &'static str,
        message: String,
    },

    #[error("API error for {provider} (status {status}): {message}")]
    ApiError {
        provider: &'static str,
        status: u16,
        message: String,
    },
}

impl ProviderError {
    /// Create configuration error
    pub fn configuration(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Configuration {
            provider,
            message: message.into(),
        }
    }

    /// Create authentication error
    pub fn authentication(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Authentication {
            provider,
            message: message.into(),
        }
    }

    /// Create rate limit error, keeping the vendor's message
    pub fn rate_limit(
        provider: &'static str,
        message: impl Into<String>,
        retry_after: Option<u64>,
    ) -> Self {
        let message = message.into();
        Self::RateLimit {
            provider,
            message: match retry_after {
                Some(seconds) => format!("{} (retry after {} seconds)", message, seconds),
                None => message,
            },
            retry_after,
        }
    }

    /// Create model not found error
    pub fn model_not_found(
        provider: &'static str,
        model: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::ModelNotFound {
            provider,
            model: model.into(),
            message: message.into(),
        }
    }

    /// Create invalid request error
    pub fn invalid_request(provider: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            provider,
            message: message.into(),
        }
    }

    /// Create network error
    pub fn network(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Network {
            provider,
            message: message.into(),
        }
    }

    /// Create timeout error
    pub fn timeout(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Timeout {
            provider,
            message: message.into(),
        }
    }

    /// Create response parsing error
    pub fn serialization(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Serialization {
            provider,
            message: message.into(),
        }
    }

    /// Create API error with vendor status code
    pub fn api_error(provider: &'static str, status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            provider,
            status,
            message: message.into(),
        }
    }

    /// Name of the provider that produced the error
    pub fn provider(&self) -> &'static str {
        match self {
            Self::Configuration { provider, .. }
            | Self::Authentication { provider, .. }
            | Self::RateLimit { provider, .. }
            | Self::ModelNotFound { provider, .. }
            | Self::InvalidRequest { provider, .. }
            | Self::Network { provider, .. }
            | Self::Timeout { provider, .. }
            | Self::Serialization { provider, .. }
            | Self::ApiError { provider, .. } => *provider,
        }
    }
}
