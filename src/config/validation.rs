//! Configuration validation

use super::models::*;
use crate::utils::error::{GatewayError, Result};

/// Validate configuration
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(GatewayError::Config("Server host cannot be empty".to_string()));
        }
        if self.port == 0 {
            return Err(GatewayError::Config("Server port cannot be 0".to_string()));
        }
        if self.request_timeout == 0 {
            return Err(GatewayError::Config(
                "Request timeout must be greater than 0".to_string(),
            ));
        }
        if self.workers == Some(0) {
            return Err(GatewayError::Config(
                "Worker count must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

impl Validate for ProviderConfig {
    fn validate(&self) -> Result<()> {
        if let Some(api_base) = &self.api_base {
            if !api_base.starts_with("http://") && !api_base.starts_with("https://") {
                return Err(GatewayError::Config(format!(
                    "Provider API base must use http:// or https://, got: {}",
                    api_base
                )));
            }
        }
        Ok(())
    }
}

impl Validate for ProvidersConfig {
    fn validate(&self) -> Result<()> {
        self.openai.validate()?;
        self.anthropic.validate()?;
        self.google.validate()
    }
}
