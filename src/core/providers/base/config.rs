//! Configuration shared by every provider adapter

use serde::{Deserialize, Serialize};

/// Connection settings common to all adapters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseConfig {
    /// API key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// API base URL; the vendor default is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: u64,

    /// API version header value; only Anthropic sends one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
}

fn default_timeout() -> u64 {
    600
}

fn default_connect_timeout() -> u64 {
    10
}

impl Default for BaseConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: None,
            timeout: default_timeout(),
            connect_timeout: default_connect_timeout(),
            api_version: None,
        }
    }
}

impl BaseConfig {
    /// Configuration with an API key and vendor defaults
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Override the API base URL
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Override the API version
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = Some(api_version.into());
        self
    }

    /// Base URL without a trailing slash, falling back to `default`
    pub fn api_base_or(&self, default: &str) -> String {
        self.api_base
            .as_deref()
            .unwrap_or(default)
            .trim_end_matches('/')
            .to_string()
    }

    /// Check the settings every adapter relies on
    pub fn validate(&self, provider: &str) -> Result<(), String> {
        match self.api_key.as_deref() {
            None | Some("") => return Err(format!("{} API key is required", provider)),
            Some(_) => {}
        }

        if self.timeout == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }

        if let Some(api_base) = &self.api_base {
            if !api_base.starts_with("http://") && !api_base.starts_with("https://") {
                return Err(format!(
                    "{} API base must be an http(s) URL: {}",
                    provider, api_base
                ));
            }
        }

        Ok(())
    }
}
