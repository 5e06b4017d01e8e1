//! Provider credentials

use serde::{Deserialize, Serialize};

use crate::core::providers::{BaseConfig, ProviderType};

/// Credential and endpoint for one vendor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// API key; `None` leaves the vendor unregistered
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    /// Base URL override
    pub api_base: Option<String>,
    /// API version override
    #[serde(default)]
    pub api_version: Option<String>,
}

impl ProviderConfig {
    /// Config with only a key set; empty keys count as absent
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        let api_key = api_key.into();
        Self {
            api_key: (!api_key.is_empty()).then_some(api_key),
            ..Self::default()
        }
    }

    /// Whether a usable credential is present
    pub fn is_configured(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }
}

/// Credentials for every supported vendor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvidersConfig {
    #[serde(default)]
    pub openai: ProviderConfig,
    #[serde(default)]
    pub anthropic: ProviderConfig,
    #[serde(default)]
    pub google: ProviderConfig,
    /// Adapter HTTP timeout in seconds
    #[serde(default = "super::default_timeout")]
    pub timeout: u64,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            openai: ProviderConfig::default(),
            anthropic: ProviderConfig::default(),
            google: ProviderConfig::default(),
            timeout: super::default_timeout(),
        }
    }
}

impl ProvidersConfig {
    /// Settings for one vendor
    pub fn get(&self, provider_type: ProviderType) -> &ProviderConfig {
        match provider_type {
            ProviderType::OpenAI => &self.openai,
            ProviderType::Anthropic => &self.anthropic,
            ProviderType::Google => &self.google,
        }
    }

    /// Mutable settings for one vendor
    pub fn get_mut(&mut self, provider_type: ProviderType) -> &mut ProviderConfig {
        match provider_type {
            ProviderType::OpenAI => &mut self.openai,
            ProviderType::Anthropic => &mut self.anthropic,
            ProviderType::Google => &mut self.google,
        }
    }

    /// Adapter configs for the vendors that have a credential
    pub fn configured(&self) -> Vec<(ProviderType, BaseConfig)> {
        ProviderType::ALL
            .into_iter()
            .filter(|t| self.get(*t).is_configured())
            .map(|t| {
                let provider = self.get(t);
                let mut base = BaseConfig::default().with_timeout(self.timeout);
                base.api_key = provider.api_key.clone();
                base.api_base = provider.api_base.clone();
                base.api_version = provider.api_version.clone();
                (t, base)
            })
            .collect()
    }
}
