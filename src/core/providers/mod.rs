//! Provider adapters and the registry that tracks which ones are usable

// Base infrastructure
pub mod base;

// Provider modules
pub mod anthropic;
pub mod gemini;
pub mod openai;

// Registry and unified error
pub mod provider_registry;
pub mod unified_provider;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

pub use crate::core::traits::LLMProvider;
pub use anthropic::AnthropicProvider;
pub use base::BaseConfig;
pub use gemini::GeminiProvider;
pub use openai::OpenAIProvider;
pub use provider_registry::ProviderRegistry;
pub use unified_provider::ProviderError;

/// Vendors the gateway knows how to talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProviderType {
    OpenAI,
    Anthropic,
    Google,
}

impl ProviderType {
    /// Every supported vendor
    pub const ALL: [ProviderType; 3] = [Self::OpenAI, Self::Anthropic, Self::Google];

    /// Registry key of the vendor's adapter
    pub fn name(&self) -> &'static str {
        match self {
            Self::OpenAI => openai::PROVIDER_NAME,
            Self::Anthropic => anthropic::PROVIDER_NAME,
            Self::Google => gemini::PROVIDER_NAME,
        }
    }
}

impl fmt::Display for ProviderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProviderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(Self::OpenAI),
            "anthropic" => Ok(Self::Anthropic),
            "google" | "gemini" => Ok(Self::Google),
            other => Err(format!("Unknown provider: {}", other)),
        }
    }
}

/// Build the adapter for a vendor
pub fn create_provider(
    provider_type: ProviderType,
    config: BaseConfig,
) -> Result<Arc<dyn LLMProvider>, ProviderError> {
    Ok(match provider_type {
        ProviderType::OpenAI => Arc::new(OpenAIProvider::new(config)?),
        ProviderType::Anthropic => Arc::new(AnthropicProvider::new(config)?),
        ProviderType::Google => Arc::new(GeminiProvider::new(config)?),
    })
}
