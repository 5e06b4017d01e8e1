//! Provider Registry
//!
//! Name-keyed map of the adapters that are currently usable. Handlers clone
//! the `Arc` they need out of the map and never hold the lock across I/O.

use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

use super::{BaseConfig, LLMProvider, ProviderType, create_provider};
use crate::config::ProvidersConfig;
use crate::utils::error::{GatewayError, Result};

/// Provider Registry
#[derive(Default)]
pub struct ProviderRegistry {
    providers: RwLock<BTreeMap<String, Arc<dyn LLMProvider>>>,
}

impl ProviderRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every vendor that has a credential configured
    ///
    /// A vendor whose adapter fails to build is skipped with a warning; an
    /// empty registry is a valid result.
    pub fn from_config(config: &ProvidersConfig) -> Self {
        let registry = Self::new();
        for (provider_type, base) in config.configured() {
            registry.try_register(provider_type, base);
        }

        if registry.is_empty() {
            warn!("No providers configured; set OPENAI_API_KEY, ANTHROPIC_API_KEY or GOOGLE_API_KEY");
        }
        registry
    }

    /// Build and register one vendor, logging instead of failing
    pub fn try_register(&self, provider_type: ProviderType, config: BaseConfig) -> bool {
        match create_provider(provider_type, config) {
            Ok(provider) => {
                self.register(provider);
                true
            }
            Err(e) => {
                warn!(provider = %provider_type, error = %e, "Failed to initialize provider");
                false
            }
        }
    }

    /// Register a provider, replacing any previous one with the same name
    pub fn register(&self, provider: Arc<dyn LLMProvider>) {
        let name = provider.name().to_string();
        info!(provider = %name, models = provider.available_models().len(), "Registered provider");
        self.providers.write().insert(name, provider);
    }

    /// Remove a provider; absent names are ignored
    pub fn unregister(&self, name: &str) -> Option<Arc<dyn LLMProvider>> {
        let removed = self.providers.write().remove(name);
        if removed.is_some() {
            info!(provider = %name, "Unregistered provider");
        }
        removed
    }

    /// Look up a provider by name
    pub fn get(&self, name: &str) -> Result<Arc<dyn LLMProvider>> {
        self.providers
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| GatewayError::not_configured(name))
    }

    /// Registered names in sorted order
    pub fn list_names(&self) -> Vec<String> {
        self.providers.read().keys().cloned().collect()
    }

    /// Snapshot of every registered provider, sorted by name
    pub fn all(&self) -> Vec<Arc<dyn LLMProvider>> {
        self.providers.read().values().cloned().collect()
    }

    /// Swap the whole mapping in one step
    pub fn replace_all(&self, providers: impl IntoIterator<Item = Arc<dyn LLMProvider>>) {
        let next: BTreeMap<_, _> = providers
            .into_iter()
            .map(|p| (p.name().to_string(), p))
            .collect();
        info!(providers = ?next.keys().collect::<Vec<_>>(), "Replaced provider set");
        *self.providers.write() = next;
    }

    /// Check if provider is registered
    pub fn contains(&self, name: &str) -> bool {
        self.providers.read().contains_key(name)
    }

    /// Get provider count
    pub fn len(&self) -> usize {
        self.providers.read().len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.providers.read().is_empty()
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.list_names())
            .finish()
    }
}
