//! Core LLM Provider trait definitions
//!
//! Defines the unified interface for all AI providers

use async_trait::async_trait;
use std::fmt::Debug;

use crate::core::providers::unified_provider::ProviderError;
use crate::core::types::{GenerateOptions, GenerateResponse, Message, ModelInfo};

/// Unified LLM Provider interface
///
/// Every backend adapter implements this trait and callers only ever hold an
/// `Arc<dyn LLMProvider>`, never an adapter-specific type.
///
/// # Failure reporting
///
/// `generate` has two ways to report a vendor failure:
///
/// - return `Err(ProviderError)`, which the dispatcher turns into a
///   `500` response, or
/// - return `Ok` with [`GenerateResponse::error`] set, which is relayed to
///   the caller as a normal `200` response.
///
/// Which one an adapter uses is its own documented policy.
///
/// # Example
///
/// ```rust,ignore
/// use async_trait::async_trait;
///
/// #[async_trait]
/// impl LLMProvider for MyProvider {
///     fn name(&self) -> &str {
///         "my_provider"
///     }
///
///     fn available_models(&self) -> &[ModelInfo] {
///         &self.models
///     }
///
///     async fn generate(
///         &self,
///         model: &str,
///         messages: &[Message],
///         options: &GenerateOptions,
///     ) -> Result<GenerateResponse, ProviderError> {
///         // translate, call the vendor, translate back
///     }
/// }
/// ```
#[async_trait]
pub trait LLMProvider: Send + Sync + Debug {
    /// Stable lowercase identifier, used as the registry key and echoed in responses
    fn name(&self) -> &str;

    /// Static model catalog in display order; no network access
    fn available_models(&self) -> &[ModelInfo];

    /// Perform one generation round trip
    ///
    /// `messages` is borrowed and never modified. Unrecognized `options` keys
    /// are ignored.
    async fn generate(
        &self,
        model: &str,
        messages: &[Message],
        options: &GenerateOptions,
    ) -> Result<GenerateResponse, ProviderError>;

    /// Check whether a model is in the advertised catalog
    fn supports_model(&self, model: &str) -> bool {
        self.available_models().iter().any(|m| m.id == model)
    }
}
