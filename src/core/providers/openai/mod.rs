//! OpenAI Provider
//!
//! Chat Completions integration: messages are forwarded with their roles
//! unchanged and vendor failures propagate as [`ProviderError`].
//!
//! [`ProviderError`]: crate::core::providers::unified_provider::ProviderError

pub mod client;
pub mod models;

pub use client::{OpenAIProvider, PROVIDER_NAME};
pub use models::openai_models;
