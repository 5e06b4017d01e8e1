//! Anthropic Provider
//!
//! Messages API integration. Anthropic only accepts `user` and `assistant`
//! turns, so `system` messages are sent as `user` turns in place.

pub mod client;
pub mod models;

pub use client::{AnthropicProvider, PROVIDER_NAME};
pub use models::anthropic_models;
