//! Google Gemini Provider
//!
//! generateContent integration, registered under the name `google`.
//!
//! Unlike the other adapters, every failure is reported in-band: `generate`
//! returns `Ok` with [`GenerateResponse::error`] set instead of an error.
//!
//! [`GenerateResponse::error`]: crate::core::types::GenerateResponse::error

pub mod client;
pub mod models;

pub use client::{GeminiProvider, PAID_TIER_NOTE, PROVIDER_NAME};
pub use models::gemini_models;
