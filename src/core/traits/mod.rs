//! Core traits module
//!
//! Contains the abstract interface every provider adapter implements

pub mod provider;

pub use provider::LLMProvider;
