//! Integration tests for llm-gateway
//!
//! Vendor adapters are exercised against local mock servers; nothing here
//! needs network access or real credentials.

pub mod registry_tests;
pub mod server_tests;
pub mod validation_tests;
