//! Utility modules for the Gateway
//!
//! - **data**: request validation
//! - **error**: crate error type and its HTTP rendering
//! - **logging**: tracing subscriber setup

pub mod data;
pub mod error;
pub mod logging;
