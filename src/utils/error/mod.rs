//! Error handling for the Gateway
//!
//! This module defines the gateway-level error type and its HTTP rendering.

mod response;
mod types;

pub use response::{ErrorResponse, ValidationErrorResponse};
pub use types::{GatewayError, Result};
