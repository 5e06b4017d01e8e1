//! HTTP response handling for errors

use super::types::GatewayError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};

/// Single-message error body: `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    /// Create an error body
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Accumulated validation failures: `{"errors": ["...", ...]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub errors: Vec<String>,
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::Validation(_)
            | GatewayError::NotConfigured(_)
            | GatewayError::InvalidJson(_) => StatusCode::BAD_REQUEST,
            GatewayError::AdapterFailure(_)
            | GatewayError::Config(_)
            | GatewayError::Server(_)
            | GatewayError::Io(_)
            | GatewayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        match self {
            GatewayError::Validation(errors) => {
                HttpResponse::build(status).json(ValidationErrorResponse {
                    errors: errors.clone(),
                })
            }
            GatewayError::NotConfigured(_)
            | GatewayError::AdapterFailure(_)
            | GatewayError::InvalidJson(_) => {
                HttpResponse::build(status).json(ErrorResponse::new(self.to_string()))
            }
            _ => HttpResponse::build(status).json(ErrorResponse::new("Internal server error")),
        }
    }
}
