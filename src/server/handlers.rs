//! HTTP route handlers shared by every scope

use actix_web::{HttpRequest, HttpResponse, error::JsonPayloadError};
use serde_json::json;
use tracing::debug;

use crate::utils::error::{ErrorResponse, GatewayError};

/// Health check endpoint handler
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Unknown route
pub async fn not_found(req: HttpRequest) -> HttpResponse {
    debug!(method = %req.method(), path = %req.path(), "No route matched");
    HttpResponse::NotFound().json(ErrorResponse::new("Not found"))
}

/// Known route, wrong method
pub async fn method_not_allowed(req: HttpRequest) -> HttpResponse {
    debug!(method = %req.method(), path = %req.path(), "Method not allowed");
    HttpResponse::MethodNotAllowed().json(ErrorResponse::new("Method not allowed"))
}

/// Turn body extraction failures into the gateway's JSON error shape
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "Rejected request body");
    GatewayError::InvalidJson(err.to_string()).into()
}
