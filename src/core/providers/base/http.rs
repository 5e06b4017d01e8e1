//! HTTP plumbing shared by the vendor adapters
//!
//! Client construction, request execution and mapping of vendor HTTP
//! failures onto [`ProviderError`].

use std::time::Duration;

use reqwest::header::RETRY_AFTER;
use reqwest::{Client, ClientBuilder, RequestBuilder, Response};
use serde_json::Value;

use super::config::BaseConfig;
use crate::core::providers::unified_provider::ProviderError;

/// User agent sent to every vendor
pub const USER_AGENT: &str = concat!("llm-gateway/", env!("CARGO_PKG_VERSION"));

/// Build the long-lived HTTP client an adapter owns
pub fn build_http_client(
    provider: &'static str,
    config: &BaseConfig,
) -> Result<Client, ProviderError> {
    ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout))
        .connect_timeout(Duration::from_secs(config.connect_timeout))
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| ProviderError::network(provider, format!("Failed to create HTTP client: {}", e)))
}

/// Send a prepared request and decode a successful JSON body
///
/// Transport errors are reported without the request URL.
pub async fn send_json(
    provider: &'static str,
    request: RequestBuilder,
    model: &str,
) -> Result<Value, ProviderError> {
    let response = request.send().await.map_err(|e| {
        if e.is_timeout() {
            ProviderError::timeout(provider, "Request timeout")
        } else {
            ProviderError::network(provider, format!("Network error: {}", e.without_url()))
        }
    })?;

    handle_response(provider, response, model).await
}

/// Check the status and parse the body
async fn handle_response(
    provider: &'static str,
    response: Response,
    model: &str,
) -> Result<Value, ProviderError> {
    let status = response.status().as_u16();
    let retry_after = response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok());

    let body = response
        .text()
        .await
        .map_err(|e| {
            ProviderError::network(provider, format!("Failed to read response: {}", e.without_url()))
        })?;

    if !(200..300).contains(&status) {
        return Err(map_http_error(provider, status, &body, model, retry_after));
    }

    serde_json::from_str(&body)
        .map_err(|e| ProviderError::serialization(provider, format!("Failed to parse JSON: {}", e)))
}

/// Map a non-success vendor status onto the unified error
pub fn map_http_error(
    provider: &'static str,
    status: u16,
    body: &str,
    model: &str,
    retry_after: Option<u64>,
) -> ProviderError {
    let message = extract_error_message(body);
    match status {
        400 => ProviderError::invalid_request(provider, message),
        401 | 403 => ProviderError::authentication(provider, message),
        404 => ProviderError::model_not_found(provider, model, message),
        429 => ProviderError::rate_limit(
            provider,
            message,
            retry_after.or_else(|| extract_retry_after(body)),
        ),
        _ => ProviderError::api_error(provider, status, message),
    }
}

/// Vendor error text from `{"error": {"message": ...}}`, `{"error": "..."}` or the raw body
pub fn extract_error_message(body: &str) -> String {
    let from_json = serde_json::from_str::<Value>(body).ok().and_then(|json| {
        let error = json.get("error")?;
        error
            .get("message")
            .and_then(Value::as_str)
            .or_else(|| error.as_str())
            .map(str::to_string)
    });

    match from_json {
        Some(message) => message,
        None if body.trim().is_empty() => "empty response body".to_string(),
        None => body.trim().to_string(),
    }
}

/// Retry delay carried in an error body
fn extract_retry_after(body: &str) -> Option<u64> {
    let json = serde_json::from_str::<Value>(body).ok()?;
    json.get("retry_after")
        .or_else(|| json.get("error").and_then(|e| e.get("retry_after")))
        .and_then(Value::as_u64)
}
