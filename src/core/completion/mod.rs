//! Generation dispatcher
//!
//! Takes a `/generate` body from receipt to outcome:
//! validate, resolve the provider, then run the adapter call on its own task
//! under the request timeout.

use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use crate::core::providers::ProviderRegistry;
use crate::core::types::{GenerateRequest, GenerateResponse};
use crate::utils::data::RequestValidator;
use crate::utils::error::{GatewayError, Result};

/// Routes generate requests to registered providers
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Arc<ProviderRegistry>,
    request_timeout: Duration,
}

impl Dispatcher {
    /// Create a dispatcher over a shared registry
    pub fn new(registry: Arc<ProviderRegistry>, request_timeout: Duration) -> Self {
        Self {
            registry,
            request_timeout,
        }
    }

    /// Registry this dispatcher routes through
    pub fn registry(&self) -> &Arc<ProviderRegistry> {
        &self.registry
    }

    /// Upper bound on a single adapter call
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Validate a raw body and generate
    pub async fn dispatch(&self, body: &Value) -> Result<GenerateResponse> {
        let errors = RequestValidator::validate_generate_request(body);
        if !errors.is_empty() {
            warn!(errors = ?errors, "Rejected invalid generate request");
            return Err(GatewayError::Validation(errors));
        }

        let request: GenerateRequest = serde_json::from_value(body.clone())
            .map_err(|e| GatewayError::internal(format!("Failed to decode request: {}", e)))?;
        self.generate(request).await
    }

    /// Route an already validated request
    ///
    /// An adapter error or timeout becomes [`GatewayError::AdapterFailure`]; a
    /// panic inside the adapter becomes [`GatewayError::Internal`]. A response
    /// carrying an in-band error is returned unchanged.
    pub async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse> {
        let provider = self.registry.get(&request.provider)?;
        let GenerateRequest {
            provider: provider_name,
            model,
            messages,
            options,
        } = request;

        debug!(
            provider = %provider_name,
            model = %model,
            messages = messages.len(),
            options = options.len(),
            "Dispatching generate request"
        );

        let task_model = model.clone();
        let handle = tokio::spawn(async move {
            provider.generate(&task_model, &messages, &options).await
        });
        let abort = handle.abort_handle();

        match tokio::time::timeout(self.request_timeout, handle).await {
            Ok(Ok(Ok(response))) => {
                if let Some(in_band) = &response.error {
                    warn!(provider = %provider_name, model = %model, error = %in_band, "Provider reported an error");
                } else {
                    info!(provider = %provider_name, model = %model, "Generated response");
                }
                Ok(response)
            }
            Ok(Ok(Err(e))) => {
                error!(provider = %provider_name, model = %model, error = %e, "Provider call failed");
                Err(e.into())
            }
            Ok(Err(join_error)) => {
                error!(provider = %provider_name, model = %model, error = %join_error, "Provider task aborted");
                Err(GatewayError::internal(join_error.to_string()))
            }
            Err(_) => {
                abort.abort();
                let secs = self.request_timeout.as_secs_f64();
                error!(provider = %provider_name, model = %model, timeout_secs = secs, "Provider call timed out");
                Err(GatewayError::AdapterFailure(format!(
                    "Request to {} timed out after {}s",
                    provider_name, secs
                )))
            }
        }
    }
}
