//! Anthropic Messages API client

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Map, Value, json};
use tracing::debug;

use super::models::anthropic_models;
use crate::core::providers::base::{BaseConfig, build_http_client, send_json};
use crate::core::providers::unified_provider::ProviderError;
use crate::core::traits::LLMProvider;
use crate::core::types::{
    GenerateOptions, GenerateResponse, Message, MessageRole, ModelInfo, Usage,
};

/// Registry key for this adapter
pub const PROVIDER_NAME: &str = "anthropic";

const DEFAULT_API_BASE: &str = "https://api.anthropic.com";
const DEFAULT_API_VERSION: &str = "2023-06-01";
const DEFAULT_MAX_TOKENS: u32 = 1024;

/// Anthropic provider
#[derive(Debug)]
pub struct AnthropicProvider {
    client: Client,
    api_key: String,
    api_base: String,
    api_version: String,
    models: Vec<ModelInfo>,
}

impl AnthropicProvider {
    /// Build the adapter and its HTTP client
    pub fn new(config: BaseConfig) -> Result<Self, ProviderError> {
        config
            .validate(PROVIDER_NAME)
            .map_err(|e| ProviderError::configuration(PROVIDER_NAME, e))?;

        let client = build_http_client(PROVIDER_NAME, &config)?;
        let api_base = config.api_base_or(DEFAULT_API_BASE);
        let api_version = config
            .api_version
            .clone()
            .unwrap_or_else(|| DEFAULT_API_VERSION.to_string());

        Ok(Self {
            client,
            api_key: config.api_key.unwrap_or_default(),
            api_base,
            api_version,
            models: anthropic_models(),
        })
    }

    /// Vendor role for a gateway role
    pub fn map_role(role: MessageRole) -> &'static str {
        match role {
            MessageRole::Assistant => "assistant",
            MessageRole::System | MessageRole::User => "user",
        }
    }

    /// Build the Messages API request body
    pub fn transform_request(model: &str, messages: &[Message], options: &GenerateOptions) -> Value {
        let mut body = Map::new();
        body.insert("model".to_string(), json!(model));
        body.insert(
            "messages".to_string(),
            messages
                .iter()
                .map(|m| json!({"role": Self::map_role(m.role), "content": m.content}))
                .collect(),
        );
        body.insert(
            "max_tokens".to_string(),
            json!(options.u32("max_tokens").unwrap_or(DEFAULT_MAX_TOKENS)),
        );

        if let Some(temperature) = options.f64("temperature") {
            body.insert("temperature".to_string(), json!(temperature));
        }
        if let Some(top_p) = options.f64("top_p") {
            body.insert("top_p".to_string(), json!(top_p));
        }
        if let Some(top_k) = options.u32("top_k") {
            body.insert("top_k".to_string(), json!(top_k));
        }
        if let Some(stop) = options.string_list("stop") {
            body.insert("stop_sequences".to_string(), json!(stop));
        }

        Value::Object(body)
    }

    /// Concatenate text blocks and normalize usage
    pub fn transform_response(model: &str, response: &Value) -> Result<GenerateResponse, ProviderError> {
        let blocks = response
            .get("content")
            .and_then(Value::as_array)
            .ok_or_else(|| ProviderError::serialization(PROVIDER_NAME, "Response has no content"))?;

        let text: String = blocks
            .iter()
            .filter(|block| block.get("type").and_then(Value::as_str) == Some("text"))
            .filter_map(|block| block.get("text").and_then(Value::as_str))
            .collect();

        let usage = response.get("usage").and_then(|usage| {
            Usage::from_counts(
                ["input_tokens", "output_tokens"]
                    .into_iter()
                    .map(|field| (field, usage.get(field).and_then(Value::as_u64))),
            )
        });

        Ok(GenerateResponse::success(PROVIDER_NAME, model, text, usage))
    }
}

#[async_trait]
impl LLMProvider for AnthropicProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn available_models(&self) -> &[ModelInfo] {
        &self.models
    }

    async fn generate(
        &self,
        model: &str,
        messages: &[Message],
        options: &GenerateOptions,
    ) -> Result<GenerateResponse, ProviderError> {
        let body = Self::transform_request(model, messages, options);
        debug!(model, messages = messages.len(), "Sending Anthropic message request");

        let request = self
            .client
            .post(format!("{}/v1/messages", self.api_base))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", &self.api_version)
            .json(&body);

        let response = send_json(PROVIDER_NAME, request, model).await?;
        Self::transform_response(model, &response)
    }
}
