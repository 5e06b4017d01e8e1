//! OpenAI Chat Completions client

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Map, Value, json};
use tracing::debug;

use super::models::openai_models;
use crate::core::providers::base::{BaseConfig, build_http_client, send_json};
use crate::core::providers::unified_provider::ProviderError;
use crate::core::traits::LLMProvider;
use crate::core::types::{GenerateOptions, GenerateResponse, Message, ModelInfo, Usage};

/// Registry key for this adapter
pub const PROVIDER_NAME: &str = "openai";

const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

const FLOAT_OPTIONS: &[&str] = &["temperature", "top_p", "frequency_penalty", "presence_penalty"];

/// OpenAI provider
#[derive(Debug)]
pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    api_base: String,
    models: Vec<ModelInfo>,
}

impl OpenAIProvider {
    /// Build the adapter and its HTTP client
    pub fn new(config: BaseConfig) -> Result<Self, ProviderError> {
        config
            .validate(PROVIDER_NAME)
            .map_err(|e| ProviderError::configuration(PROVIDER_NAME, e))?;

        let client = build_http_client(PROVIDER_NAME, &config)?;
        let api_base = config.api_base_or(DEFAULT_API_BASE);

        Ok(Self {
            client,
            api_key: config.api_key.unwrap_or_default(),
            api_base,
            models: openai_models(),
        })
    }

    /// Build the Chat Completions request body
    pub fn transform_request(model: &str, messages: &[Message], options: &GenerateOptions) -> Value {
        let mut body = Map::new();
        body.insert("model".to_string(), json!(model));
        body.insert(
            "messages".to_string(),
            messages
                .iter()
                .map(|m| json!({"role": m.role.as_str(), "content": m.content}))
                .collect(),
        );

        for key in FLOAT_OPTIONS {
            if let Some(value) = options.f64(key) {
                body.insert(key.to_string(), json!(value));
            }
        }
        if let Some(max_tokens) = options.u32("max_tokens") {
            body.insert("max_tokens".to_string(), json!(max_tokens));
        }
        if let Some(stop) = options.string_list("stop") {
            body.insert("stop".to_string(), json!(stop));
        }
        if let Some(seed) = options.i64("seed") {
            body.insert("seed".to_string(), json!(seed));
        }
        if let Some(user) = options.str("user") {
            body.insert("user".to_string(), json!(user));
        }

        Value::Object(body)
    }

    /// Extract text and usage from a Chat Completions response
    pub fn transform_response(model: &str, response: &Value) -> Result<GenerateResponse, ProviderError> {
        let message = response
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|c| c.get("message"))
            .ok_or_else(|| ProviderError::serialization(PROVIDER_NAME, "Response has no choices"))?;

        // content is null for refusals and tool calls
        let text = message
            .get("content")
            .and_then(Value::as_str)
            .unwrap_or_default();

        let usage = response.get("usage").and_then(|usage| {
            Usage::from_counts(
                ["prompt_tokens", "completion_tokens", "total_tokens"]
                    .into_iter()
                    .map(|field| (field, usage.get(field).and_then(Value::as_u64))),
            )
        });

        Ok(GenerateResponse::success(PROVIDER_NAME, model, text, usage))
    }
}

#[async_trait]
impl LLMProvider for OpenAIProvider {
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
        debug!(model, messages = messages.len(), "Sending OpenAI chat completion");

        let request = self
            .client
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&body);

        let response = send_json(PROVIDER_NAME, request, model).await?;
        Self::transform_response(model, &response)
    }
}
