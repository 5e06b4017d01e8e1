//! Gemini generateContent client

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::{Value, json};
use tracing::{debug, warn};

use super::models::gemini_models;
use crate::core::providers::base::{BaseConfig, build_http_client, send_json};
use crate::core::providers::unified_provider::ProviderError;
use crate::core::traits::LLMProvider;
use crate::core::types::{
    GenerateOptions, GenerateResponse, Message, MessageRole, ModelInfo, Usage,
};

/// Registry key for this adapter
pub const PROVIDER_NAME: &str = "google";

/// Appended to vendor errors that mention an unsupported model or feature
pub const PAID_TIER_NOTE: &str = " (Note: Some models might be available only in the paid tier)";

const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
const API_KEY_HEADER: &str = "x-goog-api-key";
const DEFAULT_TEMPERATURE: f64 = 0.7;
const DEFAULT_TOP_P: f64 = 0.95;
const DEFAULT_TOP_K: u32 = 40;
const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 1024;

/// Google Gemini provider
#[derive(Debug)]
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    api_base: String,
    models: Vec<ModelInfo>,
}

impl GeminiProvider {
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
            models: gemini_models(),
        })
    }

    /// Vendor role for a gateway role
    pub fn map_role(role: MessageRole) -> &'static str {
        match role {
            MessageRole::System | MessageRole::Assistant => "model",
            MessageRole::User => "user",
        }
    }

    /// Generation settings with defaults for anything not supplied
    pub fn generation_config(options: &GenerateOptions) -> Value {
        json!({
            "temperature": options.f64("temperature").unwrap_or(DEFAULT_TEMPERATURE),
            "topP": options.f64("top_p").unwrap_or(DEFAULT_TOP_P),
            "topK": options.u32("top_k").unwrap_or(DEFAULT_TOP_K),
            "maxOutputTokens": options.u32("max_tokens").unwrap_or(DEFAULT_MAX_OUTPUT_TOKENS),
        })
    }

    /// Build the generateContent body
    ///
    /// Everything but the last message is chat history; the last message is
    /// sent as the new user turn. Returns `None` for an empty conversation.
    pub fn transform_request(messages: &[Message], options: &GenerateOptions) -> Option<Value> {
        let (last, history) = messages.split_last()?;

        let mut contents: Vec<Value> = history
            .iter()
            .map(|m| json!({"role": Self::map_role(m.role), "parts": [{"text": m.content}]}))
            .collect();
        contents.push(json!({"role": "user", "parts": [{"text": last.content}]}));

        Some(json!({
            "contents": contents,
            "generationConfig": Self::generation_config(options),
        }))
    }

    /// Extract text and usage, or the reason there is no text
    pub fn transform_response(model: &str, response: &Value) -> Result<GenerateResponse, String> {
        let candidate = match response.get("candidates").and_then(|c| c.get(0)) {
            Some(candidate) => candidate,
            None => {
                let reason = response
                    .get("promptFeedback")
                    .and_then(|f| f.get("blockReason"))
                    .and_then(Value::as_str);
                return Err(match reason {
                    Some(reason) => format!("Prompt was blocked: {}", reason),
                    None => "No candidates returned".to_string(),
                });
            }
        };

        let parts = candidate
            .get("content")
            .and_then(|c| c.get("parts"))
            .and_then(Value::as_array);
        let text: Option<String> = parts.map(|parts| {
            parts
                .iter()
                .filter_map(|p| p.get("text").and_then(Value::as_str))
                .collect()
        });

        let text = match text {
            Some(text) if !text.is_empty() => text,
            _ => {
                let finish = candidate
                    .get("finishReason")
                    .and_then(Value::as_str)
                    .unwrap_or("UNKNOWN");
                return Err(format!("Response contained no text (finish reason: {})", finish));
            }
        };

        let usage = response.get("usageMetadata").and_then(|meta| {
            Usage::from_counts([
                ("input_tokens", meta.get("promptTokenCount").and_then(Value::as_u64)),
                ("output_tokens", meta.get("candidatesTokenCount").and_then(Value::as_u64)),
                ("total_tokens", meta.get("totalTokenCount").and_then(Value::as_u64)),
            ])
        });

        Ok(GenerateResponse::success(PROVIDER_NAME, model, text, usage))
    }

    /// In-band failure response, with the paid tier hint where it applies
    pub fn error_response(model: &str, message: impl Into<String>) -> GenerateResponse {
        let mut message = message.into();
        if message.contains("is not supported") {
            message.push_str(PAID_TIER_NOTE);
        }
        GenerateResponse::in_band_error(PROVIDER_NAME, model, message)
    }

    /// generateContent endpoint for `model`
    ///
    /// The model id is a single path segment, so `/`, `?` and `#` in it are
    /// percent-encoded rather than changing the target endpoint.
    pub fn endpoint(&self, model: &str) -> Result<Url, ProviderError> {
        let invalid_base =
            || ProviderError::configuration(PROVIDER_NAME, format!("Invalid API base: {}", self.api_base));

        let mut url = Url::parse(&self.api_base).map_err(|_| invalid_base())?;
        url.path_segments_mut()
            .map_err(|_| invalid_base())?
            .pop_if_empty()
            .extend(["v1beta", "models"])
            .push(&format!("{}:generateContent", model));
        Ok(url)
    }

    async fn call(&self, model: &str, body: &Value) -> Result<Value, ProviderError> {
        let request = self
            .client
            .post(self.endpoint(model)?)
            .header(API_KEY_HEADER, &self.api_key)
            .json(body);

        send_json(PROVIDER_NAME, request, model).await
    }
}

#[async_trait]
impl LLMProvider for GeminiProvider {
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
        let Some(body) = Self::transform_request(messages, options) else {
            return Ok(Self::error_response(model, "No messages to send"));
        };
        debug!(model, messages = messages.len(), "Sending Gemini generateContent request");

        let result = match self.call(model, &body).await {
            Ok(raw) => Self::transform_response(model, &raw),
            Err(e) => Err(e.to_string()),
        };

        Ok(result.unwrap_or_else(|message| {
            warn!(model, error = %message, "Gemini generation failed");
            Self::error_response(model, message)
        }))
    }
}
