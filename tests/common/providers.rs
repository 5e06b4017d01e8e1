//! In-process providers with scripted behavior

use async_trait::async_trait;
use llm_gateway::core::types::{GenerateOptions, GenerateResponse, Message, ModelInfo};
use llm_gateway::{LLMProvider, ProviderError, ProviderRegistry};
use parking_lot::Mutex;
use std::sync::Arc;

/// What a [`FakeProvider`] does when asked to generate
#[derive(Debug, Clone)]
pub enum FakeReply {
    /// Succeed with this text
    Text(String),
    /// Succeed but carry an in-band error
    InBandError(String),
    /// Fail with a vendor error
    Fail(ProviderError),
}

/// Provider that records calls and answers from a script
#[derive(Debug)]
pub struct FakeProvider {
    name: String,
    models: Vec<ModelInfo>,
    reply: FakeReply,
    calls: Mutex<Vec<(String, Vec<Message>, GenerateOptions)>>,
}

impl FakeProvider {
    pub fn new(name: &str, reply: FakeReply) -> Self {
        Self {
            name: name.to_string(),
            models: vec![
                ModelInfo::new(format!("{}-large", name), "Large"),
                ModelInfo::new(format!("{}-small", name), "Small"),
            ],
            reply,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Provider answering with fixed text
    pub fn text(name: &str, text: &str) -> Arc<Self> {
        Arc::new(Self::new(name, FakeReply::Text(text.to_string())))
    }

    /// Number of generate calls seen
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Arguments of the most recent call
    pub fn last_call(&self) -> Option<(String, Vec<Message>, GenerateOptions)> {
        self.calls.lock().last().cloned()
    }
}

#[async_trait]
impl LLMProvider for FakeProvider {
    fn name(&self) -> &str {
        &self.name
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
        self.calls
            .lock()
            .push((model.to_string(), messages.to_vec(), options.clone()));

        match &self.reply {
            FakeReply::Text(text) => Ok(GenerateResponse::success(&self.name, model, text, None)),
            FakeReply::InBandError(error) => Ok(GenerateResponse::in_band_error(
                &self.name,
                model,
                error.clone(),
            )),
            FakeReply::Fail(e) => Err(e.clone()),
        }
    }
}

/// Registry holding the given providers
pub fn registry_with(providers: Vec<Arc<FakeProvider>>) -> ProviderRegistry {
    let registry = ProviderRegistry::new();
    for provider in providers {
        registry.register(provider);
    }
    registry
}
