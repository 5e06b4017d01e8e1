//! Generation request type

use super::{GenerateOptions, Message};
use serde::{Deserialize, Serialize};

/// A typed generation request
///
/// Built from a request body only after it has passed
/// [`RequestValidator`](crate::utils::data::validation::RequestValidator).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Registry name of the provider to route to
    pub provider: String,
    /// Vendor model identifier, forwarded unchanged
    pub model: String,
    /// Conversation turns, oldest first
    pub messages: Vec<Message>,
    /// Provider-specific options
    #[serde(default)]
    pub options: GenerateOptions,
}

impl GenerateRequest {
    /// Create a request with no options
    pub fn new(
        provider: impl Into<String>,
        model: impl Into<String>,
        messages: Vec<Message>,
    ) -> Self {
        Self {
            provider: provider.into(),
            model: model.into(),
            messages,
            options: GenerateOptions::default(),
        }
    }

    /// Attach options
    pub fn with_options(mut self, options: GenerateOptions) -> Self {
        self.options = options;
        self
    }
}
