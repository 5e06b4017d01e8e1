//! Structural validation of generate requests
//!
//! Runs against the raw JSON body so every problem can be reported at once,
//! before anything is decoded into typed structs.

use serde_json::{Map, Value};

use crate::core::types::MessageRole;

/// Request validation utilities
pub struct RequestValidator;

impl RequestValidator {
    /// Collect every structural problem with a `/generate` body
    ///
    /// An empty list means the body can be decoded into a
    /// [`GenerateRequest`](crate::core::types::GenerateRequest). `options` is
    /// never inspected.
    pub fn validate_generate_request(body: &Value) -> Vec<String> {
        let Some(object) = body.as_object() else {
            return vec!["Request body must be a JSON object".to_string()];
        };

        let mut errors = Vec::new();
        Self::validate_string_field(object, "provider", &mut errors);
        Self::validate_string_field(object, "model", &mut errors);

        match object.get("messages") {
            None => errors.push("Missing 'messages' field".to_string()),
            Some(Value::Array(messages)) => {
                for (i, message) in messages.iter().enumerate() {
                    errors.extend(
                        Self::validate_message(message)
                            .into_iter()
                            .map(|e| format!("Message {}: {}", i, e)),
                    );
                }
            }
            Some(_) => errors.push("'messages' must be a list".to_string()),
        }

        errors
    }

    /// Problems with a single message, unprefixed
    pub fn validate_message(message: &Value) -> Vec<String> {
        let Some(object) = message.as_object() else {
            return vec!["Message must be an object".to_string()];
        };

        let mut errors = Vec::new();
        match object.get("role") {
            None => errors.push("Missing 'role' field".to_string()),
            Some(Value::String(role)) => {
                if role.parse::<MessageRole>().is_err() {
                    let allowed: Vec<_> = MessageRole::ALL.iter().map(|r| r.as_str()).collect();
                    errors.push(format!("'role' must be one of: {}", allowed.join(", ")));
                }
            }
            Some(_) => errors.push("'role' must be a string".to_string()),
        }

        match object.get("content") {
            None => errors.push("Missing 'content' field".to_string()),
            Some(Value::String(_)) => {}
            Some(_) => errors.push("'content' must be a string".to_string()),
        }

        errors
    }

    fn validate_string_field(object: &Map<String, Value>, field: &str, errors: &mut Vec<String>) {
        match object.get(field) {
            None => errors.push(format!("Missing '{}' field", field)),
            Some(Value::String(_)) => {}
            Some(_) => errors.push(format!("'{}' must be a string", field)),
        }
    }
}
