//! Model information types

use serde::{Deserialize, Serialize};

/// A model a provider advertises, with a human-readable label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Model ID sent to the vendor
    pub id: String,
    /// Display name
    pub name: String,
}

impl ModelInfo {
    /// Create a model entry
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Build an ordered catalog from `(id, name)` pairs
    pub fn catalog(entries: &[(&str, &str)]) -> Vec<Self> {
        entries
            .iter()
            .map(|(id, name)| Self::new(*id, *name))
            .collect()
    }
}
