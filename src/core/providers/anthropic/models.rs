//! Anthropic model catalog

use crate::core::types::ModelInfo;

const CATALOG: &[(&str, &str)] = &[
    ("claude-3-opus-20240229", "Claude 3 Opus"),
    ("claude-3-sonnet-20240229", "Claude 3 Sonnet"),
    ("claude-3-haiku-20240307", "Claude 3 Haiku"),
    ("claude-3.5-sonnet-20240620", "Claude 3.5 Sonnet"),
];

/// Models advertised by the Anthropic adapter
pub fn anthropic_models() -> Vec<ModelInfo> {
    ModelInfo::catalog(CATALOG)
}
