//! Gemini model catalog

use crate::core::types::ModelInfo;

const CATALOG: &[(&str, &str)] = &[
    // Gemini 2.0
    ("gemini-2.0-flash", "Gemini 2.0 Flash - Powerful multi-modal (1M context)"),
    ("gemini-2.0-flash-lite", "Gemini 2.0 Flash-Lite - Cost effective"),
    // Gemini 1.5
    ("gemini-1.5-flash", "Gemini 1.5 Flash - Fast multi-modal (1M context)"),
    ("gemini-1.5-flash-8b", "Gemini 1.5 Flash-8B - Smallest model (1M context)"),
    ("gemini-1.5-pro", "Gemini 1.5 Pro - Highest intelligence (2M context)"),
    // Legacy
    ("gemini-pro", "Gemini Pro (Legacy)"),
];

/// Models advertised by the Google adapter
pub fn gemini_models() -> Vec<ModelInfo> {
    ModelInfo::catalog(CATALOG)
}
