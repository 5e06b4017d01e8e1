//! OpenAI model catalog

use crate::core::types::ModelInfo;

const CATALOG: &[(&str, &str)] = &[
    // GPT-4 family
    ("gpt-4o", "GPT-4o - Latest flagship model"),
    ("gpt-4-turbo", "GPT-4 Turbo - Strong performance"),
    ("gpt-4-vision-preview", "GPT-4 Vision - Image capabilities"),
    ("gpt-4", "GPT-4 - Older stable model"),
    // GPT-3.5 family
    ("gpt-3.5-turbo", "GPT-3.5 Turbo - Fast and cost-effective"),
];

/// Models advertised by the OpenAI adapter, in display order
pub fn openai_models() -> Vec<ModelInfo> {
    ModelInfo::catalog(CATALOG)
}
