//! Generation response types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Token counts reported by a vendor, keyed by the field name the adapter exposes
///
/// Only counts the vendor actually reported are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Usage(BTreeMap<String, u64>);

impl Usage {
    /// Collect the reported counts; `None` when nothing was reported
    pub fn from_counts<'a, I>(counts: I) -> Option<Self>
    where
        I: IntoIterator<Item = (&'a str, Option<u64>)>,
    {
        let fields: BTreeMap<String, u64> = counts
            .into_iter()
            .filter_map(|(key, count)| count.map(|c| (key.to_string(), c)))
            .collect();

        if fields.is_empty() {
            None
        } else {
            Some(Self(fields))
        }
    }

    /// Count for a field
    pub fn get(&self, field: &str) -> Option<u64> {
        self.0.get(field).copied()
    }

    /// Number of reported fields
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no fields were reported
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Uniform response envelope returned by every adapter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub provider: String,
    pub model: String,
    /// Generated text, or a readable error message when `error` is set
    pub response: String,
    pub usage: Option<Usage>,
    /// Vendor failure the adapter chose to report in-band
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GenerateResponse {
    /// Successful generation
    pub fn success(
        provider: impl Into<String>,
        model: impl Into<String>,
        response: impl Into<String>,
        usage: Option<Usage>,
    ) -> Self {
        Self {
            provider: provider.into(),
            model: model.into(),
            response: response.into(),
            usage,
            error: None,
        }
    }

    /// A call that completed but reports a vendor failure in-band
    pub fn in_band_error(provider: impl Into<String>, model: impl Into<String>, error: String) -> Self {
        Self {
            provider: provider.into(),
            model: model.into(),
            response: format!("Error generating response: {}", error),
            usage: None,
            error: Some(error),
        }
    }

    /// Whether the adapter reported an in-band error
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}
