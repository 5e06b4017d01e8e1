//! Provider-specific generation options
//!
//! Callers send an open bag of options. Each adapter reads the keys it
//! recognizes through the typed accessors here and ignores everything else.
//! A recognized key holding a value of the wrong JSON type reads as absent,
//! so the adapter's default applies.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Open key/value options attached to a generation request
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct GenerateOptions(Map<String, Value>);

impl GenerateOptions {
    /// Create an empty option set
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Raw value for a key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Numeric option as `f64`
    pub fn f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }

    /// Non-negative integer option; integral floats such as `1024.0` are accepted
    pub fn u32(&self, key: &str) -> Option<u32> {
        let value = self.get(key)?;
        if let Some(n) = value.as_u64() {
            return u32::try_from(n).ok();
        }
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= u32::MAX as f64)
            .map(|f| f as u32)
    }

    /// Signed integer option
    pub fn i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_i64)
    }

    /// String option
    pub fn str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// A string or a list of strings, normalized to a list
    pub fn string_list(&self, key: &str) -> Option<Vec<String>> {
        match self.get(key)? {
            Value::String(s) => Some(vec![s.clone()]),
            Value::Array(items) => items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect(),
            _ => None,
        }
    }

    /// Number of options supplied
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no options were supplied
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Option keys, in insertion-independent order
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }
}

impl From<Map<String, Value>> for GenerateOptions {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<'de> Deserialize<'de> for GenerateOptions {
    /// Anything other than a JSON object (including `null`) decodes as empty.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Object(map) => Ok(Self(map)),
            _ => Ok(Self::default()),
        }
    }
}
