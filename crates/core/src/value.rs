// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runtime configuration and the shape of its values.
//!
//! Configuration values arrive as strings, but a string may itself carry a
//! JSON array (a list of paths) or a JSON object (a `{name, value}`
//! selection or a `{name}` file reference). The shape is decided once, when
//! the value enters the formatter, and the verbatim text is kept alongside
//! so plain properties still see exactly what the user supplied.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// A raw property value with its decoded shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    /// Anything that is not a JSON array or object
    Scalar(String),
    /// A JSON array; non-string elements are kept as their JSON text
    List { items: Vec<String>, text: String },
    /// A JSON object; missing `name`/`value` fields decode as empty strings
    Keyed {
        name: String,
        value: String,
        text: String,
    },
}

impl RawValue {
    /// Decode the shape of a raw value.
    pub fn parse(raw: impl Into<String>) -> Self {
        let text = raw.into();
        let trimmed = text.trim();

        if trimmed.starts_with('{') && trimmed.ends_with('}') {
            if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(trimmed) {
                return RawValue::Keyed {
                    name: json_text(map.get("name")),
                    value: json_text(map.get("value")),
                    text,
                };
            }
        } else if trimmed.starts_with('[') && trimmed.ends_with(']') {
            if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(trimmed) {
                return RawValue::List {
                    items: items.iter().map(|item| json_text(Some(item))).collect(),
                    text,
                };
            }
        }

        RawValue::Scalar(text)
    }

    /// A scalar that is never decoded
    pub fn scalar(text: impl Into<String>) -> Self {
        RawValue::Scalar(text.into())
    }

    /// The verbatim text of the value
    pub fn as_str(&self) -> &str {
        match self {
            RawValue::Scalar(text) => text,
            RawValue::List { text, .. } => text,
            RawValue::Keyed { text, .. } => text,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.as_str().trim().is_empty()
    }

    /// List elements, if the value is a JSON array
    pub fn items(&self) -> Option<&[String]> {
        match self {
            RawValue::List { items, .. } => Some(items),
            _ => None,
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text of a JSON field: strings verbatim, null or missing as empty,
/// anything else as its JSON encoding.
fn json_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Flat user configuration keyed by `<stepName>_<id>`.
///
/// Deserializes from a JSON object whose values may be any JSON; values
/// that are not strings are kept as their JSON text. Unknown keys are
/// carried but never consulted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, Value>",
    into = "BTreeMap<String, String>"
)]
pub struct RuntimeConfig {
    values: BTreeMap<String, String>,
}

impl RuntimeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration key for an id of a step
    pub fn key(step_name: &str, id: &str) -> String {
        format!("{}_{}", step_name, id)
    }

    pub fn with(mut self, step_name: &str, id: &str, value: impl Into<String>) -> Self {
        self.insert(step_name, id, value);
        self
    }

    pub fn insert(&mut self, step_name: &str, id: &str, value: impl Into<String>) {
        self.values.insert(Self::key(step_name, id), value.into());
    }

    pub fn contains(&self, step_name: &str, id: &str) -> bool {
        self.values.contains_key(&Self::key(step_name, id))
    }

    /// Verbatim configured text for an id of a step
    pub fn get(&self, step_name: &str, id: &str) -> Option<&str> {
        self.values
            .get(&Self::key(step_name, id))
            .map(String::as_str)
    }

    /// Configured value for an id of a step, with its shape decoded
    pub fn lookup(&self, step_name: &str, id: &str) -> Option<RawValue> {
        self.get(step_name, id).map(RawValue::parse)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<BTreeMap<String, Value>> for RuntimeConfig {
    fn from(map: BTreeMap<String, Value>) -> Self {
        let values = map
            .into_iter()
            .map(|(key, value)| {
                let text = match value {
                    Value::String(s) => s,
                    Value::Null => String::new(),
                    other => other.to_string(),
                };
                (key, text)
            })
            .collect();
        Self { values }
    }
}

impl From<RuntimeConfig> for BTreeMap<String, String> {
    fn from(config: RuntimeConfig) -> Self {
        config.values
    }
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
