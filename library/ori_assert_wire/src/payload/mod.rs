//! The flat payload that crosses process and thread boundaries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::MalformedDiagnosticPayload;

/// A primitive wire value.
///
/// Serialized untagged, so a payload maps onto a plain JSON object of
/// strings and integers.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    Str(String),
}

impl FieldValue {
    /// Primitive type name, for error reporting.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Int(_) => "an integer",
            FieldValue::Str(_) => "a string",
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Int(value) => Some(*value),
            FieldValue::Str(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Str(value) => Some(value),
            FieldValue::Int(_) => None,
        }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Str(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Str(value.to_string())
    }
}

/// A failure flattened to field names and primitive values.
///
/// A value, not a handle: every clone and every decode owns its own copy.
#[derive(Clone, Eq, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SerializedFailure {
    fields: BTreeMap<String, FieldValue>,
}

impl SerializedFailure {
    pub fn new() -> Self {
        SerializedFailure::default()
    }

    /// Set a field, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Remove a field, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<FieldValue> {
        self.fields.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Render as a JSON object.
    pub fn to_json(&self) -> String {
        // A map of string keys to strings and integers always serializes.
        serde_json::to_string(&self.fields).unwrap_or_else(|_| "{}".to_string())
    }

    /// Parse a JSON object of strings and integers.
    pub fn from_json(json: &str) -> Result<Self, MalformedDiagnosticPayload> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for SerializedFailure {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        SerializedFailure {
            fields: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}
