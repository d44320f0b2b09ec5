//! Ordered JSON document model and signature field naming.

use crate::error::{Result, SignError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Suffix appended to a field name to form its signature field name.
pub const SIGNATURE_SUFFIX: &str = "_signature";

/// A JSON document: an ordered mapping from field name to value.
///
/// Fields iterate in insertion order, which for a parsed document is the
/// order they appear in the source text. Element-wise signing relies on
/// this: original fields keep their positions and signature fields append
/// at the end.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(Map<String, Value>);

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a document from a JSON string. The top level must be an
    /// object.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(SignError::NotAnObject),
        }
    }

    /// Serialize the document to a compact JSON string.
    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string(&self.0)?;
        Ok(json)
    }

    /// Serialize the document to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(&self.0)?;
        Ok(json)
    }

    /// Look up a field by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Check whether a field exists.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Insert a field. A new name appends at the end; an existing name
    /// keeps its position and gets the new value.
    pub fn insert<S: Into<String>>(&mut self, name: S, value: Value) -> Option<Value> {
        self.0.insert(name.into(), value)
    }

    /// Iterate fields in stored order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether the document has no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The canonical text of a field value, or `None` if the field is
    /// absent. See [`canonical_text`].
    pub fn field_text(&self, name: &str) -> Option<String> {
        self.0.get(name).map(canonical_text)
    }

    /// The signature field name for `name`.
    pub fn signature_field(name: &str) -> String {
        format!("{name}{SIGNATURE_SUFFIX}")
    }

    /// Whether `name` is a signature field name.
    pub fn is_signature_field(name: &str) -> bool {
        name.ends_with(SIGNATURE_SUFFIX)
    }
}

/// The canonical text of a JSON value for hashing purposes.
///
/// A string value hashes its content exactly, without quotes or escaping;
/// any other value hashes its compact JSON serialization. The same rule
/// applies at sign time and verify time, so a value round-tripped through
/// JSON produces the same digest on both sides.
pub fn canonical_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
