use std::cmp::Ordering;
use std::fmt;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

/// Error when decoding or patching a document payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatchError {
    pub message: String,
}

impl fmt::Display for PatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "patch error: {}", self.message)
    }
}

impl std::error::Error for PatchError {}

impl PatchError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        PatchError {
            message: message.into(),
        }
    }
}

/// Trait for domain records handled by the synchronizer.
///
/// A document has a stable unique identifier and a named collection; all other
/// fields are domain-specific and opaque to the core. Field access for sorting
/// and patching goes through the document's JSON representation.
pub trait Document: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// The collection name for this document type (e.g., "samples", "references").
    const COLLECTION: &'static str;

    /// Returns the unique identifier for this document.
    fn id(&self) -> &str;
}

/// Serialize a document to its JSON object representation.
pub fn to_json<M: Document>(document: &M) -> Result<Value, PatchError> {
    serde_json::to_value(document).map_err(|e| PatchError::new(e.to_string()))
}

/// Decode a JSON payload into a typed document.
pub fn decode<M: Document>(payload: &Value) -> Result<M, PatchError> {
    serde_json::from_value(payload.clone()).map_err(|e| PatchError::new(e.to_string()))
}

/// Look up a top-level field of a document by name.
pub fn field<'a>(value: &'a Value, name: &str) -> Option<&'a Value> {
    value.as_object().and_then(|object| object.get(name))
}

/// Shallow-merge the top-level fields of `patch` into `document`, producing a
/// new typed document. Fields absent from the patch are preserved.
pub fn shallow_merge<M: Document>(document: &M, patch: &Value) -> Result<M, PatchError> {
    let fields = patch
        .as_object()
        .ok_or_else(|| PatchError::new("patch payload is not an object"))?;

    let mut merged = to_json(document)?;
    let target = merged
        .as_object_mut()
        .ok_or_else(|| PatchError::new("document does not serialize to an object"))?;

    for (key, value) in fields {
        target.insert(key.clone(), value.clone());
    }

    decode(&merged)
}

/// Total ordering over JSON field values used for sorted insertion.
///
/// Null < Bool < Number < String; numbers compare as f64, strings
/// lexicographically. Arrays and objects are opaque and compare equal.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Less,
        (_, Value::Null) => Ordering::Greater,
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Bool(_), _) => Ordering::Less,
        (_, Value::Bool(_)) => Ordering::Greater,
        (Value::Number(x), Value::Number(y)) => {
            let x = x.as_f64().unwrap_or(0.0);
            let y = y.as_f64().unwrap_or(0.0);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Value::Number(_), _) => Ordering::Less,
        (_, Value::Number(_)) => Ordering::Greater,
        (Value::String(x), Value::String(y)) => x.cmp(y),
        _ => Ordering::Equal,
    }
}
