//! JSON payloads.
//!
//! Canvas documents and free-form component metadata are plain JSON. A
//! document is always an object or an array at the top level.

/// Any JSON value.
pub type Json = serde_json::Value;

/// A JSON object.
pub type JsonObject = serde_json::Map<String, Json>;

/// Returns `true` if `value` can stand as a document: an object or an array.
#[must_use]
pub fn is_document(value: &Json) -> bool {
    value.is_object() || value.is_array()
}
