//! Codec for the list-typed section fields.
//!
//! Collections are persisted as the JSON-array text encoding of their
//! items. The read path must tolerate both that text form and an
//! already-structured array, because a record that never left the
//! process still carries native arrays while one fetched from storage
//! carries text. [`CollectionField`] models that ambiguity once, at the
//! boundary, so downstream consumers only ever see `Vec<T>`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A collection field in either of its two representations.
///
/// Deserializes from a JSON string (the persisted encoding) or a JSON
/// array (a native in-process value). An omitted field defaults to the
/// empty structured form, so absent input never fails to decode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CollectionField<T> {
    Raw(String),
    Items(Vec<T>),
}

impl<T> Default for CollectionField<T> {
    fn default() -> Self {
        CollectionField::Items(Vec::new())
    }
}

impl<T: Serialize + DeserializeOwned> CollectionField<T> {
    /// Canonicalize to the persisted text encoding.
    ///
    /// Structured items serialize directly. Raw text is parsed and
    /// re-serialized so garbage never reaches storage; invalid text is
    /// a [`CoreError::MalformedCollection`], not a silent pass-through.
    pub fn encode(&self, field: &str) -> Result<String, CoreError> {
        match self {
            CollectionField::Items(items) => serde_json::to_string(items)
                .map_err(|e| malformed(field, &e.to_string())),
            CollectionField::Raw(text) => {
                let items: Vec<T> = parse_items(field, text)?;
                serde_json::to_string(&items).map_err(|e| malformed(field, &e.to_string()))
            }
        }
    }

    /// Resolve to the ordered item sequence.
    pub fn decode(self, field: &str) -> Result<Vec<T>, CoreError> {
        match self {
            CollectionField::Items(items) => Ok(items),
            CollectionField::Raw(text) => parse_items(field, &text),
        }
    }

    /// Read-side recovery policy: a malformed section degrades to empty
    /// instead of failing the whole record. The loss is logged.
    pub fn decode_or_empty(self, field: &str) -> Vec<T> {
        match self.decode(field) {
            Ok(items) => items,
            Err(err) => {
                tracing::warn!(field, %err, "degrading malformed collection to empty");
                Vec::new()
            }
        }
    }
}

/// Encode an optional item slice; `None` encodes the empty sequence.
pub fn encode_items<T: Serialize>(field: &str, items: Option<&[T]>) -> Result<String, CoreError> {
    serde_json::to_string(items.unwrap_or(&[])).map_err(|e| malformed(field, &e.to_string()))
}

fn parse_items<T: DeserializeOwned>(field: &str, text: &str) -> Result<Vec<T>, CoreError> {
    serde_json::from_str(text).map_err(|e| malformed(field, &e.to_string()))
}

fn malformed(field: &str, reason: &str) -> CoreError {
    CoreError::MalformedCollection {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
