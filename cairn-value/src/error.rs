// cairn-value - Error types for composite values
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Error types for map and struct operations.
//!
//! Every failure here is deterministic: retrying the same call with the same
//! arguments fails the same way. Callers match on the variant to tell a
//! programmer error (`FieldType`, `Arity`) apart from missing data
//! (`KeyNotFound`, `FieldNotFound`).

use crate::repr::Indent;
use crate::value::Value;

/// Result type for composite value operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by map-like values.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Lookup of a key that is absent from a map
    #[error("no such key: {key}")]
    KeyNotFound { key: String },

    /// Struct lookup or update with a key that is not a string
    #[error("field index must be string, got {got}")]
    FieldType { got: &'static str },

    /// Struct lookup or update with a name its descriptor does not declare
    #[error("no such field: {field}")]
    FieldNotFound { field: String },

    /// Struct construction with a field count that differs from the descriptor
    #[error("wrong number of fields: descriptor declares {expected}, got {got}")]
    Arity { expected: usize, got: usize },

    /// Descriptor construction with an empty field name
    #[error("field name must not be empty")]
    EmptyFieldName,

    /// Descriptor construction with the same field name twice
    #[error("duplicate field name: {field}")]
    DuplicateField { field: String },

    /// Failure reported by the JSON encoder, passed through unchanged
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a key-not-found error carrying the rendered key.
    pub fn key_not_found(key: &Value) -> Self {
        Error::KeyNotFound {
            key: key.repr(Indent::None),
        }
    }

    /// Create a field type error for a key of the given kind.
    pub fn field_type(got: &'static str) -> Self {
        Error::FieldType { got }
    }

    /// Create a field-not-found error carrying the rendered key.
    pub fn field_not_found(key: &Value) -> Self {
        Error::FieldNotFound {
            field: key.repr(Indent::None),
        }
    }

    /// Create an arity error.
    pub fn arity(expected: usize, got: usize) -> Self {
        Error::Arity { expected, got }
    }
}
