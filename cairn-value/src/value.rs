// cairn-value - Value type for cairn
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Core value type for cairn.
//!
//! `Value` is the enum every map key, map value and struct field holds.
//! Values are immutable and cheap to clone: strings are `Arc<str>`, lists
//! and maps are persistent `im` collections, and struct fields live behind
//! an `Arc`. A value can therefore be shared across threads freely.

use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::Arc;

use im::Vector;

use crate::map::Map;
use crate::map_like::{self, MapLike};
use crate::quote::quote;
use crate::record::Struct;
use crate::repr::{Indent, ListReprBuilder, default_indent};

/// Starting state for combined hashes (the djb2 seed).
pub(crate) const HASH_SEED: u64 = 5381;

/// Fold one hash into another, djb2 style.
pub(crate) fn hash_combine(h: u64, x: u64) -> u64 {
    h.wrapping_mul(33).wrapping_add(x)
}

/// A cairn runtime value.
#[derive(Clone)]
pub enum Value {
    /// The nil value
    Nil,
    /// Boolean true or false
    Bool(bool),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point number
    Float(f64),
    /// Immutable string
    String(Arc<str>),
    /// Indexed list (persistent, structural sharing)
    List(Vector<Value>),
    /// Associative value with arbitrary keys
    Map(Map),
    /// Record value with a fixed set of named fields
    Struct(Struct),
}

impl Value {
    /// Create a nil value
    pub fn nil() -> Self {
        Value::Nil
    }

    /// Create a boolean value
    pub fn bool(b: bool) -> Self {
        Value::Bool(b)
    }

    /// Create an integer value
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Create a float value
    pub fn float(n: f64) -> Self {
        Value::Float(n)
    }

    /// Create a string value
    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Value::String(s.into())
    }

    /// Create a list value from a sequence of values
    pub fn list(items: impl IntoIterator<Item = Value>) -> Self {
        Value::List(items.into_iter().collect())
    }

    /// Name of this value's kind. Maps and structs are both `"map"`.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Map(_) | Value::Struct(_) => "map",
        }
    }

    /// View this value through the map-like capability, if it has one.
    pub fn as_map_like(&self) -> Option<&dyn MapLike> {
        match self {
            Value::Map(m) => Some(m),
            Value::Struct(s) => Some(s),
            _ => None,
        }
    }

    /// Get the string contents if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    /// Stable hash, consistent with equality.
    ///
    /// The hash does not depend on a per-process seed, so the same value
    /// hashes the same in every run.
    pub fn hash_code(&self) -> u64 {
        match self {
            Value::List(items) => items
                .iter()
                .fold(HASH_SEED, |h, item| hash_combine(h, item.hash_code())),
            Value::Map(m) => map_like::hash(m),
            Value::Struct(s) => map_like::hash(s),
            scalar => {
                let mut state = DefaultHasher::new();
                std::mem::discriminant(scalar).hash(&mut state);
                match scalar {
                    Value::Bool(b) => b.hash(&mut state),
                    Value::Int(n) => n.hash(&mut state),
                    Value::Float(n) => n.to_bits().hash(&mut state),
                    Value::String(s) => s.hash(&mut state),
                    _ => {}
                }
                state.finish()
            }
        }
    }

    /// Render as literal syntax.
    pub fn repr(&self, indent: Indent) -> String {
        match self {
            Value::Nil => "$nil".to_string(),
            Value::Bool(true) => "$true".to_string(),
            Value::Bool(false) => "$false".to_string(),
            Value::Int(n) => n.to_string(),
            Value::Float(n) => format_float(*n),
            Value::String(s) => quote(s),
            Value::List(items) => {
                let mut builder = ListReprBuilder::new(indent);
                for item in items.iter() {
                    builder.write_elem(&item.repr(indent.nested(1)));
                }
                builder.finish()
            }
            Value::Map(m) => m.repr(indent),
            Value::Struct(s) => s.repr(indent),
        }
    }

    /// Human-facing string form: strings unquoted, everything else as repr.
    pub fn to_display_string(&self) -> String {
        match self {
            Value::String(s) => s.to_string(),
            other => other.repr(Indent::None),
        }
    }
}

pub(crate) fn format_float(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 {
            "+Inf".to_string()
        } else {
            "-Inf".to_string()
        }
    } else if n.fract() == 0.0 {
        format!("{}.0", n)
    } else {
        format!("{}", n)
    }
}

// ============================================================================
// Display implementation
// ============================================================================

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr(default_indent()))
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr(Indent::None))
    }
}

// ============================================================================
// Equality and hashing (for use as map keys)
// ============================================================================

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Nil, Value::Nil) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::String(a), Value::String(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Struct(a), Value::Struct(b)) => a == b,
            (Value::Map(a), Value::Struct(b)) => map_like::equal(a, b),
            (Value::Struct(a), Value::Map(b)) => map_like::equal(a, b),
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl From<Map> for Value {
    fn from(m: Map) -> Self {
        Value::Map(m)
    }
}

impl From<Struct> for Value {
    fn from(s: Struct) -> Self {
        Value::Struct(s)
    }
}

// ============================================================================
// Tests
// ============================================================================
