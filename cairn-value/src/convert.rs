// cairn-value - Type conversion traits
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Conversion from Rust types into [`Value`].
//!
//! | Rust Type | cairn kind |
//! |-----------|------------|
//! | `()` | `nil` |
//! | `bool` | `bool` |
//! | `i32`, `i64`, `usize` | `int` |
//! | `f32`, `f64` | `float` |
//! | `String`, `&str` | `string` |
//! | `Vec<T>` | `list` |
//! | `Option<T>` | `T` or `nil` |
//! | `HashMap<K, V>` | `map` |
//!
//! ```rust
//! use std::collections::HashMap;
//! use cairn_value::{IntoValue, MapLike, Value};
//!
//! let mut native = HashMap::new();
//! native.insert("x", 1);
//! native.insert("y", 2);
//!
//! let Value::Map(m) = native.into_value() else { unreachable!() };
//! assert_eq!(m.get(&Value::string("x")).unwrap(), Value::int(1));
//! ```

use std::collections::HashMap;

use crate::map::Map;
use crate::record::Struct;
use crate::value::Value;

/// Convert a Rust type into a `Value`.
pub trait IntoValue {
    fn into_value(self) -> Value;
}

impl IntoValue for Value {
    fn into_value(self) -> Value {
        self
    }
}

impl IntoValue for () {
    fn into_value(self) -> Value {
        Value::Nil
    }
}

impl IntoValue for bool {
    fn into_value(self) -> Value {
        Value::Bool(self)
    }
}

impl IntoValue for i64 {
    fn into_value(self) -> Value {
        Value::int(self)
    }
}

impl IntoValue for i32 {
    fn into_value(self) -> Value {
        Value::int(self as i64)
    }
}

impl IntoValue for usize {
    fn into_value(self) -> Value {
        Value::int(self as i64)
    }
}

impl IntoValue for f64 {
    fn into_value(self) -> Value {
        Value::float(self)
    }
}

impl IntoValue for f32 {
    fn into_value(self) -> Value {
        Value::float(self as f64)
    }
}

impl IntoValue for String {
    fn into_value(self) -> Value {
        Value::string(self)
    }
}

impl IntoValue for &str {
    fn into_value(self) -> Value {
        Value::string(self)
    }
}

impl<T: IntoValue> IntoValue for Vec<T> {
    fn into_value(self) -> Value {
        Value::list(self.into_iter().map(IntoValue::into_value))
    }
}

impl<T: IntoValue> IntoValue for Option<T> {
    fn into_value(self) -> Value {
        match self {
            Some(v) => v.into_value(),
            None => Value::Nil,
        }
    }
}

impl IntoValue for Map {
    fn into_value(self) -> Value {
        Value::Map(self)
    }
}

impl IntoValue for Struct {
    fn into_value(self) -> Value {
        Value::Struct(self)
    }
}

impl<K, V, S> IntoValue for HashMap<K, V, S>
where
    K: IntoValue,
    V: IntoValue,
{
    fn into_value(self) -> Value {
        Value::Map(
            self.into_iter()
                .map(|(k, v)| (k.into_value(), v.into_value()))
                .collect(),
        )
    }
}
