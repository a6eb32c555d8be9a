// cairn-value - Common test utilities
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Shared test helpers for cairn-value integration tests.
//!
//! # Usage
//!
//! In your test file, add:
//! ```ignore
//! mod common;
//! use common::*;
//! ```
//!
//! # Available Helpers
//!
//! - [`s`] / [`i`] - Short constructors for string and int values
//! - [`map_of`] - Build a map from string keys and int values
//! - [`person`] - A two-field struct (`name`, `age`)
//!
//! # Macros
//!
//! - [`assert_err!`] - Assert that a result is an error matching a pattern

use std::sync::Arc;

#[allow(unused_imports)]
pub use cairn_value::{
    Error, Indent, IntoValue, Map, MapLike, Struct, StructDescriptor, Value, map_like, to_json,
};

/// A string value.
#[must_use]
#[allow(dead_code)]
pub fn s(text: &str) -> Value {
    Value::string(text)
}

/// An int value.
#[must_use]
#[allow(dead_code)]
pub fn i(n: i64) -> Value {
    Value::int(n)
}

/// Build a map with string keys and int values.
#[must_use]
#[allow(dead_code)]
pub fn map_of(pairs: &[(&str, i64)]) -> Map {
    pairs.iter().map(|(k, v)| (s(k), i(*v))).collect()
}

/// The `["name", "age"]` descriptor.
///
/// # Panics
///
/// Never: the names are fixed and valid.
#[must_use]
#[allow(dead_code)]
pub fn person_descriptor() -> Arc<StructDescriptor> {
    StructDescriptor::new(["name", "age"]).expect("valid descriptor")
}

/// A person struct with the given name and age.
#[must_use]
#[allow(dead_code)]
pub fn person(name: &str, age: i64) -> Struct {
    Struct::new(person_descriptor(), vec![s(name), i(age)]).expect("arity matches")
}

/// Assert that `result` is an `Err` matching `pattern`.
///
/// # Example
///
/// ```ignore
/// assert_err!(m.get(&s("z")), Error::KeyNotFound { .. });
/// ```
#[macro_export]
macro_rules! assert_err {
    ($result:expr, $pattern:pat) => {
        let result = $result;
        assert!(
            matches!(&result, Err($pattern)),
            "expected error matching {}, got {:?}",
            stringify!($pattern),
            result
        );
    };
}
