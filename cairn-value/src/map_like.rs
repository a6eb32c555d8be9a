// cairn-value - The map-like capability
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! The `MapLike` capability and the algorithms built on it.
//!
//! [`Map`](crate::Map) and [`Struct`](crate::Struct) store their pairs very
//! differently, but the runtime treats them as one kind. Equality and hashing
//! are therefore written once, here, against the trait alone. A struct and a
//! map holding the same pairs compare equal and hash the same.

use std::hash::{DefaultHasher, Hash, Hasher};

use crate::error::Result;
use crate::value::{HASH_SEED, Value, hash_combine};

/// A value made of unique keys mapped to values.
pub trait MapLike {
    /// Number of pairs.
    fn len(&self) -> usize;

    /// Whether there are no pairs.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Look up the value stored under `key`.
    fn get(&self, key: &Value) -> Result<Value>;

    /// A new value with `key` mapped to `value`. The receiver is unchanged.
    fn update(&self, key: Value, value: Value) -> Result<Value>;

    /// Keys, in this value's iteration order. Each call starts afresh.
    fn keys(&self) -> Box<dyn Iterator<Item = Value> + '_>;

    /// Key/value pairs, in the same order as [`keys`](MapLike::keys).
    fn pairs(&self) -> Box<dyn Iterator<Item = (Value, Value)> + '_>;

    /// Whether `key` is present. Never fails, whatever the key's kind.
    fn has_key(&self, key: &Value) -> bool;
}

/// Structural equality of two map-like values.
///
/// Keys are unique and the lengths are compared first, so checking that every
/// pair of `a` appears in `b` is enough. Iteration order plays no part.
pub fn equal(a: &dyn MapLike, b: &dyn MapLike) -> bool {
    a.len() == b.len()
        && a
            .pairs()
            .all(|(k, v)| b.has_key(&k) && matches!(b.get(&k), Ok(other) if other == v))
}

/// Equality of a map-like value against an arbitrary value.
///
/// False unless `other` is itself map-like.
pub fn equal_value(a: &dyn MapLike, other: &Value) -> bool {
    other.as_map_like().is_some_and(|b| equal(a, b))
}

/// Order-independent hash of a map-like value.
///
/// Each pair hashes to `combine(combine(seed, key), value)`, run through
/// SipHash so that pair hashes are not linear in their key and value. Pair
/// hashes are summed with wrapping so the result does not depend on iteration
/// order.
pub fn hash(m: &dyn MapLike) -> u64 {
    m.pairs().fold(0u64, |acc, (k, v)| {
        let pair = hash_combine(hash_combine(HASH_SEED, k.hash_code()), v.hash_code());
        acc.wrapping_add(mix(pair))
    })
}

fn mix(h: u64) -> u64 {
    let mut state = DefaultHasher::new();
    h.hash(&mut state);
    state.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::Map;
    use crate::record::{Struct, StructDescriptor};

    fn map_of(pairs: &[(&str, i64)]) -> Map {
        pairs
            .iter()
            .map(|(k, v)| (Value::string(*k), Value::int(*v)))
            .collect()
    }

    #[test]
    fn test_equal_ignores_order() {
        let a = map_of(&[("x", 1), ("y", 2), ("z", 3)]);
        let b = map_of(&[("z", 3), ("x", 1), ("y", 2)]);
        assert!(equal(&a, &b));
        assert_eq!(hash(&a), hash(&b));
    }

    #[test]
    fn test_equal_requires_same_length() {
        let a = map_of(&[("x", 1)]);
        let b = map_of(&[("x", 1), ("y", 2)]);
        assert!(!equal(&a, &b));
        assert!(!equal(&b, &a));
    }

    #[test]
    fn test_equal_requires_same_values() {
        let a = map_of(&[("x", 1)]);
        let b = map_of(&[("x", 2)]);
        assert!(!equal(&a, &b));
    }

    #[test]
    fn test_equal_value_rejects_non_map() {
        let a = map_of(&[]);
        assert!(!equal_value(&a, &Value::list(vec![Value::int(1)])));
        assert!(!equal_value(&a, &Value::nil()));
        assert!(equal_value(&a, &Value::Map(Map::new())));
    }

    #[test]
    fn test_cross_kind() -> Result<()> {
        let desc = StructDescriptor::new(["a", "b"])?;
        let s = Struct::new(desc, vec![Value::int(1), Value::int(2)])?;
        let m = map_of(&[("b", 2), ("a", 1)]);
        assert!(equal(&s, &m));
        assert!(equal(&m, &s));
        assert_eq!(hash(&s), hash(&m));
        Ok(())
    }

    #[test]
    fn test_swapped_values_hash_differently() {
        let a = map_of(&[("x", 1), ("y", 2)]);
        let b = map_of(&[("x", 2), ("y", 1)]);
        assert!(!equal(&a, &b));
        assert_ne!(hash(&a), hash(&b));
    }

    #[test]
    fn test_empty_hash() {
        assert_eq!(hash(&Map::new()), 0);
    }
}
