// cairn-value - Property-based tests for map-like values
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Property-based tests for map-like values and invariants.
//!
//! Tests the following properties:
//! - update/get round-trips for maps and structs
//! - order independence of equality and hashing
//! - struct/map cross-kind equality and hashing
//! - receivers are unchanged by update

mod common;

use std::collections::HashMap;

use common::{Map, MapLike, Struct, StructDescriptor, Value, i, s};
use proptest::prelude::*;

// =============================================================================
// Strategies for generating values
// =============================================================================

/// Generate small integers for map values
fn arb_small_int() -> impl Strategy<Value = i64> {
    -1000i64..1000i64
}

/// Generate simple string keys
fn arb_key() -> impl Strategy<Value = String> {
    "[a-z]{1,5}"
}

/// Generate keys of mixed kinds
fn arb_value_key() -> impl Strategy<Value = Value> {
    prop_oneof![
        arb_key().prop_map(|k| Value::string(k)),
        arb_small_int().prop_map(Value::int),
        any::<bool>().prop_map(Value::bool),
    ]
}

/// Generate a set of distinct string keys with int values, plus a shuffled
/// copy of the same pairs
fn arb_pairs_and_shuffle() -> impl Strategy<Value = (Vec<(String, i64)>, Vec<(String, i64)>)> {
    prop::collection::hash_map(arb_key(), arb_small_int(), 0..12).prop_flat_map(|m| {
        let pairs: Vec<(String, i64)> = m.into_iter().collect();
        (Just(pairs.clone()), Just(pairs).prop_shuffle())
    })
}

fn map_from(pairs: &[(String, i64)]) -> Map {
    pairs.iter().map(|(k, v)| (s(k), i(*v))).collect()
}

fn struct_from(pairs: &[(String, i64)]) -> Struct {
    let desc = StructDescriptor::new(pairs.iter().map(|(k, _)| k.as_str())).unwrap();
    Struct::new(desc, pairs.iter().map(|(_, v)| i(*v)).collect()).unwrap()
}

// =============================================================================
// update/get round-trips
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// (get (update m k v) k) = v
    #[test]
    fn map_update_then_get(
        (pairs, _) in arb_pairs_and_shuffle(),
        k in arb_value_key(),
        v in arb_small_int(),
    ) {
        let m = map_from(&pairs);
        let updated = m.update(k.clone(), i(v)).unwrap();
        let updated = updated.as_map_like().unwrap();
        prop_assert_eq!(updated.get(&k).unwrap(), i(v));
    }

    /// Updating a declared field and reading it back gives the new value
    #[test]
    fn struct_update_then_get(
        (pairs, _) in arb_pairs_and_shuffle(),
        pick in any::<prop::sample::Index>(),
        v in arb_small_int(),
    ) {
        prop_assume!(!pairs.is_empty());
        let st = struct_from(&pairs);
        let (name, _) = &pairs[pick.index(pairs.len())];
        let updated = st.update(s(name), i(v)).unwrap();
        let updated = updated.as_map_like().unwrap();
        prop_assert_eq!(updated.get(&s(name)).unwrap(), i(v));
        prop_assert_eq!(updated.len(), st.len());
    }

    /// The receiver of an update still holds its old pairs
    #[test]
    fn update_leaves_receiver_unchanged(
        (pairs, _) in arb_pairs_and_shuffle(),
        k in arb_key(),
        v in arb_small_int(),
    ) {
        let m = map_from(&pairs);
        let before: HashMap<Value, Value> = m.pairs().collect();
        let _ = m.update(s(&k), i(v)).unwrap();
        let after: HashMap<Value, Value> = m.pairs().collect();
        prop_assert_eq!(before, after);
    }
}

// =============================================================================
// Order independence
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Building from the same pairs in any order gives equal maps and hashes
    #[test]
    fn map_equality_ignores_order((pairs, shuffled) in arb_pairs_and_shuffle()) {
        let a = Value::Map(map_from(&pairs));
        let b = Value::Map(map_from(&shuffled));
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.hash_code(), b.hash_code());
    }

    /// Structs declaring the same fields in a different order are equal
    #[test]
    fn struct_equality_ignores_declaration_order((pairs, shuffled) in arb_pairs_and_shuffle()) {
        let a = Value::Struct(struct_from(&pairs));
        let b = Value::Struct(struct_from(&shuffled));
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.hash_code(), b.hash_code());
    }

    /// A struct and a map with the same pairs are equal and hash the same
    #[test]
    fn struct_equals_map((pairs, shuffled) in arb_pairs_and_shuffle()) {
        let st = Value::Struct(struct_from(&pairs));
        let m = Value::Map(map_from(&shuffled));
        prop_assert_eq!(&st, &m);
        prop_assert_eq!(&m, &st);
        prop_assert_eq!(st.hash_code(), m.hash_code());
    }

    /// Changing one value breaks equality
    #[test]
    fn different_value_not_equal(
        (pairs, _) in arb_pairs_and_shuffle(),
        pick in any::<prop::sample::Index>(),
    ) {
        prop_assume!(!pairs.is_empty());
        let m = map_from(&pairs);
        let (name, old) = &pairs[pick.index(pairs.len())];
        let changed = m.assoc(s(name), i(old + 1));
        prop_assert_ne!(Value::Map(m), Value::Map(changed));
    }
}
