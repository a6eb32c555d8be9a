// cairn-value - JSON encoding
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! `serde::Serialize` for values, plus JSON helpers.
//!
//! JSON objects only have string keys, so a map's keys are replaced by their
//! display strings. Two distinct keys can share a display string (`1` and
//! `"1"`, for instance); the pair iterated later overwrites the earlier one.
//! Which one survives follows the map's iteration order.
//!
//! JSON has no NaN or infinity, so encoding a non-finite float fails.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use serde::ser::{self, Serialize, SerializeMap, Serializer};

use crate::error::Result;
use crate::map::Map;
use crate::record::Struct;
use crate::value::{Value, format_float};

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Nil => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::Float(n) if !n.is_finite() => Err(ser::Error::custom(format!(
                "unsupported value: {}",
                format_float(*n)
            ))),
            Value::Float(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::List(items) => serializer.collect_seq(items.iter()),
            Value::Map(m) => m.serialize(serializer),
            Value::Struct(s) => s.serialize(serializer),
        }
    }
}

impl Serialize for Map {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut entries: BTreeMap<String, &Value> = BTreeMap::new();
        for (k, v) in self.iter() {
            match entries.entry(k.to_display_string()) {
                Entry::Occupied(mut slot) => {
                    tracing::debug!(key = %slot.key(), "json key collision, later pair wins");
                    slot.insert(v);
                }
                Entry::Vacant(slot) => {
                    slot.insert(v);
                }
            }
        }
        serializer.collect_map(entries)
    }
}

impl Serialize for Struct {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields().len()))?;
        for (name, field) in self.iter() {
            map.serialize_entry(name, field)?;
        }
        map.end()
    }
}

/// Encode as compact JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Encode as indented JSON.
pub fn to_json_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
