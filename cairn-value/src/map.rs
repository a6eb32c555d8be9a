// cairn-value - Associative map value
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! `Map`: an immutable associative value over a persistent hash trie.
//!
//! Every update returns a new `Map` sharing all untouched trie nodes with the
//! map it came from, so an update costs `O(log n)` regardless of map size.
//! Iteration order is the trie's own: stable for a given map, but unrelated
//! to insertion order.

use std::fmt;

use im::HashMap;

use crate::error::{Error, Result};
use crate::map_like::{self, MapLike};
use crate::repr::{Indent, MapReprBuilder, default_indent};
use crate::value::Value;

/// A map from values to values.
#[derive(Clone, Default)]
pub struct Map {
    inner: HashMap<Value, Value>,
}

impl Map {
    /// Create an empty map.
    pub fn new() -> Self {
        Map {
            inner: HashMap::new(),
        }
    }

    /// Wrap an existing persistent map.
    pub fn from_inner(inner: HashMap<Value, Value>) -> Self {
        Map { inner }
    }

    /// The underlying persistent map.
    pub fn inner(&self) -> &HashMap<Value, Value> {
        &self.inner
    }

    /// A new map with `key` mapped to `value`.
    pub fn assoc(&self, key: Value, value: Value) -> Map {
        Map {
            inner: self.inner.update(key, value),
        }
    }

    /// Borrow the value under `key`.
    pub fn lookup(&self, key: &Value) -> Option<&Value> {
        self.inner.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> + '_ {
        self.inner.iter()
    }

    /// Render as `[&k=v ...]`, or `[&]` when empty.
    pub fn repr(&self, indent: Indent) -> String {
        let mut builder = MapReprBuilder::new(indent);
        for (k, v) in self.inner.iter() {
            builder.write_pair(
                &k.repr(indent.nested(1)),
                indent.nested(2),
                &v.repr(indent.nested(2)),
            );
        }
        builder.finish()
    }
}

impl MapLike for Map {
    fn len(&self) -> usize {
        self.inner.len()
    }

    fn get(&self, key: &Value) -> Result<Value> {
        self.inner
            .get(key)
            .cloned()
            .ok_or_else(|| Error::key_not_found(key))
    }

    fn update(&self, key: Value, value: Value) -> Result<Value> {
        Ok(Value::Map(self.assoc(key, value)))
    }

    fn keys(&self) -> Box<dyn Iterator<Item = Value> + '_> {
        Box::new(self.inner.keys().cloned())
    }

    fn pairs(&self) -> Box<dyn Iterator<Item = (Value, Value)> + '_> {
        Box::new(self.inner.iter().map(|(k, v)| (k.clone(), v.clone())))
    }

    fn has_key(&self, key: &Value) -> bool {
        self.inner.contains_key(key)
    }
}

impl FromIterator<(Value, Value)> for Map {
    /// Build a map from pairs; a later duplicate key overwrites an earlier one.
    fn from_iter<I: IntoIterator<Item = (Value, Value)>>(iter: I) -> Self {
        let mut inner = HashMap::new();
        for (k, v) in iter {
            inner.insert(k, v);
        }
        tracing::trace!(len = inner.len(), "built map from pairs");
        Map { inner }
    }
}

impl From<std::collections::HashMap<Value, Value>> for Map {
    fn from(m: std::collections::HashMap<Value, Value>) -> Self {
        m.into_iter().collect()
    }
}

impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        self.inner.ptr_eq(&other.inner) || map_like::equal(self, other)
    }
}

impl Eq for Map {}

impl fmt::Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr(default_indent()))
    }
}

impl fmt::Debug for Map {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr(Indent::None))
    }
}
