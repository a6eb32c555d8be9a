// cairn-value - Struct values and their descriptors
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Struct values: maps whose keys are fixed when the value is built.
//!
//! A [`StructDescriptor`] holds the ordered field names and is shared, via
//! `Arc`, by every struct of that shape. A [`Struct`] is then just the shared
//! descriptor plus one field array. Updating a field copies the array and
//! reuses the descriptor.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::map_like::{self, MapLike};
use crate::quote::quote;
use crate::repr::{Indent, MapReprBuilder, default_indent};
use crate::value::Value;

// ============================================================================
// StructDescriptor
// ============================================================================

/// The field layout shared by a family of structs.
///
/// Positions are 0-based and follow declaration order.
#[derive(Debug)]
pub struct StructDescriptor {
    field_names: Vec<Arc<str>>,
    field_index: HashMap<Arc<str>, usize>,
}

impl StructDescriptor {
    /// Create a descriptor from field names in declaration order.
    ///
    /// Names must be non-empty and distinct. A repeated name would make the
    /// struct report more pairs than it has distinct keys, so it is rejected
    /// with [`Error::DuplicateField`].
    pub fn new<I, S>(names: I) -> Result<Arc<Self>>
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
    {
        let field_names: Vec<Arc<str>> = names.into_iter().map(Into::into).collect();
        let mut field_index = HashMap::with_capacity(field_names.len());
        for (i, name) in field_names.iter().enumerate() {
            if name.is_empty() {
                tracing::debug!(position = i, "rejecting descriptor with empty field name");
                return Err(Error::EmptyFieldName);
            }
            if field_index.insert(Arc::clone(name), i).is_some() {
                tracing::debug!(field = %name, "rejecting descriptor with duplicate field");
                return Err(Error::DuplicateField {
                    field: name.to_string(),
                });
            }
        }
        Ok(Arc::new(StructDescriptor {
            field_names,
            field_index,
        }))
    }

    /// Field names in declaration order.
    pub fn field_names(&self) -> &[Arc<str>] {
        &self.field_names
    }

    /// Position of the named field.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.field_index.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.field_names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.field_names.is_empty()
    }
}

// ============================================================================
// Struct
// ============================================================================

/// A map-like value with the fixed keys of its descriptor.
#[derive(Clone)]
pub struct Struct {
    descriptor: Arc<StructDescriptor>,
    fields: Arc<[Value]>,
}

impl Struct {
    /// Create a struct. `fields` must have one value per descriptor field,
    /// in declaration order.
    pub fn new(descriptor: Arc<StructDescriptor>, fields: Vec<Value>) -> Result<Self> {
        if fields.len() != descriptor.len() {
            tracing::debug!(
                expected = descriptor.len(),
                got = fields.len(),
                "rejecting struct with wrong field count"
            );
            return Err(Error::arity(descriptor.len(), fields.len()));
        }
        Ok(Struct {
            descriptor,
            fields: fields.into(),
        })
    }

    pub fn descriptor(&self) -> &Arc<StructDescriptor> {
        &self.descriptor
    }

    pub fn fields(&self) -> &[Value] {
        &self.fields
    }

    /// A new struct with the field named by `key` set to `value`.
    ///
    /// The new struct shares this struct's descriptor.
    pub fn assoc(&self, key: &Value, value: Value) -> Result<Struct> {
        let i = self.index(key)?;
        let mut fields = self.fields.to_vec();
        fields[i] = value;
        Ok(Struct {
            descriptor: Arc::clone(&self.descriptor),
            fields: fields.into(),
        })
    }

    /// Render fields in declaration order, quoting names where needed.
    pub fn repr(&self, indent: Indent) -> String {
        let mut builder = MapReprBuilder::new(indent);
        for (name, field) in self.descriptor.field_names.iter().zip(self.fields.iter()) {
            builder.write_pair(&quote(name), indent.nested(2), &field.repr(indent.nested(2)));
        }
        builder.finish()
    }

    /// Field names paired with their values, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.descriptor
            .field_names
            .iter()
            .map(|name| name.as_ref())
            .zip(self.fields.iter())
    }

    fn index(&self, key: &Value) -> Result<usize> {
        let Value::String(name) = key else {
            return Err(Error::field_type(key.kind()));
        };
        self.descriptor
            .index_of(name)
            .ok_or_else(|| Error::field_not_found(key))
    }
}

impl MapLike for Struct {
    fn len(&self) -> usize {
        self.descriptor.len()
    }

    fn get(&self, key: &Value) -> Result<Value> {
        let i = self.index(key)?;
        Ok(self.fields[i].clone())
    }

    fn update(&self, key: Value, value: Value) -> Result<Value> {
        Ok(Value::Struct(self.assoc(&key, value)?))
    }

    fn keys(&self) -> Box<dyn Iterator<Item = Value> + '_> {
        Box::new(
            self.descriptor
                .field_names
                .iter()
                .map(|name| Value::String(Arc::clone(name))),
        )
    }

    fn pairs(&self) -> Box<dyn Iterator<Item = (Value, Value)> + '_> {
        Box::new(
            self.descriptor
                .field_names
                .iter()
                .zip(self.fields.iter())
                .map(|(name, field)| (Value::String(Arc::clone(name)), field.clone())),
        )
    }

    fn has_key(&self, key: &Value) -> bool {
        key.as_str()
            .is_some_and(|name| self.descriptor.index_of(name).is_some())
    }
}

impl PartialEq for Struct {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.descriptor, &other.descriptor) {
            // Same layout: fields line up position by position.
            return self.fields == other.fields;
        }
        map_like::equal(self, other)
    }
}

impl Eq for Struct {}

impl fmt::Display for Struct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr(default_indent()))
    }
}

impl fmt::Debug for Struct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.repr(Indent::None))
    }
}

// ============================================================================
// Tests
// ============================================================================
