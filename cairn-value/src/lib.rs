// cairn-value - Composite values for the cairn runtime
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! # cairn-value
//!
//! The immutable map-shaped values of the cairn runtime:
//!
//! - [`Map`], an associative value with arbitrary unique keys, built on a
//!   persistent hash trie.
//! - [`Struct`], a record whose field names are fixed by a shared
//!   [`StructDescriptor`].
//!
//! Both implement [`MapLike`], through which equality, hashing and literal
//! rendering are defined once for either kind. A `Struct` and a `Map` holding
//! the same pairs are equal.
//!
//! ```rust
//! use cairn_value::{Map, MapLike, Struct, StructDescriptor, Value};
//!
//! let desc = StructDescriptor::new(["a"]).unwrap();
//! let s = Struct::new(desc, vec![Value::int(1)]).unwrap();
//! let m = Map::new().assoc(Value::string("a"), Value::int(1));
//!
//! assert_eq!(Value::Struct(s), Value::Map(m.clone()));
//! assert_eq!(m.repr(cairn_value::Indent::None), "[&a=1]");
//! ```

pub mod convert;
pub mod error;
pub mod json;
pub mod map;
pub mod map_like;
pub mod quote;
pub mod record;
pub mod repr;
pub mod value;

pub use convert::IntoValue;
pub use error::{Error, Result};
pub use json::{to_json, to_json_pretty};
pub use map::Map;
pub use map_like::MapLike;
pub use quote::quote;
pub use record::{Struct, StructDescriptor};
pub use repr::{Indent, ListReprBuilder, MapReprBuilder, pretty, set_pretty};
pub use value::Value;
