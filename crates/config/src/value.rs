//! Nested configuration value tree.
//!
//! Responsibilities:
//! - Define the tagged-variant type stored in the config tree.
//! - Provide typed accessors and dotted-path traversal.
//!
//! Does NOT handle:
//! - File I/O or directory scanning (see `tree.rs`).
//!
//! Invariants:
//! - Dotted-path descent only traverses `Mapping` nodes; reaching any other
//!   node with segments left terminates the lookup.
//! - No type coercion: a typed accessor on a mismatched variant returns `None`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A dynamically-typed configuration value.
///
/// JSON documents in the config directory deserialize into this tree. The
/// untagged representation means a document round-trips to the same JSON it
/// was read from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// JSON `null`.
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Integer or floating-point number.
    Number(serde_json::Number),
    /// String scalar.
    String(String),
    /// Ordered sequence of values.
    Sequence(Vec<Value>),
    /// String-keyed nested mapping.
    Mapping(BTreeMap<String, Value>),
}

impl Value {
    /// Returns `true` for [`Value::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the string slice if this is a [`Value::String`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the boolean if this is a [`Value::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number as `i64` if this is an integral [`Value::Number`].
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// Returns the number as `u64` if this is a non-negative integral
    /// [`Value::Number`].
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Number(n) => n.as_u64(),
            _ => None,
        }
    }

    /// Returns the number as `f64` if this is a [`Value::Number`].
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    /// Returns the elements if this is a [`Value::Sequence`].
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the map if this is a [`Value::Mapping`].
    pub fn as_mapping(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Descends through nested mappings following a dotted path.
    ///
    /// Each `.`-separated segment must name a key in the current mapping.
    /// Returns `None` if a segment is absent or the current node is not a
    /// mapping. The value reached may itself be a sub-tree.
    pub fn pointer(&self, path: &str) -> Option<&Value> {
        let mut current = self;
        for segment in path.split('.') {
            current = current.as_mapping()?.get(segment)?;
        }
        Some(current)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(serde_json::Number::from(n))
    }
}
