//! Nested map flattening.
//!
//! Collapses a tree of JSON objects into a single-level object whose keys
//! are the dot-joined paths to each leaf. Only objects are descended into;
//! arrays, scalars and `null` are leaves. Empty objects contribute nothing.
//!
//! Keys are visited in input order (`serde_json` is built with
//! `preserve_order`), so when two paths flatten to the same key the one
//! visited last wins.

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Separator used by [`flatten_dict`].
pub const DEFAULT_SEPARATOR: &str = ".";

/// Flatten `d` into dot-notation keys, optionally under `prefix`.
pub fn flatten_dict(d: &Map<String, Value>, prefix: &str) -> Map<String, Value> {
    flatten_with_separator(d, prefix, DEFAULT_SEPARATOR)
}

/// Flatten `d`, joining path components with `separator`.
pub fn flatten_with_separator(
    d: &Map<String, Value>,
    prefix: &str,
    separator: &str,
) -> Map<String, Value> {
    let mut items = Map::new();
    walk(d, prefix, separator, &mut items);
    items
}

/// Flatten an arbitrary JSON value, which must be an object.
pub fn flatten_value(value: &Value, prefix: &str, separator: &str) -> Result<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(flatten_with_separator(map, prefix, separator)),
        other => Err(Error::InvalidArgument(format!(
            "expected a JSON object, got {}",
            kind_of(other)
        ))),
    }
}

fn walk(d: &Map<String, Value>, prefix: &str, separator: &str, out: &mut Map<String, Value>) {
    for (key, value) in d {
        // An empty prefix contributes no separator, at any depth.
        let new_key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}{}{}", prefix, separator, key)
        };

        match value {
            Value::Object(child) => walk(child, &new_key, separator, out),
            leaf => {
                out.insert(new_key, leaf.clone());
            }
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
