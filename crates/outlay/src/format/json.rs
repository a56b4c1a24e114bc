//! Deterministic JSON rendering with sorted object keys.

use serde_json::{Map, Value};
use std::collections::BTreeMap;

use super::Format;
use crate::error::FormatError;

/// Renders any JSON-representable value as compact JSON with
/// lexicographically sorted object keys at every nesting level.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortedJsonFormat;

impl Format for SortedJsonFormat {
    type Parsed = Value;

    fn parse(&self, raw: &Value) -> Result<Value, FormatError> {
        Ok(sort_keys(raw))
    }

    fn render(&self, parsed: Value) -> String {
        parsed.to_string()
    }
}

/// Returns a copy of `value` with all object keys recursively sorted.
pub(crate) fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let sorted: BTreeMap<&String, &Value> = map.iter().collect();
            let mut out = Map::with_capacity(map.len());
            for (key, inner) in sorted {
                out.insert(key.clone(), sort_keys(inner));
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        other => other.clone(),
    }
}
