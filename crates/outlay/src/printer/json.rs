//! Machine-readable JSON output.

use serde_json::Value;
use std::io::Write;
use std::sync::Arc;

use super::Printer;
use crate::error::PrintError;
use crate::format::sort_keys;

/// Serializes the underlying structured data as indented JSON with
/// deterministic (sorted) key order.
///
/// Fields and formatters are bypassed entirely: JSON output is always the
/// untransformed source data, so scripts see exactly what the API
/// returned regardless of display-formatting rules. An optional converter
/// runs on the data first, for callers that need to reduce or reshape a
/// response before emitting it.
#[derive(Clone, Default)]
pub struct JsonPrinter {
    transform: Option<Arc<dyn Fn(&Value) -> Value>>,
}

impl JsonPrinter {
    pub fn new() -> Self {
        JsonPrinter { transform: None }
    }

    /// Applies `f` to the data before serialization.
    pub fn with_transform(f: impl Fn(&Value) -> Value + 'static) -> Self {
        JsonPrinter {
            transform: Some(Arc::new(f)),
        }
    }
}

impl Printer for JsonPrinter {
    fn echo(&self, data: &Value, out: &mut dyn Write) -> Result<(), PrintError> {
        let value = match &self.transform {
            Some(f) => f(data),
            None => data.clone(),
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&sort_keys(&value))?)?;
        Ok(())
    }
}

impl std::fmt::Debug for JsonPrinter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonPrinter")
            .field("transform", &self.transform.is_some())
            .finish()
    }
}
