//! Delimited array formatting.

use serde_json::Value;
use std::sync::Arc;

use super::{type_name, DynFormat, Format, StrFormat};
use crate::error::FormatError;

/// Formats a JSON array as a delimited list.
///
/// Each element runs through a configurable per-element formatter
/// (default [`StrFormat`]); the rendered element strings are optionally
/// sorted, then joined with the delimiter (default `","`).
///
/// # Example
///
/// ```rust
/// use outlay::format::{ArrayFormat, DynFormat};
/// use serde_json::json;
///
/// let fmt = ArrayFormat::new().delimiter(" | ").sorted();
/// assert_eq!(fmt.format(&json!(["b", "a"])).unwrap(), "a | b");
/// ```
#[derive(Clone)]
pub struct ArrayFormat {
    delimiter: String,
    sort: bool,
    element: Arc<dyn DynFormat>,
}

impl ArrayFormat {
    pub fn new() -> Self {
        ArrayFormat {
            delimiter: ",".to_string(),
            sort: false,
            element: Arc::new(StrFormat),
        }
    }

    /// Sets the join delimiter.
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Sorts the rendered element strings lexicographically.
    pub fn sorted(mut self) -> Self {
        self.sort = true;
        self
    }

    /// Sets the per-element formatter.
    pub fn element(mut self, formatter: Arc<dyn DynFormat>) -> Self {
        self.element = formatter;
        self
    }
}

impl Default for ArrayFormat {
    fn default() -> Self {
        ArrayFormat::new()
    }
}

impl Format for ArrayFormat {
    type Parsed = Vec<String>;

    fn parse(&self, raw: &Value) -> Result<Vec<String>, FormatError> {
        let items = raw.as_array().ok_or(FormatError::TypeMismatch {
            expected: "array",
            found: type_name(raw),
        })?;
        let mut rendered = Vec::with_capacity(items.len());
        for item in items {
            // Element-level parse failures are already recovered inside
            // the element formatter; only resolution failures escape.
            rendered.push(self.element.format(item)?);
        }
        if self.sort {
            rendered.sort();
        }
        Ok(rendered)
    }

    fn render(&self, parsed: Vec<String>) -> String {
        parsed.join(&self.delimiter)
    }
}
