//! The Field model: named, extractable, formattable attributes.
//!
//! A [`Field`] declares how one column or record line is produced from a
//! data item: where the value comes from (a dotted path or a computed
//! extractor), how it is formatted, and whether the record printer may
//! wrap it. Fields are immutable once built and are typically declared
//! once at module scope and reused across many printed items.
//!
//! # Example
//!
//! ```rust
//! use outlay::Field;
//! use outlay::format::DateFormat;
//! use serde_json::json;
//!
//! let fields = vec![
//!     Field::new("ID", "id"),
//!     Field::new("Created", "meta.created").formatter(DateFormat),
//!     Field::new("Note", "note").wrap(),
//! ];
//!
//! let item = json!({"id": "x-1", "meta": {"created": "2022-04-05T16:27:48"}});
//! assert_eq!(fields[0].serialize(&item).unwrap(), "x-1");
//! assert_eq!(fields[2].serialize(&item).unwrap(), "None");
//! ```

use serde_json::Value;
use std::fmt;
use std::sync::Arc;

use crate::error::FormatError;
use crate::format::{DynFormat, StrFormat};

/// How a field extracts its raw value from a data item.
///
/// The accessor's shape is decided once, at construction; rendering never
/// re-inspects it.
#[derive(Clone)]
pub enum Accessor {
    /// A dotted path, pre-split into segments. Each segment is a mapping
    /// lookup; a missing or null segment short-circuits to null.
    Path(Vec<String>),
    /// An arbitrary extraction function. Invoked verbatim; panics inside
    /// the function are the caller's own.
    Func(Arc<dyn Fn(&Value) -> Value>),
}

impl fmt::Debug for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accessor::Path(segments) => f.debug_tuple("Path").field(&segments.join(".")).finish(),
            Accessor::Func(_) => f.write_str("Func(..)"),
        }
    }
}

/// One named, extractable, formattable attribute of a data item.
#[derive(Clone)]
pub struct Field {
    name: String,
    accessor: Accessor,
    wrap_eligible: bool,
    formatter: Arc<dyn DynFormat>,
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("accessor", &self.accessor)
            .field("wrap_eligible", &self.wrap_eligible)
            .finish()
    }
}

impl Field {
    /// Creates a field reading a dotted path (e.g. `"a.b.c"`), with the
    /// default string formatter and wrapping disabled.
    pub fn new(name: impl Into<String>, path: &str) -> Self {
        Field {
            name: name.into(),
            accessor: Accessor::Path(path.split('.').map(str::to_string).collect()),
            wrap_eligible: false,
            formatter: Arc::new(StrFormat),
        }
    }

    /// Creates a field whose raw value is computed by a function.
    pub fn computed(name: impl Into<String>, f: impl Fn(&Value) -> Value + 'static) -> Self {
        Field {
            name: name.into(),
            accessor: Accessor::Func(Arc::new(f)),
            wrap_eligible: false,
            formatter: Arc::new(StrFormat),
        }
    }

    /// Marks the field's value as wrappable by the record printer.
    pub fn wrap(mut self) -> Self {
        self.wrap_eligible = true;
        self
    }

    /// Replaces the formatter.
    pub fn formatter(mut self, formatter: impl DynFormat + 'static) -> Self {
        self.formatter = Arc::new(formatter);
        self
    }

    /// Replaces the formatter with a shared instance (useful when one
    /// formatter carries state, like a principal resolver cache).
    pub fn shared_formatter(mut self, formatter: Arc<dyn DynFormat>) -> Self {
        self.formatter = formatter;
        self
    }

    /// The display label (column header or record key).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the record printer may wrap this field's value.
    pub fn wrap_eligible(&self) -> bool {
        self.wrap_eligible
    }

    /// Resolves the accessor against `data`.
    ///
    /// Dotted paths never fail: any absent or null segment yields
    /// `Value::Null`.
    pub fn get_value(&self, data: &Value) -> Value {
        match &self.accessor {
            Accessor::Path(segments) => {
                let mut current = data;
                for segment in segments {
                    match current.get(segment) {
                        Some(next) => current = next,
                        None => return Value::Null,
                    }
                }
                current.clone()
            }
            Accessor::Func(f) => f(data),
        }
    }

    /// Extracts and formats the field's value for one item.
    pub fn serialize(&self, data: &Value) -> Result<String, FormatError> {
        self.formatter.format(&self.get_value(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{BoolFormat, StaticStringFormat};
    use serde_json::json;

    #[test]
    fn dotted_path_resolves_nested_values() {
        let field = Field::new("x", "a.b.c");
        assert_eq!(
            field.get_value(&json!({"a": {"b": {"c": "v"}}})),
            json!("v")
        );
    }

    #[test]
    fn dotted_path_missing_segment_is_null() {
        let field = Field::new("x", "a.b.c");
        assert_eq!(field.get_value(&json!({"a": {"b": {}}})), Value::Null);
        assert_eq!(field.get_value(&json!({})), Value::Null);
        assert_eq!(field.get_value(&json!("scalar")), Value::Null);
    }

    #[test]
    fn null_mid_path_short_circuits() {
        let field = Field::new("x", "a.b.c");
        assert_eq!(field.get_value(&json!({"a": {"b": null}})), Value::Null);
    }

    #[test]
    fn computed_accessor_runs_verbatim() {
        let field = Field::computed("sum", |data| {
            let a = data["a"].as_i64().unwrap_or(0);
            let b = data["b"].as_i64().unwrap_or(0);
            json!(a + b)
        });
        assert_eq!(field.get_value(&json!({"a": 2, "b": 3})), json!(5));
    }

    #[test]
    fn serialize_goes_through_the_formatter() {
        let field = Field::new("Active", "active").formatter(BoolFormat::default());
        assert_eq!(field.serialize(&json!({"active": true})).unwrap(), "True");
        assert_eq!(field.serialize(&json!({})).unwrap(), "None");
    }

    #[test]
    fn fields_are_reusable_across_items() {
        let field = Field::new("n", "n").formatter(StaticStringFormat::new("k"));
        assert_eq!(field.serialize(&json!({"n": 1})).unwrap(), "k");
        assert_eq!(field.serialize(&json!({"n": 2})).unwrap(), "k");
    }
}
