//! The formatter contract and library.
//!
//! A formatter is a two-stage converter: `parse` validates and reshapes a
//! raw [`Value`] into a typed intermediate, `render` turns that
//! intermediate into display text. The [`DynFormat`] blanket impl wraps
//! both stages in the safety policy every formatter shares:
//!
//! - a null raw value short-circuits to `"None"` without touching
//!   `parse`/`render`, unless the formatter opts in via
//!   [`Format::parse_null_values`];
//! - a `parse` failure is logged as a warning and falls back to the raw
//!   value's plain text form — rendering always completes;
//! - the one exception is [`FormatError::Resolution`]: a failed batched
//!   identity lookup signals a collaborator-level problem and propagates.
//!
//! # Example
//!
//! ```rust
//! use outlay::format::{ArrayFormat, DynFormat};
//! use serde_json::json;
//!
//! let fmt = ArrayFormat::new().sorted();
//! assert_eq!(fmt.format(&json!(["b", "a"])).unwrap(), "a,b");
//! // Wrong shape: warn + fallback, never an error.
//! assert_eq!(fmt.format(&json!(7)).unwrap(), "7");
//! ```

mod array;
mod basic;
mod date;
mod json;
mod principal;

pub use array::ArrayFormat;
pub use basic::{BoolFormat, FuzzyBoolFormat, ParentheticalFormat, StaticStringFormat, StrFormat};
pub use date::DateFormat;
pub use json::SortedJsonFormat;
pub(crate) use json::sort_keys;
pub use principal::{IdentityResolver, PrincipalFormat};

use crate::error::FormatError;
use serde_json::Value;

/// Text substituted for a null raw value.
pub const NULL_TEXT: &str = "None";

/// The typed two-stage formatter contract.
///
/// Implementors define `parse` and `render`; the formatting policy
/// (null short-circuit, warn-and-fall-back) comes from the blanket
/// [`DynFormat`] impl and is not overridable.
pub trait Format {
    /// Intermediate value produced by `parse` and consumed by `render`.
    type Parsed;

    /// Validates and reshapes the raw value. Errors here are recovered by
    /// the fallback policy, except [`FormatError::Resolution`].
    fn parse(&self, raw: &Value) -> Result<Self::Parsed, FormatError>;

    /// Renders the parsed value as display text. Infallible.
    fn render(&self, parsed: Self::Parsed) -> String;

    /// Whether a literal null raw value should be handed to `parse`
    /// instead of short-circuiting to [`NULL_TEXT`].
    fn parse_null_values(&self) -> bool {
        false
    }
}

/// Object-safe formatting entry point, implemented for every [`Format`].
///
/// `format` is total for well-behaved collaborators: the only error it
/// can surface is a failed batched identity lookup.
pub trait DynFormat {
    fn format(&self, raw: &Value) -> Result<String, FormatError>;
}

impl<F: Format> DynFormat for F {
    fn format(&self, raw: &Value) -> Result<String, FormatError> {
        if raw.is_null() && !self.parse_null_values() {
            return Ok(NULL_TEXT.to_string());
        }
        match self.parse(raw) {
            Ok(parsed) => Ok(self.render(parsed)),
            Err(err @ FormatError::Resolution(_)) => Err(err),
            Err(err) => {
                log::warn!(
                    target: "outlay::format",
                    "could not format {raw}: {err}; falling back to raw text"
                );
                Ok(raw_text(raw))
            }
        }
    }
}

/// The plain text form of a raw value: strings unquoted, null as
/// [`NULL_TEXT`], everything else as compact JSON.
pub fn raw_text(value: &Value) -> String {
    match value {
        Value::Null => NULL_TEXT.to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// JSON type name for error messages.
pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn null_short_circuits_without_parse() {
        // BoolFormat's parse rejects everything non-boolean, so a "None"
        // result proves parse was never consulted.
        let fmt = BoolFormat::default();
        assert_eq!(fmt.format(&Value::Null).unwrap(), "None");
    }

    #[test]
    fn fallback_returns_raw_text() {
        let fmt = BoolFormat::default();
        assert_eq!(fmt.format(&json!("nope")).unwrap(), "nope");
        assert_eq!(fmt.format(&json!(42)).unwrap(), "42");
    }

    #[test]
    fn raw_text_forms() {
        assert_eq!(raw_text(&Value::Null), "None");
        assert_eq!(raw_text(&json!("plain")), "plain");
        assert_eq!(raw_text(&json!([1, 2])), "[1,2]");
        assert_eq!(raw_text(&json!(true)), "true");
    }

    #[test]
    fn formatting_is_idempotent() {
        let fmt = StrFormat;
        let value = json!({"k": [1, 2, 3]});
        let first = fmt.format(&value).unwrap();
        let second = fmt.format(&value).unwrap();
        assert_eq!(first, second);
    }
}
