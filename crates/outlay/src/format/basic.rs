//! Scalar formatters: strings, booleans, parenthetical pairs, constants.

use serde_json::Value;

use super::{raw_text, type_name, Format};
use crate::error::FormatError;

/// Default formatter: stringifies anything, renders it unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrFormat;

impl Format for StrFormat {
    type Parsed = String;

    fn parse(&self, raw: &Value) -> Result<String, FormatError> {
        Ok(raw_text(raw))
    }

    fn render(&self, parsed: String) -> String {
        parsed
    }
}

/// Type-strict boolean formatter with configurable true/false text.
///
/// `parse` accepts only a JSON boolean; anything else falls back through
/// the standard warn-and-raw-text policy. Use [`FuzzyBoolFormat`] for
/// presence-like API fields that are not proper booleans.
#[derive(Debug, Clone)]
pub struct BoolFormat {
    true_text: String,
    false_text: String,
}

impl BoolFormat {
    pub fn new(true_text: impl Into<String>, false_text: impl Into<String>) -> Self {
        BoolFormat {
            true_text: true_text.into(),
            false_text: false_text.into(),
        }
    }
}

impl Default for BoolFormat {
    fn default() -> Self {
        BoolFormat::new("True", "False")
    }
}

impl Format for BoolFormat {
    type Parsed = bool;

    fn parse(&self, raw: &Value) -> Result<bool, FormatError> {
        raw.as_bool().ok_or(FormatError::TypeMismatch {
            expected: "boolean",
            found: type_name(raw),
        })
    }

    fn render(&self, parsed: bool) -> String {
        if parsed {
            self.true_text.clone()
        } else {
            self.false_text.clone()
        }
    }
}

/// Truthiness-coercing boolean formatter.
///
/// Renders like [`BoolFormat`] but accepts any raw value, including a
/// literal null (null, `false`, `0`, `""`, `[]` and `{}` are false).
#[derive(Debug, Clone)]
pub struct FuzzyBoolFormat {
    inner: BoolFormat,
}

impl FuzzyBoolFormat {
    pub fn new(true_text: impl Into<String>, false_text: impl Into<String>) -> Self {
        FuzzyBoolFormat {
            inner: BoolFormat::new(true_text, false_text),
        }
    }
}

impl Default for FuzzyBoolFormat {
    fn default() -> Self {
        FuzzyBoolFormat {
            inner: BoolFormat::default(),
        }
    }
}

fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

impl Format for FuzzyBoolFormat {
    type Parsed = bool;

    fn parse(&self, raw: &Value) -> Result<bool, FormatError> {
        Ok(truthy(raw))
    }

    fn render(&self, parsed: bool) -> String {
        self.inner.render(parsed)
    }

    fn parse_null_values(&self) -> bool {
        true
    }
}

/// Formats a `[main, description]` pair as `"main (description)"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParentheticalFormat;

impl Format for ParentheticalFormat {
    type Parsed = (String, String);

    fn parse(&self, raw: &Value) -> Result<(String, String), FormatError> {
        let items = raw.as_array().ok_or(FormatError::TypeMismatch {
            expected: "array",
            found: type_name(raw),
        })?;
        match items.as_slice() {
            [Value::String(main), Value::String(description)] => {
                Ok((main.clone(), description.clone()))
            }
            _ => Err(FormatError::Malformed(
                "expected a 2-element array of strings".to_string(),
            )),
        }
    }

    fn render(&self, (main, description): (String, String)) -> String {
        format!("{} ({})", main, description)
    }
}

/// Ignores the raw value and always renders a fixed string.
///
/// A null raw value still short-circuits to `"None"`, like every
/// formatter other than [`FuzzyBoolFormat`].
#[derive(Debug, Clone)]
pub struct StaticStringFormat {
    text: String,
}

impl StaticStringFormat {
    pub fn new(text: impl Into<String>) -> Self {
        StaticStringFormat { text: text.into() }
    }
}

impl Format for StaticStringFormat {
    type Parsed = ();

    fn parse(&self, _raw: &Value) -> Result<(), FormatError> {
        Ok(())
    }

    fn render(&self, _parsed: ()) -> String {
        self.text.clone()
    }
}
