//! ISO-8601 timestamp formatting.

use chrono::{DateTime, Local, NaiveDateTime};
use serde_json::Value;

use super::{type_name, Format};
use crate::error::FormatError;

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders ISO-8601 timestamps as `YYYY-MM-DD HH:MM:SS`.
///
/// Values carrying a UTC offset are converted to local time first; naive
/// values render as-is. Sub-second precision is dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateFormat;

/// Parsed timestamp, preserving whether the input carried an offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedDate {
    Zoned(DateTime<Local>),
    Naive(NaiveDateTime),
}

impl Format for DateFormat {
    type Parsed = ParsedDate;

    fn parse(&self, raw: &Value) -> Result<ParsedDate, FormatError> {
        let text = raw.as_str().ok_or(FormatError::TypeMismatch {
            expected: "timestamp string",
            found: type_name(raw),
        })?;
        match DateTime::parse_from_rfc3339(text) {
            Ok(zoned) => Ok(ParsedDate::Zoned(zoned.with_timezone(&Local))),
            // No offset marker: parse as a naive timestamp instead.
            Err(_) => Ok(ParsedDate::Naive(text.parse::<NaiveDateTime>()?)),
        }
    }

    fn render(&self, parsed: ParsedDate) -> String {
        match parsed {
            ParsedDate::Zoned(dt) => dt.format(DISPLAY_FORMAT).to_string(),
            ParsedDate::Naive(dt) => dt.format(DISPLAY_FORMAT).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::DynFormat;
    use serde_json::json;

    #[test]
    fn naive_timestamps_render_as_is() {
        let fmt = DateFormat;
        assert_eq!(
            fmt.format(&json!("2022-04-05T16:27:48.805427")).unwrap(),
            "2022-04-05 16:27:48"
        );
    }

    #[test]
    fn offset_timestamps_convert_to_local_time() {
        let fmt = DateFormat;
        let parsed = fmt.parse(&json!("2022-04-05T16:27:48+00:00")).unwrap();
        match parsed {
            ParsedDate::Zoned(dt) => {
                let expected = DateTime::parse_from_rfc3339("2022-04-05T16:27:48+00:00")
                    .unwrap()
                    .with_timezone(&Local);
                assert_eq!(dt, expected);
            }
            ParsedDate::Naive(_) => panic!("offset input must parse as zoned"),
        }
    }

    #[test]
    fn garbage_falls_back_to_raw_text() {
        let fmt = DateFormat;
        assert_eq!(fmt.format(&json!("not a date")).unwrap(), "not a date");
        assert_eq!(fmt.format(&json!(1649176068)).unwrap(), "1649176068");
    }

    #[test]
    fn null_renders_none() {
        assert_eq!(DateFormat.format(&Value::Null).unwrap(), "None");
    }
}
