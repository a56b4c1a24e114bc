//! Output mode selection and dispatch.
//!
//! The dispatcher is the only place that knows about output modes;
//! printers and formatters never see them. Callers resolve a mode (from a
//! flag, config, or TTY detection — all outside this crate), then hand it
//! here together with the Field list and the response data.

use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::error::PrintError;
use crate::field::Field;
use crate::printer::{
    FoldingTablePrinter, JsonPrinter, Printer, RecordListPrinter, RecordPrinter, TablePrinter,
    UnixPrinter,
};

/// How response data should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Raw text of a pre-reduced scalar value.
    Unix,
    /// Machine-readable JSON of the source data.
    Json,
    /// One item as `name: value` lines.
    Record,
    /// Many items as blank-line-separated records.
    RecordList,
    /// Plain `" | "`-joined table, unconstrained width.
    Table,
    /// Bordered table folded to fit the terminal.
    #[default]
    FoldingTable,
}

impl OutputMode {
    /// Returns true for modes that serialize source data directly,
    /// bypassing Fields and Formatters.
    pub fn is_structured(&self) -> bool {
        matches!(self, OutputMode::Json)
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputMode::Unix => "unix",
            OutputMode::Json => "json",
            OutputMode::Record => "record",
            OutputMode::RecordList => "record-list",
            OutputMode::Table => "table",
            OutputMode::FoldingTable => "folding-table",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputMode {
    type Err = PrintError;

    /// Parses a mode name. An unrecognized name is a configuration error
    /// in the calling program ([`PrintError::UnsupportedMode`]), not a
    /// data error.
    fn from_str(s: &str) -> Result<Self, PrintError> {
        match s {
            "unix" => Ok(OutputMode::Unix),
            "json" => Ok(OutputMode::Json),
            "record" => Ok(OutputMode::Record),
            "record-list" => Ok(OutputMode::RecordList),
            "table" => Ok(OutputMode::Table),
            "folding-table" => Ok(OutputMode::FoldingTable),
            other => Err(PrintError::UnsupportedMode(other.to_string())),
        }
    }
}

/// Renders `data` in the given mode.
///
/// `fields` drive the record and table modes; unix and json modes ignore
/// them by design.
pub fn print_data(
    mode: OutputMode,
    fields: &[Field],
    data: &Value,
    out: &mut dyn Write,
) -> Result<(), PrintError> {
    match mode {
        OutputMode::Unix => UnixPrinter.echo(data, out),
        OutputMode::Json => JsonPrinter::new().echo(data, out),
        OutputMode::Record => RecordPrinter::new(fields.to_vec()).echo(data, out),
        OutputMode::RecordList => RecordListPrinter::new(fields.to_vec()).echo(data, out),
        OutputMode::Table => TablePrinter::new(fields.to_vec()).echo(data, out),
        OutputMode::FoldingTable => FoldingTablePrinter::new(fields.to_vec()).echo(data, out),
    }
}

/// Like [`print_data`] for any serializable value: the data is converted
/// to a [`Value`] first.
pub fn print_serialized<T: Serialize>(
    mode: OutputMode,
    fields: &[Field],
    data: &T,
    out: &mut dyn Write,
) -> Result<(), PrintError> {
    let value = serde_json::to_value(data)?;
    print_data(mode, fields, &value, out)
}

/// Escape hatch for a fully custom caller-supplied rendering function,
/// run under the same error contract as the built-in printers.
pub fn print_custom<F>(render: F, data: &Value, out: &mut dyn Write) -> Result<(), PrintError>
where
    F: Fn(&Value, &mut dyn Write) -> Result<(), PrintError>,
{
    render(data, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use serial_test::serial;

    #[test]
    fn mode_names_round_trip() {
        for mode in [
            OutputMode::Unix,
            OutputMode::Json,
            OutputMode::Record,
            OutputMode::RecordList,
            OutputMode::Table,
            OutputMode::FoldingTable,
        ] {
            assert_eq!(mode.to_string().parse::<OutputMode>().unwrap(), mode);
        }
    }

    #[test]
    fn unknown_mode_is_a_config_error() {
        let err = "yaml".parse::<OutputMode>().unwrap_err();
        assert!(matches!(err, PrintError::UnsupportedMode(_)));
    }

    #[test]
    #[serial]
    fn dispatch_selects_the_matching_printer() {
        outlay_render::set_columns(80);
        let fields = vec![Field::new("ID", "id")];
        let data = json!([{"id": 7}]);

        let mut out = Vec::new();
        print_data(OutputMode::Table, &fields, &data, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("ID\n"));

        let mut out = Vec::new();
        print_data(OutputMode::Json, &fields, &data, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\"id\": 7"));
    }

    #[test]
    fn print_serialized_converts_first() {
        #[derive(Serialize)]
        struct Item {
            id: u32,
        }
        let mut out = Vec::new();
        print_serialized(OutputMode::Json, &[], &Item { id: 3 }, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("\"id\": 3"));
    }

    #[test]
    fn custom_renderer_runs_under_the_same_contract() {
        let mut out = Vec::new();
        print_custom(
            |data, out| {
                writeln!(out, "custom: {}", data)?;
                Ok(())
            },
            &json!(1),
            &mut out,
        )
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "custom: 1\n");
    }
}
