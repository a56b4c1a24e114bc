//! Key/value record output, single and list form.

use serde_json::Value;
use std::io::Write;

use outlay_render::{display_width, pad_right, term, wrap};

use super::{as_items, Printer};
use crate::error::PrintError;
use crate::field::Field;

/// A wrapped value is cut off after this many lines, plus a `...` line.
const MAX_WRAPPED_LINES: usize = 5;

/// Prints one item as aligned `name: value` lines.
///
/// Labels share a common column width of `max(name length) + 2`.
/// Wrap-eligible fields whose value exceeds the remaining terminal width
/// are word-wrapped, continuation lines indented under the label column;
/// hard newlines in the value start independent wrap segments. Anything
/// beyond [`MAX_WRAPPED_LINES`] lines is truncated with a trailing `...`.
#[derive(Debug, Clone)]
pub struct RecordPrinter {
    fields: Vec<Field>,
}

impl RecordPrinter {
    pub fn new(fields: Vec<Field>) -> Self {
        RecordPrinter { fields }
    }

    fn record_lines(&self, data: &Value) -> Result<Vec<String>, PrintError> {
        let label_width = self
            .fields
            .iter()
            .map(|f| display_width(f.name()))
            .max()
            .unwrap_or(0)
            + 2;
        let available = term::columns().saturating_sub(label_width).max(1);
        let indent = " ".repeat(label_width);

        let mut lines = Vec::new();
        for field in &self.fields {
            let value = field.serialize(data)?;
            let label = pad_right(&format!("{}:", field.name()), label_width);
            let segments: Vec<&str> = value.split('\n').collect();

            let needs_wrap = field.wrap_eligible()
                && segments.iter().any(|seg| display_width(seg) > available);

            let value_lines: Vec<String> = if needs_wrap {
                segments
                    .iter()
                    .flat_map(|seg| wrap(seg, available))
                    .collect()
            } else {
                segments.iter().map(|seg| seg.to_string()).collect()
            };

            let truncate = needs_wrap && value_lines.len() > MAX_WRAPPED_LINES;
            let shown = if truncate {
                &value_lines[..MAX_WRAPPED_LINES]
            } else {
                &value_lines[..]
            };

            for (i, line) in shown.iter().enumerate() {
                if i == 0 {
                    lines.push(format!("{}{}", label, line));
                } else {
                    lines.push(format!("{}{}", indent, line));
                }
            }
            if shown.is_empty() {
                lines.push(label);
            }
            if truncate {
                lines.push(format!("{}...", indent));
            }
        }
        Ok(lines)
    }
}

impl Printer for RecordPrinter {
    fn echo(&self, data: &Value, out: &mut dyn Write) -> Result<(), PrintError> {
        for line in self.record_lines(data)? {
            writeln!(out, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

/// Applies the record layout once per item of an array, with exactly one
/// blank line between consecutive records.
#[derive(Debug, Clone)]
pub struct RecordListPrinter {
    record: RecordPrinter,
}

impl RecordListPrinter {
    pub fn new(fields: Vec<Field>) -> Self {
        RecordListPrinter {
            record: RecordPrinter::new(fields),
        }
    }
}

impl Printer for RecordListPrinter {
    fn echo(&self, data: &Value, out: &mut dyn Write) -> Result<(), PrintError> {
        for (i, item) in as_items(data)?.iter().enumerate() {
            if i > 0 {
                writeln!(out)?;
            }
            self.record.echo(item, out)?;
        }
        Ok(())
    }
}
