//! Simple (non-folding) table output.

use serde_json::Value;
use std::io::Write;

use outlay_render::{display_width, pad_right};

use super::{as_items, Printer};
use crate::error::PrintError;
use crate::field::Field;

const COLUMN_JOIN: &str = " | ";

/// Prints an array of items as a plain table: header row, dash separator,
/// one row per item. Column widths grow to the widest rendered cell
/// (header included); no width constraint is applied — use
/// [`FoldingTablePrinter`](super::FoldingTablePrinter) for that.
#[derive(Debug, Clone)]
pub struct TablePrinter {
    fields: Vec<Field>,
    headers: bool,
}

impl TablePrinter {
    pub fn new(fields: Vec<Field>) -> Self {
        TablePrinter {
            fields,
            headers: true,
        }
    }

    /// Suppresses the header and separator rows.
    pub fn no_headers(mut self) -> Self {
        self.headers = false;
        self
    }

    fn line(widths: &[usize], cells: impl Iterator<Item = String>) -> String {
        let padded: Vec<String> = cells
            .zip(widths)
            .map(|(cell, width)| pad_right(&cell, *width))
            .collect();
        padded.join(COLUMN_JOIN).trim_end().to_string()
    }
}

impl Printer for TablePrinter {
    fn echo(&self, data: &Value, out: &mut dyn Write) -> Result<(), PrintError> {
        let items = as_items(data)?;

        let mut rows: Vec<Vec<String>> = Vec::with_capacity(items.len());
        for item in items {
            let mut row = Vec::with_capacity(self.fields.len());
            for field in &self.fields {
                row.push(field.serialize(item)?);
            }
            rows.push(row);
        }

        let mut widths: Vec<usize> = self
            .fields
            .iter()
            .map(|f| if self.headers { display_width(f.name()) } else { 0 })
            .collect();
        for row in &rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(display_width(cell));
            }
        }

        if self.headers {
            let header = Self::line(
                &widths,
                self.fields.iter().map(|f| f.name().to_string()),
            );
            writeln!(out, "{}", header)?;
            let separator = Self::line(&widths, widths.iter().map(|w| "-".repeat(*w)));
            writeln!(out, "{}", separator)?;
        }
        for row in rows {
            writeln!(out, "{}", Self::line(&widths, row.into_iter()))?;
        }
        Ok(())
    }
}
