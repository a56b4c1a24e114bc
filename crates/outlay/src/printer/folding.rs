//! Width-folding table output.

use serde_json::Value;
use std::io::Write;

use outlay_render::{grid, layout, term};

use super::{as_items, Printer};
use crate::error::PrintError;
use crate::field::Field;

/// Prints an array of items as a bordered table that always fits the
/// terminal.
///
/// When the natural table shape is too wide, columns are folded into
/// stacked sub-rows (by 2, then 3, then one column per sub-row) rather
/// than truncated, so no information is silently dropped. See
/// [`outlay_render::layout`] for the exact policy.
#[derive(Debug, Clone)]
pub struct FoldingTablePrinter {
    fields: Vec<Field>,
}

impl FoldingTablePrinter {
    pub fn new(fields: Vec<Field>) -> Self {
        FoldingTablePrinter { fields }
    }
}

impl Printer for FoldingTablePrinter {
    fn echo(&self, data: &Value, out: &mut dyn Write) -> Result<(), PrintError> {
        let items = as_items(data)?;

        let header: Vec<String> = self.fields.iter().map(|f| f.name().to_string()).collect();
        let mut rows: Vec<Vec<String>> = Vec::with_capacity(items.len());
        for item in items {
            let mut row = Vec::with_capacity(self.fields.len());
            for field in &self.fields {
                row.push(field.serialize(item)?);
            }
            rows.push(row);
        }

        let table = layout(header, rows, term::columns())?;
        out.write_all(grid::render(&table).as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use serial_test::serial;

    fn echoed(printer: &FoldingTablePrinter, data: &Value) -> String {
        let mut out = Vec::new();
        printer.echo(data, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    #[serial]
    fn narrow_table_stays_unfolded() {
        term::set_columns(80);
        let printer = FoldingTablePrinter::new(vec![
            Field::new("ID", "id"),
            Field::new("Name", "name"),
        ]);
        let text = echoed(&printer, &json!([{"id": "1", "name": "ada"}]));
        let expected = "\
╔════╤══════╗
║ ID │ Name ║
╠════╪══════╣
║ 1  │ ada  ║
╚════╧══════╝
";
        assert_eq!(text, expected);
    }

    #[test]
    #[serial]
    fn wide_table_folds_to_fit() {
        term::set_columns(40);
        let printer = FoldingTablePrinter::new(vec![
            Field::new("First Column Header", "a"),
            Field::new("Second Column Header", "b"),
            Field::new("Third Column Header", "c"),
            Field::new("Fourth Column Header", "d"),
        ]);
        let text = echoed(
            &printer,
            &json!([{"a": "1", "b": "2", "c": "3", "d": "4"}]),
        );
        for line in text.lines() {
            assert!(
                outlay_render::display_width(line) <= 40,
                "line too wide: {line:?}"
            );
        }
        // Folded: header cells stack into sub-rows.
        assert!(text.contains('╟'));
    }

    #[test]
    #[serial]
    fn zero_items_render_header_only() {
        term::set_columns(80);
        let printer = FoldingTablePrinter::new(vec![
            Field::new("ID", "id"),
            Field::new("Name", "name"),
        ]);
        let text = echoed(&printer, &json!([]));
        assert!(text.contains("ID"));
        assert!(text.contains("Name"));
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    #[serial]
    fn non_array_is_invalid_data() {
        let printer = FoldingTablePrinter::new(vec![Field::new("ID", "id")]);
        let mut out = Vec::new();
        let err = printer.echo(&json!("scalar"), &mut out).unwrap_err();
        assert!(matches!(err, PrintError::InvalidData { .. }));
    }
}
