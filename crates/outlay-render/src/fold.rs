//! Width-constrained table folding.
//!
//! A wide table is never truncated here; instead its columns are "folded"
//! into stacked sub-rows until the table fits the available width. Folding
//! a row by `n` deals its flat cell list round-robin into `n` sub-rows, so
//! a 6-column row folded by 2 becomes two sub-rows holding the odd and
//! even columns by position.
//!
//! The driver, [`layout`], tries shapes in a fixed order: unfolded, folded
//! by 2, folded by 3, and finally folded by the original column count (one
//! column per sub-row, the narrowest possible shape). The final fallback
//! is taken without a width check; nothing narrower exists.

use crate::error::LayoutError;
use crate::util::display_width;

/// Decoration cost per rendered column: two pad spaces plus one divider.
pub const COLUMN_OVERHEAD: usize = 3;

/// Decoration cost per rendered line: the leading border.
pub const ROW_OVERHEAD: usize = 1;

/// One logical table record as a grid of already-serialized cell strings.
///
/// A freshly built row has a single sub-row holding all of its columns.
/// Folding redistributes those cells into stacked sub-rows; it is a
/// one-way transform, defined only on unfolded rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    sub_rows: Vec<Vec<String>>,
}

impl Row {
    /// Creates an unfolded row from a flat list of cells.
    pub fn new(cells: Vec<String>) -> Self {
        Row {
            sub_rows: vec![cells],
        }
    }

    /// Returns true once the row has been folded into multiple sub-rows.
    pub fn is_folded(&self) -> bool {
        self.sub_rows.len() > 1
    }

    /// Total number of cells across all sub-rows.
    pub fn cell_count(&self) -> usize {
        self.sub_rows.iter().map(Vec::len).sum()
    }

    /// Widest sub-row, in cells. This is the column count the row occupies
    /// when rendered.
    pub fn rendered_columns(&self) -> usize {
        self.sub_rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// The stacked sub-rows of this row.
    pub fn sub_rows(&self) -> &[Vec<String>] {
        &self.sub_rows
    }

    /// Folds the flat cell list into `n` stacked sub-rows, cell `i` going
    /// to sub-row `i % n`.
    ///
    /// Only unfolded rows can be folded; re-folding would scramble the
    /// cell order. The layout driver always folds from the original
    /// unfolded table, so this is an internal invariant rather than a
    /// user-facing error path.
    pub fn folded(&self, n: usize) -> Row {
        debug_assert!(!self.is_folded(), "a folded row cannot be folded again");
        let n = n.max(1);
        let mut sub_rows: Vec<Vec<String>> = vec![Vec::new(); n];
        for (i, cell) in self.sub_rows[0].iter().enumerate() {
            sub_rows[i % n].push(cell.clone());
        }
        Row { sub_rows }
    }

    /// Max display width of the cells at `column` across this row's
    /// sub-rows. Sub-rows too short to reach `column` contribute 0.
    fn column_width(&self, column: usize) -> usize {
        self.sub_rows
            .iter()
            .filter_map(|sub| sub.get(column))
            .map(|cell| display_width(cell))
            .max()
            .unwrap_or(0)
    }
}

/// An ordered sequence of rows where the first row is the header.
///
/// Every row must enter with the same column count as the header; that is
/// validated at construction and preserved by folding (every row folds by
/// the same factor).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    header: Row,
    rows: Vec<Row>,
}

impl Table {
    /// Builds an unfolded table from a header and data rows.
    pub fn new(header: Vec<String>, rows: Vec<Vec<String>>) -> Result<Table, LayoutError> {
        let expected = header.len();
        for row in &rows {
            if row.len() != expected {
                return Err(LayoutError::ColumnMismatch {
                    expected,
                    found: row.len(),
                });
            }
        }
        Ok(Table {
            header: Row::new(header),
            rows: rows.into_iter().map(Row::new).collect(),
        })
    }

    /// The header row.
    pub fn header(&self) -> &Row {
        &self.header
    }

    /// The data rows, header excluded.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Column count of the original, unfolded table.
    pub fn cell_count(&self) -> usize {
        self.header.cell_count()
    }

    /// Number of columns the table occupies as currently shaped.
    pub fn rendered_columns(&self) -> usize {
        self.rows
            .iter()
            .chain(std::iter::once(&self.header))
            .map(Row::rendered_columns)
            .max()
            .unwrap_or(0)
    }

    /// Folds every row (header included) by `n`.
    pub fn folded(&self, n: usize) -> Table {
        Table {
            header: self.header.folded(n),
            rows: self.rows.iter().map(|row| row.folded(n)).collect(),
        }
    }

    /// Per-column render widths: the max cell width observed at each
    /// column index over every sub-row of every row.
    pub fn column_widths(&self) -> Vec<usize> {
        let columns = self.rendered_columns();
        (0..columns)
            .map(|col| {
                self.rows
                    .iter()
                    .chain(std::iter::once(&self.header))
                    .map(|row| row.column_width(col))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Minimum rendered width of the table, decorations included.
    pub fn min_width(&self) -> usize {
        ROW_OVERHEAD
            + self
                .column_widths()
                .iter()
                .map(|w| w + COLUMN_OVERHEAD)
                .sum::<usize>()
    }

    /// Whether the table as currently shaped fits in `available` columns.
    pub fn fits(&self, available: usize) -> bool {
        self.min_width() <= available
    }
}

/// Shapes a table to fit `available` columns.
///
/// Tries the unfolded shape, then folding by 2, then by 3, then falls back
/// to folding by the original column count. The fallback is one column per
/// sub-row and is not re-validated against the width: it is the narrowest
/// shape that exists.
pub fn layout(
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    available: usize,
) -> Result<Table, LayoutError> {
    let table = Table::new(header, rows)?;
    if table.fits(available) {
        return Ok(table);
    }
    for n in [2, 3] {
        let folded = table.folded(n);
        if folded.fits(available) {
            return Ok(folded);
        }
    }
    Ok(table.folded(table.cell_count()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn fold_even_row_by_two() {
        let row = Row::new(cells(&["c1", "c2", "c3", "c4", "c5", "c6"]));
        let folded = row.folded(2);
        assert_eq!(folded.sub_rows()[0], cells(&["c1", "c3", "c5"]));
        assert_eq!(folded.sub_rows()[1], cells(&["c2", "c4", "c6"]));
    }

    #[test]
    fn fold_row_with_remainder() {
        let row = Row::new(cells(&["c1", "c2", "c3", "c4", "c5"]));
        let folded = row.folded(2);
        assert_eq!(folded.sub_rows()[0], cells(&["c1", "c3", "c5"]));
        assert_eq!(folded.sub_rows()[1], cells(&["c2", "c4"]));
    }

    #[test]
    fn fold_by_column_count_gives_single_cell_sub_rows() {
        let row = Row::new(cells(&["c1", "c2", "c3", "c4", "c5", "c6"]));
        let folded = row.folded(6);
        assert_eq!(folded.sub_rows().len(), 6);
        for (i, sub) in folded.sub_rows().iter().enumerate() {
            assert_eq!(sub, &cells(&[&format!("c{}", i + 1)]));
        }
    }

    #[test]
    fn fold_preserves_cell_count() {
        let row = Row::new(cells(&["a", "b", "c", "d", "e"]));
        for n in 1..=7 {
            assert_eq!(row.folded(n).cell_count(), 5);
        }
    }

    #[test]
    fn table_rejects_mismatched_rows() {
        let err = Table::new(cells(&["a", "b"]), vec![cells(&["1", "2", "3"])]).unwrap_err();
        assert_eq!(
            err,
            LayoutError::ColumnMismatch {
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn widths_span_header_and_data() {
        let table = Table::new(
            cells(&["id", "name"]),
            vec![cells(&["1", "a-long-value"]), cells(&["23", "x"])],
        )
        .unwrap();
        assert_eq!(table.column_widths(), vec![2, 12]);
    }

    #[test]
    fn ragged_sub_rows_contribute_zero_width() {
        // 3 columns folded by 2: second sub-row has one cell.
        let table = Table::new(cells(&["a", "b", "c"]), vec![]).unwrap().folded(2);
        assert_eq!(table.rendered_columns(), 2);
        assert_eq!(table.column_widths(), vec![1, 1]);
    }

    #[test]
    fn layout_keeps_fitting_table_unfolded() {
        let table = layout(
            cells(&["id", "name"]),
            vec![cells(&["1", "ok"])],
            80,
        )
        .unwrap();
        assert!(!table.header().is_folded());
    }

    #[test]
    fn layout_folds_by_two_when_needed() {
        // Unfolded: 1 + 4 * (6 + 3) = 37. Folded by 2: 1 + 2 * (6 + 3) = 19.
        let header = cells(&["aaaaaa", "bbbbbb", "cccccc", "dddddd"]);
        let table = layout(header, vec![], 20).unwrap();
        assert_eq!(table.header().sub_rows().len(), 2);
    }

    #[test]
    fn layout_falls_back_to_column_count() {
        let header = cells(&["aaaaaaaaaa", "bbbbbbbbbb", "cccccccccc", "dddddddddd"]);
        let rows = vec![cells(&["1111111111", "2222222222", "3333333333", "4444444444"])];
        // Too narrow for any multi-column shape.
        let table = layout(header, rows, 16).unwrap();
        assert_eq!(table.header().sub_rows().len(), 4);
        assert_eq!(table.rendered_columns(), 1);
        // One 10-wide column: 1 + (10 + 3) = 14.
        assert_eq!(table.min_width(), 14);
    }

    #[test]
    fn layout_with_no_data_rows() {
        let table = layout(cells(&["id", "name"]), vec![], 80).unwrap();
        assert!(table.rows().is_empty());
        assert_eq!(table.header().sub_rows()[0], cells(&["id", "name"]));
    }
}
