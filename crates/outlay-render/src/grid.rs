//! Bordered grid rendering for folded tables.
//!
//! Renders a [`Table`] as a box-drawn grid: a double-bordered header
//! block, a double rule separating the header from the data, light rules
//! between the sub-rows of one logical record, and double rules between
//! distinct records so folded records stay visually grouped.
//!
//! ```text
//! ╔════╤══════╗
//! ║ id │ name ║
//! ╠════╪══════╣
//! ║ 1  │ ada  ║
//! ╠════╪══════╣
//! ║ 2  │ bob  ║
//! ╚════╧══════╝
//! ```
//!
//! Light rules (`╟───╢`) appear only inside a folded record, between its
//! stacked sub-rows.

use crate::fold::{Row, Table};
use crate::util::pad_right;

/// Line-drawing characters for one class of horizontal rule.
#[derive(Clone, Copy, Debug)]
struct RuleChars {
    left: char,
    horizontal: char,
    junction: char,
    right: char,
}

/// Double rule used for the outer frame and record boundaries.
const HEAVY_TOP: RuleChars = RuleChars {
    left: '╔',
    horizontal: '═',
    junction: '╤',
    right: '╗',
};
const HEAVY_MID: RuleChars = RuleChars {
    left: '╠',
    horizontal: '═',
    junction: '╪',
    right: '╣',
};
const HEAVY_BOTTOM: RuleChars = RuleChars {
    left: '╚',
    horizontal: '═',
    junction: '╧',
    right: '╝',
};

/// Light rule used between sub-rows of the same record.
const LIGHT_MID: RuleChars = RuleChars {
    left: '╟',
    horizontal: '─',
    junction: '┼',
    right: '╢',
};

/// Renders the table as a bordered grid, one `\n`-terminated line per row
/// of output.
pub fn render(table: &Table) -> String {
    let widths = table.column_widths();
    let mut out = String::new();

    push_rule(&mut out, &widths, HEAVY_TOP);
    push_row(&mut out, &widths, table.header(), LIGHT_MID);

    for row in table.rows() {
        // Heavy rule both after the header and between records.
        push_rule(&mut out, &widths, HEAVY_MID);
        push_row(&mut out, &widths, row, LIGHT_MID);
    }

    push_rule(&mut out, &widths, HEAVY_BOTTOM);
    out
}

/// Appends a horizontal rule spanning all columns.
fn push_rule(out: &mut String, widths: &[usize], chars: RuleChars) {
    out.push(chars.left);
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            out.push(chars.junction);
        }
        for _ in 0..(width + 2) {
            out.push(chars.horizontal);
        }
    }
    out.push(chars.right);
    out.push('\n');
}

/// Appends one logical row: its sub-rows separated by `divider` rules.
fn push_row(out: &mut String, widths: &[usize], row: &Row, divider: RuleChars) {
    for (i, sub_row) in row.sub_rows().iter().enumerate() {
        if i > 0 {
            push_rule(out, widths, divider);
        }
        push_cells(out, widths, sub_row);
    }
}

/// Appends a single line of cells, padding ragged sub-rows with blanks.
fn push_cells(out: &mut String, widths: &[usize], cells: &[String]) {
    for (i, width) in widths.iter().enumerate() {
        out.push(if i == 0 { '║' } else { '│' });
        out.push(' ');
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        out.push_str(&pad_right(cell, *width));
        out.push(' ');
    }
    out.push('║');
    out.push('\n');
}
