//! Printers: rendering strategies over a Field list and a data item.
//!
//! Every printer implements the same contract: [`Printer::echo`] writes
//! complete, newline-terminated lines to a caller-provided stream and
//! returns nothing. Printers are constructed once (with their Field list,
//! where they use one) and hold no per-dataset state, so a printer can be
//! invoked for any number of distinct datasets.
//!
//! | Printer | Input shape | Output |
//! |---------|-------------|--------|
//! | [`UnixPrinter`] | any (pre-reduced scalar) | raw text |
//! | [`JsonPrinter`] | any | sorted, indented JSON of the source data |
//! | [`RecordPrinter`] | one object | `name: value` lines |
//! | [`RecordListPrinter`] | array | blank-line-separated records |
//! | [`TablePrinter`] | array | `" \| "`-joined columns |
//! | [`FoldingTablePrinter`] | array | bordered grid, folded to fit |

mod folding;
mod json;
mod record;
mod table;
mod unix;

pub use folding::FoldingTablePrinter;
pub use json::JsonPrinter;
pub use record::{RecordListPrinter, RecordPrinter};
pub use table::TablePrinter;
pub use unix::UnixPrinter;

use serde_json::Value;
use std::io::Write;

use crate::error::PrintError;
use crate::format::type_name;

/// A rendering strategy consuming one data item (or an array of items).
pub trait Printer {
    /// Renders `data` to `out`. Side effect only; all output lines end in
    /// a single newline.
    fn echo(&self, data: &Value, out: &mut dyn Write) -> Result<(), PrintError>;
}

/// Requires `data` to be an array; list printers call this first.
pub(crate) fn as_items(data: &Value) -> Result<&Vec<Value>, PrintError> {
    data.as_array().ok_or(PrintError::InvalidData {
        expected: "array",
        found: type_name(data),
    })
}
