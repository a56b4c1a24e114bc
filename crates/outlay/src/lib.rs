//! # Outlay - Data-Model-Driven CLI Output
//!
//! `outlay` renders heterogeneous API response data — records, lists of
//! records, scalars — in multiple display modes: structured tables,
//! width-folded tables, key/value records, raw text, and machine-readable
//! JSON.
//!
//! ## Core Concepts
//!
//! - [`Field`]: how to extract and format one named attribute of a data
//!   item (dotted path or computed accessor, plus a formatter)
//! - [`format`]: the parse-then-render formatter library with a safe
//!   fallback — formatting problems warn and degrade, they never crash a
//!   command
//! - [`printer`]: rendering strategies consuming a Field list and data
//! - [`OutputMode`] / [`print_data`]: the dispatch layer tying a resolved
//!   mode to a printer
//!
//! ## Quick Start
//!
//! ```rust
//! use outlay::{print_data, Field, OutputMode};
//! use outlay::format::DateFormat;
//! use serde_json::json;
//!
//! let fields = vec![
//!     Field::new("ID", "id"),
//!     Field::new("Created", "created").formatter(DateFormat),
//! ];
//! let data = json!([
//!     {"id": "x-1", "created": "2022-04-05T16:27:48.805427"},
//! ]);
//!
//! let mut out = Vec::new();
//! print_data(OutputMode::Table, &fields, &data, &mut out).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "ID  | Created\n--- | -------------------\nx-1 | 2022-04-05 16:27:48\n"
//! );
//! ```
//!
//! ## Width Folding
//!
//! The folding table mode never truncates: when a table is too wide for
//! the terminal, its columns fold into stacked sub-rows (by 2, then 3,
//! then one column per sub-row). The layout machinery lives in the
//! [`outlay_render`] crate and is re-exported as [`render`].

mod error;
mod field;
pub mod format;
mod output;
pub mod printer;

pub use error::{FormatError, PrintError, ResolveError};
pub use field::{Accessor, Field};
pub use output::{print_custom, print_data, print_serialized, OutputMode};

/// Re-export of the layout crate (terminal metrics, folding, grids).
pub use outlay_render as render;
