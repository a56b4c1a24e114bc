//! # Outlay Render - Width-Constrained Layout Primitives
//!
//! `outlay-render` provides the low-level layout machinery behind the
//! `outlay` output engine: Unicode-aware text metrics, a process-wide
//! terminal width budget, and the table-folding algorithm that reshapes
//! wide tabular data into stacked sub-rows instead of truncating it.
//!
//! This crate knows nothing about fields, formatters, or output modes; it
//! works on already-serialized cell strings and can be used independently
//! for any terminal layout work.
//!
//! ## Core Concepts
//!
//! - [`term::columns`] / [`term::indented`]: the usable terminal width and
//!   a scoped way to reserve part of it
//! - [`Row`] / [`Table`]: grids of serialized cells, foldable round-robin
//!   into stacked sub-rows
//! - [`layout`]: the fold driver (unfolded → by 2 → by 3 → one column per
//!   sub-row)
//! - [`grid::render`]: box-drawn rendering of a (possibly folded) table
//!
//! ## Quick Start
//!
//! ```rust
//! use outlay_render::{grid, layout};
//!
//! let header = vec!["id".to_string(), "name".to_string()];
//! let rows = vec![vec!["1".to_string(), "ada".to_string()]];
//!
//! let table = layout(header, rows, 40).unwrap();
//! print!("{}", grid::render(&table));
//! ```

mod error;
pub mod fold;
pub mod grid;
pub mod term;
mod util;

pub use error::LayoutError;
pub use fold::{layout, Row, Table, COLUMN_OVERHEAD, ROW_OVERHEAD};
pub use term::{columns, indented, set_columns, IndentGuard, MIN_COLUMNS};
pub use util::{display_width, pad_right, wrap};
