//! Error types for layout construction.

use std::fmt;

/// Error type for table layout operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A data row's column count does not match the header's.
    ColumnMismatch { expected: usize, found: usize },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::ColumnMismatch { expected, found } => write!(
                f,
                "row has {} columns but the header has {}",
                found, expected
            ),
        }
    }
}

impl std::error::Error for LayoutError {}
