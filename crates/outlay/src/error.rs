//! Error types for formatting and printing.
//!
//! The split mirrors the recovery policy: [`FormatError`] values raised by
//! a formatter's `parse` are normally swallowed inside the formatter
//! contract (a warning plus a raw-text fallback), while resolution and
//! I/O failures always propagate to the caller through [`PrintError`].

use thiserror::Error;

/// Failure reported by an injected [`IdentityResolver`] while executing
/// the batched lookup itself.
///
/// Individual unresolved ids are not errors (they render as the raw id);
/// this type is for the lookup call failing outright.
///
/// [`IdentityResolver`]: crate::format::IdentityResolver
#[derive(Debug, Clone, Error)]
#[error("identity resolution failed: {0}")]
pub struct ResolveError(pub String);

/// Error raised by a formatter's `parse` stage.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The raw value has the wrong JSON type for this formatter.
    #[error("expected {expected}, got {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// The raw value has the right type but the wrong shape.
    #[error("malformed value: {0}")]
    Malformed(String),

    /// The raw value is not a recognizable timestamp.
    #[error("invalid timestamp: {0}")]
    Date(#[from] chrono::ParseError),

    /// The batched identity lookup failed. Unlike the other variants this
    /// one escapes the formatter fallback and propagates to the caller.
    #[error(transparent)]
    Resolution(#[from] ResolveError),
}

/// Error returned by printers and the output dispatcher.
#[derive(Debug, Error)]
pub enum PrintError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Layout(#[from] outlay_render::LayoutError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The data has the wrong shape for the selected printer (e.g. a
    /// single object handed to a list printer).
    #[error("expected {expected} data, got {found}")]
    InvalidData {
        expected: &'static str,
        found: &'static str,
    },

    /// The requested output mode name is not one this crate defines.
    /// This is a configuration error in the calling program, not a data
    /// error.
    #[error("unsupported output mode: {0:?}")]
    UnsupportedMode(String),
}
