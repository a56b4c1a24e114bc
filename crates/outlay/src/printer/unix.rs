//! Raw text output for pipeline use.

use serde_json::Value;
use std::io::Write;

use super::Printer;
use crate::error::PrintError;
use crate::format::raw_text;

/// Writes the already-selected response value as plain text.
///
/// No Field iteration happens here: the caller is expected to have
/// reduced the response to a single scalar (typically one field's value)
/// before choosing unix output.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnixPrinter;

impl Printer for UnixPrinter {
    fn echo(&self, data: &Value, out: &mut dyn Write) -> Result<(), PrintError> {
        writeln!(out, "{}", raw_text(data))?;
        Ok(())
    }
}
