//! Virtual terminal state: usable width plus a nestable indent budget.
//!
//! The real terminal width is sampled once, on first use. Nested renderers
//! that need to reserve horizontal space (a label gutter, a border) take
//! an [`IndentGuard`] via [`indented`]; the guard shrinks the usable width
//! for its lifetime and restores it on drop, so the budget stays balanced
//! even when an error unwinds through nested calls.

use once_cell::sync::Lazy;
use std::sync::{Mutex, MutexGuard, PoisonError};
use terminal_size::{terminal_size, Width};

/// Smallest width [`columns`] will ever report.
pub const MIN_COLUMNS: usize = 16;

/// Width assumed when the terminal size cannot be detected.
const DEFAULT_COLUMNS: usize = 80;

/// Terminals wider than this are capped to 80% of their width, so long
/// unbroken lines stay readable.
const WIDE_THRESHOLD: usize = 120;

#[derive(Debug)]
struct VirtualTerminal {
    base: usize,
    indent: isize,
}

static TERMINAL: Lazy<Mutex<VirtualTerminal>> = Lazy::new(|| {
    Mutex::new(VirtualTerminal {
        base: detect_base(),
        indent: 0,
    })
});

fn detect_base() -> usize {
    let columns = terminal_size()
        .map(|(Width(w), _)| w as usize)
        .unwrap_or(DEFAULT_COLUMNS);
    if columns > WIDE_THRESHOLD {
        columns * 4 / 5
    } else {
        columns
    }
}

fn lock() -> MutexGuard<'static, VirtualTerminal> {
    TERMINAL.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Returns the usable output width in columns.
///
/// This is the detected base width minus any active indentation, floored
/// at [`MIN_COLUMNS`].
pub fn columns() -> usize {
    let term = lock();
    let width = term.base as isize + term.indent;
    width.max(MIN_COLUMNS as isize) as usize
}

/// Overrides the detected base width for the rest of the process.
///
/// Intended for tests and for honoring explicit width overrides (a
/// `COLUMNS`-style setting). Active indentation is unaffected.
pub fn set_columns(base: usize) {
    lock().base = base;
}

/// Reserves `size` columns of the usable width until the returned guard
/// is dropped.
///
/// Guards nest: each one subtracts its own reservation and restores
/// exactly that amount, in any drop order.
///
/// # Example
///
/// ```rust
/// use outlay_render::term;
///
/// term::set_columns(80);
/// let before = term::columns();
/// {
///     let _guard = term::indented(10);
///     assert_eq!(term::columns(), before - 10);
/// }
/// assert_eq!(term::columns(), before);
/// ```
pub fn indented(size: usize) -> IndentGuard {
    lock().indent -= size as isize;
    IndentGuard { size }
}

/// Scope guard returned by [`indented`]; restores the indent budget on drop.
#[derive(Debug)]
pub struct IndentGuard {
    size: usize,
}

impl Drop for IndentGuard {
    fn drop(&mut self) {
        lock().indent += self.size as isize;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn columns_reflects_override() {
        set_columns(100);
        assert_eq!(columns(), 100);
    }

    #[test]
    #[serial]
    fn indent_shrinks_and_restores() {
        set_columns(80);
        {
            let _guard = indented(12);
            assert_eq!(columns(), 68);
        }
        assert_eq!(columns(), 80);
    }

    #[test]
    #[serial]
    fn indent_guards_nest() {
        set_columns(80);
        let outer = indented(10);
        {
            let _inner = indented(20);
            assert_eq!(columns(), 50);
        }
        assert_eq!(columns(), 70);
        drop(outer);
        assert_eq!(columns(), 80);
    }

    #[test]
    #[serial]
    fn indent_restores_on_panic() {
        set_columns(80);
        let result = std::panic::catch_unwind(|| {
            let _guard = indented(30);
            panic!("boom");
        });
        assert!(result.is_err());
        assert_eq!(columns(), 80);
    }

    #[test]
    #[serial]
    fn columns_never_drops_below_minimum() {
        set_columns(20);
        let _guard = indented(100);
        assert_eq!(columns(), MIN_COLUMNS);
    }
}
