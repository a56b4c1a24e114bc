//! Text measurement and wrapping helpers.
//!
//! All width calculations use Unicode display width (CJK characters count
//! as 2 columns), so padded and wrapped output lines up in the terminal
//! even for non-ASCII cell content.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Returns the display width of a string in terminal columns.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Pads a string with trailing spaces to the given display width.
///
/// Strings already at or beyond `width` are returned unchanged.
///
/// # Example
///
/// ```rust
/// use outlay_render::pad_right;
///
/// assert_eq!(pad_right("ab", 4), "ab  ");
/// assert_eq!(pad_right("abcde", 4), "abcde");
/// ```
pub fn pad_right(s: &str, width: usize) -> String {
    let current = display_width(s);
    if current >= width {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + (width - current));
    out.push_str(s);
    for _ in 0..(width - current) {
        out.push(' ');
    }
    out
}

/// Word-wraps text to the given display width.
///
/// Breaks at whitespace boundaries; a word wider than the whole line is
/// hard-split so every returned line fits within `width`. Consecutive
/// whitespace collapses to a single space, matching how wrapped prose
/// normally reflows.
///
/// # Example
///
/// ```rust
/// use outlay_render::wrap;
///
/// assert_eq!(wrap("hello world foo bar", 11), vec!["hello world", "foo bar"]);
/// ```
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        for piece in split_word(word, width) {
            let piece_width = display_width(&piece);
            if current.is_empty() {
                current = piece;
                current_width = piece_width;
            } else if current_width + 1 + piece_width <= width {
                current.push(' ');
                current.push_str(&piece);
                current_width += 1 + piece_width;
            } else {
                lines.push(std::mem::take(&mut current));
                current = piece;
                current_width = piece_width;
            }
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Splits a single word into chunks no wider than `width` columns.
fn split_word(word: &str, width: usize) -> Vec<String> {
    if display_width(word) <= width {
        return vec![word.to_string()];
    }
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;
    for c in word.chars() {
        let w = c.width().unwrap_or(0);
        if current_width + w > width && !current.is_empty() {
            pieces.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(c);
        current_width += w;
    }
    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}
