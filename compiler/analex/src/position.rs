//! One-based line and column tracking.
//!
//! Columns count Unicode scalar values, not bytes, so `"año"` spans three
//! columns. Only `\n` ends a line; the `\r` of a CRLF pair sits at the end
//! of the line it terminates, and a lone `\r` is an ordinary column.

use std::fmt;

/// A one-based source location.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Line number, starting at 1.
    pub line: u32,
    /// Column number in characters, starting at 1.
    pub column: u32,
}

impl Position {
    /// The first character of any source.
    pub const START: Position = Position { line: 1, column: 1 };

    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }

    /// Move past `text`, which must be the source slice starting here.
    pub fn advance_over(&mut self, text: &str) {
        let bytes = text.as_bytes();
        match memchr::memrchr(b'\n', bytes) {
            None => self.column = self.column.saturating_add(char_count(text)),
            Some(last) => {
                let newlines = memchr::memchr_iter(b'\n', bytes).count();
                self.line = self.line.saturating_add(saturating_u32(newlines));
                // `last` is a '\n' byte, so `last + 1` is a char boundary.
                let tail = text.get(last + 1..).unwrap_or("");
                self.column = 1u32.saturating_add(char_count(tail));
            }
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

fn char_count(text: &str) -> u32 {
    if text.is_ascii() {
        saturating_u32(text.len())
    } else {
        saturating_u32(text.chars().count())
    }
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
