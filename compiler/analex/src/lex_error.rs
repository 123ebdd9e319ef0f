//! Lexical diagnostics.
//!
//! Every error is recovered locally: the scanner emits an `ERROR` token and
//! keeps going. A `LexError` records what went wrong and where; its
//! `Display` is the message shown to users.

use crate::Position;

/// A diagnostic recorded by the scanner.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("line {line}, column {column}: {kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    /// Line of the offending text's first character.
    pub line: u32,
    /// Column of the offending text's first character.
    pub column: u32,
}

/// What went wrong.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// A character no token can start with.
    #[error("unrecognized character '{}'", .ch.escape_debug())]
    UnrecognizedChar { ch: char },
    /// A `"` with no closing `"` before the end of the line.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// A `/*` with no closing `*/` before the end of input.
    #[error("unterminated block comment")]
    UnterminatedBlockComment,
}

impl LexError {
    pub fn new(kind: LexErrorKind, at: Position) -> Self {
        LexError {
            kind,
            line: at.line,
            column: at.column,
        }
    }

    pub fn unrecognized_char(ch: char, at: Position) -> Self {
        Self::new(LexErrorKind::UnrecognizedChar { ch }, at)
    }

    /// Located at the opening quote.
    pub fn unterminated_string(at: Position) -> Self {
        Self::new(LexErrorKind::UnterminatedString, at)
    }

    /// Located at the opening `/*`.
    pub fn unterminated_block_comment(at: Position) -> Self {
        Self::new(LexErrorKind::UnterminatedBlockComment, at)
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }
}

#[cfg(test)]
mod tests;
