//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and produces
//! [`RawToken`] values with zero heap allocation. It does not resolve
//! reserved words or track line/column; those are deferred to the cooking
//! layer.
//!
//! # Design
//!
//! Main dispatch covers all 256 byte values. Each arm calls a focused method
//! that advances the cursor and returns `RawToken { tag, len }`. The sentinel
//! byte (`0x00`) naturally dispatches to `eof()`.
//!
//! Every arm except EOF consumes at least one byte, so a scan over a finite
//! buffer always terminates. Two-character operators and comment openers use
//! a single byte of lookahead; when the second byte does not match, only the
//! first byte is consumed.

use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

/// Pure, allocation-free scanner.
///
/// Produces one token at a time as a `(tag, length)` pair.
/// Error conditions are encoded as `RawTag` variants, not as `Result::Err`.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Current byte offset; the start of the next token.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    #[inline]
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 => self.eof(),
            b' ' | b'\t' => self.whitespace(start),
            b'\r' => self.carriage_return(start),
            b'\n' => self.newline(start),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(start),
            b'0'..=b'9' => self.number(start),
            b'"' => self.string(start),
            b'/' => self.slash_or_comment(start),
            b'+' => self.single(start, RawTag::Plus),
            b'-' => self.single(start, RawTag::Minus),
            b'*' => self.single(start, RawTag::Star),
            b'=' => self.equal(start),
            b'!' => self.bang(start),
            b'<' => self.less(start),
            b'>' => self.greater(start),
            b'(' => self.single(start, RawTag::LeftParen),
            b')' => self.single(start, RawTag::RightParen),
            b'{' => self.single(start, RawTag::LeftBrace),
            b'}' => self.single(start, RawTag::RightBrace),
            b'[' => self.single(start, RawTag::LeftBracket),
            b']' => self.single(start, RawTag::RightBracket),
            b';' => self.single(start, RawTag::Semicolon),
            b',' => self.single(start, RawTag::Comma),
            // Everything else: other ASCII punctuation, control characters,
            // DEL, and non-ASCII lead bytes.
            _ => self.unrecognized(start),
        }
    }

    fn token(&self, start: u32, tag: RawTag) -> RawToken {
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    // ─── EOF ─────────────────────────────────────────────────────────────

    fn eof(&mut self) -> RawToken {
        if self.cursor.is_eof() {
            RawToken {
                tag: RawTag::Eof,
                len: 0,
            }
        } else {
            // Interior null byte: not EOF, just a character nothing accepts.
            let start = self.cursor.pos();
            self.cursor.advance();
            self.token(start, RawTag::UnrecognizedChar)
        }
    }

    // ─── Whitespace & Newlines ───────────────────────────────────────────

    #[inline]
    fn whitespace(&mut self, start: u32) -> RawToken {
        self.cursor.eat_whitespace();
        self.token(start, RawTag::Whitespace)
    }

    fn carriage_return(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '\r'
        if self.cursor.current() == b'\n' {
            // CRLF is a single newline
            self.cursor.advance();
            self.token(start, RawTag::Newline)
        } else {
            // Lone \r: horizontal whitespace
            self.token(start, RawTag::Whitespace)
        }
    }

    fn newline(&mut self, start: u32) -> RawToken {
        self.cursor.advance();
        self.token(start, RawTag::Newline)
    }

    // ─── Comments ────────────────────────────────────────────────────────

    fn slash_or_comment(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume '/'
        match self.cursor.current() {
            b'/' => {
                self.cursor.advance();
                // Newline is left for the next token.
                self.cursor.eat_until_newline_or_eof();
                self.token(start, RawTag::LineComment)
            }
            b'*' => {
                self.cursor.advance();
                // No nesting: the first `*/` closes the comment.
                if self.cursor.eat_past_block_comment_end() {
                    self.token(start, RawTag::BlockComment)
                } else {
                    self.token(start, RawTag::UnterminatedBlockComment)
                }
            }
            _ => self.token(start, RawTag::Slash),
        }
    }

    // ─── Identifiers ─────────────────────────────────────────────────────

    #[inline]
    fn identifier(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // first byte already classified
        self.cursor.eat_while(is_ident_continue);
        self.token(start, RawTag::Ident)
    }

    // ─── Operators ───────────────────────────────────────────────────────

    /// Single-byte token: advance one byte and emit the given tag.
    fn single(&mut self, start: u32, tag: RawTag) -> RawToken {
        self.cursor.advance();
        self.token(start, tag)
    }

    /// Consume one byte, then a trailing `=` if present.
    fn with_optional_equal(&mut self, start: u32, alone: RawTag, with_eq: RawTag) -> RawToken {
        self.cursor.advance();
        if self.cursor.current() == b'=' {
            self.cursor.advance();
            self.token(start, with_eq)
        } else {
            self.token(start, alone)
        }
    }

    fn equal(&mut self, start: u32) -> RawToken {
        self.with_optional_equal(start, RawTag::Equal, RawTag::EqualEqual)
    }

    fn bang(&mut self, start: u32) -> RawToken {
        // A lone `!` is not an operator in this grammar.
        self.with_optional_equal(start, RawTag::UnrecognizedChar, RawTag::BangEqual)
    }

    fn less(&mut self, start: u32) -> RawToken {
        self.with_optional_equal(start, RawTag::Less, RawTag::LessEqual)
    }

    fn greater(&mut self, start: u32) -> RawToken {
        self.with_optional_equal(start, RawTag::Greater, RawTag::GreaterEqual)
    }

    // ─── Numeric Literals ────────────────────────────────────────────────

    #[inline]
    fn number(&mut self, start: u32) -> RawToken {
        self.cursor.eat_while(|b| b.is_ascii_digit());

        // `.` only belongs to the number when a digit follows it.
        if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.advance(); // consume '.'
            self.cursor.eat_while(|b| b.is_ascii_digit());
            return self.token(start, RawTag::Decimal);
        }

        self.token(start, RawTag::Int)
    }

    // ─── String Literals ─────────────────────────────────────────────────

    fn string(&mut self, start: u32) -> RawToken {
        self.cursor.advance(); // consume opening '"'
        loop {
            match self.cursor.skip_to_string_delim() {
                b'"' => {
                    self.cursor.advance(); // consume closing '"'
                    return self.token(start, RawTag::String);
                }
                b'\\' => {
                    self.cursor.advance(); // consume '\'
                    // An escape never swallows the line end or EOF.
                    if !self.at_line_end() && !self.cursor.is_eof() {
                        self.cursor.advance_char();
                    }
                }
                // A lone '\r' is ordinary content; only CRLF ends the line.
                b'\r' if self.cursor.peek() != b'\n' => self.cursor.advance(),
                // Line end or EOF: the newline itself is not part of the token.
                _ => return self.token(start, RawTag::UnterminatedString),
            }
        }
    }

    /// `\n`, or the `\r` of a CRLF pair.
    fn at_line_end(&self) -> bool {
        match self.cursor.current() {
            b'\n' => true,
            b'\r' => self.cursor.peek() == b'\n',
            _ => false,
        }
    }

    // ─── Error tokens ────────────────────────────────────────────────────

    fn unrecognized(&mut self, start: u32) -> RawToken {
        self.cursor.advance_char();
        self.token(start, RawTag::UnrecognizedChar)
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let tok = self.next_token();
        if tok.tag == RawTag::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

/// 256-byte lookup table for identifier continuation bytes.
/// `true` for a-z, A-Z, 0-9, and underscore.
/// The sentinel byte (0x00) maps to `false`, naturally terminating loops.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_'
        );
        i += 1;
    }
    table
};

/// Returns `true` if `b` is a valid identifier continuation byte.
#[inline]
fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

/// Convenience function: tokenize a source string and collect all raw tokens.
///
/// Returns every token except the final `Eof`, trivia included.
pub fn tokenize(source: &str) -> Vec<RawToken> {
    let buf = crate::SourceBuffer::new(source);
    RawScanner::new(buf.cursor()).collect()
}

#[cfg(test)]
mod tests;
