//! Pull-based scanner: raw tokens in, cooked [`Token`]s out.
//!
//! Each call to [`Scanner::next_token`] runs the raw scanner from the
//! current byte offset, skips whitespace and newlines, and cooks the first
//! significant raw token:
//!
//! - identifiers are checked against the reserved-word table,
//! - error tags become `ERROR` tokens plus one [`LexError`] each,
//! - line and column advance over every consumed byte, trivia included.
//!
//! The scanner never fails. Once the input is exhausted it returns the
//! end-of-input token on every call.

use analex_core::{RawScanner, RawTag, SourceBuffer};

use crate::{keywords, LexError, Position, Token, TokenKind};

/// Incremental lexical analyzer over an owned copy of the source.
///
/// ```
/// use analex::{Scanner, TokenKind};
///
/// let mut scanner = Scanner::new("a @ b");
/// assert_eq!(scanner.next_token().kind(), TokenKind::Identifier);
/// assert_eq!(scanner.next_token().kind(), TokenKind::Error);
/// assert_eq!(scanner.errors(), ["line 1, column 3: unrecognized character '@'"]);
///
/// scanner.reset_errors();
/// assert_eq!(scanner.next_token().lexeme(), "b");
/// assert!(scanner.next_token().is_eof());
/// assert!(scanner.errors().is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct Scanner {
    buffer: SourceBuffer,
    /// Byte offset of the next unread character.
    offset: u32,
    /// Position of the byte at `offset`.
    position: Position,
    errors: Vec<LexError>,
}

impl Scanner {
    pub fn new(source: &str) -> Self {
        Scanner {
            buffer: SourceBuffer::new(source),
            offset: 0,
            position: Position::START,
            errors: Vec::new(),
        }
    }

    /// Produce the next significant token.
    ///
    /// Malformed input yields a [`TokenKind::Error`] token covering the
    /// offending text and appends a diagnostic. After the last character,
    /// every call returns [`TokenKind::Eof`] with an empty lexeme.
    pub fn next_token(&mut self) -> Token {
        loop {
            let raw = RawScanner::new(self.buffer.cursor_at(self.offset)).next_token();
            if raw.tag == RawTag::Eof {
                return Token::eof(self.position);
            }
            let start = self.offset;
            let at = self.position;
            self.offset += raw.len;
            let lexeme = match raw.tag.lexeme() {
                Some(fixed) => fixed.to_owned(),
                None => self.text(start, self.offset),
            };
            self.position.advance_over(&lexeme);

            if let Some(kind) = self.classify(raw.tag, &lexeme, at) {
                tracing::trace!(
                    kind = kind.name(),
                    raw = raw.tag.name(),
                    lexeme = %lexeme,
                    line = at.line,
                    column = at.column,
                    "token"
                );
                return Token::new(kind, lexeme, at.line, at.column);
            }
        }
    }

    /// Rendered diagnostics recorded since the last reset, oldest first.
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// Structured view of the same diagnostics as [`errors`](Self::errors).
    pub fn lex_errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Clear the diagnostic log. The scan position is left untouched.
    pub fn reset_errors(&mut self) {
        self.errors.clear();
    }

    /// Move the recorded diagnostics out, leaving the log empty.
    pub fn take_errors(&mut self) -> Vec<LexError> {
        std::mem::take(&mut self.errors)
    }

    /// Position of the next unread character.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Map a raw tag to its token kind, recording a diagnostic for error
    /// tags. Returns `None` for trivia and for end of input, which the
    /// caller handles before classifying.
    fn classify(&mut self, tag: RawTag, lexeme: &str, at: Position) -> Option<TokenKind> {
        let kind = match tag {
            RawTag::Whitespace | RawTag::Newline | RawTag::Eof => return None,

            RawTag::Ident => keywords::lookup(lexeme).unwrap_or(TokenKind::Identifier),
            RawTag::Int => TokenKind::IntegerLiteral,
            RawTag::Decimal => TokenKind::DecimalLiteral,
            RawTag::String => TokenKind::StringLiteral,

            RawTag::Plus => TokenKind::Plus,
            RawTag::Minus => TokenKind::Minus,
            RawTag::Star => TokenKind::Star,
            RawTag::Slash => TokenKind::Slash,
            RawTag::Equal => TokenKind::Assign,
            RawTag::EqualEqual => TokenKind::EqualEqual,
            RawTag::BangEqual => TokenKind::NotEqual,
            RawTag::Less => TokenKind::Less,
            RawTag::Greater => TokenKind::Greater,
            RawTag::LessEqual => TokenKind::LessEqual,
            RawTag::GreaterEqual => TokenKind::GreaterEqual,

            RawTag::LeftParen => TokenKind::LeftParen,
            RawTag::RightParen => TokenKind::RightParen,
            RawTag::LeftBrace => TokenKind::LeftBrace,
            RawTag::RightBrace => TokenKind::RightBrace,
            RawTag::LeftBracket => TokenKind::LeftBracket,
            RawTag::RightBracket => TokenKind::RightBracket,
            RawTag::Semicolon => TokenKind::Semicolon,
            RawTag::Comma => TokenKind::Comma,

            RawTag::LineComment => TokenKind::LineComment,
            RawTag::BlockComment => TokenKind::BlockComment,

            RawTag::UnrecognizedChar => {
                let ch = lexeme.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
                self.record(LexError::unrecognized_char(ch, at));
                TokenKind::Error
            }
            RawTag::UnterminatedString => {
                self.record(LexError::unterminated_string(at));
                TokenKind::Error
            }
            RawTag::UnterminatedBlockComment => {
                self.record(LexError::unterminated_block_comment(at));
                TokenKind::Error
            }
        };
        Some(kind)
    }

    fn record(&mut self, error: LexError) {
        tracing::debug!(%error, "lexical error");
        self.errors.push(error);
    }

    /// Source text between two byte offsets.
    ///
    /// Raw tokens end on character boundaries, so the lossy conversion
    /// never substitutes anything.
    fn text(&self, start: u32, end: u32) -> String {
        let bytes = self
            .buffer
            .as_bytes()
            .get(start as usize..end as usize)
            .unwrap_or_default();
        String::from_utf8_lossy(bytes).into_owned()
    }
}

impl Iterator for Scanner {
    type Item = Token;

    /// Yields tokens up to, but not including, end-of-input.
    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}
