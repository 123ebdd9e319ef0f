//! Raw token tags produced by the [`RawScanner`](crate::RawScanner).

/// Raw token tag with semantic range layout.
///
/// | Range   | Category               |
/// |---------|------------------------|
/// | 0-15    | Identifiers & literals |
/// | 32-47   | Operators              |
/// | 80-95   | Delimiters             |
/// | 100-103 | Comments               |
/// | 112-113 | Trivia                 |
/// | 240-242 | Errors                 |
/// | 255     | EOF                    |
///
/// Reserved words and boolean literals are scanned as [`RawTag::Ident`];
/// the cooking layer resolves them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RawTag {
    // === Identifiers & Literals (0-15) ===
    Ident = 0,
    Int = 1,
    Decimal = 2,
    String = 3,

    // === Operators (32-47) ===
    Plus = 32,
    Minus = 33,
    Star = 34,
    Slash = 35,
    Equal = 36,
    EqualEqual = 37,
    BangEqual = 38,
    Less = 39,
    Greater = 40,
    LessEqual = 41,
    GreaterEqual = 42,

    // === Delimiters (80-95) ===
    LeftParen = 80,
    RightParen = 81,
    LeftBrace = 82,
    RightBrace = 83,
    LeftBracket = 84,
    RightBracket = 85,
    Semicolon = 86,
    Comma = 87,

    // === Comments (100-103) ===
    LineComment = 100,
    BlockComment = 101,

    // === Trivia (112-113) ===
    /// Spaces, tabs, and lone carriage returns.
    Whitespace = 112,
    /// `\n` or `\r\n`.
    Newline = 113,

    // === Errors (240-242) ===
    /// One character that starts no token (including a lone `!`).
    UnrecognizedChar = 240,
    /// `"` with no closing quote before end of line or input.
    UnterminatedString = 241,
    /// `/*` with no closing `*/` before end of input.
    UnterminatedBlockComment = 242,

    // === Control ===
    Eof = 255,
}

impl RawTag {
    /// Returns the fixed source text for tags that always have the same lexeme.
    pub fn lexeme(self) -> Option<&'static str> {
        match self {
            Self::Plus => Some("+"),
            Self::Minus => Some("-"),
            Self::Star => Some("*"),
            Self::Slash => Some("/"),
            Self::Equal => Some("="),
            Self::EqualEqual => Some("=="),
            Self::BangEqual => Some("!="),
            Self::Less => Some("<"),
            Self::Greater => Some(">"),
            Self::LessEqual => Some("<="),
            Self::GreaterEqual => Some(">="),
            Self::LeftParen => Some("("),
            Self::RightParen => Some(")"),
            Self::LeftBrace => Some("{"),
            Self::RightBrace => Some("}"),
            Self::LeftBracket => Some("["),
            Self::RightBracket => Some("]"),
            Self::Semicolon => Some(";"),
            Self::Comma => Some(","),
            _ => None,
        }
    }

    /// Human-readable description, used in trace output.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ident => "identifier",
            Self::Int => "integer literal",
            Self::Decimal => "decimal literal",
            Self::String => "string literal",
            Self::Plus => "`+`",
            Self::Minus => "`-`",
            Self::Star => "`*`",
            Self::Slash => "`/`",
            Self::Equal => "`=`",
            Self::EqualEqual => "`==`",
            Self::BangEqual => "`!=`",
            Self::Less => "`<`",
            Self::Greater => "`>`",
            Self::LessEqual => "`<=`",
            Self::GreaterEqual => "`>=`",
            Self::LeftParen => "`(`",
            Self::RightParen => "`)`",
            Self::LeftBrace => "`{`",
            Self::RightBrace => "`}`",
            Self::LeftBracket => "`[`",
            Self::RightBracket => "`]`",
            Self::Semicolon => "`;`",
            Self::Comma => "`,`",
            Self::LineComment => "line comment",
            Self::BlockComment => "block comment",
            Self::Whitespace => "whitespace",
            Self::Newline => "newline",
            Self::UnrecognizedChar => "unrecognized character",
            Self::UnterminatedString => "unterminated string",
            Self::UnterminatedBlockComment => "unterminated block comment",
            Self::Eof => "end of file",
        }
    }

    /// Whitespace and newlines: consumed by the scanner, never surfaced.
    ///
    /// Comments are not trivia; they are ordinary tokens.
    pub fn is_trivia(self) -> bool {
        matches!(self, Self::Whitespace | Self::Newline)
    }

    /// Tags that the cooking layer turns into error tokens.
    pub fn is_error(self) -> bool {
        (self as u8) >= 240 && self != Self::Eof
    }
}

/// A raw token: a tag plus its length in bytes.
///
/// Positions are implicit; the token starts where the previous one ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}

const _: () = assert!(std::mem::size_of::<RawToken>() <= 8);
