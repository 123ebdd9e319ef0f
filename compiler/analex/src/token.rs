//! Cooked tokens: kind, lexeme and position.

use std::fmt;

use crate::Position;

/// The closed set of token classes the scanner produces.
///
/// `name()` gives the canonical upper-snake identifier used in listings and
/// reports. Classification goes through the predicates below rather than
/// through inspection of the name.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    // === Words ===
    ReservedWord,
    Identifier,

    // === Literals ===
    IntegerLiteral,
    DecimalLiteral,
    StringLiteral,
    BooleanLiteral,

    // === Operators ===
    Plus,
    Minus,
    Star,
    Slash,
    Assign,
    EqualEqual,
    NotEqual,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,

    // === Delimiters ===
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Semicolon,
    Comma,

    // === Comments ===
    LineComment,
    BlockComment,

    // === Control ===
    Eof,
    Error,
}

/// Coarse grouping of [`TokenKind`]s.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TokenCategory {
    ReservedWord,
    Identifier,
    Literal,
    Operator,
    Delimiter,
    Comment,
    EndOfInput,
    Error,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 29] = [
        TokenKind::ReservedWord,
        TokenKind::Identifier,
        TokenKind::IntegerLiteral,
        TokenKind::DecimalLiteral,
        TokenKind::StringLiteral,
        TokenKind::BooleanLiteral,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::Assign,
        TokenKind::EqualEqual,
        TokenKind::NotEqual,
        TokenKind::Less,
        TokenKind::Greater,
        TokenKind::LessEqual,
        TokenKind::GreaterEqual,
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::LeftBrace,
        TokenKind::RightBrace,
        TokenKind::LeftBracket,
        TokenKind::RightBracket,
        TokenKind::Semicolon,
        TokenKind::Comma,
        TokenKind::LineComment,
        TokenKind::BlockComment,
        TokenKind::Eof,
        TokenKind::Error,
    ];

    /// Canonical upper-snake name, e.g. `OPERADOR_MENOR_IGUAL`.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::ReservedWord => "PALABRA_RESERVADA",
            TokenKind::Identifier => "IDENTIFICADOR",
            TokenKind::IntegerLiteral => "NUMERO_ENTERO",
            TokenKind::DecimalLiteral => "NUMERO_DECIMAL",
            TokenKind::StringLiteral => "CADENA_TEXTO",
            TokenKind::BooleanLiteral => "BOOLEANO",
            TokenKind::Plus => "OPERADOR_SUMA",
            TokenKind::Minus => "OPERADOR_RESTA",
            TokenKind::Star => "OPERADOR_MULTIPLICACION",
            TokenKind::Slash => "OPERADOR_DIVISION",
            TokenKind::Assign => "OPERADOR_ASIGNACION",
            TokenKind::EqualEqual => "OPERADOR_IGUAL",
            TokenKind::NotEqual => "OPERADOR_DIFERENTE",
            TokenKind::Less => "OPERADOR_MENOR",
            TokenKind::Greater => "OPERADOR_MAYOR",
            TokenKind::LessEqual => "OPERADOR_MENOR_IGUAL",
            TokenKind::GreaterEqual => "OPERADOR_MAYOR_IGUAL",
            TokenKind::LeftParen => "PARENTESIS_IZQ",
            TokenKind::RightParen => "PARENTESIS_DER",
            TokenKind::LeftBrace => "LLAVE_IZQ",
            TokenKind::RightBrace => "LLAVE_DER",
            TokenKind::LeftBracket => "CORCHETE_IZQ",
            TokenKind::RightBracket => "CORCHETE_DER",
            TokenKind::Semicolon => "PUNTO_COMA",
            TokenKind::Comma => "COMA",
            TokenKind::LineComment => "COMENTARIO_LINEA",
            TokenKind::BlockComment => "COMENTARIO_BLOQUE",
            TokenKind::Eof => "FIN_ARCHIVO",
            TokenKind::Error => "ERROR",
        }
    }

    /// Human-facing name: [`name`](Self::name) with spaces for underscores.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::ReservedWord => "PALABRA RESERVADA",
            TokenKind::Identifier => "IDENTIFICADOR",
            TokenKind::IntegerLiteral => "NUMERO ENTERO",
            TokenKind::DecimalLiteral => "NUMERO DECIMAL",
            TokenKind::StringLiteral => "CADENA TEXTO",
            TokenKind::BooleanLiteral => "BOOLEANO",
            TokenKind::Plus => "OPERADOR SUMA",
            TokenKind::Minus => "OPERADOR RESTA",
            TokenKind::Star => "OPERADOR MULTIPLICACION",
            TokenKind::Slash => "OPERADOR DIVISION",
            TokenKind::Assign => "OPERADOR ASIGNACION",
            TokenKind::EqualEqual => "OPERADOR IGUAL",
            TokenKind::NotEqual => "OPERADOR DIFERENTE",
            TokenKind::Less => "OPERADOR MENOR",
            TokenKind::Greater => "OPERADOR MAYOR",
            TokenKind::LessEqual => "OPERADOR MENOR IGUAL",
            TokenKind::GreaterEqual => "OPERADOR MAYOR IGUAL",
            TokenKind::LeftParen => "PARENTESIS IZQ",
            TokenKind::RightParen => "PARENTESIS DER",
            TokenKind::LeftBrace => "LLAVE IZQ",
            TokenKind::RightBrace => "LLAVE DER",
            TokenKind::LeftBracket => "CORCHETE IZQ",
            TokenKind::RightBracket => "CORCHETE DER",
            TokenKind::Semicolon => "PUNTO COMA",
            TokenKind::Comma => "COMA",
            TokenKind::LineComment => "COMENTARIO LINEA",
            TokenKind::BlockComment => "COMENTARIO BLOQUE",
            TokenKind::Eof => "FIN ARCHIVO",
            TokenKind::Error => "ERROR",
        }
    }

    pub const fn category(self) -> TokenCategory {
        match self {
            TokenKind::ReservedWord => TokenCategory::ReservedWord,
            TokenKind::Identifier => TokenCategory::Identifier,
            TokenKind::IntegerLiteral
            | TokenKind::DecimalLiteral
            | TokenKind::StringLiteral
            | TokenKind::BooleanLiteral => TokenCategory::Literal,
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Star
            | TokenKind::Slash
            | TokenKind::Assign
            | TokenKind::EqualEqual
            | TokenKind::NotEqual
            | TokenKind::Less
            | TokenKind::Greater
            | TokenKind::LessEqual
            | TokenKind::GreaterEqual => TokenCategory::Operator,
            TokenKind::LeftParen
            | TokenKind::RightParen
            | TokenKind::LeftBrace
            | TokenKind::RightBrace
            | TokenKind::LeftBracket
            | TokenKind::RightBracket
            | TokenKind::Semicolon
            | TokenKind::Comma => TokenCategory::Delimiter,
            TokenKind::LineComment | TokenKind::BlockComment => TokenCategory::Comment,
            TokenKind::Eof => TokenCategory::EndOfInput,
            TokenKind::Error => TokenCategory::Error,
        }
    }

    #[inline]
    pub const fn is_operator(self) -> bool {
        matches!(self.category(), TokenCategory::Operator)
    }

    #[inline]
    pub const fn is_delimiter(self) -> bool {
        matches!(self.category(), TokenCategory::Delimiter)
    }

    /// Integer, decimal, string and boolean literals.
    #[inline]
    pub const fn is_literal(self) -> bool {
        matches!(self.category(), TokenCategory::Literal)
    }

    #[inline]
    pub const fn is_comment(self) -> bool {
        matches!(self.category(), TokenCategory::Comment)
    }

    /// Integer or decimal literal.
    #[inline]
    pub const fn is_number(self) -> bool {
        matches!(self, TokenKind::IntegerLiteral | TokenKind::DecimalLiteral)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified slice of source text.
///
/// The lexeme is the exact source text, quotes and comment markers
/// included. It is empty only for [`TokenKind::Eof`].
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    line: u32,
    column: u32,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: u32, column: u32) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            line,
            column,
        }
    }

    pub(crate) fn eof(at: Position) -> Self {
        Token::new(TokenKind::Eof, String::new(), at.line, at.column)
    }

    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    #[inline]
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// One-based line of the first character.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// One-based column (in characters) of the first character.
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token[{}, '{}', L:{}, C:{}]",
            self.kind.display_name(),
            self.lexeme,
            self.line,
            self.column
        )
    }
}
