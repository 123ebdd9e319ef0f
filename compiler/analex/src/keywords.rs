//! Reserved-word and boolean-literal resolution.
//!
//! Identifiers are resolved with a length-bucketed match: every word in the
//! table is 2-8 ASCII bytes long, so anything outside that range is an
//! identifier without a single comparison. Lookup is case-sensitive.

use crate::TokenKind;

/// The fixed reserved-word table.
pub const RESERVED_WORDS: [&str; 28] = [
    "if", "else", "while", "for", "do", "return", "break", "continue", "switch", "case", "default",
    "int", "float", "double", "char", "string", "bool", "boolean", "void", "const", "var",
    "function", "class", "new", "null", "print", "read", "main",
];

/// Words classified as boolean literals rather than reserved words.
pub const BOOLEAN_LITERALS: [&str; 2] = ["true", "false"];

/// Returns `true` if `text` is in [`RESERVED_WORDS`].
pub fn is_reserved_word(text: &str) -> bool {
    lookup(text) == Some(TokenKind::ReservedWord)
}

/// Classify an identifier-shaped lexeme.
///
/// Returns `Some(ReservedWord)` or `Some(BooleanLiteral)` for words in the
/// fixed tables, `None` for ordinary identifiers.
#[inline]
pub(crate) fn lookup(text: &str) -> Option<TokenKind> {
    const RESERVED: Option<TokenKind> = Some(TokenKind::ReservedWord);
    const BOOLEAN: Option<TokenKind> = Some(TokenKind::BooleanLiteral);

    match text.len() {
        2 => match text {
            "if" | "do" => RESERVED,
            _ => None,
        },
        3 => match text {
            "for" | "int" | "new" | "var" => RESERVED,
            _ => None,
        },
        4 => match text {
            "else" | "case" | "char" | "bool" | "void" | "null" | "read" | "main" => RESERVED,
            "true" => BOOLEAN,
            _ => None,
        },
        5 => match text {
            "while" | "break" | "float" | "const" | "class" | "print" => RESERVED,
            "false" => BOOLEAN,
            _ => None,
        },
        6 => match text {
            "return" | "switch" | "double" | "string" => RESERVED,
            _ => None,
        },
        7 => match text {
            "default" | "boolean" => RESERVED,
            _ => None,
        },
        8 => match text {
            "continue" | "function" => RESERVED,
            _ => None,
        },
        _ => None,
    }
}
