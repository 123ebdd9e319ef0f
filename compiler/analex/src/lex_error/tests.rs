use super::*;
use pretty_assertions::assert_eq;

#[test]
fn error_construction() {
    let err = LexError::unterminated_string(Position::new(2, 5));
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!(err.line, 2);
    assert_eq!(err.column, 5);
    assert_eq!(err.position(), Position::new(2, 5));
}

#[test]
fn unrecognized_char_message() {
    let err = LexError::unrecognized_char('@', Position::new(1, 3));
    assert_eq!(err.to_string(), "line 1, column 3: unrecognized character '@'");
}

#[test]
fn control_characters_are_escaped() {
    let err = LexError::unrecognized_char('\u{1}', Position::START);
    assert_eq!(
        err.to_string(),
        "line 1, column 1: unrecognized character '\\u{1}'"
    );
    let err = LexError::unrecognized_char('\0', Position::START);
    assert_eq!(err.to_string(), "line 1, column 1: unrecognized character '\\0'");
}

#[test]
fn non_ascii_characters_are_shown_as_is() {
    let err = LexError::unrecognized_char('ñ', Position::new(4, 9));
    assert_eq!(err.to_string(), "line 4, column 9: unrecognized character 'ñ'");
}

#[test]
fn unterminated_messages() {
    assert_eq!(
        LexError::unterminated_string(Position::new(1, 1)).to_string(),
        "line 1, column 1: unterminated string literal"
    );
    assert_eq!(
        LexError::unterminated_block_comment(Position::new(7, 2)).to_string(),
        "line 7, column 2: unterminated block comment"
    );
}

#[test]
fn error_equality() {
    let a = LexError::unrecognized_char('$', Position::new(1, 1));
    let b = LexError::unrecognized_char('$', Position::new(1, 1));
    let c = LexError::unrecognized_char('#', Position::new(1, 1));
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn usable_as_std_error() {
    let err: Box<dyn std::error::Error + Send + Sync> =
        Box::new(LexError::unterminated_block_comment(Position::START));
    assert!(err.source().is_none());
}
