#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]

use super::*;
use crate::SourceBuffer;
use pretty_assertions::assert_eq;

/// Helper: scan a source string and collect all tokens (excluding Eof).
fn scan(source: &str) -> Vec<RawToken> {
    tokenize(source)
}

/// Helper: scan and return tags only.
fn scan_tags(source: &str) -> Vec<RawTag> {
    scan(source).iter().map(|t| t.tag).collect()
}

/// Helper: scan and drop trivia.
fn significant_tags(source: &str) -> Vec<RawTag> {
    scan(source)
        .iter()
        .map(|t| t.tag)
        .filter(|t| !t.is_trivia())
        .collect()
}

/// Helper: scan and return `(tag, text)` pairs.
fn scan_text(source: &str) -> Vec<(RawTag, &str)> {
    let mut pos = 0usize;
    let mut out = Vec::new();
    for tok in scan(source) {
        let end = pos + tok.len as usize;
        out.push((tok.tag, &source[pos..end]));
        pos = end;
    }
    out
}

// ─── Invariants ──────────────────────────────────────────────────────────

#[test]
fn total_len_equals_source_len() {
    let sources = [
        "",
        "x",
        "if (x >= 10) { y = 3.14; }",
        "a\nb\r\nc\rd",
        "\"ok\" \"open",
        "/* c */ // d",
        "/* never closed",
        "@#$%^&! ñ €",
        "a\0b",
    ];
    for source in sources {
        let total: u32 = scan(source).iter().map(|t| t.len).sum();
        assert_eq!(
            total,
            u32::try_from(source.len()).expect("test source fits in u32"),
            "total token length mismatch for {source:?}",
        );
    }
}

#[test]
fn every_token_has_positive_length() {
    let sources = ["x = 42", "+-*/", "\"s\" 'c'", "/**/", "  \t\n\r\n", "!!"];
    for source in sources {
        for tok in scan(source) {
            assert!(tok.len > 0, "zero-length token {tok:?} in {source:?}");
        }
    }
}

#[test]
fn repeated_eof_returns_eof() {
    let buf = SourceBuffer::new("x");
    let mut scanner = RawScanner::new(buf.cursor());
    assert_eq!(scanner.next_token().tag, RawTag::Ident);
    for _ in 0..5 {
        let tok = scanner.next_token();
        assert_eq!(tok.tag, RawTag::Eof);
        assert_eq!(tok.len, 0);
    }
}

#[test]
fn pos_tracks_token_starts() {
    let buf = SourceBuffer::new("ab cd");
    let mut scanner = RawScanner::new(buf.cursor());
    assert_eq!(scanner.pos(), 0);
    scanner.next_token();
    assert_eq!(scanner.pos(), 2);
    scanner.next_token();
    assert_eq!(scanner.pos(), 3);
}

#[test]
fn every_ascii_byte_is_consumed() {
    for b in 0u8..128 {
        let source = char::from(b).to_string();
        let tokens = scan(&source);
        if b == 0 {
            assert_eq!(tokens.len(), 1, "interior NUL should be one token");
        }
        let total: u32 = tokens.iter().map(|t| t.len).sum();
        assert_eq!(total, 1, "byte {b:#04x} not fully consumed");
    }
}

// ─── Whitespace & Newlines ───────────────────────────────────────────────

#[test]
fn whitespace_spaces_and_tabs() {
    assert_eq!(scan_tags(" \t  "), vec![RawTag::Whitespace]);
}

#[test]
fn newline_lf_and_crlf() {
    assert_eq!(scan_text("\n"), vec![(RawTag::Newline, "\n")]);
    assert_eq!(scan_text("\r\n"), vec![(RawTag::Newline, "\r\n")]);
}

#[test]
fn lone_cr_is_whitespace() {
    assert_eq!(scan_tags("\r"), vec![RawTag::Whitespace]);
}

#[test]
fn empty_source() {
    assert!(scan("").is_empty());
}

// ─── Comments ────────────────────────────────────────────────────────────

#[test]
fn line_comment_does_not_consume_newline() {
    assert_eq!(
        scan_text("// hi\nx"),
        vec![
            (RawTag::LineComment, "// hi"),
            (RawTag::Newline, "\n"),
            (RawTag::Ident, "x"),
        ]
    );
}

#[test]
fn line_comment_to_eof() {
    assert_eq!(scan_text("//"), vec![(RawTag::LineComment, "//")]);
}

#[test]
fn block_comment_spans_lines() {
    assert_eq!(
        scan_text("/* a\n b */x"),
        vec![(RawTag::BlockComment, "/* a\n b */"), (RawTag::Ident, "x")]
    );
}

#[test]
fn block_comment_does_not_nest() {
    assert_eq!(
        scan_text("/* /* */ */"),
        vec![
            (RawTag::BlockComment, "/* /* */"),
            (RawTag::Whitespace, " "),
            (RawTag::Star, "*"),
            (RawTag::Slash, "/"),
        ]
    );
}

#[test]
fn empty_block_comment() {
    assert_eq!(scan_text("/**/"), vec![(RawTag::BlockComment, "/**/")]);
}

#[test]
fn slash_star_slash_is_unterminated() {
    assert_eq!(
        scan_text("/*/"),
        vec![(RawTag::UnterminatedBlockComment, "/*/")]
    );
}

#[test]
fn unterminated_block_comment_runs_to_eof() {
    assert_eq!(
        scan_text("x /* open\nstill"),
        vec![
            (RawTag::Ident, "x"),
            (RawTag::Whitespace, " "),
            (RawTag::UnterminatedBlockComment, "/* open\nstill"),
        ]
    );
}

#[test]
fn slash_alone_is_division() {
    assert_eq!(significant_tags("a / b"), vec![RawTag::Ident, RawTag::Slash, RawTag::Ident]);
}

// ─── Identifiers ─────────────────────────────────────────────────────────

#[test]
fn identifier_maximal_munch() {
    assert_eq!(scan_text("abc123"), vec![(RawTag::Ident, "abc123")]);
}

#[test]
fn identifier_with_underscores() {
    assert_eq!(scan_text("_x_1"), vec![(RawTag::Ident, "_x_1")]);
    assert_eq!(scan_text("_"), vec![(RawTag::Ident, "_")]);
}

#[test]
fn reserved_words_are_ident_at_this_layer() {
    assert_eq!(
        significant_tags("if else true"),
        vec![RawTag::Ident, RawTag::Ident, RawTag::Ident]
    );
}

#[test]
fn digits_do_not_start_identifiers() {
    assert_eq!(
        scan_text("9lives"),
        vec![(RawTag::Int, "9"), (RawTag::Ident, "lives")]
    );
}

// ─── Operators ───────────────────────────────────────────────────────────

#[test]
fn single_char_operators() {
    assert_eq!(
        scan_tags("+-*/=<>"),
        vec![
            RawTag::Plus,
            RawTag::Minus,
            RawTag::Star,
            RawTag::Slash,
            RawTag::Equal,
            RawTag::Less,
            RawTag::Greater,
        ]
    );
}

#[test]
fn compound_operators() {
    assert_eq!(
        significant_tags("== != <= >="),
        vec![
            RawTag::EqualEqual,
            RawTag::BangEqual,
            RawTag::LessEqual,
            RawTag::GreaterEqual,
        ]
    );
}

#[test]
fn triple_equal_is_equal_equal_then_equal() {
    assert_eq!(
        scan_text("==="),
        vec![(RawTag::EqualEqual, "=="), (RawTag::Equal, "=")]
    );
}

#[test]
fn lone_bang_is_unrecognized() {
    assert_eq!(
        scan_text("!x"),
        vec![(RawTag::UnrecognizedChar, "!"), (RawTag::Ident, "x")]
    );
}

#[test]
fn separated_compound_is_two_tokens() {
    assert_eq!(
        significant_tags("< ="),
        vec![RawTag::Less, RawTag::Equal]
    );
}

// ─── Delimiters ──────────────────────────────────────────────────────────

#[test]
fn delimiters() {
    assert_eq!(
        scan_tags("(){}[];,"),
        vec![
            RawTag::LeftParen,
            RawTag::RightParen,
            RawTag::LeftBrace,
            RawTag::RightBrace,
            RawTag::LeftBracket,
            RawTag::RightBracket,
            RawTag::Semicolon,
            RawTag::Comma,
        ]
    );
}

// ─── Numeric Literals ────────────────────────────────────────────────────

#[test]
fn integer_literal() {
    assert_eq!(scan_text("42"), vec![(RawTag::Int, "42")]);
}

#[test]
fn decimal_literal() {
    assert_eq!(scan_text("3.14"), vec![(RawTag::Decimal, "3.14")]);
}

#[test]
fn dot_without_digit_is_not_decimal() {
    assert_eq!(
        scan_text("3."),
        vec![(RawTag::Int, "3"), (RawTag::UnrecognizedChar, ".")]
    );
}

#[test]
fn only_one_fraction_part() {
    assert_eq!(
        scan_text("1.2.3"),
        vec![
            (RawTag::Decimal, "1.2"),
            (RawTag::UnrecognizedChar, "."),
            (RawTag::Int, "3"),
        ]
    );
}

#[test]
fn leading_dot_is_not_decimal() {
    assert_eq!(
        scan_text(".5"),
        vec![(RawTag::UnrecognizedChar, "."), (RawTag::Int, "5")]
    );
}

// ─── String Literals ─────────────────────────────────────────────────────

#[test]
fn simple_string() {
    assert_eq!(scan_text("\"hola\""), vec![(RawTag::String, "\"hola\"")]);
}

#[test]
fn empty_string() {
    assert_eq!(scan_text("\"\""), vec![(RawTag::String, "\"\"")]);
}

#[test]
fn escaped_quote_does_not_close() {
    assert_eq!(
        scan_text(r#""a\"b""#),
        vec![(RawTag::String, r#""a\"b""#)]
    );
}

#[test]
fn escaped_multibyte_char() {
    assert_eq!(scan_text("\"\\ñ\""), vec![(RawTag::String, "\"\\ñ\"")]);
}

#[test]
fn unterminated_string_eof() {
    assert_eq!(
        scan_text("\"abc"),
        vec![(RawTag::UnterminatedString, "\"abc")]
    );
}

#[test]
fn unterminated_string_newline() {
    assert_eq!(
        scan_text("\"abc\nx"),
        vec![
            (RawTag::UnterminatedString, "\"abc"),
            (RawTag::Newline, "\n"),
            (RawTag::Ident, "x"),
        ]
    );
}

#[test]
fn unterminated_string_crlf() {
    assert_eq!(
        scan_text("\"abc\r\n"),
        vec![
            (RawTag::UnterminatedString, "\"abc"),
            (RawTag::Newline, "\r\n"),
        ]
    );
}

#[test]
fn lone_carriage_return_inside_string_is_content() {
    assert_eq!(scan_text("\"a\rb\""), vec![(RawTag::String, "\"a\rb\"")]);
    assert_eq!(
        scan_text("\"a\r\r\"\rx"),
        vec![
            (RawTag::String, "\"a\r\r\""),
            (RawTag::Whitespace, "\r"),
            (RawTag::Ident, "x"),
        ]
    );
}

#[test]
fn escaped_lone_carriage_return_stays_in_string() {
    assert_eq!(scan_text("\"a\\\rb\""), vec![(RawTag::String, "\"a\\\rb\"")]);
}

#[test]
fn backslash_before_crlf_does_not_continue_string() {
    assert_eq!(
        scan_text("\"a\\\r\nx"),
        vec![
            (RawTag::UnterminatedString, "\"a\\"),
            (RawTag::Newline, "\r\n"),
            (RawTag::Ident, "x"),
        ]
    );
}

#[test]
fn backslash_before_newline_does_not_continue_string() {
    assert_eq!(
        scan_text("\"abc\\\nx\""),
        vec![
            (RawTag::UnterminatedString, "\"abc\\"),
            (RawTag::Newline, "\n"),
            (RawTag::Ident, "x"),
            (RawTag::UnterminatedString, "\""),
        ]
    );
}

#[test]
fn backslash_at_eof() {
    assert_eq!(
        scan_text("\"abc\\"),
        vec![(RawTag::UnterminatedString, "\"abc\\")]
    );
}

#[test]
fn adjacent_strings() {
    assert_eq!(
        scan_tags("\"a\"\"b\""),
        vec![RawTag::String, RawTag::String]
    );
}

// ─── Unrecognized Characters ─────────────────────────────────────────────

#[test]
fn non_ascii_char_is_one_token() {
    assert_eq!(
        scan_text("ñ€"),
        vec![(RawTag::UnrecognizedChar, "ñ"), (RawTag::UnrecognizedChar, "€")]
    );
}

#[test]
fn ascii_punctuation_outside_grammar() {
    for source in ["@", "#", "$", "%", "^", "&", "|", "~", "?", ":", "'", "`", "\\", "."] {
        assert_eq!(
            scan_tags(source),
            vec![RawTag::UnrecognizedChar],
            "expected {source:?} to be unrecognized"
        );
    }
}

#[test]
fn interior_null_is_unrecognized() {
    assert_eq!(
        scan_text("a\0b"),
        vec![
            (RawTag::Ident, "a"),
            (RawTag::UnrecognizedChar, "\0"),
            (RawTag::Ident, "b"),
        ]
    );
}

// ─── Realistic Input ─────────────────────────────────────────────────────

#[test]
fn realistic_while_loop() {
    assert_eq!(
        significant_tags("while (i <= 10) { total = total + i; }"),
        vec![
            RawTag::Ident,
            RawTag::LeftParen,
            RawTag::Ident,
            RawTag::LessEqual,
            RawTag::Int,
            RawTag::RightParen,
            RawTag::LeftBrace,
            RawTag::Ident,
            RawTag::Equal,
            RawTag::Ident,
            RawTag::Plus,
            RawTag::Ident,
            RawTag::Semicolon,
            RawTag::RightBrace,
        ]
    );
}

// ─── Iterator impl ───────────────────────────────────────────────────────

#[test]
fn iterator_yields_tokens_then_none() {
    let buf = SourceBuffer::new("a b");
    let mut scanner = RawScanner::new(buf.cursor());
    assert_eq!(scanner.next().map(|t| t.tag), Some(RawTag::Ident));
    assert_eq!(scanner.next().map(|t| t.tag), Some(RawTag::Whitespace));
    assert_eq!(scanner.next().map(|t| t.tag), Some(RawTag::Ident));
    assert_eq!(scanner.next(), None);
    assert_eq!(scanner.next(), None);
}

// ─── Property Tests ──────────────────────────────────────────────────────

mod proptest_scan {
    use super::scan;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn lengths_cover_source(source in "\\PC{0,64}") {
            let total: usize = scan(&source).iter().map(|t| t.len as usize).sum();
            prop_assert_eq!(total, source.len());
        }

        #[test]
        fn tokens_end_on_char_boundaries(source in "[a-z0-9 \\n\"/*!=<>.ñ€]{0,48}") {
            let mut pos = 0usize;
            for tok in scan(&source) {
                pos += tok.len as usize;
                prop_assert!(source.is_char_boundary(pos), "split char at {} in {:?}", pos, source);
            }
        }
    }
}
