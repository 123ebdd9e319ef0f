//! Lexical analyzer for a small C-like teaching grammar.
//!
//! Built on the allocation-free raw layer in [`analex_core`]. This crate
//! "cooks" raw tokens: it tracks line and column, resolves reserved words
//! and boolean literals, collects diagnostics, and produces owned
//! [`Token`] values.
//!
//! ```
//! use analex::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("x = 42;");
//! let kinds: Vec<TokenKind> = scanner.by_ref().map(|t| t.kind()).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Identifier,
//!         TokenKind::Assign,
//!         TokenKind::IntegerLiteral,
//!         TokenKind::Semicolon,
//!     ]
//! );
//! assert!(scanner.errors().is_empty());
//! ```
//!
//! Beyond the pull-based [`Scanner`], the crate offers a batch driver
//! ([`analyze`]), file loading ([`load_source`]), token statistics
//! ([`TokenStats`]) and the plain-text token report ([`write_report`]).

mod analysis;
mod keywords;
mod lex_error;
mod position;
mod report;
mod scanner;
mod source;
mod stats;
mod token;

pub use analysis::{analyze, Analysis};
pub use keywords::{is_reserved_word, BOOLEAN_LITERALS, RESERVED_WORDS};
pub use lex_error::{LexError, LexErrorKind};
pub use position::Position;
pub use report::{render_report, write_report, REPORT_TITLE};
pub use scanner::Scanner;
pub use source::{load_source, SourceError};
pub use stats::{TokenStats, RECENT_TOKENS};
pub use token::{Token, TokenCategory, TokenKind};
