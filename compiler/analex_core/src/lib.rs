//! Low-level scanner for the analex token grammar.
//!
//! This crate turns source text into `(RawTag, len)` pairs. It knows token
//! *boundaries* only: it does not resolve reserved words, track line and
//! column, or produce diagnostics. Those belong to the cooking layer in
//! `analex`.
//!
//! ```
//! use analex_core::{RawScanner, RawTag, SourceBuffer};
//!
//! let buf = SourceBuffer::new("x == 1");
//! let mut scanner = RawScanner::new(buf.cursor());
//! assert_eq!(scanner.next_token().tag, RawTag::Ident);
//! assert_eq!(scanner.next_token().tag, RawTag::Whitespace);
//! assert_eq!(scanner.next_token().tag, RawTag::EqualEqual);
//! ```

mod cursor;
mod raw_scanner;
mod source_buffer;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::{tokenize, RawScanner};
pub use source_buffer::SourceBuffer;
pub use tag::{RawTag, RawToken};
