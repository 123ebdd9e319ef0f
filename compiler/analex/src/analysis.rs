//! One-shot analysis driver.

use crate::{LexError, Scanner, Token};

/// Every token and diagnostic from a single scan.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Analysis {
    /// Tokens in source order, end-of-input excluded.
    pub tokens: Vec<Token>,
    /// Diagnostics in the order they were recorded.
    pub errors: Vec<LexError>,
}

impl Analysis {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Rendered diagnostics, one per error.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    /// The tokens without line and block comments.
    pub fn without_comments(&self) -> Vec<Token> {
        self.tokens
            .iter()
            .filter(|t| !t.kind().is_comment())
            .cloned()
            .collect()
    }
}

/// Scan `source` to the end.
///
/// Starts from an empty error log and pulls tokens until end-of-input,
/// which is not included in the result.
pub fn analyze(source: &str) -> Analysis {
    let mut scanner = Scanner::new(source);
    scanner.reset_errors();
    let tokens: Vec<Token> = scanner.by_ref().collect();
    let errors = scanner.take_errors();
    tracing::debug!(
        tokens = tokens.len(),
        errors = errors.len(),
        "analysis complete"
    );
    Analysis { tokens, errors }
}
