//! Token statistics: category counts and the most recent tokens.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::{Token, TokenKind};

/// How many trailing tokens [`TokenStats::recent`] keeps.
pub const RECENT_TOKENS: usize = 5;

/// Summary counts over a token sequence.
#[derive(Clone, Debug, Default)]
pub struct TokenStats {
    total: usize,
    reserved_words: usize,
    identifiers: usize,
    numbers: usize,
    operators: usize,
    per_kind: FxHashMap<TokenKind, usize>,
    recent: Vec<Token>,
}

impl TokenStats {
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let mut per_kind = FxHashMap::default();
        for token in tokens {
            *per_kind.entry(token.kind()).or_insert(0) += 1;
        }
        let count = |kind| per_kind.get(&kind).copied().unwrap_or(0);

        TokenStats {
            total: tokens.len(),
            reserved_words: count(TokenKind::ReservedWord),
            identifiers: count(TokenKind::Identifier),
            numbers: count(TokenKind::IntegerLiteral) + count(TokenKind::DecimalLiteral),
            operators: tokens.iter().filter(|t| t.kind().is_operator()).count(),
            recent: tokens[tokens.len().saturating_sub(RECENT_TOKENS)..].to_vec(),
            per_kind,
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn reserved_words(&self) -> usize {
        self.reserved_words
    }

    pub fn identifiers(&self) -> usize {
        self.identifiers
    }

    /// Integer and decimal literals together.
    pub fn numbers(&self) -> usize {
        self.numbers
    }

    pub fn operators(&self) -> usize {
        self.operators
    }

    /// Number of tokens of exactly `kind`.
    pub fn count(&self, kind: TokenKind) -> usize {
        self.per_kind.get(&kind).copied().unwrap_or(0)
    }

    /// Up to [`RECENT_TOKENS`] final tokens, in source order.
    pub fn recent(&self) -> &[Token] {
        &self.recent
    }
}

impl fmt::Display for TokenStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Statistics:")?;
        writeln!(f, "  Tokens:         {}", self.total)?;
        writeln!(f, "  Reserved words: {}", self.reserved_words)?;
        writeln!(f, "  Identifiers:    {}", self.identifiers)?;
        writeln!(f, "  Numbers:        {}", self.numbers)?;
        writeln!(f, "  Operators:      {}", self.operators)?;
        writeln!(f, "Last tokens:")?;
        for token in &self.recent {
            writeln!(f, "  {}: {}", token.kind().display_name(), token.lexeme())?;
        }
        Ok(())
    }
}
