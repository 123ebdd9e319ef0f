//! Plain-text token report.
//!
//! ```text
//! TOKENS IDENTIFICADOS
//! ===================
//!
//! PALABRA RESERVADA              while                Línea: 1     Columna: 1
//! ```
//!
//! One row per token: display name padded to 30 characters, lexeme padded
//! to 20, then line and column each padded to 5. Padding is kept even at
//! the end of a row.

use std::io::{self, Write};

use crate::Token;

/// First line of every report.
pub const REPORT_TITLE: &str = "TOKENS IDENTIFICADOS";

const RULE: &str = "===================";

/// Write the report for `tokens` to `out`.
pub fn write_report<W: Write + ?Sized>(out: &mut W, tokens: &[Token]) -> io::Result<()> {
    writeln!(out, "{REPORT_TITLE}")?;
    writeln!(out, "{RULE}")?;
    writeln!(out)?;
    for token in tokens {
        writeln!(
            out,
            "{:<30} {:<20} Línea: {:<5} Columna: {:<5}",
            token.kind().display_name(),
            token.lexeme(),
            token.line(),
            token.column()
        )?;
    }
    out.flush()
}

/// The report as a string.
pub fn render_report(tokens: &[Token]) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    if write_report(&mut buf, tokens).is_err() {
        return String::new();
    }
    String::from_utf8_lossy(&buf).into_owned()
}
