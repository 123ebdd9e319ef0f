use std::fs::File;
use std::io::{self, BufWriter, Write};

use analex::{analyze, load_source, write_report, Token, TokenStats};

use super::{CliOptions, EXIT_FAILURE, EXIT_LEXICAL_ERRORS, EXIT_SUCCESS};

/// Analyze `options.file`, writing results to `out` and failures to `err`.
///
/// Returns the process exit status. I/O errors on `out` or `err`
/// themselves propagate.
pub fn analyze_file(
    options: &CliOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> io::Result<i32> {
    let source = match load_source(&options.file) {
        Ok(source) => source,
        Err(e) => {
            writeln!(err, "error: {e}")?;
            return Ok(EXIT_FAILURE);
        }
    };
    if source.is_empty() {
        writeln!(err, "error: no source code to analyze")?;
        return Ok(EXIT_FAILURE);
    }

    let analysis = analyze(&source);
    let tokens = if options.no_comments {
        analysis.without_comments()
    } else {
        analysis.tokens.clone()
    };

    write_token_table(out, &tokens)?;

    if analysis.has_errors() {
        writeln!(out)?;
        writeln!(out, "Lexical errors:")?;
        for message in analysis.error_messages() {
            writeln!(out, "  {message}")?;
        }
    }

    if options.stats {
        writeln!(out)?;
        write!(out, "{}", TokenStats::from_tokens(&tokens))?;
    }

    if let Some(path) = &options.report {
        if tokens.is_empty() {
            writeln!(err, "error: no tokens to save")?;
            return Ok(EXIT_FAILURE);
        }
        let written = File::create(path).and_then(|file| {
            let mut file = BufWriter::new(file);
            write_report(&mut file, &tokens)
        });
        if let Err(e) = written {
            writeln!(err, "error: cannot write report '{}': {e}", path.display())?;
            return Ok(EXIT_FAILURE);
        }
        tracing::debug!(path = %path.display(), "report written");
        writeln!(out)?;
        writeln!(out, "Report written to {}", path.display())?;
    }

    writeln!(out)?;
    writeln!(out, "Analysis complete: {} tokens found", tokens.len())?;

    Ok(if analysis.has_errors() {
        EXIT_LEXICAL_ERRORS
    } else {
        EXIT_SUCCESS
    })
}

/// Print one aligned row per token. Line breaks and other control
/// characters inside lexemes are escaped so every token stays on one row.
pub fn write_token_table(out: &mut dyn Write, tokens: &[Token]) -> io::Result<()> {
    writeln!(out, "{:<30} {:<20} {:<6} COLUMN", "TYPE", "LEXEME", "LINE")?;
    for token in tokens {
        let lexeme = token.lexeme().escape_debug().to_string();
        writeln!(
            out,
            "{:<30} {:<20} {:<6} {}",
            token.kind().display_name(),
            lexeme,
            token.line(),
            token.column()
        )?;
    }
    Ok(())
}
