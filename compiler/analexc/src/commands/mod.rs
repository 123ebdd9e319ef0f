//! Command handlers for the `analex` CLI.
//!
//! [`parse_args`] turns the argument list into a [`Command`];
//! [`analyze_file`] runs the analysis and writes everything a user sees.

mod analyze;
mod options;

pub use analyze::{analyze_file, write_token_table};
pub use options::{parse_args, CliOptions, Command, UsageError};

/// No lexical errors.
pub const EXIT_SUCCESS: i32 = 0;
/// Bad usage, unreadable input, empty source, or a report that cannot be written.
pub const EXIT_FAILURE: i32 = 1;
/// The analysis ran but found lexical errors.
pub const EXIT_LEXICAL_ERRORS: i32 = 2;

/// Text printed for `--help` and after a usage error.
pub const USAGE: &str = "\
Usage: analex <file> [options]

Options:
  --no-comments       Leave comment tokens out of the table and report
  --stats             Print token statistics after the table
  -o <path>           Write the token report to <path>
  -h, --help          Show this help message

Exit status: 0 if the source is lexically clean, 2 if lexical errors
were found, 1 on any other failure.

Set RUST_LOG (e.g. RUST_LOG=analex=trace) for diagnostic logging.";
