use std::path::PathBuf;

/// What the user asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Help,
    Analyze(CliOptions),
}

/// Options for one analysis run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliOptions {
    /// Source file to analyze.
    pub file: PathBuf,
    /// Drop comment tokens from the table and report (`--no-comments`).
    pub no_comments: bool,
    /// Print statistics (`--stats`).
    pub stats: bool,
    /// Report file to write (`-o <path>`).
    pub report: Option<PathBuf>,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("missing source file")]
    MissingFile,
    #[error("`-o` requires a path")]
    MissingReportPath,
    #[error("unknown option `{0}`")]
    UnknownOption(String),
    #[error("unexpected argument `{0}`")]
    UnexpectedArgument(String),
}

/// Parse the arguments that follow the program name.
///
/// Flags may appear before or after the file path. `--help` wins over
/// anything that follows it. The argument after `-o` is never taken as a
/// path when it looks like an option.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Command, UsageError> {
    let mut options = CliOptions::default();
    let mut file = None;

    let mut iter = args.iter().map(AsRef::as_ref);
    while let Some(arg) = iter.next() {
        match arg {
            "-h" | "--help" => return Ok(Command::Help),
            "--no-comments" => options.no_comments = true,
            "--stats" => options.stats = true,
            "-o" => {
                let path = iter
                    .next()
                    .filter(|path| !path.starts_with('-'))
                    .ok_or(UsageError::MissingReportPath)?;
                options.report = Some(PathBuf::from(path));
            }
            _ if arg.starts_with('-') => return Err(UsageError::UnknownOption(arg.to_owned())),
            _ if file.is_none() => file = Some(PathBuf::from(arg)),
            _ => return Err(UsageError::UnexpectedArgument(arg.to_owned())),
        }
    }

    options.file = file.ok_or(UsageError::MissingFile)?;
    Ok(Command::Analyze(options))
}
