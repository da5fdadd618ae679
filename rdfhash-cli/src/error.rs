use colored::Colorize;
use std::fmt;
use std::process;

/// Exit codes for the CLI.
pub const EXIT_ERROR: i32 = 1;
pub const EXIT_USAGE: i32 = 2;

/// Unified error type for CLI operations.
pub enum CliError {
    /// Argument / usage errors.
    Usage(String),
    /// Unreadable input file or stdin.
    Input(String),
    /// Input could not be parsed as RDF.
    Parse { input: String, message: String },
    /// Canonicalization failed (ill-typed literal, invalid term).
    Canon {
        input: String,
        error: rdfhash_canon::CanonError,
    },
}

impl CliError {
    pub fn parse(input: impl fmt::Display, error: rdfhash_turtle::TurtleError) -> Self {
        CliError::Parse {
            input: input.to_string(),
            message: error.to_string(),
        }
    }

    pub fn canon(input: impl fmt::Display, error: rdfhash_canon::CanonError) -> Self {
        CliError::Canon {
            input: input.to_string(),
            error,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{} {msg}", "error:".red().bold()),
            CliError::Input(msg) => write!(f, "{} {msg}", "error:".red().bold()),
            CliError::Parse { input, message } => {
                write!(f, "{} {}: {message}", "error:".red().bold(), input.bold())
            }
            CliError::Canon { input, error } => {
                write!(f, "{} {}: {error}", "error:".red().bold(), input.bold())?;
                if matches!(error, rdfhash_canon::CanonError::MalformedLiteral { .. }) {
                    write!(
                        f,
                        "\n  {} pass --lenient to hash such literals as written",
                        "help:".cyan().bold()
                    )?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Input(e.to_string())
    }
}

/// Print error and exit with the appropriate code.
pub fn exit_with_error(err: CliError) -> ! {
    eprintln!("{err}");
    let code = match &err {
        CliError::Usage(_) => EXIT_USAGE,
        _ => EXIT_ERROR,
    };
    process::exit(code)
}

pub type CliResult<T> = std::result::Result<T, CliError>;
