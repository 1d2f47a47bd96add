//! Error types for the CLI

use thiserror::Error;

/// CLI-specific errors
///
/// Command errors never reach this type; the interpreter reports them and
/// the session carries on. Only failures of the surrounding I/O end up here.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Line editor error
    #[error("REPL error: {0}")]
    ReplError(String),

    /// Logging could not be installed
    #[error("Logging error: {0}")]
    LoggingError(String),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
