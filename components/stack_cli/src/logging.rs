//! Logging setup
//!
//! Every message of a session (banner, warnings, help text, farewell) goes
//! through `tracing` to standard error. Standard output only carries
//! `print` listings.

use crate::error::{CliError, CliResult};
use stack_machine::Severity;
use tracing::Level;

/// Install the global `tracing` subscriber.
///
/// # Errors
/// Returns [`CliError::LoggingError`] if a subscriber is already installed.
pub fn init_logging() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::INFO)
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| CliError::LoggingError(e.to_string()))
}

/// Emit `message` at the level matching `severity`.
pub fn report(severity: Severity, message: &str) {
    match severity {
        Severity::Debug => tracing::debug!("{}", message),
        Severity::Info => tracing::info!("{}", message),
        Severity::Warning => tracing::warn!("{}", message),
    }
}
