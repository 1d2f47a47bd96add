//! Stack Machine CLI Library
//!
//! Provides the read loop, argument parsing and logging setup for the
//! `stack-machine` binary.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod error;
pub mod logging;
pub mod repl;

pub use cli::Cli;
pub use error::{CliError, CliResult};
pub use repl::{Flow, Session, SessionEnd};
