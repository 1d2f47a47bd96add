//! Command-line argument parsing

use clap::Parser;

/// Interactive stack calculator with single-step undo.
///
/// Commands are read from standard input, one per line. The program takes
/// no options beyond `--help` and `--version`.
#[derive(Debug, Default, Parser)]
#[command(name = "stack-machine", version, long_about = None)]
pub struct Cli {}
