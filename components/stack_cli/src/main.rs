//! Stack Machine CLI
//!
//! Entry point for the calculator. Installs logging, then feeds standard
//! input to a [`Session`] until `quit` or end of input.

use clap::Parser as ClapParser;
use stack_cli::{logging, repl, Cli, Session};
use std::io::{self, IsTerminal};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _cli = Cli::parse();
    logging::init_logging()?;

    let mut session = Session::new(io::stdout());
    session.greet();

    let stdin = io::stdin();
    if stdin.is_terminal() {
        repl::run_repl(&mut session)?;
    } else {
        session.run(stdin.lock())?;
    }

    Ok(())
}
