//! Read loop driving an [`Interpreter`] one line at a time

use crate::error::{CliError, CliResult};
use crate::logging::report;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use stack_machine::{Effect, Interpreter, PROMPT};
use std::io::{BufRead, Write};
use tracing::info;

/// Shown once when the session starts.
pub const BANNER: &str = "** Welcome to Stack Machine **";

/// Shown once when the session ends.
pub const FAREWELL: &str = "** Thanks for using Stack Machine. Quitting now. **";

/// Whether the loop should keep reading after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line
    Continue,
    /// The user asked to quit
    Quit,
}

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// `quit` was entered
    Quit,
    /// Input ran out
    EndOfInput,
}

/// One interactive session: an interpreter plus the writer that receives
/// `print` listings.
pub struct Session<W: Write> {
    interpreter: Interpreter,
    out: W,
}

impl<W: Write> Session<W> {
    /// Create a session with a fresh interpreter.
    pub fn new(out: W) -> Self {
        Self {
            interpreter: Interpreter::new(),
            out,
        }
    }

    /// The interpreter this session drives.
    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// Consume the session, returning the output writer.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Log the welcome banner and the first prompt.
    pub fn greet(&self) {
        info!("{}", BANNER);
        info!("{}", PROMPT);
    }

    /// Log the farewell message.
    pub fn farewell(&self) {
        info!("{}", FAREWELL);
    }

    /// Execute one input line.
    ///
    /// # Errors
    /// Returns [`CliError::IoError`] if a `print` listing cannot be written.
    pub fn feed(&mut self, line: &str) -> CliResult<Flow> {
        let input = line.trim().to_lowercase();
        if input.is_empty() {
            return Ok(Flow::Continue);
        }

        let outcome = self.interpreter.execute(&input);
        report(outcome.severity, &outcome.message);

        match outcome.effect {
            Effect::None => Ok(Flow::Continue),
            Effect::Print(listing) => {
                writeln!(self.out, "{}", listing)?;
                self.out.flush()?;
                Ok(Flow::Continue)
            }
            Effect::Quit => Ok(Flow::Quit),
        }
    }

    /// Feed every line of `input` until `quit` or end of input, then log
    /// the farewell.
    ///
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD; such a
    /// line is reported as unrecognized and the session carries on.
    ///
    /// # Errors
    /// Returns [`CliError::IoError`] if reading or writing fails. The
    /// farewell is logged either way.
    pub fn run<R: BufRead>(&mut self, input: R) -> CliResult<SessionEnd> {
        let result = self.read_lines(input);
        self.farewell();
        result
    }

    fn read_lines<R: BufRead>(&mut self, mut input: R) -> CliResult<SessionEnd> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                return Ok(SessionEnd::EndOfInput);
            }
            let line = String::from_utf8_lossy(&buf);
            if self.feed(&line)? == Flow::Quit {
                return Ok(SessionEnd::Quit);
            }
        }
    }
}

/// Run the session over an interactive line editor
///
/// # Arguments
/// * `session` - The session to feed lines to
///
/// # Returns
/// How the session ended
pub fn run_repl<W: Write>(session: &mut Session<W>) -> CliResult<SessionEnd> {
    let mut editor = DefaultEditor::new()
        .map_err(|e| CliError::ReplError(format!("Failed to initialize editor: {}", e)))?;

    let end = loop {
        match editor.readline("> ") {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = editor.add_history_entry(line.as_str());
                }
                if session.feed(&line)? == Flow::Quit {
                    break SessionEnd::Quit;
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl-C
                info!("Press Ctrl-D or type 'quit' to quit");
            }
            Err(ReadlineError::Eof) => {
                // Ctrl-D
                break SessionEnd::EndOfInput;
            }
            Err(err) => {
                return Err(CliError::ReplError(format!("Readline error: {}", err)));
            }
        }
    };

    session.farewell();
    Ok(end)
}
