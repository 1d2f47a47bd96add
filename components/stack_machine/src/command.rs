//! Parsing of input lines into [`Command`]s.

use crate::error::CommandError;
use regex::Regex;
use std::sync::OnceLock;

const PUSH_KEYWORD: &str = "push";

/// Optionally signed decimal, with an optional fractional part.
fn decimal_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)$").expect("decimal pattern is valid")
    })
}

/// Parse `token` as a decimal number, or `None` if it is not one.
fn parse_decimal(token: &str) -> Option<f64> {
    if !decimal_pattern().is_match(token) {
        return None;
    }
    token.parse().ok()
}

/// One parsed input line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Push a number, written either as `push <n>` or as a bare `<n>`
    Push(f64),
    /// Remove the top element
    Pop,
    /// Remove every element
    Clear,
    /// Replace the top two elements with their sum
    Add,
    /// Replace the top two elements with their product
    Mul,
    /// Negate the top element
    Neg,
    /// Replace the top element with its reciprocal
    Inv,
    /// Reverse the most recent mutating command
    Undo,
    /// List the stack contents
    Print,
    /// Show the command reference
    Help,
    /// End the session
    Quit,
}

impl Command {
    /// Parse one input line. Matching is case-insensitive and ignores
    /// surrounding whitespace.
    ///
    /// # Errors
    /// Returns [`CommandError::InvalidPush`] for a malformed `push` line and
    /// [`CommandError::Unrecognized`] for anything else that is not a command.
    ///
    /// # Example
    /// ```
    /// use stack_machine::Command;
    ///
    /// assert_eq!(Command::parse("PUSH 2.5"), Ok(Command::Push(2.5)));
    /// assert_eq!(Command::parse("-4"), Ok(Command::Push(-4.0)));
    /// assert_eq!(Command::parse("mul"), Ok(Command::Mul));
    /// ```
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let input = line.trim().to_lowercase();

        if let Some(value) = parse_decimal(&input) {
            return Ok(Command::Push(value));
        }

        if input.starts_with(PUSH_KEYWORD) {
            let tokens: Vec<&str> = input.split_whitespace().collect();
            return match tokens.as_slice() {
                [PUSH_KEYWORD, operand] => parse_decimal(operand)
                    .map(Command::Push)
                    .ok_or(CommandError::InvalidPush),
                _ => Err(CommandError::InvalidPush),
            };
        }

        match input.as_str() {
            "pop" => Ok(Command::Pop),
            "clear" => Ok(Command::Clear),
            "add" => Ok(Command::Add),
            "mul" => Ok(Command::Mul),
            "neg" => Ok(Command::Neg),
            "inv" => Ok(Command::Inv),
            "undo" => Ok(Command::Undo),
            "print" => Ok(Command::Print),
            "help" => Ok(Command::Help),
            "quit" => Ok(Command::Quit),
            _ => Err(CommandError::Unrecognized(input)),
        }
    }

    /// Canonical lower-case keyword for this command.
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Push(_) => PUSH_KEYWORD,
            Command::Pop => "pop",
            Command::Clear => "clear",
            Command::Add => "add",
            Command::Mul => "mul",
            Command::Neg => "neg",
            Command::Inv => "inv",
            Command::Undo => "undo",
            Command::Print => "print",
            Command::Help => "help",
            Command::Quit => "quit",
        }
    }

    /// Whether a successful application of this command is recorded in
    /// the undo history.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Command::Push(_)
                | Command::Pop
                | Command::Clear
                | Command::Add
                | Command::Mul
                | Command::Neg
                | Command::Inv
        )
    }
}
