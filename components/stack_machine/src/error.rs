//! Error types for stack and command failures.
//!
//! Every error here is a user input error. None of them is fatal: the
//! interpreter reports them and leaves its state untouched.

use thiserror::Error;

/// How loudly a message should be reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Routine confirmation of a successful command
    Debug,
    /// Informational message
    Info,
    /// Something the user asked for could not be done
    Warning,
}

/// Errors raised by [`crate::ValueStack`] operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StackError {
    /// Pop on an empty stack
    #[error("stack is empty")]
    Empty,
    /// Fewer elements than an operation requires
    #[error("stack underflow: needed {needed}, available {available}")]
    Underflow {
        /// Elements required
        needed: usize,
        /// Elements present
        available: usize,
    },
}

/// Errors produced while parsing or applying a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// `push` without exactly one decimal operand
    #[error("Not a valid push command. Please Enter PUSH <xyz> where <xyz> is a valid decimal number.")]
    InvalidPush,

    /// `pop` or `clear` on an empty stack
    #[error("Stack is empty. Nothing to {action}.")]
    NothingTo {
        /// Verb for the operation
        action: &'static str,
    },

    /// `neg` or `inv` on an empty stack
    #[error("Stack is empty. Cannot {action}.")]
    EmptyStack {
        /// Verb for the operation
        action: &'static str,
    },

    /// A binary command with fewer than two elements
    #[error("Not enough elements in stack to {action}.")]
    InsufficientOperands {
        /// Verb for the operation
        action: &'static str,
    },

    /// `undo` with an empty history
    #[error("Nothing to undo")]
    NothingToUndo,

    /// Input that matches no command
    #[error("Can not recognise the command : '{0}' . Enter 'Help' to get the list of commands.")]
    Unrecognized(String),

    /// The stack did not hold what an undo record expected
    #[error(transparent)]
    Stack(#[from] StackError),
}

impl CommandError {
    /// Log level the message is reported at.
    pub fn severity(&self) -> Severity {
        match self {
            CommandError::NothingTo { .. } | CommandError::Unrecognized(_) => Severity::Info,
            _ => Severity::Warning,
        }
    }
}
