//! Stack machine core: a numeric value stack and the command interpreter
//! that mutates it.
//!
//! # Overview
//!
//! - [`ValueStack`] - LIFO sequence of `f64` values
//! - [`Command`] - Parsed form of one input line
//! - [`UndoRecord`] - How to reverse exactly one mutating command
//! - [`Interpreter`] - Owns the stack and undo history, executes lines
//!
//! # Examples
//!
//! ```
//! use stack_machine::Interpreter;
//!
//! let mut interpreter = Interpreter::new();
//! interpreter.execute("5");
//! interpreter.execute("push 3");
//! interpreter.execute("add");
//! assert_eq!(interpreter.stack().snapshot(), vec![8.0]);
//!
//! interpreter.execute("undo");
//! assert_eq!(interpreter.stack().snapshot(), vec![5.0, 3.0]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod command;
mod error;
mod interpreter;
mod stack;
mod undo;

pub use command::Command;
pub use error::{CommandError, Severity, StackError};
pub use interpreter::{Effect, Interpreter, Outcome, HELP_TEXT, PROMPT};
pub use stack::ValueStack;
pub use undo::{UndoHistory, UndoRecord};
