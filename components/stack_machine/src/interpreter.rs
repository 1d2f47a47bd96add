//! Command interpreter: the sole owner and mutator of the value stack and
//! its undo history.

use crate::command::Command;
use crate::error::{CommandError, Severity};
use crate::stack::ValueStack;
use crate::undo::{UndoHistory, UndoRecord};
use tracing::debug;

/// Line shown whenever the user is expected to type a command.
pub const PROMPT: &str = "Please enter command:";

/// Command reference shown by `help`.
pub const HELP_TEXT: &str = " Stack Machine supports below list of commands

PUSH <xyz> or <xyz>   - Pushes the numeric value <xyz> to the top of the stack ( <xyz> is a valid decimal number ).
POP     - Removes the top element from the stack.
CLEAR   - Removes all elements from the stack.
ADD     - Adds the top 2 elements on the stack and pushes the result back to the stack.
MUL     - Multiplies the top 2 elements on the stack and pushes the result back to the stack.
NEG     - Negates the top element on the stack and pushes the result back to the stack.
INV     - Inverts the top element on the stack and pushes the result back to the stack.
UNDO    - The last instruction is undone leaving the stack in the same state as before that instruction.
PRINT   - Prints all elements that are currently on the stack.
QUIT    - Exits the program.
";

/// Side effect the read loop has to carry out after a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Nothing beyond reporting the message
    None,
    /// Write this stack listing to standard output
    Print(String),
    /// Stop reading input
    Quit,
}

/// Result of executing one line.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// Whether the command was carried out
    pub applied: bool,
    /// Level the message should be reported at
    pub severity: Severity,
    /// Human-readable report
    pub message: String,
    /// Follow-up for the read loop
    pub effect: Effect,
}

impl Outcome {
    fn done(message: impl Into<String>) -> Self {
        Self {
            applied: true,
            severity: Severity::Debug,
            message: message.into(),
            effect: Effect::None,
        }
    }

    fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    fn with_effect(mut self, effect: Effect) -> Self {
        self.effect = effect;
        self
    }

    fn rejected(error: &CommandError) -> Self {
        Self {
            applied: false,
            severity: error.severity(),
            message: error.to_string(),
            effect: Effect::None,
        }
    }
}

/// Executes commands against a [`ValueStack`], recording how to undo each
/// successful mutation.
///
/// Failed commands never touch the stack or the history.
#[derive(Debug, Default)]
pub struct Interpreter {
    stack: ValueStack,
    history: UndoHistory,
}

impl Interpreter {
    /// Create an interpreter with an empty stack and history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current stack contents.
    pub fn stack(&self) -> &ValueStack {
        &self.stack
    }

    /// Number of commands that can still be undone.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Parse and apply one input line.
    ///
    /// Errors are folded into the returned [`Outcome`]; nothing a user
    /// types can end the session except `quit`.
    ///
    /// # Example
    /// ```
    /// use stack_machine::{Interpreter, Severity};
    ///
    /// let mut interpreter = Interpreter::new();
    /// let outcome = interpreter.execute("pop");
    /// assert!(!outcome.applied);
    /// assert_eq!(outcome.severity, Severity::Info);
    /// assert_eq!(outcome.message, "Stack is empty. Nothing to pop.");
    /// ```
    pub fn execute(&mut self, line: &str) -> Outcome {
        match Command::parse(line).and_then(|command| self.apply(command)) {
            Ok(outcome) => outcome,
            Err(error) => {
                debug!(input = line, %error, "command rejected");
                Outcome::rejected(&error)
            }
        }
    }

    /// Reverse the most recent successful mutating command.
    pub fn undo(&mut self) -> Outcome {
        self.execute_command(Command::Undo)
    }

    /// Apply an already parsed command, folding errors into the outcome.
    pub fn execute_command(&mut self, command: Command) -> Outcome {
        self.apply(command)
            .unwrap_or_else(|error| Outcome::rejected(&error))
    }

    /// Apply an already parsed command.
    ///
    /// # Errors
    /// Returns a [`CommandError`] when the command's precondition does not
    /// hold. The stack and history are unchanged in that case.
    pub fn apply(&mut self, command: Command) -> Result<Outcome, CommandError> {
        let outcome = match command {
            Command::Push(value) => {
                self.stack.push(value);
                self.history.record(UndoRecord::Push(value));
                Outcome::done(format!("Pushed {:?}", value))
            }
            Command::Pop => {
                let value = self
                    .stack
                    .pop()
                    .map_err(|_| CommandError::NothingTo { action: "pop" })?;
                self.history.record(UndoRecord::Pop(value));
                Outcome::done(format!("Popped {:?}", value))
            }
            Command::Clear => {
                if self.stack.is_empty() {
                    return Err(CommandError::NothingTo { action: "clear" });
                }
                let snapshot = self.stack.snapshot();
                let count = snapshot.len();
                self.stack.clear();
                self.history.record(UndoRecord::Clear(snapshot));
                Outcome::done(format!("Cleared {} element(s)", count))
            }
            Command::Add => {
                let (first, second) = self.pop_operands("add")?;
                self.stack.push(first + second);
                self.history.record(UndoRecord::Add(first, second));
                Outcome::done(format!("Added {:?} and {:?}", first, second))
            }
            Command::Mul => {
                let (first, second) = self.pop_operands("multiply")?;
                self.stack.push(first * second);
                self.history.record(UndoRecord::Mul(first, second));
                Outcome::done(format!("Multiplied {:?} by {:?}", first, second))
            }
            Command::Neg => {
                let value = self.pop_operand("negate")?;
                self.stack.push(-value);
                self.history.record(UndoRecord::Neg(value));
                Outcome::done(format!("Negated {:?}", value))
            }
            Command::Inv => {
                let value = self.pop_operand("invert")?;
                let inverse = 1.0 / value;
                self.stack.push(inverse);
                self.history.record(UndoRecord::Inv(value));
                if value == 0.0 {
                    Outcome::done(format!("Inverted {:?}; result is {:?}", value, inverse))
                        .with_severity(Severity::Warning)
                } else {
                    Outcome::done(format!("Inverted {:?}", value))
                }
            }
            Command::Undo => {
                let record = self.history.last().ok_or(CommandError::NothingToUndo)?;
                record.revert(&mut self.stack)?;
                let name = record.command_name();
                self.history.pop();
                Outcome::done(format!("Undid {}", name))
            }
            Command::Print => {
                let listing = format!("{:?}", self.stack.as_slice());
                let message = if self.stack.is_empty() {
                    "Stack is empty.".to_string()
                } else {
                    format!("Stack Elements : {}", listing)
                };
                Outcome::done(message)
                    .with_severity(Severity::Info)
                    .with_effect(Effect::Print(listing))
            }
            Command::Help => {
                Outcome::done(format!("{}\n{}", HELP_TEXT, PROMPT)).with_severity(Severity::Info)
            }
            Command::Quit => Outcome::done("Quit requested").with_effect(Effect::Quit),
        };

        debug!(
            command = command.keyword(),
            depth = self.stack.size(),
            history = self.history.len(),
            "command applied"
        );
        Ok(outcome)
    }

    fn pop_operand(&mut self, action: &'static str) -> Result<f64, CommandError> {
        self.stack
            .pop()
            .map_err(|_| CommandError::EmptyStack { action })
    }

    /// Pop the top two values, first-popped first. Leaves the stack
    /// untouched unless both are present.
    fn pop_operands(&mut self, action: &'static str) -> Result<(f64, f64), CommandError> {
        self.stack
            .require(2)
            .map_err(|_| CommandError::InsufficientOperands { action })?;
        let first = self.stack.pop()?;
        let second = self.stack.pop()?;
        Ok((first, second))
    }
}
