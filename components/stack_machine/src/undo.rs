//! Undo records and the history they are kept in.

use crate::error::StackError;
use crate::stack::ValueStack;

/// How to reverse one successful mutating command.
///
/// Binary operands are stored in pop order: the first field was the top
/// of the stack.
#[derive(Debug, Clone, PartialEq)]
pub enum UndoRecord {
    /// A value was pushed
    Push(f64),
    /// A value was popped
    Pop(f64),
    /// The stack was cleared; contents bottom to top
    Clear(Vec<f64>),
    /// Two operands were replaced by their sum
    Add(f64, f64),
    /// Two operands were replaced by their product
    Mul(f64, f64),
    /// The top value was negated
    Neg(f64),
    /// The top value was inverted
    Inv(f64),
}

impl UndoRecord {
    /// Keyword of the command this record reverses.
    pub fn command_name(&self) -> &'static str {
        match self {
            UndoRecord::Push(_) => "push",
            UndoRecord::Pop(_) => "pop",
            UndoRecord::Clear(_) => "clear",
            UndoRecord::Add(..) => "add",
            UndoRecord::Mul(..) => "mul",
            UndoRecord::Neg(_) => "neg",
            UndoRecord::Inv(_) => "inv",
        }
    }

    /// Apply the inverse of the recorded command to `stack`.
    ///
    /// # Errors
    /// Returns [`StackError`] if the stack no longer holds the result this
    /// record expects to remove. That cannot happen while the interpreter
    /// is the only mutator.
    pub fn revert(&self, stack: &mut ValueStack) -> Result<(), StackError> {
        match self {
            UndoRecord::Push(_) => {
                stack.pop()?;
            }
            UndoRecord::Pop(value) => stack.push(*value),
            UndoRecord::Clear(values) => {
                for value in values {
                    stack.push(*value);
                }
            }
            UndoRecord::Add(first, second) | UndoRecord::Mul(first, second) => {
                stack.pop()?;
                stack.push(*second);
                stack.push(*first);
            }
            UndoRecord::Neg(original) | UndoRecord::Inv(original) => {
                stack.pop()?;
                stack.push(*original);
            }
        }
        Ok(())
    }
}

/// Records of successful mutating commands, most recent last.
#[derive(Debug, Clone, Default)]
pub struct UndoHistory {
    records: Vec<UndoRecord>,
}

impl UndoHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub fn record(&mut self, record: UndoRecord) {
        self.records.push(record);
    }

    /// Remove and return the most recent record.
    pub fn pop(&mut self) -> Option<UndoRecord> {
        self.records.pop()
    }

    /// The most recent record, if any.
    pub fn last(&self) -> Option<&UndoRecord> {
        self.records.last()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether there is nothing to undo.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
