//! Value stack holding the calculator's operands.

use crate::error::StackError;

/// LIFO sequence of `f64` values. The top is the most recently pushed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueStack {
    values: Vec<f64>,
}

impl ValueStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Number of elements on the stack.
    #[inline]
    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// Whether the stack has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Push a value onto the top.
    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    /// Remove and return the top value.
    ///
    /// # Errors
    /// Returns [`StackError::Empty`] if the stack has no elements.
    pub fn pop(&mut self) -> Result<f64, StackError> {
        self.values.pop().ok_or(StackError::Empty)
    }

    /// The top value, if any.
    pub fn peek(&self) -> Option<f64> {
        self.values.last().copied()
    }

    /// Fail unless at least `needed` elements are present.
    pub fn require(&self, needed: usize) -> Result<(), StackError> {
        if self.values.len() < needed {
            return Err(StackError::Underflow {
                needed,
                available: self.values.len(),
            });
        }
        Ok(())
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Copy of the contents, bottom to top.
    pub fn snapshot(&self) -> Vec<f64> {
        self.values.clone()
    }

    /// Borrowed view of the contents, bottom to top.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}
