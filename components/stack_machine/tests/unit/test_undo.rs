//! Unit tests for UndoRecord and UndoHistory

use stack_machine::{UndoHistory, UndoRecord, ValueStack};

fn stack_of(values: &[f64]) -> ValueStack {
    let mut stack = ValueStack::new();
    for value in values {
        stack.push(*value);
    }
    stack
}

#[test]
fn test_revert_pop_pushes_value_back() {
    let mut stack = stack_of(&[1.0]);
    UndoRecord::Pop(2.0).revert(&mut stack).unwrap();
    assert_eq!(stack.snapshot(), vec![1.0, 2.0]);
}

#[test]
fn test_revert_mul_restores_operands() {
    let mut stack = stack_of(&[9.0, 15.0]);
    UndoRecord::Mul(3.0, 5.0).revert(&mut stack).unwrap();
    assert_eq!(stack.snapshot(), vec![9.0, 5.0, 3.0]);
}

#[test]
fn test_revert_neg_and_inv() {
    let mut stack = stack_of(&[-4.0]);
    UndoRecord::Neg(4.0).revert(&mut stack).unwrap();
    assert_eq!(stack.snapshot(), vec![4.0]);

    let mut stack = stack_of(&[0.25]);
    UndoRecord::Inv(4.0).revert(&mut stack).unwrap();
    assert_eq!(stack.snapshot(), vec![4.0]);
}

#[test]
fn test_revert_clear_on_top_of_existing() {
    let mut stack = stack_of(&[7.0]);
    UndoRecord::Clear(vec![1.0, 2.0]).revert(&mut stack).unwrap();
    assert_eq!(stack.snapshot(), vec![7.0, 1.0, 2.0]);
}

#[test]
fn test_failed_revert_leaves_stack_alone() {
    let mut stack = ValueStack::new();
    assert!(UndoRecord::Add(1.0, 2.0).revert(&mut stack).is_err());
    assert!(stack.is_empty());
}

#[test]
fn test_command_names() {
    assert_eq!(UndoRecord::Push(1.0).command_name(), "push");
    assert_eq!(UndoRecord::Clear(vec![]).command_name(), "clear");
    assert_eq!(UndoRecord::Mul(1.0, 2.0).command_name(), "mul");
}

#[test]
fn test_history_default_is_empty() {
    let history = UndoHistory::default();
    assert!(history.is_empty());
    assert_eq!(history.last(), None);
}
