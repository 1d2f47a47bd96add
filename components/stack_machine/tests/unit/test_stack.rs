//! Unit tests for ValueStack

use stack_machine::{StackError, ValueStack};

#[test]
fn test_new_stack_is_empty() {
    let stack = ValueStack::new();
    assert!(stack.is_empty());
    assert_eq!(stack.size(), 0);
    assert_eq!(stack.snapshot(), Vec::<f64>::new());
}

#[test]
fn test_snapshot_is_bottom_to_top() {
    let mut stack = ValueStack::new();
    for value in [10.0, 20.0, 30.0] {
        stack.push(value);
    }
    assert_eq!(stack.snapshot(), vec![10.0, 20.0, 30.0]);
    assert_eq!(stack.as_slice(), &[10.0, 20.0, 30.0]);
    // snapshot does not mutate
    assert_eq!(stack.size(), 3);
}

#[test]
fn test_pop_empty_fails() {
    let mut stack = ValueStack::new();
    assert_eq!(stack.pop(), Err(StackError::Empty));
}

#[test]
fn test_clear_then_push() {
    let mut stack = ValueStack::new();
    stack.push(1.0);
    stack.clear();
    stack.push(2.0);
    assert_eq!(stack.snapshot(), vec![2.0]);
}

#[test]
fn test_stack_equality() {
    let mut a = ValueStack::new();
    let mut b = ValueStack::new();
    a.push(1.5);
    b.push(1.5);
    assert_eq!(a, b);
    b.push(2.0);
    assert_ne!(a, b);
}
