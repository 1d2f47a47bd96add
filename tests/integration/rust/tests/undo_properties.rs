//! Undo property tests
//!
//! Table-driven checks that undo is an exact inverse for every mutating
//! command, from a variety of starting stacks.

use stack_machine::Interpreter;

fn seeded(values: &[f64]) -> Interpreter {
    let mut interpreter = Interpreter::new();
    for value in values {
        interpreter.execute(&value.to_string());
    }
    interpreter
}

const STARTS: &[&[f64]] = &[
    &[1.0, 2.0],
    &[-3.5, 0.5, 8.0],
    &[0.0, 0.0],
    &[100.0, -0.125, 7.0, 42.0],
];

const MUTATING: &[&str] = &["push 6", "11", "pop", "clear", "add", "mul", "neg", "inv"];

/// Test: every mutating command followed by undo restores the start
#[test]
fn test_single_undo_restores_state() {
    for start in STARTS {
        for command in MUTATING {
            let mut interpreter = seeded(start);
            let before = interpreter.stack().snapshot();
            let depth = interpreter.history_len();

            assert!(interpreter.execute(command).applied, "{} on {:?}", command, start);
            assert_eq!(interpreter.history_len(), depth + 1);

            assert!(interpreter.undo().applied);
            assert_eq!(
                interpreter.stack().snapshot(),
                before,
                "undo of {} on {:?}",
                command,
                start
            );
            assert_eq!(interpreter.history_len(), depth);
        }
    }
}

/// Test: N commands then N undos restores the start
#[test]
fn test_chained_undo_restores_state() {
    for start in STARTS {
        let mut interpreter = seeded(start);
        let before = interpreter.stack().snapshot();

        let script = ["add", "2", "mul", "neg", "push 0.5", "inv", "add", "pop"];
        let mut applied = 0;
        for command in script {
            if interpreter.execute(command).applied {
                applied += 1;
            }
        }
        for _ in 0..applied {
            assert!(interpreter.undo().applied);
        }
        assert_eq!(interpreter.stack().snapshot(), before, "start {:?}", start);
    }
}
