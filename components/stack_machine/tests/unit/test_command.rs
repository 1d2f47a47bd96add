//! Unit tests for Command parsing

use stack_machine::{Command, CommandError};

#[test]
fn test_implicit_and_explicit_push_agree() {
    assert_eq!(Command::parse("42"), Command::parse("push 42"));
    assert_eq!(Command::parse("-1.5"), Command::parse("PUSH -1.5"));
}

#[test]
fn test_push_with_extra_whitespace() {
    assert_eq!(Command::parse("push    7"), Ok(Command::Push(7.0)));
    assert_eq!(Command::parse("  9  "), Ok(Command::Push(9.0)));
}

#[test]
fn test_push_rejects_non_decimal_operand() {
    assert_eq!(Command::parse("push 1e3"), Err(CommandError::InvalidPush));
    assert_eq!(Command::parse("push nan"), Err(CommandError::InvalidPush));
    assert_eq!(Command::parse("push 1.2.3"), Err(CommandError::InvalidPush));
}

#[test]
fn test_every_keyword() {
    let cases = [
        ("pop", Command::Pop),
        ("clear", Command::Clear),
        ("add", Command::Add),
        ("mul", Command::Mul),
        ("neg", Command::Neg),
        ("inv", Command::Inv),
        ("undo", Command::Undo),
        ("print", Command::Print),
        ("help", Command::Help),
        ("quit", Command::Quit),
    ];
    for (input, expected) in cases {
        assert_eq!(Command::parse(input), Ok(expected));
        assert_eq!(Command::parse(&input.to_uppercase()), Ok(expected));
    }
}

#[test]
fn test_unrecognized_reports_lowercased_input() {
    match Command::parse("Divide") {
        Err(CommandError::Unrecognized(input)) => assert_eq!(input, "divide"),
        other => panic!("Expected Unrecognized, got {:?}", other),
    }
}

#[test]
fn test_empty_line_is_unrecognized() {
    assert_eq!(
        Command::parse(""),
        Err(CommandError::Unrecognized(String::new()))
    );
}
