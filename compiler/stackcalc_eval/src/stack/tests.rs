#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::EvalError;
use pretty_assertions::assert_eq;
use stackcalc_literal::Value;

#[test]
fn pop_and_top_on_empty_fail() {
    let mut stack = ValueStack::new();
    assert_eq!(stack.pop_slot().unwrap_err(), EvalError::StackEmpty);
    assert_eq!(stack.top_slot().unwrap_err(), EvalError::StackEmpty);
    assert_eq!(stack.pop_pointer().unwrap_err(), EvalError::StackEmpty);
}

#[test]
fn pop_returns_last_pushed() {
    let mut stack = ValueStack::new();
    stack.push(Value::Int(1));
    stack.push(Value::Int(2));
    assert_eq!(stack.pop_slot().unwrap(), Slot::Value(Value::Int(2)));
    assert_eq!(stack.len(), 1);
}

#[test]
fn pop_pointer_requires_pointer_on_top() {
    let mut stack = ValueStack::new();
    stack.push(Slot::pointer("x"));
    stack.push(Value::Int(1));

    assert_eq!(stack.pop_pointer().unwrap_err(), EvalError::WrongPointerType);
    assert_eq!(stack.len(), 2, "value stays on the stack");

    stack.pop_slot().unwrap();
    assert_eq!(stack.pop_pointer().unwrap(), VariablePtr::new("x"));
    assert!(stack.is_empty());
}

#[test]
fn restore_discards_later_changes() {
    let mut stack = ValueStack::new();
    stack.push(Value::Int(1));
    stack.push(Slot::pointer("y"));
    let snapshot = stack.snapshot();

    stack.clear();
    stack.push(Value::string("junk"));
    stack.restore(snapshot);

    assert_eq!(
        stack.slots(),
        &[Slot::Value(Value::Int(1)), Slot::pointer("y")]
    );
}

#[test]
fn listing_shows_reprs_and_pointers() {
    let mut stack = ValueStack::new();
    assert_eq!(stack.to_string(), "[]");
    stack.push(Value::Int(3));
    stack.push(Value::Float(2.5));
    stack.push(Value::string("s"));
    stack.push(Slot::pointer("x"));
    assert_eq!(stack.to_string(), "[3, 2.5, 's', $x]");
}
