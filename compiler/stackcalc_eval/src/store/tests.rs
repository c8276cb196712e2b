#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::EvalError;

#[test]
fn resolve_unbound_name_fails() {
    let store = VariableStore::new();
    let err = store.resolve(&VariablePtr::new("x")).unwrap_err();
    assert_eq!(
        err,
        EvalError::UnassignedVariable {
            name: "x".to_string()
        }
    );
    assert!(store.get("x").is_none());
}

#[test]
fn bind_then_resolve() {
    let mut store = VariableStore::new();
    let ptr = VariablePtr::new("x");
    store.bind(&ptr, Value::Int(5));
    assert_eq!(store.resolve(&ptr).unwrap(), Value::Int(5));

    store.bind(&ptr, Value::string("later"));
    assert_eq!(store.resolve(&ptr).unwrap(), Value::string("later"));
}

#[test]
fn names_are_case_sensitive() {
    let mut store = VariableStore::new();
    store.bind(&VariablePtr::new("x"), Value::Int(1));
    assert!(store.get("X").is_none());
    assert!(store.resolve(&VariablePtr::new("X")).is_err());
}
