#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use pretty_assertions::assert_eq;

fn int(n: i64) -> Value {
    Value::Int(n)
}

fn malformed(source: &str) -> bool {
    parse_literal(source).is_err_and(|e| e.is_malformed())
}

#[test]
fn parses_integers() {
    assert_eq!(parse_literal("0").unwrap(), int(0));
    assert_eq!(parse_literal("00").unwrap(), int(0));
    assert_eq!(parse_literal("1_000").unwrap(), int(1000));
    assert_eq!(parse_literal("0x1F").unwrap(), int(31));
    assert_eq!(parse_literal("0o17").unwrap(), int(15));
    assert_eq!(parse_literal("0b101").unwrap(), int(5));
    assert_eq!(parse_literal("-7").unwrap(), int(-7));
    assert_eq!(parse_literal("+7").unwrap(), int(7));
}

#[test]
fn integer_range_follows_the_host() {
    assert_eq!(parse_literal("9223372036854775807").unwrap(), int(i64::MAX));
    assert_eq!(parse_literal("-9223372036854775808").unwrap(), int(i64::MIN));
    assert_eq!(
        parse_literal("9223372036854775808").unwrap_err(),
        LiteralError::IntegerTooLarge {
            text: "9223372036854775808".to_string()
        }
    );
}

#[test]
fn parses_floats() {
    assert_eq!(parse_literal("1.5").unwrap(), Value::Float(1.5));
    assert_eq!(parse_literal("-.5").unwrap(), Value::Float(-0.5));
    assert_eq!(parse_literal("2.").unwrap(), Value::Float(2.0));
    assert_eq!(parse_literal("1e3").unwrap(), Value::Float(1000.0));
    assert_eq!(parse_literal("1_0.2_5").unwrap(), Value::Float(10.25));
    assert_eq!(parse_literal("1e999").unwrap(), Value::Float(f64::INFINITY));
}

#[test]
fn parses_strings() {
    assert_eq!(parse_literal("'abc'").unwrap(), Value::string("abc"));
    assert_eq!(parse_literal("\"abc\"").unwrap(), Value::string("abc"));
    assert_eq!(parse_literal(r"'a\tb'").unwrap(), Value::string("a\tb"));
    assert_eq!(parse_literal("''").unwrap(), Value::string(""));
    assert_eq!(parse_literal(r"'\101\012'").unwrap(), Value::string("A\n"));
}

#[test]
fn bad_string_escape_is_reported() {
    let err = parse_literal(r"['ok', '\x4']").unwrap_err();
    assert!(!err.is_malformed());
    assert!(matches!(err, LiteralError::BadEscape { start: 0, end: 2, .. }));
}

#[test]
fn parses_constants() {
    assert_eq!(parse_literal("True").unwrap(), Value::Bool(true));
    assert_eq!(parse_literal("False").unwrap(), Value::Bool(false));
    assert_eq!(parse_literal("None").unwrap(), Value::None);
    assert_eq!(parse_literal("set()").unwrap(), Value::Set(vec![]));
}

#[test]
fn parentheses_group_or_build_tuples() {
    assert_eq!(parse_literal("(5)").unwrap(), int(5));
    assert_eq!(parse_literal("((5))").unwrap(), int(5));
    assert_eq!(parse_literal("()").unwrap(), Value::Tuple(vec![]));
    assert_eq!(parse_literal("(5,)").unwrap(), Value::Tuple(vec![int(5)]));
    assert_eq!(
        parse_literal("(1,2,)").unwrap(),
        Value::Tuple(vec![int(1), int(2)])
    );
}

#[test]
fn parses_lists_dicts_and_sets() {
    assert_eq!(parse_literal("[]").unwrap(), Value::List(vec![]));
    assert_eq!(
        parse_literal("[1,'a',[2]]").unwrap(),
        Value::List(vec![int(1), Value::string("a"), Value::List(vec![int(2)])])
    );
    assert_eq!(parse_literal("{}").unwrap(), Value::Dict(vec![]));
    assert_eq!(
        parse_literal("{'k':1,'j':(2,3),}").unwrap(),
        Value::Dict(vec![
            (Value::string("k"), int(1)),
            (Value::string("j"), Value::Tuple(vec![int(2), int(3)])),
        ])
    );
    assert_eq!(
        parse_literal("{3,1,3}").unwrap(),
        Value::Set(vec![int(3), int(1)])
    );
}

#[test]
fn signs_bind_only_to_numbers() {
    assert_eq!(parse_literal("-(5)").unwrap(), int(-5));
    assert_eq!(parse_literal("[-1,+2]").unwrap(), Value::List(vec![int(-1), int(2)]));
    assert!(malformed("--5"));
    assert!(malformed("-True"));
    assert!(malformed("-'a'"));
    assert!(malformed("-(5"));
    assert!(malformed("-"));
}

#[test]
fn rejects_non_literals() {
    for source in [
        "", "add", "x", "1+2", "1 2", "007", "[1,,2]", "[1", "(1,2", "{1:}", "{1:2,3}", "{,}",
        ")", "print('x')", "1_", "True1",
    ] {
        assert!(malformed(source), "source: {source:?}");
    }
}

#[test]
fn unhashable_keys_are_not_malformed() {
    let err = parse_literal("{[1]:2}").unwrap_err();
    assert!(!err.is_malformed());
    assert_eq!(err.to_string(), "unhashable type: 'list'");

    let err = parse_literal("{{1:2}}").unwrap_err();
    assert_eq!(err, LiteralError::Unhashable { type_name: "dict" });
}

#[test]
fn deep_nesting_does_not_overflow() {
    let depth = 50_000;
    let source = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
    let mut value = parse_literal(&source).unwrap();
    let mut seen = 1;
    while let Value::List(mut items) = value {
        match items.pop() {
            Some(inner) => {
                value = inner;
                seen += 1;
            }
            None => break,
        }
    }
    assert_eq!(seen, depth);
}
