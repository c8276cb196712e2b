//! Property-based tests for line evaluation.
//!
//! Random lines are drawn from a vocabulary of literals, pointers, operators
//! and unknown words, and checked for:
//! 1. Rollback: a line that reports an error leaves the stack as it was
//! 2. Idempotence: `examine` and `peek` neither mutate nor vary
//! 3. Ordering: a line of literals pushes them in order
//! 4. Literal round-trip: a value's repr parses back to the same value

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use stackcalc_eval::{buffer_handler, LineOutcome, Session, SharedPrintHandler, Value};
use stackcalc_literal::parse_literal;

// -- Strategies --

/// One token the calculator might see. Excludes `bye`.
fn token_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        (-20i64..20).prop_map(|n| n.to_string()),
        Just("0.5".to_string()),
        Just("'ab'".to_string()),
        Just("[1,2]".to_string()),
        Just("True".to_string()),
        Just("$x".to_string()),
        Just("$y".to_string()),
        prop::sample::select(vec![
            "examine", "peek", "pop", "add", "mul", "neg", "flip", "abs", "invert", "inv", "pow",
            "avg", "peeksum", "empty", "pi", "e", "sin", "cos", "tan", "torad", "todeg", "set",
            "equal",
        ])
        .prop_map(str::to_string),
        Just("nosuchop".to_string()),
    ]
}

fn line_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(token_strategy(), 0..12).prop_map(|tokens| tokens.join(" "))
}

/// Values whose repr contains no NaN and parses back exactly.
fn value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::None),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        (-1.0e20f64..1.0e20).prop_map(Value::Float),
        "[a-z'\"\\\\ ]{0,8}".prop_map(|s| Value::string(s.as_str())),
    ];
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::List),
            prop::collection::vec(inner, 0..4).prop_map(Value::Tuple),
        ]
    })
}

struct Harness {
    session: Session,
    out: SharedPrintHandler,
    err: SharedPrintHandler,
}

fn harness() -> Harness {
    let out = buffer_handler();
    let err = buffer_handler();
    Harness {
        session: Session::with_handlers(out.clone(), err.clone()),
        out,
        err,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn failed_line_leaves_stack_unchanged(setup in line_strategy(), line in line_strategy()) {
        let mut h = harness();
        h.session.evaluate(&setup);
        h.err.clear();

        let before = h.session.stack().to_string();
        let outcome = h.session.evaluate(&line);
        prop_assert_eq!(outcome, LineOutcome::Continue);

        if !h.err.get_output().is_empty() {
            prop_assert_eq!(h.session.stack().to_string(), before);
            prop_assert_eq!(h.err.get_output().lines().count(), 1);
        }
    }

    #[test]
    fn examine_and_peek_are_idempotent(setup in line_strategy()) {
        let mut h = harness();
        h.session.evaluate(&setup);
        let before = h.session.stack().to_string();

        for word in ["examine", "peek"] {
            h.out.clear();
            h.err.clear();
            h.session.evaluate(word);
            let first = (h.out.get_output(), h.err.get_output());
            h.out.clear();
            h.err.clear();
            h.session.evaluate(word);
            let second = (h.out.get_output(), h.err.get_output());

            prop_assert_eq!(first, second);
            prop_assert_eq!(h.session.stack().to_string(), before.clone());
        }
    }

    #[test]
    fn literals_push_in_order(values in prop::collection::vec(any::<i64>(), 0..16)) {
        let mut h = harness();
        let line: Vec<String> = values.iter().map(|n| n.to_string()).collect();
        h.session.evaluate(&line.join(" "));

        let expected: Vec<Value> = values.into_iter().map(Value::Int).collect();
        prop_assert_eq!(h.session.resolved_slots().unwrap(), expected);
    }

    #[test]
    fn repr_parses_back(value in value_strategy()) {
        let text = value.repr().to_string();
        prop_assert_eq!(parse_literal(&text).unwrap(), value);
    }
}
