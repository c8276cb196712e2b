#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::parse_literal;
use pretty_assertions::assert_eq;

#[test]
fn floats_use_shortest_round_trip_text() {
    assert_eq!(format_float(2.0), "2.0");
    assert_eq!(format_float(0.1), "0.1");
    assert_eq!(format_float(-1.5), "-1.5");
    assert_eq!(format_float(-0.0), "-0.0");
    assert_eq!(format_float(0.0001), "0.0001");
    assert_eq!(format_float(1e15), "1000000000000000.0");
}

#[test]
fn floats_switch_to_exponent_form() {
    assert_eq!(format_float(1e16), "1e+16");
    assert_eq!(format_float(0.000_025), "2.5e-05");
    assert_eq!(format_float(1e100), "1e+100");
    assert_eq!(format_float(123_456_789_012_345_680.0), "1.2345678901234568e+17");
}

#[test]
fn non_finite_floats() {
    assert_eq!(format_float(f64::INFINITY), "inf");
    assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
    assert_eq!(format_float(f64::NAN), "nan");
}

#[test]
fn printed_form_leaves_strings_bare() {
    assert_eq!(Value::string("hello").to_string(), "hello");
    assert_eq!(Value::Int(5).to_string(), "5");
    assert_eq!(Value::Bool(true).to_string(), "True");
    assert_eq!(Value::None.to_string(), "None");
}

#[test]
fn repr_quotes_strings() {
    assert_eq!(Value::string("hi").repr().to_string(), "'hi'");
    assert_eq!(Value::string("it's").repr().to_string(), "\"it's\"");
    assert_eq!(
        Value::string("both'\"").repr().to_string(),
        r#"'both\'"'"#
    );
    assert_eq!(Value::string("a\nb\\").repr().to_string(), r"'a\nb\\'");
    assert_eq!(Value::string("\u{7}").repr().to_string(), r"'\x07'");
}

#[test]
fn repr_escapes_non_printable_characters() {
    assert_eq!(Value::string("\u{80}").repr().to_string(), r"'\x80'");
    assert_eq!(Value::string("a\u{a0}b").repr().to_string(), r"'a\xa0b'");
    assert_eq!(Value::string("\u{ad}").repr().to_string(), r"'\xad'");
    assert_eq!(Value::string("\u{200b}").repr().to_string(), r"'\u200b'");
    assert_eq!(Value::string("\u{2028}").repr().to_string(), r"'\u2028'");
    assert_eq!(Value::string("\u{feff}").repr().to_string(), r"'\ufeff'");
    assert_eq!(Value::string("\u{e0001}").repr().to_string(), r"'\U000e0001'");
    assert_eq!(Value::string("\u{f0000}").repr().to_string(), r"'\U000f0000'");
}

#[test]
fn repr_keeps_printable_non_ascii() {
    assert_eq!(Value::string("été €").repr().to_string(), "'été €'");
    assert_eq!(Value::string("\u{1F600}").repr().to_string(), "'\u{1F600}'");
    assert_eq!(Value::string("\u{80}").to_string(), "\u{80}");
}

#[test]
fn containers_render_member_reprs() {
    let value = parse_literal("[1,'a',(2,),{'k':None},{3},set(),()]").unwrap();
    assert_eq!(
        value.to_string(),
        "[1, 'a', (2,), {'k': None}, {3}, set(), ()]"
    );
    assert_eq!(value.repr().to_string(), value.to_string());
}
