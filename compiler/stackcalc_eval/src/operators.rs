//! Binary operations on values.
//!
//! Direct enum-based dispatch over the fixed value set. Numeric rules:
//! bools act as the ints 0 and 1, int-with-int stays int (checked), and a
//! float on either side makes the result a float. Strings, lists and tuples
//! concatenate with `+` and repeat with `*`.

use stackcalc_literal::Value;

use crate::errors::{
    concat_mismatch, division_by_zero, float_division_by_zero, integer_overflow, non_int_repeat,
    unsupported_operands, zero_to_negative_power, EvalError, EvalResult,
};

/// Longest sequence (in elements or bytes) that `*` will build.
const MAX_REPEAT_LEN: usize = 1 << 26;

/// Checked integer result with overflow handling.
#[inline]
fn checked_arith(result: Option<i64>, op_name: &'static str) -> EvalResult<Value> {
    result.map(Value::Int).ok_or_else(|| integer_overflow(op_name))
}

/// Shared int/float promotion for arithmetic operators.
fn numeric_binary(
    left: &Value,
    right: &Value,
    symbol: &'static str,
    int_op: fn(i64, i64) -> Option<i64>,
    float_op: fn(f64, f64) -> f64,
    op_name: &'static str,
) -> EvalResult<Value> {
    if let (Some(a), Some(b)) = (left.as_int(), right.as_int()) {
        return checked_arith(int_op(a, b), op_name);
    }
    match (left.as_real(), right.as_real()) {
        (Some(a), Some(b)) => Ok(Value::Float(float_op(a, b))),
        _ => Err(unsupported_operands(symbol, left, right)),
    }
}

fn is_sequence(value: &Value) -> bool {
    matches!(value, Value::Str(_) | Value::List(_) | Value::Tuple(_))
}

/// `left + right`.
pub fn add(left: &Value, right: &Value) -> EvalResult<Value> {
    match (left, right) {
        (Value::Str(a), Value::Str(b)) => Ok(Value::Str(format!("{a}{b}"))),
        (Value::List(a), Value::List(b)) => Ok(Value::List(concat(a, b))),
        (Value::Tuple(a), Value::Tuple(b)) => Ok(Value::Tuple(concat(a, b))),
        _ if is_sequence(left) => Err(concat_mismatch(left, right)),
        _ => numeric_binary(left, right, "+", i64::checked_add, |a, b| a + b, "addition"),
    }
}

fn concat(a: &[Value], b: &[Value]) -> Vec<Value> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    out.extend_from_slice(a);
    out.extend_from_slice(b);
    out
}

/// `left * right`.
pub fn multiply(left: &Value, right: &Value) -> EvalResult<Value> {
    if is_sequence(left) {
        return repeat(left, right);
    }
    if is_sequence(right) {
        return repeat(right, left);
    }
    numeric_binary(
        left,
        right,
        "*",
        i64::checked_mul,
        |a, b| a * b,
        "multiplication",
    )
}

/// Repeat a string, list or tuple `count` times.
fn repeat(seq: &Value, count: &Value) -> EvalResult<Value> {
    let n = count.as_int().ok_or_else(|| non_int_repeat(count))?;
    let n = usize::try_from(n).unwrap_or(0);

    let unit = match seq {
        Value::Str(s) => s.len(),
        Value::List(items) | Value::Tuple(items) => items.len(),
        _ => 0,
    };
    if unit.checked_mul(n).map_or(true, |total| total > MAX_REPEAT_LEN) {
        return Err(EvalError::RepeatTooLong);
    }

    Ok(match seq {
        Value::Str(s) => Value::Str(s.repeat(n)),
        Value::List(items) => Value::List(repeat_items(items, n)),
        Value::Tuple(items) => Value::Tuple(repeat_items(items, n)),
        other => other.clone(),
    })
}

fn repeat_items(items: &[Value], n: usize) -> Vec<Value> {
    let mut out = Vec::with_capacity(items.len() * n);
    for _ in 0..n {
        out.extend_from_slice(items);
    }
    out
}

/// `left / right`, always producing a float.
pub fn true_divide(left: &Value, right: &Value) -> EvalResult<Value> {
    match (left.as_real(), right.as_real()) {
        (Some(_), Some(b)) if b == 0.0 => {
            if matches!(left, Value::Float(_)) || matches!(right, Value::Float(_)) {
                Err(float_division_by_zero())
            } else {
                Err(division_by_zero())
            }
        }
        (Some(a), Some(b)) => Ok(Value::Float(a / b)),
        _ => Err(unsupported_operands("/", left, right)),
    }
}

/// `base ** exp`.
pub fn power(base: &Value, exp: &Value) -> EvalResult<Value> {
    if let (Some(b), Some(e)) = (base.as_int(), exp.as_int()) {
        if e >= 0 {
            return int_power(b, e);
        }
    }
    match (base.as_real(), exp.as_real()) {
        (Some(b), Some(e)) => float_power(b, e),
        _ => Err(unsupported_operands("** or pow()", base, exp)),
    }
}

fn int_power(base: i64, exp: i64) -> EvalResult<Value> {
    // Bases whose powers never grow need no exponent bound.
    match base {
        0 => return Ok(Value::Int(i64::from(exp == 0))),
        1 => return Ok(Value::Int(1)),
        -1 => return Ok(Value::Int(if exp % 2 == 0 { 1 } else { -1 })),
        _ => {}
    }
    let exp = u32::try_from(exp).map_err(|_| integer_overflow("exponentiation"))?;
    checked_arith(base.checked_pow(exp), "exponentiation")
}

fn float_power(base: f64, exp: f64) -> EvalResult<Value> {
    // `0.0 ** -inf` is inf, not an error.
    if base == 0.0 && exp < 0.0 && exp.is_finite() {
        return Err(zero_to_negative_power());
    }
    if base < 0.0 && exp.is_finite() && exp.fract() != 0.0 {
        return Err(EvalError::ComplexResult);
    }
    let result = base.powf(exp);
    if result.is_infinite() && base.is_finite() && exp.is_finite() {
        return Err(EvalError::OutOfRange);
    }
    Ok(Value::Float(result))
}

/// `left == right` as a bool value.
pub fn equal(left: &Value, right: &Value) -> Value {
    Value::Bool(left.equals(right))
}
