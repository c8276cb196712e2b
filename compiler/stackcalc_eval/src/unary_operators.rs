//! Unary operations on values: negation, absolute value, trigonometry and
//! angle conversion.

use stackcalc_literal::Value;

use crate::errors::{bad_operand, integer_overflow, not_real, EvalError, EvalResult};

/// `-operand`.
pub fn negate(operand: &Value) -> EvalResult<Value> {
    match operand {
        Value::Float(x) => Ok(Value::Float(-x)),
        _ => match operand.as_int() {
            Some(n) => n
                .checked_neg()
                .map(Value::Int)
                .ok_or_else(|| integer_overflow("negation")),
            None => Err(bad_operand("unary -", operand)),
        },
    }
}

/// `abs(operand)`.
pub fn absolute(operand: &Value) -> EvalResult<Value> {
    match operand {
        Value::Float(x) => Ok(Value::Float(x.abs())),
        _ => match operand.as_int() {
            Some(n) => n
                .checked_abs()
                .map(Value::Int)
                .ok_or_else(|| integer_overflow("abs()")),
            None => Err(bad_operand("abs()", operand)),
        },
    }
}

/// The operand as an `f64`, for the functions that only take real numbers.
fn real_arg(operand: &Value) -> EvalResult<f64> {
    operand.as_real().ok_or_else(|| not_real(operand))
}

/// Apply a trigonometric function; infinite arguments are outside its domain.
pub fn trig(operand: &Value, f: fn(f64) -> f64) -> EvalResult<Value> {
    let x = real_arg(operand)?;
    if x.is_infinite() {
        return Err(EvalError::MathDomain);
    }
    Ok(Value::Float(f(x)))
}

/// Degrees to radians.
pub fn to_radians(operand: &Value) -> EvalResult<Value> {
    real_arg(operand).map(|x| Value::Float(x.to_radians()))
}

/// Radians to degrees.
pub fn to_degrees(operand: &Value) -> EvalResult<Value> {
    real_arg(operand).map(|x| Value::Float(x.to_degrees()))
}
