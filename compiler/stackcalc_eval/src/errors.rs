//! Evaluation errors and their constructors.
//!
//! Every failure a token can raise is a variant of [`EvalError`]. The
//! evaluator catches all of them at the per-token boundary, prints the
//! `Display` text after `Error: `, and rolls the stack back.
//!
//! [`EvalError::Halt`] is the one variant that is not a failure: `bye`
//! raises it to unwind out of the line, and the evaluator turns it into a
//! [`LineOutcome::Halt`](crate::LineOutcome::Halt) without printing.
//!
//! Prefer the constructor functions below over building variants inline so
//! that message wording stays in one place.

use stackcalc_literal::{LiteralError, Value};
use thiserror::Error;

/// Result of an evaluator step.
pub type EvalResult<T = ()> = Result<T, EvalError>;

/// Everything that can stop a line.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EvalError {
    // Stack and variables
    #[error("StackEmptyError")]
    StackEmpty,
    #[error("Attempt to dereference variable without assignment: ${name}")]
    UnassignedVariable { name: String },
    #[error("Item on top not a VariablePtr")]
    WrongPointerType,

    // Dispatch
    #[error("unknown operator: {name}")]
    UnknownOperator { name: String },
    #[error(transparent)]
    Literal(#[from] LiteralError),

    // Arithmetic
    #[error("{message}")]
    DivisionByZero { message: &'static str },
    #[error("integer overflow in {operation}")]
    IntegerOverflow { operation: &'static str },
    #[error("math domain error")]
    MathDomain,
    #[error("numerical result out of range")]
    OutOfRange,
    #[error("negative number cannot be raised to a fractional power")]
    ComplexResult,
    #[error("repeated sequence is too long")]
    RepeatTooLong,

    // Operand types
    #[error("unsupported operand type(s) for {op}: '{left}' and '{right}'")]
    UnsupportedOperands {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },
    #[error("can only concatenate {left} (not \"{right}\") to {left}")]
    ConcatMismatch {
        left: &'static str,
        right: &'static str,
    },
    #[error("bad operand type for {op}: '{type_name}'")]
    BadOperand {
        op: &'static str,
        type_name: &'static str,
    },
    #[error("must be real number, not {type_name}")]
    NotReal { type_name: &'static str },
    #[error("can't multiply sequence by non-int of type '{type_name}'")]
    NonIntRepeat { type_name: &'static str },

    // Control
    #[error("session halted")]
    Halt,
}

impl EvalError {
    /// True for the `bye` signal, which ends the session rather than the line.
    #[inline]
    pub fn is_halt(&self) -> bool {
        matches!(self, EvalError::Halt)
    }
}

pub fn stack_empty() -> EvalError {
    EvalError::StackEmpty
}

pub fn unassigned_variable(name: &str) -> EvalError {
    EvalError::UnassignedVariable {
        name: name.to_string(),
    }
}

pub fn wrong_pointer_type() -> EvalError {
    EvalError::WrongPointerType
}

pub fn unknown_operator(name: &str) -> EvalError {
    EvalError::UnknownOperator {
        name: name.to_string(),
    }
}

pub fn division_by_zero() -> EvalError {
    EvalError::DivisionByZero {
        message: "division by zero",
    }
}

pub fn float_division_by_zero() -> EvalError {
    EvalError::DivisionByZero {
        message: "float division by zero",
    }
}

pub fn zero_to_negative_power() -> EvalError {
    EvalError::DivisionByZero {
        message: "0.0 cannot be raised to a negative power",
    }
}

pub fn integer_overflow(operation: &'static str) -> EvalError {
    EvalError::IntegerOverflow { operation }
}

pub fn unsupported_operands(op: &'static str, left: &Value, right: &Value) -> EvalError {
    EvalError::UnsupportedOperands {
        op,
        left: left.type_name(),
        right: right.type_name(),
    }
}

pub fn concat_mismatch(left: &Value, right: &Value) -> EvalError {
    EvalError::ConcatMismatch {
        left: left.type_name(),
        right: right.type_name(),
    }
}

pub fn bad_operand(op: &'static str, operand: &Value) -> EvalError {
    EvalError::BadOperand {
        op,
        type_name: operand.type_name(),
    }
}

pub fn not_real(operand: &Value) -> EvalError {
    EvalError::NotReal {
        type_name: operand.type_name(),
    }
}

pub fn non_int_repeat(count: &Value) -> EvalError {
    EvalError::NonIntRepeat {
        type_name: count.type_name(),
    }
}
