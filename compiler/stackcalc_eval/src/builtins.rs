//! The operator table.
//!
//! Every word the calculator understands is a [`Builtin`]. Lookup goes
//! through a name map built once per process; [`Builtin::apply`] runs the
//! operator against a [`Session`].

use std::f64::consts;
use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use stackcalc_literal::Value;

use crate::errors::{EvalError, EvalResult};
use crate::operators::{add, equal, multiply, power, true_divide};
use crate::unary_operators::{absolute, negate, to_degrees, to_radians, trig};
use crate::Session;

/// A built-in stack operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Builtin {
    /// End the session.
    Bye,
    /// Print the whole stack.
    Examine,
    /// Print the top value.
    Peek,
    /// Remove and print the top value.
    Pop,
    Add,
    Mul,
    Neg,
    /// Pop `t`, pop the slot beneath it and push it back, then push `t`.
    Flip,
    Abs,
    /// `1 / x`; also spelled `inv`.
    Invert,
    Pow,
    Avg,
    /// Push the sum of every slot without removing any.
    PeekSum,
    Empty,
    Pi,
    E,
    Sin,
    Cos,
    Tan,
    ToRad,
    ToDeg,
    /// Bind the pointer under the top value to that value.
    Set,
    Equal,
}

/// Alternate spellings, as `(alias, builtin)`.
const ALIASES: &[(&str, Builtin)] = &[("inv", Builtin::Invert)];

static OPERATOR_TABLE: OnceLock<FxHashMap<&'static str, Builtin>> = OnceLock::new();

fn operator_table() -> &'static FxHashMap<&'static str, Builtin> {
    OPERATOR_TABLE.get_or_init(|| {
        let mut table = FxHashMap::default();
        for &builtin in Builtin::ALL {
            table.insert(builtin.name(), builtin);
        }
        for &(alias, builtin) in ALIASES {
            table.insert(alias, builtin);
        }
        table
    })
}

impl Builtin {
    /// Every operator, in table order.
    pub const ALL: &'static [Builtin] = &[
        Builtin::Bye,
        Builtin::Examine,
        Builtin::Peek,
        Builtin::Pop,
        Builtin::Add,
        Builtin::Mul,
        Builtin::Neg,
        Builtin::Flip,
        Builtin::Abs,
        Builtin::Invert,
        Builtin::Pow,
        Builtin::Avg,
        Builtin::PeekSum,
        Builtin::Empty,
        Builtin::Pi,
        Builtin::E,
        Builtin::Sin,
        Builtin::Cos,
        Builtin::Tan,
        Builtin::ToRad,
        Builtin::ToDeg,
        Builtin::Set,
        Builtin::Equal,
    ];

    /// Find the operator spelled `name`. Case-sensitive.
    pub fn lookup(name: &str) -> Option<Builtin> {
        operator_table().get(name).copied()
    }

    /// The primary spelling of this operator.
    pub fn name(self) -> &'static str {
        match self {
            Builtin::Bye => "bye",
            Builtin::Examine => "examine",
            Builtin::Peek => "peek",
            Builtin::Pop => "pop",
            Builtin::Add => "add",
            Builtin::Mul => "mul",
            Builtin::Neg => "neg",
            Builtin::Flip => "flip",
            Builtin::Abs => "abs",
            Builtin::Invert => "invert",
            Builtin::Pow => "pow",
            Builtin::Avg => "avg",
            Builtin::PeekSum => "peeksum",
            Builtin::Empty => "empty",
            Builtin::Pi => "pi",
            Builtin::E => "e",
            Builtin::Sin => "sin",
            Builtin::Cos => "cos",
            Builtin::Tan => "tan",
            Builtin::ToRad => "torad",
            Builtin::ToDeg => "todeg",
            Builtin::Set => "set",
            Builtin::Equal => "equal",
        }
    }

    /// Run the operator.
    ///
    /// Operands are read through [`Session::pop`] and [`Session::peek`], so
    /// pointers are resolved as they are consumed. A failure part-way through
    /// may leave the stack changed; the evaluator restores it.
    pub fn apply(self, session: &mut Session) -> EvalResult {
        tracing::trace!(operator = self.name(), "applying operator");
        match self {
            Builtin::Bye => return Err(EvalError::Halt),
            Builtin::Examine => {
                let listing = session.stack().to_string();
                session.print_value(&listing);
            }
            Builtin::Peek => {
                let top = session.peek()?;
                session.print_value(&top.to_string());
            }
            Builtin::Pop => {
                let top = session.pop()?;
                session.print_value(&top.to_string());
            }
            Builtin::Add => {
                let a = session.pop()?;
                let b = session.pop()?;
                session.push(add(&a, &b)?);
            }
            Builtin::Mul => {
                let a = session.pop()?;
                let b = session.pop()?;
                session.push(multiply(&a, &b)?);
            }
            Builtin::Neg => {
                let x = session.pop()?;
                session.push(negate(&x)?);
            }
            Builtin::Flip => {
                let top = session.pop()?;
                let next = session.pop()?;
                session.push(next);
                session.push(top);
            }
            Builtin::Abs => {
                let x = session.pop()?;
                session.push(absolute(&x)?);
            }
            Builtin::Invert => {
                let x = session.pop()?;
                session.push(true_divide(&Value::Int(1), &x)?);
            }
            Builtin::Pow => {
                let exp = session.pop()?;
                let base = session.pop()?;
                session.push(power(&base, &exp)?);
            }
            Builtin::Avg => {
                let a = session.pop()?;
                let b = session.pop()?;
                let sum = add(&a, &b)?;
                session.push(true_divide(&sum, &Value::Int(2))?);
            }
            Builtin::PeekSum => {
                let sum = session
                    .resolved_slots()?
                    .iter()
                    .try_fold(Value::Int(0), |acc, value| add(&acc, value))?;
                session.push(sum);
            }
            Builtin::Empty => session.clear(),
            Builtin::Pi => session.push(Value::Float(consts::PI)),
            Builtin::E => session.push(Value::Float(consts::E)),
            Builtin::Sin => {
                let x = session.peek()?;
                session.push(trig(&x, f64::sin)?);
            }
            Builtin::Cos => {
                let x = session.peek()?;
                session.push(trig(&x, f64::cos)?);
            }
            Builtin::Tan => {
                let x = session.peek()?;
                session.push(trig(&x, f64::tan)?);
            }
            Builtin::ToRad => {
                let x = session.pop()?;
                session.push(to_radians(&x)?);
            }
            Builtin::ToDeg => {
                let x = session.pop()?;
                session.push(to_degrees(&x)?);
            }
            Builtin::Set => {
                let value = session.pop()?;
                let ptr = session.pop_pointer()?;
                session.bind(&ptr, value);
            }
            Builtin::Equal => {
                let a = session.pop()?;
                let b = session.pop()?;
                session.push(equal(&a, &b));
            }
        }
        Ok(())
    }
}
