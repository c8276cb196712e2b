//! Stackcalc Eval - token evaluator for the stackcalc calculator.
//!
//! # Architecture
//!
//! - `Session`: owns the stack and variable store, evaluates lines with
//!   whole-line rollback
//! - `ValueStack`: slots holding either values or `VariablePtr`s
//! - `VariableStore`: name to value, consulted when a pointer is read
//! - `Builtin`: the fixed operator table with enum-based dispatch
//! - `add`, `multiply`, `power` and friends: direct enum-based binary and
//!   unary operations over `Value`
//!
//! Values and literal parsing come from `stackcalc_literal`.

pub mod builtins;
pub mod errors;
mod operators;
mod print_handler;
mod session;
mod slot;
mod stack;
mod store;
mod unary_operators;

pub use builtins::Builtin;
pub use errors::{EvalError, EvalResult};
pub use operators::{add, equal, multiply, power, true_divide};
pub use print_handler::{
    buffer_handler, stderr_handler, stdout_handler, PrintHandlerImpl, SharedPrintHandler, Stream,
};
pub use session::{LineOutcome, Session};
pub use slot::{Slot, VariablePtr};
pub use stack::ValueStack;
pub use store::VariableStore;
pub use unary_operators::{absolute, negate, to_degrees, to_radians, trig};

pub use stackcalc_literal::Value;
