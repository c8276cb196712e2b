//! Stackcalc Literal - value model and safe literal parsing.
//!
//! Every token typed at the calculator is first offered to this crate. A
//! token is one of three things:
//!
//! - `$name`: a reference to a variable, resolved later by the evaluator
//! - a literal in the fixed grammar of [`parse_literal`]
//! - anything else, which the evaluator treats as an operator name
//!
//! # Safety boundary
//!
//! The literal grammar only describes data: numbers, quoted strings,
//! `True`/`False`/`None`, and tuples, lists, dicts and sets of literals. The
//! parser never resolves names or evaluates expressions, so no token can
//! cause code to run by being parsed.

mod error;
mod escape;
mod lexer;
mod parse_helpers;
mod parser;
mod render;
mod stack_guard;
mod value;

pub use error::LiteralError;
pub use parser::parse_literal;
pub use render::{format_float, Repr};
pub use value::Value;

/// What a single token denotes.
#[derive(Clone, Debug, PartialEq)]
pub enum Classified<'a> {
    /// `$name`, carrying the name without the `$`.
    Variable(&'a str),
    /// A literal value.
    Literal(Value),
    /// Not a literal; a candidate operator name.
    Word(&'a str),
}

/// Classify one whitespace-free token.
///
/// Malformed literal text becomes [`Classified::Word`]. Text that is
/// literal syntax but cannot be built (for example a list used as a dict
/// key) is an error.
pub fn classify(token: &str) -> Result<Classified<'_>, LiteralError> {
    if let Some(name) = token.strip_prefix('$') {
        return Ok(Classified::Variable(name));
    }

    match parse_literal(token) {
        Ok(value) => Ok(Classified::Literal(value)),
        Err(err) if err.is_malformed() => {
            tracing::trace!(token, %err, "not a literal");
            Ok(Classified::Word(token))
        }
        Err(err) => Err(err),
    }
}
