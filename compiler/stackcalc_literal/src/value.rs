//! Runtime values held on the calculator stack.
//!
//! The value set mirrors the literal grammar: scalars plus the four container
//! kinds. Containers are plain vectors; dict and set uniqueness is maintained
//! by the constructors in this module, not by hashing.
//!
//! `PartialEq` is structural (`Int(1) != Float(1.0)`) and exists for tests
//! and bookkeeping. Calculator equality, where `1 == 1.0 == True`, is
//! [`Value::equals`].

use crate::LiteralError;

/// A concrete calculator value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Tuple(Vec<Value>),
    List(Vec<Value>),
    /// Insertion-ordered entries with unique keys.
    Dict(Vec<(Value, Value)>),
    /// Insertion-ordered members with no two equal elements.
    Set(Vec<Value>),
}

impl Value {
    /// Create a string value.
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// Build a dict, keeping the first position of a repeated key and the
    /// last value written to it.
    pub fn dict(entries: Vec<(Value, Value)>) -> Result<Self, LiteralError> {
        let mut out: Vec<(Value, Value)> = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            key.require_hashable()?;
            match out.iter_mut().find(|(k, _)| k.equals(&key)) {
                Some(slot) => slot.1 = value,
                None => out.push((key, value)),
            }
        }
        Ok(Value::Dict(out))
    }

    /// Build a set, dropping members equal to an earlier one.
    pub fn set(members: Vec<Value>) -> Result<Self, LiteralError> {
        let mut out: Vec<Value> = Vec::with_capacity(members.len());
        for member in members {
            member.require_hashable()?;
            if !out.iter().any(|m| m.equals(&member)) {
                out.push(member);
            }
        }
        Ok(Value::Set(out))
    }

    /// The user-facing type name, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::None => "NoneType",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Tuple(_) => "tuple",
            Value::List(_) => "list",
            Value::Dict(_) => "dict",
            Value::Set(_) => "set",
        }
    }

    /// Whether the value may be a dict key or set member.
    pub fn is_hashable(&self) -> bool {
        match self {
            Value::List(_) | Value::Dict(_) | Value::Set(_) => false,
            Value::Tuple(items) => items.iter().all(Value::is_hashable),
            _ => true,
        }
    }

    fn require_hashable(&self) -> Result<(), LiteralError> {
        if self.is_hashable() {
            Ok(())
        } else {
            Err(LiteralError::Unhashable {
                type_name: self.unhashable_part().type_name(),
            })
        }
    }

    /// The innermost member responsible for a value being unhashable.
    fn unhashable_part(&self) -> &Value {
        match self {
            Value::Tuple(items) => items
                .iter()
                .find(|item| !item.is_hashable())
                .map_or(self, Value::unhashable_part),
            _ => self,
        }
    }

    /// Integer view of bools and ints.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Bool(b) => Some(i64::from(*b)),
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Real-number view of bools, ints and floats.
    #[expect(
        clippy::cast_precision_loss,
        reason = "int to float conversion rounds exactly like the host float type"
    )]
    pub fn as_real(&self) -> Option<f64> {
        match self {
            Value::Bool(b) => Some(f64::from(u8::from(*b))),
            Value::Int(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Whether this is one of the numeric kinds (bool, int, float).
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Bool(_) | Value::Int(_) | Value::Float(_))
    }

    /// Calculator equality.
    ///
    /// Numeric kinds compare by value across kinds, containers compare
    /// member-wise (dicts and sets ignoring order), everything else must
    /// match in kind.
    pub fn equals(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::None, Value::None) => true,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Float(f), n) | (n, Value::Float(f)) if n.is_numeric() => {
                n.as_int().is_some_and(|i| int_equals_float(i, *f))
            }
            (a, b) if a.is_numeric() && b.is_numeric() => a.as_int() == b.as_int(),
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Tuple(a), Value::Tuple(b)) | (Value::List(a), Value::List(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.equals(y))
            }
            (Value::Dict(a), Value::Dict(b)) => {
                a.len() == b.len()
                    && a.iter().all(|(k, v)| {
                        b.iter()
                            .find(|(bk, _)| bk.equals(k))
                            .is_some_and(|(_, bv)| bv.equals(v))
                    })
            }
            (Value::Set(a), Value::Set(b)) => {
                a.len() == b.len() && a.iter().all(|x| b.iter().any(|y| y.equals(x)))
            }
            _ => false,
        }
    }
}

/// Exact int/float comparison without rounding the int.
#[expect(
    clippy::cast_possible_truncation,
    reason = "range is checked before the float is truncated"
)]
fn int_equals_float(i: i64, f: f64) -> bool {
    // 2^63 is exactly representable; anything at or past it cannot be an i64.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    f.is_finite() && f.fract() == 0.0 && (-LIMIT..LIMIT).contains(&f) && f as i64 == i
}
