//! Stack slots and variable pointers.

use std::fmt;

use stackcalc_literal::Value;

/// A lazy reference to a variable, pushed by a `$name` token.
///
/// The pointer holds only the name. It is resolved against the session's
/// [`VariableStore`](crate::VariableStore) each time it is read, so
/// `$x` may be pushed before `x` has ever been set.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VariablePtr {
    name: String,
}

impl VariablePtr {
    pub fn new(name: impl Into<String>) -> Self {
        VariablePtr { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for VariablePtr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.name)
    }
}

/// One entry of the value stack.
#[derive(Clone, Debug, PartialEq)]
pub enum Slot {
    Value(Value),
    Pointer(VariablePtr),
}

impl Slot {
    /// Slot for the pointer `$name`.
    pub fn pointer(name: impl Into<String>) -> Self {
        Slot::Pointer(VariablePtr::new(name))
    }
}

impl From<Value> for Slot {
    fn from(value: Value) -> Self {
        Slot::Value(value)
    }
}

impl From<VariablePtr> for Slot {
    fn from(ptr: VariablePtr) -> Self {
        Slot::Pointer(ptr)
    }
}

/// Stack listing form: values in repr, pointers as `$name`.
impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Value(value) => write!(f, "{}", value.repr()),
            Slot::Pointer(ptr) => write!(f, "{ptr}"),
        }
    }
}
