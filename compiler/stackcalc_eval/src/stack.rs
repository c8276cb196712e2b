//! The value stack.
//!
//! Slot-level storage only: pushing, removing and inspecting slots without
//! resolving pointers. Pointer resolution needs the variable store and lives
//! on [`Session`](crate::Session).

use std::fmt;

use crate::errors::{stack_empty, wrong_pointer_type, EvalResult};
use crate::{Slot, VariablePtr};

/// Ordered slots; the top is the last element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValueStack {
    slots: Vec<Slot>,
}

impl ValueStack {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, slot: impl Into<Slot>) {
        self.slots.push(slot.into());
    }

    /// Remove the top slot as-is.
    #[inline]
    pub fn pop_slot(&mut self) -> EvalResult<Slot> {
        self.slots.pop().ok_or_else(stack_empty)
    }

    /// Borrow the top slot.
    #[inline]
    pub fn top_slot(&self) -> EvalResult<&Slot> {
        self.slots.last().ok_or_else(stack_empty)
    }

    /// Remove the top slot, which must be a pointer.
    ///
    /// A value on top is left in place.
    pub fn pop_pointer(&mut self) -> EvalResult<VariablePtr> {
        match self.slots.pop() {
            Some(Slot::Pointer(ptr)) => Ok(ptr),
            Some(slot) => {
                self.slots.push(slot);
                Err(wrong_pointer_type())
            }
            None => Err(stack_empty()),
        }
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Copy of the current slots; pointers stay pointers.
    pub fn snapshot(&self) -> Vec<Slot> {
        self.slots.clone()
    }

    /// Replace the contents with a snapshot.
    pub fn restore(&mut self, snapshot: Vec<Slot>) {
        self.slots = snapshot;
    }
}

/// Listing form, e.g. `[1, 'a', $x]`.
impl fmt::Display for ValueStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{slot}")?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests;
