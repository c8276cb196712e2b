//! Variable store backing pointer resolution.

use rustc_hash::FxHashMap;
use stackcalc_literal::Value;

use crate::errors::{unassigned_variable, EvalResult};
use crate::VariablePtr;

/// Name to last-assigned value.
///
/// Names are case-sensitive and stored without the `$`. Entries are only
/// ever created or overwritten (by `set`), never removed.
#[derive(Clone, Debug, Default)]
pub struct VariableStore {
    vars: FxHashMap<String, Value>,
}

impl VariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `ptr`'s name to `value`, replacing any earlier binding.
    pub fn bind(&mut self, ptr: &VariablePtr, value: Value) {
        tracing::debug!(name = ptr.name(), %value, "binding variable");
        self.vars.insert(ptr.name().to_string(), value);
    }

    /// Current value of `ptr`, or an unassigned-variable error.
    pub fn resolve(&self, ptr: &VariablePtr) -> EvalResult<Value> {
        self.get(ptr.name())
            .cloned()
            .ok_or_else(|| unassigned_variable(ptr.name()))
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.vars.get(name)
    }
}

#[cfg(test)]
mod tests;
