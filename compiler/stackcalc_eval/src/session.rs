//! A calculator session: one stack, one variable store, two output channels.

use stackcalc_literal::{classify, Classified, Value};

use crate::builtins::Builtin;
use crate::errors::{unknown_operator, EvalResult};
use crate::print_handler::{stderr_handler, stdout_handler, SharedPrintHandler};
use crate::{Slot, ValueStack, VariablePtr, VariableStore};

/// What the caller should do after a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineOutcome {
    /// Read the next line.
    Continue,
    /// `bye` ran; end the session.
    Halt,
}

/// State for one interactive calculator.
pub struct Session {
    stack: ValueStack,
    vars: VariableStore,
    out: SharedPrintHandler,
    err: SharedPrintHandler,
}

impl Session {
    /// Session printing values to stdout and errors to stderr.
    pub fn new() -> Self {
        Self::with_handlers(stdout_handler(), stderr_handler())
    }

    /// Session with explicit output channels.
    pub fn with_handlers(out: SharedPrintHandler, err: SharedPrintHandler) -> Self {
        Session {
            stack: ValueStack::new(),
            vars: VariableStore::new(),
            out,
            err,
        }
    }

    /// Evaluate one line of input.
    ///
    /// Tokens run left to right. The first failure is printed as
    /// `Error: <message>`, the rest of the line is skipped, and the stack is
    /// put back the way it was before the line. Variable bindings made
    /// earlier in the line are kept.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn evaluate(&mut self, line: &str) -> LineOutcome {
        let snapshot = self.stack.snapshot();
        for token in line.split_whitespace() {
            if let Err(err) = self.push_token(token) {
                if err.is_halt() {
                    return LineOutcome::Halt;
                }
                self.err.println(&format!("Error: {err}"));
                tracing::debug!(token, %err, "rolling back line");
                self.stack.restore(snapshot);
                break;
            }
        }
        LineOutcome::Continue
    }

    /// Handle one token: push a pointer or literal, or run an operator.
    pub fn push_token(&mut self, token: &str) -> EvalResult {
        match classify(token)? {
            Classified::Variable(name) => {
                tracing::trace!(name, "pushing pointer");
                self.stack.push(VariablePtr::new(name));
                Ok(())
            }
            Classified::Literal(value) => {
                tracing::trace!(%value, "pushing literal");
                self.stack.push(value);
                Ok(())
            }
            Classified::Word(word) => match Builtin::lookup(word) {
                Some(builtin) => builtin.apply(self),
                None => Err(unknown_operator(word)),
            },
        }
    }

    /// Push a value or pointer.
    pub fn push(&mut self, slot: impl Into<Slot>) {
        self.stack.push(slot);
    }

    /// Remove the top slot and return its value, resolving a pointer.
    ///
    /// The slot stays removed when resolution fails.
    pub fn pop(&mut self) -> EvalResult<Value> {
        let slot = self.stack.pop_slot()?;
        self.resolve(&slot)
    }

    /// Value of the top slot, resolving a pointer, without removing it.
    pub fn peek(&self) -> EvalResult<Value> {
        self.resolve(self.stack.top_slot()?)
    }

    /// Remove the top slot, which must be a pointer, without resolving it.
    pub fn pop_pointer(&mut self) -> EvalResult<VariablePtr> {
        self.stack.pop_pointer()
    }

    /// Every slot's current value, bottom first.
    pub fn resolved_slots(&self) -> EvalResult<Vec<Value>> {
        self.stack
            .slots()
            .iter()
            .map(|slot| self.resolve(slot))
            .collect()
    }

    /// Bind a variable. Not undone by line rollback.
    pub fn bind(&mut self, ptr: &VariablePtr, value: Value) {
        self.vars.bind(ptr, value);
    }

    pub fn clear(&mut self) {
        self.stack.clear();
    }

    pub fn stack(&self) -> &ValueStack {
        &self.stack
    }

    pub fn variables(&self) -> &VariableStore {
        &self.vars
    }

    /// Write a line to the value channel.
    pub fn print_value(&self, text: &str) {
        self.out.println(text);
    }

    fn resolve(&self, slot: &Slot) -> EvalResult<Value> {
        match slot {
            Slot::Value(value) => Ok(value.clone()),
            Slot::Pointer(ptr) => self.vars.resolve(ptr),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
