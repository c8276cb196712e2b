//! Literal parsing failures.

use thiserror::Error;

/// Why a token could not be turned into a [`Value`](crate::Value).
///
/// Only [`LiteralError::Malformed`] means "this is not a literal at all";
/// callers treat such tokens as operator names. The other variants describe
/// text that is literal syntax but cannot be built, and are reported.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LiteralError {
    #[error("malformed literal: {reason}")]
    Malformed { reason: &'static str },

    #[error("unhashable type: '{type_name}'")]
    Unhashable { type_name: &'static str },

    #[error("integer literal too large: {text}")]
    IntegerTooLarge { text: String },

    /// A bad `\x`, `\u`, `\U` or `\N` escape. Positions are byte
    /// offsets into the quoted body, both inclusive.
    #[error("(unicode error) 'unicodeescape' codec can't decode bytes in position {start}-{end}: {reason}")]
    BadEscape {
        start: usize,
        end: usize,
        reason: &'static str,
    },
}

impl LiteralError {
    pub(crate) fn malformed(reason: &'static str) -> Self {
        LiteralError::Malformed { reason }
    }

    /// True when the text is not literal syntax.
    pub fn is_malformed(&self) -> bool {
        matches!(self, LiteralError::Malformed { .. })
    }
}
