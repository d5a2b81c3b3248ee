//! Error types for function combinators.

use thiserror::Error;

/// Structured error types for curried application.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CombinatorError {
    /// More arguments were supplied than the function declares
    #[error("{name} expects {arity} arguments but got {supplied}")]
    ArityExceeded {
        name: String,
        arity: usize,
        supplied: usize,
    },

    /// A finished application was given more arguments
    #[error("function already received all its arguments; {supplied} more supplied")]
    AlreadyComplete { supplied: usize },
}

impl CombinatorError {
    /// Check if this error comes from an invalid argument
    pub fn is_type_error(&self) -> bool {
        matches!(
            self,
            CombinatorError::ArityExceeded { .. } | CombinatorError::AlreadyComplete { .. }
        )
    }

    /// Check if this error is an argument overflow
    pub fn is_arity_exceeded(&self) -> bool {
        matches!(self, CombinatorError::ArityExceeded { .. })
    }

    /// Check if this error is a call on a completed application
    pub fn is_already_complete(&self) -> bool {
        matches!(self, CombinatorError::AlreadyComplete { .. })
    }
}

// Conversion from CombinatorError to the main Error type
impl From<CombinatorError> for crate::Error {
    fn from(err: CombinatorError) -> Self {
        crate::Error::Combinator(err)
    }
}
