//! Error types for collection operations.

use thiserror::Error;

/// Structured error types for collection operations.
///
/// These signal a misuse at the call site; data simply not being present is
/// reported through `Option` instead.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// A reduction without an initial value was run over an empty sequence
    #[error("{operation} of empty sequence with no initial value")]
    EmptyReduce { operation: &'static str },
}

impl CollectionError {
    /// Check if this error comes from an invalid argument (always true today)
    pub fn is_type_error(&self) -> bool {
        matches!(self, CollectionError::EmptyReduce { .. })
    }

    /// Get the operation that failed
    pub fn operation(&self) -> &'static str {
        match self {
            CollectionError::EmptyReduce { operation } => operation,
        }
    }
}

// Conversion from CollectionError to the main Error type
impl From<CollectionError> for crate::Error {
    fn from(err: CollectionError) -> Self {
        crate::Error::Collection(err)
    }
}
