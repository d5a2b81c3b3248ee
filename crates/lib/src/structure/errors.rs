//! Error types for structural operations.
//!
//! Path parsing failures live in [`super::path::PathError`]; lookup misses are
//! not errors at all and are reported as [`super::NotFound`] values.

use thiserror::Error;

/// Structured error types for operations over [`super::Value`] trees.
#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StructureError {
    /// A traversal nested deeper than the configured limit
    #[error("structure nesting exceeds the depth limit of {limit}")]
    DepthLimitExceeded { limit: usize },

    /// Type mismatch when converting out of a value
    #[error("type mismatch: expected {expected}, found {actual}")]
    TypeMismatch { expected: String, actual: String },
}

impl StructureError {
    /// Check if this error is a depth limit abort
    pub fn is_depth_limit(&self) -> bool {
        matches!(self, StructureError::DepthLimitExceeded { .. })
    }

    /// Check if this error is related to type mismatches
    pub fn is_type_error(&self) -> bool {
        matches!(self, StructureError::TypeMismatch { .. })
    }
}

// Conversion from StructureError to the main Error type
impl From<StructureError> for crate::Error {
    fn from(err: StructureError) -> Self {
        crate::Error::Structure(err)
    }
}
