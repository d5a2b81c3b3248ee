//!
//! Polyfold: generic collection and structural-traversal utilities.
//! This library provides deep access and deep copies for nested data, higher-order sequence operations, and function combinators.
//!
//! ## Core Concepts
//!
//! * **Values (`structure::Value`)**: A tagged tree of primitives, lists, maps and functions. Every nested structure the library works on is a `Value`, or any sequence type for the generic operations.
//! * **Paths (`structure::PathBuf`)**: Validated dotted paths such as `"user.address.0.city"`, resolved against a value by `structure::resolve`. A lookup that misses returns a `structure::NotFound` describing where it stopped.
//! * **Deep clones (`structure::deep_clone`)**: Fully independent copies, tunable through `config::CloneOptions`.
//! * **Collection operations (`collection`)**: `map`, `filter`, `reduce`, `find`, `some`, `every` and friends over slices, with `(element, index, sequence)` callbacks.
//! * **Flattening (`flatten`)**: Depth-bounded splicing of nested sequences, iterative for any nesting depth.
//! * **Combinators (`combinator`)**: Currying, partial application and left or right pipelines.

pub mod collection;
pub mod combinator;
pub mod config;
pub mod constants;
pub mod flatten;
pub mod structure;

/// Re-export the `Value` enum for easier access.
pub use structure::Value;

/// Result type used throughout the Polyfold library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the Polyfold library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured errors from the structure module
    #[error(transparent)]
    Structure(structure::StructureError),

    /// Path parsing errors
    #[error(transparent)]
    Path(structure::PathError),

    /// A path lookup that missed, for callers propagating it with `?`
    #[error(transparent)]
    NotFound(structure::NotFound),

    /// Structured errors from the collection module
    #[error(transparent)]
    Collection(collection::CollectionError),

    /// Structured errors from the combinator module
    #[error(transparent)]
    Combinator(combinator::CombinatorError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Structure(_) => "structure",
            Error::Path(_) => "path",
            Error::NotFound(_) => "resolve",
            Error::Collection(_) => "collection",
            Error::Combinator(_) => "combinator",
        }
    }

    /// Check if this error indicates a path did not lead to a value.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Check if this error comes from an argument of the wrong shape.
    pub fn is_type_error(&self) -> bool {
        match self {
            Error::Structure(structure_err) => structure_err.is_type_error(),
            Error::Path(_) => true,
            Error::Collection(collection_err) => collection_err.is_type_error(),
            Error::Combinator(combinator_err) => combinator_err.is_type_error(),
            Error::NotFound(_) => false,
        }
    }

    /// Check if this error is a traversal aborted at the depth limit.
    pub fn is_depth_limit(&self) -> bool {
        match self {
            Error::Structure(structure_err) => structure_err.is_depth_limit(),
            _ => false,
        }
    }
}
