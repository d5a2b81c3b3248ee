//! Nested structures: the value model, paths, deep access and deep copies.
//!
//! # Core Types
//!
//! - [`Value`] - The tagged value of a nested structure
//! - [`Map`] - The keyed mapping inside [`Value::Map`]
//! - [`Callable`] - A function value
//! - [`PathBuf`] / [`Segment`] - Validated dotted paths
//! - [`NotFound`] - The result of a lookup that missed
//!
//! # Operations
//!
//! - [`resolve`] / [`resolve_recursive`] / [`resolve_mut`] - Deep property access
//! - [`deep_clone`] / [`deep_clone_with`] - Independent deep copies
//! - [`json_clone`] - A JSON round-trip copy (feature `json`)
//!
//! ```
//! use polyfold::structure::{deep_clone, resolve, PathBuf, Value};
//!
//! let original = Value::List(vec![Value::Int(1), Value::List(vec![Value::Int(2)])]);
//! let copy = deep_clone(&original)?;
//!
//! let path: PathBuf = "1.0".parse()?;
//! assert_eq!(resolve(&copy, &path), Ok(&Value::Int(2)));
//! # Ok::<(), polyfold::Error>(())
//! ```

pub mod callable;
pub mod clone;
pub mod errors;
#[cfg(feature = "json")]
pub mod json;
pub mod path;
pub mod resolve;
pub mod value;

pub use callable::Callable;
pub use clone::{deep_clone, deep_clone_with};
pub use errors::StructureError;
#[cfg(feature = "json")]
pub use json::{json_clone, to_json};
pub use path::{PathBuf, PathError, Segment};
pub use resolve::{Lookup, MissReason, NotFound, resolve, resolve_mut, resolve_recursive};
pub use value::{Map, Value};
