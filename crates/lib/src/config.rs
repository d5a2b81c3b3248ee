//! Tunable behaviour for structural traversals.
//!
//! Options are plain serde-friendly structs so they can be embedded in a
//! caller's own configuration file. Missing fields take their defaults.
//!
//! ```
//! # use polyfold::config::{CloneOptions, FunctionPolicy};
//! let options: CloneOptions = serde_json::from_str(r#"{ "functions": "share" }"#).unwrap();
//! assert_eq!(options.functions, FunctionPolicy::Share);
//! assert_eq!(options.max_depth, None);
//! ```

use serde::{Deserialize, Serialize};

/// What a deep clone does with function values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FunctionPolicy {
    /// Leave functions out of the copy, as a serialization round-trip would:
    /// map entries are omitted, list slots become null, a root function
    /// becomes undefined.
    #[default]
    Drop,
    /// Keep the function in the copy. Function bodies are immutable, so the
    /// copy shares them with the original.
    Share,
}

/// Options for [`crate::structure::deep_clone_with`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CloneOptions {
    /// Deepest container nesting the clone will accept; unlimited if unset.
    pub max_depth: Option<usize>,
    /// Treatment of function values.
    pub functions: FunctionPolicy,
}

impl CloneOptions {
    /// Creates the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Caps container nesting; deeper input fails instead of being copied.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Sets the function policy.
    pub fn with_functions(mut self, functions: FunctionPolicy) -> Self {
        self.functions = functions;
        self
    }
}
