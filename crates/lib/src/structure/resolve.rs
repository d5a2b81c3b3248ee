//! Deep property access by path.
//!
//! [`resolve`] walks a [`Value`] one segment at a time. A miss is not an
//! error: it is returned as a [`NotFound`] value naming the segment that could
//! not be applied, so callers can chain lookups without exceptional control
//! flow.
//!
//! ```
//! # use polyfold::structure::{resolve, Map, MissReason, PathBuf, Value};
//! let mut b = Map::new();
//! b.insert("c".to_string(), Value::Int(42));
//! let mut a = Map::new();
//! a.insert("b".to_string(), Value::Map(b));
//! let mut root = Map::new();
//! root.insert("a".to_string(), Value::Map(a));
//! let root = Value::Map(root);
//!
//! let hit: PathBuf = "a.b.c".parse()?;
//! assert_eq!(resolve(&root, &hit), Ok(&Value::Int(42)));
//!
//! let miss: PathBuf = "a.x.c".parse()?;
//! let not_found = resolve(&root, &miss).unwrap_err();
//! assert_eq!(not_found.segment, "x");
//! assert_eq!(not_found.reason, MissReason::Absent);
//! # Ok::<(), polyfold::structure::PathError>(())
//! ```

use std::fmt;

use thiserror::Error;

use super::{Segment, Value};

/// Why a path segment could not be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissReason {
    /// The key or index is missing, or the value reached is undefined.
    Absent,
    /// The value reached cannot be indexed (a primitive or a function).
    NotIndexable {
        /// Type name of the value that was reached.
        found: &'static str,
    },
}

impl fmt::Display for MissReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissReason::Absent => write!(f, "not defined"),
            MissReason::NotIndexable { found } => write!(f, "cannot index into {found}"),
        }
    }
}

/// A path lookup that stopped before the end of the path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("property '{segment}' at position {position} is {reason}")]
pub struct NotFound {
    /// The segment that could not be applied.
    pub segment: String,
    /// Zero-based position of that segment in the path.
    pub position: usize,
    /// What stopped the lookup.
    pub reason: MissReason,
}

impl NotFound {
    fn new(segment: &Segment, position: usize, reason: MissReason) -> Self {
        tracing::trace!(segment = %segment, position, %reason, "path lookup missed");
        Self {
            segment: segment.as_str().to_string(),
            position,
            reason,
        }
    }
}

impl From<NotFound> for crate::Error {
    fn from(err: NotFound) -> Self {
        crate::Error::NotFound(err)
    }
}

/// Result of a path lookup.
pub type Lookup<'a> = Result<&'a Value, NotFound>;

/// Applies one segment to the current value.
fn step<'a>(current: &'a Value, segment: &Segment, position: usize) -> Lookup<'a> {
    let next = match current {
        Value::Map(map) => map.get(segment.as_str()),
        Value::List(list) => segment.as_index().and_then(|index| list.get(index)),
        Value::Undefined => None,
        other => {
            return Err(NotFound::new(
                segment,
                position,
                MissReason::NotIndexable {
                    found: other.type_name(),
                },
            ));
        }
    };

    match next {
        None | Some(Value::Undefined) => Err(NotFound::new(segment, position, MissReason::Absent)),
        Some(value) => Ok(value),
    }
}

/// Resolves a path iteratively.
///
/// An empty path returns `root` itself.
pub fn resolve<'a>(root: &'a Value, path: impl AsRef<[Segment]>) -> Lookup<'a> {
    let mut current = root;
    for (position, segment) in path.as_ref().iter().enumerate() {
        current = step(current, segment, position)?;
    }
    Ok(current)
}

/// Resolves a path recursively, one segment per call.
///
/// Agrees with [`resolve`] on every input.
pub fn resolve_recursive<'a>(root: &'a Value, path: impl AsRef<[Segment]>) -> Lookup<'a> {
    fn go<'a>(current: &'a Value, rest: &[Segment], position: usize) -> Lookup<'a> {
        match rest.split_first() {
            None => Ok(current),
            Some((segment, tail)) => go(step(current, segment, position)?, tail, position + 1),
        }
    }

    go(root, path.as_ref(), 0)
}

/// Resolves a path to a mutable reference.
pub fn resolve_mut<'a>(
    root: &'a mut Value,
    path: impl AsRef<[Segment]>,
) -> Result<&'a mut Value, NotFound> {
    let mut current = root;
    for (position, segment) in path.as_ref().iter().enumerate() {
        let found = current.type_name();
        let next = match current {
            Value::Map(map) => map.get_mut(segment.as_str()),
            Value::List(list) => match segment.as_index() {
                Some(index) => list.get_mut(index),
                None => None,
            },
            Value::Undefined => None,
            _ => {
                return Err(NotFound::new(
                    segment,
                    position,
                    MissReason::NotIndexable { found },
                ));
            }
        };

        current = match next {
            None | Some(Value::Undefined) => {
                return Err(NotFound::new(segment, position, MissReason::Absent));
            }
            Some(value) => value,
        };
    }
    Ok(current)
}
