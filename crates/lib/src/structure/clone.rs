//! Deep copies of nested structures.
//!
//! [`deep_clone`] rebuilds every container of a [`Value`] so the copy and the
//! original can be mutated independently at any depth. Because containers own
//! their children a value can never contain itself, so there is no cycle
//! detection. The copy is built on an explicit work stack, so nesting depth
//! is limited only by memory; [`CloneOptions::max_depth`] can cap it.
//!
//! # Known limitation: functions
//!
//! By default function values are **not** preserved, matching a
//! serialization round-trip: a function-valued map entry is omitted, a
//! function inside a list becomes [`Value::Null`] (the list keeps its length),
//! and a function at the root becomes [`Value::Undefined`]. Use
//! [`FunctionPolicy::Share`] to keep them.

use std::slice;

use super::{Map, StructureError, Value};
use crate::config::{CloneOptions, FunctionPolicy};

/// Deep-clones a value with the default [`CloneOptions`].
///
/// ```
/// # use polyfold::structure::{deep_clone, Map, Value};
/// let mut inner = Map::new();
/// inner.insert("university".to_string(), Value::from("MIT"));
/// let mut outer = Map::new();
/// outer.insert("details".to_string(), Value::Map(inner));
/// let original = Value::Map(outer);
///
/// let mut copy = deep_clone(&original)?;
/// assert_eq!(copy, original);
///
/// copy.as_map_mut().unwrap()["details"]
///     .as_map_mut()
///     .unwrap()
///     .insert("university".to_string(), Value::from("Berkeley"));
/// assert_eq!(original.get_path("details.university"), Some(&Value::from("MIT")));
/// # Ok::<(), polyfold::structure::StructureError>(())
/// ```
pub fn deep_clone(value: &Value) -> Result<Value, StructureError> {
    deep_clone_with(value, &CloneOptions::default())
}

/// Deep-clones a value with explicit options.
///
/// # Errors
/// [`StructureError::DepthLimitExceeded`] if `options.max_depth` is set and
/// the value nests deeper.
pub fn deep_clone_with(value: &Value, options: &CloneOptions) -> Result<Value, StructureError> {
    let mut cloner = Cloner {
        options,
        dropped_functions: 0,
    };
    let copy = cloner.clone_root(value)?;
    if cloner.dropped_functions > 0 {
        tracing::debug!(
            dropped = cloner.dropped_functions,
            "deep clone left out function values"
        );
    }
    Ok(copy.unwrap_or(Value::Undefined))
}

/// A container being copied: the source children still to visit and the
/// copy built so far.
struct Frame<'a> {
    /// Key of this container inside its parent map.
    key: Option<&'a str>,
    body: Body<'a>,
}

enum Body<'a> {
    List(slice::Iter<'a, Value>, Vec<Value>),
    Map(indexmap::map::Iter<'a, String, Value>, Map),
}

impl<'a> Frame<'a> {
    /// Opens a frame for `value`, or `None` if it is not a container.
    fn open(key: Option<&'a str>, value: &'a Value) -> Option<Self> {
        let body = match value {
            Value::List(list) => Body::List(list.iter(), Vec::with_capacity(list.len())),
            Value::Map(map) => Body::Map(map.iter(), Map::with_capacity(map.len())),
            _ => return None,
        };
        Some(Self { key, body })
    }

    fn next_child(&mut self) -> Option<(Option<&'a str>, &'a Value)> {
        match &mut self.body {
            Body::List(iter, _) => iter.next().map(|item| (None, item)),
            Body::Map(iter, _) => iter.next().map(|(key, item)| (Some(key.as_str()), item)),
        }
    }

    /// Stores a finished child; `None` is a function the policy left out.
    fn attach(&mut self, key: Option<&str>, copy: Option<Value>) {
        match &mut self.body {
            Body::List(_, out) => out.push(copy.unwrap_or(Value::Null)),
            Body::Map(_, out) => {
                if let (Some(key), Some(copy)) = (key, copy) {
                    out.insert(key.to_string(), copy);
                }
            }
        }
    }

    fn finish(self) -> (Option<&'a str>, Value) {
        let value = match self.body {
            Body::List(_, out) => Value::List(out),
            Body::Map(_, out) => Value::Map(out),
        };
        (self.key, value)
    }
}

struct Cloner<'o> {
    options: &'o CloneOptions,
    dropped_functions: usize,
}

impl Cloner<'_> {
    /// Clones `root`. Returns `None` for a function the policy leaves out.
    fn clone_root(&mut self, root: &Value) -> Result<Option<Value>, StructureError> {
        let Some(frame) = Frame::open(None, root) else {
            return Ok(self.copy_leaf(root));
        };
        self.enter(0)?;

        let mut stack = vec![frame];
        let mut finished = None;

        while let Some(frame) = stack.last_mut() {
            match frame.next_child() {
                Some((key, child)) => match Frame::open(key, child) {
                    Some(next) => {
                        self.enter(stack.len())?;
                        stack.push(next);
                    }
                    None => {
                        let copy = self.copy_leaf(child);
                        frame.attach(key, copy);
                    }
                },
                None => {
                    let Some(done) = stack.pop() else { break };
                    let (key, value) = done.finish();
                    match stack.last_mut() {
                        Some(parent) => parent.attach(key, Some(value)),
                        None => finished = Some(value),
                    }
                }
            }
        }

        Ok(finished)
    }

    /// Copies a non-container value.
    fn copy_leaf(&mut self, value: &Value) -> Option<Value> {
        match value {
            Value::Function(func) => match self.options.functions {
                FunctionPolicy::Share => Some(Value::Function(func.clone())),
                FunctionPolicy::Drop => {
                    self.dropped_functions += 1;
                    None
                }
            },
            other => Some(other.clone()),
        }
    }

    /// Checks a container sitting inside `depth` other containers.
    fn enter(&self, depth: usize) -> Result<(), StructureError> {
        match self.options.max_depth {
            Some(limit) if depth >= limit => {
                tracing::debug!(limit, "deep clone hit the depth limit");
                Err(StructureError::DepthLimitExceeded { limit })
            }
            _ => Ok(()),
        }
    }
}
