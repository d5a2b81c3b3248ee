//! Flattening of nested sequences.
//!
//! [`flatten`] splices nested sequences into their parent, in pre-order
//! (depth-first, left to right), descending at most as far as the [`Depth`]
//! budget allows. It runs on an explicit work stack, so arbitrarily deep
//! input cannot overflow the call stack.
//!
//! [`flatten_with_reduce`] is the textbook definition (a recursive fold with
//! concatenation) and returns the same result for every input.
//!
//! ```
//! use polyfold::flatten::{flatten, Depth};
//! use polyfold::structure::Value;
//!
//! let nested: Vec<Value> = serde_json::from_str::<serde_json::Value>("[1,[2,3],[4,[5,6]]]")
//!     .map(Value::from)?
//!     .as_list()
//!     .cloned()
//!     .unwrap_or_default();
//!
//! let one = flatten(&nested, Depth::Levels(1));
//! assert_eq!(Value::List(one).to_string(), "[1, 2, 3, 4, [5, 6]]");
//!
//! let all = flatten(&nested, Depth::Unbounded);
//! assert_eq!(Value::List(all).to_string(), "[1, 2, 3, 4, 5, 6]");
//! # Ok::<(), serde_json::Error>(())
//! ```

use std::slice;

use crate::collection::reduce;
use crate::structure::Value;

/// Element types that may themselves be sequences of the same type.
pub trait Nested: Clone {
    /// Returns the nested elements if this element is a sequence.
    fn as_sequence(&self) -> Option<&[Self]>;
}

impl Nested for Value {
    fn as_sequence(&self) -> Option<&[Self]> {
        self.as_list().map(Vec::as_slice)
    }
}

#[cfg(feature = "json")]
impl Nested for serde_json::Value {
    fn as_sequence(&self) -> Option<&[Self]> {
        self.as_array().map(Vec::as_slice)
    }
}

/// How many levels of nesting to splice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Depth {
    /// Splice this many levels; `Levels(0)` is a shallow copy.
    Levels(usize),
    /// Splice until no nested sequence remains.
    Unbounded,
}

impl Depth {
    /// Budget left after descending one level, or `None` if exhausted.
    fn descend(self) -> Option<Depth> {
        match self {
            Depth::Levels(0) => None,
            Depth::Levels(n) => Some(Depth::Levels(n - 1)),
            Depth::Unbounded => Some(Depth::Unbounded),
        }
    }
}

impl Default for Depth {
    /// One level, like the native operation with no argument.
    fn default() -> Self {
        Depth::Levels(1)
    }
}

impl From<usize> for Depth {
    fn from(levels: usize) -> Self {
        Depth::Levels(levels)
    }
}

/// Flattens `seq` up to `depth` levels.
pub fn flatten<T: Nested>(seq: &[T], depth: Depth) -> Vec<T> {
    let mut out = Vec::with_capacity(seq.len());
    let mut stack: Vec<(slice::Iter<'_, T>, Depth)> = vec![(seq.iter(), depth)];

    while let Some((iter, budget)) = stack.last_mut() {
        let budget = *budget;
        let Some(element) = iter.next() else {
            stack.pop();
            continue;
        };

        match (element.as_sequence(), budget.descend()) {
            (Some(inner), Some(rest)) => stack.push((inner.iter(), rest)),
            _ => out.push(element.clone()),
        }
    }

    out
}

/// Flattens `seq` by recursively folding with concatenation.
///
/// Equivalent to [`flatten`]; recursion depth follows the nesting depth.
pub fn flatten_with_reduce<T: Nested>(seq: &[T], depth: Depth) -> Vec<T> {
    reduce(seq, Vec::new(), |mut acc, element, _, _| {
        match (element.as_sequence(), depth.descend()) {
            (Some(inner), Some(rest)) => acc.extend(flatten_with_reduce(inner, rest)),
            _ => acc.push(element.clone()),
        }
        acc
    })
}

/// Folds over every leaf (non-sequence element) in pre-order.
///
/// ```
/// # use polyfold::flatten::fold_leaves;
/// # use polyfold::structure::Value;
/// let nested = vec![
///     Value::Int(1),
///     Value::List(vec![Value::Int(2), Value::List(vec![Value::Int(3)])]),
/// ];
/// let sum = fold_leaves(&nested, 0, |acc, leaf| acc + leaf.as_int().unwrap_or(0));
/// assert_eq!(sum, 6);
/// ```
pub fn fold_leaves<T, A, F>(seq: &[T], init: A, mut combine: F) -> A
where
    T: Nested,
    F: FnMut(A, &T) -> A,
{
    let mut acc = init;
    let mut stack = vec![seq.iter()];

    while let Some(iter) = stack.last_mut() {
        match iter.next() {
            None => {
                stack.pop();
            }
            Some(element) => match element.as_sequence() {
                Some(inner) => stack.push(inner.iter()),
                None => acc = combine(acc, element),
            },
        }
    }

    acc
}
