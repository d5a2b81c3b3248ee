//! Function combinators: currying, partial application and pipelines.
//!
//! [`curry`] and [`partial`] work on [`Callable`] values, so they compose with
//! functions stored inside a [`crate::structure::Value`]. [`curry2`] and
//! [`curry3`] are the statically typed counterparts for plain closures.
//!
//! Pipelines are folds over a list of unary functions: [`pipeline`] threads
//! the value left to right with [`reduce`], [`pipeline_right`] right to left
//! with [`reduce_right`].
//!
//! ```
//! use polyfold::combinator::pipeline;
//!
//! let steps: Vec<Box<dyn Fn(i32) -> i32>> = vec![
//!     Box::new(|x: i32| x + 1),
//!     Box::new(|x: i32| x * 10),
//! ];
//! let run = pipeline(steps);
//! assert_eq!(run(4), 50);
//! ```

pub mod curry;
pub mod errors;

pub use curry::{Application, Curried, curry, curry2, curry3, partial};
pub use errors::CombinatorError;

use crate::collection::{reduce, reduce_right};
use crate::structure::{Callable, Value};

/// Applies `fns` left to right: `pipeline([f, g, h])(x) == h(g(f(x)))`.
///
/// An empty pipeline is the identity.
pub fn pipeline<T, F>(fns: Vec<F>) -> impl Fn(T) -> T
where
    F: Fn(T) -> T,
{
    move |input| reduce(&fns, input, |acc, f, _, _| f(acc))
}

/// Applies `fns` right to left: `pipeline_right([f, g, h])(x) == f(g(h(x)))`.
pub fn pipeline_right<T, F>(fns: Vec<F>) -> impl Fn(T) -> T
where
    F: Fn(T) -> T,
{
    move |input| reduce_right(&fns, input, |acc, f, _, _| f(acc))
}

/// Chains unary callables left to right into a single callable.
///
/// Each stage receives the previous stage's result as its only argument; the
/// first stage receives the first argument of the call (undefined if none).
pub fn pipeline_callables(fns: Vec<Callable>) -> Callable {
    let name = fns.iter().map(Callable::name).collect::<Vec<_>>().join(" | ");
    Callable::new(name, 1, move |args| {
        let input = args.first().cloned().unwrap_or_default();
        reduce(&fns, input, |acc: Value, f, _, _| f.call(&[acc]))
    })
}
