//! Function values that can live inside a [`Value`].

use std::{fmt, sync::Arc};

use super::Value;

type Body = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A named, shared, immutable function over [`Value`] arguments.
///
/// The declared `arity` is the number of parameters the function expects.
/// Cloning a `Callable` shares the same function body; two callables compare
/// equal only when they share a body.
///
/// ```
/// # use polyfold::structure::{Callable, Value};
/// let add = Callable::new("add", 2, |args| {
///     let sum: i64 = args.iter().filter_map(Value::as_int).sum();
///     Value::Int(sum)
/// });
///
/// assert_eq!(add.arity(), 2);
/// assert_eq!(add.call(&[Value::Int(2), Value::Int(3)]), 5);
/// ```
#[derive(Clone)]
pub struct Callable {
    name: Arc<str>,
    arity: usize,
    body: Arc<Body>,
}

impl Callable {
    /// Wraps a closure as a function value.
    pub fn new<F>(name: impl Into<Arc<str>>, arity: usize, body: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            arity,
            body: Arc::new(body),
        }
    }

    /// Returns the function's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of parameters the function declares.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Invokes the function with the given arguments.
    ///
    /// The argument count is not checked here; missing arguments are up to
    /// the body to treat as absent.
    pub fn call(&self, args: &[Value]) -> Value {
        (self.body)(args)
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.body, &other.body)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callable")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}
