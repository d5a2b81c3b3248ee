//! Currying and partial application.

use std::rc::Rc;

use super::errors::CombinatorError;
use crate::structure::{Callable, Value};

/// A function waiting for the rest of its arguments.
///
/// Each [`apply`](Curried::apply) returns a new `Curried` with the extra
/// arguments bound; the receiver is left untouched, so one partially applied
/// function can be continued in several directions.
#[derive(Debug, Clone, PartialEq)]
pub struct Curried {
    function: Callable,
    arity: usize,
    bound: Vec<Value>,
}

/// The outcome of applying a curried function.
#[derive(Debug, Clone, PartialEq)]
pub enum Application {
    /// Still short of arguments.
    Partial(Curried),
    /// All arguments arrived and the function ran.
    Complete(Value),
}

/// Curries `function` over `arity` arguments.
///
/// ```
/// # use polyfold::combinator::curry;
/// # use polyfold::structure::{Callable, Value};
/// let add3 = Callable::new("add3", 3, |args| {
///     Value::Int(args.iter().filter_map(Value::as_int).sum())
/// });
///
/// let sum = curry(add3, 3)
///     .apply([Value::Int(1)])?
///     .apply([Value::Int(2)])?
///     .apply([Value::Int(3)])?;
/// assert_eq!(sum.into_value(), Some(Value::Int(6)));
/// # Ok::<(), polyfold::Error>(())
/// ```
pub fn curry(function: Callable, arity: usize) -> Curried {
    Curried {
        function,
        arity,
        bound: Vec::new(),
    }
}

impl Curried {
    /// Binds `args` after the ones already bound.
    ///
    /// # Errors
    /// [`CombinatorError::ArityExceeded`] if the total would exceed the arity.
    pub fn apply(
        &self,
        args: impl IntoIterator<Item = Value>,
    ) -> Result<Application, CombinatorError> {
        let mut bound = self.bound.clone();
        bound.extend(args);

        if bound.len() > self.arity {
            tracing::debug!(
                function = self.function.name(),
                arity = self.arity,
                supplied = bound.len(),
                "curried function over-applied"
            );
            return Err(CombinatorError::ArityExceeded {
                name: self.function.name().to_string(),
                arity: self.arity,
                supplied: bound.len(),
            });
        }

        if bound.len() == self.arity {
            return Ok(Application::Complete(self.function.call(&bound)));
        }

        Ok(Application::Partial(Curried {
            function: self.function.clone(),
            arity: self.arity,
            bound,
        }))
    }

    /// Number of arguments still missing.
    pub fn remaining(&self) -> usize {
        self.arity - self.bound.len()
    }

    /// Arguments bound so far.
    pub fn bound(&self) -> &[Value] {
        &self.bound
    }

    pub fn arity(&self) -> usize {
        self.arity
    }
}

impl Application {
    /// Continues a partial application.
    ///
    /// # Errors
    /// [`CombinatorError::AlreadyComplete`] if this application already
    /// completed, even with no `args`; [`CombinatorError::ArityExceeded`] if
    /// `args` overflow the remaining arity.
    pub fn apply(
        self,
        args: impl IntoIterator<Item = Value>,
    ) -> Result<Application, CombinatorError> {
        match self {
            Application::Partial(curried) => curried.apply(args),
            Application::Complete(_) => {
                let supplied = args.into_iter().count();
                tracing::debug!(supplied, "applied a completed function");
                Err(CombinatorError::AlreadyComplete { supplied })
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Application::Complete(_))
    }

    /// The result, if every argument has arrived.
    pub fn into_value(self) -> Option<Value> {
        match self {
            Application::Complete(value) => Some(value),
            Application::Partial(_) => None,
        }
    }
}

/// Fixes the leading arguments of `function`.
///
/// The result calls `function(fixed..., rest...)` and declares the remaining
/// arity.
///
/// ```
/// # use polyfold::combinator::partial;
/// # use polyfold::structure::{Callable, Value};
/// let join = Callable::new("join", 2, |args| {
///     let parts: Vec<_> = args.iter().filter_map(Value::as_text).collect();
///     Value::from(parts.join("-"))
/// });
/// let prefixed = partial(&join, vec![Value::from("id")]);
///
/// assert_eq!(prefixed.arity(), 1);
/// assert_eq!(prefixed.call(&[Value::from("7")]), "id-7");
/// ```
pub fn partial(function: &Callable, fixed: Vec<Value>) -> Callable {
    let arity = function.arity().saturating_sub(fixed.len());
    let name = format!("partial({})", function.name());
    let inner = function.clone();

    Callable::new(name, arity, move |rest| {
        let mut args = Vec::with_capacity(fixed.len() + rest.len());
        args.extend_from_slice(&fixed);
        args.extend_from_slice(rest);
        inner.call(&args)
    })
}

/// Curries a two-argument closure.
///
/// ```
/// # use polyfold::combinator::curry2;
/// let add = curry2(|a: i32, b: i32| a + b);
/// let add5 = add(5);
/// assert_eq!(add5(2), 7);
/// ```
pub fn curry2<A, B, R, F>(f: F) -> impl Fn(A) -> Box<dyn Fn(B) -> R>
where
    A: Clone + 'static,
    B: 'static,
    R: 'static,
    F: Fn(A, B) -> R + 'static,
{
    let f = Rc::new(f);
    move |a: A| {
        let f = Rc::clone(&f);
        Box::new(move |b: B| (*f)(a.clone(), b)) as Box<dyn Fn(B) -> R>
    }
}

/// Curries a three-argument closure.
///
/// ```
/// # use polyfold::combinator::curry3;
/// let volume = curry3(|l: u32, w: u32, h: u32| l * w * h);
/// assert_eq!(volume(2)(3)(4), 24);
/// ```
pub fn curry3<A, B, C, R, F>(f: F) -> impl Fn(A) -> Box<dyn Fn(B) -> Box<dyn Fn(C) -> R>>
where
    A: Clone + 'static,
    B: Clone + 'static,
    C: 'static,
    R: 'static,
    F: Fn(A, B, C) -> R + 'static,
{
    let f = Rc::new(f);
    move |a: A| {
        let f = Rc::clone(&f);
        Box::new(move |b: B| {
            let f = Rc::clone(&f);
            let a = a.clone();
            Box::new(move |c: C| (*f)(a.clone(), b.clone(), c)) as Box<dyn Fn(C) -> R>
        }) as Box<dyn Fn(B) -> Box<dyn Fn(C) -> R>>
    }
}
