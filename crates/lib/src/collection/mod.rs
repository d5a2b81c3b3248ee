//! Higher-order operations over ordered sequences.
//!
//! Every operation takes the sequence as a slice and never mutates it; results
//! are new vectors or scalars. Callbacks receive `(element, index, sequence)`
//! so index-dependent logic needs no extra bookkeeping.
//!
//! [`reduce`] is the primitive: [`map`], [`filter`] and [`flat_map`] are folds
//! built on it, which keeps their traversal order identical by construction.
//!
//! ```
//! use polyfold::collection::{filter, map, reduce};
//!
//! let nums = [1, 2, 3, 4, 5, 6, 7];
//! let evens = filter(&nums, |n, _, _| n % 2 == 0);
//! assert_eq!(evens, vec![2, 4, 6]);
//!
//! let doubled = map(&evens, |n, _, _| n * 2);
//! assert_eq!(reduce(&doubled, 0, |acc, n, _, _| acc + n), 24);
//! ```

pub mod errors;

pub use errors::CollectionError;

fn empty_reduce(operation: &'static str) -> CollectionError {
    tracing::debug!(operation, "reduction over an empty sequence without a seed");
    CollectionError::EmptyReduce { operation }
}

/// Left-to-right fold starting from `init`.
pub fn reduce<T, A, F>(seq: &[T], init: A, mut combine: F) -> A
where
    F: FnMut(A, &T, usize, &[T]) -> A,
{
    let mut acc = init;
    for (index, element) in seq.iter().enumerate() {
        acc = combine(acc, element, index, seq);
    }
    acc
}

/// Left-to-right fold seeded with the first element.
///
/// Iteration starts at index 1.
///
/// # Errors
/// [`CollectionError::EmptyReduce`] if `seq` is empty.
pub fn reduce_seeded<T, F>(seq: &[T], mut combine: F) -> Result<T, CollectionError>
where
    T: Clone,
    F: FnMut(T, &T, usize, &[T]) -> T,
{
    let (first, rest) = seq.split_first().ok_or_else(|| empty_reduce("reduce"))?;
    let mut acc = first.clone();
    for (offset, element) in rest.iter().enumerate() {
        acc = combine(acc, element, offset + 1, seq);
    }
    Ok(acc)
}

/// Right-to-left fold starting from `init`.
pub fn reduce_right<T, A, F>(seq: &[T], init: A, mut combine: F) -> A
where
    F: FnMut(A, &T, usize, &[T]) -> A,
{
    let mut acc = init;
    for (index, element) in seq.iter().enumerate().rev() {
        acc = combine(acc, element, index, seq);
    }
    acc
}

/// Right-to-left fold seeded with the last element.
///
/// # Errors
/// [`CollectionError::EmptyReduce`] if `seq` is empty.
pub fn reduce_right_seeded<T, F>(seq: &[T], mut combine: F) -> Result<T, CollectionError>
where
    T: Clone,
    F: FnMut(T, &T, usize, &[T]) -> T,
{
    let (last, rest) = seq.split_last().ok_or_else(|| empty_reduce("reduce_right"))?;
    let mut acc = last.clone();
    for (index, element) in rest.iter().enumerate().rev() {
        acc = combine(acc, element, index, seq);
    }
    Ok(acc)
}

/// Calls `action` on every element in order.
pub fn for_each<T, F>(seq: &[T], mut action: F)
where
    F: FnMut(&T, usize, &[T]),
{
    for (index, element) in seq.iter().enumerate() {
        action(element, index, seq);
    }
}

/// Transforms every element; the output has the input's length.
pub fn map<T, U, F>(seq: &[T], mut transform: F) -> Vec<U>
where
    F: FnMut(&T, usize, &[T]) -> U,
{
    reduce(seq, Vec::with_capacity(seq.len()), |mut acc, element, index, seq| {
        acc.push(transform(element, index, seq));
        acc
    })
}

/// Keeps the elements the predicate accepts, in their original order.
pub fn filter<T, F>(seq: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, usize, &[T]) -> bool,
{
    reduce(seq, Vec::new(), |mut acc, element, index, seq| {
        if predicate(element, index, seq) {
            acc.push(element.clone());
        }
        acc
    })
}

/// Maps every element to zero or more outputs and concatenates them.
pub fn flat_map<T, U, I, F>(seq: &[T], mut transform: F) -> Vec<U>
where
    I: IntoIterator<Item = U>,
    F: FnMut(&T, usize, &[T]) -> I,
{
    reduce(seq, Vec::new(), |mut acc, element, index, seq| {
        acc.extend(transform(element, index, seq));
        acc
    })
}

/// Index of the first element satisfying the predicate.
pub fn find_index<T, F>(seq: &[T], mut predicate: F) -> Option<usize>
where
    F: FnMut(&T, usize, &[T]) -> bool,
{
    seq.iter()
        .enumerate()
        .find_map(|(index, element)| predicate(element, index, seq).then_some(index))
}

/// Index of the last element satisfying the predicate, scanning from the end.
pub fn find_last_index<T, F>(seq: &[T], mut predicate: F) -> Option<usize>
where
    F: FnMut(&T, usize, &[T]) -> bool,
{
    seq.iter()
        .enumerate()
        .rev()
        .find_map(|(index, element)| predicate(element, index, seq).then_some(index))
}

/// First element satisfying the predicate; `None` when nothing matches.
pub fn find<'a, T, F>(seq: &'a [T], predicate: F) -> Option<&'a T>
where
    F: FnMut(&T, usize, &[T]) -> bool,
{
    find_index(seq, predicate).map(|index| &seq[index])
}

/// Last element satisfying the predicate; `None` when nothing matches.
pub fn find_last<'a, T, F>(seq: &'a [T], predicate: F) -> Option<&'a T>
where
    F: FnMut(&T, usize, &[T]) -> bool,
{
    find_last_index(seq, predicate).map(|index| &seq[index])
}

/// True if any element satisfies the predicate. False on empty input.
pub fn some<T, F>(seq: &[T], predicate: F) -> bool
where
    F: FnMut(&T, usize, &[T]) -> bool,
{
    find_index(seq, predicate).is_some()
}

/// True if every element satisfies the predicate. True on empty input.
pub fn every<T, F>(seq: &[T], mut predicate: F) -> bool
where
    F: FnMut(&T, usize, &[T]) -> bool,
{
    find_index(seq, |element, index, seq| !predicate(element, index, seq)).is_none()
}
