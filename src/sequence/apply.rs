//! Cartesian application and the `pure` unit.

/// Applies a sequence of functions to a sequence of values.
///
/// For each function in `functions` (outer loop, in order) the function is
/// applied to each value in `sequence` (inner loop, in order), and all the
/// results are flattened into one sequence of length
/// `functions.len() * sequence.len()`.
///
/// This is a full cartesian expansion, not element-wise pairing:
/// `ap([f0, f1], [x0, x1]) == [f0(x0), f0(x1), f1(x0), f1(x1)]`.
///
/// The values are collected once up front and cloned for every function.
///
/// # Arguments
///
/// * `functions` - The transformation functions, applied one after another
/// * `sequence` - The values each function is applied to
///
/// # Examples
///
/// ```rust
/// use runes::sequence::ap;
///
/// let functions: [fn(i32) -> i32; 2] = [|x| x + 1, |x| x * 2];
/// assert_eq!(ap(functions, [5, 10]), vec![6, 11, 10, 20]);
///
/// let none: Vec<fn(i32) -> i32> = Vec::new();
/// assert!(ap(none, [1, 2, 3]).is_empty());
/// ```
pub fn ap<Functions, S, U>(functions: Functions, sequence: S) -> Vec<U>
where
    Functions: IntoIterator,
    Functions::Item: FnMut(S::Item) -> U,
    S: IntoIterator,
    S::Item: Clone,
{
    let values: Vec<S::Item> = sequence.into_iter().collect();
    let values = values.as_slice();
    functions
        .into_iter()
        .flat_map(move |mut function| values.iter().map(move |value| function(value.clone())))
        .collect()
}

/// Fallible form of [`ap`].
///
/// Evaluation follows the same function-major order and stops at the first
/// error.
///
/// # Errors
///
/// Returns the first error produced by any function.
pub fn try_ap<Functions, S, U, E>(functions: Functions, sequence: S) -> Result<Vec<U>, E>
where
    Functions: IntoIterator,
    Functions::Item: FnMut(S::Item) -> Result<U, E>,
    S: IntoIterator,
    S::Item: Clone,
{
    let values: Vec<S::Item> = sequence.into_iter().collect();
    let values = values.as_slice();
    functions
        .into_iter()
        .flat_map(move |mut function| values.iter().map(move |value| function(value.clone())))
        .collect()
}

/// Wraps a value in a one-element sequence.
///
/// This is the unit of the applicative and monad laws:
/// `bind_left(pure(x), f) == f(x)` and `ap(pure(identity), a) == a`.
///
/// # Examples
///
/// ```rust
/// use runes::sequence::pure;
///
/// assert_eq!(pure(42), vec![42]);
/// ```
#[inline]
pub fn pure<T>(value: T) -> Vec<T> {
    vec![value]
}
