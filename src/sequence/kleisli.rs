//! Kleisli composition of sequence-producing functions.
//!
//! Given `f: T -> Sequence<U>` and `g: U -> Sequence<V>`, the Kleisli
//! composition is the function `x -> bind_left(f(x), g)`. It is associative,
//! and [`pure`](super::pure) is its identity on both sides:
//!
//! ```text
//! compose_left(compose_left(f, g), h) == compose_left(f, compose_left(g, h))
//! compose_left(pure, f) == f == compose_left(f, pure)
//! ```
//!
//! The composed function returns a `Vec`, so it can be composed again.

use super::bind::{bind_left, try_bind_left};

/// Composes two sequence-producing functions, from left to right.
///
/// The returned function applies `first` to its input, then binds `second`
/// over every element of that result: `x -> bind_left(first(x), second)`.
///
/// # Arguments
///
/// * `first` - A function from `T` to a sequence of `U`
/// * `second` - A function from `U` to a sequence of `V`
///
/// # Returns
///
/// A function from `T` to `Vec<V>`
///
/// # Examples
///
/// ```rust
/// use runes::sequence::compose_left;
///
/// let neighbours = |x: i32| vec![x - 1, x + 1];
/// let positive = |x: i32| (x > 0).then_some(x);
///
/// let positive_neighbours = compose_left(neighbours, positive);
/// assert_eq!(positive_neighbours(1), vec![2]);
/// assert_eq!(positive_neighbours(5), vec![4, 6]);
/// ```
pub fn compose_left<T, R1, R2, F, G>(first: F, second: G) -> impl Fn(T) -> Vec<R2::Item>
where
    F: Fn(T) -> R1,
    R1: IntoIterator,
    G: Fn(R1::Item) -> R2,
    R2: IntoIterator,
{
    move |input| bind_left(first(input), &second)
}

/// Composes two sequence-producing functions, from right to left.
///
/// The returned function applies `inner` first and binds `outer` over its
/// result: `x -> bind_left(inner(x), outer)`. This is
/// [`compose_left`] with the arguments swapped.
///
/// # Arguments
///
/// * `outer` - A function from `U` to a sequence of `V`, applied last
/// * `inner` - A function from `T` to a sequence of `U`, applied first
///
/// # Examples
///
/// ```rust
/// use runes::sequence::compose_right;
///
/// let chars = |s: String| s.chars().collect::<Vec<_>>();
/// let words = |s: &str| s.split(' ').map(str::to_owned).collect::<Vec<_>>();
///
/// let letters = compose_right(chars, words);
/// assert_eq!(letters("ab c"), vec!['a', 'b', 'c']);
/// ```
pub fn compose_right<T, R1, R2, F, G>(outer: F, inner: G) -> impl Fn(T) -> Vec<R2::Item>
where
    G: Fn(T) -> R1,
    R1: IntoIterator,
    F: Fn(R1::Item) -> R2,
    R2: IntoIterator,
{
    move |input| bind_left(inner(input), &outer)
}

/// Composes two fallible sequence-producing functions, from left to right.
///
/// The returned function fails with the first error from either stage. If
/// `first` fails, `second` is never called. If `second` fails on some
/// element, later elements are not evaluated.
///
/// # Examples
///
/// ```rust
/// use runes::sequence::try_compose_left;
///
/// let split = |s: &str| -> Result<Vec<String>, String> {
///     Ok(s.split(',').map(str::to_owned).collect())
/// };
/// let parse = |s: String| s.trim().parse::<i32>().map(Some).map_err(|_| s);
///
/// let numbers = try_compose_left(split, parse);
/// assert_eq!(numbers("1, 2"), Ok(vec![1, 2]));
/// assert_eq!(numbers("1,x,3"), Err("x".to_string()));
/// ```
pub fn try_compose_left<T, R1, R2, E, F, G>(
    first: F,
    second: G,
) -> impl Fn(T) -> Result<Vec<R2::Item>, E>
where
    F: Fn(T) -> Result<R1, E>,
    R1: IntoIterator,
    G: Fn(R1::Item) -> Result<R2, E>,
    R2: IntoIterator,
{
    move |input| try_bind_left(first(input)?, &second)
}

/// Composes two fallible sequence-producing functions, from right to left.
///
/// `inner` runs first, then `outer` is bound over its result. Errors
/// propagate as in [`try_compose_left`].
pub fn try_compose_right<T, R1, R2, E, F, G>(
    outer: F,
    inner: G,
) -> impl Fn(T) -> Result<Vec<R2::Item>, E>
where
    G: Fn(T) -> Result<R1, E>,
    R1: IntoIterator,
    F: Fn(R1::Item) -> Result<R2, E>,
    R2: IntoIterator,
{
    move |input| try_bind_left(inner(input)?, &outer)
}
