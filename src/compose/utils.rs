//! Helper functions (combinators) for sequence composition.
//!
//! - [`identity`]: The identity function (I combinator)
//! - [`constant`]: A function that always returns the same value (K combinator)
//!
//! Both show up constantly in the sequence laws: `fmap(identity, a) == a`,
//! and binding `constant(Vec::new())` empties any sequence.

/// Returns the value unchanged.
///
/// The identity function is the unit of mapping:
/// `fmap(identity, a) == a` and `ap(pure(identity), a) == a`.
///
/// # Examples
///
/// ```
/// use runes::compose::identity;
/// use runes::sequence::fmap;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(fmap(identity, vec![1, 2, 3]), vec![1, 2, 3]);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its input.
///
/// Also known as the K combinator. As a bind step it replaces every element
/// with a fixed sequence; returning `None` empties the input.
///
/// # Type Parameters
///
/// * `T` - The type of the constant value (must implement [`Clone`])
/// * `U` - The input type of the returned function (ignored)
///
/// # Examples
///
/// ```
/// use runes::compose::constant;
/// use runes::sequence::bind_left;
///
/// let repeated = bind_left(vec![1, 2], constant::<_, i32>(vec!['a', 'b']));
/// assert_eq!(repeated, vec!['a', 'b', 'a', 'b']);
///
/// let nothing: Vec<i32> = bind_left(vec![1, 2, 3], constant::<_, i32>(None::<i32>));
/// assert!(nothing.is_empty());
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}
