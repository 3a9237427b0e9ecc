//! Element-wise mapping over sequences.

/// Maps a function over a sequence of values.
///
/// Returns a new sequence where element `i` is `function` applied to input
/// element `i`. The output has the same length as the input, and `function`
/// is invoked exactly once per element, front to back.
///
/// # Arguments
///
/// * `function` - A transformation from the element type to `U`
/// * `sequence` - The input values
///
/// # Examples
///
/// ```rust
/// use runes::sequence::fmap;
///
/// let lengths = fmap(str::len, vec!["a", "bb", "ccc"]);
/// assert_eq!(lengths, vec![1, 2, 3]);
///
/// let empty: Vec<i32> = fmap(|x: i32| x + 1, Vec::new());
/// assert!(empty.is_empty());
/// ```
#[inline]
pub fn fmap<S, U, F>(function: F, sequence: S) -> Vec<U>
where
    S: IntoIterator,
    F: FnMut(S::Item) -> U,
{
    sequence.into_iter().map(function).collect()
}

/// Maps a fallible function over a sequence of values.
///
/// Evaluation stops at the first error. Elements after it are never passed
/// to `function`.
///
/// # Errors
///
/// Returns the first error produced by `function`.
///
/// # Examples
///
/// ```rust
/// use runes::sequence::try_fmap;
///
/// let parsed = try_fmap(str::parse::<u8>, ["1", "2"]);
/// assert_eq!(parsed, Ok(vec![1, 2]));
///
/// assert!(try_fmap(str::parse::<u8>, ["1", "300"]).is_err());
/// ```
#[inline]
pub fn try_fmap<S, U, E, F>(function: F, sequence: S) -> Result<Vec<U>, E>
where
    S: IntoIterator,
    F: FnMut(S::Item) -> Result<U, E>,
{
    sequence.into_iter().map(function).collect()
}
