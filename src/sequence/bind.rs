//! Flattening bind in both argument orders.
//!
//! `bind_left(a, f)` and `bind_right(f, a)` compute the same thing: the
//! in-order concatenation `f(a[0]) ++ f(a[1]) ++ ... ++ f(a[n - 1])`. The
//! right-hand form reads better when the function is the interesting part of
//! the call site.

/// Maps each element to a sequence and concatenates the results in order.
///
/// `function` may return any [`IntoIterator`]. A `Vec<U>` contributes all of
/// its elements, an `Option<U>` contributes zero or one.
///
/// # Arguments
///
/// * `sequence` - The input values
/// * `function` - A function producing zero or more results per element
///
/// # Examples
///
/// ```rust
/// use runes::sequence::bind_left;
///
/// assert_eq!(bind_left(vec![1, 2], |x| vec![x, x * 10]), vec![1, 10, 2, 20]);
///
/// let evens = bind_left(vec![1, 2, 3], |x| if x % 2 == 0 { Some(x) } else { None });
/// assert_eq!(evens, vec![2]);
/// ```
#[inline]
pub fn bind_left<S, R, F>(sequence: S, function: F) -> Vec<R::Item>
where
    S: IntoIterator,
    F: FnMut(S::Item) -> R,
    R: IntoIterator,
{
    sequence.into_iter().flat_map(function).collect()
}

/// [`bind_left`] with the arguments reversed.
///
/// # Examples
///
/// ```rust
/// use runes::sequence::{bind_left, bind_right};
///
/// let split = |s: &str| s.split(',').map(str::to_owned).collect::<Vec<_>>();
/// assert_eq!(bind_right(split, ["a,b", "c"]), bind_left(["a,b", "c"], split));
/// ```
#[inline]
pub fn bind_right<S, R, F>(function: F, sequence: S) -> Vec<R::Item>
where
    S: IntoIterator,
    F: FnMut(S::Item) -> R,
    R: IntoIterator,
{
    bind_left(sequence, function)
}

/// Fallible form of [`bind_left`].
///
/// If `function` fails for any element, the error is returned at once.
/// `function` is never invoked on the elements after the failing one, and
/// the results already produced for earlier elements are dropped.
///
/// # Errors
///
/// Returns the first error produced by `function`.
///
/// # Examples
///
/// ```rust
/// use runes::sequence::try_bind_left;
///
/// let checked = |x: i32| if x > 0 { Ok(vec![x; 2]) } else { Err(format!("bad {x}")) };
/// assert_eq!(try_bind_left([1, 2], checked), Ok(vec![1, 1, 2, 2]));
/// assert_eq!(try_bind_left([1, 0, 2], checked), Err("bad 0".to_string()));
/// ```
pub fn try_bind_left<S, R, E, F>(sequence: S, mut function: F) -> Result<Vec<R::Item>, E>
where
    S: IntoIterator,
    F: FnMut(S::Item) -> Result<R, E>,
    R: IntoIterator,
{
    let mut result = Vec::new();
    for element in sequence {
        result.extend(function(element)?);
    }
    Ok(result)
}

/// [`try_bind_left`] with the arguments reversed.
///
/// # Errors
///
/// Returns the first error produced by `function`.
#[inline]
pub fn try_bind_right<S, R, E, F>(function: F, sequence: S) -> Result<Vec<R::Item>, E>
where
    S: IntoIterator,
    F: FnMut(S::Item) -> Result<R, E>,
    R: IntoIterator,
{
    try_bind_left(sequence, function)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::RefCell;

    #[rstest]
    fn bind_left_flattens_in_order() {
        assert_eq!(bind_left(vec![1, 2], |x| vec![x, x * 10]), vec![1, 10, 2, 20]);
    }

    #[rstest]
    fn bind_left_treats_option_as_zero_or_one() {
        let result = bind_left(vec![1, 2, 3], |x| if x % 2 == 0 { Some(x) } else { None });
        assert_eq!(result, vec![2]);
    }

    #[rstest]
    fn bind_left_empty_input_never_calls_function() {
        let calls = RefCell::new(0);
        let result: Vec<i32> = bind_left(Vec::<i32>::new(), |x| {
            *calls.borrow_mut() += 1;
            vec![x]
        });
        assert!(result.is_empty());
        assert_eq!(calls.into_inner(), 0);
    }

    #[rstest]
    fn bind_left_function_returning_empty_drops_elements() {
        let result: Vec<i32> = bind_left(vec![1, 2, 3], |_| Vec::<i32>::new());
        assert!(result.is_empty());
    }

    #[rstest]
    #[case(vec![])]
    #[case(vec![7])]
    #[case(vec![1, 2, 3, 4])]
    fn bind_right_matches_bind_left(#[case] input: Vec<i32>) {
        let function = |x: i32| (0..x).collect::<Vec<_>>();
        assert_eq!(bind_right(function, input.clone()), bind_left(input, function));
    }

    #[rstest]
    fn try_bind_left_fails_fast_on_second_of_three() {
        let calls = RefCell::new(Vec::new());
        let result: Result<Vec<i32>, String> = try_bind_left(vec![1, 2, 3], |x| {
            calls.borrow_mut().push(x);
            if x == 2 { Err(format!("failed on {x}")) } else { Ok(vec![x]) }
        });
        assert_eq!(result, Err("failed on 2".to_string()));
        assert_eq!(calls.into_inner(), vec![1, 2]);
    }

    #[rstest]
    fn try_bind_left_accepts_optional_results() {
        let result: Result<Vec<u32>, ()> = try_bind_left(["1", "x", "3"], |s| Ok(s.parse::<u32>().ok()));
        assert_eq!(result, Ok(vec![1, 3]));
    }

    #[rstest]
    fn try_bind_right_matches_try_bind_left() {
        let function = |x: i32| if x < 3 { Ok(Some(x)) } else { Err(x) };
        assert_eq!(try_bind_right(function, [1, 2]), try_bind_left([1, 2], function));
        assert_eq!(try_bind_right(function, [1, 5, 9]), Err(5));
    }
}
