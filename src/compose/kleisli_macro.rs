//! The `kleisli!` macro for chaining sequence-producing functions.
//!
//! This module provides the [`kleisli!`] macro which composes any number of
//! sequence-producing functions from left to right.

/// Composes sequence-producing functions from left to right.
///
/// `kleisli!(f, g, h)` is `compose_left(compose_left(f, g), h)`: the input
/// goes through `f`, every result goes through `g`, and every result of that
/// goes through `h`, with all results concatenated in order.
///
/// # Laws
///
/// - **Associativity**: `kleisli!(kleisli!(f, g), h) == kleisli!(f, kleisli!(g, h))`
/// - **Left Identity**: `kleisli!(pure, f) == f`
/// - **Right Identity**: `kleisli!(f, pure) == f`
///
/// # Syntax
///
/// - `kleisli!(f)` - Returns `f` unchanged
/// - `kleisli!(f, g)` - Returns `compose_left(f, g)`
/// - `kleisli!(f, g, h, ...)` - Folds `compose_left` over the remaining functions
///
/// # Type Requirements
///
/// Each function must implement [`Fn`] and return an [`IntoIterator`] whose
/// items are accepted by the next function. `Vec` and `Option` results can be
/// mixed freely.
///
/// # Examples
///
/// ## Chaining three steps
///
/// ```
/// use runes::kleisli;
///
/// let digits = |s: &str| s.chars().collect::<Vec<_>>();
/// let value = |c: char| c.to_digit(10);
/// let both_signs = |d: u32| {
///     let d = i64::from(d);
///     vec![d, -d]
/// };
///
/// let signed_digits = kleisli!(digits, value, both_signs);
/// assert_eq!(signed_digits("1x2"), vec![1, -1, 2, -2]);
/// ```
///
/// ## Verifying associativity
///
/// ```
/// use runes::kleisli;
///
/// let f = |x: i32| vec![x, x + 1];
/// let g = |x: i32| vec![x * 10];
/// let h = |x: i32| (x % 20 == 0).then_some(x);
///
/// let left = kleisli!(kleisli!(f, g), h);
/// let right = kleisli!(f, kleisli!(g, h));
///
/// assert_eq!(left(1), right(1));
/// assert_eq!(left(1), vec![20]);
/// ```
#[macro_export]
macro_rules! kleisli {
    // Single function: returned as-is
    ($function:expr $(,)?) => {
        $function
    };

    // Two functions: kleisli!(f, g)(x) = bind_left(f(x), g)
    ($first_function:expr, $second_function:expr $(,)?) => {
        $crate::sequence::compose_left($first_function, $second_function)
    };

    // Three or more functions: fold from the left
    // kleisli!(f, g, h, ...) = kleisli!(kleisli!(f, g), h, ...)
    ($first_function:expr, $second_function:expr, $($remaining_functions:expr),+ $(,)?) => {
        $crate::kleisli!(
            $crate::sequence::compose_left($first_function, $second_function),
            $($remaining_functions),+
        )
    };
}
