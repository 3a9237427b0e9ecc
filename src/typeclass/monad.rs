//! Monad type class - chaining sequence-producing computations.
//!
//! This module provides the `Monad` trait, which extends `Applicative` with
//! `flat_map`: each element is turned into a sequence of results and the
//! results are concatenated in order. This is the list monad, where every
//! step may yield zero, one or many values.
//!
//! A step may return any [`IntoIterator`], so returning `Option<B>` treats
//! `None` as contributing nothing and `Some(b)` as contributing `b`.
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use runes::typeclass::Monad;
//!
//! let numbers = vec![1, 2, 3];
//! let expanded = numbers.flat_map(|n| vec![n, n * 10]);
//! assert_eq!(expanded, vec![1, 10, 2, 20, 3, 30]);
//!
//! let evens = vec![1, 2, 3, 4].flat_map(|n| (n % 2 == 0).then_some(n));
//! assert_eq!(evens, vec![2, 4]);
//! ```

use std::collections::{LinkedList, VecDeque};

use super::applicative::Applicative;

/// A type class for sequences that support flattening bind.
///
/// # Laws
///
/// ## Left Identity Law
///
/// ```text
/// Self::pure(a).flat_map(f) == f(a)
/// ```
///
/// ## Right Identity Law
///
/// ```text
/// m.flat_map(Self::pure) == m
/// ```
///
/// ## Associativity Law
///
/// ```text
/// m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
/// ```
pub trait Monad: Applicative {
    /// Applies `function` to each element and concatenates the results in order.
    ///
    /// # Arguments
    ///
    /// * `function` - A function returning zero or more results per element
    ///
    /// # Examples
    ///
    /// ```rust
    /// use runes::typeclass::Monad;
    ///
    /// let words = vec!["ab", "", "c"];
    /// let letters = words.flat_map(|w| w.chars().collect::<Vec<_>>());
    /// assert_eq!(letters, vec!['a', 'b', 'c']);
    /// ```
    fn flat_map<B, R, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> R,
        R: IntoIterator<Item = B>;

    /// Alias for `flat_map` to match Rust's naming conventions.
    #[inline]
    fn and_then<B, R, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> R,
        R: IntoIterator<Item = B>,
    {
        self.flat_map(function)
    }

    /// Fallible form of [`flat_map`](Monad::flat_map).
    ///
    /// `function` is not invoked on any element after the first failure, and
    /// the results of earlier elements are discarded.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use runes::typeclass::Monad;
    ///
    /// let result: Result<Vec<i32>, String> = vec![1, 2, 3].try_flat_map(|n| {
    ///     if n < 3 { Ok(vec![n; 2]) } else { Err(format!("too large: {n}")) }
    /// });
    /// assert_eq!(result, Err("too large: 3".to_string()));
    /// ```
    fn try_flat_map<B, R, E, F>(self, function: F) -> Result<Self::WithType<B>, E>
    where
        F: FnMut(Self::Inner) -> Result<R, E>,
        R: IntoIterator<Item = B>;

    /// Flattens a nested sequence one level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use runes::typeclass::Monad;
    ///
    /// let nested = vec![vec![1, 2], vec![], vec![3]];
    /// let flat: Vec<i32> = nested.flatten();
    /// assert_eq!(flat, vec![1, 2, 3]);
    /// ```
    #[inline]
    fn flatten<B>(self) -> Self::WithType<B>
    where
        Self::Inner: IntoIterator<Item = B>,
    {
        self.flat_map(std::convert::identity)
    }
}

macro_rules! impl_monad_for_sequence {
    ($($container:ident),+ $(,)?) => {$(
        impl<A> Monad for $container<A> {
            #[inline]
            fn flat_map<B, R, F>(self, function: F) -> $container<B>
            where
                F: FnMut(A) -> R,
                R: IntoIterator<Item = B>,
            {
                self.into_iter().flat_map(function).collect()
            }

            fn try_flat_map<B, R, E, F>(self, mut function: F) -> Result<$container<B>, E>
            where
                F: FnMut(A) -> Result<R, E>,
                R: IntoIterator<Item = B>,
            {
                let mut result = $container::new();
                for element in self {
                    result.extend(function(element)?);
                }
                Ok(result)
            }
        }
    )+};
}

impl_monad_for_sequence!(Vec, VecDeque, LinkedList);
