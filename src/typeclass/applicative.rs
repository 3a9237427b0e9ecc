//! Applicative type class - applying sequences of functions to sequences of values.
//!
//! This module provides the `Applicative` trait, which extends `Functor` with
//! the ability to:
//!
//! - Lift a single value into a one-element sequence (`pure`)
//! - Apply a sequence of functions to every element (`apply`)
//! - Combine two sequences element by element across all pairs (`map2`, `product`)
//!
//! Application is a full cartesian expansion, never a zip. For functions
//! `[f0, f1]` and values `[x0, x1]` the result is
//! `[f0(x0), f0(x1), f1(x0), f1(x1)]`.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! v.apply(pure(|x| x)) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(x).apply(pure(f)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! pure(y).apply(u) == u.fmap(|f| f(y))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use runes::typeclass::Applicative;
//!
//! let values = vec![1, 2];
//! let functions: Vec<fn(i32) -> i32> = vec![|x| x + 1, |x| x * 10];
//! assert_eq!(values.apply(functions), vec![2, 3, 10, 20]);
//!
//! let lifted: Vec<&str> = Vec::<()>::pure("only");
//! assert_eq!(lifted, vec!["only"]);
//! ```

use std::collections::{LinkedList, VecDeque};

use super::functor::Functor;

/// A type class for sequences that support lifting values and cartesian application.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// v.apply(pure(|x| x)) == v
/// ```
///
/// ## Homomorphism Law
///
/// ```text
/// pure(x).apply(pure(f)) == pure(f(x))
/// ```
///
/// ## Interchange Law
///
/// ```text
/// pure(y).apply(u) == u.fmap(|f| f(y))
/// ```
pub trait Applicative: Functor {
    /// Lifts a value into a one-element sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use runes::typeclass::Applicative;
    /// use std::collections::VecDeque;
    ///
    /// let x: VecDeque<i32> = VecDeque::<()>::pure(42);
    /// assert_eq!(x, VecDeque::from(vec![42]));
    /// ```
    fn pure<B>(value: B) -> Self::WithType<B>;

    /// Applies each function in `functions` to every element of `self`.
    ///
    /// The outer loop runs over the functions, the inner loop over the
    /// elements, both front to back. The result holds
    /// `functions.len() * self.len()` elements. Elements are cloned once per
    /// function.
    ///
    /// # Arguments
    ///
    /// * `functions` - The functions to apply, in order
    ///
    /// # Examples
    ///
    /// ```rust
    /// use runes::typeclass::Applicative;
    ///
    /// let functions: Vec<Box<dyn Fn(i32) -> String>> = vec![
    ///     Box::new(|x: i32| format!("a{x}")),
    ///     Box::new(|x: i32| format!("b{x}")),
    /// ];
    /// assert_eq!(vec![1, 2].apply(functions), vec!["a1", "a2", "b1", "b2"]);
    /// ```
    fn apply<B, F, Functions>(self, functions: Functions) -> Self::WithType<B>
    where
        Self::Inner: Clone,
        Functions: IntoIterator<Item = F>,
        F: FnMut(Self::Inner) -> B;

    /// Fallible form of [`apply`](Applicative::apply).
    ///
    /// Evaluation follows the same order and stops at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by any of the functions.
    fn try_apply<B, E, F, Functions>(self, functions: Functions) -> Result<Self::WithType<B>, E>
    where
        Self::Inner: Clone,
        Functions: IntoIterator<Item = F>,
        F: FnMut(Self::Inner) -> Result<B, E>;

    /// Combines every element of `self` with every element of `other`.
    ///
    /// The outer loop runs over `self`, the inner loop over `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use runes::typeclass::Applicative;
    ///
    /// let sums = vec![1, 2].map2(vec![10, 20], |x, y| x + y);
    /// assert_eq!(sums, vec![11, 21, 12, 22]);
    /// ```
    fn map2<B, C, F>(self, other: Self::WithType<B>, function: F) -> Self::WithType<C>
    where
        Self::Inner: Clone,
        B: Clone,
        F: FnMut(Self::Inner, B) -> C;

    /// Pairs every element of `self` with every element of `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use runes::typeclass::Applicative;
    ///
    /// let pairs = vec![1, 2].product(vec!['a', 'b']);
    /// assert_eq!(pairs, vec![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]);
    /// ```
    #[inline]
    fn product<B>(self, other: Self::WithType<B>) -> Self::WithType<(Self::Inner, B)>
    where
        Self::Inner: Clone,
        B: Clone,
    {
        self.map2(other, |a, b| (a, b))
    }
}

macro_rules! impl_applicative_for_sequence {
    ($($container:ident),+ $(,)?) => {$(
        impl<A> Applicative for $container<A> {
            #[inline]
            fn pure<B>(value: B) -> $container<B> {
                std::iter::once(value).collect()
            }

            #[inline]
            fn apply<B, F, Functions>(self, functions: Functions) -> $container<B>
            where
                A: Clone,
                Functions: IntoIterator<Item = F>,
                F: FnMut(A) -> B,
            {
                let values = &self;
                functions
                    .into_iter()
                    .flat_map(move |mut function| {
                        values.iter().map(move |value| function(value.clone()))
                    })
                    .collect()
            }

            #[inline]
            fn try_apply<B, E, F, Functions>(self, functions: Functions) -> Result<$container<B>, E>
            where
                A: Clone,
                Functions: IntoIterator<Item = F>,
                F: FnMut(A) -> Result<B, E>,
            {
                let values = &self;
                functions
                    .into_iter()
                    .flat_map(move |mut function| {
                        values.iter().map(move |value| function(value.clone()))
                    })
                    .collect()
            }

            #[inline]
            fn map2<B, C, F>(self, other: $container<B>, mut function: F) -> $container<C>
            where
                A: Clone,
                B: Clone,
                F: FnMut(A, B) -> C,
            {
                let mut result = $container::new();
                for a in &self {
                    result.extend(other.iter().map(|b| function(a.clone(), b.clone())));
                }
                result
            }
        }
    )+};
}

impl_applicative_for_sequence!(Vec, VecDeque, LinkedList);
