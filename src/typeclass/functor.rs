//! Functor type class - mapping over sequence elements.
//!
//! This module provides the `Functor` trait, which represents sequences that
//! can have a function applied to every element while preserving length and
//! order.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! Mapping the identity function returns an equivalent sequence:
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! Mapping two functions in sequence equals mapping their composition:
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use runes::typeclass::Functor;
//! use std::collections::VecDeque;
//!
//! let numbers = vec![1, 2, 3];
//! let labels: Vec<String> = numbers.fmap(|n| n.to_string());
//! assert_eq!(labels, vec!["1", "2", "3"]);
//!
//! // The container kind is preserved
//! let queue = VecDeque::from(vec![1, 2, 3]);
//! let doubled: VecDeque<i32> = queue.fmap(|n| n * 2);
//! assert_eq!(doubled, VecDeque::from(vec![2, 4, 6]));
//! ```

use std::collections::{LinkedList, VecDeque};

use super::higher::TypeConstructor;

/// A type class for sequences that can have a function mapped over their elements.
///
/// The function is invoked exactly once per element, front to back. The
/// result has the same length and the same container kind as the receiver.
///
/// # Laws
///
/// ## Identity Law
///
/// ```text
/// fa.fmap(|x| x) == fa
/// ```
///
/// ## Composition Law
///
/// ```text
/// fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
/// ```
pub trait Functor: TypeConstructor + Sized {
    /// Applies a function to every element, in order.
    ///
    /// # Arguments
    ///
    /// * `function` - A function that transforms one element
    ///
    /// # Returns
    ///
    /// A new sequence with the transformed elements
    ///
    /// # Examples
    ///
    /// ```rust
    /// use runes::typeclass::Functor;
    ///
    /// let v = vec![1, 2, 3];
    /// let result: Vec<i32> = v.fmap(|x| x + 1);
    /// assert_eq!(result, vec![2, 3, 4]);
    /// ```
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Applies a fallible function to every element, stopping at the first error.
    ///
    /// Elements after the failing one are never passed to `function`, and the
    /// results gathered so far are dropped.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use runes::typeclass::Functor;
    ///
    /// let parsed: Result<Vec<i32>, _> = vec!["1", "2"].try_fmap(str::parse::<i32>);
    /// assert_eq!(parsed, Ok(vec![1, 2]));
    ///
    /// let failed: Result<Vec<i32>, _> = vec!["1", "x", "3"].try_fmap(str::parse::<i32>);
    /// assert!(failed.is_err());
    /// ```
    fn try_fmap<B, E, F>(self, function: F) -> Result<Self::WithType<B>, E>
    where
        F: FnMut(Self::Inner) -> Result<B, E>;

    /// Applies a function to a reference of every element.
    ///
    /// Useful when the sequence is still needed afterwards or its elements
    /// are not `Clone`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use runes::typeclass::Functor;
    ///
    /// let words = vec!["alpha".to_string(), "be".to_string()];
    /// let lengths: Vec<usize> = words.fmap_ref(|s| s.len());
    /// assert_eq!(lengths, vec![5, 2]);
    /// assert_eq!(words.len(), 2);
    /// ```
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;
}

macro_rules! impl_functor_for_sequence {
    ($($container:ident),+ $(,)?) => {$(
        impl<T> Functor for $container<T> {
            #[inline]
            fn fmap<B, F>(self, function: F) -> $container<B>
            where
                F: FnMut(T) -> B,
            {
                self.into_iter().map(function).collect()
            }

            #[inline]
            fn try_fmap<B, E, F>(self, function: F) -> Result<$container<B>, E>
            where
                F: FnMut(T) -> Result<B, E>,
            {
                self.into_iter().map(function).collect()
            }

            #[inline]
            fn fmap_ref<B, F>(&self, function: F) -> $container<B>
            where
                F: FnMut(&T) -> B,
            {
                self.iter().map(function).collect()
            }
        }
    )+};
}

impl_functor_for_sequence!(Vec, VecDeque, LinkedList);
