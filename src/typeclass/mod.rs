//! Type class traits for sequence containers.
//!
//! This module provides the capability traits behind the sequence
//! combinators, implemented for `Vec`, `VecDeque` and `LinkedList` (and
//! `SmallVec` with the `smallvec` feature):
//!
//! - [`Functor`]: Mapping a function over every element
//! - [`Applicative`]: Lifting values and cartesian application of functions
//! - [`Monad`]: Chaining sequence-producing functions with flattening
//!
//! Each method returns the receiver's container kind, so a `VecDeque` stays a
//! `VecDeque` through any chain of operations.
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to name
//! "the same container with a different element type".
//!
//! # Examples
//!
//! ```rust
//! use runes::typeclass::{Applicative, Functor, Monad};
//!
//! let values = vec![1, 2, 3];
//! let doubled: Vec<i32> = values.fmap(|x| x * 2);
//! assert_eq!(doubled, vec![2, 4, 6]);
//!
//! let functions: Vec<fn(i32) -> i32> = vec![|x| x + 1, |x| x - 1];
//! assert_eq!(doubled.apply(functions), vec![3, 5, 7, 1, 3, 5]);
//!
//! let pairs = vec![1, 2].flat_map(|x| vec![x; 2]);
//! assert_eq!(pairs, vec![1, 1, 2, 2]);
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;
#[cfg(feature = "smallvec")]
mod small_vec;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;

static_assertions::assert_impl_all!(Vec<i32>: Functor, Applicative, Monad);
static_assertions::assert_impl_all!(std::collections::VecDeque<String>: Functor, Applicative, Monad);
static_assertions::assert_impl_all!(std::collections::LinkedList<()>: Functor, Applicative, Monad);
