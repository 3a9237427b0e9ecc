//! # runes
//!
//! Functor, applicative and monad combinators over finite ordered sequences.
//!
//! ## Overview
//!
//! The crate offers two surfaces over the same semantics:
//!
//! - **Sequence Combinators**: named free functions ([`fmap`], [`ap`],
//!   [`bind_left`], [`bind_right`], [`compose_left`], [`compose_right`],
//!   [`pure`]) accepting any [`IntoIterator`] and producing a [`Vec`]
//! - **Type Classes**: [`Functor`], [`Applicative`] and [`Monad`] implemented
//!   for the standard ordered collections, keeping the receiver's container kind
//! - **Function Composition**: [`identity`], [`constant`] and the [`kleisli!`] macro
//!
//! Every combinator evaluates eagerly, in element order, and invokes each
//! caller-supplied function at most once per element. Fallible transforms go
//! through the `try_` variants, which stop at the first error and discard any
//! partial output.
//!
//! [`fmap`]: crate::sequence::fmap
//! [`ap`]: crate::sequence::ap
//! [`bind_left`]: crate::sequence::bind_left
//! [`bind_right`]: crate::sequence::bind_right
//! [`compose_left`]: crate::sequence::compose_left
//! [`compose_right`]: crate::sequence::compose_right
//! [`pure`]: crate::sequence::pure
//! [`Functor`]: crate::typeclass::Functor
//! [`Applicative`]: crate::typeclass::Applicative
//! [`Monad`]: crate::typeclass::Monad
//! [`identity`]: crate::compose::identity
//! [`constant`]: crate::compose::constant
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Applicative, Monad)
//! - `sequence`: Free sequence combinators
//! - `compose`: Composition helpers and the `kleisli!` macro
//! - `smallvec`: Type class implementations for `SmallVec`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use runes::prelude::*;
//!
//! let functions: Vec<fn(i32) -> i32> = vec![|x| x + 1, |x| x * 10];
//! assert_eq!(ap(functions, vec![1, 2]), vec![2, 3, 10, 20]);
//!
//! let halves = bind_left(vec![1, 2, 3, 4], |n: i32| (n % 2 == 0).then_some(n / 2));
//! assert_eq!(halves, vec![1, 2]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used functions, types and traits.
///
/// # Usage
///
/// ```rust
/// use runes::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "compose")]
pub mod compose;
