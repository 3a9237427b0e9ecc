//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Vec<_>` directly.
//! [`TypeConstructor`] works around this with a GAT, so a trait method can
//! say "the same sequence, holding a different element type".
//!
//! # Example
//!
//! ```rust
//! use runes::typeclass::TypeConstructor;
//! use std::collections::VecDeque;
//!
//! fn rebuild<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let queue: VecDeque<i32> = VecDeque::from(vec![1, 2, 3]);
//! let empty: VecDeque<String> = rebuild(queue);
//! assert!(empty.is_empty());
//! ```

use std::collections::{LinkedList, VecDeque};

/// A trait representing a type constructor.
///
/// The implementing type is a sequence constructor applied to some element
/// type, for example `Vec<A>` or `VecDeque<A>`.
///
/// # Laws
///
/// 1. **Consistency**: `<F as TypeConstructor>::WithType<F::Inner>` is `F`.
pub trait TypeConstructor {
    /// The element type this constructor is applied to.
    ///
    /// For `Vec<i32>` this is `i32`.
    type Inner;

    /// The same constructor applied to a different element type `B`.
    ///
    /// For `Vec<i32>`, `WithType<String>` is `Vec<String>`. The bound keeps
    /// the result a valid constructor so transformations can be chained.
    type WithType<B>: TypeConstructor<Inner = B>;
}

macro_rules! impl_type_constructor_for_sequence {
    ($($container:ident),+ $(,)?) => {$(
        impl<T> TypeConstructor for $container<T> {
            type Inner = T;
            type WithType<B> = $container<B>;
        }
    )+};
}

impl_type_constructor_for_sequence!(Vec, VecDeque, LinkedList);

#[cfg(feature = "smallvec")]
impl<T, const N: usize> TypeConstructor for smallvec::SmallVec<[T; N]> {
    type Inner = T;
    type WithType<B> = smallvec::SmallVec<[B; N]>;
}
