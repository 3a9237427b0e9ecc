//! Free-function sequence combinators.
//!
//! This module provides the combinators as named generic functions. Every
//! function accepts any [`IntoIterator`] as its input sequence and produces
//! a [`Vec`]:
//!
//! - [`fmap`]: Transform every element
//! - [`ap`]: Apply every function to every value (cartesian, function-major)
//! - [`pure`]: Wrap a single value in a one-element sequence
//! - [`bind_left`], [`bind_right`]: Map each element to a sequence and concatenate
//! - [`compose_left`], [`compose_right`]: Kleisli composition of sequence-producing functions
//!
//! The `try_` variants take functions returning `Result` and stop at the
//! first error. No partial output is ever returned alongside an error, and no
//! element after the failing one is evaluated.
//!
//! A sequence-producing function may return any `IntoIterator`. Returning an
//! `Option<U>` makes `None` contribute no elements and `Some(u)` contribute
//! exactly one.
//!
//! # Evaluation Order
//!
//! All combinators are eager and sequential. Caller functions are invoked in
//! element order, at most once per element (once per function and element
//! pair for [`ap`]), and never in parallel.
//!
//! # Laws
//!
//! - **Functor identity**: `fmap(identity, a) == a`
//! - **Functor composition**: `fmap(g, fmap(f, a)) == fmap(|x| g(f(x)), a)`
//! - **Applicative identity**: `ap(pure(identity), a) == a`
//! - **Left identity**: `bind_left(pure(x), f) == f(x)`
//! - **Right identity**: `bind_left(a, pure) == a`
//! - **Associativity**: `bind_left(bind_left(a, f), g) == bind_left(a, |x| bind_left(f(x), g))`
//!
//! # Examples
//!
//! ```rust
//! use runes::sequence::{bind_left, compose_left, fmap, pure};
//!
//! assert_eq!(fmap(|x: i32| x * 2, [1, 2, 3]), vec![2, 4, 6]);
//! assert_eq!(bind_left(vec![1, 2], |x| vec![x, x * 10]), vec![1, 10, 2, 20]);
//!
//! let divisors = |n: u32| (1..=n).filter(move |d| n % d == 0).collect::<Vec<_>>();
//! let divisors_of_divisors = compose_left(divisors, divisors);
//! assert_eq!(divisors_of_divisors(4), vec![1, 1, 2, 1, 2, 4]);
//!
//! assert_eq!(pure('x'), vec!['x']);
//! ```

mod apply;
mod bind;
mod kleisli;
mod map;

pub use apply::{ap, pure, try_ap};
pub use bind::{bind_left, bind_right, try_bind_left, try_bind_right};
pub use kleisli::{compose_left, compose_right, try_compose_left, try_compose_right};
pub use map::{fmap, try_fmap};
