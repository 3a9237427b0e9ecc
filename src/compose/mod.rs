//! Composition utilities for sequence-producing functions.
//!
//! This module provides the small combinators that the sequence laws are
//! stated in, and a macro for chaining sequence-producing functions:
//!
//! - [`identity`]: The identity function - returns its argument unchanged
//! - [`constant`]: Creates a function that always returns the same value
//! - [`kleisli!`]: Compose any number of sequence-producing functions left to right
//!
//! # Examples
//!
//! ```
//! use runes::compose::{constant, identity};
//! use runes::kleisli;
//! use runes::sequence::fmap;
//!
//! assert_eq!(fmap(identity, ['a', 'b']), vec!['a', 'b']);
//!
//! let fan_out = kleisli!(|x: u8| vec![x, x + 1], |x: u8| vec![x; 2]);
//! assert_eq!(fan_out(1), vec![1, 1, 2, 2]);
//!
//! let blank = kleisli!(|x: u8| vec![x], constant::<_, u8>(Vec::<u8>::new()));
//! assert!(blank(9).is_empty());
//! ```
//!
//! # Laws
//!
//! ## Kleisli Composition Laws
//!
//! - **Associativity**: `kleisli!(f, kleisli!(g, h)) == kleisli!(kleisli!(f, g), h)`
//! - **Left Identity**: `kleisli!(pure, f) == f`
//! - **Right Identity**: `kleisli!(f, pure) == f`

mod kleisli_macro;
mod utils;

pub use utils::{constant, identity};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::kleisli;
