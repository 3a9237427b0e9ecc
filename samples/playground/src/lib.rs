//! Playground for the runes sequence combinators.
//!
//! Applies a set of increment functions to a list of values, then binds a
//! JSON array through `constant(None)` and a numeric extraction step.

pub mod config;
pub mod demo;
pub mod error;

pub use config::PlaygroundConfig;
pub use demo::{PlaygroundReport, run};
pub use error::PlaygroundError;
