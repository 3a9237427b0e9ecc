//! Playground error types.

use thiserror::Error;

/// Errors raised while running the playground.
///
/// # Examples
///
/// ```
/// use playground::error::PlaygroundError;
///
/// let error = PlaygroundError::NotANumber { index: 2, found: "\"x\"".to_string() };
/// assert_eq!(error.to_string(), "element 2 is not a number: \"x\"");
/// ```
#[derive(Debug, Error)]
pub enum PlaygroundError {
    /// The `--json` argument is not valid JSON.
    #[error("invalid JSON input: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The `--json` argument is valid JSON but not an array.
    #[error("expected a JSON array, found {0}")]
    NotAnArray(String),

    /// An array element could not be read as a number.
    #[error("element {index} is not a number: {found}")]
    NotANumber {
        /// Position of the element in the array.
        index: usize,
        /// The offending element, rendered as JSON.
        found: String,
    },
}
