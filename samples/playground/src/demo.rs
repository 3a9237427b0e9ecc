//! The playground session.
//!
//! Each step exercises one combinator on the configured inputs and records
//! its output in a [`PlaygroundReport`].

use runes::compose::constant;
use runes::sequence::{ap, bind_left, fmap, try_bind_left};
use serde::Serialize;
use serde_json::Value;

use crate::config::PlaygroundConfig;
use crate::error::PlaygroundError;

/// Outputs of one playground run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlaygroundReport {
    /// Every increment function applied to every value, function-major.
    pub applied: Vec<Option<i32>>,
    /// `constant(None)` mapped over the JSON elements.
    pub mapped_to_none: Vec<Option<i32>>,
    /// `constant(None)` bound over the JSON elements.
    pub bound_to_none: Vec<i32>,
    /// The JSON elements read as numbers.
    pub numbers: Vec<i64>,
}

/// Builds `count` functions that each add `offset`, yielding `None` on overflow.
pub fn increments(count: usize, offset: i32) -> Vec<impl Fn(i32) -> Option<i32>> {
    (0..count)
        .map(|_| move |value: i32| value.checked_add(offset))
        .collect()
}

/// Parses `json` and returns its elements.
///
/// # Errors
///
/// Returns [`PlaygroundError::InvalidJson`] if the text does not parse and
/// [`PlaygroundError::NotAnArray`] if it parses to anything but an array.
pub fn parse_elements(json: &str) -> Result<Vec<Value>, PlaygroundError> {
    match serde_json::from_str(json)? {
        Value::Array(elements) => Ok(elements),
        other => Err(PlaygroundError::NotAnArray(other.to_string())),
    }
}

/// Reads every element as an integer, stopping at the first one that is not.
///
/// # Errors
///
/// Returns [`PlaygroundError::NotANumber`] naming the first offending element.
pub fn extract_numbers(elements: Vec<Value>) -> Result<Vec<i64>, PlaygroundError> {
    try_bind_left(elements.into_iter().enumerate(), |(index, element)| {
        element
            .as_i64()
            .map(Some)
            .ok_or_else(|| PlaygroundError::NotANumber {
                index,
                found: element.to_string(),
            })
    })
}

/// Runs every step of the playground.
///
/// # Errors
///
/// Returns an error if the configured JSON is malformed, is not an array, or
/// holds a non-integer element.
pub fn run(config: &PlaygroundConfig) -> Result<PlaygroundReport, PlaygroundError> {
    let applied = ap(increments(config.functions, config.offset), config.values.clone());
    tracing::debug!(count = applied.len(), "applied increment functions");

    let elements = parse_elements(&config.json)?;
    tracing::debug!(count = elements.len(), "parsed JSON elements");

    let mapped_to_none = fmap(constant::<_, Value>(None::<i32>), elements.clone());
    let bound_to_none = bind_left(elements.clone(), constant::<_, Value>(None::<i32>));
    let numbers = extract_numbers(elements)?;

    Ok(PlaygroundReport {
        applied,
        mapped_to_none,
        bound_to_none,
        numbers,
    })
}
