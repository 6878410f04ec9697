//! # Number parsing
//!
//! Reading indices, counts and values from tokens.
use crate::io::error::{ParseError, ParseResult};

/// Read a non-negative integer, such as a dimension or an entry count.
pub(super) fn parse_count(text: &str) -> ParseResult<usize> {
    text.parse().map_err(|error| ParseError::wrap_other(
        error,
        format!("Failed to parse \"{}\" as a non-negative integer", text),
    ))
}

/// Read a 1-based index and convert it to a 0-based one.
///
/// # Arguments
///
/// * `text`: Token to read.
/// * `bound`: Largest allowed 1-based index.
///
/// # Errors
///
/// If the text is not an integer, or when it is not in `1..=bound`.
pub(super) fn parse_index(text: &str, bound: usize) -> ParseResult<usize> {
    let index = parse_count(text)?;

    if (1..=bound).contains(&index) {
        Ok(index - 1)
    } else {
        Err(ParseError::new(format!("Index {} is not in the range [1, {}]", index, bound)))
    }
}

/// Read a value.
pub(super) fn parse_value(text: &str) -> ParseResult<f64> {
    text.parse().map_err(|error| ParseError::wrap_other(
        error,
        format!("Failed to parse value text \"{}\" into f64", text),
    ))
}
