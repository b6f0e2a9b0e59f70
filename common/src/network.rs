pub mod broadcast;
pub mod mac;
pub mod target;

use thiserror::Error;

/// A per-item parse failure.
///
/// Keeps the raw input so a bad line in a large list file can be reported
/// verbatim. One malformed entry costs one of these, never the batch.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("could not parse [{input}]: {reason}")]
pub struct ParseError {
    pub input: String,
    pub reason: String,
}

impl ParseError {
    pub fn new(input: &str, reason: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}
