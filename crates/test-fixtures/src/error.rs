//! Error types for fixture generation.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("reference spec {spec} points at user index {index}, but only {len} users were given")]
    IndexOutOfRange {
        /// Position of the offending spec in the input sequence.
        spec: usize,
        index: usize,
        len: usize,
    },

    #[error("user at index {index} has no id; references require client users")]
    MissingId { index: usize },
}
