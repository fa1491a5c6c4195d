//! Error-handling module for the crate

use thiserror::Error;

/// Error-Collection for all the possible Errors occurring in this crate
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A start-position-only permutation check ran out of elements in the
    /// second sequence before covering the first sequence's length
    #[error("second sequence ended after {available} elements, but {required} were required")]
    SecondSequenceExhausted {
        /// Number of elements the check needed from the second sequence
        required: usize,
        /// Number of elements the second sequence actually held past the start position
        available: usize,
    },
}
