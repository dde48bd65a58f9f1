//! Error types for correlation and mean estimation.
//!
//! ## Purpose
//!
//! This module defines the single error type returned by every fallible
//! operation in the crate.
//!
//! ## Design notes
//!
//! * **Input errors only**: Errors describe malformed inputs or configuration.
//! * **IEEE-754 passthrough**: A zero denominator is not an error; it yields NaN.
//! * **Fail-fast**: A failed parallel reduction never returns a partial result.
//!
//! ## Non-goals
//!
//! * This module does not classify numerical accuracy problems.

// External dependencies
use thiserror::Error;

/// Errors produced while validating inputs or running a reduction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CorrelationError {
    /// Sequences of different length, zero-length sequences, or non-contiguous buffers.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The mean of an empty sequence was requested.
    #[error("cannot estimate the mean of an empty sequence")]
    EmptyInput,

    /// A configured parallelism of zero.
    #[error("invalid parallelism {0}: at least one partition is required")]
    InvalidParallelism(usize),

    /// A worker of the parallel reduction failed; no partial result is available.
    #[error("parallel reduction aborted: {0}")]
    WorkerFailed(String),
}

impl CorrelationError {
    /// Build the error for two sequences whose lengths differ.
    pub(crate) fn mismatched(x_len: usize, y_len: usize) -> Self {
        CorrelationError::InvalidInput(format!(
            "sequences must have equal length (x has {x_len}, y has {y_len})"
        ))
    }

    /// Build the error for zero-length sequences.
    pub(crate) fn zero_length() -> Self {
        CorrelationError::InvalidInput("sequences must not be empty".to_string())
    }
}
