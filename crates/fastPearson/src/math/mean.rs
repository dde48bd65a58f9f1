//! Arithmetic mean estimation.
//!
//! ## Purpose
//!
//! This module computes the arithmetic mean of a sequence with either plain
//! or compensated summation.
//!
//! ## Design notes
//!
//! * **Strategy-independent contract**: The summation strategy changes the
//!   error bound only; both return `sum / n`.
//! * **Exact singletons**: A one-element sequence returns that element.
//!
//! ## Invariants
//!
//! * The input must be non-empty, otherwise `EmptyInput` is returned.

// External dependencies
use num_traits::Float;
use std::fmt::Debug;

// Internal dependencies
use crate::primitives::accumulator::{Accumulator, CompensatedSum, NaiveSum, Summation};
use crate::primitives::errors::CorrelationError;

/// Sum a sequence of values with the given accumulator.
pub fn sum_with<T, A, I>(values: I) -> T
where
    T: Float,
    A: Accumulator<T>,
    I: IntoIterator<Item = T>,
{
    let mut acc = A::default();
    for v in values {
        acc.ingest(v);
    }
    acc.extract()
}

/// Arithmetic mean of `data` using the selected summation strategy.
pub fn mean_with<T>(data: &[T], summation: Summation) -> Result<T, CorrelationError>
where
    T: Float + Debug + Send,
{
    if data.is_empty() {
        return Err(CorrelationError::EmptyInput);
    }

    let total = match summation {
        Summation::Naive => sum_with::<T, NaiveSum<T>, _>(data.iter().copied()),
        Summation::Compensated => sum_with::<T, CompensatedSum<T>, _>(data.iter().copied()),
    };

    let n = T::from(data.len()).ok_or_else(|| {
        CorrelationError::InvalidInput(format!(
            "sequence length {} is not representable",
            data.len()
        ))
    })?;
    Ok(total / n)
}
