//! Correlation orchestrator.
//!
//! ## Purpose
//!
//! This module turns a validated configuration into a correlation result:
//! it checks the inputs, estimates the means, builds the views, dispatches
//! to the selected reducer and assembles the coefficient.
//!
//! ## Design notes
//!
//! * **Configuration only**: The strategy changes throughput and error bound,
//!   never the contract.
//! * **No caching**: Every call recomputes from the inputs.
//! * **Unguarded division**: A zero denominator produces NaN.
//!
//! ## Key concepts
//!
//! * **Two-pass**: Means first, then one three-way pass over deviation views.
//! * **One-pass**: One raw-moment pass over identity views; means and the
//!   coefficient are derived afterwards.
//!
//! ## Invariants
//!
//! * `len(x) == len(y) > 0`, otherwise `InvalidInput`.

// External dependencies
use log::debug;
use num_traits::Float;
use std::fmt::Debug;

// Internal dependencies
use crate::algorithms::kernel::{reduce, Kernel};
use crate::algorithms::moments::RawMoments;
use crate::algorithms::three_way::ThreeWay;
use crate::engine::parallel::reduce_parallel;
use crate::math::mean::mean_with;
use crate::primitives::accumulator::{CompensatedSum, NaiveSum, Summation};
use crate::primitives::errors::CorrelationError;
use crate::primitives::view::{SequenceView, Transform};

// ============================================================================
// Configuration Types
// ============================================================================

/// Reduction strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Plain floating-point sums on the calling thread.
    Naive,
    /// Compensated sums on the calling thread.
    #[default]
    Compensated,
    /// Fork-join reduction across worker threads.
    Parallel,
}

/// Correlation algorithm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Means first, then a three-way pass over the deviations.
    #[default]
    TwoPass,
    /// A single pass over raw moments. Faster, but prone to cancellation
    /// when the data has a large offset relative to its spread.
    OnePass,
}

/// Complete configuration of a correlation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CorrelationConfig {
    /// Reduction strategy.
    pub strategy: Strategy,
    /// Summation used inside each partition by the parallel strategy.
    pub parallel_summation: Summation,
    /// Partition and worker count for the parallel strategy.
    pub parallelism: Option<usize>,
    /// Two-pass or one-pass algorithm.
    pub algorithm: Algorithm,
}

impl CorrelationConfig {
    /// The summation strategy implied by this configuration.
    pub fn summation(&self) -> Summation {
        match self.strategy {
            Strategy::Naive => Summation::Naive,
            Strategy::Compensated => Summation::Compensated,
            Strategy::Parallel => self.parallel_summation,
        }
    }
}

/// Pearson coefficient together with the component means.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrelationResult<T> {
    /// Pearson correlation coefficient; NaN when either variance is zero.
    pub coefficient: T,
    /// Mean of the x sequence.
    pub mean_x: T,
    /// Mean of the y sequence.
    pub mean_y: T,
}

// ============================================================================
// Executor
// ============================================================================

/// Runs correlations for a fixed configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct CorrelationExecutor {
    config: CorrelationConfig,
}

impl CorrelationExecutor {
    /// Create an executor from a configuration.
    pub fn from_config(config: CorrelationConfig) -> Self {
        Self { config }
    }

    /// The configuration this executor runs with.
    pub fn config(&self) -> &CorrelationConfig {
        &self.config
    }

    /// Correlate two sequences.
    pub fn run<T>(&self, x: &[T], y: &[T]) -> Result<CorrelationResult<T>, CorrelationError>
    where
        T: Float + Debug + Send + Sync,
    {
        validate_pair(x, y)?;

        debug!(
            "correlate: n={}, strategy={:?}, algorithm={:?}, summation={:?}",
            x.len(),
            self.config.strategy,
            self.config.algorithm,
            self.config.summation()
        );

        match self.config.algorithm {
            Algorithm::TwoPass => self.two_pass(x, y),
            Algorithm::OnePass => self.one_pass(x, y),
        }
    }

    fn two_pass<T>(&self, x: &[T], y: &[T]) -> Result<CorrelationResult<T>, CorrelationError>
    where
        T: Float + Debug + Send + Sync,
    {
        let summation = self.config.summation();
        let mean_x = mean_with(x, summation)?;
        let mean_y = mean_with(y, summation)?;

        let vx = SequenceView::deviation(x, mean_x);
        let vy = SequenceView::deviation(y, mean_y);

        let sums = match summation {
            Summation::Naive => self.dispatch::<T, ThreeWay<T, NaiveSum<T>>, _, _>(&vx, &vy)?,
            Summation::Compensated => {
                self.dispatch::<T, ThreeWay<T, CompensatedSum<T>>, _, _>(&vx, &vy)?
            }
        };

        Ok(CorrelationResult {
            coefficient: sums.coefficient(),
            mean_x,
            mean_y,
        })
    }

    fn one_pass<T>(&self, x: &[T], y: &[T]) -> Result<CorrelationResult<T>, CorrelationError>
    where
        T: Float + Debug + Send + Sync,
    {
        let vx = SequenceView::identity(x);
        let vy = SequenceView::identity(y);

        let moments = match self.config.summation() {
            Summation::Naive => self.dispatch::<T, RawMoments<T, NaiveSum<T>>, _, _>(&vx, &vy)?,
            Summation::Compensated => {
                self.dispatch::<T, RawMoments<T, CompensatedSum<T>>, _, _>(&vx, &vy)?
            }
        };

        Ok(CorrelationResult {
            coefficient: moments.coefficient(),
            mean_x: moments.mean_x(),
            mean_y: moments.mean_y(),
        })
    }

    fn dispatch<T, K, FX, FY>(
        &self,
        x: &SequenceView<'_, T, FX>,
        y: &SequenceView<'_, T, FY>,
    ) -> Result<K::Output, CorrelationError>
    where
        T: Float + Debug + Send + Sync,
        K: Kernel<T>,
        FX: Transform<T>,
        FY: Transform<T>,
    {
        match self.config.strategy {
            Strategy::Naive | Strategy::Compensated => Ok(reduce::<T, K, FX, FY>(x, y)),
            Strategy::Parallel => reduce_parallel::<T, K, FX, FY>(x, y, self.config.parallelism),
        }
    }
}

/// Check that two sequences have equal, non-zero length.
pub fn validate_pair<T>(x: &[T], y: &[T]) -> Result<(), CorrelationError> {
    if x.len() != y.len() {
        return Err(CorrelationError::mismatched(x.len(), y.len()));
    }
    if x.is_empty() {
        return Err(CorrelationError::zero_length());
    }
    Ok(())
}
