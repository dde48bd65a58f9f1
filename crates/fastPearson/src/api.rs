//! High-level API for Pearson correlation.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: a fluent builder for
//! configuring a reusable correlator, and the free functions [`correlate`]
//! and [`mean`] for one-off calls.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Configuration is checked when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Strategies**: Naive, Compensated (default) and Parallel reductions.
//! * **Algorithms**: Two-pass (default) and one-pass.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`CorrelationBuilder`] via `Correlation::new()`.
//! 2. Chain configuration methods (`.strategy()`, `.parallelism()`, etc.).
//! 3. Call `.build()` and use the resulting [`Correlator`].

// External dependencies
use num_traits::Float;
use std::fmt::Debug;

// Internal dependencies
use crate::engine::executor::CorrelationExecutor;
use crate::input::CorrelationInput;
use crate::math::mean::mean_with;

// Publicly re-exported types
pub use crate::engine::executor::{Algorithm, CorrelationConfig, CorrelationResult, Strategy};
pub use crate::primitives::accumulator::Summation;
pub use crate::primitives::errors::CorrelationError;

// ============================================================================
// Builder
// ============================================================================

/// Entry point for building a [`Correlator`].
#[derive(Debug, Clone, Copy)]
pub struct Correlation;

impl Correlation {
    /// Start a builder with default parameters.
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> CorrelationBuilder {
        CorrelationBuilder::default()
    }
}

/// Builder for a [`Correlator`].
///
/// # Defaults
///
/// * strategy: `Strategy::Compensated`
/// * parallel_summation: `Summation::Compensated`
/// * parallelism: hardware-derived
/// * algorithm: `Algorithm::TwoPass`
#[derive(Debug, Clone, Copy, Default)]
pub struct CorrelationBuilder {
    config: CorrelationConfig,
}

impl CorrelationBuilder {
    /// Set the reduction strategy.
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    /// Shorthand for `Strategy::Parallel` (true) or `Strategy::Compensated` (false).
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config.strategy = if parallel {
            Strategy::Parallel
        } else {
            Strategy::Compensated
        };
        self
    }

    /// Set the summation used inside each partition of the parallel strategy.
    pub fn parallel_summation(mut self, summation: Summation) -> Self {
        self.config.parallel_summation = summation;
        self
    }

    /// Fix the number of partitions and worker threads for the parallel strategy.
    pub fn parallelism(mut self, parallelism: usize) -> Self {
        self.config.parallelism = Some(parallelism);
        self
    }

    /// Set the correlation algorithm.
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.config.algorithm = algorithm;
        self
    }

    /// Validate the configuration and build the correlator.
    pub fn build(self) -> Result<Correlator, CorrelationError> {
        if let Some(0) = self.config.parallelism {
            return Err(CorrelationError::InvalidParallelism(0));
        }
        Ok(Correlator {
            executor: CorrelationExecutor::from_config(self.config),
        })
    }
}

// ============================================================================
// Correlator
// ============================================================================

/// A validated, reusable correlation configuration.
#[derive(Debug, Clone, Copy)]
pub struct Correlator {
    executor: CorrelationExecutor,
}

impl Correlator {
    /// The configuration this correlator runs with.
    pub fn config(&self) -> &CorrelationConfig {
        self.executor.config()
    }

    /// Correlate two equal-length, non-empty sequences.
    pub fn correlate<T, I1, I2>(
        &self,
        x: &I1,
        y: &I2,
    ) -> Result<CorrelationResult<T>, CorrelationError>
    where
        T: Float + Debug + Send + Sync,
        I1: CorrelationInput<T> + ?Sized,
        I2: CorrelationInput<T> + ?Sized,
    {
        let x_slice = x.as_sequence()?;
        let y_slice = y.as_sequence()?;
        self.executor.run(x_slice, y_slice)
    }

    /// Mean of a non-empty sequence, using this correlator's summation.
    pub fn mean<T, I>(&self, data: &I) -> Result<T, CorrelationError>
    where
        T: Float + Debug + Send,
        I: CorrelationInput<T> + ?Sized,
    {
        mean_with(data.as_sequence()?, self.config().summation())
    }
}

// ============================================================================
// Free Functions
// ============================================================================

/// Correlate two sequences with the given strategy and default settings.
pub fn correlate<T, I1, I2>(
    x: &I1,
    y: &I2,
    strategy: Strategy,
) -> Result<CorrelationResult<T>, CorrelationError>
where
    T: Float + Debug + Send + Sync,
    I1: CorrelationInput<T> + ?Sized,
    I2: CorrelationInput<T> + ?Sized,
{
    Correlation::new().strategy(strategy).build()?.correlate(x, y)
}

/// Compensated mean of a non-empty sequence.
pub fn mean<T, I>(data: &I) -> Result<T, CorrelationError>
where
    T: Float + Debug + Send,
    I: CorrelationInput<T> + ?Sized,
{
    mean_with(data.as_sequence()?, Summation::Compensated)
}
