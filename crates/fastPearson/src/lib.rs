//! # fastPearson
//!
//! Pearson correlation over large sequences with interchangeable reductions.
//!
//! Naive summation silently loses precision as sequences grow. This crate
//! computes the Pearson correlation coefficient (and both means) with a
//! choice of reduction strategy that trades accuracy for throughput:
//!
//! * **Naive**: plain floating-point sums on the calling thread.
//! * **Compensated** (default): two-sum compensated sums, error independent of `n`.
//! * **Parallel**: rayon fork-join over contiguous partitions, merged in index order.
//!
//! ## Quick start
//!
//! ```
//! use fastPearson::prelude::*;
//!
//! let x = vec![43.0_f64, 21.0, 25.0, 42.0, 57.0, 59.0];
//! let y = vec![99.0, 65.0, 79.0, 75.0, 87.0, 81.0];
//!
//! let r = correlate(&x, &y, Strategy::Compensated)?;
//! assert!((r.coefficient - 0.529809).abs() < 1e-6);
//! assert_eq!(r.mean_y, 81.0);
//!
//! let parallel = Correlation::new()
//!     .strategy(Strategy::Parallel)
//!     .parallelism(4)
//!     .build()?
//!     .correlate(&x, &y)?;
//! assert!((parallel.coefficient - r.coefficient).abs() < 1e-12);
//! # Ok::<(), CorrelationError>(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Layer 6: API          builder, strategies, free functions
//!   ↓
//! Layer 5: Engine       orchestrator, fork-join reducer
//!   ↓
//! Layer 4: Algorithms   three-way and raw-moment kernels
//!   ↓
//! Layer 3: Math         mean estimator
//!   ↓
//! Layer 2: Primitives   errors, accumulators, sequence views
//!   ↓
//! Layer 1: Input        slice / Vec / ndarray inputs
//! ```
//!
//! ## Error handling
//!
//! Malformed inputs return [`CorrelationError`](prelude::CorrelationError).
//! A zero variance is not an error: the coefficient is NaN, per IEEE-754.

#![allow(non_snake_case)]
#![warn(missing_docs)]

// Layer 1: Input
pub mod input;

// Layer 2: Primitives
pub mod primitives;

// Layer 3: Math
pub mod math;

// Layer 4: Algorithms
pub mod algorithms;

// Layer 5: Engine
pub mod engine;

// Layer 6: API
pub mod api;

/// Standard fastPearson prelude.
pub mod prelude {
    pub use crate::api::{
        correlate, mean, Algorithm, Correlation, CorrelationBuilder, CorrelationConfig,
        CorrelationError, CorrelationResult, Correlator, Strategy, Summation,
    };
    pub use crate::input::CorrelationInput;
}
