//! Layer 4: Algorithms
//!
//! ## Purpose
//!
//! This layer provides the reduction kernels: single-pass folds over two
//! views in lockstep that produce the sums a correlation coefficient is
//! assembled from.
//!
//! ## Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Algorithms ← You are here
//!   ↓
//! Layer 3: Math
//!   ↓
//! Layer 2: Primitives
//!   ↓
//! Layer 1: Input
//! ```

/// The kernel abstraction and the sequential lockstep fold.
pub mod kernel;

/// Raw moments for the one-pass algorithm.
pub mod moments;

/// Three pairwise sums for the two-pass algorithm.
pub mod three_way;
