//! Layer 2: Primitives
//!
//! ## Purpose
//!
//! This layer provides the building blocks shared by every higher layer:
//! the error type, the running-sum accumulators and the lazy sequence views.
//!
//! ## Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Algorithms
//!   ↓
//! Layer 3: Math
//!   ↓
//! Layer 2: Primitives ← You are here
//!   ↓
//! Layer 1: Input
//! ```

/// Naive and compensated running sums.
pub mod accumulator;

/// Error type for all fallible operations.
pub mod errors;

/// Borrowed sequences seen through an elementwise transform.
pub mod view;
