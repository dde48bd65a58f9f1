//! Layer 5: Engine
//!
//! ## Purpose
//!
//! This layer runs reductions. It provides the orchestrator that validates
//! inputs, estimates means, builds views and dispatches to a reducer, and the
//! rayon-based fork-join reducer used by the parallel strategy.
//!
//! ## Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Algorithms
//!   ↓
//! Layer 3: Math
//!   ↓
//! Layer 2: Primitives
//!   ↓
//! Layer 1: Input
//! ```

/// Correlation orchestrator and strategy dispatch.
pub mod executor;

/// Fork-join reduction over contiguous partitions.
pub mod parallel;
