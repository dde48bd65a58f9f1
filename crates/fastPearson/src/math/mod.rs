//! Layer 3: Math
//!
//! ## Purpose
//!
//! This layer provides the scalar estimators the orchestrator needs before
//! any pairwise reduction can run, namely the arithmetic mean.
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
//! Layer 3: Math ← You are here
//!   ↓
//! Layer 2: Primitives
//!   ↓
//! Layer 1: Input
//! ```

/// Arithmetic mean with selectable summation.
pub mod mean;
