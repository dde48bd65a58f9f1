//! Reduction kernels and the sequential lockstep fold.
//!
//! ## Purpose
//!
//! A [`Kernel`] is the per-element state of a pairwise reduction. This module
//! defines the trait and [`reduce`], the single-threaded forward pass that
//! feeds two views into a fresh kernel.
//!
//! ## Design notes
//!
//! * **Stateless reducers**: Every call starts from `K::default()`.
//! * **Associative merge**: Kernels built from disjoint ranges combine with
//!   `merge`, which the parallel reducer relies on.
//!
//! ## Invariants
//!
//! * Both views have the same length (checked by the caller).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::view::{SequenceView, Transform};

/// Per-element state of a pairwise reduction over `(x, y)`.
pub trait Kernel<T: Float>: Default + Send {
    /// The finished sums.
    type Output;

    /// Fold one `(x, y)` pair.
    fn ingest(&mut self, x: T, y: T);

    /// Fold the state of a disjoint, later range into this one.
    fn merge(&mut self, other: &Self);

    /// Read out the sums.
    fn finish(&self) -> Self::Output;
}

/// Fold two views into a fresh kernel in a single lockstep pass.
///
/// Returns the kernel state rather than its output so that partial states
/// can be merged.
pub fn fold<T, K, FX, FY>(x: &SequenceView<'_, T, FX>, y: &SequenceView<'_, T, FY>) -> K
where
    T: Float,
    K: Kernel<T>,
    FX: Transform<T>,
    FY: Transform<T>,
{
    debug_assert_eq!(x.len(), y.len());

    let mut kernel = K::default();
    for (xi, yi) in x.iter().zip(y.iter()) {
        kernel.ingest(xi, yi);
    }
    kernel
}

/// Reduce two views with kernel `K` on the calling thread.
pub fn reduce<T, K, FX, FY>(x: &SequenceView<'_, T, FX>, y: &SequenceView<'_, T, FY>) -> K::Output
where
    T: Float,
    K: Kernel<T>,
    FX: Transform<T>,
    FY: Transform<T>,
{
    fold::<T, K, FX, FY>(x, y).finish()
}
