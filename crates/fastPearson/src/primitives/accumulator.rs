//! Running-sum accumulators.
//!
//! ## Purpose
//!
//! This module provides the summation primitive every reduction in the crate
//! is built on: a plain running sum and a compensated running sum.
//!
//! ## Design notes
//!
//! * **Interchangeable**: Both sums implement [`Accumulator`], so kernels are
//!   generic over the summation strategy.
//! * **Mergeable**: Partial sums over disjoint ranges combine with `merge`.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Two-sum**: `a + b = s + e` exactly, where `s = fl(a + b)` and `e` is the
//!   rounding residue (Knuth, TAOCP vol. 2, 4.2.2).
//! * **Compensation**: The residues are collected in a separate correction
//!   term and added back once, on extraction.
//!
//! ## Invariants
//!
//! * A fresh accumulator extracts exactly zero.
//! * Ingesting a single value and extracting returns that value exactly.
//! * `CompensatedSum` error is bounded by about one ulp of the result plus
//!   `n * eps^2 * sum(|v|)`, independent of `n` for practical sizes.
//!
//! ## Non-goals
//!
//! * This module does not provide arbitrary-precision or exact summation.

// External dependencies
use num_traits::Float;
use std::fmt::Debug;

/// Error-free transformation of `a + b` into a rounded sum and its residue.
#[inline]
pub fn two_sum<T: Float>(a: T, b: T) -> (T, T) {
    let s = a + b;
    let b_virtual = s - a;
    let a_virtual = s - b_virtual;
    let residue = (a - a_virtual) + (b - b_virtual);
    (s, residue)
}

/// A running sum that can be fed values, merged, and read out.
pub trait Accumulator<T: Float>: Clone + Default + Debug + Send {
    /// Fold one value into the sum.
    fn ingest(&mut self, value: T);

    /// Fold the sum of a disjoint range into this one.
    fn merge(&mut self, other: &Self);

    /// The current value of the sum.
    fn extract(&self) -> T;
}

/// Summation strategy selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Summation {
    /// Plain floating-point additions ([`NaiveSum`]).
    Naive,
    /// Two-sum compensated additions ([`CompensatedSum`]).
    #[default]
    Compensated,
}

// ============================================================================
// Naive Summation
// ============================================================================

/// Plain floating-point running sum.
///
/// Absolute error grows like `n * eps * max|partial sum|`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NaiveSum<T> {
    sum: T,
}

impl<T: Float> Default for NaiveSum<T> {
    fn default() -> Self {
        Self { sum: T::zero() }
    }
}

impl<T: Float + Debug + Send> Accumulator<T> for NaiveSum<T> {
    #[inline]
    fn ingest(&mut self, value: T) {
        self.sum = self.sum + value;
    }

    #[inline]
    fn merge(&mut self, other: &Self) {
        self.sum = self.sum + other.sum;
    }

    #[inline]
    fn extract(&self) -> T {
        self.sum
    }
}

// ============================================================================
// Compensated Summation
// ============================================================================

/// Compensated running sum.
///
/// Every addition goes through [`two_sum`]; its residue is collected in
/// `correction`. The corrected total `sum + correction` stays within about
/// one ulp of the exact sum, at roughly four times the cost of a plain add.
/// Once the total overflows, residues are dropped so the sum saturates to
/// infinity like [`NaiveSum`] instead of turning into NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompensatedSum<T> {
    sum: T,
    correction: T,
}

impl<T: Float> Default for CompensatedSum<T> {
    fn default() -> Self {
        Self {
            sum: T::zero(),
            correction: T::zero(),
        }
    }
}

impl<T: Float> CompensatedSum<T> {
    /// The uncorrected running total.
    pub fn total(&self) -> T {
        self.sum
    }

    /// The accumulated rounding residue not yet folded into the total.
    pub fn correction(&self) -> T {
        self.correction
    }
}

impl<T: Float + Debug + Send> Accumulator<T> for CompensatedSum<T> {
    #[inline]
    fn ingest(&mut self, value: T) {
        let (s, residue) = two_sum(self.sum, value);
        self.sum = s;
        // The residue of an overflowed sum is inf - inf; keep the total at inf.
        if s.is_finite() {
            self.correction = self.correction + residue;
        }
    }

    #[inline]
    fn merge(&mut self, other: &Self) {
        let (s, residue) = two_sum(self.sum, other.sum);
        self.sum = s;
        if s.is_finite() {
            self.correction = self.correction + (residue + other.correction);
        }
    }

    #[inline]
    fn extract(&self) -> T {
        self.sum + self.correction
    }
}
