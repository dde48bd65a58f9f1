//! Raw-moment reduction for the one-pass algorithm.
//!
//! ## Purpose
//!
//! This module provides the kernel of the one-pass algorithm: a single
//! traversal of the raw (uncentered) inputs accumulating the count, the two
//! plain sums and the three product sums. Means and the coefficient are then
//! derived algebraically.
//!
//! ## Design notes
//!
//! * **Single traversal**: No mean is needed up front, so the data is read once.
//! * **Cancellation-prone**: `sum_xx - n*mean_x^2` subtracts two large, nearly
//!   equal numbers when the data has a large offset relative to its spread.
//!   Compensated accumulators shrink the error of the sums, not of this
//!   subtraction.
//!
//! ## Invariants
//!
//! * `count` equals the number of ingested pairs.

// External dependencies
use num_traits::Float;
use std::fmt::Debug;
use std::marker::PhantomData;

// Internal dependencies
use crate::algorithms::kernel::Kernel;
use crate::primitives::accumulator::Accumulator;

/// Raw sums over a pair of sequences.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawMomentsResult<T> {
    /// Number of pairs.
    pub count: usize,
    /// Sum of x.
    pub sum_x: T,
    /// Sum of y.
    pub sum_y: T,
    /// Sum of x squared.
    pub sum_xx: T,
    /// Sum of x times y.
    pub sum_xy: T,
    /// Sum of y squared.
    pub sum_yy: T,
}

impl<T: Float> RawMomentsResult<T> {
    fn n(&self) -> T {
        T::from(self.count).unwrap_or_else(T::nan)
    }

    /// Mean of x. NaN for zero pairs.
    pub fn mean_x(&self) -> T {
        self.sum_x / self.n()
    }

    /// Mean of y. NaN for zero pairs.
    pub fn mean_y(&self) -> T {
        self.sum_y / self.n()
    }

    /// Pearson coefficient from the raw moments.
    ///
    /// `(sxy - n*mx*my) / sqrt((sxx - n*mx^2) * (syy - n*my^2))`.
    pub fn coefficient(&self) -> T {
        let n = self.n();
        let mx = self.mean_x();
        let my = self.mean_y();
        let numerator = self.sum_xy - n * mx * my;
        let var_x = self.sum_xx - n * mx * mx;
        let var_y = self.sum_yy - n * my * my;
        numerator / (var_x * var_y).sqrt()
    }
}

/// Kernel accumulating `n, Σx, Σy, Σx², Σxy, Σy²`.
#[derive(Debug, Clone)]
pub struct RawMoments<T, A> {
    count: usize,
    x: A,
    y: A,
    xx: A,
    xy: A,
    yy: A,
    _marker: PhantomData<T>,
}

impl<T, A: Default> Default for RawMoments<T, A> {
    fn default() -> Self {
        Self {
            count: 0,
            x: A::default(),
            y: A::default(),
            xx: A::default(),
            xy: A::default(),
            yy: A::default(),
            _marker: PhantomData,
        }
    }
}

impl<T, A> Kernel<T> for RawMoments<T, A>
where
    T: Float + Debug + Send,
    A: Accumulator<T>,
{
    type Output = RawMomentsResult<T>;

    #[inline]
    fn ingest(&mut self, x: T, y: T) {
        self.count += 1;
        self.x.ingest(x);
        self.y.ingest(y);
        self.xx.ingest(x * x);
        self.xy.ingest(x * y);
        self.yy.ingest(y * y);
    }

    fn merge(&mut self, other: &Self) {
        self.count += other.count;
        self.x.merge(&other.x);
        self.y.merge(&other.y);
        self.xx.merge(&other.xx);
        self.xy.merge(&other.xy);
        self.yy.merge(&other.yy);
    }

    fn finish(&self) -> RawMomentsResult<T> {
        RawMomentsResult {
            count: self.count,
            sum_x: self.x.extract(),
            sum_y: self.y.extract(),
            sum_xx: self.xx.extract(),
            sum_xy: self.xy.extract(),
            sum_yy: self.yy.extract(),
        }
    }
}
