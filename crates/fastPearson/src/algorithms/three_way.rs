//! Three-way reduction of centered sequences.
//!
//! ## Purpose
//!
//! This module provides the kernel of the two-pass algorithm: one lockstep
//! pass over the deviation views folds `(x*x, x*y, y*y)` into three
//! independent accumulators.
//!
//! ## Design notes
//!
//! * **Strategy by type**: The accumulator type `A` selects naive or
//!   compensated summation; the fold itself is identical.
//! * **Mergeable**: Each of the three sums merges independently.
//!
//! ## Key concepts
//!
//! * **Coefficient**: `sum_xy / sqrt(sum_xx * sum_yy)`. A zero denominator
//!   yields NaN through IEEE-754 division.
//!
//! ## Invariants
//!
//! * `sum_xx >= 0` and `sum_yy >= 0`.

// External dependencies
use num_traits::Float;
use std::fmt::Debug;
use std::marker::PhantomData;

// Internal dependencies
use crate::algorithms::kernel::Kernel;
use crate::primitives::accumulator::Accumulator;

/// The three pairwise sums of a centered pair of sequences.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThreeWayResult<T> {
    /// Sum of squared x deviations.
    pub sum_xx: T,
    /// Sum of x deviation times y deviation.
    pub sum_xy: T,
    /// Sum of squared y deviations.
    pub sum_yy: T,
}

impl<T: Float> ThreeWayResult<T> {
    /// The Pearson coefficient assembled from the three sums.
    ///
    /// NaN when either variance is zero.
    pub fn coefficient(&self) -> T {
        self.sum_xy / (self.sum_xx * self.sum_yy).sqrt()
    }
}

/// Kernel folding `(x*x, x*y, y*y)` into three accumulators of type `A`.
#[derive(Debug, Clone)]
pub struct ThreeWay<T, A> {
    xx: A,
    xy: A,
    yy: A,
    _marker: PhantomData<T>,
}

impl<T, A: Default> Default for ThreeWay<T, A> {
    fn default() -> Self {
        Self {
            xx: A::default(),
            xy: A::default(),
            yy: A::default(),
            _marker: PhantomData,
        }
    }
}

impl<T, A> Kernel<T> for ThreeWay<T, A>
where
    T: Float + Debug + Send,
    A: Accumulator<T>,
{
    type Output = ThreeWayResult<T>;

    #[inline]
    fn ingest(&mut self, x: T, y: T) {
        self.xx.ingest(x * x);
        self.xy.ingest(x * y);
        self.yy.ingest(y * y);
    }

    fn merge(&mut self, other: &Self) {
        self.xx.merge(&other.xx);
        self.xy.merge(&other.xy);
        self.yy.merge(&other.yy);
    }

    fn finish(&self) -> ThreeWayResult<T> {
        ThreeWayResult {
            sum_xx: self.xx.extract(),
            sum_xy: self.xy.extract(),
            sum_yy: self.yy.extract(),
        }
    }
}
