//! Lazy elementwise views over borrowed sequences.
//!
//! ## Purpose
//!
//! This module provides [`SequenceView`], a read-only logical sequence made of
//! a borrowed source slice and a pure elementwise [`Transform`]. Deviations
//! from the mean are presented to the reducers through views, so no centered
//! copy of the input is ever allocated.
//!
//! ## Design notes
//!
//! * **Zero-copy**: A view owns no storage; it borrows the caller's slice.
//! * **Lazy**: The transform runs on access, once per element per traversal.
//! * **Splittable**: `subview` yields a view over a contiguous index range with
//!   the same transform, which the parallel reducer uses for partitioning.
//!
//! ## Invariants
//!
//! * `view.len() == source.len()`.
//! * `view.get(i) == transform(source[i])` for every `i < len`.
//! * The borrow checker guarantees the source cannot mutate while viewed.

// External dependencies
use num_traits::Float;
use std::iter::FusedIterator;
use std::ops::Range;

// ============================================================================
// Transforms
// ============================================================================

/// A pure unary function applied to every element of a view.
pub trait Transform<T>: Clone + Send + Sync {
    /// Map one source element.
    fn apply(&self, value: T) -> T;
}

/// Leaves elements unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

impl<T> Transform<T> for Identity {
    #[inline]
    fn apply(&self, value: T) -> T {
        value
    }
}

/// Subtracts a constant, typically the sequence mean.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deviation<T> {
    /// The constant subtracted from every element.
    pub center: T,
}

impl<T: Float + Send + Sync> Transform<T> for Deviation<T> {
    #[inline]
    fn apply(&self, value: T) -> T {
        value - self.center
    }
}

/// Adapts an arbitrary pure closure into a [`Transform`].
#[derive(Debug, Clone, Copy)]
pub struct Mapped<F>(pub F);

impl<T, F> Transform<T> for Mapped<F>
where
    F: Fn(T) -> T + Clone + Send + Sync,
{
    #[inline]
    fn apply(&self, value: T) -> T {
        (self.0)(value)
    }
}

// ============================================================================
// Sequence View
// ============================================================================

/// A borrowed sequence seen through an elementwise transform.
#[derive(Debug, Clone, Copy)]
pub struct SequenceView<'a, T, F> {
    source: &'a [T],
    transform: F,
}

impl<'a, T: Copy> SequenceView<'a, T, Identity> {
    /// View the source unchanged.
    pub fn identity(source: &'a [T]) -> Self {
        Self::new(source, Identity)
    }
}

impl<'a, T: Float + Send + Sync> SequenceView<'a, T, Deviation<T>> {
    /// View the source as deviations from `center`.
    pub fn deviation(source: &'a [T], center: T) -> Self {
        Self::new(source, Deviation { center })
    }
}

impl<'a, T: Copy, F: Transform<T>> SequenceView<'a, T, F> {
    /// View `source` through `transform`.
    pub fn new(source: &'a [T], transform: F) -> Self {
        Self { source, transform }
    }

    /// Number of elements, equal to the source length.
    #[inline]
    pub fn len(&self) -> usize {
        self.source.len()
    }

    /// Whether the view has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// The transformed element at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<T> {
        self.source.get(index).map(|&v| self.transform.apply(v))
    }

    /// Forward traversal yielding transformed elements.
    pub fn iter(&self) -> ViewIter<'a, T, F> {
        ViewIter {
            inner: self.source.iter(),
            transform: self.transform.clone(),
        }
    }

    /// A view over `range` of the source with the same transform.
    ///
    /// # Panics
    ///
    /// Panics if `range` is out of bounds, like slice indexing.
    pub fn subview(&self, range: Range<usize>) -> Self {
        Self {
            source: &self.source[range],
            transform: self.transform.clone(),
        }
    }

    /// The transform applied by this view.
    pub fn transform(&self) -> &F {
        &self.transform
    }
}

impl<'a, T: Copy, F: Transform<T>> IntoIterator for &SequenceView<'a, T, F> {
    type Item = T;
    type IntoIter = ViewIter<'a, T, F>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a [`SequenceView`].
#[derive(Debug, Clone)]
pub struct ViewIter<'a, T, F> {
    inner: std::slice::Iter<'a, T>,
    transform: F,
}

impl<'a, T: Copy, F: Transform<T>> Iterator for ViewIter<'a, T, F> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.next().map(|&v| self.transform.apply(v))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T: Copy, F: Transform<T>> ExactSizeIterator for ViewIter<'a, T, F> {}

impl<'a, T: Copy, F: Transform<T>> FusedIterator for ViewIter<'a, T, F> {}
