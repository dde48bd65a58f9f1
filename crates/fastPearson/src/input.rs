//! Sequence inputs accepted by `correlate` and `mean`.
//!
//! `correlate` and `mean` borrow their sequences through
//! [`CorrelationInput`], which hands the reducers a plain `&[T]`. Slices,
//! fixed-size arrays and vectors lend their buffer directly; a 1-D ndarray
//! lends its buffer only when the elements sit next to each other in
//! standard order, since the views and the partitioner index a slice.
//!
//! A strided or reversed array is refused with `InvalidInput` rather than
//! copied, so no call ever allocates a second buffer for the input. Length
//! checks happen later, in the orchestrator.

// Feature-gated imports
#[cfg(feature = "cpu")]
use ndarray::{ArrayBase, Data, Ix1};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::CorrelationError;

/// A numeric sequence that can lend its elements as one contiguous slice.
pub trait CorrelationInput<T: Float> {
    /// The elements in order, or `InvalidInput` when they are not contiguous.
    fn as_sequence(&self) -> Result<&[T], CorrelationError>;
}

impl<T: Float> CorrelationInput<T> for [T] {
    fn as_sequence(&self) -> Result<&[T], CorrelationError> {
        Ok(self)
    }
}

impl<T: Float, const N: usize> CorrelationInput<T> for [T; N] {
    fn as_sequence(&self) -> Result<&[T], CorrelationError> {
        Ok(self.as_slice())
    }
}

impl<T: Float> CorrelationInput<T> for Vec<T> {
    fn as_sequence(&self) -> Result<&[T], CorrelationError> {
        Ok(self.as_slice())
    }
}

#[cfg(feature = "cpu")]
impl<T: Float, S> CorrelationInput<T> for ArrayBase<S, Ix1>
where
    S: Data<Elem = T>,
{
    fn as_sequence(&self) -> Result<&[T], CorrelationError> {
        self.as_slice().ok_or_else(|| {
            CorrelationError::InvalidInput("array elements are not contiguous; call `.to_owned()` or `.as_standard_layout()` first".to_string())
        })
    }
}
