use log::debug;
use ndarray::{Array2, ArrayView2};

use crate::math::matrix::Matrix;
use crate::prelude::{MatrixError, MatrixResult};

impl<T: Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Copies the primary storage into an owned `ndarray` array of shape `(R, C)`.
    pub fn to_array2(&self) -> Array2<T> {
        Array2::from_shape_fn((R, C), |(i, j)| self.get(i, j))
    }

    /// Copies a 2-D view into a matrix, rejecting any shape other than `(R, C)`.
    pub fn try_from_array(view: ArrayView2<'_, T>) -> MatrixResult<Self> {
        if view.dim() != (R, C) {
            debug!("rejecting array of shape {:?} for a {}x{} matrix", view.dim(), R, C);
            return Err(MatrixError::ShapeMismatch {
                expected: (R, C),
                found: view.dim(),
            });
        }
        Ok(Self::from_fn(|i, j| view[[i, j]]))
    }
}
