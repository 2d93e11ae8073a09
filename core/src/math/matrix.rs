use std::array;
use std::hash::{Hash, Hasher};
use std::ops::Index;

use log::{debug, trace};
use num_traits::{One, Zero};

use crate::prelude::{Axis, MatrixError, MatrixResult};

/// Dense `R x C` matrix that keeps a row-major copy of its transpose.
///
/// Both storages are written together by every constructor and mutator, so
/// `get_row_vec(i)[j] == get_col_vec(j)[i]` holds for every instance. Rows and
/// columns are therefore both O(1) to reach, at the cost of twice the storage.
#[derive(Debug, Clone, Copy)]
pub struct Matrix<T, const R: usize, const C: usize> {
    rows: [[T; C]; R],
    cols_transposed: [[T; R]; C],
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    const POSITIVE_EXTENTS: () = assert!(R > 0 && C > 0, "matrix extents must be positive");

    pub const fn row_count(&self) -> usize {
        R
    }

    pub const fn col_count(&self) -> usize {
        C
    }

    pub const fn entry_count(&self) -> usize {
        R * C
    }

    /// Iterates over the rows in order.
    pub fn rows(&self) -> std::slice::Iter<'_, [T; C]> {
        self.rows.iter()
    }

    /// Iterates over the columns in order, read from the transpose storage.
    pub fn cols(&self) -> std::slice::Iter<'_, [T; R]> {
        self.cols_transposed.iter()
    }
}

impl<T: Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Builds a matrix from row-major data, filling the transpose in the same pass.
    ///
    /// ```
    /// use jmat::Matrix;
    ///
    /// let m = Matrix::new([[1, 2], [3, 4]]);
    /// assert_eq!(m.get_col_vec(0), [1, 3]);
    /// ```
    ///
    /// Both extents must be positive; an empty matrix fails to build:
    ///
    /// ```compile_fail
    /// use jmat::Matrix;
    ///
    /// let empty: [[i32; 2]; 0] = [];
    /// let _ = Matrix::new(empty);
    /// ```
    pub fn new(rows: [[T; C]; R]) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::POSITIVE_EXTENTS;
        let cols_transposed = array::from_fn(|j| array::from_fn(|i| rows[i][j]));
        Self {
            rows,
            cols_transposed,
        }
    }

    pub fn from_ref(rows: &[[T; C]; R]) -> Self {
        Self::new(*rows)
    }

    /// Builds a matrix whose entry `(i, j)` is `f(i, j)`, visited row by row.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self::new(array::from_fn(|i| array::from_fn(|j| f(i, j))))
    }

    /// Builds a matrix from rows whose lengths are only known at run time.
    pub fn try_from_rows(rows: Vec<Vec<T>>) -> MatrixResult<Self> {
        let found_cols = rows.first().map_or(0, Vec::len);
        if rows.len() != R {
            debug!("rejecting {} rows for a {}x{} matrix", rows.len(), R, C);
            return Err(MatrixError::ShapeMismatch {
                expected: (R, C),
                found: (rows.len(), found_cols),
            });
        }
        if let Some(bad) = rows.iter().find(|row| row.len() != C) {
            debug!("rejecting row of length {} for a {}x{} matrix", bad.len(), R, C);
            return Err(MatrixError::ShapeMismatch {
                expected: (R, C),
                found: (R, bad.len()),
            });
        }
        Ok(Self::from_fn(|i, j| rows[i][j]))
    }

    pub fn try_get(&self, row: usize, col: usize) -> MatrixResult<T> {
        MatrixError::check_index(Axis::Row, row, R)?;
        MatrixError::check_index(Axis::Col, col, C)?;
        Ok(self.rows[row][col])
    }

    /// Panics if `row >= R` or `col >= C`.
    pub fn get(&self, row: usize, col: usize) -> T {
        self.try_get(row, col).unwrap_or_else(|err| panic!("{}", err))
    }

    pub fn try_get_row_vec(&self, index: usize) -> MatrixResult<[T; C]> {
        MatrixError::check_index(Axis::Row, index, R)?;
        Ok(self.rows[index])
    }

    /// Returns a copy of row `index`. Panics if `index >= R`.
    pub fn get_row_vec(&self, index: usize) -> [T; C] {
        self.try_get_row_vec(index)
            .unwrap_or_else(|err| panic!("{}", err))
    }

    pub fn try_get_col_vec(&self, index: usize) -> MatrixResult<[T; R]> {
        MatrixError::check_index(Axis::Col, index, C)?;
        Ok(self.cols_transposed[index])
    }

    /// Returns a copy of column `index`. Panics if `index >= C`.
    pub fn get_col_vec(&self, index: usize) -> [T; R] {
        self.try_get_col_vec(index)
            .unwrap_or_else(|err| panic!("{}", err))
    }

    pub fn get_matrix_copy(&self) -> [[T; C]; R] {
        self.rows
    }

    pub fn get_matrix_transpose_copy(&self) -> [[T; R]; C] {
        self.cols_transposed
    }

    /// Returns the transposed matrix by swapping the two storages.
    pub fn transpose(&self) -> Matrix<T, C, R> {
        Matrix {
            rows: self.cols_transposed,
            cols_transposed: self.rows,
        }
    }

    pub fn try_set(&mut self, row: usize, col: usize, value: T) -> MatrixResult<()> {
        MatrixError::check_index(Axis::Row, row, R)?;
        MatrixError::check_index(Axis::Col, col, C)?;
        trace!("setting ({}, {}) of a {}x{} matrix", row, col, R, C);
        self.write(row, col, value);
        Ok(())
    }

    /// Writes one cell in both storages. Panics if `row >= R` or `col >= C`.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.try_set(row, col, value)
            .unwrap_or_else(|err| panic!("{}", err))
    }

    pub fn try_replace_row(&mut self, row: usize, values: &[T; C]) -> MatrixResult<()> {
        MatrixError::check_index(Axis::Row, row, R)?;
        trace!("replacing row {} of a {}x{} matrix", row, R, C);
        for (col, &value) in values.iter().enumerate() {
            self.write(row, col, value);
        }
        Ok(())
    }

    /// Overwrites row `row` with `values`. Panics if `row >= R`.
    pub fn replace_row(&mut self, row: usize, values: &[T; C]) {
        self.try_replace_row(row, values)
            .unwrap_or_else(|err| panic!("{}", err))
    }

    pub fn try_replace_col(&mut self, col: usize, values: &[T; R]) -> MatrixResult<()> {
        MatrixError::check_index(Axis::Col, col, C)?;
        trace!("replacing column {} of a {}x{} matrix", col, R, C);
        for (row, &value) in values.iter().enumerate() {
            self.write(row, col, value);
        }
        Ok(())
    }

    /// Overwrites column `col` with `values`. Panics if `col >= C`.
    pub fn replace_col(&mut self, col: usize, values: &[T; R]) {
        self.try_replace_col(col, values)
            .unwrap_or_else(|err| panic!("{}", err))
    }

    // Callers have already range-checked both indices.
    fn write(&mut self, row: usize, col: usize, value: T) {
        self.rows[row][col] = value;
        self.cols_transposed[col][row] = value;
    }
}

impl<T: Copy + Zero, const R: usize, const C: usize> Matrix<T, R, C> {
    pub fn zeros() -> Self {
        Self::new([[T::zero(); C]; R])
    }
}

impl<T: Copy + Zero + One, const N: usize> Matrix<T, N, N> {
    pub fn identity() -> Self {
        Self::from_fn(|i, j| if i == j { T::one() } else { T::zero() })
    }
}

impl<T: Copy + Default, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    fn default() -> Self {
        Self::new([[T::default(); C]; R])
    }
}

impl<T: PartialEq, const R: usize, const C: usize> PartialEq for Matrix<T, R, C> {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
    }
}

impl<T: Eq, const R: usize, const C: usize> Eq for Matrix<T, R, C> {}

impl<T: Hash, const R: usize, const C: usize> Hash for Matrix<T, R, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rows.hash(state);
    }
}

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        if let Err(err) = MatrixError::check_index(Axis::Row, row, R)
            .and_then(|_| MatrixError::check_index(Axis::Col, col, C))
        {
            panic!("{}", err);
        }
        &self.rows[row][col]
    }
}

impl<T: Copy, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T, R, C> {
    fn from(rows: [[T; C]; R]) -> Self {
        Self::new(rows)
    }
}

impl<T: Copy, const R: usize, const C: usize> From<&[[T; C]; R]> for Matrix<T, R, C> {
    fn from(rows: &[[T; C]; R]) -> Self {
        Self::from_ref(rows)
    }
}

impl<T: Copy, const R: usize, const C: usize> From<Matrix<T, R, C>> for [[T; C]; R] {
    fn from(matrix: Matrix<T, R, C>) -> Self {
        matrix.rows
    }
}

impl<T: Copy, const R: usize, const C: usize> TryFrom<Vec<Vec<T>>> for Matrix<T, R, C> {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        Self::try_from_rows(rows)
    }
}
