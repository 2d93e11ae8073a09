//! Elementwise arithmetic, dot products and matrix products.
//!
//! Every function reads its operands and returns a fresh value. Shapes are
//! part of the operand types, so adding a `2x3` to a `3x2` or multiplying
//! matrices with different inner extents is rejected by the compiler.

use std::array;
use std::ops::{Add, Mul};

use log::debug;
use num_traits::Zero;

use crate::math::matrix::Matrix;

/// A fixed-shape container whose entries can be mapped one by one.
///
/// Implemented for plain arrays `[T; N]` and for [`Matrix`]; the free
/// functions in this module are written once against this trait.
pub trait Elementwise: Sized {
    type Scalar: Copy;

    fn map_entries<F>(&self, f: F) -> Self
    where
        F: FnMut(Self::Scalar) -> Self::Scalar;

    fn zip_entries<F>(&self, other: &Self, f: F) -> Self
    where
        F: FnMut(Self::Scalar, Self::Scalar) -> Self::Scalar;
}

impl<T: Copy, const N: usize> Elementwise for [T; N] {
    type Scalar = T;

    fn map_entries<F>(&self, mut f: F) -> Self
    where
        F: FnMut(T) -> T,
    {
        array::from_fn(|i| f(self[i]))
    }

    fn zip_entries<F>(&self, other: &Self, mut f: F) -> Self
    where
        F: FnMut(T, T) -> T,
    {
        array::from_fn(|i| f(self[i], other[i]))
    }
}

// Matrices are processed row by row through the row accessor.
impl<T: Copy, const R: usize, const C: usize> Elementwise for Matrix<T, R, C> {
    type Scalar = T;

    fn map_entries<F>(&self, mut f: F) -> Self
    where
        F: FnMut(T) -> T,
    {
        Matrix::new(array::from_fn(|i| self.get_row_vec(i).map_entries(&mut f)))
    }

    fn zip_entries<F>(&self, other: &Self, mut f: F) -> Self
    where
        F: FnMut(T, T) -> T,
    {
        Matrix::new(array::from_fn(|i| {
            self.get_row_vec(i)
                .zip_entries(&other.get_row_vec(i), &mut f)
        }))
    }
}

/// Adds `scalar` to every entry.
pub fn add_scalar<E>(operand: &E, scalar: E::Scalar) -> E
where
    E: Elementwise,
    E::Scalar: Add<Output = E::Scalar>,
{
    operand.map_entries(|value| value + scalar)
}

/// Elementwise sum of two operands of the same shape.
///
/// ```
/// use jmat::{add, Matrix};
///
/// let a = Matrix::new([[1, 2, 3]]);
/// let b = Matrix::new([[4, 5, 6]]);
/// assert_eq!(add(&a, &b).get_row_vec(0), [5, 7, 9]);
/// ```
///
/// Operands of different shapes do not compile:
///
/// ```compile_fail
/// use jmat::{add, Matrix};
///
/// let a = Matrix::new([[1, 2, 3]]);
/// let b = Matrix::new([[1, 2]]);
/// let _ = add(&a, &b);
/// ```
pub fn add<E>(lhs: &E, rhs: &E) -> E
where
    E: Elementwise,
    E::Scalar: Add<Output = E::Scalar>,
{
    lhs.zip_entries(rhs, |a, b| a + b)
}

/// Multiplies every entry by `scalar`.
pub fn scalar_mult<E>(operand: &E, scalar: E::Scalar) -> E
where
    E: Elementwise,
    E::Scalar: Mul<Output = E::Scalar>,
{
    operand.map_entries(|value| value * scalar)
}

/// Sum of pairwise products, accumulated in index order starting from zero.
pub fn dot_prod<T, const N: usize>(lhs: &[T; N], rhs: &[T; N]) -> T
where
    T: Copy + Zero + Mul<Output = T>,
{
    lhs.iter()
        .zip(rhs.iter())
        .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
}

/// Matrix product of an `R x K` and a `K x C` matrix.
///
/// Entry `(i, j)` is the dot product of row `i` of `lhs` with column `j` of
/// `rhs`, the latter read straight from the transpose storage.
///
/// ```
/// use jmat::{mat_mul, Matrix};
///
/// let a = Matrix::new([[1, 2], [3, 4]]);
/// let b = Matrix::new([[5, 6], [7, 8]]);
/// assert_eq!(mat_mul(&a, &b).get_matrix_copy(), [[19, 22], [43, 50]]);
/// ```
///
/// The inner extents must agree at compile time:
///
/// ```compile_fail
/// use jmat::{mat_mul, Matrix};
///
/// let a = Matrix::new([[1, 2, 3], [4, 5, 6]]);
/// let b = Matrix::new([[1, 2], [3, 4]]);
/// let _ = mat_mul(&a, &b);
/// ```
pub fn mat_mul<T, const R: usize, const K: usize, const C: usize>(
    lhs: &Matrix<T, R, K>,
    rhs: &Matrix<T, K, C>,
) -> Matrix<T, R, C>
where
    T: Copy + Zero + Mul<Output = T>,
{
    debug!("multiplying {}x{} by {}x{}", R, K, K, C);
    let rows = lhs.get_matrix_copy();
    let cols = rhs.get_matrix_transpose_copy();
    Matrix::from_fn(|i, j| dot_prod(&rows[i], &cols[j]))
}

/// Product of an `R x C` matrix with a length-`C` vector.
pub fn mat_vec<T, const R: usize, const C: usize>(
    matrix: &Matrix<T, R, C>,
    vector: &[T; C],
) -> [T; R]
where
    T: Copy + Zero + Mul<Output = T>,
{
    array::from_fn(|i| dot_prod(&matrix.get_row_vec(i), vector))
}

impl<T, const R: usize, const C: usize> Add for Matrix<T, R, C>
where
    T: Copy + Add<Output = T>,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        add(&self, &rhs)
    }
}

impl<T, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C>
where
    T: Copy + Mul<Output = T>,
{
    type Output = Self;

    fn mul(self, scalar: T) -> Self::Output {
        scalar_mult(&self, scalar)
    }
}

impl<T, const R: usize, const K: usize, const C: usize> Mul<Matrix<T, K, C>> for Matrix<T, R, K>
where
    T: Copy + Zero + Mul<Output = T>,
{
    type Output = Matrix<T, R, C>;

    fn mul(self, rhs: Matrix<T, K, C>) -> Self::Output {
        mat_mul(&self, &rhs)
    }
}
