//! Slice counterparts of the vector operations for lengths known only at run time.

use std::ops::{Add, Mul};

use log::debug;
use num_traits::Zero;

use crate::prelude::{MatrixError, MatrixResult};

fn check_lengths<T>(lhs: &[T], rhs: &[T]) -> MatrixResult<()> {
    if lhs.len() == rhs.len() {
        Ok(())
    } else {
        debug!("slice length mismatch: {} vs {}", lhs.len(), rhs.len());
        Err(MatrixError::LengthMismatch {
            expected: lhs.len(),
            found: rhs.len(),
        })
    }
}

pub fn try_add_slices<T>(lhs: &[T], rhs: &[T]) -> MatrixResult<Vec<T>>
where
    T: Copy + Add<Output = T>,
{
    check_lengths(lhs, rhs)?;
    Ok(lhs.iter().zip(rhs).map(|(&a, &b)| a + b).collect())
}

pub fn try_dot_slices<T>(lhs: &[T], rhs: &[T]) -> MatrixResult<T>
where
    T: Copy + Zero + Mul<Output = T>,
{
    check_lengths(lhs, rhs)?;
    Ok(lhs
        .iter()
        .zip(rhs)
        .fold(T::zero(), |acc, (&a, &b)| acc + a * b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_lengths_are_combined() {
        assert_eq!(try_add_slices(&[1, 2], &[3, 4]), Ok(vec![4, 6]));
        assert_eq!(try_dot_slices(&[1.0, 2.0], &[3.0, 4.0]), Ok(11.0));
        assert_eq!(try_dot_slices::<i32>(&[], &[]), Ok(0));
    }

    #[test]
    fn mismatched_lengths_are_rejected_not_truncated() {
        assert_eq!(
            try_add_slices(&[1, 2, 3], &[1, 2]),
            Err(MatrixError::LengthMismatch {
                expected: 3,
                found: 2,
            })
        );
        assert!(try_dot_slices(&[1], &[1, 2]).is_err());
    }
}
