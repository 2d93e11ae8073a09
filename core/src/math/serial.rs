//! Serde support: a matrix is a sequence of `R` rows of `C` entries.
//!
//! Only the primary storage goes over the wire; the transpose is rebuilt on
//! deserialization, and input of the wrong shape is rejected.

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::math::matrix::Matrix;

impl<T: Serialize, const R: usize, const C: usize> Serialize for Matrix<T, R, C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows().map(|row| row.as_slice()))
    }
}

impl<'de, T, const R: usize, const C: usize> Deserialize<'de> for Matrix<T, R, C>
where
    T: Copy + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<T>>::deserialize(deserializer)?;
        Matrix::try_from_rows(rows).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_rows_only() {
        let m = Matrix::new([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(serde_json::to_string(&m).unwrap(), "[[1,2,3],[4,5,6]]");
    }

    #[test]
    fn deserialization_rebuilds_the_transpose() {
        let m: Matrix<f64, 2, 2> = serde_json::from_str("[[1.0, 2.0], [3.0, 4.0]]").unwrap();
        assert_eq!(m.get_col_vec(1), [2.0, 4.0]);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(serde_json::from_str::<Matrix<f64, 2, 2>>(&json).unwrap(), m);
    }

    #[test]
    fn wrong_shape_is_a_deserialization_error() {
        let err = serde_json::from_str::<Matrix<i32, 2, 2>>("[[1, 2], [3]]").unwrap_err();
        assert!(err.to_string().contains("shape mismatch"));
        assert!(serde_json::from_str::<Matrix<i32, 2, 2>>("[[1, 2]]").is_err());
    }
}
