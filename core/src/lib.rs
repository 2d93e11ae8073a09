//! Statically dimensioned dense matrices with a synchronized transpose.
//!
//! `Matrix<T, R, C>` carries its extents as const generics, so shape errors in
//! additions and products are compile errors. Each matrix stores both its rows
//! and a row-major copy of its transpose, giving O(1) access to rows and
//! columns alike. Index errors panic, with `try_*` variants returning
//! [`MatrixError`] instead.

pub mod math;
pub mod prelude;

#[cfg(test)]
mod test_logging;

pub use math::{
    add, add_scalar, dot_prod, mat_mul, mat_vec, scalar_mult, try_add_slices, try_dot_slices,
    Elementwise, Matrix,
};
pub use prelude::{Axis, MatrixError, MatrixResult, RenderConfig};
