pub mod checked;
pub mod interop;
pub mod matrix;
pub mod ops;
pub mod render;
pub mod serial;

pub use checked::{try_add_slices, try_dot_slices};
pub use matrix::Matrix;
pub use ops::{add, add_scalar, dot_prod, mat_mul, mat_vec, scalar_mult, Elementwise};
