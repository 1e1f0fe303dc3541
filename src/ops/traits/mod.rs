//! Operation traits

mod matrix_ops;

pub use matrix_ops::MatrixOps;
