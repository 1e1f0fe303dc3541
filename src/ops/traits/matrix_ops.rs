//! Matrix operations trait.
//!
//! Element-wise arithmetic, matrix multiplication and transpose.

use crate::error::Result;
use crate::matrix::Matrix;
use crate::ops::arithmetic::{BinaryOp, binary_op_impl, mul_scalar_impl};
use crate::ops::matmul::matmul_impl;
use crate::ops::shape::transpose_impl;

/// Basic matrix operations
///
/// Every operation borrows its operands and returns a freshly allocated
/// result; operands are never modified.
///
/// # Example
///
/// ```
/// use densemat::prelude::*;
///
/// let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]])?;
/// let b = Matrix::identity(2)?;
///
/// let c = a.matmul(&b)?;
/// assert!(c.approx_eq(&a));
/// # Ok::<(), densemat::error::Error>(())
/// ```
pub trait MatrixOps {
    /// Element-wise addition: a + b
    ///
    /// # Errors
    /// - [`InvalidArgument`](crate::error::Error::InvalidArgument) if either
    ///   operand is empty
    /// - [`DimensionMismatch`](crate::error::Error::DimensionMismatch) if the
    ///   shapes differ
    fn sum(&self, other: &Matrix) -> Result<Matrix>;

    /// Element-wise subtraction: a - b
    ///
    /// Same errors as [`MatrixOps::sum`].
    fn sub(&self, other: &Matrix) -> Result<Matrix>;

    /// Multiply every cell by a scalar
    fn mul_scalar(&self, scalar: f64) -> Result<Matrix>;

    /// Matrix product: a @ b
    ///
    /// Requires `a.columns() == b.rows()`; the result is `a.rows() x b.columns()`.
    fn matmul(&self, other: &Matrix) -> Result<Matrix>;

    /// Transpose
    fn transpose(&self) -> Result<Matrix>;
}

impl MatrixOps for Matrix {
    fn sum(&self, other: &Matrix) -> Result<Matrix> {
        binary_op_impl(self, other, BinaryOp::Add)
    }

    fn sub(&self, other: &Matrix) -> Result<Matrix> {
        binary_op_impl(self, other, BinaryOp::Sub)
    }

    fn mul_scalar(&self, scalar: f64) -> Result<Matrix> {
        mul_scalar_impl(self, scalar)
    }

    fn matmul(&self, other: &Matrix) -> Result<Matrix> {
        matmul_impl(self, other)
    }

    fn transpose(&self) -> Result<Matrix> {
        transpose_impl(self)
    }
}
