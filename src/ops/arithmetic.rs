//! Element-wise arithmetic
//!
//! Binary operations require operands of identical shape; there is no
//! broadcasting.

use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Binary operation kind
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    /// Addition: a + b
    Add,
    /// Subtraction: a - b
    Sub,
}

impl BinaryOp {
    /// Operation name used in error messages
    pub fn name(self) -> &'static str {
        match self {
            BinaryOp::Add => "sum",
            BinaryOp::Sub => "sub",
        }
    }

    #[inline]
    fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            BinaryOp::Add => a + b,
            BinaryOp::Sub => a - b,
        }
    }
}

/// Validate that two operands are usable and share one shape
pub fn validate_same_shape(op: &'static str, a: &Matrix, b: &Matrix) -> Result<(usize, usize)> {
    a.validate_arg("a")?;
    b.validate_arg("b")?;
    if a.shape() != b.shape() {
        return Err(Error::dimension_mismatch(op, a.shape(), b.shape()));
    }
    Ok(a.shape())
}

/// Element-wise `a op b` into a freshly allocated matrix
pub fn binary_op_impl(a: &Matrix, b: &Matrix, op: BinaryOp) -> Result<Matrix> {
    let (rows, columns) = validate_same_shape(op.name(), a, b)?;

    let mut out = Matrix::new(rows, columns)?;
    for ((dst, &x), &y) in out
        .as_mut_slice()
        .iter_mut()
        .zip(a.as_slice())
        .zip(b.as_slice())
    {
        *dst = op.apply(x, y);
    }
    Ok(out)
}

/// Multiply every cell by `scalar`
pub fn mul_scalar_impl(a: &Matrix, scalar: f64) -> Result<Matrix> {
    a.validate_arg("a")?;

    let mut out = Matrix::new(a.rows(), a.columns())?;
    for (dst, &x) in out.as_mut_slice().iter_mut().zip(a.as_slice()) {
        *dst = x * scalar;
    }
    Ok(out)
}
