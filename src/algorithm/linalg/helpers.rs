//! Helper functions for linear algebra operations
//!
//! Validation utilities shared by the determinant, cofactor and inverse paths.

use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Validate matrix is non-empty
pub fn validate_matrix(a: &Matrix) -> Result<(usize, usize)> {
    a.validate_arg("a")?;
    Ok(a.shape())
}

/// Validate matrix is non-empty and square, returning n
pub fn validate_square_matrix(a: &Matrix, op: &'static str) -> Result<usize> {
    let (m, n) = validate_matrix(a)?;
    if m != n {
        return Err(Error::not_square(op, (m, n)));
    }
    Ok(n)
}

/// (-1)^(i+j)
#[inline]
pub fn cofactor_sign(i: usize, j: usize) -> f64 {
    if (i + j) % 2 == 0 { 1.0 } else { -1.0 }
}
