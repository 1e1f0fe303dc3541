//! Cofactor matrix and adjugate

use super::determinant::det_unchecked;
use super::helpers::{cofactor_sign, validate_square_matrix};
use super::minor::minor_into;
use crate::error::Result;
use crate::matrix::Matrix;
use crate::ops::shape::transpose_impl;
use crate::tolerance::Tolerance;

/// Matrix of cofactors `C[i][j] = (-1)^(i+j) * det(minor(i, j))`
///
/// A 1x1 matrix is its own cofactor matrix. 2x2 cofactors are read straight
/// from the opposite cell. Larger sizes reuse one minor buffer, whose
/// determinant is taken in place since the next extraction overwrites it.
pub fn cofactor_impl(a: &Matrix, tol: Tolerance) -> Result<Matrix> {
    let n = validate_square_matrix(a, "cofactor")?;
    let mut out = Matrix::new(n, n)?;

    match n {
        1 => out[(0, 0)] = a[(0, 0)],
        2 => {
            for i in 0..2 {
                for j in 0..2 {
                    out[(i, j)] = cofactor_sign(i, j) * a[(1 - i, 1 - j)];
                }
            }
        }
        _ => {
            let mut minor = Matrix::new(n - 1, n - 1)?;
            for i in 0..n {
                for j in 0..n {
                    minor_into(a, i, j, &mut minor);
                    out[(i, j)] = cofactor_sign(i, j) * det_unchecked(&mut minor, tol);
                }
            }
        }
    }

    Ok(out)
}

/// Adjugate: transpose of the cofactor matrix
///
/// For 1x1 input this is `[[1]]`, so `adj(A) / det(A)` is the inverse for
/// every size.
pub fn adjugate_impl(a: &Matrix, tol: Tolerance) -> Result<Matrix> {
    let n = validate_square_matrix(a, "adjugate")?;
    if n == 1 {
        return Matrix::identity(1);
    }
    transpose_impl(&cofactor_impl(a, tol)?)
}
