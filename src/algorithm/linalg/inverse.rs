//! Matrix inverse via the adjugate: A^-1 = cofactor(A^T) / det(A)

use super::cofactor::cofactor_impl;
use super::determinant::det_impl;
use super::helpers::validate_square_matrix;
use crate::error::{Error, Result};
use crate::matrix::Matrix;
use crate::ops::shape::transpose_impl;
use crate::tolerance::Tolerance;

/// Inverse of square `a`
///
/// The determinant is taken on a copy, so `a` is never modified. Fails with
/// [`Error::SingularMatrix`] when `|det(a)| <= tol`.
///
/// `tol` is only the singularity bound. The determinant and cofactors always
/// use the default elimination tolerance.
pub fn inverse_impl(a: &Matrix, tol: Tolerance) -> Result<Matrix> {
    let n = validate_square_matrix(a, "inverse")?;
    let elim_tol = Tolerance::default();

    let det = det_impl(a, elim_tol)?;
    if tol.is_zero(det) {
        tracing::debug!(n, det, tolerance = tol.value(), "singular matrix");
        return Err(Error::SingularMatrix { det });
    }

    if n == 1 {
        return Matrix::from_slice(&[1.0 / det], 1, 1);
    }

    let transposed = transpose_impl(a)?;
    let mut out = cofactor_impl(&transposed, elim_tol)?;
    for x in out.as_mut_slice() {
        *x /= det;
    }
    Ok(out)
}
