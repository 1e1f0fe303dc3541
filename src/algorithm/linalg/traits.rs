//! Linear algebra algorithm trait definitions

use super::cofactor::{adjugate_impl, cofactor_impl};
use super::decompositions::Elimination;
use super::determinant::{det_impl, det_in_place_impl, eliminate_impl};
use super::inverse::inverse_impl;
use super::minor::minor_impl;
use crate::error::Result;
use crate::matrix::Matrix;
use crate::tolerance::Tolerance;

/// Determinant, cofactor and inverse algorithms for square matrices
///
/// All methods reject empty matrices with
/// [`InvalidArgument`](crate::error::Error::InvalidArgument) and non-square
/// matrices with [`DimensionMismatch`](crate::error::Error::DimensionMismatch).
///
/// # Example
///
/// ```
/// use densemat::prelude::*;
///
/// let a = Matrix::from_rows(&[[2.0, 0.0], [0.0, 2.0]])?;
/// assert_eq!(a.det()?, 4.0);
///
/// let inv = a.inverse()?;
/// assert!(inv.approx_eq(&Matrix::from_rows(&[[0.5, 0.0], [0.0, 0.5]])?));
/// # Ok::<(), densemat::error::Error>(())
/// ```
pub trait LinearAlgebraAlgorithms {
    /// Determinant
    ///
    /// # Algorithm
    ///
    /// ```text
    /// n == 1: a[0][0]
    /// n == 2: a[0][0] * a[1][1] - a[0][1] * a[1][0]
    /// n >= 3:
    ///   any row or column all exactly zero -> 0
    ///   forward elimination against the pivot row, swapping in the
    ///   largest-magnitude row below whenever a pivot is exactly zero
    ///   det = (-1)^swaps * product(diagonal)
    /// ```
    ///
    /// Runs on a private copy; `self` is not modified.
    fn det(&self) -> Result<f64> {
        self.det_with(Tolerance::default())
    }

    /// Determinant with an explicit tolerance for the elimination's
    /// "numerically nonzero" test
    ///
    /// The test is absolute: sub-diagonal cells with `|x| <= tol` are not
    /// eliminated, which can misstate the determinant of badly scaled input.
    fn det_with(&self, tol: Tolerance) -> Result<f64>;

    /// Determinant computed destructively
    ///
    /// For n >= 3 the matrix is left in its reduced form. Pass a copy when the
    /// original values are still needed.
    fn det_in_place(&mut self) -> Result<f64>;

    /// Forward elimination to upper-triangular form, with the swap count
    fn eliminate(&self) -> Result<Elimination>;

    /// Submatrix without row `row` and column `col` (n >= 2)
    fn minor(&self, row: usize, col: usize) -> Result<Matrix>;

    /// Matrix of cofactors; a 1x1 matrix is its own cofactor matrix
    fn cofactor(&self) -> Result<Matrix>;

    /// Transpose of the cofactor matrix (`[[1]]` for 1x1)
    fn adjugate(&self) -> Result<Matrix>;

    /// Inverse, rejecting `|det| <= 1e-7` with
    /// [`SingularMatrix`](crate::error::Error::SingularMatrix)
    fn inverse(&self) -> Result<Matrix> {
        self.inverse_with(Tolerance::default())
    }

    /// Inverse with an explicit singularity tolerance
    ///
    /// `tol` only decides whether `|det|` counts as zero; elimination keeps the
    /// default tolerance.
    fn inverse_with(&self, tol: Tolerance) -> Result<Matrix>;
}

impl LinearAlgebraAlgorithms for Matrix {
    fn det_with(&self, tol: Tolerance) -> Result<f64> {
        det_impl(self, tol)
    }

    fn det_in_place(&mut self) -> Result<f64> {
        det_in_place_impl(self, Tolerance::default())
    }

    fn eliminate(&self) -> Result<Elimination> {
        eliminate_impl(self, Tolerance::default())
    }

    fn minor(&self, row: usize, col: usize) -> Result<Matrix> {
        minor_impl(self, row, col)
    }

    fn cofactor(&self) -> Result<Matrix> {
        cofactor_impl(self, Tolerance::default())
    }

    fn adjugate(&self) -> Result<Matrix> {
        adjugate_impl(self, Tolerance::default())
    }

    fn inverse_with(&self, tol: Tolerance) -> Result<Matrix> {
        inverse_impl(self, tol)
    }
}
