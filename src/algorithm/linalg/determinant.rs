//! Determinant via forward elimination
//!
//! 1x1 and 2x2 matrices use closed forms. Larger matrices first check for an
//! all-zero row or column (determinant exactly 0) and otherwise reduce to
//! upper-triangular form, multiplying the diagonal and flipping the sign once
//! per row swap.

use super::decompositions::{Elimination, signed_diagonal_product};
use super::helpers::validate_square_matrix;
use crate::error::Result;
use crate::matrix::Matrix;
use crate::tolerance::Tolerance;

/// Determinant of a copy of `a`; `a` is left untouched
pub fn det_impl(a: &Matrix, tol: Tolerance) -> Result<f64> {
    validate_square_matrix(a, "det")?;
    let mut work = a.clone();
    Ok(det_unchecked(&mut work, tol))
}

/// Determinant computed destructively on `a`
///
/// For n >= 3 without a zero row or column, `a` is left holding its reduced
/// (row-swapped, eliminated) form. Callers that need the original values must
/// pass a copy.
pub fn det_in_place_impl(a: &mut Matrix, tol: Tolerance) -> Result<f64> {
    validate_square_matrix(a, "det")?;
    Ok(det_unchecked(a, tol))
}

/// Forward elimination of a copy of `a`
pub fn eliminate_impl(a: &Matrix, tol: Tolerance) -> Result<Elimination> {
    validate_square_matrix(a, "eliminate")?;
    let mut upper = a.clone();
    let (num_swaps, zero_pivot) = eliminate_in_place(&mut upper, tol);
    Ok(Elimination {
        upper,
        num_swaps,
        zero_pivot,
    })
}

/// `a` must be valid and square
pub(crate) fn det_unchecked(a: &mut Matrix, tol: Tolerance) -> f64 {
    match a.rows() {
        1 => a[(0, 0)],
        2 => a[(0, 0)] * a[(1, 1)] - a[(0, 1)] * a[(1, 0)],
        n => {
            if let Some(line) = find_zero_line(a) {
                tracing::trace!(n, ?line, "zero line, determinant is 0");
                return 0.0;
            }

            let (num_swaps, zero_pivot) = eliminate_in_place(a, tol);
            tracing::trace!(n, num_swaps, zero_pivot, "eliminated");
            if zero_pivot {
                return 0.0;
            }
            signed_diagonal_product(a, num_swaps)
        }
    }
}

/// A row or column whose cells are all exactly zero
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ZeroLine {
    /// Row index
    Row(usize),
    /// Column index
    Column(usize),
}

/// Find the first all-zero line, checking row k then column k for k = 0, 1, ...
pub fn find_zero_line(a: &Matrix) -> Option<ZeroLine> {
    let n = a.rows().min(a.columns());
    (0..n).find_map(|k| {
        if a.row(k).iter().all(|&x| x == 0.0) {
            Some(ZeroLine::Row(k))
        } else if (0..a.rows()).all(|i| a[(i, k)] == 0.0) {
            Some(ZeroLine::Column(k))
        } else {
            None
        }
    })
}

/// Reduce square `a` to upper-triangular form in place
///
/// A diagonal cell that is exactly zero is replaced by swapping in the row
/// below with the largest magnitude in that column. Below the pivot, every
/// cell outside the tolerance is eliminated against the pivot row.
///
/// Returns `(num_swaps, zero_pivot)`. `zero_pivot` means some column had no
/// nonzero pivot candidate; elimination stops there.
///
/// The tolerance is absolute. A sub-diagonal cell within it is left in place
/// even when the pivot row holds large values, so badly scaled input such as
/// `[[1, 1e8, 0], [5e-8, 1, 0], [0, 0, 1]]` yields 1 instead of -4.
pub(crate) fn eliminate_in_place(a: &mut Matrix, tol: Tolerance) -> (usize, bool) {
    let n = a.rows();
    let mut num_swaps = 0;

    for j in 0..n {
        if a[(j, j)] == 0.0 {
            let candidate = (j + 1..n)
                .filter(|&i| a[(i, j)] != 0.0)
                .max_by(|&x, &y| a[(x, j)].abs().total_cmp(&a[(y, j)].abs()));
            match candidate {
                Some(p) => {
                    a.swap_rows(j, p);
                    num_swaps += 1;
                }
                None => return (num_swaps, true),
            }
        }

        let pivot = a[(j, j)];
        for i in j + 1..n {
            let below = a[(i, j)];
            if tol.is_zero(below) {
                continue;
            }
            let factor = below / pivot;
            for c in j + 1..n {
                let delta = factor * a[(j, c)];
                a[(i, c)] -= delta;
            }
            a[(i, j)] = 0.0;
        }
    }

    (num_swaps, false)
}
