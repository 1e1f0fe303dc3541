//! Minor extraction

use super::helpers::validate_square_matrix;
use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Copy `a` without row `skip_row` and column `skip_col` into `dest`
///
/// `dest` must already be `(rows - 1) x (columns - 1)`; remaining rows and
/// columns keep their relative order. Only meaningful for n >= 2, so callers
/// handle 1x1 matrices themselves.
pub(crate) fn minor_into(a: &Matrix, skip_row: usize, skip_col: usize, dest: &mut Matrix) {
    debug_assert_eq!(dest.shape(), (a.rows() - 1, a.columns() - 1));

    for (di, src) in (0..a.rows()).filter(|&i| i != skip_row).enumerate() {
        let src = a.row(src);
        let dst = dest.row_mut(di);
        dst[..skip_col].copy_from_slice(&src[..skip_col]);
        dst[skip_col..].copy_from_slice(&src[skip_col + 1..]);
    }
}

/// The `(n - 1) x (n - 1)` minor of square `a` at `(row, col)`
pub fn minor_impl(a: &Matrix, row: usize, col: usize) -> Result<Matrix> {
    let n = validate_square_matrix(a, "minor")?;
    if n < 2 {
        return Err(Error::dimension_mismatch("minor", a.shape(), (2, 2)));
    }
    if row >= n {
        return Err(Error::IndexOutOfBounds {
            index: row,
            size: n,
        });
    }
    if col >= n {
        return Err(Error::IndexOutOfBounds {
            index: col,
            size: n,
        });
    }

    let mut dest = Matrix::new(n - 1, n - 1)?;
    minor_into(a, row, col, &mut dest);
    Ok(dest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix {
        Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]).unwrap()
    }

    #[test]
    fn test_minor_corners_and_center() {
        let a = sample();
        assert_eq!(minor_impl(&a, 0, 0).unwrap().to_vec(), vec![5.0, 6.0, 8.0, 9.0]);
        assert_eq!(minor_impl(&a, 2, 2).unwrap().to_vec(), vec![1.0, 2.0, 4.0, 5.0]);
        assert_eq!(minor_impl(&a, 1, 1).unwrap().to_vec(), vec![1.0, 3.0, 7.0, 9.0]);
        assert_eq!(minor_impl(&a, 0, 2).unwrap().to_vec(), vec![4.0, 5.0, 7.0, 8.0]);
    }

    #[test]
    fn test_minor_of_2x2_is_opposite_cell() {
        let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        assert_eq!(minor_impl(&a, 0, 1).unwrap().to_vec(), vec![3.0]);
        assert_eq!(minor_impl(&a, 1, 1).unwrap().to_vec(), vec![1.0]);
    }

    #[test]
    fn test_minor_into_reuses_buffer() {
        let a = sample();
        let mut buf = Matrix::new(2, 2).unwrap();
        minor_into(&a, 0, 1, &mut buf);
        assert_eq!(buf.to_vec(), vec![4.0, 6.0, 7.0, 9.0]);
        minor_into(&a, 2, 0, &mut buf);
        assert_eq!(buf.to_vec(), vec![2.0, 3.0, 5.0, 6.0]);
    }

    #[test]
    fn test_minor_errors() {
        let one = Matrix::from_rows(&[[5.0]]).unwrap();
        assert!(matches!(
            minor_impl(&one, 0, 0),
            Err(Error::DimensionMismatch { .. })
        ));
        assert_eq!(
            minor_impl(&sample(), 3, 0).unwrap_err(),
            Error::IndexOutOfBounds { index: 3, size: 3 }
        );
    }
}
