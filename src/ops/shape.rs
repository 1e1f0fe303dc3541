//! Shape operations

use crate::error::Result;
use crate::matrix::Matrix;

/// `columns x rows` copy with `out[(j, i)] = a[(i, j)]`
pub fn transpose_impl(a: &Matrix) -> Result<Matrix> {
    a.validate_arg("a")?;

    let (rows, columns) = a.layout().transposed().shape();
    let mut out = Matrix::new(rows, columns)?;
    for (i, row) in a.iter_rows().enumerate() {
        for (j, &value) in row.iter().enumerate() {
            out[(j, i)] = value;
        }
    }
    Ok(out)
}
