//! Matrix multiplication helpers

use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Matrix multiplication parameters
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MatmulParams {
    /// Number of rows in A (M)
    pub m: usize,
    /// Number of columns in A / rows in B (K)
    pub k: usize,
    /// Number of columns in B (N)
    pub n: usize,
}

impl MatmulParams {
    /// Create params for C`[M,N]` = A`[M,K]` @ B`[K,N]`
    pub fn new(m: usize, k: usize, n: usize) -> Self {
        Self { m, k, n }
    }

    /// Output shape
    pub fn output_shape(&self) -> (usize, usize) {
        (self.m, self.n)
    }
}

/// Validate matmul shapes and return dimensions (m, k, n)
///
/// Returns None if the inner dimensions differ.
pub fn validate_matmul_shapes(
    a_shape: (usize, usize),
    b_shape: (usize, usize),
) -> Option<MatmulParams> {
    let (m, k) = a_shape;
    let (k2, n) = b_shape;
    (k == k2).then(|| MatmulParams::new(m, k, n))
}

/// C = A @ B with the plain (row, column, contraction) loop order
pub fn matmul_impl(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    a.validate_arg("a")?;
    b.validate_arg("b")?;
    let params = validate_matmul_shapes(a.shape(), b.shape())
        .ok_or_else(|| Error::dimension_mismatch("matmul", a.shape(), b.shape()))?;

    let (m, n) = params.output_shape();
    let mut out = Matrix::new(m, n)?;
    for i in 0..m {
        let a_row = a.row(i);
        for j in 0..n {
            let mut acc = 0.0;
            for (kk, &a_ik) in a_row.iter().enumerate() {
                acc += a_ik * b[(kk, j)];
            }
            out[(i, j)] = acc;
        }
    }
    Ok(out)
}
