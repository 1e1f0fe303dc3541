//! Result types for row reduction

use crate::matrix::Matrix;

/// Forward-elimination result: `upper` is row-equivalent to the input
///
/// Rows were exchanged `num_swaps` times, so
/// `det(input) = (-1)^num_swaps * product(diag(upper))`.
#[derive(Clone, Debug)]
pub struct Elimination {
    /// Reduced matrix (upper triangular unless `zero_pivot` is set)
    pub upper: Matrix,

    /// Number of row swaps (for determinant sign)
    pub num_swaps: usize,

    /// A pivot column had no nonzero candidate; the matrix is singular and
    /// elimination stopped at that column
    pub zero_pivot: bool,
}

impl Elimination {
    /// Signed product of the diagonal, or exactly 0.0 after a zero pivot
    pub fn determinant(&self) -> f64 {
        if self.zero_pivot {
            return 0.0;
        }
        signed_diagonal_product(&self.upper, self.num_swaps)
    }
}

/// `(-1)^num_swaps * product(diag(upper))`
pub(crate) fn signed_diagonal_product(upper: &Matrix, num_swaps: usize) -> f64 {
    let product: f64 = (0..upper.rows()).map(|i| upper[(i, i)]).product();
    if num_swaps % 2 == 0 {
        product
    } else {
        -product
    }
}
