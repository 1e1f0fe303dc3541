//! Basic Matrix Operations
//!
//! This demo walks through densemat's API: creating matrices, element-wise
//! arithmetic, matmul, transpose, determinant, cofactors and inverse.
//!
//! Run with:
//! ```sh
//! cargo run --example basic_matrix_ops
//! ```

use densemat::prelude::*;

fn main() -> Result<()> {
    // -----------------------------------------------------------------------
    // 1. Create matrices
    // -----------------------------------------------------------------------
    let a = Matrix::from_rows(&[[2.0, 5.0, 7.0], [6.0, 3.0, 4.0], [5.0, -2.0, -3.0]])?;
    let zeros = Matrix::new(2, 3)?;
    let identity = Matrix::identity(3)?;
    println!("a:\n{a}\n");
    println!("zeros {:?}:\n{zeros}\n", zeros.shape());

    // -----------------------------------------------------------------------
    // 2. Element-wise arithmetic and matmul
    // -----------------------------------------------------------------------
    let sum = a.sum(&identity)?;
    let scaled = a.mul_scalar(0.5)?;
    let product = a.matmul(&identity)?;
    println!("a + I:\n{sum}\n");
    println!("a * 0.5:\n{scaled}\n");
    println!("a @ I == a: {}", product.approx_eq(&a));

    // Shapes must agree; errors are values, not panics.
    match a.sum(&zeros) {
        Ok(_) => unreachable!(),
        Err(e) => println!("a + zeros: {e}"),
    }

    // -----------------------------------------------------------------------
    // 3. Determinant, cofactors, inverse
    // -----------------------------------------------------------------------
    println!("\ndet(a) = {}", a.det()?);
    println!("cofactor(a):\n{}\n", a.cofactor()?);

    let inv = a.inverse()?;
    println!("inverse(a):\n{inv}\n");
    println!("a @ inverse(a) == I: {}", a.matmul(&inv)?.approx_eq(&identity));

    let singular = Matrix::from_rows(&[[1.0, 2.0], [2.0, 4.0]])?;
    if let Err(e) = singular.inverse() {
        println!("inverse([[1, 2], [2, 4]]): {e}");
    }

    Ok(())
}
