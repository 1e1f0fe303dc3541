//! Common test utilities
#![allow(dead_code)]

use densemat::matrix::Matrix;

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Build a matrix from literal rows
pub fn mat<const C: usize>(rows: &[[f64; C]]) -> Matrix {
    Matrix::from_rows(rows).expect("valid literal matrix")
}

/// Deterministic pseudo-random matrix with entries in [-1, 1)
pub fn det_matrix(rows: usize, columns: usize, seed: u64) -> Matrix {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    Matrix::from_fn(rows, columns, |_, _| {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((state >> 11) as f64 / (1u64 << 53) as f64) * 2.0 - 1.0
    })
    .expect("valid dimensions")
}

/// Diagonally dominant matrix, so it is well conditioned and invertible
pub fn dominant_matrix(n: usize, seed: u64) -> Matrix {
    let mut m = det_matrix(n, n, seed);
    for i in 0..n {
        m[(i, i)] += n as f64 + 1.0;
    }
    m
}
