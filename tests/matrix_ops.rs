//! Integration tests for matrix construction and basic operations
//!
//! Tests verify:
//! - construction, release and validation
//! - tolerance-based equality
//! - sum / sub / mul_scalar / matmul / transpose
//! - error taxonomy for empty operands vs incompatible shapes

mod common;

use common::{det_matrix, mat};
use densemat::prelude::*;

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_create_zero_rows_fails_without_storage() {
    let err = Matrix::new(0, 3).unwrap_err();
    assert_eq!(
        err,
        Error::InvalidDimensions {
            rows: 0,
            columns: 3
        }
    );
}

#[test]
fn test_released_matrix_is_rejected_everywhere() {
    let mut a = mat(&[[1.0, 2.0], [3.0, 4.0]]);
    let b = a.clone();
    a.release();

    assert!(!a.is_valid());
    assert!(matches!(a.sum(&b), Err(Error::InvalidArgument { .. })));
    assert!(matches!(b.sub(&a), Err(Error::InvalidArgument { .. })));
    assert!(matches!(a.mul_scalar(2.0), Err(Error::InvalidArgument { .. })));
    assert!(matches!(a.matmul(&b), Err(Error::InvalidArgument { .. })));
    assert!(matches!(a.transpose(), Err(Error::InvalidArgument { .. })));
    assert!(matches!(a.det(), Err(Error::InvalidArgument { .. })));
    assert!(matches!(a.cofactor(), Err(Error::InvalidArgument { .. })));
    assert!(matches!(a.inverse(), Err(Error::InvalidArgument { .. })));
}

// ============================================================================
// Equality
// ============================================================================

#[test]
fn test_equals_reflexive() {
    for seed in 0..5 {
        let a = det_matrix(3, 4, seed);
        assert!(a.approx_eq(&a));
    }
}

#[test]
fn test_equals_tolerance_boundary() {
    let a = mat(&[[1.0, 1.0]]);
    let inside = mat(&[[1.0, 1.0 + 0.9 * DEFAULT_TOLERANCE]]);
    let outside = mat(&[[1.0, 1.0 + 2.0 * DEFAULT_TOLERANCE]]);
    assert!(a.approx_eq(&inside));
    assert!(!a.approx_eq(&outside));

    let tight = Tolerance::new(0.0).unwrap();
    assert!(!a.approx_eq_with(&inside, tight));
    assert!(a.approx_eq_with(&a, tight));
}

#[test]
fn test_equals_shape_mismatch() {
    let a = mat(&[[0.0, 0.0], [0.0, 0.0]]);
    let b = mat(&[[0.0, 0.0, 0.0, 0.0]]);
    assert!(!a.approx_eq(&b));
}

// ============================================================================
// Arithmetic
// ============================================================================

#[test]
fn test_sum_then_sub_round_trips() {
    for seed in 0..5 {
        let a = det_matrix(4, 3, seed);
        let b = det_matrix(4, 3, seed + 100);
        let back = a.sum(&b).unwrap().sub(&b).unwrap();
        assert!(back.approx_eq(&a));
    }
}

#[test]
fn test_sum_dimension_mismatch() {
    let a = Matrix::identity(2).unwrap();
    let b = Matrix::identity(3).unwrap();
    assert_eq!(
        a.sum(&b).unwrap_err(),
        Error::DimensionMismatch {
            op: "sum",
            lhs: (2, 2),
            rhs: (3, 3),
        }
    );
    assert!(matches!(
        a.sub(&b),
        Err(Error::DimensionMismatch { op: "sub", .. })
    ));
}

#[test]
fn test_mul_scalar_then_sum() {
    let a = mat(&[[1.0, -2.0], [0.5, 4.0]]);
    let doubled = a.mul_scalar(2.0).unwrap();
    assert!(doubled.approx_eq(&a.sum(&a).unwrap()));
}

#[test]
fn test_matmul_by_identity() {
    let a = mat(&[[1.0, 2.0], [3.0, 4.0]]);
    let i = Matrix::identity(2).unwrap();
    assert!(a.matmul(&i).unwrap().approx_eq(&a));
    assert!(i.matmul(&a).unwrap().approx_eq(&a));
}

#[test]
fn test_matmul_shapes() {
    let a = det_matrix(2, 5, 1);
    let b = det_matrix(5, 3, 2);
    assert_eq!(a.matmul(&b).unwrap().shape(), (2, 3));
    assert!(matches!(
        b.matmul(&a),
        Err(Error::DimensionMismatch { op: "matmul", .. })
    ));
}

#[test]
fn test_matmul_transpose_identity() {
    // (AB)^T == B^T A^T
    let a = det_matrix(3, 4, 7);
    let b = det_matrix(4, 2, 8);
    let lhs = a.matmul(&b).unwrap().transpose().unwrap();
    let rhs = b
        .transpose()
        .unwrap()
        .matmul(&a.transpose().unwrap())
        .unwrap();
    assert!(lhs.approx_eq(&rhs));
}

#[test]
fn test_transpose_twice_is_identity() {
    for (rows, columns) in [(1, 1), (1, 5), (4, 2), (3, 3)] {
        let a = det_matrix(rows, columns, (rows * 10 + columns) as u64);
        let t = a.transpose().unwrap();
        assert_eq!(t.shape(), (columns, rows));
        assert!(t.transpose().unwrap().approx_eq(&a));
    }
}

#[test]
fn test_operations_do_not_alias_inputs() {
    let a = mat(&[[1.0, 2.0], [3.0, 4.0]]);
    let mut t = a.transpose().unwrap();
    t[(0, 1)] = 100.0;
    assert_eq!(a.to_vec(), vec![1.0, 2.0, 3.0, 4.0]);
}
