//! Matrix operations
//!
//! This module defines the basic operation trait and the implementations
//! behind it.
//!
//! # Design
//!
//! Operations are defined as a trait implemented by [`Matrix`](crate::matrix::Matrix).
//! Each trait method validates its operands and delegates to an `*_impl`
//! function that allocates and fills the output.
//!
//! ```text
//! Matrix
//!   └── implements MatrixOps
//!         ├── sum, sub       (element-wise, identical shapes)
//!         ├── mul_scalar     (scalar multiply)
//!         ├── matmul         (matrix multiplication)
//!         └── transpose
//! ```

pub mod arithmetic;
pub mod matmul;
pub mod shape;
pub mod traits;

pub use arithmetic::{BinaryOp, validate_same_shape};
pub use matmul::{MatmulParams, validate_matmul_shapes};
pub use traits::MatrixOps;
