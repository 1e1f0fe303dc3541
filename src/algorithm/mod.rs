//! Algorithm contracts
//!
//! Algorithms are defined as traits first and implemented for
//! [`Matrix`](crate::matrix::Matrix):
//!
//! - [`LinearAlgebraAlgorithms`] - determinant, minor, cofactor, adjugate, inverse

pub mod linalg;

pub use linalg::LinearAlgebraAlgorithms;
