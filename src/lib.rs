//! # densemat
//!
//! **Dense `f64` matrix arithmetic with determinant, cofactor and inverse.**
//!
//! densemat provides a small owned matrix type and the classical
//! linear-algebra operations built on it.
//!
//! ## Features
//!
//! - **Matrix**: rows x columns grid of `f64` in one contiguous row-major buffer
//! - **Arithmetic**: sum, subtract, scalar multiply, matmul, transpose
//! - **Linear algebra**: determinant, minors, cofactor matrix, adjugate, inverse
//! - **Tolerance**: one named absolute epsilon (1e-7) shared by equality,
//!   elimination and singularity checks
//!
//! ## Quick Start
//!
//! ```rust
//! use densemat::prelude::*;
//!
//! let a = Matrix::from_rows(&[[4.0, 7.0], [2.0, 6.0]])?;
//! let inv = a.inverse()?;
//!
//! let product = a.matmul(&inv)?;
//! assert!(product.approx_eq(&Matrix::identity(2)?));
//! # Ok::<(), densemat::error::Error>(())
//! ```
//!
//! ## Logging
//!
//! The determinant and inverse paths emit `tracing` events at `trace` and
//! `debug` level. Install a subscriber to see them.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithm;
pub mod error;
pub mod matrix;
pub mod ops;
pub mod tolerance;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithm::LinearAlgebraAlgorithms;
    pub use crate::algorithm::linalg::Elimination;
    pub use crate::error::{Error, Result};
    pub use crate::matrix::{Layout, Matrix};
    pub use crate::ops::MatrixOps;
    pub use crate::tolerance::{DEFAULT_TOLERANCE, Tolerance};
}
