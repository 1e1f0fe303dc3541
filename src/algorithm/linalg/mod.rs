//! Linear algebra algorithms
//!
//! Determinant, minors, cofactors, adjugate and inverse of dense square
//! matrices. Everything builds on one forward-elimination routine:
//!
//! ```text
//! minor -> determinant -> cofactor -> adjugate
//!                    \         \
//!                     +-------> inverse = cofactor(A^T) / det(A)
//! ```
//!
//! # Module Structure
//!
//! - `decompositions`: [`Elimination`] result type
//! - `determinant`: zero-line shortcut and forward elimination
//! - `minor`: minor extraction
//! - `cofactor`: cofactor matrix and adjugate
//! - `inverse`: adjugate-based inverse with singularity check
//! - `traits`: [`LinearAlgebraAlgorithms`]
//! - `helpers`: validation utilities

pub mod cofactor;
pub mod decompositions;
pub mod determinant;
pub mod helpers;
pub mod inverse;
pub mod minor;
pub mod traits;

pub use decompositions::Elimination;
pub use determinant::{ZeroLine, find_zero_line};
pub use helpers::{cofactor_sign, validate_matrix, validate_square_matrix};
pub use traits::LinearAlgebraAlgorithms;
