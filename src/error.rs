//! Error types for densemat

use thiserror::Error;

/// Result type alias using densemat's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in densemat operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },

    /// A matrix was requested with a zero dimension
    #[error("Invalid dimensions {rows}x{columns}: both must be at least 1")]
    InvalidDimensions {
        /// Requested row count
        rows: usize,
        /// Requested column count
        columns: usize,
    },

    /// Operand shapes are incompatible for an operation
    #[error("Dimension mismatch in '{op}': {lhs:?} vs {rhs:?}")]
    DimensionMismatch {
        /// The operation name
        op: &'static str,
        /// Left-hand side shape (rows, columns)
        lhs: (usize, usize),
        /// Right-hand side shape, or the shape that was required
        rhs: (usize, usize),
    },

    /// Out of memory
    #[error("Out of memory: failed to allocate {size} bytes")]
    OutOfMemory {
        /// Requested size in bytes
        size: usize,
    },

    /// Index out of bounds
    #[error("Index {index} out of bounds for dimension of size {size}")]
    IndexOutOfBounds {
        /// The invalid index
        index: usize,
        /// Size of the dimension
        size: usize,
    },

    /// Determinant is within tolerance of zero
    #[error("Singular matrix: determinant {det:e} is within tolerance of zero")]
    SingularMatrix {
        /// The determinant that was rejected
        det: f64,
    },
}

impl Error {
    /// Create an error for an empty or released matrix operand
    pub fn invalid_matrix(arg: &'static str) -> Self {
        Self::InvalidArgument {
            arg,
            reason: "matrix is empty or has been released".to_string(),
        }
    }

    /// Create a dimension mismatch error
    pub fn dimension_mismatch(op: &'static str, lhs: (usize, usize), rhs: (usize, usize)) -> Self {
        Self::DimensionMismatch { op, lhs, rhs }
    }

    /// Create a dimension mismatch error for an operation that needs a square matrix
    pub fn not_square(op: &'static str, shape: (usize, usize)) -> Self {
        Self::DimensionMismatch {
            op,
            lhs: shape,
            rhs: (shape.0, shape.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = Error::dimension_mismatch("sum", (2, 2), (3, 3));
        assert_eq!(
            err.to_string(),
            "Dimension mismatch in 'sum': (2, 2) vs (3, 3)"
        );

        let err = Error::InvalidDimensions {
            rows: 0,
            columns: 4,
        };
        assert_eq!(
            err.to_string(),
            "Invalid dimensions 0x4: both must be at least 1"
        );
    }

    #[test]
    fn test_not_square_reports_required_shape() {
        match Error::not_square("det", (2, 3)) {
            Error::DimensionMismatch { op, lhs, rhs } => {
                assert_eq!(op, "det");
                assert_eq!(lhs, (2, 3));
                assert_eq!(rhs, (2, 2));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
