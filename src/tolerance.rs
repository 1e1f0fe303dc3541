//! Absolute tolerance shared by equality, elimination and singularity checks

use crate::error::{Error, Result};

/// Default absolute tolerance (1e-7)
pub const DEFAULT_TOLERANCE: f64 = 1e-7;

/// Absolute tolerance used to treat floating-point values as zero or equal
///
/// Always finite and non-negative.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Tolerance(f64);

impl Tolerance {
    /// Create a tolerance, rejecting negative and non-finite values
    pub fn new(eps: f64) -> Result<Self> {
        if !eps.is_finite() || eps < 0.0 {
            return Err(Error::InvalidArgument {
                arg: "tolerance",
                reason: format!("must be finite and non-negative, got {eps}"),
            });
        }
        Ok(Self(eps))
    }

    /// The raw epsilon value
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// `|x| <= eps`
    #[inline]
    pub fn is_zero(self, x: f64) -> bool {
        x.abs() <= self.0
    }

    /// `|a - b| <= eps`
    #[inline]
    pub fn close(self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self(DEFAULT_TOLERANCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_1e_7() {
        assert_eq!(Tolerance::default().value(), 1e-7);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Tolerance::new(-1e-9).is_err());
        assert!(Tolerance::new(f64::NAN).is_err());
        assert!(Tolerance::new(f64::INFINITY).is_err());
        assert!(Tolerance::new(0.0).is_ok());
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let tol = Tolerance::new(0.5).unwrap();
        assert!(tol.is_zero(0.5));
        assert!(tol.is_zero(-0.5));
        assert!(!tol.is_zero(0.5000001));
        assert!(tol.close(1.0, 1.5));
        assert!(!tol.close(1.0, 1.75));
    }
}
