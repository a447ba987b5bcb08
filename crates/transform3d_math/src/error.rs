//! Domain errors for matrix construction
//!
//! The builders that divide by an input-derived quantity validate their
//! arguments and report a [`MathError`] instead of returning a matrix full
//! of NaN or infinity.

use std::fmt;

/// Error type for degenerate numeric inputs
#[derive(Debug, Clone, PartialEq)]
pub enum MathError {
    /// Matrix has (numerically) zero determinant and cannot be inverted
    SingularMatrix { determinant: f64 },
    /// Perspective parameters describe an empty or inverted frustum
    DegeneratePerspective(String),
    /// Orthographic/pixel projection has a zero-sized extent
    DegenerateProjection(String),
    /// Camera position coincides with its target, or `up` is parallel to the view direction
    DegenerateCamera(String),
    /// An input or result contained NaN or infinity
    NonFinite(&'static str),
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::SingularMatrix { determinant } => {
                write!(f, "Matrix is singular (determinant {:e})", determinant)
            }
            MathError::DegeneratePerspective(msg) => write!(f, "Degenerate perspective: {}", msg),
            MathError::DegenerateProjection(msg) => write!(f, "Degenerate projection: {}", msg),
            MathError::DegenerateCamera(msg) => write!(f, "Degenerate camera: {}", msg),
            MathError::NonFinite(what) => write!(f, "Non-finite value in {}", what),
        }
    }
}

impl std::error::Error for MathError {}
