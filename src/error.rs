//! Error types for matriz operations.
//!
//! Every precondition violation is reported synchronously at the operation
//! boundary; nothing is recovered internally and no partial result is
//! produced on failure.

use std::fmt;

/// Main error type for matrix operations.
///
/// # Examples
///
/// ```
/// use matriz::error::MatrizError;
///
/// let err = MatrizError::shape_mismatch((2, 3), (2, 2));
/// assert!(err.to_string().contains("shape mismatch"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum MatrizError {
    /// Operand shapes are incompatible for the operation.
    ShapeMismatch {
        /// Expected shape description
        expected: String,
        /// Actual shape found
        actual: String,
    },

    /// A square-only operation (inverse, determinant, rank) received a
    /// non-square matrix.
    NotSquare {
        /// Row count of the offending matrix
        rows: usize,
        /// Column count of the offending matrix
        cols: usize,
    },

    /// Matrix is singular (non-invertible).
    Singular {
        /// Determinant value (numerically zero)
        det: f64,
    },
}

impl fmt::Display for MatrizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrizError::ShapeMismatch { expected, actual } => {
                write!(f, "shape mismatch: expected {expected}, got {actual}")
            }
            MatrizError::NotSquare { rows, cols } => {
                write!(
                    f,
                    "matrix is {rows}x{cols}, operation requires a square matrix"
                )
            }
            MatrizError::Singular { det } => {
                write!(f, "singular matrix: determinant = {det}, cannot invert")
            }
        }
    }
}

impl std::error::Error for MatrizError {}

impl MatrizError {
    /// Create a shape mismatch error from two (rows, cols) pairs.
    #[must_use]
    pub fn shape_mismatch(expected: (usize, usize), actual: (usize, usize)) -> Self {
        Self::ShapeMismatch {
            expected: format!("{}x{}", expected.0, expected.1),
            actual: format!("{}x{}", actual.0, actual.1),
        }
    }
}

/// Convenient Result alias for matriz operations.
pub type Result<T> = std::result::Result<T, MatrizError>;
