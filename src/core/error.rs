//! Error handling logic

use std::fmt;

/// Error types for operator construction and the numeric checks built on it.
///
/// Every fallible function in the crate returns `Result<_, OpError>`. No
/// variant is ever produced alongside a partial result: a function either
/// returns its matrix or fails before any matrix is handed out.
#[derive(Debug, Clone, PartialEq, Eq)] // Eq useful for testing error variants
pub enum OpError {
    /// The requested truncation dimension is not a positive integer.
    InvalidDimension {
        /// InvalidDimension failure message
        message: String
    },

    /// Two matrices (or a matrix and its row data) do not have compatible shapes.
    DimensionMismatch {
        /// Dimension on the left-hand side / expected dimension
        expected: usize,
        /// Dimension on the right-hand side / found dimension
        found: usize,
    },

    /// A matrix has no inverse within the singular tolerance.
    SingularMatrix {
        /// SingularMatrix failure message
        message: String
    },

    /// A gate name did not match any known gate.
    UnknownGate {
        /// The name that failed to parse
        name: String
    },

    /// A numeric property check did not hold within tolerance.
    ValidationFailed {
        /// ValidationFailed failure message
        message: String
    },
}

impl fmt::Display for OpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpError::InvalidDimension { message } => write!(f, "Invalid Dimension: {}", message),
            OpError::DimensionMismatch { expected, found } => write!(f, "Dimension Mismatch: expected {}, found {}", expected, found),
            OpError::SingularMatrix { message } => write!(f, "Singular Matrix: {}", message),
            OpError::UnknownGate { name } => write!(f, "Unknown Gate: '{}'", name),
            OpError::ValidationFailed { message } => write!(f, "Validation Failed: {}", message),
        }
    }
}

// Implement the standard Error trait to allow for easy integration with Rust error handling.
impl std::error::Error for OpError {}
