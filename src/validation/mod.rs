// src/validation/mod.rs

//! Numeric property checks for built operators.
//!
//! Each check returns `Ok(())` when the property holds within tolerance and
//! `Err(OpError::ValidationFailed)` describing the worst deviation otherwise.

use crate::core::{OpError, OperatorMatrix, DEFAULT_TOLERANCE};
use crate::ladder::LadderOperators;
use num_complex::Complex;

// --- Public Validation Functions ---

/// Checks that `annihilation` is the transpose of `creation`.
///
/// # Arguments
/// * `creation` - Candidate a† matrix.
/// * `annihilation` - Candidate a matrix.
/// * `tolerance` - Allowed element-wise deviation (defaults to `DEFAULT_TOLERANCE`).
///
/// # Returns
/// * `Ok(())` if a = (a†)ᵀ within tolerance.
/// * `Err(OpError::ValidationFailed)` if they differ or have different dimensions.
pub fn check_transpose_pair(
    creation: &OperatorMatrix,
    annihilation: &OperatorMatrix,
    tolerance: Option<f64>,
) -> Result<(), OpError> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_TOLERANCE);
    let transposed = creation.transpose();
    match transposed.max_deviation(annihilation) {
        Some(dev) if dev <= effective_tolerance => Ok(()),
        Some(dev) => Err(OpError::ValidationFailed {
            message: format!("Annihilation differs from transpose(creation) by {:.3e} (> {})", dev, effective_tolerance),
        }),
        None => Err(OpError::ValidationFailed {
            message: format!(
                "Creation ({0}x{0}) and annihilation ({1}x{1}) have different dimensions",
                creation.dim(), annihilation.dim()
            ),
        }),
    }
}

/// Checks that `creation · annihilation` is the truncated number operator
/// diag(0, 1, …, N−1).
///
/// # Arguments
/// * `creation` - Candidate a† matrix.
/// * `annihilation` - Candidate a matrix.
/// * `tolerance` - Allowed element-wise deviation (defaults to `DEFAULT_TOLERANCE`).
///
/// # Returns
/// * `Err(OpError::DimensionMismatch)` if the two matrices cannot be multiplied.
/// * `Err(OpError::ValidationFailed)` if the product is not diag(0..N).
pub fn check_number_operator(
    creation: &OperatorMatrix,
    annihilation: &OperatorMatrix,
    tolerance: Option<f64>,
) -> Result<(), OpError> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_TOLERANCE);
    let number = creation.try_matmul(annihilation)?;
    let expected = OperatorMatrix::from_fn(number.dim(), |i, j| {
        if i == j { Complex::new(i as f64, 0.0) } else { Complex::new(0.0, 0.0) }
    });
    let dev = number.max_deviation(&expected).unwrap_or(f64::INFINITY);
    if dev > effective_tolerance {
        Err(OpError::ValidationFailed {
            message: format!("a†·a deviates from diag(0..{}) by {:.3e} (> {})", number.dim(), dev, effective_tolerance),
        })
    } else {
        Ok(())
    }
}

/// Checks that `m` is unitary, M†·M ≈ I.
///
/// # Arguments
/// * `m` - The matrix to check.
/// * `tolerance` - Allowed element-wise deviation (defaults to `DEFAULT_TOLERANCE`).
pub fn check_unitary(m: &OperatorMatrix, tolerance: Option<f64>) -> Result<(), OpError> {
    let effective_tolerance = tolerance.unwrap_or(DEFAULT_TOLERANCE);
    let product = &m.adjoint() * m;
    let dev = product.max_deviation(&OperatorMatrix::identity(m.dim())).unwrap_or(f64::INFINITY);
    if dev > effective_tolerance {
        Err(OpError::ValidationFailed {
            message: format!("M†·M deviates from identity by {:.3e} (> {})", dev, effective_tolerance),
        })
    } else {
        Ok(())
    }
}

/// Returns [a, a†] − I for the given pair.
///
/// For an untruncated oscillator this is zero. With N levels every entry is
/// zero except (N−1, N−1), which equals −N. That entry is the truncation
/// boundary and is expected.
pub fn truncation_defect(ops: &LadderOperators) -> OperatorMatrix {
    let a = ops.annihilation();
    let a_dag = ops.creation();
    let commutator = &(a * a_dag) - &(a_dag * a);
    &commutator - &OperatorMatrix::identity(a.dim())
}

/// Performs the standard checks on a ladder operator pair: transpose pairing
/// and the number operator. Uses default tolerance values unless specified.
///
/// # Returns
/// * `Ok(())` if all checks pass.
/// * The first `Err(OpError::ValidationFailed)` otherwise.
pub fn validate_ladder_operators(ops: &LadderOperators, tolerance: Option<f64>) -> Result<(), OpError> {
    check_transpose_pair(ops.creation(), ops.annihilation(), tolerance)?;
    check_number_operator(ops.creation(), ops.annihilation(), tolerance)?;
    Ok(())
}
