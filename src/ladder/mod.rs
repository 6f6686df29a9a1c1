// src/ladder/mod.rs

//! Bosonic ladder operators in a truncated Fock basis.
//!
//! For a truncation dimension `N` the creation operator a† and the
//! annihilation operator a are `N x N` matrices in the basis |0⟩ … |N−1⟩,
//! filled cell by cell from a closed-form rule:
//!
//! - a†\[i\]\[j\] = √i     when i = j + 1, else 0
//! - a\[i\]\[j\]  = √(i+1) when i + 1 = j, else 0
//!
//! The two matrices are transposes of each other. Their commutator equals
//! the identity everywhere except the bottom-right entry, where truncation
//! leaves `1 - N` instead of `1`. That entry is a property of any finite
//! truncation and is reported by `validation::truncation_defect`, not corrected.

use crate::core::{Dimension, OpError, OperatorMatrix};
use num_complex::Complex;
use num_traits::Zero;
use std::fmt;

/// Value of a† at `(row, col)`.
fn creation_cell(row: usize, col: usize) -> Complex<f64> {
    if row == col + 1 {
        Complex::new((row as f64).sqrt(), 0.0)
    } else {
        Complex::zero()
    }
}

/// Value of a at `(row, col)`.
fn annihilation_cell(row: usize, col: usize) -> Complex<f64> {
    if row + 1 == col {
        Complex::new(((row + 1) as f64).sqrt(), 0.0)
    } else {
        Complex::zero()
    }
}

/// The creation and annihilation matrices for one truncation dimension.
///
/// Both matrices are produced together by `LadderOperatorBuilder::build` and
/// are never modified afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct LadderOperators {
    dim: Dimension,
    creation: OperatorMatrix,
    annihilation: OperatorMatrix,
}

impl LadderOperators {
    /// Truncation dimension both matrices were built for.
    pub fn dim(&self) -> Dimension {
        self.dim
    }

    /// The creation operator a†.
    pub fn creation(&self) -> &OperatorMatrix {
        &self.creation
    }

    /// The annihilation operator a.
    pub fn annihilation(&self) -> &OperatorMatrix {
        &self.annihilation
    }

    /// The truncated number operator a†·a, diagonal with entries 0, 1, …, N−1.
    pub fn number_operator(&self) -> OperatorMatrix {
        &self.creation * &self.annihilation
    }

    /// Consumes the pair, returning `(creation, annihilation)`.
    pub fn into_parts(self) -> (OperatorMatrix, OperatorMatrix) {
        (self.creation, self.annihilation)
    }
}

impl fmt::Display for LadderOperators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Ladder operators, {}:", self.dim)?;
        writeln!(f, "  Creation (a†):")?;
        write!(f, "{}", self.creation)?;
        writeln!(f, "  Annihilation (a):")?;
        write!(f, "{}", self.annihilation)
    }
}

/// Builds ladder operator matrices for a fixed truncation dimension.
///
/// The dimension is validated once, in `new`; `build` cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LadderOperatorBuilder {
    dim: Dimension,
}

impl LadderOperatorBuilder {
    /// Creates a builder for dimension `n`.
    ///
    /// Accepts any integer-like input with a `Dimension` conversion
    /// (`usize`, `i64`, `i32`, `u32`, or an integral `f64`).
    ///
    /// # Returns
    /// * `Err(OpError::InvalidDimension)` if `n` is not a positive integer.
    pub fn new<D>(n: D) -> Result<Self, OpError>
    where
        D: TryInto<Dimension, Error = OpError>,
    {
        Ok(Self { dim: n.try_into()? })
    }

    /// Creates a builder from an already-validated dimension.
    pub fn from_dimension(dim: Dimension) -> Self {
        Self { dim }
    }

    pub fn dim(&self) -> Dimension {
        self.dim
    }

    /// Builds the creation operator a† alone.
    pub fn build_creation(&self) -> OperatorMatrix {
        OperatorMatrix::from_fn(self.dim.get(), creation_cell)
    }

    /// Builds the annihilation operator a alone.
    pub fn build_annihilation(&self) -> OperatorMatrix {
        OperatorMatrix::from_fn(self.dim.get(), annihilation_cell)
    }

    /// Builds both matrices. Each call produces fresh values.
    pub fn build(&self) -> LadderOperators {
        log::debug!("building ladder operators for {}", self.dim);
        let creation = self.build_creation();
        let annihilation = self.build_annihilation();
        log::trace!("creation operator:\n{}", creation);
        log::trace!("annihilation operator:\n{}", annihilation);
        LadderOperators {
            dim: self.dim,
            creation,
            annihilation,
        }
    }
}

/// Builds the creation and annihilation matrices for truncation dimension `n`.
///
/// # Returns
/// * `Ok(LadderOperators)` holding both `n x n` matrices.
/// * `Err(OpError::InvalidDimension)` if `n` is zero, negative, or not an
///   integer. No matrix is built in that case.
pub fn build_ladder_operators<D>(n: D) -> Result<LadderOperators, OpError>
where
    D: TryInto<Dimension, Error = OpError>,
{
    Ok(LadderOperatorBuilder::new(n)?.build())
}

/// Builds only the creation operator a† for dimension `n`.
pub fn creation_operator<D>(n: D) -> Result<OperatorMatrix, OpError>
where
    D: TryInto<Dimension, Error = OpError>,
{
    Ok(LadderOperatorBuilder::new(n)?.build_creation())
}

/// Builds only the annihilation operator a for dimension `n`.
pub fn annihilation_operator<D>(n: D) -> Result<OperatorMatrix, OpError>
where
    D: TryInto<Dimension, Error = OpError>,
{
    Ok(LadderOperatorBuilder::new(n)?.build_annihilation())
}
