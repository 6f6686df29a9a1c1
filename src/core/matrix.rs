// src/core/matrix.rs

use super::constants::fock_constants::{DEFAULT_TOLERANCE, SINGULAR_TOLERANCE};
use super::error::OpError;
use approx::AbsDiffEq;
use nalgebra::DMatrix;
use num_complex::Complex;
use num_traits::Zero;
use std::fmt;
use std::ops::{Add, Index, Mul, Sub};

/// Number of entries in a `dim x dim` complex matrix, or `None` when the
/// entry count or its byte size does not fit in memory addressing.
pub(crate) fn checked_len(dim: usize) -> Option<usize> {
    let len = dim.checked_mul(dim)?;
    let bytes = len.checked_mul(std::mem::size_of::<Complex<f64>>())?;
    (bytes <= isize::MAX as usize).then_some(len)
}

/// A dense square matrix of complex amplitudes representing an operator
/// in a finite basis.
///
/// Row `i` is the bra index and column `j` the ket index, so `m[(i, j)]` is
/// ⟨i|M|j⟩. Storage and arithmetic are delegated to `nalgebra::DMatrix`; this
/// type only guarantees squareness. Once built, a matrix is never modified in
/// place; every operation returns a new value.
#[derive(Debug, Clone, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct OperatorMatrix {
    inner: DMatrix<Complex<f64>>,
}

impl OperatorMatrix {
    fn from_inner(inner: DMatrix<Complex<f64>>) -> Self {
        Self { inner }
    }

    /// Matrix of the given side length with every entry zero.
    ///
    /// Panics if `dim * dim` entries cannot be allocated; see `try_from_fn`.
    pub fn zeros(dim: usize) -> Self {
        assert!(checked_len(dim).is_some(), "{}x{} matrix is too large to allocate", dim, dim);
        Self::from_inner(DMatrix::zeros(dim, dim))
    }

    /// Identity matrix of the given side length.
    pub fn identity(dim: usize) -> Self {
        assert!(checked_len(dim).is_some(), "{}x{} matrix is too large to allocate", dim, dim);
        Self::from_inner(DMatrix::identity(dim, dim))
    }

    /// Builds a matrix by evaluating `f(row, col)` for every cell.
    ///
    /// Panics if `dim * dim` entries cannot be allocated; use `try_from_fn`
    /// for an error instead.
    pub fn from_fn<F>(dim: usize, f: F) -> Self
    where
        F: Fn(usize, usize) -> Complex<f64> + Sync,
    {
        match Self::try_from_fn(dim, f) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }

    /// Builds a matrix by evaluating `f(row, col)` for every cell.
    ///
    /// Each cell is computed independently of every other, so with the
    /// `parallel` feature enabled the cells are filled on the rayon pool.
    /// The result is the same either way.
    ///
    /// # Returns
    /// * `Err(OpError::InvalidDimension)` if `dim * dim` overflows or its
    ///   byte size exceeds `isize::MAX`.
    pub fn try_from_fn<F>(dim: usize, f: F) -> Result<Self, OpError>
    where
        F: Fn(usize, usize) -> Complex<f64> + Sync,
    {
        let len = checked_len(dim).ok_or_else(|| OpError::InvalidDimension {
            message: format!("{}x{} matrix is too large to allocate", dim, dim),
        })?;

        // Column-major, matching nalgebra's storage: k = col * dim + row.
        #[cfg(feature = "parallel")]
        let entries: Vec<Complex<f64>> = {
            use rayon::prelude::*;
            (0..len).into_par_iter().map(|k| f(k % dim, k / dim)).collect()
        };
        #[cfg(not(feature = "parallel"))]
        let entries: Vec<Complex<f64>> = (0..len).map(|k| f(k % dim, k / dim)).collect();

        Ok(Self::from_inner(DMatrix::from_vec(dim, dim, entries)))
    }

    /// Builds a matrix from a fixed-size array literal, row by row.
    pub fn from_array<const N: usize>(rows: [[Complex<f64>; N]; N]) -> Self {
        Self::from_inner(DMatrix::from_fn(N, N, |i, j| rows[i][j]))
    }

    /// Builds a matrix from row vectors.
    ///
    /// # Returns
    /// * `Err(OpError::DimensionMismatch)` if `rows` is empty or any row's
    ///   length differs from the number of rows.
    pub fn from_rows(rows: &[Vec<Complex<f64>>]) -> Result<Self, OpError> {
        let dim = rows.len();
        if dim == 0 {
            return Err(OpError::DimensionMismatch { expected: 1, found: 0 });
        }
        if let Some(bad) = rows.iter().find(|row| row.len() != dim) {
            return Err(OpError::DimensionMismatch { expected: dim, found: bad.len() });
        }
        Ok(Self::from_inner(DMatrix::from_fn(dim, dim, |i, j| rows[i][j])))
    }

    /// Side length of the matrix.
    pub fn dim(&self) -> usize {
        self.inner.nrows()
    }

    /// Borrow the underlying nalgebra matrix.
    pub fn as_dmatrix(&self) -> &DMatrix<Complex<f64>> {
        &self.inner
    }

    /// Entry at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&Complex<f64>> {
        self.inner.get((row, col))
    }

    /// One row of the matrix, left to right.
    pub fn row(&self, row: usize) -> Vec<Complex<f64>> {
        self.inner.row(row).iter().copied().collect()
    }

    /// The diagonal entries, top-left to bottom-right.
    pub fn diagonal(&self) -> Vec<Complex<f64>> {
        self.inner.diagonal().iter().copied().collect()
    }

    pub fn transpose(&self) -> Self {
        Self::from_inner(self.inner.transpose())
    }

    /// Conjugate transpose (M†).
    pub fn adjoint(&self) -> Self {
        Self::from_inner(self.inner.adjoint())
    }

    /// Every entry multiplied by `factor`.
    pub fn scale(&self, factor: Complex<f64>) -> Self {
        Self::from_inner(self.inner.map(|c| c * factor))
    }

    /// Matrix product `self · rhs`, checking dimensions first.
    pub fn try_matmul(&self, rhs: &OperatorMatrix) -> Result<Self, OpError> {
        if self.dim() != rhs.dim() {
            return Err(OpError::DimensionMismatch { expected: self.dim(), found: rhs.dim() });
        }
        Ok(Self::from_inner(&self.inner * &rhs.inner))
    }

    /// Matrix inverse through nalgebra's LU decomposition.
    ///
    /// # Returns
    /// * `Err(OpError::SingularMatrix)` if the matrix is empty, its
    ///   determinant's modulus is at or below `SINGULAR_TOLERANCE`, or the
    ///   decomposition finds no inverse.
    pub fn inverse(&self) -> Result<Self, OpError> {
        let n = self.dim();
        if n == 0 {
            return Err(OpError::SingularMatrix { message: "Cannot invert an empty matrix".to_string() });
        }
        let det = self.inner.determinant();
        if det.norm() <= SINGULAR_TOLERANCE {
            log::debug!("inverse: |det| = {:.3e} below tolerance for {}x{} matrix", det.norm(), n, n);
            return Err(OpError::SingularMatrix {
                message: format!("Determinant {:.3e} of {}x{} matrix is numerically zero", det.norm(), n, n),
            });
        }
        self.inner
            .clone()
            .try_inverse()
            .map(Self::from_inner)
            .ok_or_else(|| OpError::SingularMatrix {
                message: format!("LU decomposition of {}x{} matrix found no inverse", n, n),
            })
    }

    /// Largest element-wise modulus of `self - other`, or `None` if the
    /// dimensions differ.
    pub fn max_deviation(&self, other: &OperatorMatrix) -> Option<f64> {
        if self.dim() != other.dim() {
            return None;
        }
        Some((&self.inner - &other.inner).iter().map(|c| c.norm()).fold(0.0, f64::max))
    }

    /// Element-wise approximate equality. Matrices of different dimension are never equal.
    ///
    /// # Arguments
    /// * `other` - Matrix to compare against.
    /// * `tolerance` - Maximum allowed absolute difference of the real and
    ///   imaginary parts of any entry (defaults to `DEFAULT_TOLERANCE`).
    pub fn approx_eq(&self, other: &OperatorMatrix, tolerance: Option<f64>) -> bool {
        let tol = tolerance.unwrap_or(DEFAULT_TOLERANCE);
        self.dim() == other.dim() && self.inner.abs_diff_eq(&other.inner, tol)
    }

    /// True when every off-diagonal entry is within `tolerance` of zero.
    pub fn is_diagonal(&self, tolerance: Option<f64>) -> bool {
        let tol = tolerance.unwrap_or(DEFAULT_TOLERANCE);
        let zero = Complex::zero();
        self.inner
            .iter()
            .enumerate()
            .all(|(k, c)| k % self.dim() == k / self.dim() || c.abs_diff_eq(&zero, tol))
    }
}

impl TryFrom<DMatrix<Complex<f64>>> for OperatorMatrix {
    type Error = OpError;

    /// Accepts only square matrices.
    fn try_from(m: DMatrix<Complex<f64>>) -> Result<Self, Self::Error> {
        if m.nrows() != m.ncols() {
            return Err(OpError::DimensionMismatch { expected: m.nrows(), found: m.ncols() });
        }
        Ok(Self::from_inner(m))
    }
}

impl Index<(usize, usize)> for OperatorMatrix {
    type Output = Complex<f64>;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.inner[index]
    }
}

impl<'b> Mul<&'b OperatorMatrix> for &OperatorMatrix {
    type Output = OperatorMatrix;

    /// Panics on dimension mismatch; use `try_matmul` to get an error instead.
    fn mul(self, rhs: &'b OperatorMatrix) -> Self::Output {
        match self.try_matmul(rhs) {
            Ok(product) => product,
            Err(e) => panic!("{}", e),
        }
    }
}

impl<'b> Add<&'b OperatorMatrix> for &OperatorMatrix {
    type Output = OperatorMatrix;

    fn add(self, rhs: &'b OperatorMatrix) -> Self::Output {
        assert_eq!(self.dim(), rhs.dim(), "cannot add {0}x{0} and {1}x{1} matrices", self.dim(), rhs.dim());
        OperatorMatrix::from_inner(&self.inner + &rhs.inner)
    }
}

impl<'b> Sub<&'b OperatorMatrix> for &OperatorMatrix {
    type Output = OperatorMatrix;

    fn sub(self, rhs: &'b OperatorMatrix) -> Self::Output {
        assert_eq!(self.dim(), rhs.dim(), "cannot subtract {0}x{0} and {1}x{1} matrices", self.dim(), rhs.dim());
        OperatorMatrix::from_inner(&self.inner - &rhs.inner)
    }
}

impl fmt::Display for OperatorMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.inner.row_iter() {
            write!(f, "[")?;
            for (j, c) in row.iter().enumerate() {
                write!(f, "{}{:.4}", if j > 0 { ", " } else { "" }, c)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: f64, im: f64) -> Complex<f64> {
        Complex::new(re, im)
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let rows = vec![vec![c(1.0, 0.0), c(0.0, 0.0)], vec![c(1.0, 0.0)]];
        assert_eq!(
            OperatorMatrix::from_rows(&rows),
            Err(OpError::DimensionMismatch { expected: 2, found: 1 })
        );
        assert!(OperatorMatrix::from_rows(&[]).is_err());
    }

    #[test]
    fn test_row_col_orientation() -> Result<(), OpError> {
        let m = OperatorMatrix::from_rows(&[
            vec![c(1.0, 0.0), c(2.0, 0.0)],
            vec![c(3.0, 0.0), c(4.0, 0.0)],
        ])?;
        assert_eq!(m[(0, 1)], c(2.0, 0.0));
        assert_eq!(m[(1, 0)], c(3.0, 0.0));
        assert_eq!(m.row(1), vec![c(3.0, 0.0), c(4.0, 0.0)]);
        assert_eq!(m.get(2, 0), None);
        // from_fn must agree with from_rows on which index is the row.
        let f = OperatorMatrix::from_fn(2, |i, j| c((2 * i + j + 1) as f64, 0.0));
        assert_eq!(f, m);
        Ok(())
    }

    #[test]
    fn test_checked_len_limits() {
        assert_eq!(checked_len(0), Some(0));
        assert_eq!(checked_len(4), Some(16));
        assert_eq!(checked_len(usize::MAX), None);
        #[cfg(target_pointer_width = "64")]
        {
            assert!(checked_len(1 << 29).is_some());
            assert!(checked_len(1 << 30).is_none());
            assert!(checked_len(1 << 33).is_none());
        }
    }

    #[test]
    fn test_try_from_fn_rejects_overflowing_side() {
        let result = OperatorMatrix::try_from_fn(usize::MAX, |_, _| Complex::zero());
        assert!(matches!(result, Err(OpError::InvalidDimension { .. })));
    }

    #[test]
    fn test_try_from_non_square_dmatrix() {
        let m = DMatrix::<Complex<f64>>::zeros(2, 3);
        assert_eq!(OperatorMatrix::try_from(m), Err(OpError::DimensionMismatch { expected: 2, found: 3 }));
    }

    #[test]
    fn test_adjoint_conjugates() {
        let m = OperatorMatrix::from_array([[c(0.0, 0.0), c(0.0, -1.0)], [c(0.0, 1.0), c(0.0, 0.0)]]);
        // Pauli Y is Hermitian but not symmetric.
        assert_eq!(m.adjoint(), m);
        assert_ne!(m.transpose(), m);
    }

    #[test]
    fn test_matmul_dimension_mismatch() {
        let a = OperatorMatrix::identity(2);
        let b = OperatorMatrix::identity(3);
        assert_eq!(a.try_matmul(&b), Err(OpError::DimensionMismatch { expected: 2, found: 3 }));
    }

    #[test]
    fn test_inverse_needs_pivoting() -> Result<(), OpError> {
        // Zero in the top-left forces a row swap.
        let m = OperatorMatrix::from_array([
            [c(0.0, 0.0), c(2.0, 0.0), c(0.0, 0.0)],
            [c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0)],
            [c(0.0, 0.0), c(0.0, 0.0), c(0.0, 4.0)],
        ]);
        let inv = m.inverse()?;
        assert!((&m * &inv).approx_eq(&OperatorMatrix::identity(3), None));
        assert!((inv[(2, 2)] - c(0.0, -0.25)).norm() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_inverse_singular() {
        let m = OperatorMatrix::from_array([[c(1.0, 0.0), c(2.0, 0.0)], [c(2.0, 0.0), c(4.0, 0.0)]]);
        assert!(matches!(m.inverse(), Err(OpError::SingularMatrix { .. })));
        assert!(matches!(OperatorMatrix::zeros(0).inverse(), Err(OpError::SingularMatrix { .. })));
    }

    #[test]
    fn test_approx_eq_tolerance() {
        let a = OperatorMatrix::identity(2);
        let b = OperatorMatrix::from_array([[c(1.0 + 1e-6, 0.0), c(0.0, 0.0)], [c(0.0, 0.0), c(1.0, 0.0)]]);
        assert!(!a.approx_eq(&b, None));
        assert!(a.approx_eq(&b, Some(1e-5)));
        assert!(!a.approx_eq(&OperatorMatrix::identity(3), Some(1.0)));
    }

    #[test]
    fn test_is_diagonal() {
        assert!(OperatorMatrix::identity(3).is_diagonal(None));
        let off = OperatorMatrix::from_array([[c(1.0, 0.0), c(0.0, 1e-3)], [c(0.0, 0.0), c(1.0, 0.0)]]);
        assert!(!off.is_diagonal(None));
        assert!(off.is_diagonal(Some(1e-2)));
    }

    #[test]
    fn test_display() {
        let m = OperatorMatrix::identity(2);
        assert_eq!(m.to_string(), "[1.0000+0.0000i, 0.0000+0.0000i]\n[0.0000+0.0000i, 1.0000+0.0000i]\n");
    }
}
