// src/core/dimension.rs

use super::error::OpError;
use super::matrix::checked_len;
use std::fmt;
use std::num::NonZeroUsize;

/// Truncation dimension of a Fock space: the number of basis states
/// |0⟩ … |N−1⟩ kept in a finite representation.
///
/// A `Dimension` is always a positive integer. The only way to obtain one is
/// through the `TryFrom` conversions below, each of which rejects zero,
/// negative, fractional, and non-finite input with `OpError::InvalidDimension`.
/// Sizes whose `N x N` complex matrix could not be addressed (`N * N` or its
/// byte size overflowing) are rejected the same way, so every `Dimension`
/// can back a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Dimension(NonZeroUsize);

impl Dimension {
    /// Number of basis states kept.
    pub fn get(self) -> usize {
        self.0.get()
    }

    /// Index of the highest retained level, `N - 1`.
    pub fn top_level(self) -> usize {
        self.0.get() - 1
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dim({})", self.0)
    }
}

impl TryFrom<NonZeroUsize> for Dimension {
    type Error = OpError;

    fn try_from(n: NonZeroUsize) -> Result<Self, Self::Error> {
        Dimension::try_from(n.get())
    }
}

impl TryFrom<usize> for Dimension {
    type Error = OpError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        let n = NonZeroUsize::new(n).ok_or_else(|| OpError::InvalidDimension {
            message: "Truncation dimension must be at least 1, got 0".to_string(),
        })?;
        if checked_len(n.get()).is_none() {
            return Err(OpError::InvalidDimension {
                message: format!("Truncation dimension {} is too large for a {}x{} matrix", n, n, n),
            });
        }
        Ok(Dimension(n))
    }
}

impl TryFrom<i64> for Dimension {
    type Error = OpError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        if n < 1 {
            return Err(OpError::InvalidDimension {
                message: format!("Truncation dimension must be at least 1, got {}", n),
            });
        }
        let n = usize::try_from(n).map_err(|_| OpError::InvalidDimension {
            message: format!("Truncation dimension {} does not fit in usize", n),
        })?;
        Dimension::try_from(n)
    }
}

impl TryFrom<i32> for Dimension {
    type Error = OpError;

    fn try_from(n: i32) -> Result<Self, Self::Error> {
        Dimension::try_from(i64::from(n))
    }
}

impl TryFrom<u32> for Dimension {
    type Error = OpError;

    fn try_from(n: u32) -> Result<Self, Self::Error> {
        Dimension::try_from(i64::from(n))
    }
}

impl TryFrom<f64> for Dimension {
    type Error = OpError;

    /// Accepts only finite, integral values such as `4.0`. `2.5`, `NaN` and
    /// infinities are rejected.
    fn try_from(n: f64) -> Result<Self, Self::Error> {
        if !n.is_finite() || n.fract() != 0.0 {
            return Err(OpError::InvalidDimension {
                message: format!("Truncation dimension must be an integer, got {}", n),
            });
        }
        if n < 1.0 {
            return Err(OpError::InvalidDimension {
                message: format!("Truncation dimension must be at least 1, got {}", n),
            });
        }
        // usize::MAX as f64 rounds up to 2^64, so `>=` excludes it.
        if n >= usize::MAX as f64 {
            return Err(OpError::InvalidDimension {
                message: format!("Truncation dimension {} does not fit in usize", n),
            });
        }
        Dimension::try_from(n as usize)
    }
}
