// src/gates/mod.rs

//! Single-qubit gate matrices.
//!
//! Fixed gates (Pauli, Hadamard, S, T) are also named by the `Gate` enum so
//! they can be parsed from and printed as their usual one-letter symbols.
//! Rotations take an angle in radians.

use crate::core::{OpError, OperatorMatrix};
use num_complex::Complex;
use num_traits::{One, Zero};
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_4};
use std::fmt;
use std::str::FromStr;

/// Pauli X (bit flip).
pub fn pauli_x() -> OperatorMatrix {
    OperatorMatrix::from_array([
        [Complex::zero(), Complex::one()],
        [Complex::one(), Complex::zero()],
    ])
}

/// Pauli Y.
pub fn pauli_y() -> OperatorMatrix {
    let i = Complex::i();
    OperatorMatrix::from_array([
        [Complex::zero(), -i],
        [i, Complex::zero()],
    ])
}

/// Pauli Z (phase flip).
pub fn pauli_z() -> OperatorMatrix {
    OperatorMatrix::from_array([
        [Complex::one(), Complex::zero()],
        [Complex::zero(), Complex::new(-1.0, 0.0)],
    ])
}

/// Normalized Hadamard, (1/√2)·[[1, 1], [1, −1]]. Unitary and self-inverse.
pub fn hadamard() -> OperatorMatrix {
    hadamard_unnormalized().scale(Complex::new(FRAC_1_SQRT_2, 0.0))
}

/// The Hadamard pattern without the 1/√2 factor, [[1, 1], [1, −1]].
/// Not unitary; its inverse is ½·[[1, 1], [1, −1]].
pub fn hadamard_unnormalized() -> OperatorMatrix {
    OperatorMatrix::from_array([
        [Complex::one(), Complex::one()],
        [Complex::one(), Complex::new(-1.0, 0.0)],
    ])
}

/// Phase gate S = diag(1, i).
pub fn phase_s() -> OperatorMatrix {
    phase(std::f64::consts::FRAC_PI_2)
}

/// T = diag(1, e^(iπ/4)).
pub fn t_gate() -> OperatorMatrix {
    phase(FRAC_PI_4)
}

/// Phase shift diag(1, e^(iθ)).
pub fn phase(theta: f64) -> OperatorMatrix {
    OperatorMatrix::from_array([
        [Complex::one(), Complex::zero()],
        [Complex::zero(), Complex::from_polar(1.0, theta)],
    ])
}

/// Rx(θ) = [[cos(θ/2), −i·sin(θ/2)], [−i·sin(θ/2), cos(θ/2)]].
pub fn rx(theta: f64) -> OperatorMatrix {
    let (sin_a, cos_a) = (theta / 2.0).sin_cos();
    let i = Complex::i();
    OperatorMatrix::from_array([
        [Complex::new(cos_a, 0.0), -i * sin_a],
        [-i * sin_a, Complex::new(cos_a, 0.0)],
    ])
}

/// Ry(θ) = [[cos(θ/2), −sin(θ/2)], [sin(θ/2), cos(θ/2)]].
pub fn ry(theta: f64) -> OperatorMatrix {
    let (sin_a, cos_a) = (theta / 2.0).sin_cos();
    OperatorMatrix::from_array([
        [Complex::new(cos_a, 0.0), Complex::new(-sin_a, 0.0)],
        [Complex::new(sin_a, 0.0), Complex::new(cos_a, 0.0)],
    ])
}

/// Rz(θ) = diag(e^(−iθ/2), e^(iθ/2)).
pub fn rz(theta: f64) -> OperatorMatrix {
    OperatorMatrix::from_array([
        [Complex::from_polar(1.0, -theta / 2.0), Complex::zero()],
        [Complex::zero(), Complex::from_polar(1.0, theta / 2.0)],
    ])
}

/// The fixed (parameter-free) single-qubit gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gate {
    X,
    Y,
    Z,
    /// Normalized Hadamard.
    H,
    S,
    T,
}

impl Gate {
    /// Every fixed gate, in display order.
    pub const ALL: [Gate; 6] = [Gate::X, Gate::Y, Gate::Z, Gate::H, Gate::S, Gate::T];

    /// The gate's 2x2 matrix.
    pub fn matrix(&self) -> OperatorMatrix {
        match self {
            Gate::X => pauli_x(),
            Gate::Y => pauli_y(),
            Gate::Z => pauli_z(),
            Gate::H => hadamard(),
            Gate::S => phase_s(),
            Gate::T => t_gate(),
        }
    }

    /// Short symbol used by `Display` and accepted by `FromStr`.
    pub fn symbol(&self) -> &'static str {
        match self {
            Gate::X => "X",
            Gate::Y => "Y",
            Gate::Z => "Z",
            Gate::H => "H",
            Gate::S => "S",
            Gate::T => "T",
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Gate {
    type Err = OpError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "X" => Ok(Gate::X),
            "Y" => Ok(Gate::Y),
            "Z" => Ok(Gate::Z),
            "H" => Ok(Gate::H),
            "S" => Ok(Gate::S),
            "T" => Ok(Gate::T),
            _ => Err(OpError::UnknownGate { name: s.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_parse_round_trip() -> Result<(), OpError> {
        for gate in Gate::ALL {
            assert_eq!(gate.to_string().parse::<Gate>()?, gate);
        }
        assert_eq!(" h ".parse::<Gate>()?, Gate::H);
        assert_eq!("CNOT".parse::<Gate>(), Err(OpError::UnknownGate { name: "CNOT".to_string() }));
        Ok(())
    }

    #[test]
    fn test_t_squared_is_s() {
        let t = t_gate();
        assert!((&t * &t).approx_eq(&phase_s(), None));
    }

    #[test]
    fn test_rotations_at_pi() {
        // Rx(π) = −iX, Ry(π) = −iY, Rz(π) = −iZ
        let minus_i = Complex::new(0.0, -1.0);
        assert!(rx(PI).approx_eq(&pauli_x().scale(minus_i), None));
        assert!(ry(PI).approx_eq(&pauli_y().scale(minus_i), None));
        assert!(rz(PI).approx_eq(&pauli_z().scale(minus_i), None));
    }

    #[test]
    fn test_zero_rotation_is_identity() {
        let id = OperatorMatrix::identity(2);
        for m in [rx(0.0), ry(0.0), rz(0.0), phase(0.0)] {
            assert!(m.approx_eq(&id, None));
        }
    }
}
