// tests/gate_tests.rs

use fockops::gates::{
    hadamard, hadamard_unnormalized, pauli_x, pauli_y, pauli_z, phase, phase_s, rx, ry, rz, t_gate,
};
use fockops::{check_unitary, Gate, OpError, OperatorMatrix};

use num_complex::Complex;
use std::f64::consts::{FRAC_1_SQRT_2, PI};

#[test]
fn test_y_times_z_is_i_x() {
    let yz = &pauli_y() * &pauli_z();
    assert!(yz.approx_eq(&pauli_x().scale(Complex::i()), None), "Y·Z =\n{}", yz);
}

#[test]
fn test_unnormalized_hadamard_inverse() -> Result<(), OpError> {
    let inv = hadamard_unnormalized().inverse()?;
    let expected = hadamard_unnormalized().scale(Complex::new(0.5, 0.0));
    assert!(inv.approx_eq(&expected, None), "inverse =\n{}", inv);
    Ok(())
}

#[test]
fn test_hadamard_is_self_inverse() -> Result<(), OpError> {
    let h = hadamard();
    assert!(h.inverse()?.approx_eq(&h, None));
    assert!((&h * &h).approx_eq(&OperatorMatrix::identity(2), None));
    assert!((h[(0, 0)].re - FRAC_1_SQRT_2).abs() < 1e-15);
    Ok(())
}

#[test]
fn test_all_fixed_gates_unitary() -> Result<(), OpError> {
    for gate in Gate::ALL {
        check_unitary(&gate.matrix(), None)?;
    }
    Ok(())
}

#[test]
fn test_rotations_unitary() -> Result<(), OpError> {
    for k in 0..16 {
        let theta = k as f64 * PI / 8.0;
        for m in [rx(theta), ry(theta), rz(theta), phase(theta)] {
            check_unitary(&m, None)?;
        }
    }
    Ok(())
}

#[test]
fn test_unnormalized_hadamard_not_unitary() {
    assert!(matches!(
        check_unitary(&hadamard_unnormalized(), None),
        Err(OpError::ValidationFailed { .. })
    ));
}

#[test]
fn test_paulis_square_to_identity() {
    let id = OperatorMatrix::identity(2);
    for p in [pauli_x(), pauli_y(), pauli_z()] {
        assert!((&p * &p).approx_eq(&id, None));
    }
}

#[test]
fn test_s_and_t_diagonals() {
    assert!((phase_s()[(1, 1)] - Complex::i()).norm() < 1e-12);
    let t = t_gate()[(1, 1)];
    assert!((t - Complex::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2)).norm() < 1e-12);
}

#[test]
fn test_gate_matrix_matches_functions() -> Result<(), OpError> {
    assert_eq!("x".parse::<Gate>()?.matrix(), pauli_x());
    assert_eq!("Y".parse::<Gate>()?.matrix(), pauli_y());
    assert_eq!("h".parse::<Gate>()?.matrix(), hadamard());
    Ok(())
}
