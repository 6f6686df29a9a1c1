//! Spot checks on single-qubit gates: Y·Z against i·X and the inverse of
//! the unnormalized Hadamard pattern.

use fockops::gates::{hadamard_unnormalized, pauli_x, pauli_y, pauli_z};
use fockops::{check_unitary, Gate, OpError};
use num_complex::Complex;

fn main() -> Result<(), OpError> {
    env_logger::init();

    println!("--- fockops Example: Gate Spot Checks ---");
    for gate in Gate::ALL {
        println!("{}:\n{}", gate, gate.matrix());
        check_unitary(&gate.matrix(), None)?;
    }

    let yz = &pauli_y() * &pauli_z();
    println!("Y·Z:\n{}", yz);
    println!("Y·Z ≈ i·X: {}", yz.approx_eq(&pauli_x().scale(Complex::i()), None));

    println!("\ninv([[1, 1], [1, -1]]):\n{}", hadamard_unnormalized().inverse()?);
    Ok(())
}
