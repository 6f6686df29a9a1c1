// src/lib.rs

//! `fockops` - Operator matrices for small quantum systems
//!
//! The centre of the crate is the bosonic ladder operator builder: given a
//! truncation dimension `N`, it produces the creation (a†) and annihilation
//! (a) matrices in the Fock basis |0⟩ … |N−1⟩. Alongside it sit the common
//! single-qubit gates and a few numeric checks (transpose pairing, number
//! operator, unitarity) for inspecting the results.
//!
//! Enable the `parallel` feature to fill matrix cells on the rayon pool.

pub mod core;
pub mod ladder;
pub mod gates;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use crate::core::{Dimension, OpError, OperatorMatrix};
pub use ladder::{
    build_ladder_operators,
    creation_operator,
    annihilation_operator,
    LadderOperatorBuilder,
    LadderOperators,
};
pub use gates::Gate;
pub use validation::{
    check_number_operator,
    check_transpose_pair,
    check_unitary,
    truncation_defect,
    validate_ladder_operators,
};

// Example 1: Ladder operators for a four-level truncation
// Builds a† and a for N = 4 and checks the closed-form entries.
/// ```
/// use fockops::{build_ladder_operators, OpError};
///
/// let ops = build_ladder_operators(4)?;
/// println!("{}", ops);
///
/// // a† raises |j> to sqrt(j+1)|j+1>, so the subdiagonal holds 1, √2, √3.
/// let a_dag = ops.creation();
/// assert_eq!(a_dag[(1, 0)].re, 1.0);
/// assert!((a_dag[(2, 1)].re - 2f64.sqrt()).abs() < 1e-12);
/// assert!((a_dag[(3, 2)].re - 3f64.sqrt()).abs() < 1e-12);
///
/// // a is the transpose of a†.
/// assert_eq!(ops.annihilation(), &a_dag.transpose());
/// # Ok::<(), OpError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Rejected dimensions
// Zero, negative and fractional truncations never produce a matrix.
/// ```
/// use fockops::{build_ladder_operators, OpError};
///
/// for result in [
///     build_ladder_operators(0),
///     build_ladder_operators(-3),
///     build_ladder_operators(2.5),
/// ] {
///     assert!(matches!(result, Err(OpError::InvalidDimension { .. })));
/// }
/// ```
#[doc(hidden)]
const _: () = ();

// Example 3: Gate spot check
// Y·Z equals i·X.
/// ```
/// use fockops::gates::{pauli_x, pauli_y, pauli_z};
/// use num_complex::Complex;
///
/// let yz = &pauli_y() * &pauli_z();
/// assert!(yz.approx_eq(&pauli_x().scale(Complex::i()), None));
/// ```
#[doc(hidden)]
const _: () = ();
