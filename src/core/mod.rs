// src/core/mod.rs

//! Core data structures and types

// Declare modules within core
pub mod error;
pub mod dimension;
pub mod matrix;

// Re-export public types for convenient access via `fockops::core::TypeName`
pub use error::OpError;
pub use dimension::Dimension;
pub use matrix::OperatorMatrix;

pub mod constants;
pub use constants::fock_constants::{DEFAULT_TOLERANCE, SINGULAR_TOLERANCE}; // Re-export
