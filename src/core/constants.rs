//! Numeric defaults used when a caller does not supply its own tolerance.

/// Crate-wide default tolerances. Every function taking an `Option<f64>`
/// tolerance falls back to one of these.
pub mod fock_constants {
    /// Default absolute tolerance for element-wise approximate equality.
    /// Matches the `atol`-style checks the matrices are usually spot-checked with.
    pub const DEFAULT_TOLERANCE: f64 = 1e-9;
    /// A matrix whose determinant has modulus at or below this is treated as singular.
    pub const SINGULAR_TOLERANCE: f64 = 1e-12;
}
