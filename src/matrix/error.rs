// src/matrix/error.rs

use thiserror::Error;

/// Contract violations raised by the solver.
///
/// Inconsistent and under-determined systems are not errors; they come back as
/// [`Classification`](crate::matrix::solution::Classification) variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// A pivot had to be divided out but shares a factor with the modulus.
    #[error("pivot {pivot} in row {row} is not invertible modulo {modulus}")]
    NonInvertibleModulus { row: usize, pivot: u64, modulus: u64 },

    /// Input rejected before elimination.
    #[error("malformed system: {reason}")]
    Malformed { reason: String },

    /// An operation was called before the step it depends on.
    #[error("{operation} requires {required} to run first")]
    Stage {
        operation: &'static str,
        required: &'static str,
    },

    /// A settled diagonal was annihilated by a zero-divisor rescale.
    #[error("pivot of row {row} vanished under rescaling; modulus is not prime")]
    DegeneratePivot { row: usize },

    #[error("modulus {modulus} is not prime")]
    CompositeModulus { modulus: u64 },
}

impl SolveError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        SolveError::Malformed { reason: reason.into() }
    }
}
