//! Error types for qalgo-components

use qalgo_core::QuantumError;
use thiserror::Error;

/// Errors raised by component construction and the classical solver
#[derive(Debug, Error)]
pub enum ComponentError {
    /// Configuration rejected at the boundary (unknown field, bad JSON)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Solver input matrix is not square
    #[error("Matrix must be square, got {rows}x{cols}")]
    NonSquareMatrix { rows: usize, cols: usize },

    /// Solver right-hand side doesn't match the matrix
    #[error("Dimension mismatch: matrix has {expected} rows, vector has {actual} entries")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Linear system has no unique solution
    #[error("Matrix is singular, linear system has no unique solution")]
    SingularMatrix,

    /// Probability outside [0, 1]
    #[error("Probability {0} outside [0, 1]")]
    InvalidProbability(f64),

    /// Distribution bounds are not ordered
    #[error("Invalid value bounds: low {low} must be less than high {high}")]
    InvalidBounds { low: f64, high: f64 },

    /// Error from the circuit layer
    #[error(transparent)]
    Circuit(#[from] QuantumError),
}

impl ComponentError {
    /// Create an invalid configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

/// Type alias for results in qalgo-components
pub type Result<T> = std::result::Result<T, ComponentError>;
