//! Error types for qalgo-state

use qalgo_core::QuantumError;
use thiserror::Error;

/// Errors that can occur during statevector simulation
#[derive(Debug, Error)]
pub enum StateError {
    /// Requested state dimension is not supported
    #[error("Invalid state dimension: {dimension}")]
    InvalidDimension { dimension: usize },

    /// Amplitude buffer doesn't match the state dimension
    #[error("Dimension mismatch: expected {expected} amplitudes, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Operation addresses a qubit outside the state
    #[error("Qubit {qubit} out of range for {num_qubits}-qubit state")]
    QubitOutOfRange { qubit: usize, num_qubits: usize },

    /// Gate without a matrix representation cannot be simulated
    #[error("Gate '{0}' has no matrix representation")]
    NonUnitaryGate(String),

    /// Error from the circuit layer
    #[error(transparent)]
    Circuit(#[from] QuantumError),
}

/// Type alias for results in qalgo-state
pub type Result<T> = std::result::Result<T, StateError>;
