//! Error types for qalgo-core

use crate::QubitId;
use thiserror::Error;

/// Errors that can occur in quantum circuit operations
#[derive(Debug, Error)]
pub enum QuantumError {
    /// Invalid qubit index used
    #[error("Invalid qubit index {0}: circuit has only {1} qubits")]
    InvalidQubit(usize, usize),

    /// Gate applied to wrong number of qubits
    #[error("Gate '{gate}' requires {expected} qubits, but {actual} were provided")]
    InvalidQubitCount {
        gate: String,
        expected: usize,
        actual: usize,
    },

    /// Duplicate qubit in gate operation
    #[error("Duplicate qubit {0} in gate operation")]
    DuplicateQubit(QubitId),

    /// Circuit factory invoked with a wrong-sized target register
    #[error("Factory '{factory}' expects {expected} target qubits, but {actual} were provided")]
    TargetCountMismatch {
        factory: String,
        expected: usize,
        actual: usize,
    },

    /// Circuit factory invoked with too few ancilla qubits
    #[error("Factory '{factory}' requires {required} ancilla qubits, but only {available} were provided")]
    InsufficientAncillas {
        factory: String,
        required: usize,
        available: usize,
    },

    /// Generic circuit validation error
    #[error("Circuit validation failed: {0}")]
    ValidationError(String),
}

impl QuantumError {
    /// Create an invalid qubit error
    pub fn invalid_qubit(qubit: usize, num_qubits: usize) -> Self {
        Self::InvalidQubit(qubit, num_qubits)
    }

    /// Create an invalid qubit count error
    pub fn invalid_qubit_count(gate: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::InvalidQubitCount {
            gate: gate.into(),
            expected,
            actual,
        }
    }

    /// Create a target count mismatch error
    pub fn target_count_mismatch(
        factory: impl Into<String>,
        expected: usize,
        actual: usize,
    ) -> Self {
        Self::TargetCountMismatch {
            factory: factory.into(),
            expected,
            actual,
        }
    }

    /// Create an insufficient ancillas error
    pub fn insufficient_ancillas(
        factory: impl Into<String>,
        required: usize,
        available: usize,
    ) -> Self {
        Self::InsufficientAncillas {
            factory: factory.into(),
            required,
            available,
        }
    }
}
