//! Quantum gate trait and gate operations

use crate::{QuantumError, QubitId, Result};
use num_complex::Complex64;
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

/// Trait for quantum gate operations
///
/// Gates are stateless and reusable across multiple circuits.
///
/// # Example
/// ```ignore
/// struct HadamardGate;
///
/// impl Gate for HadamardGate {
///     fn name(&self) -> &str { "H" }
///     fn num_qubits(&self) -> usize { 1 }
/// }
/// ```
pub trait Gate: Send + Sync + fmt::Debug {
    /// The name of the gate (e.g., "H", "CNOT", "RY")
    fn name(&self) -> &str;

    /// Number of qubits this gate acts on
    fn num_qubits(&self) -> usize;

    /// Whether this gate is hermitian (self-adjoint)
    ///
    /// Hermitian gates are their own inverse.
    fn is_hermitian(&self) -> bool {
        false
    }

    /// Get a description of this gate
    fn description(&self) -> String {
        format!("{}-qubit gate '{}'", self.num_qubits(), self.name())
    }

    /// Get the unitary matrix for this gate as a flattened vector
    ///
    /// The matrix is stored in row-major order over the computational basis
    /// of the addressed qubits, with the first listed qubit as the most
    /// significant bit of the basis index. For an n-qubit gate the returned
    /// vector has length (2^n)^2.
    ///
    /// Returns `None` for gates without a simple matrix representation.
    fn matrix(&self) -> Option<Vec<Complex64>> {
        None
    }
}

/// A gate operation applied to specific qubits
///
/// Combines a gate with the qubits it operates on.
#[derive(Clone)]
pub struct GateOp {
    gate: Arc<dyn Gate>,
    qubits: SmallVec<[QubitId; 2]>, // Most gates are 1-2 qubits
}

impl GateOp {
    /// Create a new gate operation
    ///
    /// # Errors
    /// Returns error if:
    /// - Qubit count doesn't match gate requirements
    /// - Duplicate qubits specified
    pub fn new(gate: Arc<dyn Gate>, qubits: &[QubitId]) -> Result<Self> {
        if qubits.len() != gate.num_qubits() {
            return Err(QuantumError::invalid_qubit_count(
                gate.name(),
                gate.num_qubits(),
                qubits.len(),
            ));
        }

        for i in 0..qubits.len() {
            for j in (i + 1)..qubits.len() {
                if qubits[i] == qubits[j] {
                    return Err(QuantumError::DuplicateQubit(qubits[i]));
                }
            }
        }

        Ok(Self {
            gate,
            qubits: SmallVec::from_slice(qubits),
        })
    }

    /// Get the gate
    #[inline]
    pub fn gate(&self) -> &Arc<dyn Gate> {
        &self.gate
    }

    /// Get the qubits this operation acts on
    #[inline]
    pub fn qubits(&self) -> &[QubitId] {
        &self.qubits
    }

    /// Get the number of qubits
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.qubits.len()
    }
}

impl fmt::Debug for GateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.gate.name())?;
        for (i, q) in self.qubits.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", q)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for GateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
