//! Quantum circuit representation

use crate::gate::Gate;
use crate::{GateOp, QuantumError, QubitId, Result};
use std::sync::Arc;

/// A quantum circuit
///
/// Contains a sequence of quantum gate operations applied to qubits.
/// Circuit factories append to a circuit in place; the circuit itself never
/// interprets the gates it holds.
///
/// # Example
/// ```
/// use qalgo_core::Circuit;
///
/// let circuit = Circuit::new(3);
/// assert_eq!(circuit.num_qubits(), 3);
/// assert_eq!(circuit.len(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct Circuit {
    num_qubits: usize,
    operations: Vec<GateOp>,
}

impl Circuit {
    /// Create a new quantum circuit with the specified number of qubits
    ///
    /// # Panics
    /// Panics if `num_qubits` is 0
    pub fn new(num_qubits: usize) -> Self {
        assert!(num_qubits > 0, "Circuit must have at least one qubit");
        Self {
            num_qubits,
            operations: Vec::new(),
        }
    }

    /// Create a circuit with pre-allocated capacity
    pub fn with_capacity(num_qubits: usize, capacity: usize) -> Self {
        assert!(num_qubits > 0, "Circuit must have at least one qubit");
        Self {
            num_qubits,
            operations: Vec::with_capacity(capacity),
        }
    }

    /// Get the number of qubits in the circuit
    #[inline]
    pub const fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get the number of operations in the circuit
    #[inline]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Check if the circuit is empty (no operations)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Add a gate operation to the circuit
    ///
    /// # Errors
    /// Returns error if any qubit index is out of bounds, the qubit count
    /// doesn't match the gate, or a qubit is duplicated.
    pub fn add_gate(&mut self, gate: Arc<dyn Gate>, qubits: &[QubitId]) -> Result<()> {
        for &qubit in qubits {
            if qubit.index() >= self.num_qubits {
                return Err(QuantumError::invalid_qubit(qubit.index(), self.num_qubits));
            }
        }

        let gate_op = GateOp::new(gate, qubits)?;
        self.operations.push(gate_op);
        Ok(())
    }

    /// Get an iterator over the operations
    pub fn operations(&self) -> impl Iterator<Item = &GateOp> {
        self.operations.iter()
    }

    /// Get a specific operation by index
    pub fn get_operation(&self, index: usize) -> Option<&GateOp> {
        self.operations.get(index)
    }

    /// Clear all operations from the circuit
    pub fn clear(&mut self) {
        self.operations.clear();
    }

    /// Validate the circuit
    ///
    /// Checks that all operations address qubits inside the circuit.
    pub fn validate(&self) -> Result<()> {
        for (i, op) in self.operations.iter().enumerate() {
            for &qubit in op.qubits() {
                if qubit.index() >= self.num_qubits {
                    return Err(QuantumError::ValidationError(format!(
                        "Operation {} uses invalid qubit {}",
                        i, qubit
                    )));
                }
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for Circuit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Circuit({} qubits, {} operations)",
            self.num_qubits,
            self.len()
        )?;
        for (i, op) in self.operations.iter().enumerate() {
            writeln!(f, "  {}: {}", i, op)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gates::{CNot, Hadamard};

    #[test]
    fn test_circuit_creation() {
        let circuit = Circuit::new(3);
        assert_eq!(circuit.num_qubits(), 3);
        assert_eq!(circuit.len(), 0);
        assert!(circuit.is_empty());
    }

    #[test]
    #[should_panic(expected = "at least one qubit")]
    fn test_circuit_zero_qubits() {
        Circuit::new(0);
    }

    #[test]
    fn test_add_gate() {
        let mut circuit = Circuit::new(2);
        circuit
            .add_gate(Arc::new(Hadamard), &[QubitId::new(0)])
            .unwrap();
        assert_eq!(circuit.len(), 1);
        assert!(!circuit.is_empty());
    }

    #[test]
    fn test_add_gate_invalid_qubit() {
        let mut circuit = Circuit::new(2);
        let result = circuit.add_gate(Arc::new(Hadamard), &[QubitId::new(5)]);

        if let Err(QuantumError::InvalidQubit(idx, num)) = result {
            assert_eq!(idx, 5);
            assert_eq!(num, 2);
        } else {
            panic!("Expected InvalidQubit error");
        }
    }

    #[test]
    fn test_operations_iter() {
        let mut circuit = Circuit::new(2);
        circuit
            .add_gate(Arc::new(Hadamard), &[QubitId::new(0)])
            .unwrap();
        circuit
            .add_gate(Arc::new(CNot), &[QubitId::new(0), QubitId::new(1)])
            .unwrap();

        let ops: Vec<_> = circuit.operations().collect();
        assert_eq!(ops.len(), 2);
        assert_eq!(ops[1].gate().name(), "CNOT");
    }

    #[test]
    fn test_clear() {
        let mut circuit = Circuit::new(2);
        circuit
            .add_gate(Arc::new(Hadamard), &[QubitId::new(0)])
            .unwrap();
        circuit
            .add_gate(Arc::new(Hadamard), &[QubitId::new(1)])
            .unwrap();
        assert_eq!(circuit.len(), 2);

        circuit.clear();
        assert!(circuit.is_empty());
    }

    #[test]
    fn test_validate() {
        let circuit = Circuit::new(3);
        assert!(circuit.validate().is_ok());
    }

    #[test]
    fn test_display() {
        let mut circuit = Circuit::new(2);
        circuit
            .add_gate(Arc::new(Hadamard), &[QubitId::new(0)])
            .unwrap();

        let display = format!("{}", circuit);
        assert!(display.contains("2 qubits"));
        assert!(display.contains("1 operations"));
    }

    #[test]
    fn test_get_operation() {
        let mut circuit = Circuit::new(2);
        circuit
            .add_gate(Arc::new(Hadamard), &[QubitId::new(0)])
            .unwrap();

        assert_eq!(circuit.get_operation(0).unwrap().gate().name(), "H");
        assert!(circuit.get_operation(10).is_none());
    }
}
