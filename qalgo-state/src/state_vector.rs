//! Dense statevector representation and gate application

use crate::error::{Result, StateError};
use num_complex::Complex64;
use qalgo_core::{Circuit, GateOp};

/// Largest supported register; dense amplitudes above this are impractical here
const MAX_QUBITS: usize = 24;

/// Dense quantum statevector
///
/// Represents a quantum state as a complex amplitude vector over the
/// computational basis. Qubit 0 is the least significant bit of the basis
/// index. Used to execute [`Circuit`]s built by the component factories and
/// to verify their uncompute and controlled behavior.
///
/// # Example
/// ```
/// use qalgo_state::StateVector;
///
/// // A 2-qubit state (4 amplitudes), initialized to |00⟩
/// let state = StateVector::new(2).unwrap();
/// assert_eq!(state.num_qubits(), 2);
/// assert_eq!(state.dimension(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct StateVector {
    num_qubits: usize,
    amplitudes: Vec<Complex64>,
}

impl StateVector {
    /// Create a new statevector initialized to |0...0⟩
    ///
    /// # Errors
    /// Returns error if `num_qubits` exceeds the supported maximum
    pub fn new(num_qubits: usize) -> Result<Self> {
        if num_qubits == 0 || num_qubits > MAX_QUBITS {
            return Err(StateError::InvalidDimension {
                dimension: 1usize.checked_shl(num_qubits as u32).unwrap_or(usize::MAX),
            });
        }

        let dimension = 1 << num_qubits;
        let mut amplitudes = vec![Complex64::ZERO; dimension];
        amplitudes[0] = Complex64::new(1.0, 0.0);

        Ok(Self {
            num_qubits,
            amplitudes,
        })
    }

    /// Create a statevector from raw amplitude data
    ///
    /// # Errors
    /// Returns error if `num_qubits` exceeds the supported maximum or the
    /// amplitude count is not 2^`num_qubits`
    pub fn from_amplitudes(num_qubits: usize, amplitudes: &[Complex64]) -> Result<Self> {
        if num_qubits == 0 || num_qubits > MAX_QUBITS {
            return Err(StateError::InvalidDimension {
                dimension: 1usize.checked_shl(num_qubits as u32).unwrap_or(usize::MAX),
            });
        }

        let dimension = 1usize << num_qubits;
        if amplitudes.len() != dimension {
            return Err(StateError::DimensionMismatch {
                expected: dimension,
                actual: amplitudes.len(),
            });
        }

        Ok(Self {
            num_qubits,
            amplitudes: amplitudes.to_vec(),
        })
    }

    /// Get the number of qubits
    #[inline]
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Get the state dimension (2^num_qubits)
    #[inline]
    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    /// Get a reference to the state amplitudes
    #[inline]
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Compute the L2 norm of the state
    pub fn norm(&self) -> f64 {
        self.amplitudes
            .iter()
            .map(|a| a.norm_sqr())
            .sum::<f64>()
            .sqrt()
    }

    /// Check if the state is normalized (norm ≈ 1)
    pub fn is_normalized(&self, epsilon: f64) -> bool {
        (self.norm() - 1.0).abs() < epsilon
    }

    /// Probability of measuring the computational basis state `index`
    pub fn probability(&self, index: usize) -> f64 {
        self.amplitudes
            .get(index)
            .map(|a| a.norm_sqr())
            .unwrap_or(0.0)
    }

    /// Marginal probability of measuring `qubit` in |1⟩
    ///
    /// # Errors
    /// Returns error if `qubit` is outside the state
    pub fn qubit_probability(&self, qubit: usize) -> Result<f64> {
        if qubit >= self.num_qubits {
            return Err(StateError::QubitOutOfRange {
                qubit,
                num_qubits: self.num_qubits,
            });
        }

        Ok(self
            .amplitudes
            .iter()
            .enumerate()
            .filter(|(i, _)| (i >> qubit) & 1 == 1)
            .map(|(_, a)| a.norm_sqr())
            .sum())
    }

    /// Reset the state to |0...0⟩
    pub fn reset(&mut self) {
        self.amplitudes.fill(Complex64::ZERO);
        self.amplitudes[0] = Complex64::new(1.0, 0.0);
    }

    /// Apply a single gate operation to the state
    ///
    /// The gate matrix is interpreted with the first listed qubit of the
    /// operation as the most significant bit of the gate basis index.
    ///
    /// # Errors
    /// Returns error if a qubit is out of range or the gate has no matrix
    pub fn apply_op(&mut self, op: &GateOp) -> Result<()> {
        for q in op.qubits() {
            if q.index() >= self.num_qubits {
                return Err(StateError::QubitOutOfRange {
                    qubit: q.index(),
                    num_qubits: self.num_qubits,
                });
            }
        }

        let matrix = op
            .gate()
            .matrix()
            .ok_or_else(|| StateError::NonUnitaryGate(op.gate().name().to_string()))?;

        let k = op.qubits().len();
        let gate_dim = 1usize << k;

        // Bit masks of the addressed qubits, first listed qubit first
        let masks: Vec<usize> = op.qubits().iter().map(|q| 1usize << q.index()).collect();
        let addressed: usize = masks.iter().sum();

        let mut indices = vec![0usize; gate_dim];
        let mut old = vec![Complex64::ZERO; gate_dim];

        for base in 0..self.amplitudes.len() {
            // Visit each amplitude group once, from its all-zeros member
            if base & addressed != 0 {
                continue;
            }

            for (g, index) in indices.iter_mut().enumerate() {
                let mut i = base;
                for (j, mask) in masks.iter().enumerate() {
                    if (g >> (k - 1 - j)) & 1 == 1 {
                        i |= mask;
                    }
                }
                *index = i;
            }

            for (g, &i) in indices.iter().enumerate() {
                old[g] = self.amplitudes[i];
            }

            for (row, &i) in indices.iter().enumerate() {
                let mut acc = Complex64::ZERO;
                for (col, &amp) in old.iter().enumerate() {
                    acc += matrix[row * gate_dim + col] * amp;
                }
                self.amplitudes[i] = acc;
            }
        }

        Ok(())
    }

    /// Apply all operations of a circuit in order
    ///
    /// # Errors
    /// Returns error if the circuit has more qubits than the state or any
    /// operation fails to apply
    pub fn run(&mut self, circuit: &Circuit) -> Result<()> {
        if circuit.num_qubits() > self.num_qubits {
            return Err(StateError::QubitOutOfRange {
                qubit: circuit.num_qubits() - 1,
                num_qubits: self.num_qubits,
            });
        }

        for op in circuit.operations() {
            self.apply_op(op)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use qalgo_core::gates::{CNot, Hadamard, PauliX, RotationY, Toffoli};
    use qalgo_core::{Circuit, QubitId};
    use std::sync::Arc;

    #[test]
    fn test_new_state_vector() {
        let state = StateVector::new(2).unwrap();
        assert_eq!(state.num_qubits(), 2);
        assert_eq!(state.dimension(), 4);
        assert_eq!(state.amplitudes()[0], Complex64::new(1.0, 0.0));
    }

    #[test]
    fn test_new_rejects_oversized() {
        assert!(StateVector::new(0).is_err());
        assert!(StateVector::new(25).is_err());
    }

    #[test]
    fn test_from_amplitudes_rejects_oversized() {
        assert!(matches!(
            StateVector::from_amplitudes(25, &[]),
            Err(StateError::InvalidDimension { .. })
        ));
        assert!(StateVector::from_amplitudes(0, &[]).is_err());
    }

    #[test]
    fn test_from_amplitudes_dimension_mismatch() {
        let amps = vec![Complex64::new(1.0, 0.0)];
        assert!(matches!(
            StateVector::from_amplitudes(2, &amps),
            Err(StateError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_hadamard_superposition() {
        let mut state = StateVector::new(1).unwrap();
        let mut qc = Circuit::new(1);
        qc.add_gate(Arc::new(Hadamard), &[QubitId::new(0)]).unwrap();
        state.run(&qc).unwrap();

        assert_relative_eq!(state.probability(0), 0.5, epsilon = 1e-12);
        assert_relative_eq!(state.probability(1), 0.5, epsilon = 1e-12);
        assert!(state.is_normalized(1e-10));
    }

    #[test]
    fn test_x_flips_qubit() {
        let mut state = StateVector::new(2).unwrap();
        let mut qc = Circuit::new(2);
        qc.add_gate(Arc::new(PauliX), &[QubitId::new(1)]).unwrap();
        state.run(&qc).unwrap();

        // |10⟩, index 2
        assert_relative_eq!(state.probability(2), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_bell_state() {
        let mut state = StateVector::new(2).unwrap();
        let mut qc = Circuit::new(2);
        qc.add_gate(Arc::new(Hadamard), &[QubitId::new(0)]).unwrap();
        qc.add_gate(Arc::new(CNot), &[QubitId::new(0), QubitId::new(1)])
            .unwrap();
        state.run(&qc).unwrap();

        assert_relative_eq!(state.probability(0b00), 0.5, epsilon = 1e-12);
        assert_relative_eq!(state.probability(0b11), 0.5, epsilon = 1e-12);
        assert_relative_eq!(state.probability(0b01), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cnot_no_effect_when_control_zero() {
        let mut state = StateVector::new(2).unwrap();
        let mut qc = Circuit::new(2);
        qc.add_gate(Arc::new(CNot), &[QubitId::new(0), QubitId::new(1)])
            .unwrap();
        state.run(&qc).unwrap();

        assert_relative_eq!(state.probability(0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_toffoli_truth_table() {
        // |110⟩ -> |111⟩ with controls q0, q1 and target q2
        let mut state = StateVector::new(3).unwrap();
        let mut qc = Circuit::new(3);
        qc.add_gate(Arc::new(PauliX), &[QubitId::new(0)]).unwrap();
        qc.add_gate(Arc::new(PauliX), &[QubitId::new(1)]).unwrap();
        qc.add_gate(
            Arc::new(Toffoli),
            &[QubitId::new(0), QubitId::new(1), QubitId::new(2)],
        )
        .unwrap();
        state.run(&qc).unwrap();

        assert_relative_eq!(state.probability(0b111), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_ry_probability() {
        let theta: f64 = 0.9;
        let mut state = StateVector::new(1).unwrap();
        let mut qc = Circuit::new(1);
        qc.add_gate(Arc::new(RotationY::new(theta)), &[QubitId::new(0)])
            .unwrap();
        state.run(&qc).unwrap();

        assert_relative_eq!(
            state.qubit_probability(0).unwrap(),
            (theta / 2.0).sin().powi(2),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_qubit_probability_out_of_range() {
        let state = StateVector::new(2).unwrap();
        assert!(matches!(
            state.qubit_probability(5),
            Err(StateError::QubitOutOfRange { .. })
        ));
    }

    #[test]
    fn test_reset() {
        let mut state = StateVector::new(2).unwrap();
        let mut qc = Circuit::new(2);
        qc.add_gate(Arc::new(Hadamard), &[QubitId::new(0)]).unwrap();
        state.run(&qc).unwrap();

        state.reset();
        assert_relative_eq!(state.probability(0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_run_rejects_oversized_circuit() {
        let mut state = StateVector::new(1).unwrap();
        let qc = Circuit::new(3);
        assert!(state.run(&qc).is_err());
    }
}
