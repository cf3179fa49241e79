//! Circuit factory interface
//!
//! A [`CircuitFactory`] is a reusable component that appends a circuit
//! fragment to an externally supplied [`Circuit`]. Every factory offers the
//! fragment in four forms: forward, inverse, controlled, and
//! controlled-inverse. Inverse builds undo the last-applied operation first,
//! the usual circuit-reversal convention, so `build` immediately followed by
//! `build_inverse` with identical arguments is an identity.
//!
//! Factories address qubits through three registers passed at build time:
//! the target register (exactly [`num_target_qubits`] qubits), an ancilla
//! register (at least [`required_ancillas`] scratch qubits, returned to
//! |0⟩ before the build finishes), and, for the controlled variants, a
//! single control qubit that gates the fragment's effect.
//!
//! [`num_target_qubits`]: CircuitFactory::num_target_qubits
//! [`required_ancillas`]: CircuitFactory::required_ancillas

use crate::{Circuit, Parameter, QuantumError, QubitId, Result};

/// Trait for components that append circuit fragments
pub trait CircuitFactory: Send + Sync {
    /// Descriptive name used in error messages
    fn factory_name(&self) -> &str;

    /// Number of target qubits the fragment acts on
    fn num_target_qubits(&self) -> usize;

    /// Number of ancilla qubits the forward/inverse builds need
    fn required_ancillas(&self) -> usize {
        0
    }

    /// Number of ancilla qubits the controlled builds need
    fn required_ancillas_controlled(&self) -> usize {
        self.required_ancillas()
    }

    /// Append the fragment to `circuit`
    ///
    /// # Errors
    /// Returns error if the target register has the wrong size, too few
    /// ancillas are provided, or a gate cannot be appended.
    fn build(
        &self,
        circuit: &mut Circuit,
        targets: &[QubitId],
        ancillas: &[QubitId],
        params: Option<&[Parameter]>,
    ) -> Result<()>;

    /// Append the inverse of the fragment to `circuit`
    ///
    /// # Errors
    /// Same failure modes as [`build`](CircuitFactory::build).
    fn build_inverse(
        &self,
        circuit: &mut Circuit,
        targets: &[QubitId],
        ancillas: &[QubitId],
        params: Option<&[Parameter]>,
    ) -> Result<()>;

    /// Append the fragment gated on `control`
    ///
    /// # Errors
    /// Same failure modes as [`build`](CircuitFactory::build), checked
    /// against [`required_ancillas_controlled`](CircuitFactory::required_ancillas_controlled).
    fn build_controlled(
        &self,
        circuit: &mut Circuit,
        targets: &[QubitId],
        control: QubitId,
        ancillas: &[QubitId],
        params: Option<&[Parameter]>,
    ) -> Result<()>;

    /// Append the inverse of the fragment gated on `control`
    ///
    /// # Errors
    /// Same failure modes as [`build_controlled`](CircuitFactory::build_controlled).
    fn build_controlled_inverse(
        &self,
        circuit: &mut Circuit,
        targets: &[QubitId],
        control: QubitId,
        ancillas: &[QubitId],
        params: Option<&[Parameter]>,
    ) -> Result<()>;

    /// Check a target register against [`num_target_qubits`](CircuitFactory::num_target_qubits)
    ///
    /// # Errors
    /// Returns [`QuantumError::TargetCountMismatch`] on a size mismatch.
    fn check_targets(&self, targets: &[QubitId]) -> Result<()> {
        if targets.len() != self.num_target_qubits() {
            return Err(QuantumError::target_count_mismatch(
                self.factory_name(),
                self.num_target_qubits(),
                targets.len(),
            ));
        }
        Ok(())
    }

    /// Check an ancilla register against [`required_ancillas`](CircuitFactory::required_ancillas)
    ///
    /// # Errors
    /// Returns [`QuantumError::InsufficientAncillas`] when too few are given.
    fn check_ancillas(&self, ancillas: &[QubitId]) -> Result<()> {
        if ancillas.len() < self.required_ancillas() {
            return Err(QuantumError::insufficient_ancillas(
                self.factory_name(),
                self.required_ancillas(),
                ancillas.len(),
            ));
        }
        Ok(())
    }

    /// Check an ancilla register against [`required_ancillas_controlled`](CircuitFactory::required_ancillas_controlled)
    ///
    /// # Errors
    /// Returns [`QuantumError::InsufficientAncillas`] when too few are given.
    fn check_ancillas_controlled(&self, ancillas: &[QubitId]) -> Result<()> {
        if ancillas.len() < self.required_ancillas_controlled() {
            return Err(QuantumError::insufficient_ancillas(
                self.factory_name(),
                self.required_ancillas_controlled(),
                ancillas.len(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Factory that records nothing; only exercises the default checks
    struct FixedFactory {
        targets: usize,
        ancillas: usize,
    }

    impl CircuitFactory for FixedFactory {
        fn factory_name(&self) -> &str {
            "fixed"
        }

        fn num_target_qubits(&self) -> usize {
            self.targets
        }

        fn required_ancillas(&self) -> usize {
            self.ancillas
        }

        fn build(
            &self,
            _circuit: &mut Circuit,
            targets: &[QubitId],
            ancillas: &[QubitId],
            _params: Option<&[Parameter]>,
        ) -> Result<()> {
            self.check_targets(targets)?;
            self.check_ancillas(ancillas)
        }

        fn build_inverse(
            &self,
            circuit: &mut Circuit,
            targets: &[QubitId],
            ancillas: &[QubitId],
            params: Option<&[Parameter]>,
        ) -> Result<()> {
            self.build(circuit, targets, ancillas, params)
        }

        fn build_controlled(
            &self,
            circuit: &mut Circuit,
            targets: &[QubitId],
            _control: QubitId,
            ancillas: &[QubitId],
            params: Option<&[Parameter]>,
        ) -> Result<()> {
            self.build(circuit, targets, ancillas, params)
        }

        fn build_controlled_inverse(
            &self,
            circuit: &mut Circuit,
            targets: &[QubitId],
            control: QubitId,
            ancillas: &[QubitId],
            params: Option<&[Parameter]>,
        ) -> Result<()> {
            self.build_controlled(circuit, targets, control, ancillas, params)
        }
    }

    #[test]
    fn test_default_controlled_ancillas_match_plain() {
        let f = FixedFactory {
            targets: 2,
            ancillas: 3,
        };
        assert_eq!(f.required_ancillas_controlled(), 3);
    }

    #[test]
    fn test_check_targets_mismatch() {
        let f = FixedFactory {
            targets: 2,
            ancillas: 0,
        };
        let mut qc = Circuit::new(4);
        let result = f.build(&mut qc, &[QubitId::new(0)], &[], None);
        assert!(matches!(
            result,
            Err(QuantumError::TargetCountMismatch { .. })
        ));
    }

    #[test]
    fn test_check_ancillas_shortfall() {
        let f = FixedFactory {
            targets: 1,
            ancillas: 2,
        };
        let mut qc = Circuit::new(4);
        let result = f.build(&mut qc, &[QubitId::new(0)], &[QubitId::new(1)], None);
        assert!(matches!(
            result,
            Err(QuantumError::InsufficientAncillas { .. })
        ));
    }
}
