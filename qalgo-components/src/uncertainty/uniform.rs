//! Uniform distribution over a discretized value grid

use crate::error::{ComponentError, Result as ComponentResult};
use crate::uncertainty::UncertaintyModel;
use qalgo_core::gates::{ControlledHadamard, Hadamard};
use qalgo_core::{Circuit, CircuitFactory, Parameter, QubitId, Result};
use std::sync::Arc;

/// Uniform distribution over `2^n` grid values in `[low, high]`
///
/// Loading is one Hadamard per target qubit, so the model needs no ancillas
/// and is its own inverse.
///
/// # Example
/// ```
/// use qalgo_components::UniformDistribution;
/// use qalgo_components::uncertainty::UncertaintyModel;
/// use qalgo_core::CircuitFactory;
///
/// let model = UniformDistribution::new(3, 0.0, 7.0).unwrap();
/// assert_eq!(model.num_target_qubits(), 3);
/// assert_eq!(model.num_values(), 8);
/// assert_eq!(model.required_ancillas(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct UniformDistribution {
    num_target_qubits: usize,
    low: f64,
    high: f64,
}

impl UniformDistribution {
    /// Create a uniform distribution model
    ///
    /// # Errors
    /// Returns error if `num_target_qubits` is 0 or above 63, or `low >= high`
    pub fn new(num_target_qubits: usize, low: f64, high: f64) -> ComponentResult<Self> {
        if num_target_qubits == 0 {
            return Err(ComponentError::invalid_config(
                "uniform distribution needs at least one target qubit",
            ));
        }
        // Keeps num_values() and the comparator's threshold grid within i64
        if num_target_qubits > 63 {
            return Err(ComponentError::invalid_config(
                "uniform distribution supports at most 63 target qubits",
            ));
        }
        if low >= high {
            return Err(ComponentError::InvalidBounds { low, high });
        }

        Ok(Self {
            num_target_qubits,
            low,
            high,
        })
    }
}

impl CircuitFactory for UniformDistribution {
    fn factory_name(&self) -> &str {
        "uniform_distribution"
    }

    fn num_target_qubits(&self) -> usize {
        self.num_target_qubits
    }

    fn build(
        &self,
        circuit: &mut Circuit,
        targets: &[QubitId],
        ancillas: &[QubitId],
        _params: Option<&[Parameter]>,
    ) -> Result<()> {
        self.check_targets(targets)?;
        self.check_ancillas(ancillas)?;

        for &q in targets {
            circuit.add_gate(Arc::new(Hadamard), &[q])?;
        }
        Ok(())
    }

    fn build_inverse(
        &self,
        circuit: &mut Circuit,
        targets: &[QubitId],
        ancillas: &[QubitId],
        _params: Option<&[Parameter]>,
    ) -> Result<()> {
        self.check_targets(targets)?;
        self.check_ancillas(ancillas)?;

        // Hadamard is hermitian; only the order reverses
        for &q in targets.iter().rev() {
            circuit.add_gate(Arc::new(Hadamard), &[q])?;
        }
        Ok(())
    }

    fn build_controlled(
        &self,
        circuit: &mut Circuit,
        targets: &[QubitId],
        control: QubitId,
        ancillas: &[QubitId],
        _params: Option<&[Parameter]>,
    ) -> Result<()> {
        self.check_targets(targets)?;
        self.check_ancillas_controlled(ancillas)?;

        for &q in targets {
            circuit.add_gate(Arc::new(ControlledHadamard), &[control, q])?;
        }
        Ok(())
    }

    fn build_controlled_inverse(
        &self,
        circuit: &mut Circuit,
        targets: &[QubitId],
        control: QubitId,
        ancillas: &[QubitId],
        _params: Option<&[Parameter]>,
    ) -> Result<()> {
        self.check_targets(targets)?;
        self.check_ancillas_controlled(ancillas)?;

        for &q in targets.iter().rev() {
            circuit.add_gate(Arc::new(ControlledHadamard), &[control, q])?;
        }
        Ok(())
    }
}

impl UncertaintyModel for UniformDistribution {
    fn low(&self) -> f64 {
        self.low
    }

    fn high(&self) -> f64 {
        self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_qubits() {
        assert!(UniformDistribution::new(0, 0.0, 1.0).is_err());
    }

    #[test]
    fn test_rejects_oversized_register() {
        assert!(UniformDistribution::new(64, 0.0, 1.0).is_err());
        assert!(UniformDistribution::new(63, 0.0, 1.0).is_ok());
    }

    #[test]
    fn test_rejects_unordered_bounds() {
        let result = UniformDistribution::new(2, 3.0, 1.0);
        assert!(matches!(result, Err(ComponentError::InvalidBounds { .. })));
    }

    #[test]
    fn test_build_appends_one_hadamard_per_target() {
        let model = UniformDistribution::new(3, 0.0, 7.0).unwrap();
        let mut qc = Circuit::new(3);
        let targets = qalgo_core::qubit::register(0, 3);

        model.build(&mut qc, &targets, &[], None).unwrap();
        assert_eq!(qc.len(), 3);
        assert!(qc.operations().all(|op| op.gate().name() == "H"));
    }

    #[test]
    fn test_build_wrong_target_count() {
        let model = UniformDistribution::new(3, 0.0, 7.0).unwrap();
        let mut qc = Circuit::new(2);
        let targets = qalgo_core::qubit::register(0, 2);

        assert!(model.build(&mut qc, &targets, &[], None).is_err());
    }

    #[test]
    fn test_controlled_build_uses_ch() {
        let model = UniformDistribution::new(2, 0.0, 3.0).unwrap();
        let mut qc = Circuit::new(3);
        let targets = qalgo_core::qubit::register(0, 2);

        model
            .build_controlled(&mut qc, &targets, QubitId::new(2), &[], None)
            .unwrap();
        assert_eq!(qc.len(), 2);
        assert!(qc.operations().all(|op| op.gate().name() == "CH"));
    }
}
