//! Two-point (Bernoulli) distribution on a single qubit

use crate::error::{ComponentError, Result as ComponentResult};
use crate::uncertainty::UncertaintyModel;
use qalgo_core::gates::{ControlledRotationY, RotationY};
use qalgo_core::{Circuit, CircuitFactory, Parameter, QubitId, Result};
use std::sync::Arc;

/// Bernoulli distribution: |1⟩ with probability `p`, |0⟩ otherwise
///
/// Encoded as a single RY rotation with angle `2·asin(√p)`. The grid is
/// the two-point set {0, 1}.
///
/// # Example
/// ```
/// use qalgo_components::BernoulliDistribution;
/// use qalgo_components::uncertainty::UncertaintyModel;
/// use qalgo_core::CircuitFactory;
///
/// let model = BernoulliDistribution::new(0.3).unwrap();
/// assert_eq!(model.num_target_qubits(), 1);
/// assert_eq!(model.num_values(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct BernoulliDistribution {
    p: f64,
    theta: f64,
}

impl BernoulliDistribution {
    /// Create a Bernoulli distribution model
    ///
    /// # Errors
    /// Returns error if `p` is outside `[0, 1]`
    pub fn new(p: f64) -> ComponentResult<Self> {
        if !(0.0..=1.0).contains(&p) || p.is_nan() {
            return Err(ComponentError::InvalidProbability(p));
        }

        Ok(Self {
            p,
            theta: 2.0 * p.sqrt().asin(),
        })
    }

    /// Success probability
    pub fn probability(&self) -> f64 {
        self.p
    }

    /// Rotation angle encoding the distribution
    pub fn angle(&self) -> f64 {
        self.theta
    }
}

impl CircuitFactory for BernoulliDistribution {
    fn factory_name(&self) -> &str {
        "bernoulli_distribution"
    }

    fn num_target_qubits(&self) -> usize {
        1
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

        circuit.add_gate(Arc::new(RotationY::new(self.theta)), &[targets[0]])
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

        circuit.add_gate(Arc::new(RotationY::new(-self.theta)), &[targets[0]])
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

        circuit.add_gate(
            Arc::new(ControlledRotationY::new(self.theta)),
            &[control, targets[0]],
        )
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

        circuit.add_gate(
            Arc::new(ControlledRotationY::new(-self.theta)),
            &[control, targets[0]],
        )
    }
}

impl UncertaintyModel for BernoulliDistribution {
    fn low(&self) -> f64 {
        0.0
    }

    fn high(&self) -> f64 {
        1.0
    }
}
