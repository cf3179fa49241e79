//! European call payoff-comparison problem

use crate::comparator::FixedValueComparator;
use crate::config::{parse_config, EuropeanCallConfig};
use crate::error::Result as ComponentResult;
use crate::uncertainty::UncertaintyModel;
use log::{debug, warn};
use qalgo_core::{Circuit, CircuitFactory, Parameter, QubitId, Result};
use std::sync::Arc;

/// Marks states where the modeled asset price exceeds a strike price
///
/// Composes an uncertainty model with a [`FixedValueComparator`]: the model
/// loads the price distribution over the first `n` target qubits, the
/// comparator then flips target qubit `n` for every grid state at or above
/// the discretized strike. Amplitude-estimation drivers use the flagged
/// amplitude; the driver itself is outside this crate.
///
/// The strike price is mapped onto the model's integer grid as
/// `round((strike - low) / (high - low) * (num_values - 1))`. Strikes
/// outside `[low, high]` are not clamped or rejected; they produce an
/// off-grid index (logged as a warning) which degenerates the comparator
/// into a constant.
///
/// # Example
/// ```
/// use qalgo_components::{EuropeanCallDelta, UniformDistribution};
/// use qalgo_core::CircuitFactory;
/// use std::sync::Arc;
///
/// let model = Arc::new(UniformDistribution::new(3, 0.0, 7.0).unwrap());
/// let problem = EuropeanCallDelta::new(model, 3.0).unwrap();
/// assert_eq!(problem.num_target_qubits(), 4);
/// assert_eq!(problem.mapped_strike_price(), 3);
/// ```
pub struct EuropeanCallDelta {
    uncertainty_model: Arc<dyn UncertaintyModel>,
    comparator: FixedValueComparator,
    strike_price: f64,
    mapped_strike_price: i64,
}

impl EuropeanCallDelta {
    /// Create the problem for a given model and strike price
    ///
    /// # Errors
    /// Returns error if the comparator cannot be constructed for the model's
    /// register size
    pub fn new(
        uncertainty_model: Arc<dyn UncertaintyModel>,
        strike_price: f64,
    ) -> ComponentResult<Self> {
        let low = uncertainty_model.low();
        let high = uncertainty_model.high();
        let num_values = uncertainty_model.num_values();

        // Map the strike onto the integer grid {0, ..., num_values - 1}
        let mapped_strike_price =
            ((strike_price - low) / (high - low) * (num_values - 1) as f64).round() as i64;

        if mapped_strike_price < 0 || mapped_strike_price >= num_values as i64 {
            warn!(
                "strike price {} outside model range [{}, {}], mapped index {} is off-grid",
                strike_price, low, high, mapped_strike_price
            );
        }
        debug!(
            "european call: strike {} mapped to grid index {} of {}",
            strike_price, mapped_strike_price, num_values
        );

        let comparator = FixedValueComparator::new(
            uncertainty_model.num_target_qubits() + 1,
            mapped_strike_price,
        )?;

        Ok(Self {
            uncertainty_model,
            comparator,
            strike_price,
            mapped_strike_price,
        })
    }

    /// Create the problem from a strict JSON configuration
    ///
    /// # Errors
    /// Returns error on malformed JSON or fields other than `strike_price`
    pub fn from_config(
        uncertainty_model: Arc<dyn UncertaintyModel>,
        json: &str,
    ) -> ComponentResult<Self> {
        let config: EuropeanCallConfig = parse_config(json)?;
        Self::new(uncertainty_model, config.strike_price)
    }

    /// Strike price as supplied
    pub fn strike_price(&self) -> f64 {
        self.strike_price
    }

    /// Strike price discretized onto the model's value grid
    pub fn mapped_strike_price(&self) -> i64 {
        self.mapped_strike_price
    }

    /// The composed uncertainty model
    pub fn uncertainty_model(&self) -> &Arc<dyn UncertaintyModel> {
        &self.uncertainty_model
    }

    /// The comparator configured against the mapped strike
    pub fn comparator(&self) -> &FixedValueComparator {
        &self.comparator
    }

    /// Target qubits of the uncertainty model (all but the flag qubit)
    fn model_targets<'a>(&self, targets: &'a [QubitId]) -> &'a [QubitId] {
        &targets[..self.uncertainty_model.num_target_qubits()]
    }
}

impl CircuitFactory for EuropeanCallDelta {
    fn factory_name(&self) -> &str {
        "european_call_delta"
    }

    fn num_target_qubits(&self) -> usize {
        self.uncertainty_model.num_target_qubits() + 1
    }

    fn required_ancillas(&self) -> usize {
        self.uncertainty_model.required_ancillas() + self.comparator.required_ancillas()
    }

    fn required_ancillas_controlled(&self) -> usize {
        self.uncertainty_model.required_ancillas_controlled()
            + self.comparator.required_ancillas_controlled()
    }

    fn build(
        &self,
        circuit: &mut Circuit,
        targets: &[QubitId],
        ancillas: &[QubitId],
        params: Option<&[Parameter]>,
    ) -> Result<()> {
        self.check_targets(targets)?;

        self.uncertainty_model
            .build(circuit, self.model_targets(targets), ancillas, params)?;
        self.comparator.build(circuit, targets, ancillas, params)
    }

    fn build_inverse(
        &self,
        circuit: &mut Circuit,
        targets: &[QubitId],
        ancillas: &[QubitId],
        params: Option<&[Parameter]>,
    ) -> Result<()> {
        self.check_targets(targets)?;

        self.comparator
            .build_inverse(circuit, targets, ancillas, params)?;
        self.uncertainty_model
            .build_inverse(circuit, self.model_targets(targets), ancillas, params)
    }

    fn build_controlled(
        &self,
        circuit: &mut Circuit,
        targets: &[QubitId],
        control: QubitId,
        ancillas: &[QubitId],
        params: Option<&[Parameter]>,
    ) -> Result<()> {
        self.check_targets(targets)?;

        self.uncertainty_model.build_controlled(
            circuit,
            self.model_targets(targets),
            control,
            ancillas,
            params,
        )?;
        self.comparator
            .build_controlled(circuit, targets, control, ancillas, params)
    }

    fn build_controlled_inverse(
        &self,
        circuit: &mut Circuit,
        targets: &[QubitId],
        control: QubitId,
        ancillas: &[QubitId],
        params: Option<&[Parameter]>,
    ) -> Result<()> {
        self.check_targets(targets)?;

        self.comparator
            .build_controlled_inverse(circuit, targets, control, ancillas, params)?;
        self.uncertainty_model.build_controlled_inverse(
            circuit,
            self.model_targets(targets),
            control,
            ancillas,
            params,
        )
    }
}
