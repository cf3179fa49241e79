//! End-to-end checks for the European call problem factory

use qalgo_components::uncertainty::UncertaintyModel;
use qalgo_components::{BernoulliDistribution, EuropeanCallDelta, UniformDistribution};
use qalgo_core::gates::PauliX;
use qalgo_core::{qubit::register, Circuit, CircuitFactory, Parameter, QubitId, Result};
use qalgo_state::StateVector;
use std::sync::Arc;

fn uniform_problem(n: usize, strike: f64) -> EuropeanCallDelta {
    let high = ((1usize << n) - 1) as f64;
    let model = Arc::new(UniformDistribution::new(n, 0.0, high).unwrap());
    EuropeanCallDelta::new(model, strike).unwrap()
}

#[test]
fn uniform_flag_probability_counts_grid_points() {
    // Uniform over {0..7}, strike 3: five of eight values are >= 3
    let n = 3;
    let problem = uniform_problem(n, 3.0);
    let num_qubits = n + 1 + problem.required_ancillas();
    let targets = register(0, n + 1);
    let ancillas = register(n + 1, problem.required_ancillas());

    let mut qc = Circuit::new(num_qubits);
    problem.build(&mut qc, &targets, &ancillas, None).unwrap();

    let mut state = StateVector::new(num_qubits).unwrap();
    state.run(&qc).unwrap();

    let p = state.qubit_probability(n).unwrap();
    assert!((p - 5.0 / 8.0).abs() < 1e-10, "flag probability {}", p);
}

#[test]
fn bernoulli_flag_probability_matches_p() {
    let p_high = 0.3;
    let model = Arc::new(BernoulliDistribution::new(p_high).unwrap());
    let problem = EuropeanCallDelta::new(model, 1.0).unwrap();
    assert_eq!(problem.mapped_strike_price(), 1);

    let mut qc = Circuit::new(2);
    problem
        .build(&mut qc, &register(0, 2), &[], None)
        .unwrap();

    let mut state = StateVector::new(2).unwrap();
    state.run(&qc).unwrap();

    assert!((state.qubit_probability(1).unwrap() - p_high).abs() < 1e-10);
}

#[test]
fn build_then_inverse_restores_initial_state() {
    let n = 3;
    let problem = uniform_problem(n, 4.0);
    let num_qubits = n + 1 + problem.required_ancillas();
    let targets = register(0, n + 1);
    let ancillas = register(n + 1, problem.required_ancillas());

    let mut qc = Circuit::new(num_qubits);
    problem.build(&mut qc, &targets, &ancillas, None).unwrap();
    problem
        .build_inverse(&mut qc, &targets, &ancillas, None)
        .unwrap();

    let mut state = StateVector::new(num_qubits).unwrap();
    state.run(&qc).unwrap();

    assert!((state.probability(0) - 1.0).abs() < 1e-10);
    assert!(state.is_normalized(1e-10));
}

#[test]
fn controlled_build_with_control_off_is_identity() {
    let n = 2;
    let problem = uniform_problem(n, 1.0);
    let num_ancillas = problem.required_ancillas_controlled();
    let targets = register(0, n + 1);
    let ancillas = register(n + 1, num_ancillas);
    let control = QubitId::new(n + 1 + num_ancillas);
    let num_qubits = n + 2 + num_ancillas;

    let mut qc = Circuit::new(num_qubits);
    problem
        .build_controlled(&mut qc, &targets, control, &ancillas, None)
        .unwrap();

    let mut state = StateVector::new(num_qubits).unwrap();
    state.run(&qc).unwrap();

    assert!((state.probability(0) - 1.0).abs() < 1e-10);
}

#[test]
fn controlled_build_with_control_on_matches_plain_build() {
    let n = 2;
    let problem = uniform_problem(n, 2.0);
    let num_ancillas = problem.required_ancillas_controlled();
    let targets = register(0, n + 1);
    let ancillas = register(n + 1, num_ancillas);
    let control = QubitId::new(n + 1 + num_ancillas);
    let num_qubits = n + 2 + num_ancillas;

    let mut controlled = Circuit::new(num_qubits);
    controlled.add_gate(Arc::new(PauliX), &[control]).unwrap();
    problem
        .build_controlled(&mut controlled, &targets, control, &ancillas, None)
        .unwrap();

    let mut plain = Circuit::new(num_qubits);
    problem
        .build(&mut plain, &targets, &register(n + 1, problem.required_ancillas()), None)
        .unwrap();

    let mut controlled_state = StateVector::new(num_qubits).unwrap();
    controlled_state.run(&controlled).unwrap();
    let mut plain_state = StateVector::new(num_qubits).unwrap();
    plain_state.run(&plain).unwrap();

    for q in 0..=n {
        let pc = controlled_state.qubit_probability(q).unwrap();
        let pp = plain_state.qubit_probability(q).unwrap();
        assert!((pc - pp).abs() < 1e-10, "qubit {}: {} vs {}", q, pc, pp);
    }
}

#[test]
fn controlled_inverse_restores_initial_state() {
    let n = 2;
    let problem = uniform_problem(n, 1.0);
    let num_ancillas = problem.required_ancillas_controlled();
    let targets = register(0, n + 1);
    let ancillas = register(n + 1, num_ancillas);
    let control = QubitId::new(n + 1 + num_ancillas);
    let num_qubits = n + 2 + num_ancillas;

    let mut qc = Circuit::new(num_qubits);
    qc.add_gate(Arc::new(PauliX), &[control]).unwrap();
    problem
        .build_controlled(&mut qc, &targets, control, &ancillas, None)
        .unwrap();
    problem
        .build_controlled_inverse(&mut qc, &targets, control, &ancillas, None)
        .unwrap();

    let mut state = StateVector::new(num_qubits).unwrap();
    state.run(&qc).unwrap();

    assert!((state.probability(1 << control.index()) - 1.0).abs() < 1e-10);
}

// Uncertainty model with fixed, known ancilla counts
#[derive(Debug)]
struct MockModel {
    targets: usize,
    ancillas: usize,
    ancillas_controlled: usize,
}

impl CircuitFactory for MockModel {
    fn factory_name(&self) -> &str {
        "mock_model"
    }

    fn num_target_qubits(&self) -> usize {
        self.targets
    }

    fn required_ancillas(&self) -> usize {
        self.ancillas
    }

    fn required_ancillas_controlled(&self) -> usize {
        self.ancillas_controlled
    }

    fn build(
        &self,
        _circuit: &mut Circuit,
        _targets: &[QubitId],
        _ancillas: &[QubitId],
        _params: Option<&[Parameter]>,
    ) -> Result<()> {
        Ok(())
    }

    fn build_inverse(
        &self,
        _circuit: &mut Circuit,
        _targets: &[QubitId],
        _ancillas: &[QubitId],
        _params: Option<&[Parameter]>,
    ) -> Result<()> {
        Ok(())
    }

    fn build_controlled(
        &self,
        _circuit: &mut Circuit,
        _targets: &[QubitId],
        _control: QubitId,
        _ancillas: &[QubitId],
        _params: Option<&[Parameter]>,
    ) -> Result<()> {
        Ok(())
    }

    fn build_controlled_inverse(
        &self,
        _circuit: &mut Circuit,
        _targets: &[QubitId],
        _control: QubitId,
        _ancillas: &[QubitId],
        _params: Option<&[Parameter]>,
    ) -> Result<()> {
        Ok(())
    }
}

impl UncertaintyModel for MockModel {
    fn low(&self) -> f64 {
        0.0
    }

    fn high(&self) -> f64 {
        (self.num_values() - 1) as f64
    }
}

#[test]
fn required_ancillas_is_sum_of_sub_components() {
    // Model: 3 targets, 5 plain / 6 controlled ancillas.
    // Comparator over 4 targets: 2 plain / 3 controlled ancillas.
    let model = Arc::new(MockModel {
        targets: 3,
        ancillas: 5,
        ancillas_controlled: 6,
    });
    let problem = EuropeanCallDelta::new(model, 3.0).unwrap();

    assert_eq!(problem.required_ancillas(), 5 + 2);
    assert_eq!(problem.required_ancillas_controlled(), 6 + 3);
}

#[test]
fn insufficient_ancillas_propagates_from_sub_component() {
    let n = 3;
    let problem = uniform_problem(n, 3.0);
    let mut qc = Circuit::new(n + 1);
    let targets = register(0, n + 1);

    // Comparator needs 2 ancillas, none given
    let result = problem.build(&mut qc, &targets, &[], None);
    assert!(result.is_err());
}
