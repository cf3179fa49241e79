//! Quantum algorithm components
//!
//! Building blocks for amplitude-estimation pipelines plus a classical
//! reference solver:
//! - [`UncertaintyModel`]s load a price distribution over a quantum register
//!   ([`UniformDistribution`], [`BernoulliDistribution`])
//! - [`FixedValueComparator`] flags register values crossing a threshold
//! - [`EuropeanCallDelta`] composes the two into an option payoff problem
//! - [`ExactLinearSolver`] solves `M x = b` classically and reports the
//!   spectrum, as a validation baseline
//!
//! All circuit components implement [`qalgo_core::CircuitFactory`] and
//! append to an externally supplied circuit in forward, inverse, controlled,
//! and controlled-inverse form.
//!
//! # Example
//! ```
//! use qalgo_components::{EuropeanCallDelta, UniformDistribution};
//! use qalgo_core::{qubit::register, Circuit, CircuitFactory};
//! use std::sync::Arc;
//!
//! let model = Arc::new(UniformDistribution::new(2, 0.0, 3.0).unwrap());
//! let problem = EuropeanCallDelta::new(model, 2.0).unwrap();
//!
//! let mut circuit = Circuit::new(4);
//! let targets = register(0, 3);
//! let ancillas = register(3, problem.required_ancillas());
//! problem.build(&mut circuit, &targets, &ancillas, None).unwrap();
//! assert!(!circuit.is_empty());
//! ```

pub mod comparator;
pub mod config;
pub mod error;
pub mod european_call;
pub mod linear_solver;
pub mod uncertainty;

pub use comparator::FixedValueComparator;
pub use config::{EuropeanCallConfig, LinearSolverConfig};
pub use error::{ComponentError, Result};
pub use european_call::EuropeanCallDelta;
pub use linear_solver::{ExactLinearSolver, SolveResult};
pub use uncertainty::{BernoulliDistribution, UncertaintyModel, UniformDistribution};
