//! Dense statevector simulation for qalgo circuits
//!
//! Executes [`qalgo_core::Circuit`]s on a dense amplitude vector. This crate
//! backs the verification tests of the component factories (uncompute checks,
//! controlled-build checks, comparator truth tables); it is not a
//! general-purpose simulator.

pub mod error;
pub mod state_vector;

pub use error::{Result, StateError};
pub use state_vector::StateVector;
