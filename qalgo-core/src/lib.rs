//! Core types and traits for the qalgo quantum algorithm components
//!
//! This crate provides the fundamental types for building quantum circuits:
//! - [`QubitId`]: Type-safe qubit addressing
//! - [`Gate`]: Trait for quantum operations, with the standard gates in [`gates`]
//! - [`Circuit`]: Quantum circuit container mutated in place by factories
//! - [`CircuitFactory`]: Interface for components that append circuit
//!   fragments in forward, inverse, controlled, and controlled-inverse form
//!
//! # Example
//! ```
//! use qalgo_core::{Circuit, QubitId};
//! use qalgo_core::gates::Hadamard;
//! use std::sync::Arc;
//!
//! let mut circuit = Circuit::new(2);
//! circuit.add_gate(Arc::new(Hadamard), &[QubitId::new(0)]).unwrap();
//! assert_eq!(circuit.len(), 1);
//! ```

pub mod circuit;
pub mod error;
pub mod factory;
pub mod gate;
pub mod gates;
pub mod parameter;
pub mod qubit;

// Re-exports for convenience
pub use circuit::Circuit;
pub use error::QuantumError;
pub use factory::CircuitFactory;
pub use gate::{Gate, GateOp};
pub use num_complex::Complex64;
pub use parameter::Parameter;
pub use qubit::QubitId;

/// Type alias for results in qalgo
pub type Result<T> = std::result::Result<T, QuantumError>;
