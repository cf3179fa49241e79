//! Standard quantum gate implementations
//!
//! The subset of standard gates needed by the circuit factories in this
//! workspace: Hadamard, Pauli-X, RY rotations, and their controlled forms up
//! to the Toffoli gate. Matrices follow the [`Gate`] trait convention (first
//! listed qubit is the most significant bit of the basis index).

use crate::gate::Gate;
use num_complex::Complex64;
use std::f64::consts::FRAC_1_SQRT_2;

fn c(re: f64) -> Complex64 {
    Complex64::new(re, 0.0)
}

/// 2x2 Hadamard matrix, row-major
fn hadamard_matrix() -> [Complex64; 4] {
    [
        c(FRAC_1_SQRT_2),
        c(FRAC_1_SQRT_2),
        c(FRAC_1_SQRT_2),
        c(-FRAC_1_SQRT_2),
    ]
}

/// 2x2 Pauli-X matrix, row-major
fn pauli_x_matrix() -> [Complex64; 4] {
    [c(0.0), c(1.0), c(1.0), c(0.0)]
}

/// 2x2 RY(theta) matrix, row-major
fn rotation_y_matrix(theta: f64) -> [Complex64; 4] {
    let half = theta / 2.0;
    [
        c(half.cos()),
        c(-half.sin()),
        c(half.sin()),
        c(half.cos()),
    ]
}

/// Embed a single-qubit unitary as its controlled 4x4 form
///
/// Basis order |control, target⟩: identity on the |0x⟩ block, `u` on the
/// |1x⟩ block.
fn controlled(u: &[Complex64; 4]) -> Vec<Complex64> {
    let mut m = vec![Complex64::ZERO; 16];
    m[0] = c(1.0);
    m[5] = c(1.0);
    m[10] = u[0];
    m[11] = u[1];
    m[14] = u[2];
    m[15] = u[3];
    m
}

/// Hadamard gate
///
/// Creates superposition: H|0⟩ = (|0⟩ + |1⟩)/√2
#[derive(Debug, Clone, Copy)]
pub struct Hadamard;

impl Gate for Hadamard {
    fn name(&self) -> &str {
        "H"
    }

    fn num_qubits(&self) -> usize {
        1
    }

    fn is_hermitian(&self) -> bool {
        true
    }

    fn matrix(&self) -> Option<Vec<Complex64>> {
        Some(hadamard_matrix().to_vec())
    }
}

/// Pauli-X gate (NOT gate)
///
/// Bit flip: X|0⟩ = |1⟩, X|1⟩ = |0⟩
#[derive(Debug, Clone, Copy)]
pub struct PauliX;

impl Gate for PauliX {
    fn name(&self) -> &str {
        "X"
    }

    fn num_qubits(&self) -> usize {
        1
    }

    fn is_hermitian(&self) -> bool {
        true
    }

    fn matrix(&self) -> Option<Vec<Complex64>> {
        Some(pauli_x_matrix().to_vec())
    }
}

/// Rotation-Y gate
///
/// Rotates around the Y-axis by angle θ
#[derive(Debug, Clone, Copy)]
pub struct RotationY {
    theta: f64,
}

impl RotationY {
    /// Creates a new RY gate with the given angle
    pub const fn new(theta: f64) -> Self {
        Self { theta }
    }

    /// Returns the rotation angle
    pub const fn angle(&self) -> f64 {
        self.theta
    }

    /// Returns the RY gate with the negated angle
    pub const fn inverse(&self) -> Self {
        Self::new(-self.theta)
    }
}

impl Gate for RotationY {
    fn name(&self) -> &str {
        "RY"
    }

    fn num_qubits(&self) -> usize {
        1
    }

    fn description(&self) -> String {
        format!("RY({:.4})", self.theta)
    }

    fn matrix(&self) -> Option<Vec<Complex64>> {
        Some(rotation_y_matrix(self.theta).to_vec())
    }
}

/// CNOT gate (Controlled-NOT)
///
/// Qubit order: [control, target]
#[derive(Debug, Clone, Copy)]
pub struct CNot;

impl Gate for CNot {
    fn name(&self) -> &str {
        "CNOT"
    }

    fn num_qubits(&self) -> usize {
        2
    }

    fn is_hermitian(&self) -> bool {
        true
    }

    fn matrix(&self) -> Option<Vec<Complex64>> {
        Some(controlled(&pauli_x_matrix()))
    }
}

/// Controlled-Hadamard gate
///
/// Qubit order: [control, target]
#[derive(Debug, Clone, Copy)]
pub struct ControlledHadamard;

impl Gate for ControlledHadamard {
    fn name(&self) -> &str {
        "CH"
    }

    fn num_qubits(&self) -> usize {
        2
    }

    fn is_hermitian(&self) -> bool {
        true
    }

    fn matrix(&self) -> Option<Vec<Complex64>> {
        Some(controlled(&hadamard_matrix()))
    }
}

/// Controlled Rotation-Y gate
///
/// Qubit order: [control, target]
#[derive(Debug, Clone, Copy)]
pub struct ControlledRotationY {
    theta: f64,
}

impl ControlledRotationY {
    /// Creates a new CRY gate with the given angle
    pub const fn new(theta: f64) -> Self {
        Self { theta }
    }

    /// Returns the rotation angle
    pub const fn angle(&self) -> f64 {
        self.theta
    }

    /// Returns the CRY gate with the negated angle
    pub const fn inverse(&self) -> Self {
        Self::new(-self.theta)
    }
}

impl Gate for ControlledRotationY {
    fn name(&self) -> &str {
        "CRY"
    }

    fn num_qubits(&self) -> usize {
        2
    }

    fn description(&self) -> String {
        format!("CRY({:.4})", self.theta)
    }

    fn matrix(&self) -> Option<Vec<Complex64>> {
        Some(controlled(&rotation_y_matrix(self.theta)))
    }
}

/// Toffoli gate (CCNOT)
///
/// Qubit order: [control, control, target]
#[derive(Debug, Clone, Copy)]
pub struct Toffoli;

impl Gate for Toffoli {
    fn name(&self) -> &str {
        "CCNOT"
    }

    fn num_qubits(&self) -> usize {
        3
    }

    fn is_hermitian(&self) -> bool {
        true
    }

    fn description(&self) -> String {
        "Toffoli (CCNOT)".to_string()
    }

    fn matrix(&self) -> Option<Vec<Complex64>> {
        // Identity except |110⟩ <-> |111⟩
        let mut m = vec![Complex64::ZERO; 64];
        for i in 0..6 {
            m[i * 8 + i] = c(1.0);
        }
        m[6 * 8 + 7] = c(1.0);
        m[7 * 8 + 6] = c(1.0);
        Some(m)
    }
}
