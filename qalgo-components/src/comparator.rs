//! Fixed-value comparator circuit factory

use crate::error::{ComponentError, Result as ComponentResult};
use qalgo_core::gates::{CNot, PauliX, Toffoli};
use qalgo_core::{Circuit, CircuitFactory, Gate, Parameter, QubitId, Result};
use std::sync::Arc;

type Op = (Arc<dyn Gate>, Vec<QubitId>);

/// Flags whether an n-qubit register value crosses a fixed threshold
///
/// Operates on `n + 1` target qubits: the first `n` hold the state (qubit 0
/// least significant), the last receives the comparison result. With
/// `geq = true` (the default) the result qubit is flipped for states
/// `s >= value`; with `geq = false` for `s < value`.
///
/// The comparison is the carry of the addition `s + (2^n - value)`, computed
/// by a ripple chain through `n - 1` ancilla qubits built from CNOT, Toffoli
/// and logical-OR stages. Ancillas are uncomputed before the build returns.
///
/// # Example
/// ```
/// use qalgo_components::FixedValueComparator;
/// use qalgo_core::CircuitFactory;
///
/// // 3 state qubits plus result qubit, threshold 5
/// let cmp = FixedValueComparator::new(4, 5).unwrap();
/// assert_eq!(cmp.num_target_qubits(), 4);
/// assert_eq!(cmp.required_ancillas(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct FixedValueComparator {
    num_state_qubits: usize,
    value: i64,
    geq: bool,
}

impl FixedValueComparator {
    /// Create a comparator for `state >= value`
    ///
    /// `num_target_qubits` counts the state qubits plus the result qubit.
    ///
    /// # Errors
    /// Returns error if fewer than 2 target qubits are requested
    pub fn new(num_target_qubits: usize, value: i64) -> ComponentResult<Self> {
        Self::with_geq(num_target_qubits, value, true)
    }

    /// Create a comparator with an explicit comparison direction
    ///
    /// # Errors
    /// Returns error if fewer than 2 target qubits are requested
    pub fn with_geq(num_target_qubits: usize, value: i64, geq: bool) -> ComponentResult<Self> {
        if num_target_qubits < 2 {
            return Err(ComponentError::invalid_config(
                "comparator needs at least one state qubit and the result qubit",
            ));
        }
        if num_target_qubits > 64 {
            return Err(ComponentError::invalid_config(
                "comparator supports at most 63 state qubits",
            ));
        }

        Ok(Self {
            num_state_qubits: num_target_qubits - 1,
            value,
            geq,
        })
    }

    /// Threshold value on the register's integer grid
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Comparison direction; `true` flags `state >= value`
    pub fn geq(&self) -> bool {
        self.geq
    }

    /// Number of state qubits (targets minus the result qubit)
    pub fn num_state_qubits(&self) -> usize {
        self.num_state_qubits
    }

    /// Two's complement bits of the threshold, least significant first
    fn twos_complement(&self) -> Vec<u8> {
        let n = self.num_state_qubits;
        let span = 1i128 << n;
        let t = (span - self.value as i128).rem_euclid(span) as u64;
        (0..n).map(|i| ((t >> i) & 1) as u8).collect()
    }

    /// Whether the threshold lies on the register grid
    fn in_range(&self) -> bool {
        self.value > 0 && (self.value as i128) < (1i128 << self.num_state_qubits)
    }

    /// Emit `out ^= a OR b` for an `out` known to be |0⟩
    fn or_into(ops: &mut Vec<Op>, a: QubitId, b: QubitId, out: QubitId) {
        ops.push((Arc::new(CNot), vec![a, out]));
        ops.push((Arc::new(CNot), vec![b, out]));
        ops.push((Arc::new(Toffoli), vec![a, b, out]));
    }

    /// Emit carry-chain stage `i`, writing into `out`
    ///
    /// Stage i computes the carry out of bit i of `s + twos_complement`:
    /// for a set complement bit the carry is an OR with the previous carry,
    /// otherwise an AND.
    fn chain_stage(
        &self,
        ops: &mut Vec<Op>,
        twos: &[u8],
        state: &[QubitId],
        ancillas: &[QubitId],
        i: usize,
        out: QubitId,
    ) {
        if i == 0 {
            if twos[0] == 1 {
                ops.push((Arc::new(CNot), vec![state[0], out]));
            }
        } else if twos[i] == 1 {
            Self::or_into(ops, state[i], ancillas[i - 1], out);
        } else {
            ops.push((Arc::new(Toffoli), vec![state[i], ancillas[i - 1], out]));
        }
    }

    /// Full forward gate sequence
    fn forward_ops(&self, targets: &[QubitId], ancillas: &[QubitId]) -> Vec<Op> {
        let n = self.num_state_qubits;
        let state = &targets[..n];
        let result = targets[n];
        let mut ops: Vec<Op> = Vec::new();

        if self.value <= 0 {
            // Condition always holds for non-negative states
            if self.geq {
                ops.push((Arc::new(PauliX), vec![result]));
            }
        } else if self.in_range() {
            let twos = self.twos_complement();

            let mut chain: Vec<Op> = Vec::new();
            for i in 0..n - 1 {
                self.chain_stage(&mut chain, &twos, state, ancillas, i, ancillas[i]);
            }

            ops.extend(chain.iter().cloned());
            self.chain_stage(&mut ops, &twos, state, ancillas, n - 1, result);
            if !self.geq {
                ops.push((Arc::new(PauliX), vec![result]));
            }
            // Return the ancillas to |0⟩
            ops.extend(chain.into_iter().rev());
        } else {
            // Threshold above the grid; condition never holds
            if !self.geq {
                ops.push((Arc::new(PauliX), vec![result]));
            }
        }

        ops
    }

    /// Full controlled gate sequence
    ///
    /// The carry is computed into one extra ancilla and copied onto the
    /// result with a Toffoli gated on `control`; only the copy and the
    /// direction flip need controlling because the chain uncomputes itself.
    fn controlled_ops(
        &self,
        targets: &[QubitId],
        control: QubitId,
        ancillas: &[QubitId],
    ) -> Vec<Op> {
        let n = self.num_state_qubits;
        let state = &targets[..n];
        let result = targets[n];
        let mut ops: Vec<Op> = Vec::new();

        if self.value <= 0 {
            if self.geq {
                ops.push((Arc::new(CNot), vec![control, result]));
            }
        } else if self.in_range() {
            if n == 1 {
                // Single state qubit compares directly against threshold 1
                ops.push((Arc::new(Toffoli), vec![control, state[0], result]));
                if !self.geq {
                    ops.push((Arc::new(CNot), vec![control, result]));
                }
            } else {
                let twos = self.twos_complement();
                let carry = ancillas[n - 1];

                let mut chain: Vec<Op> = Vec::new();
                for i in 0..n - 1 {
                    self.chain_stage(&mut chain, &twos, state, ancillas, i, ancillas[i]);
                }
                self.chain_stage(&mut chain, &twos, state, ancillas, n - 1, carry);

                ops.extend(chain.iter().cloned());
                ops.push((Arc::new(Toffoli), vec![control, carry, result]));
                if !self.geq {
                    ops.push((Arc::new(CNot), vec![control, result]));
                }
                ops.extend(chain.into_iter().rev());
            }
        } else if !self.geq {
            ops.push((Arc::new(CNot), vec![control, result]));
        }

        ops
    }

    fn append(circuit: &mut Circuit, ops: Vec<Op>, reversed: bool) -> Result<()> {
        if reversed {
            // Every comparator gate is hermitian, so reversal inverts
            for (gate, qubits) in ops.into_iter().rev() {
                circuit.add_gate(gate, &qubits)?;
            }
        } else {
            for (gate, qubits) in ops {
                circuit.add_gate(gate, &qubits)?;
            }
        }
        Ok(())
    }
}

impl CircuitFactory for FixedValueComparator {
    fn factory_name(&self) -> &str {
        "fixed_value_comparator"
    }

    fn num_target_qubits(&self) -> usize {
        self.num_state_qubits + 1
    }

    fn required_ancillas(&self) -> usize {
        if self.in_range() {
            self.num_state_qubits - 1
        } else {
            // Off-grid thresholds degenerate to a constant
            0
        }
    }

    fn required_ancillas_controlled(&self) -> usize {
        if !self.in_range() || self.num_state_qubits == 1 {
            0
        } else {
            self.num_state_qubits
        }
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
        Self::append(circuit, self.forward_ops(targets, ancillas), false)
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
        Self::append(circuit, self.forward_ops(targets, ancillas), true)
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
        Self::append(circuit, self.controlled_ops(targets, control, ancillas), false)
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
        Self::append(circuit, self.controlled_ops(targets, control, ancillas), true)
    }
}
