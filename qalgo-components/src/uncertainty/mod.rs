//! Uncertainty models
//!
//! An uncertainty model loads a probability distribution over a discretized
//! value grid into a quantum register. The grid has `num_values` points
//! spread linearly over `[low, high]`; basis state |i⟩ of the target
//! register represents grid value `low + i * (high - low) / (num_values - 1)`.

mod bernoulli;
mod uniform;

pub use bernoulli::BernoulliDistribution;
pub use uniform::UniformDistribution;

use qalgo_core::CircuitFactory;

/// A circuit factory that encodes a probability distribution
///
/// Extends [`CircuitFactory`] with the value-range metadata problem
/// components need to map domain quantities (e.g. a strike price) onto the
/// register's integer grid.
pub trait UncertaintyModel: CircuitFactory {
    /// Lowest value on the grid
    fn low(&self) -> f64;

    /// Highest value on the grid
    fn high(&self) -> f64;

    /// Number of grid points
    ///
    /// Univariate models use the full register range.
    fn num_values(&self) -> usize {
        1 << self.num_target_qubits()
    }
}
