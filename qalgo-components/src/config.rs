//! Strict component configuration
//!
//! Each configurable component declares a plain struct with a statically
//! enumerated field set. Parsing goes through serde with
//! `deny_unknown_fields`, so an unrecognized field fails construction before
//! any computation happens.

use crate::error::{ComponentError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Configuration for [`EuropeanCallDelta`](crate::EuropeanCallDelta)
///
/// The only accepted field is `strike_price` (default 0).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EuropeanCallConfig {
    /// Strike price of the option, in the uncertainty model's value units
    pub strike_price: f64,
}

impl Default for EuropeanCallConfig {
    fn default() -> Self {
        Self { strike_price: 0.0 }
    }
}

/// Configuration for [`ExactLinearSolver`](crate::ExactLinearSolver)
///
/// The solver takes no configuration beyond its matrix and vector; the empty
/// field set still rejects unknown fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LinearSolverConfig {}

/// Parse a component configuration from JSON
///
/// # Errors
/// Returns [`ComponentError::InvalidConfig`] on malformed JSON or fields
/// outside the configuration's declared set.
///
/// # Example
/// ```
/// use qalgo_components::config::{parse_config, EuropeanCallConfig};
///
/// let cfg: EuropeanCallConfig = parse_config(r#"{"strike_price": 1.5}"#).unwrap();
/// assert_eq!(cfg.strike_price, 1.5);
///
/// let bad: Result<EuropeanCallConfig, _> = parse_config(r#"{"strike": 1.5}"#);
/// assert!(bad.is_err());
/// ```
pub fn parse_config<T: DeserializeOwned>(json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|e| ComponentError::InvalidConfig(e.to_string()))
}
