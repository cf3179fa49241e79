//! Circuit parameters threaded through factory builds

/// A classical parameter passed to circuit factories
///
/// Factories in this workspace receive an optional parameter set and pass it
/// through to their sub-components unchanged; none of the current components
/// consume parameters themselves.
///
/// # Example
/// ```
/// use qalgo_core::Parameter;
///
/// let theta = Parameter::new(0.5);
/// assert_eq!(theta.value(), 0.5);
///
/// let beta = Parameter::named("beta_0", 1.0);
/// assert_eq!(beta.name(), Some("beta_0"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Parameter {
    name: Option<String>,
    value: f64,
}

impl Parameter {
    /// Create a new parameter with a value
    pub fn new(value: f64) -> Self {
        Self { name: None, value }
    }

    /// Create a named parameter
    pub fn named(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: Some(name.into()),
            value,
        }
    }

    /// Get parameter name
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Get parameter value
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unnamed_parameter() {
        let p = Parameter::new(1.5);
        assert_eq!(p.value(), 1.5);
        assert!(p.name().is_none());
    }

    #[test]
    fn test_named_parameter() {
        let p = Parameter::named("theta", 0.25);
        assert_eq!(p.name(), Some("theta"));
        assert_eq!(p.value(), 0.25);
    }
}
