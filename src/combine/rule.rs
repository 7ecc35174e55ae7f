//! Equivalent value of parts wired in series or parallel.

use std::fmt;

use crate::error::{PassiveError, Result};

use super::{Family, Topology};

/// Equivalent-value formula for one family and topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CombinationRule {
    family: Family,
    topology: Topology,
}

impl CombinationRule {
    pub const RESISTOR_SERIES: CombinationRule =
        CombinationRule::new(Family::Resistor, Topology::Series);
    pub const RESISTOR_PARALLEL: CombinationRule =
        CombinationRule::new(Family::Resistor, Topology::Parallel);
    pub const CAPACITOR_SERIES: CombinationRule =
        CombinationRule::new(Family::Capacitor, Topology::Series);
    pub const CAPACITOR_PARALLEL: CombinationRule =
        CombinationRule::new(Family::Capacitor, Topology::Parallel);

    pub const fn new(family: Family, topology: Topology) -> Self {
        Self { family, topology }
    }

    pub fn family(&self) -> Family {
        self.family
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Whether this rule adds values directly (as opposed to reciprocals).
    pub fn is_additive(&self) -> bool {
        match (self.family, self.topology) {
            (Family::Resistor, Topology::Series) => true,
            (Family::Resistor, Topology::Parallel) => false,
            (Family::Capacitor, Topology::Series) => false,
            (Family::Capacitor, Topology::Parallel) => true,
        }
    }

    /// Equivalent value of any number of parts.
    ///
    /// Fails with `InvalidInput` on an empty tuple or any magnitude that is
    /// not finite and positive.
    pub fn combine(&self, values: &[f64]) -> Result<f64> {
        validate_magnitudes(values)?;
        Ok(self.apply(values))
    }

    /// Equivalent value without validation.
    ///
    /// Callers guarantee a non-empty tuple of positive magnitudes, as every
    /// [`ValueSet`](crate::series::ValueSet) does.
    pub fn apply(&self, values: &[f64]) -> f64 {
        if self.is_additive() {
            values.iter().sum()
        } else {
            1.0 / values.iter().map(|v| 1.0 / v).sum::<f64>()
        }
    }

    /// Closed form for two parts.
    pub fn pair(&self, a: f64, b: f64) -> f64 {
        if self.is_additive() {
            a + b
        } else {
            (a * b) / (a + b)
        }
    }

    /// Closed form for three parts.
    pub fn triple(&self, a: f64, b: f64, c: f64) -> f64 {
        if self.is_additive() {
            a + b + c
        } else {
            1.0 / (1.0 / a + 1.0 / b + 1.0 / c)
        }
    }
}

impl fmt::Display for CombinationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family, self.topology)
    }
}

/// Reject empty tuples and magnitudes that are not finite and positive.
pub(crate) fn validate_magnitudes(values: &[f64]) -> Result<()> {
    if values.is_empty() {
        return Err(PassiveError::invalid_input("no component values given"));
    }
    if let Some(bad) = values.iter().find(|v| !v.is_finite() || **v <= 0.0) {
        return Err(PassiveError::invalid_input(format!(
            "component value {bad} must be positive"
        )));
    }
    Ok(())
}
