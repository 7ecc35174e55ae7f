//! RC time constants of resistor and capacitor groups.

use crate::error::{PassiveError, Result};
use crate::tolerance;

use super::rule::validate_magnitudes;
use super::{Arrangement, Family, Topology};

/// Time constant `R_eq * C_eq` of a resistor group and a capacitor group.
///
/// `resistors` are combined with `r_topology` using resistor rules and
/// `capacitors` with `c_topology` using capacitor rules.
pub fn time_constant(
    resistors: &[f64],
    r_topology: Topology,
    capacitors: &[f64],
    c_topology: Topology,
) -> Result<f64> {
    let r_eq = Arrangement::new(r_topology, resistors.len().max(1))?
        .rule(Family::Resistor)
        .combine(resistors)?;
    let c_eq = Arrangement::new(c_topology, capacitors.len().max(1))?
        .rule(Family::Capacitor)
        .combine(capacitors)?;
    Ok(r_eq * c_eq)
}

/// A resistor arrangement driving a capacitor arrangement.
///
/// Tuples passed to an `RcNetwork` list the resistors first, then the
/// capacitors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RcNetwork {
    pub resistors: Arrangement,
    pub capacitors: Arrangement,
}

impl RcNetwork {
    pub fn new(resistors: Arrangement, capacitors: Arrangement) -> Self {
        Self {
            resistors,
            capacitors,
        }
    }

    /// Total number of parts in a tuple.
    pub fn positions(&self) -> usize {
        self.resistors.count() + self.capacitors.count()
    }

    /// Time constant of a full tuple, without validation.
    pub fn apply(&self, values: &[f64]) -> f64 {
        let (r, c) = values.split_at(self.resistors.count());
        let r_eq = self.resistors.rule(Family::Resistor).apply(r);
        let c_eq = self.capacitors.rule(Family::Capacitor).apply(c);
        r_eq * c_eq
    }

    /// Time constant of the given parts.
    pub fn time_constant(&self, resistors: &[f64], capacitors: &[f64]) -> Result<f64> {
        let values = self.tuple(resistors, capacitors)?;
        Ok(self.apply(&values))
    }

    /// Worst-case corner spread of the time constant, in percent.
    ///
    /// Every part carries the same symmetric `tolerance_percent`.
    pub fn tolerance_spread(
        &self,
        resistors: &[f64],
        capacitors: &[f64],
        tolerance_percent: f64,
    ) -> Result<f64> {
        let values = self.tuple(resistors, capacitors)?;
        tolerance::spread_with(&values, tolerance_percent, |v| self.apply(v))
    }

    fn tuple(&self, resistors: &[f64], capacitors: &[f64]) -> Result<Vec<f64>> {
        if resistors.len() != self.resistors.count() || capacitors.len() != self.capacitors.count() {
            return Err(PassiveError::invalid_input(format!(
                "expected {} resistor(s) and {} capacitor(s), got {} and {}",
                self.resistors.count(),
                self.capacitors.count(),
                resistors.len(),
                capacitors.len()
            )));
        }
        let values: Vec<f64> = resistors.iter().chain(capacitors).copied().collect();
        validate_magnitudes(&values)?;
        Ok(values)
    }
}
