//! RC time-constant matching across resistor and capacitor tables.

use crate::combine::{Arrangement, Family, RcNetwork};
use crate::error::Result;
use crate::series::{Catalog, EiaStandard, ValueSet};

use super::engine::{exhaustive_search, Bounds, Position};

/// Shape of an RC search: series, arrangements and per-family bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RcQuery {
    pub resistor_standard: EiaStandard,
    pub capacitor_standard: EiaStandard,
    pub network: RcNetwork,
    pub resistor_bounds: Option<Bounds>,
    pub capacitor_bounds: Option<Bounds>,
}

impl RcQuery {
    /// One resistor and one capacitor from the given series, unbounded.
    pub fn new(resistor_standard: EiaStandard, capacitor_standard: EiaStandard) -> Self {
        Self {
            resistor_standard,
            capacitor_standard,
            network: RcNetwork::default(),
            resistor_bounds: None,
            capacitor_bounds: None,
        }
    }

    pub fn with_resistors(mut self, resistors: Arrangement) -> Self {
        self.network.resistors = resistors;
        self
    }

    pub fn with_capacitors(mut self, capacitors: Arrangement) -> Self {
        self.network.capacitors = capacitors;
        self
    }

    pub fn with_resistor_bounds(mut self, bounds: Bounds) -> Self {
        self.resistor_bounds = Some(bounds);
        self
    }

    pub fn with_capacitor_bounds(mut self, bounds: Bounds) -> Self {
        self.capacitor_bounds = Some(bounds);
        self
    }
}

/// Parts chosen by [`rc_search`].
#[derive(Debug, Clone, PartialEq)]
pub struct RcSelection {
    pub resistors: Vec<f64>,
    pub capacitors: Vec<f64>,
    /// Achieved `R_eq * C_eq` in seconds.
    pub time_constant: f64,
    /// `|time_constant - tau|`.
    pub error: f64,
}

/// Resistors and capacitors from the catalog whose time constant is closest
/// to `tau`.
pub fn rc_search(catalog: &Catalog, tau: f64, query: &RcQuery) -> Result<RcSelection> {
    let resistors = catalog.table(Family::Resistor, query.resistor_standard);
    let capacitors = catalog.table(Family::Capacitor, query.capacitor_standard);
    rc_search_in(tau, resistors, capacitors, query)
}

/// Same as [`rc_search`] with explicit tables; the query's series are ignored.
///
/// Positions enumerate resistors first, then capacitors.
pub fn rc_search_in(
    tau: f64,
    resistors: &ValueSet,
    capacitors: &ValueSet,
    query: &RcQuery,
) -> Result<RcSelection> {
    let network = query.network;
    let split = network.resistors.count();

    let mut positions = vec![Position::new(resistors, query.resistor_bounds); split];
    positions.extend(
        std::iter::repeat(Position::new(capacitors, query.capacitor_bounds))
            .take(network.capacitors.count()),
    );

    let selection = exhaustive_search(&positions, tau, |values| network.apply(values))?;

    let (r, c) = selection.values.split_at(split);
    Ok(RcSelection {
        resistors: r.to_vec(),
        capacitors: c.to_vec(),
        time_constant: selection.achieved,
        error: selection.error,
    })
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::PassiveError;

    #[test]
    fn test_single_rc_exact() {
        let catalog = Catalog::new();
        let query = RcQuery::new(EiaStandard::E12, EiaStandard::E6)
            .with_resistor_bounds(Bounds::new(1e3, 100e3).unwrap())
            .with_capacitor_bounds(Bounds::new(1e-9, 1e-6).unwrap());
        let result = rc_search(&catalog, 1e-3, &query).unwrap();

        assert_relative_eq!(result.time_constant, 1e-3, max_relative = 1e-9);
        assert!(result.resistors[0] >= 1e3 && result.resistors[0] <= 100e3);
        assert!(result.capacitors[0] >= 1e-9 && result.capacitors[0] <= 1e-6);
    }

    #[test]
    fn test_synthetic_tables_order() {
        let r = ValueSet::from_values(vec![1.0, 2.0, 5.0]).unwrap();
        let c = ValueSet::from_values(vec![0.5, 1.0]).unwrap();
        let query = RcQuery::new(EiaStandard::E3, EiaStandard::E3);

        // 2 * 0.5 and 1 * 1 both give 1; (1, 1.0) is enumerated first.
        let result = rc_search_in(1.0, &r, &c, &query).unwrap();
        assert_eq!(result.resistors, vec![1.0]);
        assert_eq!(result.capacitors, vec![1.0]);
        assert_eq!(result.error, 0.0);
    }

    #[test]
    fn test_series_resistors() {
        let r = ValueSet::from_values(vec![1.0, 2.0, 5.0]).unwrap();
        let c = ValueSet::from_values(vec![0.1, 1.0]).unwrap();
        let query = RcQuery::new(EiaStandard::E3, EiaStandard::E3)
            .with_resistors(Arrangement::series(2).unwrap());

        // (5 + 2) * 1 = 7
        let result = rc_search_in(7.0, &r, &c, &query).unwrap();
        assert_eq!(result.resistors, vec![2.0, 5.0]);
        assert_eq!(result.capacitors, vec![1.0]);
    }

    #[test]
    fn test_three_parallel_resistors() {
        let catalog = Catalog::new();
        let query = RcQuery::new(EiaStandard::E6, EiaStandard::E3)
            .with_resistors(Arrangement::parallel(3).unwrap())
            .with_resistor_bounds(Bounds::new(1e3, 100e3).unwrap())
            .with_capacitor_bounds(Bounds::new(9e-9, 11e-9).unwrap());
        let result = rc_search(&catalog, 50e-6, &query).unwrap();

        assert_eq!(result.resistors.len(), 3);
        assert_eq!(result.capacitors.len(), 1);
        let r_eq = 1.0 / result.resistors.iter().map(|r| 1.0 / r).sum::<f64>();
        assert_relative_eq!(r_eq * result.capacitors[0], result.time_constant, max_relative = 1e-9);
        assert!(result.error / 50e-6 < 0.05);
    }

    #[test]
    fn test_capacitor_arrangement() {
        let r = ValueSet::from_values(vec![1.0]).unwrap();
        let c = ValueSet::from_values(vec![1.0, 2.0]).unwrap();
        let query = RcQuery::new(EiaStandard::E3, EiaStandard::E3)
            .with_capacitors(Arrangement::series(2).unwrap());

        // 2 in series with 2 gives 1
        let result = rc_search_in(1.0, &r, &c, &query).unwrap();
        assert_eq!(result.capacitors, vec![2.0, 2.0]);
    }

    #[test]
    fn test_infeasible_capacitor_bounds() {
        let catalog = Catalog::new();
        let query = RcQuery::new(EiaStandard::E12, EiaStandard::E12)
            .with_capacitor_bounds(Bounds::new(1.0, 2.0).unwrap());
        assert_eq!(
            rc_search(&catalog, 1e-3, &query),
            Err(PassiveError::NoFeasibleCombination { positions: 2 })
        );
    }
}
