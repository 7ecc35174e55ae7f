//! Precomputed standard tables for both component families.

use crate::combine::Family;
use crate::error::Result;

use super::{standard_table, DecadeRange, EiaStandard, ValueSet};

/// Decade ranges used to build a [`Catalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Resistor decades (default 1 Ω .. 9.76 MΩ).
    pub resistor_decades: DecadeRange,
    /// Capacitor decades (default 1 pF .. 9.76 mF).
    pub capacitor_decades: DecadeRange,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            resistor_decades: Family::Resistor.default_decades(),
            capacitor_decades: Family::Capacitor.default_decades(),
        }
    }
}

impl CatalogConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the resistor decade range.
    pub fn with_resistor_decades(mut self, min: i32, max: i32) -> Result<Self> {
        self.resistor_decades = DecadeRange::new(min, max)?;
        Ok(self)
    }

    /// Set the capacitor decade range.
    pub fn with_capacitor_decades(mut self, min: i32, max: i32) -> Result<Self> {
        self.capacitor_decades = DecadeRange::new(min, max)?;
        Ok(self)
    }

    /// Decade range configured for a family.
    pub fn decades(&self, family: Family) -> DecadeRange {
        match family {
            Family::Resistor => self.resistor_decades,
            Family::Capacitor => self.capacitor_decades,
        }
    }
}

/// Every standard table for resistors and capacitors, built once.
///
/// The catalog is immutable after construction and can be shared between
/// threads for concurrent searches.
#[derive(Debug, Clone)]
pub struct Catalog {
    config: CatalogConfig,
    resistors: Vec<ValueSet>,
    capacitors: Vec<ValueSet>,
}

impl Catalog {
    /// Build the catalog with default decade ranges.
    pub fn new() -> Self {
        Self::with_config(CatalogConfig::default())
    }

    /// Build the catalog from an explicit configuration.
    pub fn with_config(config: CatalogConfig) -> Self {
        let build = |decades: DecadeRange| {
            EiaStandard::ALL
                .iter()
                .map(|standard| standard_table(*standard, decades))
                .collect::<Vec<_>>()
        };

        let catalog = Self {
            resistors: build(config.resistor_decades),
            capacitors: build(config.capacitor_decades),
            config,
        };

        tracing::debug!(
            "Built standard value catalog (resistors {}, capacitors {})",
            config.resistor_decades,
            config.capacitor_decades
        );

        catalog
    }

    /// The configuration this catalog was built from.
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Resolve the table for a family and series.
    pub fn table(&self, family: Family, standard: EiaStandard) -> &ValueSet {
        match family {
            Family::Resistor => &self.resistors[standard.index()],
            Family::Capacitor => &self.capacitors[standard.index()],
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ranges() {
        let catalog = Catalog::new();

        let r = catalog.table(Family::Resistor, EiaStandard::E12);
        assert_eq!(r.len(), 12 * 7);
        assert_eq!(r.first(), 1.0);

        let c = catalog.table(Family::Capacitor, EiaStandard::E6);
        assert_eq!(c.len(), 6 * 10);
        assert_eq!(c.first(), 1e-12);
        assert!(c.last() < 1e-2);
    }

    #[test]
    fn test_custom_ranges() {
        let config = CatalogConfig::new()
            .with_resistor_decades(2, 4)
            .unwrap()
            .with_capacitor_decades(-9, -6)
            .unwrap();
        let catalog = Catalog::with_config(config);

        assert_eq!(catalog.table(Family::Resistor, EiaStandard::E3).first(), 100.0);
        assert_eq!(catalog.table(Family::Capacitor, EiaStandard::E24).len(), 24 * 4);
        assert_eq!(catalog.config().decades(Family::Resistor), DecadeRange::new(2, 4).unwrap());
    }

    #[test]
    fn test_invalid_range_rejected() {
        assert!(CatalogConfig::new().with_resistor_decades(6, 0).is_err());
    }

    #[test]
    fn test_catalog_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Catalog>();
    }
}
