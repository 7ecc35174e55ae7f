//! Decade-scaled standard value tables.

use std::fmt;

use itertools::Itertools;

use crate::error::{PassiveError, Result};

use super::EiaStandard;

/// Smallest decade whose values stay normal `f64`s.
pub const MIN_DECADE: i32 = -307;

/// Largest decade whose values (up to `9.76e307`) stay finite.
pub const MAX_DECADE: i32 = 307;

/// An inclusive range of powers of ten, e.g. `0..=6` for 1 Ω .. 9.76 MΩ.
///
/// Always non-empty and within `MIN_DECADE..=MAX_DECADE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecadeRange {
    min: i32,
    max: i32,
}

impl DecadeRange {
    /// Create a decade range. `min` must not exceed `max` and both must lie
    /// within `MIN_DECADE..=MAX_DECADE`.
    pub fn new(min: i32, max: i32) -> Result<Self> {
        if min > max {
            return Err(PassiveError::invalid_input(format!(
                "decade range {min}..={max} is empty"
            )));
        }
        if min < MIN_DECADE || max > MAX_DECADE {
            return Err(PassiveError::invalid_input(format!(
                "decade range {min}..={max} leaves {MIN_DECADE}..={MAX_DECADE}"
            )));
        }
        Ok(Self { min, max })
    }

    /// Known-good ranges for compile-time defaults.
    pub(crate) const fn new_unchecked(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    /// Number of decades covered.
    pub fn len(&self) -> usize {
        (i64::from(self.max) - i64::from(self.min) + 1) as usize
    }

    /// A valid range always covers at least one decade.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Decade exponents in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = i32> {
        self.min..=self.max
    }
}

/// `10^decade`, exact wherever the power of ten is representable.
pub(crate) fn decade_scale(decade: i32) -> f64 {
    if decade >= 0 {
        10f64.powi(decade)
    } else {
        1.0 / 10f64.powi(-decade)
    }
}

impl fmt::Display for DecadeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "1e{}..1e{}", self.min, self.max + 1)
    }
}

/// An immutable, strictly increasing set of positive candidate magnitudes.
///
/// Sets are never empty. They are built once and shared read-only by every
/// search.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueSet {
    values: Box<[f64]>,
}

impl ValueSet {
    /// Build a set from explicit magnitudes.
    ///
    /// Values must be finite, positive and strictly increasing.
    pub fn from_values(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(PassiveError::invalid_input("value set is empty"));
        }
        if let Some(bad) = values.iter().find(|v| !v.is_finite() || **v <= 0.0) {
            return Err(PassiveError::invalid_input(format!(
                "value set contains non-positive magnitude {bad}"
            )));
        }
        if values.windows(2).any(|w| w[0] >= w[1]) {
            return Err(PassiveError::invalid_input(
                "value set must be strictly increasing",
            ));
        }
        Ok(Self {
            values: values.into_boxed_slice(),
        })
    }

    /// All magnitudes, ascending.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of magnitudes in the set.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: construction rejects empty sets.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Smallest magnitude.
    pub fn first(&self) -> f64 {
        self.values[0]
    }

    /// Largest magnitude.
    pub fn last(&self) -> f64 {
        self.values[self.values.len() - 1]
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }
}

/// Generate the table of a density over `[decade_min, decade_max]`.
///
/// For each decade `d` ascending and each mantissa `m` of the series, emits
/// `m * 10^d`. The first value of every decade is exactly `10^d`.
pub fn generate_table(density: u32, decade_min: i32, decade_max: i32) -> Result<ValueSet> {
    let standard = EiaStandard::from_density(density)?;
    let decades = DecadeRange::new(decade_min, decade_max)?;
    Ok(standard_table(standard, decades))
}

/// Same as [`generate_table`] for an already resolved series.
pub fn standard_table(standard: EiaStandard, decades: DecadeRange) -> ValueSet {
    let values: Vec<f64> = decades
        .iter()
        .map(decade_scale)
        .cartesian_product(standard.mantissas())
        .map(|(scale, m)| m * scale)
        .collect();

    debug_assert!(values.windows(2).all(|w| w[0] < w[1] && w[0] > 0.0));
    debug_assert!(values.iter().all(|v| v.is_finite()));

    ValueSet {
        values: values.into_boxed_slice(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_e3_single_decade() {
        let set = generate_table(3, 0, 0).unwrap();
        assert_eq!(set.values(), &[1.0, 2.2, 4.7]);
    }

    #[test]
    fn test_tables_strictly_increasing() {
        for standard in EiaStandard::ALL {
            for (min, max) in [(0, 6), (-12, -3), (-2, 2)] {
                let set = generate_table(standard.density(), min, max).unwrap();
                assert_eq!(set.len(), standard.mantissas().len() * (max - min + 1) as usize);
                assert!(
                    set.values().windows(2).all(|w| w[0] < w[1]),
                    "{standard} over {min}..={max} not strictly increasing"
                );
            }
        }
    }

    #[test]
    fn test_decade_starts_are_exact_powers() {
        for standard in EiaStandard::ALL {
            let per_decade = standard.mantissas().len();
            let set = generate_table(standard.density(), -12, 6).unwrap();
            for (i, decade) in (-12..=6).enumerate() {
                let literal: f64 = format!("1e{decade}").parse().unwrap();
                assert_eq!(set.values()[i * per_decade], literal);
            }
        }
    }

    #[test]
    fn test_unsupported_density() {
        assert_eq!(
            generate_table(5, 0, 6),
            Err(PassiveError::InvalidStandard { density: 5 })
        );
    }

    #[test]
    fn test_empty_decade_range() {
        assert!(matches!(
            generate_table(12, 3, 2),
            Err(PassiveError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_decades_beyond_f64_rejected() {
        for (min, max) in [(306, 310), (-330, -320), (i32::MIN, i32::MAX), (0, 308)] {
            assert!(
                matches!(generate_table(3, min, max), Err(PassiveError::InvalidInput { .. })),
                "{min}..={max} accepted"
            );
        }
    }

    #[test]
    fn test_extreme_decades_keep_invariant() {
        for (min, max) in [(300, MAX_DECADE), (MIN_DECADE, -300)] {
            let set = generate_table(96, min, max).unwrap();
            assert!(set.iter().all(|v| v.is_finite() && v > 0.0));
            assert!(set.values().windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_decade_range_accessors() {
        let range = DecadeRange::new(-12, -3).unwrap();
        assert_eq!((range.min(), range.max()), (-12, -3));
        assert_eq!(range.len(), 10);
        assert_eq!(DecadeRange::new(MIN_DECADE, MAX_DECADE).unwrap().len(), 615);
        assert!(DecadeRange::new(6, 0).is_err());
    }

    #[test]
    fn test_from_values_validation() {
        assert!(ValueSet::from_values(vec![1.0, 2.0, 5.0]).is_ok());
        assert!(ValueSet::from_values(vec![]).is_err());
        assert!(ValueSet::from_values(vec![1.0, 0.0]).is_err());
        assert!(ValueSet::from_values(vec![2.0, 1.0]).is_err());
        assert!(ValueSet::from_values(vec![1.0, 1.0]).is_err());
        assert!(ValueSet::from_values(vec![1.0, f64::NAN]).is_err());
    }

    #[test]
    fn test_first_last() {
        let set = generate_table(6, 0, 1).unwrap();
        assert_eq!(set.first(), 1.0);
        assert!((set.last() - 68.0).abs() < 1e-9);
    }
}
