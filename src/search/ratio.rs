//! Ratio matching for divider-style designs.
//!
//! Finds parts for a numerator group and a denominator group whose
//! equivalent values are in the ratio closest to a target, e.g. feedback
//! dividers where only `R1 / R2` matters.

use crate::combine::{Arrangement, Family};
use crate::error::Result;
use crate::series::ValueSet;

use super::engine::{exhaustive_search, Bounds, Position};

/// Shape of a ratio search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioQuery {
    /// Family whose combination rules apply (resistors for dividers).
    pub family: Family,
    pub numerator: Arrangement,
    pub denominator: Arrangement,
    /// Limits applied to every part.
    pub bounds: Option<Bounds>,
}

impl Default for RatioQuery {
    fn default() -> Self {
        Self {
            family: Family::Resistor,
            numerator: Arrangement::SINGLE,
            denominator: Arrangement::SINGLE,
            bounds: None,
        }
    }
}

impl RatioQuery {
    /// Single resistor over single resistor, unbounded.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_family(mut self, family: Family) -> Self {
        self.family = family;
        self
    }

    pub fn with_numerator(mut self, numerator: Arrangement) -> Self {
        self.numerator = numerator;
        self
    }

    pub fn with_denominator(mut self, denominator: Arrangement) -> Self {
        self.denominator = denominator;
        self
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = Some(bounds);
        self
    }
}

/// Parts chosen by [`ratio_search`].
#[derive(Debug, Clone, PartialEq)]
pub struct RatioSelection {
    pub numerator: Vec<f64>,
    pub denominator: Vec<f64>,
    /// Achieved `numerator_eq / denominator_eq`.
    pub ratio: f64,
    /// `|ratio - target|`.
    pub error: f64,
}

/// Parts from `set` whose equivalent-value ratio is closest to `target_ratio`.
///
/// Positions enumerate numerator parts first, then denominator parts.
pub fn ratio_search(target_ratio: f64, set: &ValueSet, query: &RatioQuery) -> Result<RatioSelection> {
    let split = query.numerator.count();
    let positions = vec![
        Position::new(set, query.bounds);
        query.numerator.count() + query.denominator.count()
    ];

    let numerator_rule = query.numerator.rule(query.family);
    let denominator_rule = query.denominator.rule(query.family);

    let selection = exhaustive_search(&positions, target_ratio, |values| {
        let (num, den) = values.split_at(split);
        numerator_rule.apply(num) / denominator_rule.apply(den)
    })?;

    let (numerator, denominator) = selection.values.split_at(split);
    Ok(RatioSelection {
        numerator: numerator.to_vec(),
        denominator: denominator.to_vec(),
        ratio: selection.achieved,
        error: selection.error,
    })
}
