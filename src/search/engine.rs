//! Exhaustive nearest-tuple enumeration.

use std::fmt;

use itertools::Itertools;

use crate::error::{PassiveError, Result};
use crate::series::ValueSet;

/// Largest tuple size the engine accepts (3 resistors and 3 capacitors).
pub const MAX_POSITIONS: usize = 6;

/// Inclusive `[min, max]` limit on the value a position may take.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    min: f64,
    max: f64,
}

impl Bounds {
    /// Create bounds. Fails if either limit is NaN or `min > max`.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if min.is_nan() || max.is_nan() || min > max {
            return Err(PassiveError::invalid_input(format!(
                "bounds [{min}, {max}] are empty"
            )));
        }
        Ok(Self { min, max })
    }

    /// Only a lower limit.
    pub fn at_least(min: f64) -> Result<Self> {
        Self::new(min, f64::INFINITY)
    }

    /// Only an upper limit.
    pub fn at_most(max: f64) -> Result<Self> {
        Self::new(f64::NEG_INFINITY, max)
    }

    /// Bounds from optional limits; `None` when neither is given.
    pub fn from_limits(min: Option<f64>, max: Option<f64>) -> Result<Option<Self>> {
        match (min, max) {
            (None, None) => Ok(None),
            (Some(min), None) => Self::at_least(min).map(Some),
            (None, Some(max)) => Self::at_most(max).map(Some),
            (Some(min), Some(max)) => Self::new(min, max).map(Some),
        }
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// One slot of a search tuple: the set it draws from and its own bounds.
#[derive(Debug, Clone, Copy)]
pub struct Position<'a> {
    set: &'a ValueSet,
    bounds: Option<Bounds>,
}

impl<'a> Position<'a> {
    pub fn new(set: &'a ValueSet, bounds: Option<Bounds>) -> Self {
        Self { set, bounds }
    }

    /// Values this position may take, in set order.
    fn candidates(&self) -> Vec<f64> {
        match self.bounds {
            Some(bounds) => self.set.iter().filter(|v| bounds.contains(*v)).collect(),
            None => self.set.values().to_vec(),
        }
    }
}

/// The best tuple found by a search.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Chosen standard values, one per position.
    pub values: Vec<f64>,
    /// Value the search aimed for.
    pub target: f64,
    /// Value of the scoring function for `values`.
    pub achieved: f64,
    /// `|achieved - target|`.
    pub error: f64,
}

impl Selection {
    /// Error relative to the target, in percent.
    pub fn relative_error_percent(&self) -> f64 {
        100.0 * self.error / self.target
    }
}

/// Find the tuple minimising `|f(tuple) - target|`.
///
/// Enumerates the full Cartesian product of the positions' candidates in
/// nested-loop order, position 0 outermost. Tuples with any position outside
/// its bounds are never scored. The incumbent is replaced only by a strictly
/// smaller error, so the first tuple reaching the minimum wins.
///
/// Fails with `NoFeasibleCombination` when the bounds leave some position
/// without candidates, and with `InvalidInput` when every tuple scores NaN.
pub fn exhaustive_search<F>(positions: &[Position<'_>], target: f64, f: F) -> Result<Selection>
where
    F: Fn(&[f64]) -> f64,
{
    let arity = positions.len();
    if arity == 0 || arity > MAX_POSITIONS {
        return Err(PassiveError::invalid_input(format!(
            "search over {arity} positions (expected 1..={MAX_POSITIONS})"
        )));
    }
    if !target.is_finite() || target <= 0.0 {
        return Err(PassiveError::invalid_input(format!(
            "target {target} must be positive"
        )));
    }

    let candidates: Vec<Vec<f64>> = positions.iter().map(Position::candidates).collect();
    if candidates.iter().any(Vec::is_empty) {
        tracing::debug!("No candidates within bounds for a {}-position search", arity);
        return Err(PassiveError::NoFeasibleCombination { positions: arity });
    }

    let mut best: Option<Selection> = None;
    let mut evaluated: u64 = 0;

    // Last position varies fastest, matching nested loops.
    for tuple in candidates
        .iter()
        .map(|c| c.iter().copied())
        .multi_cartesian_product()
    {
        let achieved = f(&tuple);
        let error = (achieved - target).abs();
        evaluated += 1;

        let improves = match &best {
            Some(incumbent) => error < incumbent.error,
            None => !error.is_nan(),
        };
        if improves {
            tracing::trace!("New best {:?} -> {} (error {:e})", tuple, achieved, error);
            best = Some(Selection {
                values: tuple,
                target,
                achieved,
                error,
            });
        }
    }

    match best {
        Some(selection) => {
            tracing::debug!(
                "Searched {} tuples of {} for target {:e}: best {:e} (error {:e})",
                evaluated,
                arity,
                target,
                selection.achieved,
                selection.error
            );
            Ok(selection)
        }
        None => Err(PassiveError::invalid_input(format!(
            "all {evaluated} candidate tuples scored NaN against target {target}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(values: &[f64]) -> ValueSet {
        ValueSet::from_values(values.to_vec()).unwrap()
    }

    #[test]
    fn test_bounds() {
        let b = Bounds::new(4.0, 10.0).unwrap();
        assert!(b.contains(4.0));
        assert!(b.contains(10.0));
        assert!(!b.contains(3.999));
        assert!(Bounds::new(2.0, 1.0).is_err());
        assert!(Bounds::new(f64::NAN, 1.0).is_err());
        assert!(Bounds::at_least(5.0).unwrap().contains(1e12));
        assert!(!Bounds::at_most(5.0).unwrap().contains(5.1));
    }

    #[test]
    fn test_bounds_from_limits() {
        assert_eq!(Bounds::from_limits(None, None).unwrap(), None);
        let lower = Bounds::from_limits(Some(1e3), None).unwrap().unwrap();
        assert!(lower.contains(1e9) && !lower.contains(999.0));
        let upper = Bounds::from_limits(None, Some(1e-6)).unwrap().unwrap();
        assert!(upper.contains(1e-12) && !upper.contains(2e-6));
        assert_eq!(
            Bounds::from_limits(Some(1.0), Some(2.0)).unwrap(),
            Some(Bounds::new(1.0, 2.0).unwrap())
        );
        assert!(Bounds::from_limits(Some(2.0), Some(1.0)).is_err());
    }

    #[test]
    fn test_enumeration_order_and_tie_break() {
        // Every tuple scores the same error: the very first tuple must win.
        let s = set(&[1.0, 2.0, 3.0]);
        let positions = [Position::new(&s, None), Position::new(&s, None)];
        let result = exhaustive_search(&positions, 10.0, |_| 4.0).unwrap();
        assert_eq!(result.values, vec![1.0, 1.0]);
    }

    #[test]
    fn test_visits_every_tuple_in_nested_order() {
        use std::cell::RefCell;

        let s = set(&[1.0, 2.0]);
        let positions = [Position::new(&s, None); 3];
        let seen = RefCell::new(Vec::new());
        exhaustive_search(&positions, 1.0, |t| {
            seen.borrow_mut().push(t.to_vec());
            t.iter().sum()
        })
        .unwrap();

        let seen = seen.into_inner();
        assert_eq!(seen.len(), 8);
        assert_eq!(seen[0], vec![1.0, 1.0, 1.0]);
        assert_eq!(seen[1], vec![1.0, 1.0, 2.0]);
        assert_eq!(seen[2], vec![1.0, 2.0, 1.0]);
        assert_eq!(seen[7], vec![2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_positions_use_their_own_bounds() {
        let s = set(&[1.0, 2.0, 5.0]);
        let positions = [
            Position::new(&s, Some(Bounds::new(2.0, 2.0).unwrap())),
            Position::new(&s, Some(Bounds::at_least(3.0).unwrap())),
        ];
        let result = exhaustive_search(&positions, 100.0, |t| t[0] + t[1]).unwrap();
        assert_eq!(result.values, vec![2.0, 5.0]);
        assert_eq!(result.achieved, 7.0);
        assert_eq!(result.error, 93.0);
    }

    #[test]
    fn test_infeasible_bounds() {
        let s = set(&[1.0, 2.0, 5.0]);
        let positions = [
            Position::new(&s, None),
            Position::new(&s, Some(Bounds::new(3.0, 4.0).unwrap())),
        ];
        assert_eq!(
            exhaustive_search(&positions, 3.0, |t| t[0] + t[1]),
            Err(PassiveError::NoFeasibleCombination { positions: 2 })
        );
    }

    #[test]
    fn test_all_nan_scores_are_invalid_input() {
        let s = set(&[1.0, 2.0]);
        let positions = [Position::new(&s, None); 2];
        assert!(matches!(
            exhaustive_search(&positions, 1.0, |_| f64::NAN),
            Err(PassiveError::InvalidInput { .. })
        ));

        // A single NaN tuple is skipped, not fatal.
        let result = exhaustive_search(&positions, 3.0, |t| {
            if t[0] == 1.0 {
                f64::NAN
            } else {
                t[0] + t[1]
            }
        })
        .unwrap();
        assert_eq!(result.values, vec![2.0, 1.0]);
    }

    #[test]
    fn test_invalid_arity_and_target() {
        let s = set(&[1.0]);
        assert!(exhaustive_search(&[], 1.0, |_| 1.0).is_err());
        assert!(exhaustive_search(&[Position::new(&s, None); MAX_POSITIONS + 1], 1.0, |_| 1.0).is_err());
        assert!(exhaustive_search(&[Position::new(&s, None)], 0.0, |_| 1.0).is_err());
        assert!(exhaustive_search(&[Position::new(&s, None)], f64::NAN, |_| 1.0).is_err());
    }

    #[test]
    fn test_relative_error() {
        let selection = Selection {
            values: vec![110.0],
            target: 100.0,
            achieved: 110.0,
            error: 10.0,
        };
        assert!((selection.relative_error_percent() - 10.0).abs() < 1e-12);
    }
}
