//! Closest standard value, pair or triple to a target.

use crate::combine::CombinationRule;
use crate::error::Result;
use crate::series::ValueSet;

use super::engine::{exhaustive_search, Bounds, Position, Selection};

/// The standard value closest to `target`. Ties keep the smaller value.
pub fn nearest_single(target: f64, set: &ValueSet) -> f64 {
    let mut best = set.first();
    let mut best_error = (best - target).abs();

    for value in set.iter().skip(1) {
        let error = (value - target).abs();
        if error < best_error {
            best = value;
            best_error = error;
        }
    }

    best
}

/// The `arity` standard values whose combination under `rule` is closest to
/// `target`.
///
/// Values may repeat across positions. The same `bounds`, if given, limit
/// every position.
pub fn nearest_combination(
    target: f64,
    set: &ValueSet,
    rule: &CombinationRule,
    arity: usize,
    bounds: Option<Bounds>,
) -> Result<Selection> {
    let positions = vec![Position::new(set, bounds); arity];
    exhaustive_search(&positions, target, |values| rule.apply(values))
}

/// Two standard values combined with `rule`.
pub fn nearest_pair(
    target: f64,
    set: &ValueSet,
    rule: &CombinationRule,
    bounds: Option<Bounds>,
) -> Result<Selection> {
    nearest_combination(target, set, rule, 2, bounds)
}

/// Three standard values combined with `rule`.
pub fn nearest_triple(
    target: f64,
    set: &ValueSet,
    rule: &CombinationRule,
    bounds: Option<Bounds>,
) -> Result<Selection> {
    nearest_combination(target, set, rule, 3, bounds)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::PassiveError;
    use crate::series::generate_table;

    fn small_set() -> ValueSet {
        ValueSet::from_values(vec![1.0, 2.0, 5.0]).unwrap()
    }

    #[test]
    fn test_nearest_single() {
        let e12 = generate_table(12, 0, 6).unwrap();
        assert_eq!(nearest_single(1_000.0, &e12), 1_000.0);
        assert_relative_eq!(nearest_single(5_000.0, &e12), 4_700.0, max_relative = 1e-12);
        assert_relative_eq!(nearest_single(5_300.0, &e12), 5_600.0, max_relative = 1e-12);
        assert_eq!(nearest_single(0.01, &e12), 1.0);
        assert_relative_eq!(nearest_single(1e9, &e12), 8.2e6, max_relative = 1e-12);
    }

    #[test]
    fn test_nearest_single_tie_keeps_first() {
        // 1.5 is equidistant from 1 and 2.
        assert_eq!(nearest_single(1.5, &small_set()), 1.0);
    }

    #[test]
    fn test_pair_exact_series() {
        let set = small_set();
        let rule = CombinationRule::RESISTOR_SERIES;

        let result = nearest_pair(3.0, &set, &rule, None).unwrap();
        assert_eq!(result.values, vec![1.0, 2.0]);
        assert_eq!(result.error, 0.0);

        let result = nearest_pair(10.0, &set, &rule, None).unwrap();
        assert_eq!(result.values, vec![5.0, 5.0]);
        assert_eq!(result.error, 0.0);
    }

    #[test]
    fn test_bounds_apply_per_position() {
        let set = small_set();
        let bounds = Bounds::new(4.0, 10.0).unwrap();
        let result = nearest_pair(3.0, &set, &CombinationRule::RESISTOR_SERIES, Some(bounds)).unwrap();
        assert_eq!(result.values, vec![5.0, 5.0]);
        assert_eq!(result.error, 7.0);
    }

    #[test]
    fn test_bounds_excluding_everything() {
        let set = small_set();
        let bounds = Bounds::new(3.0, 4.0).unwrap();
        assert_eq!(
            nearest_pair(3.0, &set, &CombinationRule::RESISTOR_SERIES, Some(bounds)),
            Err(PassiveError::NoFeasibleCombination { positions: 2 })
        );
    }

    #[test]
    fn test_pair_parallel() {
        let set = small_set();
        // 2 || 2 = 1, first reached by (2, 2); 1 alone would need arity 1.
        let result = nearest_pair(1.0, &set, &CombinationRule::RESISTOR_PARALLEL, None).unwrap();
        assert_eq!(result.values, vec![2.0, 2.0]);
        assert_relative_eq!(result.achieved, 1.0, max_relative = 1e-12);
    }

    #[test]
    fn test_capacitor_series_pair() {
        let set = small_set();
        // Capacitors in series combine like resistors in parallel.
        let caps = nearest_pair(1.0, &set, &CombinationRule::CAPACITOR_SERIES, None).unwrap();
        let res = nearest_pair(1.0, &set, &CombinationRule::RESISTOR_PARALLEL, None).unwrap();
        assert_eq!(caps, res);
    }

    #[test]
    fn test_triple_series_e12() {
        let e12 = generate_table(12, 0, 6).unwrap();
        // 10k + 2.2k + 100 = 12.3k exactly.
        let result = nearest_triple(12_300.0, &e12, &CombinationRule::RESISTOR_SERIES, None).unwrap();
        assert!(result.error < 1e-6);
        assert_relative_eq!(result.values.iter().sum::<f64>(), 12_300.0, max_relative = 1e-12);
    }

    #[test]
    fn test_triple_parallel_within_one_percent() {
        // 1.5k || 10k || 22k = 1231 Ω
        let e6 = generate_table(6, 0, 4).unwrap();
        let triple = nearest_triple(1_234.0, &e6, &CombinationRule::RESISTOR_PARALLEL, None).unwrap();
        assert_eq!(triple.values.len(), 3);
        assert!(triple.relative_error_percent() < 1.0);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let e24 = generate_table(24, 0, 3).unwrap();
        let rule = CombinationRule::RESISTOR_PARALLEL;
        let first = nearest_pair(777.0, &e24, &rule, None).unwrap();
        let second = nearest_pair(777.0, &e24, &rule, None).unwrap();
        assert_eq!(first, second);
    }
}
