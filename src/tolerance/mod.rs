//! Worst-case tolerance spread by corner enumeration.
//!
//! Each of the `k` nominal parts is moved independently to `+t` or `-t`,
//! giving `2^k` corner tuples. The combined value of every corner is computed
//! with the exact (nonlinear) combination rule, and the spread is the
//! population standard deviation of those samples expressed as a percentage
//! of the nominal combined value.

use crate::combine::CombinationRule;
use crate::error::{PassiveError, Result};

/// Largest number of parts accepted for corner enumeration (2^16 corners).
pub const MAX_CORNER_POSITIONS: usize = 16;

/// Tolerance spread of parts combined with `rule`, in percent.
///
/// # Example
/// ```
/// use passive_core::combine::CombinationRule;
/// use passive_core::tolerance::spread;
///
/// let pct = spread(&[100.0], 10.0, &CombinationRule::RESISTOR_SERIES).unwrap();
/// assert!((pct - 10.0).abs() < 1e-9);
/// ```
pub fn spread(nominal: &[f64], tolerance_percent: f64, rule: &CombinationRule) -> Result<f64> {
    spread_with(nominal, tolerance_percent, |values| rule.apply(values))
}

/// Tolerance spread of parts combined by an arbitrary pure function, in percent.
///
/// `combine` receives tuples of the same length as `nominal`, all positive.
pub fn spread_with<F>(nominal: &[f64], tolerance_percent: f64, combine: F) -> Result<f64>
where
    F: Fn(&[f64]) -> f64,
{
    validate(nominal, tolerance_percent)?;

    let nominal_value = combine(nominal);
    let samples = corner_values(nominal, tolerance_percent / 100.0, &combine);
    let result = 100.0 * standard_deviation(&samples) / nominal_value;

    tracing::trace!(
        "Tolerance spread of {} parts at ±{}%: {:.4}%",
        nominal.len(),
        tolerance_percent,
        result
    );

    Ok(result)
}

/// Combined value of every corner, all-plus first, all-minus last.
///
/// Position 0 is the most significant sign, so corner `i` for three parts
/// follows the binary pattern of `i` with `0 = +t` and `1 = -t`.
pub fn corner_values<F>(nominal: &[f64], fraction: f64, combine: F) -> Vec<f64>
where
    F: Fn(&[f64]) -> f64,
{
    let k = nominal.len();
    let mut corner = vec![0.0; k];

    (0..1usize << k)
        .map(|mask| {
            for (i, (slot, value)) in corner.iter_mut().zip(nominal).enumerate() {
                let minus = (mask >> (k - 1 - i)) & 1 == 1;
                let delta = value * fraction;
                *slot = if minus { value - delta } else { value + delta };
            }
            combine(&corner)
        })
        .collect()
}

/// Arithmetic mean.
pub fn mean(samples: &[f64]) -> f64 {
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Population standard deviation (divides by `N`).
pub fn standard_deviation(samples: &[f64]) -> f64 {
    let m = mean(samples);
    let variance = samples.iter().map(|s| (s - m) * (s - m)).sum::<f64>() / samples.len() as f64;
    variance.sqrt()
}

fn validate(nominal: &[f64], tolerance_percent: f64) -> Result<()> {
    if nominal.is_empty() {
        return Err(PassiveError::invalid_input("no nominal values given"));
    }
    if nominal.len() > MAX_CORNER_POSITIONS {
        return Err(PassiveError::invalid_input(format!(
            "{} parts exceed the corner enumeration limit of {MAX_CORNER_POSITIONS}",
            nominal.len()
        )));
    }
    if let Some(bad) = nominal.iter().find(|v| !v.is_finite() || **v <= 0.0) {
        return Err(PassiveError::invalid_input(format!(
            "nominal value {bad} must be positive"
        )));
    }
    if !(tolerance_percent > 0.0 && tolerance_percent < 100.0) {
        return Err(PassiveError::invalid_input(format!(
            "tolerance {tolerance_percent}% must be within (0, 100)"
        )));
    }
    Ok(())
}
