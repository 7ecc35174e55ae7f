//! SI-prefixed value parsing and formatting.
//!
//! Accepts the shorthand used on schematics and part labels, such as `10k`,
//! `4.7u` or `100n`. Infix notation like `4k7` is not supported.

use crate::error::{PassiveError, Result};

const PREFIXES: [(f64, &str); 8] = [
    (1e9, "G"),
    (1e6, "M"),
    (1e3, "k"),
    (1.0, ""),
    (1e-3, "m"),
    (1e-6, "µ"),
    (1e-9, "n"),
    (1e-12, "p"),
];

fn multiplier(suffix: char) -> Option<f64> {
    match suffix {
        'p' => Some(1e-12),
        'n' => Some(1e-9),
        'u' | 'µ' => Some(1e-6),
        'm' => Some(1e-3),
        'k' | 'K' => Some(1e3),
        'M' => Some(1e6),
        'G' => Some(1e9),
        _ => None,
    }
}

/// Parse a number with an optional SI suffix, e.g. `"10k"` or `"4.7u"`.
///
/// A trailing unit symbol (`Ω`, `R`, `F`, `s`) after the prefix is ignored.
pub fn parse_value(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    let body = trimmed.trim_end_matches(|c: char| matches!(c, 'Ω' | 'R' | 'F' | 's'));
    if body.is_empty() {
        return Err(PassiveError::invalid_value(text));
    }

    let (number, scale) = match body.chars().last().and_then(|c| multiplier(c).map(|m| (c, m))) {
        Some((suffix, scale)) => (&body[..body.len() - suffix.len_utf8()], scale),
        None => (body, 1.0),
    };

    let value = number
        .parse::<f64>()
        .map_err(|_| PassiveError::invalid_value(text))?
        * scale;
    if !value.is_finite() {
        return Err(PassiveError::invalid_value(text));
    }
    Ok(value)
}

/// Format `value` in engineering notation with `unit`, e.g. `4.7 kΩ`.
pub fn format_value(value: f64, unit: &str) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{value} {unit}");
    }

    let magnitude = value.abs();
    let (scale, prefix) = PREFIXES
        .iter()
        .copied()
        .find(|(scale, _)| magnitude >= *scale * (1.0 - 1e-9))
        .unwrap_or(PREFIXES[PREFIXES.len() - 1]);

    let scaled = value / scale;
    let digits = format!("{scaled:.3}");
    let digits = digits.trim_end_matches('0').trim_end_matches('.');
    format!("{digits} {prefix}{unit}")
}
