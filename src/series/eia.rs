//! EIA preferred-number series and their per-decade mantissas.

use std::fmt;

use crate::error::{PassiveError, Result};

const E3: [f64; 3] = [1.00, 2.20, 4.70];

const E6: [f64; 6] = [1.00, 1.50, 2.20, 3.30, 4.70, 6.80];

const E12: [f64; 12] = [
    1.00, 1.20, 1.50, 1.80, 2.20, 2.70, 3.30, 3.90, 4.70, 5.60, 6.80, 8.20,
];

const E24: [f64; 24] = [
    1.00, 1.10, 1.20, 1.30, 1.50, 1.60, 1.80, 2.00, 2.20, 2.40, 2.70, 3.00, //
    3.30, 3.60, 3.90, 4.30, 4.70, 5.10, 5.60, 6.20, 6.80, 7.50, 8.20, 9.10,
];

const E48: [f64; 48] = [
    1.00, 1.05, 1.10, 1.15, 1.21, 1.27, 1.33, 1.40, 1.47, 1.54, 1.62, 1.69, //
    1.78, 1.87, 1.96, 2.05, 2.15, 2.26, 2.37, 2.49, 2.61, 2.74, 2.87, 3.01, //
    3.16, 3.32, 3.48, 3.65, 3.83, 4.02, 4.22, 4.42, 4.64, 4.87, 5.11, 5.36, //
    5.62, 5.90, 6.19, 6.49, 6.81, 7.15, 7.50, 7.87, 8.25, 8.66, 9.09, 9.53,
];

const E96: [f64; 96] = [
    1.00, 1.02, 1.05, 1.07, 1.10, 1.13, 1.15, 1.18, 1.21, 1.24, 1.27, 1.30, //
    1.33, 1.37, 1.40, 1.43, 1.47, 1.50, 1.54, 1.58, 1.62, 1.65, 1.69, 1.74, //
    1.78, 1.82, 1.87, 1.91, 1.96, 2.00, 2.05, 2.10, 2.15, 2.21, 2.26, 2.32, //
    2.37, 2.43, 2.49, 2.55, 2.61, 2.67, 2.74, 2.80, 2.87, 2.94, 3.01, 3.09, //
    3.16, 3.24, 3.32, 3.40, 3.48, 3.57, 3.65, 3.74, 3.83, 3.92, 4.02, 4.12, //
    4.22, 4.32, 4.42, 4.53, 4.64, 4.75, 4.87, 4.99, 5.11, 5.23, 5.36, 5.49, //
    5.62, 5.76, 5.90, 6.04, 6.19, 6.34, 6.49, 6.65, 6.81, 6.98, 7.15, 7.32, //
    7.50, 7.68, 7.87, 8.06, 8.25, 8.45, 8.66, 8.87, 9.09, 9.31, 9.53, 9.76,
];

/// An EIA preferred-value series, identified by its number of values per decade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EiaStandard {
    E3,
    E6,
    E12,
    E24,
    E48,
    E96,
}

impl EiaStandard {
    /// Every supported series, coarsest first.
    pub const ALL: [EiaStandard; 6] = [
        EiaStandard::E3,
        EiaStandard::E6,
        EiaStandard::E12,
        EiaStandard::E24,
        EiaStandard::E48,
        EiaStandard::E96,
    ];

    /// Resolve a density (values per decade) to its series.
    pub fn from_density(density: u32) -> Result<Self> {
        match density {
            3 => Ok(Self::E3),
            6 => Ok(Self::E6),
            12 => Ok(Self::E12),
            24 => Ok(Self::E24),
            48 => Ok(Self::E48),
            96 => Ok(Self::E96),
            _ => Err(PassiveError::InvalidStandard { density }),
        }
    }

    /// Number of values per decade.
    pub fn density(self) -> u32 {
        match self {
            Self::E3 => 3,
            Self::E6 => 6,
            Self::E12 => 12,
            Self::E24 => 24,
            Self::E48 => 48,
            Self::E96 => 96,
        }
    }

    /// Mantissas of one decade, in `[1, 10)`, ascending.
    pub fn mantissas(self) -> &'static [f64] {
        match self {
            Self::E3 => &E3,
            Self::E6 => &E6,
            Self::E12 => &E12,
            Self::E24 => &E24,
            Self::E48 => &E48,
            Self::E96 => &E96,
        }
    }

    /// Position of this series in [`EiaStandard::ALL`].
    pub(crate) fn index(self) -> usize {
        match self {
            Self::E3 => 0,
            Self::E6 => 1,
            Self::E12 => 2,
            Self::E24 => 3,
            Self::E48 => 4,
            Self::E96 => 5,
        }
    }
}

impl fmt::Display for EiaStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.density())
    }
}

impl std::str::FromStr for EiaStandard {
    type Err = PassiveError;

    /// Accepts "E24", "e24" or "24".
    fn from_str(s: &str) -> Result<Self> {
        let digits = s.trim().trim_start_matches(|c: char| c == 'E' || c == 'e');
        let density = digits
            .parse::<u32>()
            .map_err(|_| PassiveError::invalid_value(s))?;
        Self::from_density(density)
    }
}
