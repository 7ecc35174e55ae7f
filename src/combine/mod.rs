//! Series/parallel equivalence rules for resistors and capacitors.
//!
//! Resistors and capacitors combine as electrical duals:
//!
//! | Family    | Series                | Parallel              |
//! |-----------|-----------------------|-----------------------|
//! | Resistor  | `R1 + R2 + ...`       | `1 / (1/R1 + 1/R2 + ...)` |
//! | Capacitor | `1 / (1/C1 + 1/C2 + ...)` | `C1 + C2 + ...`   |
//!
//! [`CombinationRule`] encodes this table explicitly per family. An
//! [`Arrangement`] describes how many parts of one side are wired with which
//! topology, and [`RcNetwork`] combines a resistor arrangement with a
//! capacitor arrangement into a time constant.

mod network;
mod rule;

pub use network::{time_constant, RcNetwork};
pub use rule::CombinationRule;

use std::fmt;

use crate::error::{PassiveError, Result};
use crate::series::DecadeRange;

/// Largest number of parts on one side of an [`Arrangement`].
pub const MAX_ARRANGEMENT_SIZE: usize = 3;

/// Component family. Determines which combination formula a topology uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Resistor,
    Capacitor,
}

impl Family {
    /// Conventional decade range for this family.
    ///
    /// Resistors: 1 Ω .. 9.76 MΩ. Capacitors: 1 pF .. 9.76 mF.
    pub fn default_decades(self) -> DecadeRange {
        match self {
            Family::Resistor => DecadeRange::new_unchecked(0, 6),
            Family::Capacitor => DecadeRange::new_unchecked(-12, -3),
        }
    }

    /// SI unit symbol.
    pub fn unit(self) -> &'static str {
        match self {
            Family::Resistor => "Ω",
            Family::Capacitor => "F",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::Resistor => write!(f, "resistor"),
            Family::Capacitor => write!(f, "capacitor"),
        }
    }
}

/// Wiring topology of a group of parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topology {
    Series,
    Parallel,
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topology::Series => write!(f, "series"),
            Topology::Parallel => write!(f, "parallel"),
        }
    }
}

/// How the parts of one side of a ratio or RC search are wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Arrangement {
    topology: Topology,
    count: usize,
}

impl Arrangement {
    /// A single part.
    pub const SINGLE: Arrangement = Arrangement {
        topology: Topology::Series,
        count: 1,
    };

    /// `count` parts wired with `topology`. `count` must be 1..=3.
    pub fn new(topology: Topology, count: usize) -> Result<Self> {
        if count == 0 || count > MAX_ARRANGEMENT_SIZE {
            return Err(PassiveError::invalid_input(format!(
                "arrangement of {count} parts (expected 1..={MAX_ARRANGEMENT_SIZE})"
            )));
        }
        Ok(Self { topology, count })
    }

    /// `count` parts in series.
    pub fn series(count: usize) -> Result<Self> {
        Self::new(Topology::Series, count)
    }

    /// `count` parts in parallel.
    pub fn parallel(count: usize) -> Result<Self> {
        Self::new(Topology::Parallel, count)
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// The rule combining this arrangement's parts for a family.
    pub fn rule(&self, family: Family) -> CombinationRule {
        CombinationRule::new(family, self.topology)
    }
}

impl Default for Arrangement {
    fn default() -> Self {
        Self::SINGLE
    }
}

impl fmt::Display for Arrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count == 1 {
            write!(f, "single")
        } else {
            write!(f, "{} x{}", self.topology, self.count)
        }
    }
}
