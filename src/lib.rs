//! # Passive Core
//!
//! Standard-value selection for resistors and capacitors.
//!
//! Given a target resistance, capacitance, ratio or RC time constant, this
//! library finds the EIA standard parts (singly or in series/parallel groups)
//! that come closest, and estimates how far manufacturing tolerance moves the
//! combined value.
//!
//! This library provides:
//! - EIA E3 to E96 value tables over configurable decade ranges
//! - Series/parallel combination rules for both component families
//! - Exhaustive nearest-combination, ratio and RC time-constant searches
//! - Worst-case corner tolerance spread
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`series`] - EIA mantissas, decade-scaled tables and the [`Catalog`]
//! - [`combine`] - Combination rules, arrangements and RC networks
//! - [`search`] - The exhaustive search engine and its front-ends
//! - [`tolerance`] - Corner enumeration and spread statistics
//! - [`units`] - SI-prefixed value parsing and formatting
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! passive nearest 12.3k --series E12 --count 2
//! passive rc 1m --resistor-series E24 --capacitor-series E6
//! ```
//!
//! ### Library
//!
//! ```
//! use passive_core::combine::CombinationRule;
//! use passive_core::search::nearest_pair;
//! use passive_core::series::EiaStandard;
//! use passive_core::{Catalog, Family};
//!
//! let catalog = Catalog::new();
//! let e24 = catalog.table(Family::Resistor, EiaStandard::E24);
//! let best = nearest_pair(4_990.0, e24, &CombinationRule::RESISTOR_SERIES, None).unwrap();
//! assert!(best.relative_error_percent() < 0.5);
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { WasmCatalog } from 'passive_core';
//!
//! const catalog = new WasmCatalog();
//! const pair = catalog.nearest(12300, 12, 2, "series", "resistor", undefined, undefined);
//! ```

pub mod combine;
pub mod error;
pub mod search;
pub mod series;
pub mod tolerance;
pub mod units;

// Re-export main types for convenience
pub use combine::{Arrangement, CombinationRule, Family, Topology};
pub use error::{PassiveError, Result};
pub use search::{Bounds, Selection};
pub use series::{Catalog, CatalogConfig, EiaStandard, ValueSet};

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::WasmCatalog;
