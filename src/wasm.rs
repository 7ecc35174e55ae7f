//! WASM bindings for Passive Core.
//!
//! This module provides JavaScript-friendly bindings for picking standard
//! parts from a browser-based calculator.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { WasmCatalog } from 'passive_core';
//!
//! await init();
//!
//! const catalog = new WasmCatalog();
//!
//! // Two E24 resistors in series closest to 12.3 kΩ: [r1, r2, achieved, error]
//! const pair = catalog.nearest(12300, 24, 2, "series", "resistor", 1e3, undefined);
//!
//! // One E24 resistor (1k..1M) and one E12 capacitor for tau = 1 ms: [r, c, tau, error]
//! const rc = catalog.rc(1e-3, 24, 12, 1, "series", 1, "parallel", 1e3, 1e6, undefined, undefined);
//! ```

use wasm_bindgen::prelude::*;

use crate::combine::{Arrangement, CombinationRule, Family, RcNetwork, Topology};
use crate::error::PassiveError;
use crate::search::{nearest_combination, ratio_search, rc_search, Bounds, RatioQuery, RcQuery};
use crate::series::{Catalog, EiaStandard};
use crate::tolerance;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

fn to_js(err: PassiveError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn family(name: &str) -> Result<Family, JsValue> {
    match name.to_lowercase().as_str() {
        "r" | "resistor" => Ok(Family::Resistor),
        "c" | "capacitor" => Ok(Family::Capacitor),
        _ => Err(to_js(PassiveError::invalid_value(name))),
    }
}

fn topology(name: &str) -> Result<Topology, JsValue> {
    match name.to_lowercase().as_str() {
        "s" | "series" => Ok(Topology::Series),
        "p" | "parallel" => Ok(Topology::Parallel),
        _ => Err(to_js(PassiveError::invalid_value(name))),
    }
}

fn standard(density: u32) -> Result<EiaStandard, JsValue> {
    EiaStandard::from_density(density).map_err(to_js)
}

fn bounds(min: Option<f64>, max: Option<f64>) -> Result<Option<Bounds>, JsValue> {
    Bounds::from_limits(min, max).map_err(to_js)
}

/// WASM-compatible standard value catalog.
///
/// Builds every E3..E96 table once; each search method returns the chosen
/// parts followed by the achieved value and the absolute error.
#[wasm_bindgen]
pub struct WasmCatalog {
    catalog: Catalog,
}

#[wasm_bindgen]
impl WasmCatalog {
    /// Create a catalog with the default decade ranges.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmCatalog {
        WasmCatalog {
            catalog: Catalog::new(),
        }
    }

    /// All values of one standard table.
    #[wasm_bindgen]
    pub fn table(&self, density: u32, family_name: &str) -> Result<Vec<f64>, JsValue> {
        let table = self.catalog.table(family(family_name)?, standard(density)?);
        Ok(table.values().to_vec())
    }

    /// Closest group of `count` parts to `target`.
    ///
    /// `min` and `max` limit every part; pass `undefined` to leave a side open.
    ///
    /// # Returns
    /// `[part_1, .., part_count, achieved, error]`
    #[allow(clippy::too_many_arguments)]
    #[wasm_bindgen]
    pub fn nearest(
        &self,
        target: f64,
        density: u32,
        count: usize,
        topology_name: &str,
        family_name: &str,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<Vec<f64>, JsValue> {
        let family = family(family_name)?;
        let rule = CombinationRule::new(family, topology(topology_name)?);
        let table = self.catalog.table(family, standard(density)?);

        let best = nearest_combination(target, table, &rule, count, bounds(min, max)?)
            .map_err(to_js)?;
        let mut out = best.values;
        out.extend([best.achieved, best.error]);
        Ok(out)
    }

    /// Resistor groups whose ratio is closest to `target_ratio`.
    ///
    /// `min` and `max` limit every resistor.
    ///
    /// # Returns
    /// `[numerator.., denominator.., ratio, error]`
    #[allow(clippy::too_many_arguments)]
    #[wasm_bindgen]
    pub fn ratio(
        &self,
        target_ratio: f64,
        density: u32,
        numerator: usize,
        denominator: usize,
        topology_name: &str,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<Vec<f64>, JsValue> {
        let topology = topology(topology_name)?;
        let mut query = RatioQuery::new()
            .with_numerator(Arrangement::new(topology, numerator).map_err(to_js)?)
            .with_denominator(Arrangement::new(topology, denominator).map_err(to_js)?);
        if let Some(bounds) = bounds(min, max)? {
            query = query.with_bounds(bounds);
        }
        let table = self.catalog.table(Family::Resistor, standard(density)?);

        let best = ratio_search(target_ratio, table, &query).map_err(to_js)?;
        let mut out = best.numerator;
        out.extend(best.denominator);
        out.extend([best.ratio, best.error]);
        Ok(out)
    }

    /// Resistor and capacitor groups whose time constant is closest to `tau`.
    ///
    /// `r_min`/`r_max` limit every resistor and `c_min`/`c_max` every
    /// capacitor.
    ///
    /// # Returns
    /// `[resistors.., capacitors.., tau, error]`
    #[allow(clippy::too_many_arguments)]
    #[wasm_bindgen]
    pub fn rc(
        &self,
        tau: f64,
        resistor_density: u32,
        capacitor_density: u32,
        resistors: usize,
        resistor_topology: &str,
        capacitors: usize,
        capacitor_topology: &str,
        r_min: Option<f64>,
        r_max: Option<f64>,
        c_min: Option<f64>,
        c_max: Option<f64>,
    ) -> Result<Vec<f64>, JsValue> {
        let network = RcNetwork::new(
            Arrangement::new(topology(resistor_topology)?, resistors).map_err(to_js)?,
            Arrangement::new(topology(capacitor_topology)?, capacitors).map_err(to_js)?,
        );
        let mut query = RcQuery::new(standard(resistor_density)?, standard(capacitor_density)?)
            .with_resistors(network.resistors)
            .with_capacitors(network.capacitors);
        if let Some(bounds) = bounds(r_min, r_max)? {
            query = query.with_resistor_bounds(bounds);
        }
        if let Some(bounds) = bounds(c_min, c_max)? {
            query = query.with_capacitor_bounds(bounds);
        }

        let best = rc_search(&self.catalog, tau, &query).map_err(to_js)?;
        let mut out = best.resistors;
        out.extend(best.capacitors);
        out.extend([best.time_constant, best.error]);
        Ok(out)
    }

    /// Tolerance spread of nominal parts, in percent.
    #[wasm_bindgen]
    pub fn spread(
        &self,
        nominal: &[f64],
        tolerance_percent: f64,
        topology_name: &str,
        family_name: &str,
    ) -> Result<f64, JsValue> {
        let rule = CombinationRule::new(family(family_name)?, topology(topology_name)?);
        tolerance::spread(nominal, tolerance_percent, &rule).map_err(to_js)
    }
}

impl Default for WasmCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
