// ─────────────────────────────────────────────────────────────────────
// SCPN POPCON — POPCON Formulas
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Closed-form plasma operating-point formulas.
//!
//! Every formula is a unit-checked wrapper around a one-line kernel. The
//! `pub fn calc_*` entry points take their inputs positionally; the
//! matching `pub static` wrapper can be resolved with
//! [`popcon_core::resolve`] for calls with named [`popcon_core::Args`].

pub mod energy_confinement;
pub mod fusion_power;
pub mod geometry;
pub mod metrics;
pub mod plasma_current;
pub mod plasma_pressure;
pub mod power_crossing_separatrix;
pub mod radiated_power;
pub mod scrape_off_layer;
pub mod zeff_and_dilution;

use popcon_core::{resolve, LazyUfunc};
use popcon_types::error::PopconResult;
use popcon_units::Value;

/// Call a single-output wrapper with positional arguments.
pub(crate) fn call_single(cell: &LazyUfunc, args: Vec<Value>) -> PopconResult<Value> {
    resolve(cell)?.call_positional(args)?.into_single()
}

#[cfg(test)]
pub(crate) mod test_util {
    use popcon_units::{Quantity, Value};

    pub fn q(value: f64, units: &str) -> Value {
        Quantity::new(value, units).unwrap().into()
    }

    pub fn value_in(value: &Value, units: &str) -> f64 {
        value.to_units(units).unwrap().scalar().unwrap()
    }

    pub fn assert_rel(actual: f64, expected: f64, rtol: f64) {
        assert!(
            (actual - expected).abs() <= rtol * expected.abs(),
            "actual = {actual}, expected = {expected}"
        );
    }
}
