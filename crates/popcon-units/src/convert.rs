// ─────────────────────────────────────────────────────────────────────
// SCPN POPCON — Unit Conversion
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Conversion helpers, including conversion into the configured default
//! unit of a named variable.

use ndarray::ArrayD;
use popcon_types::config::DefaultUnits;
use popcon_types::error::PopconResult;

use crate::unit::Unit;
use crate::value::Value;

/// Convert `value` into `units`.
pub fn convert_units(value: &Value, units: &str) -> PopconResult<Value> {
    value.to_units(units)
}

/// Unit-stripped magnitude, in whatever unit the value currently has.
pub fn magnitude(value: &Value) -> &ArrayD<f64> {
    value.magnitude()
}

/// Magnitude after conversion to dimensionless (so `5 percent` → 0.05).
pub fn dimensionless_magnitude(value: &Value) -> PopconResult<ArrayD<f64>> {
    Ok(value.to(&Unit::dimensionless())?.magnitude().clone())
}

/// Convert `value` into the default unit registered for `key`.
pub fn convert_to_default_units(
    value: &Value,
    key: &str,
    defaults: &DefaultUnits,
) -> PopconResult<Value> {
    value.to_units(defaults.require(key)?)
}

/// Magnitude of `value` in the default unit registered for `key`.
pub fn magnitude_in_default_units(
    value: &Value,
    key: &str,
    defaults: &DefaultUnits,
) -> PopconResult<ArrayD<f64>> {
    Ok(convert_to_default_units(value, key, defaults)?
        .magnitude()
        .clone())
}
