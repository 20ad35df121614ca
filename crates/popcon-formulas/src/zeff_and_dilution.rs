// ─────────────────────────────────────────────────────────────────────
// SCPN POPCON — Zeff and Dilution
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Fuel dilution from effective charge.

use std::sync::LazyLock;

use popcon_core::{wraps_ufunc, LazyUfunc, UnitSpec};
use popcon_types::error::PopconResult;
use popcon_units::Value;

use crate::call_single;

pub static CALC_DILUTION_FROM_ZEFF: LazyUfunc = LazyLock::new(|| {
    wraps_ufunc(
        "calc_dilution_from_zeff",
        &["z_effective", "impurity_charge_state"],
        UnitSpec::new()
            .input("z_effective", "dimensionless")
            .input("impurity_charge_state", "dimensionless")
            .output("dilution", "dimensionless"),
        |x, y| y[0] = (x[1] - x[0]) / (x[1] - 1.0),
    )
});

/// Fuel fraction `n_fuel / n_e = (Z_imp - Z_eff) / (Z_imp - 1)` for a
/// single impurity species.
pub fn calc_dilution_from_zeff(
    z_effective: impl Into<Value>,
    impurity_charge_state: impl Into<Value>,
) -> PopconResult<Value> {
    call_single(
        &CALC_DILUTION_FROM_ZEFF,
        vec![z_effective.into(), impurity_charge_state.into()],
    )
}
