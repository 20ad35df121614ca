// ─────────────────────────────────────────────────────────────────────
// SCPN POPCON — Plasma Pressure
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Pressure, beta and stored energy.

use std::sync::LazyLock;

use popcon_core::{wraps_ufunc, LazyUfunc, UnitSpec};
use popcon_types::constants::{KEV_TO_J, MU_0};
use popcon_types::error::PopconResult;
use popcon_units::Value;

use crate::call_single;

pub static CALC_BETA_TOROIDAL: LazyUfunc = LazyLock::new(|| {
    wraps_ufunc(
        "calc_beta_toroidal",
        &["average_total_pressure", "magnetic_field_on_axis"],
        UnitSpec::new()
            .input("average_total_pressure", "Pa")
            .input("magnetic_field_on_axis", "T")
            .output("beta_toroidal", "dimensionless"),
        |x, y| y[0] = 2.0 * MU_0 * x[0] / x[1].powi(2),
    )
});

pub static CALC_PLASMA_STORED_ENERGY: LazyUfunc = LazyLock::new(|| {
    wraps_ufunc(
        "calc_plasma_stored_energy",
        &["average_electron_density", "average_electron_temp", "plasma_volume"],
        UnitSpec::new()
            .input("average_electron_density", "m^-3")
            .input("average_electron_temp", "keV")
            .input("plasma_volume", "m^3")
            .output("plasma_stored_energy", "MJ"),
        // electrons plus an equal ion population, 3/2 nT each
        |x, y| y[0] = 1.5 * 2.0 * x[0] * x[1] * KEV_TO_J * x[2] * 1e-6,
    )
});

/// Toroidal beta `2 μ0 <p> / B0²`.
pub fn calc_beta_toroidal(
    average_total_pressure: impl Into<Value>,
    magnetic_field_on_axis: impl Into<Value>,
) -> PopconResult<Value> {
    call_single(
        &CALC_BETA_TOROIDAL,
        vec![average_total_pressure.into(), magnetic_field_on_axis.into()],
    )
}

/// Thermal stored energy `3/2 · 2 n T V`, assuming T_i = T_e and n_i = n_e.
pub fn calc_plasma_stored_energy(
    average_electron_density: impl Into<Value>,
    average_electron_temp: impl Into<Value>,
    plasma_volume: impl Into<Value>,
) -> PopconResult<Value> {
    call_single(
        &CALC_PLASMA_STORED_ENERGY,
        vec![
            average_electron_density.into(),
            average_electron_temp.into(),
            plasma_volume.into(),
        ],
    )
}
