// ─────────────────────────────────────────────────────────────────────
// SCPN POPCON — Radiated Power
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Radiated power estimates.

use std::sync::LazyLock;

use popcon_core::{wraps_ufunc, LazyUfunc, UnitSpec};
use popcon_types::error::PopconResult;
use popcon_units::Value;

use crate::call_single;

/// Bremsstrahlung coefficient [W m^3 keV^-1/2].
const BREMSSTRAHLUNG_COEFF: f64 = 5.35e-37;

pub static CALC_BREMSSTRAHLUNG_POWER: LazyUfunc = LazyLock::new(|| {
    wraps_ufunc(
        "calc_bremsstrahlung_power",
        &[
            "average_electron_density",
            "average_electron_temp",
            "z_effective",
            "plasma_volume",
        ],
        UnitSpec::new()
            .input("average_electron_density", "m^-3")
            .input("average_electron_temp", "keV")
            .input("z_effective", "dimensionless")
            .input("plasma_volume", "m^3")
            .output("P_radiation", "MW"),
        |x, y| y[0] = BREMSSTRAHLUNG_COEFF * x[2] * x[0].powi(2) * x[1].sqrt() * x[3] * 1e-6,
    )
});

/// Volume-averaged bremsstrahlung `5.35e-37 Z_eff n_e² sqrt(T_e) V`.
pub fn calc_bremsstrahlung_power(
    average_electron_density: impl Into<Value>,
    average_electron_temp: impl Into<Value>,
    z_effective: impl Into<Value>,
    plasma_volume: impl Into<Value>,
) -> PopconResult<Value> {
    call_single(
        &CALC_BREMSSTRAHLUNG_POWER,
        vec![
            average_electron_density.into(),
            average_electron_temp.into(),
            z_effective.into(),
            plasma_volume.into(),
        ],
    )
}
