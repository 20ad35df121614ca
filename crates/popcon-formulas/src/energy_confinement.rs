// ─────────────────────────────────────────────────────────────────────
// SCPN POPCON — Energy Confinement
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Empirical energy confinement time scalings.

use std::sync::LazyLock;

use popcon_core::{wraps_ufunc, LazyUfunc, UnitSpec};
use popcon_types::error::PopconResult;
use popcon_units::Value;

use crate::call_single;

/// IPB98(y,2) coefficient and exponents, in argument order
/// (I, B, n, P, R, κ_A, ε, M).
const IPB98Y2_COEFF: f64 = 0.0562;
const IPB98Y2_EXPONENTS: [f64; 8] = [0.93, 0.15, 0.41, -0.69, 1.97, 0.78, 0.58, 0.19];

pub static CALC_TAU_E_IPB98Y2: LazyUfunc = LazyLock::new(|| {
    wraps_ufunc(
        "calc_tau_e_ipb98y2",
        &[
            "plasma_current",
            "magnetic_field_on_axis",
            "average_electron_density",
            "input_power",
            "major_radius",
            "areal_elongation",
            "inverse_aspect_ratio",
            "fuel_average_mass_number",
        ],
        UnitSpec::new()
            .input("plasma_current", "MA")
            .input("magnetic_field_on_axis", "T")
            .input("average_electron_density", "n19")
            .input("input_power", "MW")
            .input("major_radius", "m")
            .input("areal_elongation", "dimensionless")
            .input("inverse_aspect_ratio", "dimensionless")
            .input("fuel_average_mass_number", "amu")
            .output("energy_confinement_time", "s"),
        |x, y| {
            y[0] = x
                .iter()
                .zip(IPB98Y2_EXPONENTS)
                .fold(IPB98Y2_COEFF, |tau, (v, e)| tau * v.powf(e));
        },
    )
});

/// ITER H-mode scaling IPB98(y,2).
///
/// `τ_E = 0.0562 I^0.93 B^0.15 n19^0.41 P^-0.69 R^1.97 κ_A^0.78 ε^0.58 M^0.19`
/// with I in MA, B in T, n in 1e19 m^-3, P in MW, R in m and M in amu.
#[allow(clippy::too_many_arguments)]
pub fn calc_tau_e_ipb98y2(
    plasma_current: impl Into<Value>,
    magnetic_field_on_axis: impl Into<Value>,
    average_electron_density: impl Into<Value>,
    input_power: impl Into<Value>,
    major_radius: impl Into<Value>,
    areal_elongation: impl Into<Value>,
    inverse_aspect_ratio: impl Into<Value>,
    fuel_average_mass_number: impl Into<Value>,
) -> PopconResult<Value> {
    call_single(
        &CALC_TAU_E_IPB98Y2,
        vec![
            plasma_current.into(),
            magnetic_field_on_axis.into(),
            average_electron_density.into(),
            input_power.into(),
            major_radius.into(),
            areal_elongation.into(),
            inverse_aspect_ratio.into(),
            fuel_average_mass_number.into(),
        ],
    )
}
