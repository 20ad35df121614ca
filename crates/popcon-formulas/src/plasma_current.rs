// ─────────────────────────────────────────────────────────────────────
// SCPN POPCON — Plasma Current
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Current limits and safety factor.

use std::f64::consts::PI;
use std::sync::LazyLock;

use popcon_core::{wraps_ufunc, LazyUfunc, UnitSpec};
use popcon_types::error::PopconResult;
use popcon_units::Value;

use crate::call_single;

pub static CALC_GREENWALD_DENSITY_LIMIT: LazyUfunc = LazyLock::new(|| {
    wraps_ufunc(
        "calc_greenwald_density_limit",
        &["plasma_current", "minor_radius"],
        UnitSpec::new()
            .input("plasma_current", "MA")
            .input("minor_radius", "m")
            .output("greenwald_density_limit", "n20"),
        |x, y| y[0] = x[0] / (PI * x[1].powi(2)),
    )
});

pub static CALC_Q_STAR: LazyUfunc = LazyLock::new(|| {
    wraps_ufunc(
        "calc_q_star",
        &[
            "minor_radius",
            "magnetic_field_on_axis",
            "major_radius",
            "plasma_current",
            "areal_elongation",
        ],
        UnitSpec::new()
            .input("minor_radius", "m")
            .input("magnetic_field_on_axis", "T")
            .input("major_radius", "m")
            .input("plasma_current", "MA")
            .input("areal_elongation", "dimensionless")
            .output("q_star", "dimensionless"),
        |x, y| {
            let (a, b, r, i, kappa) = (x[0], x[1], x[2], x[3], x[4]);
            y[0] = 5.0 * a.powi(2) * b * (1.0 + kappa.powi(2)) / 2.0 / (r * i);
        },
    )
});

/// Greenwald density limit `n_G = I_p / (π a²)` in 1e20 m^-3 (I_p in MA).
pub fn calc_greenwald_density_limit(
    plasma_current: impl Into<Value>,
    minor_radius: impl Into<Value>,
) -> PopconResult<Value> {
    call_single(
        &CALC_GREENWALD_DENSITY_LIMIT,
        vec![plasma_current.into(), minor_radius.into()],
    )
}

/// Cylindrical safety factor with elongation correction.
pub fn calc_q_star(
    minor_radius: impl Into<Value>,
    magnetic_field_on_axis: impl Into<Value>,
    major_radius: impl Into<Value>,
    plasma_current: impl Into<Value>,
    areal_elongation: impl Into<Value>,
) -> PopconResult<Value> {
    call_single(
        &CALC_Q_STAR,
        vec![
            minor_radius.into(),
            magnetic_field_on_axis.into(),
            major_radius.into(),
            plasma_current.into(),
            areal_elongation.into(),
        ],
    )
}
