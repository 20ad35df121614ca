// ─────────────────────────────────────────────────────────────────────
// SCPN POPCON — Scrape-Off Layer
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Scrape-off layer widths and lengths.

pub mod two_point_model;

use std::f64::consts::PI;
use std::sync::LazyLock;

use popcon_core::{wraps_ufunc, LazyUfunc, UnitSpec};
use popcon_types::error::PopconResult;
use popcon_units::Value;

use crate::call_single;

/// Eich scaling coefficient [mm].
const EICH_COEFF: f64 = 0.63;

/// Eich poloidal-field exponent.
const EICH_EXP: f64 = -1.19;

pub static CALC_LAMBDA_Q_EICH: LazyUfunc = LazyLock::new(|| {
    wraps_ufunc(
        "calc_lambda_q_eich",
        &["poloidal_magnetic_field"],
        UnitSpec::new()
            .input("poloidal_magnetic_field", "T")
            .output("lambda_q", "mm"),
        |x, y| y[0] = EICH_COEFF * x[0].powf(EICH_EXP),
    )
});

pub static CALC_PARALLEL_CONNECTION_LENGTH: LazyUfunc = LazyLock::new(|| {
    wraps_ufunc(
        "calc_parallel_connection_length",
        &["q95", "major_radius"],
        UnitSpec::new()
            .input("q95", "dimensionless")
            .input("major_radius", "m")
            .output("parallel_connection_length", "m"),
        |x, y| y[0] = PI * x[0] * x[1],
    )
});

/// Eich #14 heat-flux width `λq = 0.63 mm · B_pol^-1.19`.
pub fn calc_lambda_q_eich(poloidal_magnetic_field: impl Into<Value>) -> PopconResult<Value> {
    call_single(&CALC_LAMBDA_Q_EICH, vec![poloidal_magnetic_field.into()])
}

/// Midplane-to-target connection length `π q95 R`.
pub fn calc_parallel_connection_length(
    q95: impl Into<Value>,
    major_radius: impl Into<Value>,
) -> PopconResult<Value> {
    call_single(
        &CALC_PARALLEL_CONNECTION_LENGTH,
        vec![q95.into(), major_radius.into()],
    )
}
