// ─────────────────────────────────────────────────────────────────────
// SCPN POPCON — Geometry
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Plasma cross-section geometry from major radius, inverse aspect ratio
//! and areal elongation.

use std::f64::consts::PI;
use std::sync::LazyLock;

use popcon_core::{wraps_ufunc, LazyUfunc, UnitSpec};
use popcon_types::error::PopconResult;
use popcon_units::Value;

use crate::call_single;

const SHAPE_INPUTS: [&str; 3] = ["major_radius", "inverse_aspect_ratio", "areal_elongation"];

fn shape_spec() -> UnitSpec {
    UnitSpec::new()
        .input("major_radius", "m")
        .input("inverse_aspect_ratio", "dimensionless")
        .input("areal_elongation", "dimensionless")
}

pub static CALC_PLASMA_VOLUME: LazyUfunc = LazyLock::new(|| {
    wraps_ufunc(
        "calc_plasma_volume",
        &SHAPE_INPUTS,
        shape_spec().output("plasma_volume", "m^3"),
        |x, y| {
            let minor_radius = x[1] * x[0];
            y[0] = 2.0 * PI * x[0] * PI * minor_radius.powi(2) * x[2];
        },
    )
});

pub static CALC_PLASMA_SURFACE_AREA: LazyUfunc = LazyLock::new(|| {
    wraps_ufunc(
        "calc_plasma_surface_area",
        &SHAPE_INPUTS,
        shape_spec().output("surface_area", "m^2"),
        |x, y| {
            let minor_radius = x[1] * x[0];
            y[0] = 2.0 * PI * x[0] * 2.0 * PI * minor_radius * ((1.0 + x[2].powi(2)) / 2.0).sqrt();
        },
    )
});

pub static CALC_MINOR_RADIUS: LazyUfunc = LazyLock::new(|| {
    wraps_ufunc(
        "calc_minor_radius",
        &["major_radius", "inverse_aspect_ratio"],
        UnitSpec::new()
            .input("major_radius", "m")
            .input("inverse_aspect_ratio", "dimensionless")
            .output("minor_radius", "m"),
        |x, y| y[0] = x[0] * x[1],
    )
});

/// Torus volume with an elliptical cross-section, `2πR · π(εR)² κ_A`.
pub fn calc_plasma_volume(
    major_radius: impl Into<Value>,
    inverse_aspect_ratio: impl Into<Value>,
    areal_elongation: impl Into<Value>,
) -> PopconResult<Value> {
    call_single(
        &CALC_PLASMA_VOLUME,
        vec![
            major_radius.into(),
            inverse_aspect_ratio.into(),
            areal_elongation.into(),
        ],
    )
}

/// Surface area with the perimeter of an ellipse approximated by
/// `2πa · sqrt((1 + κ²)/2)`.
pub fn calc_plasma_surface_area(
    major_radius: impl Into<Value>,
    inverse_aspect_ratio: impl Into<Value>,
    areal_elongation: impl Into<Value>,
) -> PopconResult<Value> {
    call_single(
        &CALC_PLASMA_SURFACE_AREA,
        vec![
            major_radius.into(),
            inverse_aspect_ratio.into(),
            areal_elongation.into(),
        ],
    )
}

pub fn calc_minor_radius(
    major_radius: impl Into<Value>,
    inverse_aspect_ratio: impl Into<Value>,
) -> PopconResult<Value> {
    call_single(
        &CALC_MINOR_RADIUS,
        vec![major_radius.into(), inverse_aspect_ratio.into()],
    )
}
