// ─────────────────────────────────────────────────────────────────────
// SCPN POPCON — Two-Point Model
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Two-point model quantities of the scrape-off layer.

use std::sync::LazyLock;

use popcon_core::{wraps_ufunc, LazyUfunc, UnitSpec};
use popcon_types::error::PopconResult;
use popcon_units::Value;

use crate::call_single;

pub static CALC_UPSTREAM_SOL_COLLISIONALITY: LazyUfunc = LazyLock::new(|| {
    wraps_ufunc(
        "calc_upstream_SOL_collisionality",
        &[
            "separatrix_electron_density",
            "separatrix_electron_temp",
            "parallel_connection_length",
        ],
        UnitSpec::new()
            .input("separatrix_electron_density", "m^-3")
            .input("separatrix_electron_temp", "eV")
            .input("parallel_connection_length", "m")
            .output("upstream_SOL_collisionality", "dimensionless"),
        |x, y| y[0] = 1e-16 * x[2] * x[0] / x[1].powi(2),
    )
});

/// Upstream SOL collisionality `1e-16 · L∥ · n_sep / T_sep²`
/// (n in m^-3, T in eV, L in m).
pub fn calc_upstream_sol_collisionality(
    separatrix_electron_density: impl Into<Value>,
    separatrix_electron_temp: impl Into<Value>,
    parallel_connection_length: impl Into<Value>,
) -> PopconResult<Value> {
    call_single(
        &CALC_UPSTREAM_SOL_COLLISIONALITY,
        vec![
            separatrix_electron_density.into(),
            separatrix_electron_temp.into(),
            parallel_connection_length.into(),
        ],
    )
}
