// ─────────────────────────────────────────────────────────────────────
// SCPN POPCON — Metrics
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Figures of merit.

use std::sync::LazyLock;

use popcon_core::{wraps_ufunc, LazyUfunc, UnitSpec};
use popcon_types::error::PopconResult;
use popcon_units::Value;

use crate::call_single;

pub static CALC_TRIPLE_PRODUCT: LazyUfunc = LazyLock::new(|| {
    wraps_ufunc(
        "calc_triple_product",
        &[
            "average_electron_density",
            "average_ion_temp",
            "energy_confinement_time",
        ],
        UnitSpec::new()
            .input("average_electron_density", "m^-3")
            .input("average_ion_temp", "keV")
            .input("energy_confinement_time", "s")
            .output("fusion_triple_product", "keV * s * m^-3"),
        |x, y| y[0] = x[0] * x[1] * x[2],
    )
});

/// Lawson triple product `n T τ_E`.
pub fn calc_triple_product(
    average_electron_density: impl Into<Value>,
    average_ion_temp: impl Into<Value>,
    energy_confinement_time: impl Into<Value>,
) -> PopconResult<Value> {
    call_single(
        &CALC_TRIPLE_PRODUCT,
        vec![
            average_electron_density.into(),
            average_ion_temp.into(),
            energy_confinement_time.into(),
        ],
    )
}
