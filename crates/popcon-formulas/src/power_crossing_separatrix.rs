// ─────────────────────────────────────────────────────────────────────
// SCPN POPCON — Power Crossing Separatrix
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Power balance at the separatrix.

use std::sync::LazyLock;

use popcon_core::{wraps_ufunc, LazyUfunc, UnitSpec};
use popcon_types::error::PopconResult;
use popcon_units::Value;

use crate::call_single;

pub static CALC_POWER_CROSSING_SEPARATRIX: LazyUfunc = LazyLock::new(|| {
    wraps_ufunc(
        "calc_power_crossing_separatrix",
        &["input_power", "P_radiation"],
        UnitSpec::new()
            .input("input_power", "MW")
            .input("P_radiation", "MW")
            .output("P_sol", "MW"),
        |x, y| y[0] = (x[0] - x[1]).max(0.0),
    )
});

/// `P_sol = max(P_in - P_rad, 0)`.
pub fn calc_power_crossing_separatrix(
    input_power: impl Into<Value>,
    p_radiation: impl Into<Value>,
) -> PopconResult<Value> {
    call_single(
        &CALC_POWER_CROSSING_SEPARATRIX,
        vec![input_power.into(), p_radiation.into()],
    )
}
