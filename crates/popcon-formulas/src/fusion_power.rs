// ─────────────────────────────────────────────────────────────────────
// SCPN POPCON — Fusion Power
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! D-T fusion reactivity and power.

use std::sync::LazyLock;

use popcon_core::{resolve, wraps_ufunc, LazyUfunc, UnitSpec};
use popcon_types::constants::{ALPHA_FRACTION, E_FUSION_DT};
use popcon_types::error::PopconResult;
use popcon_units::Value;

use crate::call_single;

/// Bosch-Hale D-T parameterisation (Nucl. Fusion 32 (1992) 611).
const BH_GAMOW: f64 = 34.3827; // keV^1/2
const BH_MRC2: f64 = 1_124_656.0; // keV
const BH_C: [f64; 7] = [
    1.17302e-9,
    1.51361e-2,
    7.51886e-2,
    4.60643e-3,
    1.35e-2,
    -1.0675e-4,
    1.366e-5,
];

/// D-T `<σv>` in m^3/s for an ion temperature in keV.
///
/// Fitted over 0.2–100 keV; zero for non-positive temperatures.
fn bosch_hale_dt(t_kev: f64) -> f64 {
    if t_kev <= 0.0 {
        return 0.0;
    }
    let [c1, c2, c3, c4, c5, c6, c7] = BH_C;
    let theta = t_kev
        / (1.0
            - t_kev * (c2 + t_kev * (c4 + t_kev * c6))
                / (1.0 + t_kev * (c3 + t_kev * (c5 + t_kev * c7))));
    let xi = (BH_GAMOW.powi(2) / (4.0 * theta)).cbrt();
    let sigma_v_cm3 = c1 * theta * (xi / (BH_MRC2 * t_kev.powi(3))).sqrt() * (-3.0 * xi).exp();
    sigma_v_cm3 * 1e-6
}

pub static CALC_DT_REACTIVITY: LazyUfunc = LazyLock::new(|| {
    wraps_ufunc(
        "calc_dt_reactivity",
        &["average_ion_temp"],
        UnitSpec::new()
            .input("average_ion_temp", "keV")
            .output("fusion_reactivity", "m^3/s"),
        |x, y| y[0] = bosch_hale_dt(x[0]),
    )
});

pub static CALC_FUSION_POWER: LazyUfunc = LazyLock::new(|| {
    wraps_ufunc(
        "calc_fusion_power",
        &["fuel_ion_density", "average_ion_temp", "plasma_volume"],
        UnitSpec::new()
            .input("fuel_ion_density", "m^-3")
            .input("average_ion_temp", "keV")
            .input("plasma_volume", "m^3")
            .output("P_fusion", "MW")
            .output("P_neutron", "MW")
            .output("P_alpha", "MW"),
        |x, y| {
            // 50/50 D-T mix
            let n_d = 0.5 * x[0];
            let n_t = 0.5 * x[0];
            let p_fusion = n_d * n_t * bosch_hale_dt(x[1]) * E_FUSION_DT * x[2] * 1e-6;
            y[0] = p_fusion;
            y[1] = p_fusion * (1.0 - ALPHA_FRACTION);
            y[2] = p_fusion * ALPHA_FRACTION;
        },
    )
});

/// Outputs of [`calc_fusion_power`].
#[derive(Debug, Clone, PartialEq)]
pub struct FusionPower {
    pub p_fusion: Value,
    pub p_neutron: Value,
    pub p_alpha: Value,
}

/// Bosch-Hale D-T reactivity.
pub fn calc_dt_reactivity(average_ion_temp: impl Into<Value>) -> PopconResult<Value> {
    call_single(&CALC_DT_REACTIVITY, vec![average_ion_temp.into()])
}

/// Fusion power of a 50/50 D-T fuel, split into neutron and alpha
/// channels (14.1 / 3.5 MeV).
pub fn calc_fusion_power(
    fuel_ion_density: impl Into<Value>,
    average_ion_temp: impl Into<Value>,
    plasma_volume: impl Into<Value>,
) -> PopconResult<FusionPower> {
    let mut outputs = resolve(&CALC_FUSION_POWER)?.call_positional(vec![
        fuel_ion_density.into(),
        average_ion_temp.into(),
        plasma_volume.into(),
    ])?;
    Ok(FusionPower {
        p_fusion: outputs.remove("P_fusion")?,
        p_neutron: outputs.remove("P_neutron")?,
        p_alpha: outputs.remove("P_alpha")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{assert_rel, q, value_in};
    use ndarray::Array1;
    use popcon_units::Quantity;

    #[test]
    fn test_reactivity_reference_values() {
        for (t, expected) in [
            (10.0, 1.136_165_470_583_623_2e-22),
            (20.0, 4.330_201_895_538_215e-22),
            (64.0, 8.940_829_587_309_802e-22),
        ] {
            let sv = calc_dt_reactivity(q(t, "keV")).unwrap();
            assert_rel(value_in(&sv, "m^3/s"), expected, 1e-9);
        }
    }

    #[test]
    fn test_reactivity_peaks_between_50_and_100_kev() {
        let temps = Quantity::from_array(Array1::linspace(5.0, 100.0, 20), "keV").unwrap();
        let sv = calc_dt_reactivity(temps).unwrap();
        let values = sv.magnitude();
        let argmax = values
            .iter()
            .enumerate()
            .fold(0, |best, (i, v)| if *v > values[[best]] { i } else { best });
        assert!(argmax > 8 && argmax < 19, "argmax = {argmax}");
    }

    #[test]
    fn test_reactivity_zero_temperature() {
        let sv = calc_dt_reactivity(q(0.0, "keV")).unwrap();
        assert_eq!(sv.scalar(), Some(0.0));
    }

    #[test]
    fn test_fusion_power_split() {
        let power = calc_fusion_power(q(1e20, "m^-3"), q(15.0, "keV"), q(800.0, "m^3")).unwrap();
        let total = value_in(&power.p_fusion, "MW");
        let neutron = value_in(&power.p_neutron, "MW");
        let alpha = value_in(&power.p_alpha, "MW");
        assert_rel(neutron + alpha, total, 1e-12);
        assert_rel(alpha / total, 3.5 / 17.6, 1e-12);
        assert_rel(total, 1545.227_622_825_696_2, 1e-6);
    }

    #[test]
    fn test_fusion_power_scales_with_density_squared() {
        let low = calc_fusion_power(q(5.0, "n19"), q(15.0, "keV"), q(800.0, "m^3")).unwrap();
        let high = calc_fusion_power(q(10.0, "n19"), q(15.0, "keV"), q(800.0, "m^3")).unwrap();
        assert_rel(
            value_in(&high.p_fusion, "MW"),
            4.0 * value_in(&low.p_fusion, "MW"),
            1e-12,
        );
    }
}
