// ─────────────────────────────────────────────────────────────────────
// SCPN POPCON — Property-Based Tests (proptest) for popcon-formulas
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for the formula catalog.
//!
//! Covers: upstream SOL collisionality (reference point, unit invariance,
//! dimension checks, labeled profiles), geometry consistency, power
//! balance, default-unit conversion of results.

use ndarray::Array1;
use popcon_formulas::fusion_power::calc_fusion_power;
use popcon_formulas::geometry::{calc_minor_radius, calc_plasma_volume};
use popcon_formulas::plasma_current::calc_greenwald_density_limit;
use popcon_formulas::power_crossing_separatrix::calc_power_crossing_separatrix;
use popcon_formulas::scrape_off_layer::two_point_model::calc_upstream_sol_collisionality;
use popcon_types::config::DefaultUnits;
use popcon_types::error::PopconError;
use popcon_units::convert::magnitude_in_default_units;
use popcon_units::{LabeledArray, Quantity, Value};
use proptest::prelude::*;

fn q(value: f64, units: &str) -> Value {
    Quantity::new(value, units).unwrap().into()
}

fn in_units(value: &Value, units: &str) -> f64 {
    value.to_units(units).unwrap().scalar().unwrap()
}

fn rel_close(a: f64, b: f64, rtol: f64) -> bool {
    (a - b).abs() <= rtol * a.abs().max(b.abs())
}

// ── Upstream SOL Collisionality ──────────────────────────────────────

#[test]
fn collisionality_reference_point() {
    let nu =
        calc_upstream_sol_collisionality(q(1e20, "m^-3"), q(100.0, "eV"), q(20.0, "m")).unwrap();
    assert!(nu.units().is_dimensionless());
    assert!(rel_close(nu.scalar().unwrap(), 2e3, 1e-12));
}

#[test]
fn collisionality_temperature_in_metres() {
    let result = calc_upstream_sol_collisionality(q(1e20, "m^-3"), q(100.0, "m"), q(20.0, "m"));
    assert!(matches!(result, Err(PopconError::Dimensionality { .. })));
}

proptest! {
    /// The result equals `1e-16 L n / T²` evaluated on SI magnitudes.
    #[test]
    fn collisionality_scalar_round_trip(
        n in 1e17f64..1e21,
        t in 1.0f64..1e3,
        l in 1.0f64..100.0,
    ) {
        let nu = calc_upstream_sol_collisionality(q(n, "m^-3"), q(t, "eV"), q(l, "m")).unwrap();
        let expected = 1e-16 * l * n / t.powi(2);
        prop_assert!(rel_close(nu.scalar().unwrap(), expected, 1e-14),
            "nu = {}, expected = {}", nu.scalar().unwrap(), expected);
    }

    /// cm^-3 and m^-3 densities of the same plasma agree.
    #[test]
    fn collisionality_density_unit_invariance(
        n in 1e17f64..1e21,
        t in 1.0f64..1e3,
        l in 1.0f64..100.0,
    ) {
        let si = calc_upstream_sol_collisionality(q(n, "m^-3"), q(t, "eV"), q(l, "m")).unwrap();
        let cgs = calc_upstream_sol_collisionality(q(n * 1e-6, "cm^-3"), q(t, "eV"), q(l, "m"))
            .unwrap();
        prop_assert!(rel_close(si.scalar().unwrap(), cgs.scalar().unwrap(), 1e-12));
    }

    /// A labeled density profile with scalar temperature and length yields a
    /// labeled profile equal, point by point, to the scalar calls.
    #[test]
    fn collisionality_labeled_profile(
        density in prop::collection::vec(1e18f64..1e21, 1..10),
        t in 5.0f64..500.0,
        l in 1.0f64..100.0,
    ) {
        let len = density.len();
        let rho = Array1::linspace(0.0, 1.0, len);
        let values = Array1::from_vec(density.clone());
        let n = LabeledArray::from_1d("dim_rho", rho.clone(), values, "m^-3").unwrap();
        let nu = calc_upstream_sol_collisionality(n, q(t, "eV"), q(l, "m")).unwrap();
        let labeled = nu.as_labeled().unwrap();
        prop_assert_eq!(labeled.dims(), &["dim_rho".to_string()][..]);
        prop_assert_eq!(labeled.coord("dim_rho"), Some(&rho));
        for (i, &ni) in density.iter().enumerate() {
            let scalar = calc_upstream_sol_collisionality(q(ni, "m^-3"), q(t, "eV"), q(l, "m"))
                .unwrap()
                .scalar()
                .unwrap();
            prop_assert_eq!(labeled.values()[[i]], scalar);
        }
    }
}

// ── Geometry and Current Limits ──────────────────────────────────────

proptest! {
    /// V = 2πR · π a² κ with a from calc_minor_radius.
    #[test]
    fn volume_consistent_with_minor_radius(
        r in 0.5f64..10.0,
        eps in 0.1f64..0.6,
        kappa in 1.0f64..2.5,
    ) {
        let a = in_units(&calc_minor_radius(q(r, "m"), eps).unwrap(), "m");
        let v = in_units(&calc_plasma_volume(q(r, "m"), eps, kappa).unwrap(), "m^3");
        let expected = 2.0 * std::f64::consts::PI * r * std::f64::consts::PI * a * a * kappa;
        prop_assert!(rel_close(v, expected, 1e-12));
    }

    /// Greenwald density in default units (n20) matches the m^-3 value.
    #[test]
    fn greenwald_in_default_units(current in 0.5f64..20.0, a in 0.2f64..3.0) {
        let ng = calc_greenwald_density_limit(q(current, "MA"), q(a, "m")).unwrap();
        let defaults = DefaultUnits::builtin().unwrap();
        let n20 = magnitude_in_default_units(&ng, "greenwald_density_limit", &defaults).unwrap();
        let per_m3 = in_units(&ng, "m^-3");
        prop_assert!(rel_close(n20.first().copied().unwrap() * 1e20, per_m3, 1e-12));
    }
}

// ── Power Balance ────────────────────────────────────────────────────

proptest! {
    /// Neutron and alpha channels always sum to the total fusion power.
    #[test]
    fn fusion_power_channels_sum(
        n in 1e19f64..3e20,
        t in 2.0f64..80.0,
        v in 10.0f64..1000.0,
    ) {
        let p = calc_fusion_power(q(n, "m^-3"), q(t, "keV"), q(v, "m^3")).unwrap();
        let total = in_units(&p.p_fusion, "MW");
        let parts = in_units(&p.p_neutron, "MW") + in_units(&p.p_alpha, "MW");
        prop_assert!(total > 0.0);
        prop_assert!(rel_close(total, parts, 1e-12));
    }

    /// P_sol is never negative and never exceeds the input power.
    #[test]
    fn separatrix_power_bounded(p_in in 0.0f64..200.0, p_rad in 0.0f64..200.0) {
        let p_sol = in_units(
            &calc_power_crossing_separatrix(q(p_in, "MW"), q(p_rad, "MW")).unwrap(),
            "MW",
        );
        prop_assert!(p_sol >= 0.0);
        prop_assert!(p_sol <= p_in);
    }
}
