// ─────────────────────────────────────────────────────────────────────
// SCPN POPCON — Property-Based Tests (proptest) for popcon-units
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for popcon-units using proptest.
//!
//! Covers: conversion round trips, prefix scaling, broadcasting algebra,
//! dimension serialization.

use ndarray::Array1;
use popcon_units::broadcast::broadcast_shapes;
use popcon_units::{Dimension, Quantity, Unit};
use proptest::prelude::*;

fn rel_close(a: f64, b: f64, rtol: f64) -> bool {
    (a - b).abs() <= rtol * a.abs().max(b.abs()).max(f64::MIN_POSITIVE)
}

// ── Conversion Round Trips ───────────────────────────────────────────

proptest! {
    /// Converting to a compatible unit and back recovers the magnitude.
    #[test]
    fn conversion_round_trip(
        value in -1e6f64..1e6,
        pair in prop::sample::select(vec![
            ("m^-3", "cm^-3"),
            ("n19", "m^-3"),
            ("eV", "keV"),
            ("MW", "W"),
            ("MA", "kA"),
            ("T", "mT"),
            ("Pa", "bar"),
            ("s", "ms"),
            ("percent", "dimensionless"),
        ]),
    ) {
        let q = Quantity::new(value, pair.0).unwrap();
        let back = q.to_units(pair.1).unwrap().to_units(pair.0).unwrap();
        prop_assert!(rel_close(back.value().unwrap(), value, 1e-12),
            "{} {} -> {} -> {}", value, pair.0, pair.1, back.value().unwrap());
    }

    /// Incompatible units never convert.
    #[test]
    fn incompatible_units_never_convert(
        value in -1e6f64..1e6,
        pair in prop::sample::select(vec![
            ("m", "eV"),
            ("eV", "K"),
            ("m^-3", "m^3"),
            ("T", "s"),
            ("MW", "MJ"),
        ]),
    ) {
        let q = Quantity::new(value, pair.0).unwrap();
        prop_assert!(q.to_units(pair.1).is_err());
    }

    /// Array conversion is elementwise scalar conversion.
    #[test]
    fn array_conversion_is_elementwise(values in prop::collection::vec(-1e3f64..1e3, 1..20)) {
        let arr = Quantity::from_array(Array1::from(values.clone()), "keV").unwrap();
        let converted = arr.magnitude_as("eV").unwrap();
        for (i, v) in values.iter().enumerate() {
            let scalar = Quantity::new(*v, "keV").unwrap().value_as("eV").unwrap();
            prop_assert!(rel_close(converted[[i]], scalar, 1e-15));
        }
    }
}

// ── Unit Algebra ─────────────────────────────────────────────────────

proptest! {
    /// powi multiplies dimension exponents.
    #[test]
    fn powi_scales_dimension(n in -4i32..5) {
        let cm = Unit::parse("cm").unwrap();
        let powered = cm.powi(n);
        prop_assert_eq!(powered.dimension(), Dimension::LENGTH.powi(n));
        prop_assert!(rel_close(powered.scale(), 1e-2f64.powi(n), 1e-12));
    }

    /// u * v / v is compatible with u.
    #[test]
    fn mul_div_cancel(
        u in prop::sample::select(vec!["m", "keV", "MA", "T", "n20"]),
        v in prop::sample::select(vec!["s", "m^2", "MW", "amu"]),
    ) {
        let u = Unit::parse(u).unwrap();
        let v = Unit::parse(v).unwrap();
        let round = &(&u * &v) / &v;
        prop_assert!(round.is_compatible(&u));
        prop_assert!(rel_close(round.conversion_factor(&u).unwrap(), 1.0, 1e-12));
    }

    /// Dimension survives a JSON round trip.
    #[test]
    fn dimension_serde_round_trip(exps in prop::array::uniform7(-4i32..5)) {
        let dim = Dimension::from_exponents(exps);
        let json = serde_json::to_string(&dim).unwrap();
        let back: Dimension = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(dim, back);
    }
}

// ── Broadcasting ─────────────────────────────────────────────────────

proptest! {
    /// Broadcasting is commutative.
    #[test]
    fn broadcast_commutative(
        a in prop::collection::vec(1usize..4, 0..4),
        b in prop::collection::vec(1usize..4, 0..4),
    ) {
        prop_assert_eq!(broadcast_shapes(&a, &b), broadcast_shapes(&b, &a));
    }

    /// A shape broadcast with itself or with a scalar is unchanged.
    #[test]
    fn broadcast_identity(a in prop::collection::vec(0usize..6, 0..5)) {
        prop_assert_eq!(broadcast_shapes(&a, &a), Some(a.clone()));
        prop_assert_eq!(broadcast_shapes(&a, &[]), Some(a.clone()));
    }

    /// Result has the rank of the larger operand.
    #[test]
    fn broadcast_rank(
        a in prop::collection::vec(1usize..2, 0..5),
        b in prop::collection::vec(1usize..6, 0..5),
    ) {
        // a is all ones, so it always broadcasts
        let out = broadcast_shapes(&a, &b).unwrap();
        prop_assert_eq!(out.len(), a.len().max(b.len()));
    }
}
