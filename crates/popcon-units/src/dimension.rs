// ─────────────────────────────────────────────────────────────────────
// SCPN POPCON — Dimension
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Physical dimensions as exponent vectors over the SI base dimensions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Div, Mul};

/// The seven SI base dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BaseDimension {
    Length,
    Mass,
    Time,
    Current,
    Temperature,
    Substance,
    Luminosity,
}

impl BaseDimension {
    pub const ALL: [BaseDimension; 7] = [
        BaseDimension::Length,
        BaseDimension::Mass,
        BaseDimension::Time,
        BaseDimension::Current,
        BaseDimension::Temperature,
        BaseDimension::Substance,
        BaseDimension::Luminosity,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BaseDimension::Length => "length",
            BaseDimension::Mass => "mass",
            BaseDimension::Time => "time",
            BaseDimension::Current => "current",
            BaseDimension::Temperature => "temperature",
            BaseDimension::Substance => "substance",
            BaseDimension::Luminosity => "luminosity",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// A physical dimension, independent of the unit used to express it.
///
/// Two units can be converted into each other exactly when their
/// dimensions compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Dimension([i32; 7]);

impl Dimension {
    pub const DIMENSIONLESS: Dimension = Dimension([0; 7]);
    pub const LENGTH: Dimension = Dimension::base(BaseDimension::Length);
    pub const MASS: Dimension = Dimension::base(BaseDimension::Mass);
    pub const TIME: Dimension = Dimension::base(BaseDimension::Time);
    pub const CURRENT: Dimension = Dimension::base(BaseDimension::Current);
    pub const TEMPERATURE: Dimension = Dimension::base(BaseDimension::Temperature);
    pub const SUBSTANCE: Dimension = Dimension::base(BaseDimension::Substance);
    pub const LUMINOSITY: Dimension = Dimension::base(BaseDimension::Luminosity);

    pub const fn base(base: BaseDimension) -> Self {
        let mut exponents = [0; 7];
        exponents[base as usize] = 1;
        Dimension(exponents)
    }

    pub const fn from_exponents(exponents: [i32; 7]) -> Self {
        Dimension(exponents)
    }

    pub fn exponents(&self) -> [i32; 7] {
        self.0
    }

    pub fn exponent(&self, base: BaseDimension) -> i32 {
        self.0[base.index()]
    }

    pub fn is_dimensionless(&self) -> bool {
        self.0.iter().all(|&e| e == 0)
    }

    /// Raise to integer power. Exponents saturate at the `i32` range; use
    /// [`checked_powi`](Self::checked_powi) to detect that.
    pub fn powi(self, n: i32) -> Self {
        let mut out = self.0;
        for e in out.iter_mut() {
            *e = e.saturating_mul(n);
        }
        Dimension(out)
    }

    /// Integer power, or `None` if an exponent overflows.
    pub fn checked_powi(self, n: i32) -> Option<Self> {
        let mut out = self.0;
        for e in out.iter_mut() {
            *e = e.checked_mul(n)?;
        }
        Some(Dimension(out))
    }

    /// Product, or `None` if an exponent overflows.
    pub fn checked_mul(self, rhs: Dimension) -> Option<Self> {
        let mut out = self.0;
        for (e, r) in out.iter_mut().zip(rhs.0) {
            *e = e.checked_add(r)?;
        }
        Some(Dimension(out))
    }

    /// Quotient, or `None` if an exponent overflows.
    pub fn checked_div(self, rhs: Dimension) -> Option<Self> {
        self.checked_mul(rhs.checked_powi(-1)?)
    }
}

impl Mul for Dimension {
    type Output = Dimension;

    fn mul(self, rhs: Dimension) -> Dimension {
        let mut out = self.0;
        for (e, r) in out.iter_mut().zip(rhs.0) {
            *e = e.saturating_add(r);
        }
        Dimension(out)
    }
}

impl Div for Dimension {
    type Output = Dimension;

    fn div(self, rhs: Dimension) -> Dimension {
        self * rhs.powi(-1)
    }
}

impl fmt::Display for Dimension {
    /// Renders as e.g. `[length]^2 [mass] [time]^-2`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return write!(f, "dimensionless");
        }
        let mut first = true;
        for base in BaseDimension::ALL {
            let e = self.exponent(base);
            if e == 0 {
                continue;
            }
            if !first {
                write!(f, " ")?;
            }
            first = false;
            if e == 1 {
                write!(f, "[{}]", base.name())?;
            } else {
                write!(f, "[{}]^{}", base.name(), e)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_energy_dimension_display() {
        let energy = Dimension::MASS * Dimension::LENGTH.powi(2) / Dimension::TIME.powi(2);
        assert_eq!(energy.to_string(), "[length]^2 [mass] [time]^-2");
    }

    #[test]
    fn test_density_dimension() {
        let density = Dimension::LENGTH.powi(-3);
        assert_eq!(density.exponent(BaseDimension::Length), -3);
        assert_eq!(density.to_string(), "[length]^-3");
        assert!(!density.is_dimensionless());
    }

    #[test]
    fn test_ratio_is_dimensionless() {
        let ratio = Dimension::LENGTH / Dimension::LENGTH;
        assert!(ratio.is_dimensionless());
        assert_eq!(ratio, Dimension::DIMENSIONLESS);
        assert_eq!(ratio.to_string(), "dimensionless");
    }

    #[test]
    fn test_checked_ops_detect_overflow() {
        let big = Dimension::LENGTH.powi(1 << 20);
        assert_eq!(big.checked_powi(1 << 12), None);
        assert_eq!(big.checked_mul(Dimension::from_exponents([i32::MAX, 0, 0, 0, 0, 0, 0])), None);
        assert_eq!(Dimension::LENGTH.checked_powi(-3), Some(Dimension::LENGTH.powi(-3)));
        assert_eq!(
            Dimension::LENGTH.checked_div(Dimension::TIME),
            Some(Dimension::LENGTH / Dimension::TIME)
        );
        // operators saturate instead of panicking
        assert_eq!(big.powi(1 << 12).exponent(BaseDimension::Length), i32::MAX);
    }

    #[test]
    fn test_temperature_is_not_energy() {
        let energy = Dimension::MASS * Dimension::LENGTH.powi(2) / Dimension::TIME.powi(2);
        assert_ne!(energy, Dimension::TEMPERATURE);
    }
}
