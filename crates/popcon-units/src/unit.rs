// ─────────────────────────────────────────────────────────────────────
// SCPN POPCON — Unit
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Units: an SI scale factor attached to a [`Dimension`].

use popcon_types::error::{PopconError, PopconResult};
use std::fmt;
use std::ops::{Div, Mul};
use std::str::FromStr;

use crate::dimension::Dimension;
use crate::registry;

/// A physical unit.
///
/// `scale` is the size of one unit in the coherent SI unit of the same
/// dimension (1 eV → 1.602e-19 J, 1 n19 → 1e19 m^-3). The symbol is kept
/// for display only; equality and conversion are decided by scale and
/// dimension.
///
/// # Examples
///
/// ```rust
/// use popcon_units::Unit;
///
/// let per_m3: Unit = "m^-3".parse().unwrap();
/// let per_cm3: Unit = "cm^-3".parse().unwrap();
/// assert!(per_cm3.is_compatible(&per_m3));
/// assert!((per_cm3.conversion_factor(&per_m3).unwrap() - 1e6).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct Unit {
    scale: f64,
    dimension: Dimension,
    symbol: String,
}

impl Unit {
    pub fn new(symbol: impl Into<String>, scale: f64, dimension: Dimension) -> Self {
        Unit {
            scale,
            dimension,
            symbol: symbol.into(),
        }
    }

    /// Parse a unit expression such as `"m^-3"`, `"MW / m^2"` or `"n19"`.
    pub fn parse(expr: &str) -> PopconResult<Self> {
        registry::parse_unit(expr)
    }

    pub fn dimensionless() -> Self {
        Unit::new("dimensionless", 1.0, Dimension::DIMENSIONLESS)
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn is_dimensionless(&self) -> bool {
        self.dimension.is_dimensionless()
    }

    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.dimension == other.dimension
    }

    /// Factor `f` such that `x [self] == x * f [to]`, or `None` when the
    /// dimensions differ.
    pub fn conversion_factor(&self, to: &Unit) -> Option<f64> {
        self.is_compatible(to).then(|| self.scale / to.scale)
    }

    /// Raise to integer power.
    pub fn powi(&self, n: i32) -> Unit {
        let symbol = if self.symbol.contains(char::is_whitespace) {
            format!("({})^{}", self.symbol, n)
        } else {
            format!("{}^{}", self.symbol, n)
        };
        Unit::new(symbol, self.scale.powi(n), self.dimension.powi(n))
    }

    /// Human-readable description used in dimensionality errors.
    pub fn describe(&self) -> String {
        format!("{} ({})", self.symbol, self.dimension)
    }
}

/// Conversion factor from `from` to `to`, reported against `parameter`
/// when the dimensions are incompatible.
pub fn conversion_factor_for(parameter: &str, from: &Unit, to: &Unit) -> PopconResult<f64> {
    from.conversion_factor(to)
        .ok_or_else(|| PopconError::Dimensionality {
            parameter: parameter.to_string(),
            expected: to.describe(),
            actual: from.describe(),
        })
}

/// Relative tolerance on scale factors when comparing units for equality.
const SCALE_RTOL: f64 = 1e-12;

impl PartialEq for Unit {
    fn eq(&self, other: &Unit) -> bool {
        self.dimension == other.dimension
            && (self.scale - other.scale).abs()
                <= SCALE_RTOL * self.scale.abs().max(other.scale.abs())
    }
}

impl FromStr for Unit {
    type Err = PopconError;

    fn from_str(s: &str) -> PopconResult<Self> {
        Unit::parse(s)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

fn wrap_compound(symbol: &str) -> String {
    if symbol.contains(char::is_whitespace) {
        format!("({symbol})")
    } else {
        symbol.to_string()
    }
}

impl Mul for &Unit {
    type Output = Unit;

    fn mul(self, rhs: &Unit) -> Unit {
        Unit::new(
            format!("{} * {}", self.symbol, rhs.symbol),
            self.scale * rhs.scale,
            self.dimension * rhs.dimension,
        )
    }
}

impl Div for &Unit {
    type Output = Unit;

    fn div(self, rhs: &Unit) -> Unit {
        Unit::new(
            format!("{} / {}", self.symbol, wrap_compound(&rhs.symbol)),
            self.scale / rhs.scale,
            self.dimension / rhs.dimension,
        )
    }
}

impl Mul for Unit {
    type Output = Unit;

    fn mul(self, rhs: Unit) -> Unit {
        &self * &rhs
    }
}

impl Div for Unit {
    type Output = Unit;

    fn div(self, rhs: Unit) -> Unit {
        &self / &rhs
    }
}
