// ─────────────────────────────────────────────────────────────────────
// SCPN POPCON — Quantity
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Physical quantities: a scalar or N-d magnitude tagged with a unit.

use ndarray::{arr0, Array, ArrayD, Dimension as NdDimension, IxDyn, Zip};
use popcon_types::error::{PopconError, PopconResult};
use std::fmt;
use std::ops::{Div, Mul};

use crate::broadcast::broadcast_shapes;
use crate::unit::{conversion_factor_for, Unit};

/// A numeric value (scalar or N-d array) tagged with a unit.
///
/// Scalars are stored as 0-d arrays. The unit never changes after
/// construction; conversions return a new `Quantity`.
///
/// # Examples
///
/// ```rust
/// use popcon_units::Quantity;
///
/// let n = Quantity::new(1e14, "cm^-3").unwrap();
/// let n_si = n.to_units("m^-3").unwrap();
/// assert!((n_si.value().unwrap() - 1e20).abs() < 1e6);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Quantity {
    magnitude: ArrayD<f64>,
    units: Unit,
}

impl Quantity {
    /// Scalar quantity from a unit expression.
    pub fn new(value: f64, units: &str) -> PopconResult<Self> {
        Ok(Self::from_unit(value, Unit::parse(units)?))
    }

    pub fn from_unit(value: f64, units: Unit) -> Self {
        Quantity {
            magnitude: arr0(value).into_dyn(),
            units,
        }
    }

    /// Array quantity of any dimensionality.
    pub fn from_array<D: NdDimension>(values: Array<f64, D>, units: &str) -> PopconResult<Self> {
        Ok(Self::with_units(values.into_dyn(), Unit::parse(units)?))
    }

    pub fn with_units(magnitude: ArrayD<f64>, units: Unit) -> Self {
        Quantity { magnitude, units }
    }

    pub fn dimensionless(value: f64) -> Self {
        Self::from_unit(value, Unit::dimensionless())
    }

    pub fn magnitude(&self) -> &ArrayD<f64> {
        &self.magnitude
    }

    pub fn into_magnitude(self) -> ArrayD<f64> {
        self.magnitude
    }

    pub fn units(&self) -> &Unit {
        &self.units
    }

    pub fn shape(&self) -> &[usize] {
        self.magnitude.shape()
    }

    pub fn is_scalar(&self) -> bool {
        self.magnitude.ndim() == 0
    }

    /// The scalar value, if this is a 0-d quantity.
    pub fn value(&self) -> Option<f64> {
        if self.is_scalar() {
            self.magnitude.first().copied()
        } else {
            None
        }
    }

    /// Convert into `units`. Fails with `Dimensionality` when the
    /// dimensions differ.
    pub fn to(&self, units: &Unit) -> PopconResult<Quantity> {
        let factor = conversion_factor_for("value", &self.units, units)?;
        Ok(Quantity {
            magnitude: self.magnitude.mapv(|v| v * factor),
            units: units.clone(),
        })
    }

    pub fn to_units(&self, units: &str) -> PopconResult<Quantity> {
        self.to(&Unit::parse(units)?)
    }

    /// Raw magnitude expressed in `units`.
    pub fn magnitude_as(&self, units: &str) -> PopconResult<ArrayD<f64>> {
        Ok(self.to_units(units)?.magnitude)
    }

    /// Scalar value expressed in `units`.
    pub fn value_as(&self, units: &str) -> PopconResult<f64> {
        let converted = self.to_units(units)?;
        converted.value().ok_or_else(|| {
            PopconError::ConfigError(format!(
                "expected a scalar quantity, got shape {:?}",
                self.shape()
            ))
        })
    }

    /// Sum, with `rhs` converted into the units of `self`.
    pub fn try_add(&self, rhs: &Quantity) -> PopconResult<Quantity> {
        let rhs = rhs.to(&self.units)?;
        let magnitude = broadcast_binary(&self.magnitude, &rhs.magnitude, |a, b| a + b)?;
        Ok(Quantity::with_units(magnitude, self.units.clone()))
    }

    /// Difference, with `rhs` converted into the units of `self`.
    pub fn try_sub(&self, rhs: &Quantity) -> PopconResult<Quantity> {
        let rhs = rhs.to(&self.units)?;
        let magnitude = broadcast_binary(&self.magnitude, &rhs.magnitude, |a, b| a - b)?;
        Ok(Quantity::with_units(magnitude, self.units.clone()))
    }

    pub fn try_mul(&self, rhs: &Quantity) -> PopconResult<Quantity> {
        let magnitude = broadcast_binary(&self.magnitude, &rhs.magnitude, |a, b| a * b)?;
        Ok(Quantity::with_units(magnitude, &self.units * &rhs.units))
    }

    pub fn try_div(&self, rhs: &Quantity) -> PopconResult<Quantity> {
        let magnitude = broadcast_binary(&self.magnitude, &rhs.magnitude, |a, b| a / b)?;
        Ok(Quantity::with_units(magnitude, &self.units / &rhs.units))
    }

    /// Raise to integer power
    pub fn powi(&self, n: i32) -> Quantity {
        Quantity::with_units(self.magnitude.mapv(|v| v.powi(n)), self.units.powi(n))
    }
}

fn broadcast_binary(
    lhs: &ArrayD<f64>,
    rhs: &ArrayD<f64>,
    op: impl Fn(f64, f64) -> f64,
) -> PopconResult<ArrayD<f64>> {
    let mismatch = || PopconError::Broadcast {
        parameter: "rhs".to_string(),
        expected: lhs.shape().to_vec(),
        actual: rhs.shape().to_vec(),
    };
    let shape = broadcast_shapes(lhs.shape(), rhs.shape()).ok_or_else(mismatch)?;
    let l = lhs.broadcast(IxDyn(&shape)).ok_or_else(mismatch)?;
    let r = rhs.broadcast(IxDyn(&shape)).ok_or_else(mismatch)?;
    Ok(Zip::from(&l).and(&r).map_collect(|&a, &b| op(a, b)))
}

impl Mul<f64> for Quantity {
    type Output = Quantity;

    fn mul(self, rhs: f64) -> Quantity {
        Quantity::with_units(self.magnitude * rhs, self.units)
    }
}

impl Div<f64> for Quantity {
    type Output = Quantity;

    fn div(self, rhs: f64) -> Quantity {
        Quantity::with_units(self.magnitude / rhs, self.units)
    }
}

/// Allow f64 * Quantity (commutative multiplication)
impl Mul<Quantity> for f64 {
    type Output = Quantity;

    fn mul(self, rhs: Quantity) -> Quantity {
        rhs * self
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(v) => write!(f, "{v} {}", self.units),
            None => write!(f, "{} {}", self.magnitude, self.units),
        }
    }
}
