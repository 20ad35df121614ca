// ─────────────────────────────────────────────────────────────────────
// SCPN POPCON — Value
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use ndarray::ArrayD;
use popcon_types::error::PopconResult;

use crate::labeled::LabeledArray;
use crate::quantity::Quantity;
use crate::unit::Unit;

/// Argument or result of a wrapped formula: a plain quantity or a
/// labeled array of one.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Quantity(Quantity),
    Labeled(LabeledArray),
}

impl Value {
    pub fn units(&self) -> &Unit {
        match self {
            Value::Quantity(q) => q.units(),
            Value::Labeled(l) => l.units(),
        }
    }

    pub fn magnitude(&self) -> &ArrayD<f64> {
        match self {
            Value::Quantity(q) => q.magnitude(),
            Value::Labeled(l) => l.values(),
        }
    }

    pub fn shape(&self) -> &[usize] {
        self.magnitude().shape()
    }

    pub fn is_labeled(&self) -> bool {
        matches!(self, Value::Labeled(_))
    }

    pub fn as_quantity(&self) -> Option<&Quantity> {
        match self {
            Value::Quantity(q) => Some(q),
            Value::Labeled(_) => None,
        }
    }

    pub fn as_labeled(&self) -> Option<&LabeledArray> {
        match self {
            Value::Labeled(l) => Some(l),
            Value::Quantity(_) => None,
        }
    }

    /// The scalar value, for 0-d quantities and 0-d labeled arrays.
    pub fn scalar(&self) -> Option<f64> {
        let m = self.magnitude();
        if m.ndim() == 0 {
            m.first().copied()
        } else {
            None
        }
    }

    pub fn to(&self, units: &Unit) -> PopconResult<Value> {
        Ok(match self {
            Value::Quantity(q) => Value::Quantity(q.to(units)?),
            Value::Labeled(l) => Value::Labeled(l.to(units)?),
        })
    }

    pub fn to_units(&self, units: &str) -> PopconResult<Value> {
        self.to(&Unit::parse(units)?)
    }
}

impl From<Quantity> for Value {
    fn from(q: Quantity) -> Self {
        Value::Quantity(q)
    }
}

impl From<LabeledArray> for Value {
    fn from(l: LabeledArray) -> Self {
        Value::Labeled(l)
    }
}

/// Bare numbers are dimensionless scalars.
impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Quantity(Quantity::dimensionless(v))
    }
}

impl From<&Value> for Value {
    fn from(v: &Value) -> Self {
        v.clone()
    }
}

impl From<&Quantity> for Value {
    fn from(q: &Quantity) -> Self {
        Value::Quantity(q.clone())
    }
}

impl From<&LabeledArray> for Value {
    fn from(l: &LabeledArray) -> Self {
        Value::Labeled(l.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_from_f64_is_dimensionless() {
        let v = Value::from(0.5);
        assert!(v.units().is_dimensionless());
        assert_eq!(v.scalar(), Some(0.5));
        assert!(!v.is_labeled());
    }

    #[test]
    fn test_labeled_value() {
        let l = LabeledArray::from_1d("x", array![1.0, 2.0], array![3.0, 4.0], "m").unwrap();
        let v = Value::from(&l);
        assert!(v.is_labeled());
        assert_eq!(v.shape(), &[2]);
        assert!(v.scalar().is_none());
        let cm = v.to_units("cm").unwrap();
        assert_eq!(cm.as_labeled().unwrap().values()[[1]], 400.0);
    }
}
