// ─────────────────────────────────────────────────────────────────────
// SCPN POPCON — Labeled Array
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! N-d arrays with named, coordinate-labeled axes, and alignment of
//! several such arrays by axis name.

use indexmap::IndexMap;
use ndarray::{Array1, ArrayD, ArrayViewD, Axis};
use popcon_types::error::{PopconError, PopconResult};

use crate::quantity::Quantity;
use crate::unit::{conversion_factor_for, Unit};

/// An N-d array of a physical quantity whose axes carry names and,
/// optionally, coordinate labels.
///
/// Invariants (checked on construction): one unique name per axis, and
/// every coordinate array belongs to a named axis and has that axis' length.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledArray {
    dims: Vec<String>,
    coords: IndexMap<String, Array1<f64>>,
    values: ArrayD<f64>,
    units: Unit,
}

impl LabeledArray {
    /// Labeled array without coordinates.
    pub fn new(dims: &[&str], values: ArrayD<f64>, units: Unit) -> PopconResult<Self> {
        Self::from_parts(
            dims.iter().map(|d| d.to_string()).collect(),
            IndexMap::new(),
            values,
            units,
        )
    }

    /// One-dimensional labeled array with a coordinate axis.
    pub fn from_1d(
        dim: &str,
        coord: Array1<f64>,
        values: Array1<f64>,
        units: &str,
    ) -> PopconResult<Self> {
        Self::new(&[dim], values.into_dyn(), Unit::parse(units)?)?.with_coord(dim, coord)
    }

    pub fn from_parts(
        dims: Vec<String>,
        coords: IndexMap<String, Array1<f64>>,
        values: ArrayD<f64>,
        units: Unit,
    ) -> PopconResult<Self> {
        if dims.len() != values.ndim() {
            return Err(PopconError::ConfigError(format!(
                "labeled array has {} dim names for a {}-d array",
                dims.len(),
                values.ndim()
            )));
        }
        for (i, dim) in dims.iter().enumerate() {
            if dims[..i].contains(dim) {
                return Err(PopconError::ConfigError(format!(
                    "duplicate dim name '{dim}'"
                )));
            }
        }
        let array = LabeledArray {
            dims,
            coords: IndexMap::new(),
            values,
            units,
        };
        coords
            .into_iter()
            .try_fold(array, |acc, (dim, coord)| acc.with_coord(&dim, coord))
    }

    /// Attach coordinate labels to an existing axis.
    pub fn with_coord(mut self, dim: &str, coord: Array1<f64>) -> PopconResult<Self> {
        let size = self.dim_size(dim).ok_or_else(|| {
            PopconError::ConfigError(format!("cannot label unknown dim '{dim}'"))
        })?;
        if coord.len() != size {
            return Err(PopconError::ConfigError(format!(
                "coordinate for dim '{dim}' has length {}, expected {size}",
                coord.len()
            )));
        }
        self.coords.insert(dim.to_string(), coord);
        Ok(self)
    }

    pub fn dims(&self) -> &[String] {
        &self.dims
    }

    pub fn coords(&self) -> &IndexMap<String, Array1<f64>> {
        &self.coords
    }

    pub fn coord(&self, dim: &str) -> Option<&Array1<f64>> {
        self.coords.get(dim)
    }

    pub fn values(&self) -> &ArrayD<f64> {
        &self.values
    }

    pub fn units(&self) -> &Unit {
        &self.units
    }

    pub fn shape(&self) -> &[usize] {
        self.values.shape()
    }

    pub fn ndim(&self) -> usize {
        self.values.ndim()
    }

    pub fn axis_of(&self, dim: &str) -> Option<usize> {
        self.dims.iter().position(|d| d == dim)
    }

    pub fn dim_size(&self, dim: &str) -> Option<usize> {
        self.axis_of(dim).map(|axis| self.values.len_of(Axis(axis)))
    }

    /// Convert into `units`, keeping dims and coordinates.
    pub fn to(&self, units: &Unit) -> PopconResult<LabeledArray> {
        let factor = conversion_factor_for("value", &self.units, units)?;
        Ok(LabeledArray {
            dims: self.dims.clone(),
            coords: self.coords.clone(),
            values: self.values.mapv(|v| v * factor),
            units: units.clone(),
        })
    }

    pub fn to_units(&self, units: &str) -> PopconResult<LabeledArray> {
        self.to(&Unit::parse(units)?)
    }

    /// Positional selection along `dim`; the dim is dropped from the result.
    pub fn sel(&self, dim: &str, index: usize) -> PopconResult<LabeledArray> {
        let axis = self
            .axis_of(dim)
            .ok_or_else(|| PopconError::ConfigError(format!("unknown dim '{dim}'")))?;
        let size = self.values.len_of(Axis(axis));
        if index >= size {
            return Err(PopconError::ConfigError(format!(
                "index {index} out of bounds for dim '{dim}' of size {size}"
            )));
        }
        let mut coords = self.coords.clone();
        coords.shift_remove(dim);
        Ok(LabeledArray {
            dims: self.dims.iter().filter(|d| *d != dim).cloned().collect(),
            coords,
            values: self.values.index_axis(Axis(axis), index).to_owned(),
            units: self.units.clone(),
        })
    }

    /// Drop the labels.
    pub fn as_quantity(&self) -> Quantity {
        Quantity::with_units(self.values.clone(), self.units.clone())
    }
}

/// The union of the named axes of several labeled arrays, in order of
/// first appearance.
///
/// Same-named axes must have equal length and, where both sides carry
/// coordinates, identical coordinates (exact join).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlignedAxes {
    dims: Vec<String>,
    sizes: Vec<usize>,
    coords: IndexMap<String, Array1<f64>>,
}

impl AlignedAxes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge the axes of `array`, supplied as argument `parameter`.
    pub fn include(&mut self, parameter: &str, array: &LabeledArray) -> PopconResult<()> {
        for (axis, dim) in array.dims().iter().enumerate() {
            let size = array.values().len_of(Axis(axis));
            match self.dims.iter().position(|d| d == dim) {
                Some(k) if self.sizes[k] != size => {
                    return Err(PopconError::Broadcast {
                        parameter: parameter.to_string(),
                        expected: vec![self.sizes[k]],
                        actual: vec![size],
                    });
                }
                Some(_) => {}
                None => {
                    self.dims.push(dim.clone());
                    self.sizes.push(size);
                }
            }
            if let Some(coord) = array.coord(dim) {
                match self.coords.get(dim) {
                    Some(existing) if existing != coord => {
                        return Err(PopconError::CoordinateMismatch {
                            parameter: parameter.to_string(),
                            dim: dim.clone(),
                        });
                    }
                    Some(_) => {}
                    None => {
                        self.coords.insert(dim.clone(), coord.clone());
                    }
                }
            }
        }
        Ok(())
    }

    pub fn dims(&self) -> &[String] {
        &self.dims
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    pub fn coords(&self) -> &IndexMap<String, Array1<f64>> {
        &self.coords
    }

    pub fn is_empty(&self) -> bool {
        self.dims.is_empty()
    }

    /// View of `array`'s values with axes reordered to the union order and
    /// a length-1 axis inserted for every union dim `array` lacks.
    pub fn expand<'a>(&self, array: &'a LabeledArray) -> PopconResult<ArrayViewD<'a, f64>> {
        let perm: Vec<usize> = self.dims.iter().filter_map(|d| array.axis_of(d)).collect();
        if perm.len() != array.ndim() {
            return Err(PopconError::ConfigError(format!(
                "labeled array with dims {:?} was not included in the alignment",
                array.dims()
            )));
        }
        let mut view = array.values().view().permuted_axes(perm.as_slice());
        for (i, dim) in self.dims.iter().enumerate() {
            if array.axis_of(dim).is_none() {
                view = view.insert_axis(Axis(i));
            }
        }
        Ok(view)
    }

    /// Label `values` (whose shape must equal [`sizes`](Self::sizes)) with
    /// the aligned dims and coordinates.
    pub fn label(&self, values: ArrayD<f64>, units: Unit) -> PopconResult<LabeledArray> {
        if values.shape() != self.sizes.as_slice() {
            return Err(PopconError::Broadcast {
                parameter: "output".to_string(),
                expected: self.sizes.clone(),
                actual: values.shape().to_vec(),
            });
        }
        LabeledArray::from_parts(self.dims.clone(), self.coords.clone(), values, units)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array2};

    fn rho() -> Array1<f64> {
        Array1::linspace(0.0, 1.0, 5)
    }

    #[test]
    fn test_construction_validates_rank() {
        let err =
            LabeledArray::new(&["x"], Array2::zeros((2, 2)).into_dyn(), Unit::dimensionless());
        assert!(matches!(err, Err(PopconError::ConfigError(_))));
    }

    #[test]
    fn test_construction_rejects_duplicate_dims() {
        let err = LabeledArray::new(
            &["x", "x"],
            Array2::zeros((2, 2)).into_dyn(),
            Unit::dimensionless(),
        );
        assert!(matches!(err, Err(PopconError::ConfigError(_))));
    }

    #[test]
    fn test_coord_length_checked() {
        let err = LabeledArray::from_1d("rho", array![0.0, 1.0], array![1.0, 2.0, 3.0], "m");
        assert!(matches!(err, Err(PopconError::ConfigError(_))));
    }

    #[test]
    fn test_conversion_keeps_labels() {
        let n = LabeledArray::from_1d("rho", rho(), array![1.0, 2.0, 3.0, 4.0, 5.0], "n19")
            .unwrap();
        let si = n.to_units("m^-3").unwrap();
        assert_eq!(si.dims(), n.dims());
        assert_eq!(si.coord("rho"), n.coord("rho"));
        assert!((si.values()[[4]] - 5e19).abs() < 1e6);
    }

    #[test]
    fn test_sel_drops_dim() {
        let values = Array2::from_shape_fn((2, 3), |(i, j)| (10 * i + j) as f64).into_dyn();
        let arr = LabeledArray::new(&["a", "b"], values, Unit::parse("m").unwrap())
            .unwrap()
            .with_coord("b", array![0.1, 0.2, 0.3])
            .unwrap();
        let row = arr.sel("a", 1).unwrap();
        assert_eq!(row.dims(), &["b".to_string()]);
        assert_eq!(row.values().as_slice().unwrap(), &[10.0, 11.0, 12.0]);
        assert!(row.coord("b").is_some());
        let col = arr.sel("b", 2).unwrap();
        assert_eq!(col.dims(), &["a".to_string()]);
        assert!(col.coord("b").is_none());
        assert!(arr.sel("b", 3).is_err());
        assert!(arr.sel("c", 0).is_err());
    }

    #[test]
    fn test_alignment_unions_dims_in_order() {
        let a = LabeledArray::new(&["x"], Array1::zeros(3).into_dyn(), Unit::dimensionless())
            .unwrap();
        let b = LabeledArray::new(
            &["y", "x"],
            Array2::zeros((4, 3)).into_dyn(),
            Unit::dimensionless(),
        )
        .unwrap();
        let mut axes = AlignedAxes::new();
        axes.include("a", &a).unwrap();
        axes.include("b", &b).unwrap();
        assert_eq!(axes.dims(), &["x".to_string(), "y".to_string()]);
        assert_eq!(axes.sizes(), &[3, 4]);

        // b is transposed to (x, y); a gains a trailing length-1 axis.
        assert_eq!(axes.expand(&b).unwrap().shape(), &[3, 4]);
        assert_eq!(axes.expand(&a).unwrap().shape(), &[3, 1]);
    }

    #[test]
    fn test_expand_transposes_values() {
        let values = Array2::from_shape_fn((2, 3), |(i, j)| (10 * i + j) as f64).into_dyn();
        let b = LabeledArray::new(&["y", "x"], values, Unit::dimensionless()).unwrap();
        let a = LabeledArray::new(&["x"], Array1::zeros(3).into_dyn(), Unit::dimensionless())
            .unwrap();
        let mut axes = AlignedAxes::new();
        axes.include("a", &a).unwrap();
        axes.include("b", &b).unwrap();
        let view = axes.expand(&b).unwrap();
        // view[[x, y]] == values[[y, x]]
        assert_eq!(view[[2, 1]], 12.0);
        assert_eq!(view[[0, 1]], 10.0);
    }

    #[test]
    fn test_alignment_size_mismatch() {
        let a = LabeledArray::new(&["x"], Array1::zeros(3).into_dyn(), Unit::dimensionless())
            .unwrap();
        let b = LabeledArray::new(&["x"], Array1::zeros(5).into_dyn(), Unit::dimensionless())
            .unwrap();
        let mut axes = AlignedAxes::new();
        axes.include("a", &a).unwrap();
        match axes.include("b", &b) {
            Err(PopconError::Broadcast {
                parameter,
                expected,
                actual,
            }) => {
                assert_eq!(parameter, "b");
                assert_eq!(expected, vec![3]);
                assert_eq!(actual, vec![5]);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_alignment_coordinate_mismatch() {
        let a = LabeledArray::from_1d("rho", rho(), Array1::zeros(5), "m").unwrap();
        let b = LabeledArray::from_1d("rho", rho() * 2.0, Array1::zeros(5), "m").unwrap();
        let mut axes = AlignedAxes::new();
        axes.include("a", &a).unwrap();
        assert!(matches!(
            axes.include("b", &b),
            Err(PopconError::CoordinateMismatch { .. })
        ));
        // identical coordinates align
        axes.include("c", &a).unwrap();
    }

    #[test]
    fn test_label_checks_shape() {
        let a = LabeledArray::from_1d("rho", rho(), Array1::zeros(5), "m").unwrap();
        let mut axes = AlignedAxes::new();
        axes.include("a", &a).unwrap();
        let out = axes
            .label(Array1::ones(5).into_dyn(), Unit::dimensionless())
            .unwrap();
        assert_eq!(out.coord("rho"), a.coord("rho"));
        assert!(axes
            .label(Array1::ones(4).into_dyn(), Unit::dimensionless())
            .is_err());
    }
}
