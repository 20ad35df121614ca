// ─────────────────────────────────────────────────────────────────────
// SCPN POPCON — Wrapped Ufunc
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Unit-checked elementwise function adapter.
//!
//! A plain numeric kernel `f(x_1, .., x_n) -> (y_1, .., y_m)` is wrapped so
//! that it accepts quantities and labeled arrays:
//!
//! 1. each argument is converted into its declared unit and stripped,
//! 2. labeled arguments are aligned by dim name, then all arguments are
//!    broadcast together,
//! 3. the kernel runs once per element of the broadcast shape,
//! 4. the declared output units (and the aligned labels) are attached.

use indexmap::IndexMap;
use ndarray::{ArrayD, ArrayViewD, IxDyn};
use popcon_types::error::{PopconError, PopconResult};
use popcon_units::broadcast::{broadcast_shapes, broadcasts_to};
use popcon_units::unit::conversion_factor_for;
use popcon_units::{AlignedAxes, Quantity, Unit, Value};
use std::fmt;
use std::sync::LazyLock;

use crate::args::{Args, Outputs};
use crate::unit_spec::UnitSpec;

/// Kernel signature: reads one value per input (declared parameter order),
/// writes one value per output (declared output order).
pub type Kernel = dyn Fn(&[f64], &mut [f64]) + Send + Sync;

/// A formula wrapped on first use.
pub type LazyUfunc = LazyLock<PopconResult<WrappedFunction>>;

/// Borrow the wrapped function out of a [`LazyUfunc`], surfacing a wrap
/// failure as a configuration error.
pub fn resolve(cell: &LazyUfunc) -> PopconResult<&WrappedFunction> {
    match LazyLock::force(cell) {
        Ok(f) => Ok(f),
        Err(e) => Err(PopconError::ConfigError(format!("formula failed to wrap: {e}"))),
    }
}

/// A kernel together with the units of its inputs and outputs.
///
/// Stateless: every call is independent, so a `WrappedFunction` can be
/// shared between threads.
pub struct WrappedFunction {
    name: String,
    params: Vec<String>,
    input_units: Vec<Unit>,
    output_names: Vec<String>,
    output_units: Vec<Unit>,
    kernel: Box<Kernel>,
}

/// Wrap `kernel`, whose positional parameters are `params`, with the units
/// declared in `unit_spec`.
///
/// Fails with `ConfigError` if `params` and the declared inputs disagree,
/// if no output is declared, if a name is declared twice, or if a unit
/// does not parse.
pub fn wraps_ufunc<F>(
    name: &str,
    params: &[&str],
    unit_spec: UnitSpec,
    kernel: F,
) -> PopconResult<WrappedFunction>
where
    F: Fn(&[f64], &mut [f64]) + Send + Sync + 'static,
{
    let config_error = |msg: String| PopconError::ConfigError(format!("{name}: {msg}"));

    if let Some(dup) = unit_spec.duplicates().first() {
        return Err(config_error(format!("{dup} declared more than once")));
    }
    for (i, param) in params.iter().enumerate() {
        if params[..i].contains(param) {
            return Err(config_error(format!("parameter '{param}' listed twice")));
        }
        if !unit_spec.inputs().contains_key(*param) {
            return Err(config_error(format!("no unit declared for parameter '{param}'")));
        }
    }
    if let Some(extra) = unit_spec.inputs().keys().find(|k| !params.contains(&k.as_str())) {
        return Err(config_error(format!(
            "unit declared for '{extra}', which is not a parameter"
        )));
    }
    if unit_spec.outputs().is_empty() {
        return Err(config_error("no output units declared".to_string()));
    }

    let parse = |what: &str, units: &str| {
        Unit::parse(units).map_err(|e| config_error(format!("{what}: {e}")))
    };
    let input_units = params
        .iter()
        .map(|p| parse(*p, unit_spec.inputs()[*p].as_str()))
        .collect::<PopconResult<Vec<_>>>()?;
    let output_units = unit_spec
        .outputs()
        .iter()
        .map(|(out, units)| parse(out.as_str(), units.as_str()))
        .collect::<PopconResult<Vec<_>>>()?;

    log::debug!(
        "wrapped {name}({}) -> ({})",
        params.join(", "),
        unit_spec.outputs().keys().cloned().collect::<Vec<_>>().join(", ")
    );

    Ok(WrappedFunction {
        name: name.to_string(),
        params: params.iter().map(|p| p.to_string()).collect(),
        input_units,
        output_names: unit_spec.outputs().keys().cloned().collect(),
        output_units,
        kernel: Box::new(kernel),
    })
}

impl WrappedFunction {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn output_names(&self) -> &[String] {
        &self.output_names
    }

    /// Declared unit of an input or output.
    pub fn units_of(&self, name: &str) -> Option<&Unit> {
        self.params
            .iter()
            .zip(&self.input_units)
            .chain(self.output_names.iter().zip(&self.output_units))
            .find(|(n, _)| n.as_str() == name)
            .map(|(_, u)| u)
    }

    /// Call with arguments given in declared parameter order.
    pub fn call_positional(&self, values: Vec<Value>) -> PopconResult<Outputs> {
        if values.len() > self.params.len() {
            return Err(PopconError::UnexpectedArgument {
                function: self.name.clone(),
                parameter: format!("#{}", self.params.len()),
            });
        }
        let args: Args = self.params.iter().cloned().zip(values).collect();
        self.call(&args)
    }

    /// Call with named arguments.
    pub fn call(&self, args: &Args) -> PopconResult<Outputs> {
        if let Some(extra) = args.names().find(|n| !self.params.iter().any(|p| p == n)) {
            return Err(PopconError::UnexpectedArgument {
                function: self.name.clone(),
                parameter: extra.to_string(),
            });
        }

        // Resolve arguments and conversion factors into the declared units.
        let mut inputs: Vec<(&str, &Value, f64)> = Vec::with_capacity(self.params.len());
        for (param, units) in self.params.iter().zip(&self.input_units) {
            let value = args.get(param).ok_or_else(|| PopconError::MissingArgument {
                function: self.name.clone(),
                parameter: param.clone(),
            })?;
            let factor = conversion_factor_for(param, value.units(), units)?;
            inputs.push((param.as_str(), value, factor));
        }

        // Align labeled inputs by dim name.
        let mut axes = AlignedAxes::new();
        let mut any_labeled = false;
        for (param, value, _) in &inputs {
            if let Value::Labeled(l) = value {
                axes.include(param, l)?;
                any_labeled = true;
            }
        }

        // Broadcast everything together.
        let mut shape: Vec<usize> = axes.sizes().to_vec();
        let mut views: Vec<ArrayViewD<'_, f64>> = Vec::with_capacity(inputs.len());
        for (param, value, _) in &inputs {
            let view = match value {
                Value::Labeled(l) => axes.expand(l)?,
                Value::Quantity(q) => {
                    if any_labeled && !broadcasts_to(q.shape(), axes.sizes()) {
                        return Err(PopconError::Broadcast {
                            parameter: param.to_string(),
                            expected: axes.sizes().to_vec(),
                            actual: q.shape().to_vec(),
                        });
                    }
                    q.magnitude().view()
                }
            };
            shape = broadcast_shapes(&shape, view.shape()).ok_or_else(|| {
                PopconError::Broadcast {
                    parameter: param.to_string(),
                    expected: shape.clone(),
                    actual: view.shape().to_vec(),
                }
            })?;
            views.push(view);
        }

        log::trace!("{}: evaluating over shape {:?}", self.name, shape);
        let columns = self.evaluate(&inputs, &views, &shape)?;

        let mut results = IndexMap::with_capacity(columns.len());
        let outputs = self.output_names.iter().zip(&self.output_units);
        for ((name, units), column) in outputs.zip(columns) {
            let non_finite = column.iter().filter(|v| !v.is_finite()).count();
            if non_finite > 0 {
                log::warn!(
                    "{}: {non_finite} non-finite value(s) in output '{name}'",
                    self.name
                );
            }
            let values = ArrayD::from_shape_vec(IxDyn(&shape), column)
                .map_err(|e| PopconError::ConfigError(format!("{}: {e}", self.name)))?;
            let value = if any_labeled {
                Value::Labeled(axes.label(values, units.clone())?)
            } else {
                Value::Quantity(Quantity::with_units(values, units.clone()))
            };
            results.insert(name.clone(), value);
        }
        Ok(Outputs::new(&self.name, results))
    }

    /// Run the kernel at every index of `shape`; one column per output.
    /// Outputs the kernel leaves unwritten at an index come back as NaN.
    fn evaluate(
        &self,
        inputs: &[(&str, &Value, f64)],
        views: &[ArrayViewD<'_, f64>],
        shape: &[usize],
    ) -> PopconResult<Vec<Vec<f64>>> {
        let n: usize = shape.iter().product();
        let mut stripped: Vec<Vec<f64>> = Vec::with_capacity(views.len());
        for ((param, _, factor), view) in inputs.iter().zip(views) {
            let broadcast = view.broadcast(IxDyn(shape)).ok_or_else(|| PopconError::Broadcast {
                parameter: param.to_string(),
                expected: shape.to_vec(),
                actual: view.shape().to_vec(),
            })?;
            stripped.push(broadcast.iter().map(|v| v * factor).collect());
        }

        let n_out = self.output_names.len();
        let mut columns = vec![Vec::with_capacity(n); n_out];
        let mut x = vec![0.0; stripped.len()];
        let mut y = vec![0.0; n_out];
        for i in 0..n {
            for (xk, col) in x.iter_mut().zip(&stripped) {
                *xk = col[i];
            }
            y.fill(f64::NAN);
            (self.kernel)(&x, &mut y);
            for (col, yk) in columns.iter_mut().zip(&y) {
                col.push(*yk);
            }
        }
        Ok(columns)
    }
}

impl fmt::Debug for WrappedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WrappedFunction")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("input_units", &self.input_units)
            .field("output_names", &self.output_names)
            .field("output_units", &self.output_units)
            .finish_non_exhaustive()
    }
}
