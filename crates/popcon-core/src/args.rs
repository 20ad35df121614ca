// ─────────────────────────────────────────────────────────────────────
// SCPN POPCON — Arguments
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Named argument and result collections of wrapped functions.

use indexmap::IndexMap;
use popcon_types::error::{PopconError, PopconResult};
use popcon_units::Value;

/// Named arguments for [`WrappedFunction::call`](crate::ufunc::WrappedFunction::call).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    values: IndexMap<String, Value>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &str, value: impl Into<Value>) -> Option<Value> {
        self.values.insert(name.to_string(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Value)> for Args {
    fn from_iter<I: IntoIterator<Item = (S, Value)>>(iter: I) -> Self {
        Args {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Results of a wrapped function, keyed by declared output name in
/// declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Outputs {
    function: String,
    values: IndexMap<String, Value>,
}

impl Outputs {
    pub(crate) fn new(function: &str, values: IndexMap<String, Value>) -> Self {
        Outputs {
            function: function.to_string(),
            values,
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Take the output called `name`.
    pub fn remove(&mut self, name: &str) -> PopconResult<Value> {
        self.values.shift_remove(name).ok_or_else(|| {
            PopconError::ConfigError(format!("{} has no output named '{name}'", self.function))
        })
    }

    /// The only output of a single-output function.
    pub fn into_single(self) -> PopconResult<Value> {
        if self.values.len() != 1 {
            return Err(PopconError::ConfigError(format!(
                "{} returns {} outputs, expected exactly one",
                self.function,
                self.values.len()
            )));
        }
        self.values
            .into_values()
            .next()
            .ok_or_else(|| PopconError::ConfigError("empty outputs".to_string()))
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values.into_values().collect()
    }
}
