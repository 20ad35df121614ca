// ─────────────────────────────────────────────────────────────────────
// SCPN POPCON — Unit Spec
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use indexmap::IndexMap;

/// Declared unit of every named input and output of a wrapped function.
///
/// Unit strings are parsed when the function is wrapped, so a typo in a
/// declaration is reported before the first call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnitSpec {
    inputs: IndexMap<String, String>,
    outputs: IndexMap<String, String>,
    duplicates: Vec<String>,
}

impl UnitSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spec from `(name, unit)` pairs, mirroring a pair of keyword maps.
    pub fn from_pairs(inputs: &[(&str, &str)], outputs: &[(&str, &str)]) -> Self {
        let spec = inputs
            .iter()
            .fold(Self::new(), |spec, (name, unit)| spec.input(name, unit));
        outputs
            .iter()
            .fold(spec, |spec, (name, unit)| spec.output(name, unit))
    }

    pub fn input(mut self, name: &str, units: &str) -> Self {
        if self.inputs.insert(name.to_string(), units.to_string()).is_some() {
            self.duplicates.push(format!("input '{name}'"));
        }
        self
    }

    pub fn output(mut self, name: &str, units: &str) -> Self {
        if self.outputs.insert(name.to_string(), units.to_string()).is_some() {
            self.duplicates.push(format!("output '{name}'"));
        }
        self
    }

    pub fn inputs(&self) -> &IndexMap<String, String> {
        &self.inputs
    }

    pub fn outputs(&self) -> &IndexMap<String, String> {
        &self.outputs
    }

    /// Names declared more than once.
    pub fn duplicates(&self) -> &[String] {
        &self.duplicates
    }
}
