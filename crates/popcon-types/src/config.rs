// ─────────────────────────────────────────────────────────────────────
// SCPN POPCON — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{PopconError, PopconResult};

/// Built-in default units, keyed by variable name.
const BUILTIN_DEFAULT_UNITS: &str = include_str!("../default_units.json");

/// Preferred display/storage unit for each named POPCON variable.
///
/// Deserializes from a flat JSON object of `"variable": "unit"` pairs.
/// Unit strings are kept verbatim here; they are parsed by the unit system
/// when a conversion is requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DefaultUnits {
    units: IndexMap<String, String>,
}

impl DefaultUnits {
    /// The table shipped with the library (`default_units.json`).
    pub fn builtin() -> PopconResult<Self> {
        Self::from_json_str(BUILTIN_DEFAULT_UNITS)
    }

    /// Load from a JSON file.
    pub fn from_file(path: &str) -> PopconResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(json: &str) -> PopconResult<Self> {
        let table: Self = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    fn validate(&self) -> PopconResult<()> {
        for (key, unit) in &self.units {
            if key.trim().is_empty() {
                return Err(PopconError::ConfigError(
                    "default units table contains an empty variable name".to_string(),
                ));
            }
            if unit.trim().is_empty() {
                return Err(PopconError::ConfigError(format!(
                    "default unit for '{key}' is empty"
                )));
            }
        }
        Ok(())
    }

    /// Unit string registered for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.units.get(key).map(String::as_str)
    }

    /// Like [`get`](Self::get), but an unknown key is a configuration error.
    pub fn require(&self, key: &str) -> PopconResult<&str> {
        self.get(key).ok_or_else(|| {
            PopconError::ConfigError(format!("no default unit registered for '{key}'"))
        })
    }

    /// Register or replace the unit for `key`, returning the previous entry.
    pub fn insert(&mut self, key: impl Into<String>, unit: impl Into<String>) -> Option<String> {
        self.units.insert(key.into(), unit.into())
    }

    /// Overlay `other` on top of `self`; entries in `other` win.
    pub fn merge(&mut self, other: &DefaultUnits) {
        for (key, unit) in &other.units {
            self.units.insert(key.clone(), unit.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.units.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn builtin_path() -> String {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("default_units.json")
            .to_string_lossy()
            .to_string()
    }

    #[test]
    fn test_builtin_table_loads() {
        let units = DefaultUnits::builtin().unwrap();
        assert_eq!(units.get("separatrix_electron_density"), Some("n19"));
        assert_eq!(units.get("upstream_SOL_collisionality"), Some("dimensionless"));
        assert_eq!(units.get("P_fusion"), Some("MW"));
        assert!(units.get("not_a_variable").is_none());
    }

    #[test]
    fn test_from_file_matches_builtin() {
        let from_file = DefaultUnits::from_file(&builtin_path()).unwrap();
        let builtin = DefaultUnits::builtin().unwrap();
        assert_eq!(from_file, builtin);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = DefaultUnits::from_file("/nonexistent/default_units.json").unwrap_err();
        assert!(matches!(err, PopconError::Io(_)));
    }

    #[test]
    fn test_empty_unit_rejected() {
        let err = DefaultUnits::from_json_str(r#"{"major_radius": "  "}"#).unwrap_err();
        match err {
            PopconError::ConfigError(msg) => assert!(msg.contains("major_radius")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_require_unknown_key() {
        let units = DefaultUnits::builtin().unwrap();
        assert!(matches!(
            units.require("warp_factor"),
            Err(PopconError::ConfigError(_))
        ));
        assert_eq!(units.require("major_radius").unwrap(), "m");
    }

    #[test]
    fn test_merge_overrides() {
        let mut units = DefaultUnits::builtin().unwrap();
        let before = units.len();
        let overlay =
            DefaultUnits::from_json_str(r#"{"major_radius": "cm", "wall_load": "MW/m^2"}"#)
                .unwrap();
        units.merge(&overlay);
        assert_eq!(units.get("major_radius"), Some("cm"));
        assert_eq!(units.get("wall_load"), Some("MW/m^2"));
        assert_eq!(units.len(), before + 1);
    }

    #[test]
    fn test_roundtrip_serialization() {
        let units = DefaultUnits::builtin().unwrap();
        let json = serde_json::to_string_pretty(&units).unwrap();
        let back = DefaultUnits::from_json_str(&json).unwrap();
        assert_eq!(units, back);
        // Order of the JSON object is preserved.
        assert_eq!(units.iter().next(), back.iter().next());
    }
}
