// ─────────────────────────────────────────────────────────────────────
// SCPN POPCON — Error
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PopconError {
    /// Malformed declaration or configuration, detected before any call.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Cannot parse unit '{input}': {message}")]
    UnitParse { input: String, message: String },

    #[error("Dimensionality error for '{parameter}': expected {expected}, got {actual}")]
    Dimensionality {
        parameter: String,
        expected: String,
        actual: String,
    },

    #[error("Broadcast error for '{parameter}': shape {actual:?} incompatible with {expected:?}")]
    Broadcast {
        parameter: String,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    #[error("Coordinate mismatch for '{parameter}': dim '{dim}' does not align with other inputs")]
    CoordinateMismatch { parameter: String, dim: String },

    #[error("Missing argument '{parameter}' in call to {function}")]
    MissingArgument { function: String, parameter: String },

    #[error("Unexpected argument '{parameter}' in call to {function}")]
    UnexpectedArgument { function: String, parameter: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type PopconResult<T> = Result<T, PopconError>;
