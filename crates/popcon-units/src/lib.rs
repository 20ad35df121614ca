// ─────────────────────────────────────────────────────────────────────
// SCPN POPCON — POPCON Units
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Runtime unit system for POPCON formulas.
//!
//! Quantities carry their unit at runtime so that a formula can check and
//! convert its inputs when it is called, whatever units the caller used.

pub mod broadcast;
pub mod convert;
pub mod dimension;
pub mod labeled;
pub mod quantity;
pub mod registry;
pub mod unit;
pub mod value;

pub use dimension::{BaseDimension, Dimension};
pub use labeled::{AlignedAxes, LabeledArray};
pub use quantity::Quantity;
pub use unit::Unit;
pub use value::Value;
