// ─────────────────────────────────────────────────────────────────────
// SCPN POPCON — POPCON Core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Unit-checked elementwise function adapter.
//!
//! See [`ufunc::wraps_ufunc`].

pub mod args;
pub mod ufunc;
pub mod unit_spec;

pub use args::{Args, Outputs};
pub use ufunc::{resolve, wraps_ufunc, Kernel, LazyUfunc, WrappedFunction};
pub use unit_spec::UnitSpec;
