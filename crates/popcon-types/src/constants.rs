// ─────────────────────────────────────────────────────────────────────
// SCPN POPCON — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Physical constants in SI units (CODATA 2018).

/// Vacuum permeability (H/m).
pub const MU_0: f64 = 1.25663706212e-6;

/// Elementary charge (C). Also the size of one electron-volt in joules.
pub const ELEMENTARY_CHARGE: f64 = 1.602176634e-19;

/// Electron-volt in joules.
pub const EV_TO_J: f64 = ELEMENTARY_CHARGE;

/// keV in joules.
pub const KEV_TO_J: f64 = 1e3 * EV_TO_J;

/// Unified atomic mass unit (kg)
pub const ATOMIC_MASS_UNIT: f64 = 1.66053906660e-27;

/// D-T fusion energy release (J) - 17.6 MeV
pub const E_FUSION_DT: f64 = 17.6e6 * EV_TO_J;

/// Fraction of D-T fusion energy carried by the alpha particle (3.5/17.6).
pub const ALPHA_FRACTION: f64 = 3.5 / 17.6;

/// Standard atmosphere (Pa)
pub const STANDARD_ATMOSPHERE: f64 = 101_325.0;
