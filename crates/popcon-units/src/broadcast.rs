// ─────────────────────────────────────────────────────────────────────
// SCPN POPCON — Broadcasting
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! NumPy-style shape broadcasting.

/// Broadcast two shapes: align trailing axes, expand size-1 axes.
///
/// Returns `None` when some aligned pair differs and neither is 1.
pub fn broadcast_shapes(a: &[usize], b: &[usize]) -> Option<Vec<usize>> {
    let ndim = a.len().max(b.len());
    let mut out = vec![0; ndim];
    for k in 0..ndim {
        // k counts from the trailing axis
        let da = if k < a.len() { a[a.len() - 1 - k] } else { 1 };
        let db = if k < b.len() { b[b.len() - 1 - k] } else { 1 };
        out[ndim - 1 - k] = match (da, db) {
            (x, y) if x == y => x,
            (1, y) => y,
            (x, 1) => x,
            _ => return None,
        };
    }
    Some(out)
}

/// True when `shape` can be broadcast to exactly `target`.
pub fn broadcasts_to(shape: &[usize], target: &[usize]) -> bool {
    broadcast_shapes(shape, target).is_some_and(|s| s == target)
}
