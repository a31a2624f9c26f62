//! Operator comparison modulo a global phase.
//!
//! Two operators are equivalent if `A = e^{iθ}·B` for some θ. A decomposition
//! that is correct can still differ from its target by such a phase, so
//! plain entrywise equality is the wrong test.

use ndarray::ArrayView2;
use num_complex::Complex64;

/// Find `φ` with `|φ| = 1` and `A ≈ φ·B`, if one exists.
///
/// `φ` is read off the largest-magnitude entry of `b`; every entry must
/// then satisfy `|a_ij − φ·b_ij| < tol`. Returns `None` on shape mismatch.
pub fn global_phase_between(
    a: ArrayView2<'_, Complex64>,
    b: ArrayView2<'_, Complex64>,
    tol: f64,
) -> Option<Complex64> {
    if a.dim() != b.dim() {
        return None;
    }
    let (idx, pivot) = b
        .indexed_iter()
        .max_by(|(_, x), (_, y)| x.norm().total_cmp(&y.norm()))?;
    if pivot.norm() < tol {
        // b is zero; only a zero a matches it
        return a
            .iter()
            .all(|z| z.norm() < tol)
            .then_some(Complex64::new(1.0, 0.0));
    }

    let phase = a[idx] / pivot;
    if (phase.norm() - 1.0).abs() > tol {
        return None;
    }
    a.iter()
        .zip(b.iter())
        .all(|(x, y)| (x - phase * y).norm() < tol)
        .then_some(phase)
}

/// Whether `a` and `b` are equal up to a global phase.
pub fn equal_up_to_global_phase(
    a: ArrayView2<'_, Complex64>,
    b: ArrayView2<'_, Complex64>,
    tol: f64,
) -> bool {
    global_phase_between(a, b, tol).is_some()
}
