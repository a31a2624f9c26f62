//! Canonical target operators.
//!
//! Built directly from their definitions, never from a catalogue sequence,
//! so they can serve as the oracle's ground truth.

use ndarray::Array2;
use num_complex::Complex64;

use qcat_core::{QubitId, Unitary2x2};

use crate::error::SimResult;
use crate::kernel;

/// Identity on `num_qubits` qubits.
pub fn identity(num_qubits: usize) -> Array2<Complex64> {
    Array2::eye(1 << num_qubits)
}

/// The permutation matrix sending basis state `|k⟩` to `|f(k)⟩`.
///
/// `f` must be a bijection on `0..2^num_qubits`.
pub fn permutation(num_qubits: usize, f: impl Fn(usize) -> usize) -> Array2<Complex64> {
    let dim = 1 << num_qubits;
    let mut m = Array2::zeros((dim, dim));
    for k in 0..dim {
        m[[f(k), k]] = Complex64::new(1.0, 0.0);
    }
    m
}

/// `matrix` on `qubit`, identity elsewhere.
pub fn single_qubit(
    num_qubits: usize,
    qubit: QubitId,
    matrix: &Unitary2x2,
) -> SimResult<Array2<Complex64>> {
    kernel::check_qubits(num_qubits, &[qubit])?;
    let mut m = identity(num_qubits);
    for column in m.columns_mut() {
        kernel::apply_single(column, qubit.index(), matrix);
    }
    Ok(m)
}

/// Controlled-NOT.
pub fn cnot(num_qubits: usize, control: QubitId, target: QubitId) -> SimResult<Array2<Complex64>> {
    kernel::check_qubits(num_qubits, &[control, target])?;
    let (c, t) = (control.index(), target.index());
    Ok(permutation(num_qubits, |k| {
        if (k >> c) & 1 == 1 { k ^ (1 << t) } else { k }
    }))
}

/// Exchange of two qubits.
pub fn swap(num_qubits: usize, a: QubitId, b: QubitId) -> SimResult<Array2<Complex64>> {
    kernel::check_qubits(num_qubits, &[a, b])?;
    let (a, b) = (a.index(), b.index());
    Ok(permutation(num_qubits, |k| {
        if (k >> a) & 1 == (k >> b) & 1 {
            k
        } else {
            k ^ (1 << a) ^ (1 << b)
        }
    }))
}

/// Toffoli: flip `target` iff both controls are set.
pub fn toffoli(
    num_qubits: usize,
    control1: QubitId,
    control2: QubitId,
    target: QubitId,
) -> SimResult<Array2<Complex64>> {
    kernel::check_qubits(num_qubits, &[control1, control2, target])?;
    let (c1, c2, t) = (control1.index(), control2.index(), target.index());
    Ok(permutation(num_qubits, |k| {
        if (k >> c1) & 1 == 1 && (k >> c2) & 1 == 1 {
            k ^ (1 << t)
        } else {
            k
        }
    }))
}
