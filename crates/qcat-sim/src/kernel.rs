//! Amplitude update kernels shared by both devices.
//!
//! Basis indices are little-endian: bit `q` of the index is qubit `q`.

use ndarray::ArrayViewMut1;
use num_complex::Complex64;

use qcat_core::{QubitId, Unitary2x2};

use crate::error::{SimError, SimResult};

/// Apply a 2x2 matrix to every amplitude pair that differs only in `qubit`.
pub(crate) fn apply_single(mut amps: ArrayViewMut1<'_, Complex64>, qubit: usize, m: &Unitary2x2) {
    let mask = 1 << qubit;
    let [a, b, c, d] = m.data;
    for i in 0..amps.len() {
        if i & mask == 0 {
            let j = i | mask;
            let lo = amps[i];
            let hi = amps[j];
            amps[i] = a * lo + b * hi;
            amps[j] = c * lo + d * hi;
        }
    }
}

/// Swap the target pair wherever the control bit is set.
pub(crate) fn apply_cx(mut amps: ArrayViewMut1<'_, Complex64>, control: usize, target: usize) {
    let ctrl_mask = 1 << control;
    let tgt_mask = 1 << target;
    for i in 0..amps.len() {
        if (i & ctrl_mask != 0) && (i & tgt_mask == 0) {
            let j = i | tgt_mask;
            amps.swap(i, j);
        }
    }
}

/// Hilbert space dimension of a `num_qubits` register, bounded by `max`.
pub(crate) fn dimension(num_qubits: usize, max: usize) -> SimResult<usize> {
    let too_many = SimError::TooManyQubits {
        requested: num_qubits,
        max,
    };
    if num_qubits > max {
        return Err(too_many);
    }
    u32::try_from(num_qubits)
        .ok()
        .and_then(|shift| 1usize.checked_shl(shift))
        .ok_or(too_many)
}

/// Check that every qubit is in range and no qubit repeats.
pub(crate) fn check_qubits(num_qubits: usize, qubits: &[QubitId]) -> SimResult<()> {
    for (i, &qubit) in qubits.iter().enumerate() {
        if qubit.index() >= num_qubits {
            return Err(SimError::QubitOutOfRange { qubit, num_qubits });
        }
        if qubits[..i].contains(&qubit) {
            return Err(SimError::DuplicateQubit { qubit });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension() {
        assert_eq!(dimension(0, 4).unwrap(), 1);
        assert_eq!(dimension(3, 4).unwrap(), 8);
        assert!(matches!(
            dimension(5, 4),
            Err(SimError::TooManyQubits {
                requested: 5,
                max: 4
            })
        ));
        // Widths that cannot be shifted into a usize are refused, not wrapped
        assert!(matches!(
            dimension(200, 1000),
            Err(SimError::TooManyQubits { requested: 200, .. })
        ));
    }

    #[test]
    fn test_check_qubits() {
        assert!(check_qubits(2, &[QubitId(0), QubitId(1)]).is_ok());
        assert!(matches!(
            check_qubits(2, &[QubitId(0), QubitId(2)]),
            Err(SimError::QubitOutOfRange { num_qubits: 2, .. })
        ));
        assert!(matches!(
            check_qubits(3, &[QubitId(1), QubitId(1)]),
            Err(SimError::DuplicateQubit { qubit: QubitId(1) })
        ));
    }
}
