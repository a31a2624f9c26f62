//! Algebraic verification of sequences.
//!
//! A sequence is replayed against a fresh [`DenseUnitary`] and the resulting
//! operator is compared with a target from [`reference`](crate::reference)
//! up to global phase.

use ndarray::Array2;
use num_complex::Complex64;
use tracing::debug;

use qcat_core::{CompositeGate, Sequence};

use crate::config::SimConfig;
use crate::dense::DenseUnitary;
use crate::error::SimResult;
use crate::phase::equal_up_to_global_phase;

/// The operator `seq` implements on a `num_qubits`-qubit register.
pub fn sequence_unitary(
    seq: &Sequence,
    num_qubits: usize,
    config: &SimConfig,
) -> SimResult<Array2<Complex64>> {
    let mut device = DenseUnitary::with_config(num_qubits, config.clone())?;
    seq.replay(&mut device)?;
    Ok(device.into_matrix())
}

/// The operator a catalogue gate implements on a `num_qubits`-qubit register.
pub fn composite_unitary(
    gate: &CompositeGate,
    num_qubits: usize,
    config: &SimConfig,
) -> SimResult<Array2<Complex64>> {
    sequence_unitary(&gate.sequence(), num_qubits, config)
}

/// Whether `seq` equals `target` up to global phase.
///
/// Device errors during replay (bad indices, aliasing) are returned, not
/// folded into `false`.
pub fn implements(
    seq: &Sequence,
    num_qubits: usize,
    target: &Array2<Complex64>,
    config: &SimConfig,
) -> SimResult<bool> {
    let actual = sequence_unitary(seq, num_qubits, config)?;
    let ok = equal_up_to_global_phase(actual.view(), target.view(), config.tolerance);
    debug!(steps = seq.len(), num_qubits, ok, "checked sequence against target");
    Ok(ok)
}
