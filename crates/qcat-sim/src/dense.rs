//! Dense unitary accumulator device.
//!
//! Starts at the identity and left-multiplies every applied operation, so
//! after a replay [`DenseUnitary::matrix`] is the full `2^n × 2^n` operator
//! the sequence implements. Column `k` is the image of basis state `|k⟩`.

use ndarray::Array2;
use num_complex::Complex64;
use tracing::trace;

use qcat_core::{Device, QubitId, Unitary2x2};

use crate::config::SimConfig;
use crate::error::{SimError, SimResult};
use crate::kernel;
use crate::phase::equal_up_to_global_phase;

/// Device that records the accumulated unitary instead of a state.
#[derive(Debug, Clone)]
pub struct DenseUnitary {
    matrix: Array2<Complex64>,
    num_qubits: usize,
    config: SimConfig,
}

impl DenseUnitary {
    /// Create an identity accumulator over `num_qubits` qubits.
    pub fn new(num_qubits: usize) -> SimResult<Self> {
        Self::with_config(num_qubits, SimConfig::default())
    }

    /// Create an identity accumulator with explicit settings.
    pub fn with_config(num_qubits: usize, config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        let dim = kernel::dimension(num_qubits, config.max_dense_qubits)?;
        Ok(Self {
            matrix: Array2::eye(dim),
            num_qubits,
            config,
        })
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// The accumulated operator.
    pub fn matrix(&self) -> &Array2<Complex64> {
        &self.matrix
    }

    /// Take the accumulated operator.
    pub fn into_matrix(self) -> Array2<Complex64> {
        self.matrix
    }

    /// Forget everything applied so far.
    pub fn reset(&mut self) {
        self.matrix = Array2::eye(1 << self.num_qubits);
    }

    /// Compare the accumulated operator with `target` up to global phase.
    pub fn equiv_up_to_phase(&self, target: &Array2<Complex64>) -> bool {
        equal_up_to_global_phase(self.matrix.view(), target.view(), self.config.tolerance)
    }
}

impl Device for DenseUnitary {
    type Error = SimError;

    fn apply_unitary(&mut self, qubit: QubitId, matrix: &Unitary2x2) -> SimResult<()> {
        kernel::check_qubits(self.num_qubits, &[qubit])?;
        if self.config.check_unitary && !matrix.is_unitary(self.config.tolerance) {
            return Err(SimError::NonUnitary { qubit });
        }
        trace!(%qubit, "dense: apply_unitary");
        for column in self.matrix.columns_mut() {
            kernel::apply_single(column, qubit.index(), matrix);
        }
        Ok(())
    }

    fn apply_cnot(&mut self, control: QubitId, target: QubitId) -> SimResult<()> {
        kernel::check_qubits(self.num_qubits, &[control, target])?;
        trace!(%control, %target, "dense: apply_cnot");
        for column in self.matrix.columns_mut() {
            kernel::apply_cx(column, control.index(), target.index());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference;

    #[test]
    fn test_starts_at_identity() {
        let dev = DenseUnitary::new(2).unwrap();
        assert_eq!(dev.matrix(), &reference::identity(2));
    }

    #[test]
    fn test_single_gate_matches_reference() {
        let mut dev = DenseUnitary::new(3).unwrap();
        dev.apply_unitary(QubitId(1), &Unitary2x2::h()).unwrap();
        let expected = reference::single_qubit(3, QubitId(1), &Unitary2x2::h()).unwrap();
        assert!(dev.equiv_up_to_phase(&expected));
    }

    #[test]
    fn test_operations_compose_left_to_right() {
        // X then H is HX, which is not XH even up to phase
        let mut dev = DenseUnitary::new(1).unwrap();
        dev.apply_unitary(QubitId(0), &Unitary2x2::x()).unwrap();
        dev.apply_unitary(QubitId(0), &Unitary2x2::h()).unwrap();
        let hx = Unitary2x2::h() * Unitary2x2::x();
        let expected = reference::single_qubit(1, QubitId(0), &hx).unwrap();
        assert!(dev.equiv_up_to_phase(&expected));

        let xh = Unitary2x2::x() * Unitary2x2::h();
        let wrong = reference::single_qubit(1, QubitId(0), &xh).unwrap();
        assert!(!dev.equiv_up_to_phase(&wrong));
    }

    #[test]
    fn test_cnot_matches_reference() {
        let mut dev = DenseUnitary::new(2).unwrap();
        dev.apply_cnot(QubitId(1), QubitId(0)).unwrap();
        let expected = reference::cnot(2, QubitId(1), QubitId(0)).unwrap();
        assert_eq!(dev.matrix(), &expected);
        dev.reset();
        assert_eq!(dev.matrix(), &reference::identity(2));
    }

    #[test]
    fn test_oversized_limit_is_an_error() {
        let cfg = SimConfig {
            max_dense_qubits: 80,
            ..SimConfig::default()
        };
        assert!(matches!(
            DenseUnitary::with_config(70, cfg),
            Err(SimError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_width_limit() {
        assert!(matches!(
            DenseUnitary::new(9),
            Err(SimError::TooManyQubits {
                requested: 9,
                max: 8
            })
        ));
    }
}
