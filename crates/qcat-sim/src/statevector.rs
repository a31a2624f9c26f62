//! Statevector simulation device.

use ndarray::ArrayViewMut1;
use num_complex::Complex64;
use tracing::trace;

use qcat_core::{Device, QubitId, Unitary2x2};

use crate::config::SimConfig;
use crate::error::{SimError, SimResult};
use crate::kernel;

/// A statevector representing a quantum state.
///
/// Implements [`Device`], so any catalogue gate can be replayed against it
/// to check its effect on concrete basis states.
#[derive(Debug, Clone)]
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
    config: SimConfig,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    pub fn new(num_qubits: usize) -> SimResult<Self> {
        Self::with_config(num_qubits, SimConfig::default())
    }

    /// Create a new statevector initialized to |0...0⟩ with explicit settings.
    pub fn with_config(num_qubits: usize, config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        let size = kernel::dimension(num_qubits, config.max_statevector_qubits)?;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Ok(Self {
            amplitudes,
            num_qubits,
            config,
        })
    }

    /// Create the computational basis state `|index⟩`.
    pub fn basis(num_qubits: usize, index: usize) -> SimResult<Self> {
        Self::basis_with_config(num_qubits, index, SimConfig::default())
    }

    /// Create the computational basis state `|index⟩` with explicit settings.
    pub fn basis_with_config(
        num_qubits: usize,
        index: usize,
        config: SimConfig,
    ) -> SimResult<Self> {
        let mut sv = Self::with_config(num_qubits, config)?;
        let dim = sv.amplitudes.len();
        if index >= dim {
            return Err(SimError::BasisStateOutOfRange { index, dim });
        }
        sv.amplitudes[0] = Complex64::new(0.0, 0.0);
        sv.amplitudes[index] = Complex64::new(1.0, 0.0);
        Ok(sv)
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// All amplitudes, indexed by basis state.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Amplitude of basis state `index`.
    pub fn amplitude(&self, index: usize) -> SimResult<Complex64> {
        self.amplitudes
            .get(index)
            .copied()
            .ok_or(SimError::BasisStateOutOfRange {
                index,
                dim: self.amplitudes.len(),
            })
    }

    /// Probability of observing basis state `index`.
    pub fn probability(&self, index: usize) -> SimResult<f64> {
        Ok(self.amplitude(index)?.norm_sqr())
    }

    /// Probabilities of every basis state.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(Complex64::norm_sqr).collect()
    }

    /// Sum of squared amplitude magnitudes; 1 for a valid state.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(Complex64::norm_sqr).sum()
    }

    /// Index of the basis state holding all probability, if there is one.
    pub fn as_basis_state(&self) -> Option<usize> {
        let tol = self.config.tolerance;
        let mut found = None;
        for (i, amp) in self.amplitudes.iter().enumerate() {
            let p = amp.norm_sqr();
            if (p - 1.0).abs() < tol {
                found = Some(i);
            } else if p > tol {
                return None;
            }
        }
        found
    }

    /// Convert a basis index to a bitstring, qubit 0 first.
    pub fn bitstring(&self, index: usize) -> String {
        format!("{:0width$b}", index, width = self.num_qubits)
            .chars()
            .rev()
            .collect()
    }

    fn view_mut(&mut self) -> ArrayViewMut1<'_, Complex64> {
        ArrayViewMut1::from(self.amplitudes.as_mut_slice())
    }
}

impl Device for Statevector {
    type Error = SimError;

    fn apply_unitary(&mut self, qubit: QubitId, matrix: &Unitary2x2) -> SimResult<()> {
        kernel::check_qubits(self.num_qubits, &[qubit])?;
        if self.config.check_unitary && !matrix.is_unitary(self.config.tolerance) {
            return Err(SimError::NonUnitary { qubit });
        }
        trace!(%qubit, "statevector: apply_unitary");
        kernel::apply_single(self.view_mut(), qubit.index(), matrix);
        Ok(())
    }

    fn apply_cnot(&mut self, control: QubitId, target: QubitId) -> SimResult<()> {
        kernel::check_qubits(self.num_qubits, &[control, target])?;
        trace!(%control, %target, "statevector: apply_cnot");
        kernel::apply_cx(self.view_mut(), control.index(), target.index());
        Ok(())
    }
}
