//! The device contract every gate in the catalogue is written against.
//!
//! A device owns the quantum state. The catalogue only ever calls the two
//! primitives below, in a fixed order, and forwards whatever the device
//! returns:
//!
//! ```text
//!   catalogue ──apply_unitary(q, M)──▶ device
//!             ──apply_cnot(c, t)────▶
//! ```
//!
//! Validation (qubit bounds, aliasing of operands, unitarity of `M`) is
//! entirely the device's responsibility. The first error aborts the replay
//! and is returned unchanged.

use crate::qubit::QubitId;
use crate::unitary::Unitary2x2;

/// A target capable of applying single-qubit unitaries and controlled-NOT.
pub trait Device {
    /// Failure reported by the device.
    type Error;

    /// Apply the 2x2 unitary `matrix` to the amplitude pair of `qubit`.
    fn apply_unitary(&mut self, qubit: QubitId, matrix: &Unitary2x2) -> Result<(), Self::Error>;

    /// Flip `target` conditioned on `control` being set.
    fn apply_cnot(&mut self, control: QubitId, target: QubitId) -> Result<(), Self::Error>;
}

impl<D: Device + ?Sized> Device for &mut D {
    type Error = D::Error;

    #[inline]
    fn apply_unitary(&mut self, qubit: QubitId, matrix: &Unitary2x2) -> Result<(), Self::Error> {
        (**self).apply_unitary(qubit, matrix)
    }

    #[inline]
    fn apply_cnot(&mut self, control: QubitId, target: QubitId) -> Result<(), Self::Error> {
        (**self).apply_cnot(control, target)
    }
}
