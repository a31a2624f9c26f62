//! A recording device.
//!
//! [`TraceDevice`] performs no simulation. It logs every primitive call in
//! order so the exact replay of a gate can be inspected.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;

use crate::device::Device;
use crate::elementary::ElementaryGate;
use crate::qubit::QubitId;
use crate::sequence::{Op, Sequence};
use crate::unitary::{EPSILON, Unitary2x2};

/// One recorded device call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TraceEntry {
    /// A call to `apply_unitary`.
    Unitary {
        /// The qubit addressed.
        qubit: QubitId,
        /// The matrix passed in.
        matrix: Unitary2x2,
    },
    /// A call to `apply_cnot`.
    CNot {
        /// The control qubit.
        control: QubitId,
        /// The target qubit.
        target: QubitId,
    },
}

/// Device that records calls instead of executing them.
#[derive(Debug, Clone, Default)]
pub struct TraceDevice {
    entries: Vec<TraceEntry>,
}

impl TraceDevice {
    /// Create an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded calls, oldest first.
    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    /// Number of recorded calls.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget all recorded calls.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Rebuild the replayed sequence.
    ///
    /// Returns `None` if any recorded matrix is not an elementary gate.
    pub fn to_sequence(&self) -> Option<Sequence> {
        self.entries
            .iter()
            .map(|entry| match entry {
                TraceEntry::Unitary { qubit, matrix } => {
                    ElementaryGate::identify(matrix, EPSILON).map(|gate| Op::gate(gate, *qubit))
                }
                TraceEntry::CNot { control, target } => Some(Op::cnot(*control, *target)),
            })
            .collect::<Option<Vec<_>>>()
            .map(Sequence::from)
    }
}

impl Device for TraceDevice {
    type Error = Infallible;

    fn apply_unitary(&mut self, qubit: QubitId, matrix: &Unitary2x2) -> Result<(), Infallible> {
        self.entries.push(TraceEntry::Unitary {
            qubit,
            matrix: *matrix,
        });
        Ok(())
    }

    fn apply_cnot(&mut self, control: QubitId, target: QubitId) -> Result<(), Infallible> {
        self.entries.push(TraceEntry::CNot { control, target });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    #[test]
    fn test_records_in_order() {
        let mut dev = TraceDevice::new();
        dev.apply_cnot(QubitId(0), QubitId(1)).unwrap();
        dev.apply_unitary(QubitId(1), &Unitary2x2::h()).unwrap();
        assert_eq!(dev.len(), 2);
        assert_eq!(
            dev.entries()[0],
            TraceEntry::CNot {
                control: QubitId(0),
                target: QubitId(1)
            }
        );
        dev.clear();
        assert!(dev.is_empty());
    }

    #[test]
    fn test_to_sequence_rejects_foreign_matrix() {
        let mut dev = TraceDevice::new();
        let s = Complex64::new(0.0, 1.0);
        let zero = Complex64::new(0.0, 0.0);
        dev.apply_unitary(QubitId(0), &Unitary2x2::new(Complex64::new(1.0, 0.0), zero, zero, s))
            .unwrap();
        assert_eq!(dev.to_sequence(), None);
    }
}
