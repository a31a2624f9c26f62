//! Fixed operation sequences.
//!
//! A composite gate is data: an ordered list of [`Op`]s. Unitaries do not
//! commute, so the order of a [`Sequence`] is part of its meaning. Replay
//! issues the steps front to back and stops at the first device error.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

use crate::device::Device;
use crate::elementary::ElementaryGate;
use crate::qubit::QubitId;

/// One step of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Op {
    /// An elementary single-qubit gate.
    Gate {
        /// The gate to apply.
        gate: ElementaryGate,
        /// The qubit it acts on.
        qubit: QubitId,
    },
    /// A controlled-NOT.
    CNot {
        /// The control qubit.
        control: QubitId,
        /// The target qubit.
        target: QubitId,
    },
}

impl Op {
    /// Create a gate step.
    #[inline]
    pub fn gate(gate: ElementaryGate, qubit: QubitId) -> Self {
        Op::Gate { gate, qubit }
    }

    /// Create a controlled-NOT step.
    #[inline]
    pub fn cnot(control: QubitId, target: QubitId) -> Self {
        Op::CNot { control, target }
    }

    /// Issue this step against `device`.
    pub fn apply<D: Device + ?Sized>(&self, device: &mut D) -> Result<(), D::Error> {
        match *self {
            Op::Gate { gate, qubit } => gate.apply(device, qubit),
            Op::CNot { control, target } => device.apply_cnot(control, target),
        }
    }

    /// The step that undoes this one.
    #[must_use]
    pub fn inverse(&self) -> Self {
        match *self {
            Op::Gate { gate, qubit } => Op::Gate {
                gate: gate.inverse(),
                qubit,
            },
            cnot @ Op::CNot { .. } => cnot,
        }
    }

    /// The qubits this step touches.
    pub fn qubits(&self) -> Vec<QubitId> {
        match *self {
            Op::Gate { qubit, .. } => vec![qubit],
            Op::CNot { control, target } => vec![control, target],
        }
    }

    /// Whether this step is a controlled-NOT.
    #[inline]
    pub fn is_cnot(&self) -> bool {
        matches!(self, Op::CNot { .. })
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Gate { gate, qubit } => write!(f, "{gate} {qubit}"),
            Op::CNot { control, target } => write!(f, "cx {control}, {target}"),
        }
    }
}

/// An ordered, fixed list of steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sequence(Vec<Op>);

impl Sequence {
    /// Wrap a list of steps.
    pub fn new(ops: Vec<Op>) -> Self {
        Self(ops)
    }

    /// Replay every step against `device`, in order.
    pub fn replay<D: Device + ?Sized>(&self, device: &mut D) -> Result<(), D::Error> {
        for (step, op) in self.0.iter().enumerate() {
            trace!(step, %op, "replaying step");
            op.apply(device)?;
        }
        Ok(())
    }

    /// The sequence that undoes this one: steps reversed, each inverted.
    #[must_use]
    pub fn inverse(&self) -> Self {
        self.iter().rev().map(Op::inverse).collect()
    }

    /// Append another sequence after this one.
    #[must_use]
    pub fn then(mut self, other: &Sequence) -> Self {
        self.0.extend_from_slice(&other.0);
        self
    }

    /// Number of steps.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the sequence has no steps.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the steps in replay order.
    pub fn iter(&self) -> std::slice::Iter<'_, Op> {
        self.0.iter()
    }

    /// Borrow the steps.
    pub fn ops(&self) -> &[Op] {
        &self.0
    }

    /// Number of controlled-NOT steps.
    pub fn cnot_count(&self) -> usize {
        self.0.iter().filter(|op| op.is_cnot()).count()
    }

    /// Distinct qubits touched, in order of first use.
    pub fn qubits(&self) -> Vec<QubitId> {
        let mut seen = Vec::new();
        for q in self.0.iter().flat_map(Op::qubits) {
            if !seen.contains(&q) {
                seen.push(q);
            }
        }
        seen
    }
}

impl From<Vec<Op>> for Sequence {
    fn from(ops: Vec<Op>) -> Self {
        Self(ops)
    }
}

impl FromIterator<Op> for Sequence {
    fn from_iter<I: IntoIterator<Item = Op>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Op;
    type IntoIter = std::slice::Iter<'a, Op>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
