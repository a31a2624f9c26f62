//! The elementary gate set: H, T, T†, X, Y and Z.
//!
//! Each gate is exactly one `apply_unitary` call with a literal matrix.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::device::Device;
use crate::error::CatalogError;
use crate::qubit::QubitId;
use crate::unitary::Unitary2x2;

/// A fixed single-qubit gate from the elementary set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementaryGate {
    /// Hadamard gate. Self-inverse.
    H,
    /// Phase rotation by +π/4.
    T,
    /// Phase rotation by -π/4, the exact inverse of `T`.
    Tdg,
    /// Pauli-X (NOT) gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
}

impl ElementaryGate {
    /// Every elementary gate, in declaration order.
    pub const ALL: [ElementaryGate; 6] = [
        ElementaryGate::H,
        ElementaryGate::T,
        ElementaryGate::Tdg,
        ElementaryGate::X,
        ElementaryGate::Y,
        ElementaryGate::Z,
    ];

    /// Get the name of this gate.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            ElementaryGate::H => "h",
            ElementaryGate::T => "t",
            ElementaryGate::Tdg => "tdg",
            ElementaryGate::X => "x",
            ElementaryGate::Y => "y",
            ElementaryGate::Z => "z",
        }
    }

    /// The literal matrix this gate hands to the device.
    pub fn matrix(self) -> Unitary2x2 {
        match self {
            ElementaryGate::H => Unitary2x2::h(),
            ElementaryGate::T => Unitary2x2::t(),
            ElementaryGate::Tdg => Unitary2x2::tdg(),
            ElementaryGate::X => Unitary2x2::x(),
            ElementaryGate::Y => Unitary2x2::y(),
            ElementaryGate::Z => Unitary2x2::z(),
        }
    }

    /// The gate whose matrix is the conjugate transpose of this one.
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            ElementaryGate::T => ElementaryGate::Tdg,
            ElementaryGate::Tdg => ElementaryGate::T,
            other => other,
        }
    }

    /// Apply this gate to `qubit`.
    pub fn apply<D: Device + ?Sized>(self, device: &mut D, qubit: QubitId) -> Result<(), D::Error> {
        device.apply_unitary(qubit, &self.matrix())
    }

    /// Find the elementary gate whose matrix equals `matrix` within `tol`.
    pub fn identify(matrix: &Unitary2x2, tol: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|g| g.matrix().approx_eq(matrix, tol))
    }
}

impl fmt::Display for ElementaryGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementaryGate {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|g| g.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CatalogError::UnknownGate(s.to_string()))
    }
}

/// Apply a Hadamard gate.
pub fn h<D: Device + ?Sized>(device: &mut D, qubit: QubitId) -> Result<(), D::Error> {
    ElementaryGate::H.apply(device, qubit)
}

/// Apply a phase rotation by +π/4.
pub fn t<D: Device + ?Sized>(device: &mut D, qubit: QubitId) -> Result<(), D::Error> {
    ElementaryGate::T.apply(device, qubit)
}

/// Apply a phase rotation by -π/4.
pub fn t_inv<D: Device + ?Sized>(device: &mut D, qubit: QubitId) -> Result<(), D::Error> {
    ElementaryGate::Tdg.apply(device, qubit)
}

/// Apply a NOT gate.
pub fn x<D: Device + ?Sized>(device: &mut D, qubit: QubitId) -> Result<(), D::Error> {
    ElementaryGate::X.apply(device, qubit)
}

/// Apply a Pauli-Y gate.
pub fn y<D: Device + ?Sized>(device: &mut D, qubit: QubitId) -> Result<(), D::Error> {
    ElementaryGate::Y.apply(device, qubit)
}

/// Apply a Pauli-Z gate.
pub fn z<D: Device + ?Sized>(device: &mut D, qubit: QubitId) -> Result<(), D::Error> {
    ElementaryGate::Z.apply(device, qubit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::{TraceDevice, TraceEntry};
    use crate::unitary::EPSILON;

    #[test]
    fn test_each_gate_is_one_unitary_call() {
        type GateFn = fn(&mut TraceDevice, QubitId) -> Result<(), std::convert::Infallible>;
        let fns: [GateFn; 6] = [
            h::<TraceDevice>,
            t::<TraceDevice>,
            t_inv::<TraceDevice>,
            x::<TraceDevice>,
            y::<TraceDevice>,
            z::<TraceDevice>,
        ];
        for (gate, f) in ElementaryGate::ALL.into_iter().zip(fns) {
            let mut dev = TraceDevice::new();
            f(&mut dev, QubitId(3)).unwrap();
            assert_eq!(dev.len(), 1, "{gate}");
            match &dev.entries()[0] {
                TraceEntry::Unitary { qubit, matrix } => {
                    assert_eq!(*qubit, QubitId(3));
                    assert!(matrix.approx_eq(&gate.matrix(), EPSILON));
                }
                other => panic!("expected a unitary call for {gate}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_inverse_matches_dagger() {
        for gate in ElementaryGate::ALL {
            let inv = gate.inverse().matrix();
            assert!(inv.approx_eq(&gate.matrix().dagger(), EPSILON), "{gate}");
            assert_eq!(gate.inverse().inverse(), gate);
        }
    }

    #[test]
    fn test_identify_round_trips() {
        for gate in ElementaryGate::ALL {
            assert_eq!(ElementaryGate::identify(&gate.matrix(), EPSILON), Some(gate));
        }
        assert_eq!(ElementaryGate::identify(&Unitary2x2::identity(), EPSILON), None);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("tdg".parse::<ElementaryGate>(), Ok(ElementaryGate::Tdg));
        assert_eq!("H".parse::<ElementaryGate>(), Ok(ElementaryGate::H));
        assert_eq!(
            "cx".parse::<ElementaryGate>(),
            Err(CatalogError::UnknownGate("cx".into()))
        );
    }
}
