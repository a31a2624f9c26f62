//! qcat: a catalogue of composite quantum gate decompositions
//!
//! This crate expresses composite operations (square roots of NOT, CNOT and
//! SWAP, their inverses, SWAP itself and the Toffoli gate) as fixed sequences
//! of elementary operations drawn from a small universal set: H, T, T†, the
//! Pauli gates, and CNOT.
//!
//! # Overview
//!
//! The crate never touches quantum state. Every gate is replayed against an
//! abstract [`Device`] that exposes exactly two primitives:
//!
//! - `apply_unitary(qubit, M)` for a 2x2 unitary `M`
//! - `apply_cnot(control, target)`
//!
//! Composite gates are data. [`CompositeGate::sequence`] returns the literal
//! step table; [`CompositeGate::apply`] replays it front to back. Unitaries do
//! not commute, so a table that is reordered is a different gate.
//!
//! # Core Components
//!
//! - **Qubits**: [`QubitId`]
//! - **Matrices**: [`Unitary2x2`]
//! - **Device contract**: [`Device`]
//! - **Elementary gates**: [`ElementaryGate`] and the free functions [`h`],
//!   [`t`], [`t_inv`], [`x`], [`y`], [`z`]
//! - **Sequences**: [`Op`], [`Sequence`]
//! - **Catalogue**: [`CompositeGate`], [`CompositeKind`] and the free
//!   functions [`sqrt_not`], [`sqrt_cnot`], [`swap`], [`sqrt_swap`],
//!   [`ccnot`] and their inverses
//! - **Recording**: [`TraceDevice`]
//!
//! # Example: Recording a Toffoli
//!
//! ```rust
//! use qcat_core::{ccnot, QubitId, TraceDevice};
//!
//! let mut device = TraceDevice::new();
//! ccnot(&mut device, QubitId(0), QubitId(1), QubitId(2)).unwrap();
//!
//! // Six CNOTs and nine single-qubit gates
//! assert_eq!(device.len(), 15);
//! let seq = device.to_sequence().unwrap();
//! assert_eq!(seq.cnot_count(), 6);
//! ```
//!
//! # Errors
//!
//! The catalogue performs no validation. A device error aborts the replay and
//! is returned as-is through `Result<(), D::Error>`.
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `sqrt_not`, `inv_sqrt_not` | 1 | √X and its inverse |
//! | `sqrt_cnot`, `inv_sqrt_cnot` | 2 | √CNOT and its inverse |
//! | `swap` | 2 | SWAP from three CNOTs |
//! | `sqrt_swap`, `inv_sqrt_swap` | 2 | √SWAP and its inverse |
//! | `ccnot` | 3 | Toffoli (CCNOT) gate |

pub mod composite;
pub mod device;
pub mod elementary;
pub mod error;
pub mod qubit;
pub mod sequence;
pub mod trace;
pub mod unitary;

pub use composite::{
    CompositeGate, CompositeKind, ccnot, inv_sqrt_cnot, inv_sqrt_not, inv_sqrt_swap, sqrt_cnot,
    sqrt_not, sqrt_swap, swap,
};
pub use device::Device;
pub use elementary::{ElementaryGate, h, t, t_inv, x, y, z};
pub use error::{CatalogError, CatalogResult};
pub use qubit::QubitId;
pub use sequence::{Op, Sequence};
pub use trace::{TraceDevice, TraceEntry};
pub use unitary::{EPSILON, Unitary2x2};
