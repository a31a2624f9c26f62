//! qcat reference devices
//!
//! Two implementations of the [`qcat_core::Device`] contract used to check
//! the catalogue's decompositions:
//!
//! - [`Statevector`]: behavioral. Holds `2^n` amplitudes and applies each
//!   call in place, for basis-state and probability checks.
//! - [`DenseUnitary`]: algebraic. Accumulates the full `2^n × 2^n` operator
//!   a replay implements, for comparison with a canonical target.
//!
//! Both validate their inputs and report [`SimError`] through
//! `Device::Error`: qubit indices out of range, aliased CNOT operands, and
//! (unless disabled in [`SimConfig`]) non-unitary matrices.
//!
//! # Performance
//!
//! | Device | Qubits | Memory |
//! |--------|--------|--------|
//! | `Statevector` | 20 | ~16 MB |
//! | `DenseUnitary` | 8 | ~1 MB |
//!
//! # Example
//!
//! ```rust
//! use qcat_core::{ccnot, h, QubitId};
//! use qcat_sim::Statevector;
//!
//! let mut sv = Statevector::new(3).unwrap();
//! h(&mut sv, QubitId(0)).unwrap();
//! h(&mut sv, QubitId(1)).unwrap();
//! ccnot(&mut sv, QubitId(0), QubitId(1), QubitId(2)).unwrap();
//!
//! // |11⟩ on the controls occurs with probability 1/4 and flips the target
//! assert!((sv.probability(0b111).unwrap() - 0.25).abs() < 1e-10);
//! ```

pub mod config;
pub mod dense;
pub mod error;
mod kernel;
pub mod oracle;
pub mod phase;
pub mod reference;
pub mod statevector;

pub use config::SimConfig;
pub use dense::DenseUnitary;
pub use error::{SimError, SimResult};
pub use oracle::{composite_unitary, implements, sequence_unitary};
pub use phase::{equal_up_to_global_phase, global_phase_between};
pub use statevector::Statevector;
