//! Error types for the catalogue's lookup surfaces.
//!
//! Replaying a gate never fails on its own account: every failure there
//! comes from the device. These errors only cover turning names and operand
//! lists into catalogue entries.

use thiserror::Error;

/// Errors raised while resolving gates by name.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    /// No gate with this name exists in the catalogue.
    #[error("Unknown gate '{0}'")]
    UnknownGate(String),

    /// Wrong number of qubit operands for a gate.
    #[error("Gate '{gate}' requires {expected} qubits, got {got}")]
    ArityMismatch {
        /// Name of the gate.
        gate: &'static str,
        /// Expected number of qubits.
        expected: usize,
        /// Actual number of qubits provided.
        got: usize,
    },
}

/// Result type for catalogue lookups.
pub type CatalogResult<T> = Result<T, CatalogError>;
