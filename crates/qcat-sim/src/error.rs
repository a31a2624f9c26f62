//! Error types for the reference devices.

use qcat_core::QubitId;
use thiserror::Error;

/// Errors reported by the simulated devices.
///
/// The catalogue never raises these itself; they surface through
/// `Device::Error` when a replay addresses the device incorrectly.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// A qubit index is not below the register width.
    #[error("Qubit {qubit} out of range for a {num_qubits}-qubit register")]
    QubitOutOfRange {
        /// The offending qubit.
        qubit: QubitId,
        /// Register width.
        num_qubits: usize,
    },

    /// The same qubit was passed twice to a multi-qubit operation.
    #[error("Duplicate qubit {qubit} in operation")]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: QubitId,
    },

    /// A matrix handed to `apply_unitary` is not unitary.
    #[error("Non-unitary matrix applied to qubit {qubit}")]
    NonUnitary {
        /// The qubit the matrix was applied to.
        qubit: QubitId,
    },

    /// The register is wider than the configured limit.
    #[error("{requested} qubits requested, limit is {max}")]
    TooManyQubits {
        /// Requested register width.
        requested: usize,
        /// Configured maximum.
        max: usize,
    },

    /// A basis state index does not fit in the register.
    #[error("Basis state {index} out of range for dimension {dim}")]
    BasisStateOutOfRange {
        /// The offending index.
        index: usize,
        /// Hilbert space dimension.
        dim: usize,
    },

    /// Configuration values are unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration could not be parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for simulator operations.
pub type SimResult<T> = Result<T, SimError>;
