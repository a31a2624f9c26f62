//! Simulator configuration.

use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

/// Hard ceiling on `max_statevector_qubits`: 2^34 amplitudes.
pub const STATEVECTOR_QUBIT_CEILING: usize = 34;

/// Hard ceiling on `max_dense_qubits`: a 2^17 × 2^17 matrix.
pub const DENSE_QUBIT_CEILING: usize = 17;

/// Settings shared by [`Statevector`](crate::Statevector) and
/// [`DenseUnitary`](crate::DenseUnitary).
///
/// Missing fields take their default when deserializing:
///
/// ```rust
/// use qcat_sim::SimConfig;
///
/// let cfg = SimConfig::from_json(r#"{ "tolerance": 1e-8 }"#).unwrap();
/// assert_eq!(cfg.tolerance, 1e-8);
/// assert!(cfg.check_unitary);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Absolute tolerance for unitarity and phase-equivalence checks.
    pub tolerance: f64,
    /// Reject non-unitary matrices in `apply_unitary`.
    pub check_unitary: bool,
    /// Largest register a [`Statevector`](crate::Statevector) may allocate.
    pub max_statevector_qubits: usize,
    /// Largest register a [`DenseUnitary`](crate::DenseUnitary) may allocate.
    pub max_dense_qubits: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-10,
            check_unitary: true,
            max_statevector_qubits: 20,
            max_dense_qubits: 8,
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> SimResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> SimResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Set the comparison tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Enable or disable the unitarity check.
    #[must_use]
    pub fn with_check_unitary(mut self, check: bool) -> Self {
        self.check_unitary = check;
        self
    }

    /// Check that the values are usable.
    pub fn validate(&self) -> SimResult<()> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "tolerance must be positive and finite, got {}",
                self.tolerance
            )));
        }
        if self.max_statevector_qubits > STATEVECTOR_QUBIT_CEILING {
            return Err(SimError::InvalidConfig(format!(
                "max_statevector_qubits must be at most {STATEVECTOR_QUBIT_CEILING}, got {}",
                self.max_statevector_qubits
            )));
        }
        if self.max_dense_qubits > DENSE_QUBIT_CEILING {
            return Err(SimError::InvalidConfig(format!(
                "max_dense_qubits must be at most {DENSE_QUBIT_CEILING}, got {}",
                self.max_dense_qubits
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.tolerance, 1e-10);
        assert!(cfg.check_unitary);
        assert_eq!(cfg.max_statevector_qubits, 20);
        assert_eq!(cfg.max_dense_qubits, 8);
    }

    #[test]
    fn test_json_round_trip() {
        let cfg = SimConfig::default()
            .with_tolerance(1e-6)
            .with_check_unitary(false);
        let json = cfg.to_json().unwrap();
        assert_eq!(SimConfig::from_json(&json).unwrap(), cfg);
    }

    #[test]
    fn test_rejects_bad_tolerance() {
        assert!(matches!(
            SimConfig::from_json(r#"{ "tolerance": -1.0 }"#),
            Err(SimError::InvalidConfig(_))
        ));
        assert!(matches!(
            SimConfig::from_json("{ not json"),
            Err(SimError::Config(_))
        ));
    }

    #[test]
    fn test_rejects_unallocatable_widths() {
        assert!(matches!(
            SimConfig::from_json(r#"{ "max_statevector_qubits": 80 }"#),
            Err(SimError::InvalidConfig(_))
        ));
        assert!(matches!(
            SimConfig::from_json(r#"{ "max_dense_qubits": 80 }"#),
            Err(SimError::InvalidConfig(_))
        ));

        let at_ceiling = format!(
            r#"{{ "max_statevector_qubits": {STATEVECTOR_QUBIT_CEILING}, "max_dense_qubits": {DENSE_QUBIT_CEILING} }}"#
        );
        assert!(SimConfig::from_json(&at_ceiling).is_ok());
    }
}
