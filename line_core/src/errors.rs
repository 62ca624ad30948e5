//! # Error Types
//!
//! Structured error types for line_core. Every variant carries enough
//! context to render a precise user-facing message without re-deriving
//! which check failed or which phase was at fault.
//!
//! ## Example
//!
//! ```rust
//! use line_core::errors::{CalcError, CalcResult};
//!
//! fn validate_circuits(count: u32) -> CalcResult<()> {
//!     if count != 1 && count != 2 {
//!         return Err(CalcError::InvalidCircuitCount { count });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for line_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Coordinate axis named by envelope violations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Horizontal => write!(f, "horizontal"),
            Axis::Vertical => write!(f, "vertical"),
        }
    }
}

/// Structured error type for line parameter calculations.
///
/// The set of variants is closed: every failure mode of the
/// validate -> geometry -> parameters pipeline maps to exactly one case.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Tower identifier does not resolve in the catalog
    #[error("Unknown tower type: '{name}'")]
    UnknownTower { name: String },

    /// Conductor identifier does not resolve in the catalog
    #[error("Unknown conductor type: '{name}'")]
    UnknownConductor { name: String },

    /// Circuit count outside {1, 2}
    #[error("Invalid number of circuits: {count} (must be 1 or 2)")]
    InvalidCircuitCount { count: u32 },

    /// Coordinate count does not match 3 points per circuit
    #[error("Layout mismatch: expected {expected} phase points, got {actual}")]
    LayoutMismatch { expected: usize, actual: usize },

    /// Bundle sub-conductor count outside the tower's permitted range
    #[error("Bundle of {count} conductors exceeds maximum of {max} for {tower} tower")]
    BundleTooLarge { count: u32, max: u32, tower: String },

    /// A phase coordinate falls outside the tower's geometric envelope
    #[error("{phase}: {axis} offset {value_m} m outside permitted range [{min_m}, {max_m}] m")]
    GeometryOutOfEnvelope {
        phase: String,
        axis: Axis,
        value_m: f64,
        min_m: f64,
        max_m: f64,
    },

    /// Degenerate geometry that would feed a logarithm or geometric mean
    /// a zero or negative argument
    #[error("Invalid geometry: {reason}")]
    InvalidGeometry { reason: String },
}

impl CalcError {
    /// Create an UnknownTower error
    pub fn unknown_tower(name: impl Into<String>) -> Self {
        CalcError::UnknownTower { name: name.into() }
    }

    /// Create an UnknownConductor error
    pub fn unknown_conductor(name: impl Into<String>) -> Self {
        CalcError::UnknownConductor { name: name.into() }
    }

    /// Create an InvalidGeometry error
    pub fn invalid_geometry(reason: impl Into<String>) -> Self {
        CalcError::InvalidGeometry {
            reason: reason.into(),
        }
    }

    /// Create a GeometryOutOfEnvelope error
    pub fn out_of_envelope(
        phase: impl Into<String>,
        axis: Axis,
        value_m: f64,
        min_m: f64,
        max_m: f64,
    ) -> Self {
        CalcError::GeometryOutOfEnvelope {
            phase: phase.into(),
            axis,
            value_m,
            min_m,
            max_m,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::UnknownTower { .. } => "UNKNOWN_TOWER",
            CalcError::UnknownConductor { .. } => "UNKNOWN_CONDUCTOR",
            CalcError::InvalidCircuitCount { .. } => "INVALID_CIRCUIT_COUNT",
            CalcError::LayoutMismatch { .. } => "LAYOUT_MISMATCH",
            CalcError::BundleTooLarge { .. } => "BUNDLE_TOO_LARGE",
            CalcError::GeometryOutOfEnvelope { .. } => "GEOMETRY_OUT_OF_ENVELOPE",
            CalcError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::out_of_envelope("phase 1, circuit 1", Axis::Vertical, 50.0, 23.0, 39.0);
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::unknown_tower("Type-9").error_code(), "UNKNOWN_TOWER");
        assert_eq!(
            CalcError::invalid_geometry("coincident points").error_code(),
            "INVALID_GEOMETRY"
        );
    }

    #[test]
    fn test_envelope_message_names_phase_and_axis() {
        let error = CalcError::out_of_envelope("phase 2, circuit 1", Axis::Horizontal, 12.0, 9.4, 11.5);
        let message = error.to_string();
        assert!(message.contains("phase 2, circuit 1"));
        assert!(message.contains("horizontal"));
        assert!(message.contains("9.4"));
    }
}
