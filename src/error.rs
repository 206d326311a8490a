//! Error types for the lattice builder

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::lattice::Axis;

/// Main error type for lattice operations
#[derive(Error, Debug)]
pub enum LatticeError {
    #[error("Grid line '{source_id}' is neither horizontal nor vertical: ({start_x}, {start_y}) -> ({end_x}, {end_y})")]
    MalformedGridLine {
        source_id: String,
        start_x: f64,
        start_y: f64,
        end_x: f64,
        end_y: f64,
    },

    #[error("Member '{source_id}' is not aligned with the X or Y axis: direction ({dx}, {dy}, {dz})")]
    OrientationUnsupported {
        source_id: String,
        dx: f64,
        dy: f64,
        dz: f64,
    },

    #[error("Member '{source_id}': {axis} coordinate {value} is not on any grid or level")]
    CoordinateLookupFailed {
        source_id: String,
        axis: Axis,
        value: f64,
    },

    #[error("Member '{0}' cannot be resolved: lattice is empty")]
    EmptyLattice(String),

    #[error("Member '{source_id}' is missing its {missing}")]
    MissingGeometry {
        source_id: String,
        missing: &'static str,
    },

    #[error("Wall '{0}' cannot be numbered: element tags are exhausted")]
    ElementTagExhausted(String),

    #[error("{axis} axis has {len} coordinates, tags can hold at most {max}")]
    TagOverflow { axis: Axis, len: usize, max: usize },

    #[error("Duplicate member id '{0}'")]
    DuplicateMember(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl LatticeError {
    /// Identifier of the record the error refers to, if it is a per-record error
    pub fn source_id(&self) -> Option<&str> {
        match self {
            Self::MalformedGridLine { source_id, .. }
            | Self::OrientationUnsupported { source_id, .. }
            | Self::CoordinateLookupFailed { source_id, .. }
            | Self::MissingGeometry { source_id, .. } => Some(source_id),
            Self::EmptyLattice(source_id) | Self::ElementTagExhausted(source_id) => Some(source_id),
            _ => None,
        }
    }

    /// Reason code for per-record errors; `None` for errors that abort a build
    pub fn reason(&self) -> Option<ErrorReason> {
        match self {
            Self::MalformedGridLine { .. } => Some(ErrorReason::MalformedGrid),
            Self::OrientationUnsupported { .. } => Some(ErrorReason::OrientationUnsupported),
            Self::CoordinateLookupFailed { .. } => Some(ErrorReason::LookupFailed),
            Self::EmptyLattice(_) => Some(ErrorReason::EmptyLattice),
            Self::MissingGeometry { .. } => Some(ErrorReason::MissingGeometry),
            Self::ElementTagExhausted(_) => Some(ErrorReason::ElementTagExhausted),
            _ => None,
        }
    }
}

/// Serialisable reason attached to an error entry in the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorReason {
    MalformedGrid,
    OrientationUnsupported,
    LookupFailed,
    EmptyLattice,
    MissingGeometry,
    ElementTagExhausted,
}

/// Result type for lattice operations
pub type LatticeResult<T> = Result<T, LatticeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_mapping() {
        let err = LatticeError::CoordinateLookupFailed {
            source_id: "B1".to_string(),
            axis: Axis::X,
            value: 5000.02,
        };
        assert_eq!(err.reason(), Some(ErrorReason::LookupFailed));
        assert_eq!(err.source_id(), Some("B1"));

        let exhausted = LatticeError::ElementTagExhausted("W9".to_string());
        assert_eq!(exhausted.reason(), Some(ErrorReason::ElementTagExhausted));
        assert_eq!(exhausted.source_id(), Some("W9"));

        let overflow = LatticeError::TagOverflow { axis: Axis::Y, len: 1000, max: 999 };
        assert_eq!(overflow.reason(), None);
        assert_eq!(overflow.source_id(), None);
    }

    #[test]
    fn test_error_message_names_axis() {
        let err = LatticeError::CoordinateLookupFailed {
            source_id: "C7".to_string(),
            axis: Axis::Z,
            value: 3100.0,
        };
        assert_eq!(
            err.to_string(),
            "Member 'C7': Z coordinate 3100 is not on any grid or level"
        );
    }
}
