//! # Error Types
//!
//! Error types for polyhedron construction and the mesh operators.
//!
//! ## Error Policy
//!
//! - Structural errors (`InvalidFace`, `TopologyMismatch`) abort the pass
//!   and leave the previous polyhedron untouched
//! - Numeric errors (`DegenerateVector`, `InvalidScale`) name the offending
//!   node or value
//! - Nothing is silently repaired

use crate::polyhedron::NodeId;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building or transforming a polyhedron.
///
/// ## Example
///
/// ```rust
/// use hexsphere::{DedupPolicy, GeodesicError, Polyhedron, Vec3};
///
/// let mut poly = Polyhedron::new();
/// let group = poly.new_group();
/// let a = poly.add_node(Vec3::X, group, DedupPolicy::Never);
/// let b = poly.add_node(Vec3::Y, group, DedupPolicy::Never);
///
/// match poly.add_face(a, b, a, group) {
///     Err(GeodesicError::InvalidFace { .. }) => {}
///     other => panic!("expected InvalidFace, got {:?}", other),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeodesicError {
    /// A face was given the same node handle more than once.
    #[error("Invalid face: node handles {nodes:?} are not distinct")]
    InvalidFace {
        /// The rejected (center, prev, next) handles.
        nodes: [NodeId; 3],
    },

    /// A face referenced a node that is not part of the polyhedron.
    #[error("Unknown node: {0:?}")]
    UnknownNode(NodeId),

    /// A node sits at the origin, so it has no direction to project along.
    #[error("Degenerate vector: node {node:?} has zero length")]
    DegenerateVector {
        /// The node that could not be normalized.
        node: NodeId,
    },

    /// A shared edge or vertex could not be resolved to a single identity.
    #[error("Topology mismatch: {message}")]
    TopologyMismatch {
        /// Description of the unresolved edge or vertex.
        message: String,
    },

    /// A radius or scale factor that is not finite and strictly positive.
    #[error("Invalid scale: {value}")]
    InvalidScale {
        /// The rejected value.
        value: f64,
    },

    /// The operator output would exceed the face limit.
    #[error("Too many faces: {count} (max: {max})")]
    TooManyFaces {
        /// Faces the pass would have produced.
        count: usize,
        /// Configured limit.
        max: usize,
    },
}

impl GeodesicError {
    /// Creates a topology mismatch error.
    pub fn topology(message: impl Into<String>) -> Self {
        Self::TopologyMismatch {
            message: message.into(),
        }
    }

    /// Returns true for errors that indicate a broken calling sequence or
    /// dedup policy rather than bad numeric input.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            Self::InvalidFace { .. } | Self::UnknownNode(_) | Self::TopologyMismatch { .. }
        )
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for polyhedron operations.
pub type GeodesicResult<T> = Result<T, GeodesicError>;

/// Validates a radius or scale factor.
pub(crate) fn check_scale(value: f64) -> GeodesicResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(GeodesicError::InvalidScale { value })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages.
    #[test]
    fn test_error_display() {
        let err = GeodesicError::topology("edge shared by 3 faces");
        assert!(err.to_string().contains("Topology mismatch"));
        assert!(err.to_string().contains("3 faces"));

        let err = GeodesicError::TooManyFaces { count: 10, max: 5 };
        assert!(err.to_string().contains("10"));
        assert!(err.to_string().contains("max: 5"));
    }

    #[test]
    fn test_structural_classification() {
        assert!(GeodesicError::topology("x").is_structural());
        assert!(GeodesicError::UnknownNode(NodeId(3)).is_structural());
        assert!(!GeodesicError::InvalidScale { value: 0.0 }.is_structural());
        assert!(!GeodesicError::DegenerateVector { node: NodeId(0) }.is_structural());
    }

    #[test]
    fn test_check_scale() {
        assert_eq!(check_scale(1.5), Ok(1.5));
        assert!(check_scale(0.0).is_err());
        assert!(check_scale(-1.0).is_err());
        assert!(check_scale(f64::NAN).is_err());
        assert!(check_scale(f64::INFINITY).is_err());
    }

    /// Test error types are Send + Sync.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GeodesicError>();
    }
}
