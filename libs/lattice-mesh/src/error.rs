//! # Mesh Errors
//!
//! Error types for mesh configuration and mesh validation.
//!
//! ## Error Policy
//!
//! - Configuration is validated before any buffer is allocated
//! - A rejected configuration produces no mesh at all
//! - Generation itself has no error path; index mismatches are algorithm
//!   defects caught by `debug_assert!`

use crate::lattice::Axis;
use thiserror::Error;

// =============================================================================
// CONFIGURATION ERRORS
// =============================================================================

/// Errors raised while validating a mesh or deformer configuration.
///
/// Each variant names the offending parameter and the violated constraint.
///
/// ## Example
///
/// ```rust
/// use lattice_mesh::{build, ConfigurationError, GridDims, MeshConfig};
///
/// let config = MeshConfig::rounded_box(GridDims::new(4, 4, 2), 2);
/// match build(&config) {
///     Err(ConfigurationError::RoundnessTooLarge { roundness, max }) => {
///         assert_eq!((roundness, max), (2, 1));
///     }
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    /// Axis size below the minimum of one cell.
    #[error("{axis} size must be at least {min}: {value}")]
    AxisTooSmall {
        /// Offending axis
        axis: Axis,
        /// Requested size
        value: u32,
        /// Smallest accepted size
        min: u32,
    },

    /// Axis size too large for the byte-wide auxiliary coordinate.
    #[error("{axis} size must be at most {max}: {value}")]
    AxisTooLarge {
        /// Offending axis
        axis: Axis,
        /// Requested size
        value: u32,
        /// Largest accepted size
        max: u32,
    },

    /// Roundness exceeds half of the smallest axis size.
    #[error("roundness must be at most floor(min(size) / 2) = {max}: {roundness}")]
    RoundnessTooLarge {
        /// Requested roundness
        roundness: u32,
        /// Largest accepted roundness for the given dimensions
        max: u32,
    },

    /// Sphere radius is zero, negative or not finite.
    #[error("sphere radius must be positive and finite: {0}")]
    InvalidRadius(f32),

    /// Deformer parameter outside its valid range.
    #[error("deformer {parameter} is invalid: {value}")]
    InvalidDeformer {
        /// Name of the offending setting
        parameter: &'static str,
        /// Supplied value
        value: f32,
    },
}

// =============================================================================
// MESH ERRORS
// =============================================================================

/// Errors reported when validating finished mesh data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Configuration was rejected before generation.
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// A triangle references a vertex past the end of the vertex buffer.
    #[error("Triangle {triangle} references vertex {index} (vertex count {vertex_count})")]
    IndexOutOfRange {
        /// Triangle position within its submesh
        triangle: usize,
        /// Offending vertex index
        index: u32,
        /// Number of vertices in the mesh
        vertex_count: usize,
    },

    /// A triangle repeats a vertex.
    #[error("Triangle {triangle} is degenerate: {indices:?}")]
    DegenerateTriangle {
        /// Triangle position within its submesh
        triangle: usize,
        /// The triangle's vertex indices
        indices: [u32; 3],
    },

    /// Per-vertex attribute buffers disagree in length.
    #[error("Attribute '{attribute}' has {actual} entries, expected {expected}")]
    LengthMismatch {
        /// Attribute name
        attribute: &'static str,
        /// Expected entry count
        expected: usize,
        /// Actual entry count
        actual: usize,
    },

    /// A vertex normal is not unit length.
    #[error("Normal of vertex {vertex} has length {length}")]
    InvalidNormal {
        /// Vertex index
        vertex: usize,
        /// Measured length
        length: f32,
    },

    /// A directed edge has no matching reverse edge.
    #[error("Mesh is not watertight: edge {from} -> {to} has no opposite")]
    OpenEdge {
        /// Edge start vertex
        from: u32,
        /// Edge end vertex
        to: u32,
    },

    /// The same directed edge is used by more than one triangle.
    #[error("Edge {from} -> {to} is shared by more than two triangles or wound inconsistently")]
    NonManifoldEdge {
        /// Edge start vertex
        from: u32,
        /// Edge end vertex
        to: u32,
    },
}

/// Result type alias for mesh validation.
pub type MeshResult<T> = Result<T, MeshError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_parameter() {
        let err = ConfigurationError::AxisTooSmall {
            axis: Axis::Y,
            value: 0,
            min: 1,
        };
        let message = err.to_string();
        assert!(message.contains('y'));
        assert!(message.contains("at least 1"));

        let err = ConfigurationError::InvalidDeformer {
            parameter: "damping",
            value: -1.0,
        };
        assert!(err.to_string().contains("damping"));
    }

    #[test]
    fn test_configuration_error_converts() {
        let err: MeshError = ConfigurationError::InvalidRadius(0.0).into();
        assert!(matches!(err, MeshError::Configuration(_)));
        assert!(err.to_string().contains("radius"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ConfigurationError>();
        assert_send_sync::<MeshError>();
    }
}
