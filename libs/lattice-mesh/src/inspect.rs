//! # Inspection
//!
//! Read-only per-vertex markers for visual debugging: a point at every vertex
//! and a ray along its normal.

use crate::mesh::MeshData;
use config::constants::DEFAULT_MARKER_RADIUS;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Marker for one vertex.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DebugMarker {
    pub position: Vec3,
    /// `position + normal * ray_length`.
    pub ray_end: Vec3,
    pub radius: f32,
}

/// One marker per vertex, in vertex order.
///
/// # Example
///
/// ```rust
/// use lattice_mesh::{build, debug_markers, GridDims, MeshConfig};
///
/// let mesh = build(&MeshConfig::new_box(GridDims::uniform(1))).unwrap();
/// let markers = debug_markers(&mesh, 0.5);
/// assert_eq!(markers.len(), 8);
/// ```
pub fn debug_markers(mesh: &MeshData, ray_length: f32) -> Vec<DebugMarker> {
    mesh.positions()
        .iter()
        .zip(mesh.normals())
        .map(|(&position, &normal)| DebugMarker {
            position,
            ray_end: position + normal * ray_length,
            radius: DEFAULT_MARKER_RADIUS,
        })
        .collect()
}
