//! # Mesh Builder
//!
//! Generates [`MeshData`] for any [`MeshConfig`].
//!
//! ## Pipeline
//!
//! ```text
//! validate → vertices (perimeter rings, top block, bottom block)
//!          → side quads (ring to ring) → cap quads (top, bottom)
//! ```
//!
//! Every buffer is allocated at its final size from the closed-form counts on
//! [`GridDims`]; the shapes differ only in how a lattice point is shaped.
//!
//! ## Example
//!
//! ```rust
//! use lattice_mesh::{build, FaceGroup, MeshConfig};
//!
//! let mesh = build(&MeshConfig::sphere(2, 1.0)).unwrap();
//! assert_eq!(mesh.vertex_count(), 26);
//! assert_eq!(mesh.submesh(FaceGroup::Y).unwrap().triangle_count(), 16);
//! ```

mod cap;
mod emitter;


pub use emitter::emit_quad;

use crate::error::ConfigurationError;
use crate::lattice::GridDims;
use crate::mesh::{FaceGroup, MeshData};
use crate::params::{MeshConfig, Shape};
use cap::{fill_cap, CapSide};
use emitter::SubmeshWriter;
use glam::Vec3;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Builds the mesh described by `config`.
///
/// Fails only when the configuration is invalid; no partial mesh is ever
/// returned.
///
/// # Example
///
/// ```rust
/// use lattice_mesh::{build, GridDims, MeshConfig};
///
/// let mesh = build(&MeshConfig::rounded_box(GridDims::new(4, 2, 6), 1)).unwrap();
/// assert!(mesh.check_watertight().is_ok());
///
/// assert!(build(&MeshConfig::sphere(4, -1.0)).is_err());
/// ```
pub fn build(config: &MeshConfig) -> Result<MeshData, ConfigurationError> {
    if let Err(err) = config.validate() {
        log::warn!("rejected {} mesh {}: {}", config.shape, config.dims, err);
        return Err(err);
    }

    let mesh = MeshBuilder::new(config.dims, config.shape).build();

    log::debug!(
        "built {} mesh {}: {} vertices, {} triangles",
        config.shape,
        config.dims,
        mesh.vertex_count(),
        mesh.triangle_count()
    );

    Ok(mesh)
}

// =============================================================================
// MESH BUILDER
// =============================================================================

/// Builder over validated dimensions.
struct MeshBuilder {
    dims: GridDims,
    shape: Shape,
}

impl MeshBuilder {
    fn new(dims: GridDims, shape: Shape) -> Self {
        Self { dims, shape }
    }

    fn build(&self) -> MeshData {
        let vertex_count = self.dims.vertex_count();
        let (positions, normals, aux_coords) = self.build_vertices();

        let mut z_faces = SubmeshWriter::new(FaceGroup::Z, self.dims.z_face_quads(), vertex_count);
        let mut x_faces = SubmeshWriter::new(FaceGroup::X, self.dims.x_face_quads(), vertex_count);
        let mut y_faces = SubmeshWriter::new(FaceGroup::Y, self.dims.y_face_quads(), vertex_count);

        self.build_sides(&mut z_faces, &mut x_faces);
        fill_cap(&mut y_faces, &self.dims, CapSide::Top);
        fill_cap(&mut y_faces, &self.dims, CapSide::Bottom);

        MeshData {
            positions,
            normals,
            aux_coords,
            submeshes: vec![z_faces.finish(), x_faces.finish(), y_faces.finish()],
        }
    }

    // =========================================================================
    // VERTICES
    // =========================================================================

    fn build_vertices(&self) -> (Vec<Vec3>, Vec<Vec3>, Vec<[u8; 3]>) {
        let count = self.dims.vertex_count() as usize;
        let mut positions = Vec::with_capacity(count);
        let mut normals = Vec::with_capacity(count);
        let mut aux_coords = Vec::with_capacity(count);

        for coord in self.dims.surface_coords() {
            let shaped = self.shape.shape_vertex(&self.dims, coord);
            positions.push(shaped.position);
            normals.push(shaped.normal);
            aux_coords.push(coord.to_bytes());
        }

        debug_assert_eq!(positions.len(), count);
        (positions, normals, aux_coords)
    }

    // =========================================================================
    // SIDE WALLS
    // =========================================================================

    /// Stitches each ring to the one above it.
    ///
    /// The last quad of a layer wraps back to slot 0 of both rings.
    fn build_sides(&self, z_faces: &mut SubmeshWriter, x_faces: &mut SubmeshWriter) {
        let dims = &self.dims;
        let ring = dims.ring_size();

        for y in 0..dims.y {
            for position in 0..ring {
                let next = (position + 1) % ring;
                let writer = match side_group(dims, position) {
                    FaceGroup::Z => &mut *z_faces,
                    _ => &mut *x_faces,
                };
                writer.quad(
                    dims.ring_vertex(y, position),
                    dims.ring_vertex(y, next),
                    dims.ring_vertex(y + 1, position),
                    dims.ring_vertex(y + 1, next),
                );
            }
        }
    }
}

/// Face group of the side quad starting at ring slot `position`.
fn side_group(dims: &GridDims, position: u32) -> FaceGroup {
    if position < dims.x {
        FaceGroup::Z
    } else if position < dims.x + dims.z {
        FaceGroup::X
    } else if position < 2 * dims.x + dims.z {
        FaceGroup::Z
    } else {
        FaceGroup::X
    }
}
