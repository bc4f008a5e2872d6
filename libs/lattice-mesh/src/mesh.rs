//! # Mesh Data
//!
//! Finished mesh buffers: per-vertex attributes plus one index buffer per
//! face group. Built once by [`crate::build`] and read-only afterwards.

use crate::error::{MeshError, MeshResult};
use config::constants::{approx_equal, GlobalConfig};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

// =============================================================================
// SUBMESHES
// =============================================================================

/// Dominant axis of the faces in a submesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceGroup {
    /// Front and back walls
    Z,
    /// Left and right walls
    X,
    /// Top and bottom caps
    Y,
}

impl FaceGroup {
    /// Groups in submesh order.
    pub const ALL: [FaceGroup; 3] = [FaceGroup::Z, FaceGroup::X, FaceGroup::Y];
}

impl fmt::Display for FaceGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FaceGroup::Z => "z-faces",
            FaceGroup::X => "x-faces",
            FaceGroup::Y => "y-faces",
        };
        f.write_str(name)
    }
}

/// Triangles sharing one face group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submesh {
    /// Face group of every triangle in this submesh.
    pub group: FaceGroup,
    /// Flat triangle indices: `[i0, i1, i2, i0, i1, i2, ...]`.
    pub indices: Vec<u32>,
}

impl Submesh {
    /// Number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Iterates the triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }
}

// =============================================================================
// MESH DATA
// =============================================================================

/// A generated lattice mesh.
///
/// `positions`, `normals` and `aux_coords` are parallel arrays indexed by
/// vertex. `aux_coords` holds the un-shaped lattice coordinate of each vertex
/// for per-face texture blending.
///
/// # Example
///
/// ```rust
/// use lattice_mesh::{build, GridDims, MeshConfig};
///
/// let mesh = build(&MeshConfig::new_box(GridDims::new(1, 1, 1))).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshData {
    pub(crate) positions: Vec<Vec3>,
    pub(crate) normals: Vec<Vec3>,
    pub(crate) aux_coords: Vec<[u8; 3]>,
    pub(crate) submeshes: Vec<Submesh>,
}

impl MeshData {
    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles over all submeshes.
    pub fn triangle_count(&self) -> usize {
        self.submeshes.iter().map(Submesh::triangle_count).sum()
    }

    /// Vertex positions.
    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Unit vertex normals.
    #[inline]
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Un-shaped lattice coordinate of each vertex.
    #[inline]
    pub fn aux_coords(&self) -> &[[u8; 3]] {
        &self.aux_coords
    }

    /// Submeshes in face group order (Z, X, Y).
    #[inline]
    pub fn submeshes(&self) -> &[Submesh] {
        &self.submeshes
    }

    /// Returns the submesh for `group`.
    pub fn submesh(&self, group: FaceGroup) -> Option<&Submesh> {
        self.submeshes.iter().find(|s| s.group == group)
    }

    /// Iterates every triangle of every submesh.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.submeshes.iter().flat_map(Submesh::triangles)
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (Vec3, Vec3) {
        let Some((first, rest)) = self.positions.split_first() else {
            return (Vec3::ZERO, Vec3::ZERO);
        };
        rest.iter()
            .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)))
    }

    /// Signed enclosed volume.
    ///
    /// Positive when triangles wind counter-clockwise seen from outside.
    pub fn signed_volume(&self) -> f32 {
        self.triangles()
            .map(|[a, b, c]| {
                let (a, b, c) = (
                    self.positions[a as usize],
                    self.positions[b as usize],
                    self.positions[c as usize],
                );
                a.dot(b.cross(c)) / 6.0
            })
            .sum()
    }

    /// Validates attribute lengths and triangle indices.
    ///
    /// Checks:
    /// - `normals` and `aux_coords` match the vertex count
    /// - All triangle indices are in range
    /// - No triangle repeats a vertex
    /// - Every normal is unit length within the default tolerance
    pub fn validate(&self) -> MeshResult<()> {
        self.validate_with(&GlobalConfig::default())
    }

    /// Validates with the unit-length tolerance taken from `global`.
    pub fn validate_with(&self, global: &GlobalConfig) -> MeshResult<()> {
        let vertex_count = self.positions.len();

        for (attribute, actual) in [
            ("normals", self.normals.len()),
            ("aux_coords", self.aux_coords.len()),
        ] {
            if actual != vertex_count {
                return Err(MeshError::LengthMismatch {
                    attribute,
                    expected: vertex_count,
                    actual,
                });
            }
        }

        for submesh in &self.submeshes {
            for (triangle, indices) in submesh.triangles().enumerate() {
                if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertex_count) {
                    return Err(MeshError::IndexOutOfRange {
                        triangle,
                        index,
                        vertex_count,
                    });
                }
                let [a, b, c] = indices;
                if a == b || b == c || a == c {
                    return Err(MeshError::DegenerateTriangle { triangle, indices });
                }
            }
        }

        for (vertex, normal) in self.normals.iter().enumerate() {
            let length = normal.length();
            if !approx_equal(length, 1.0, global.tolerance) {
                return Err(MeshError::InvalidNormal { vertex, length });
            }
        }

        Ok(())
    }

    /// Checks that the surface is closed and consistently wound.
    ///
    /// Every directed edge must appear exactly once, and its reverse must
    /// appear in some other triangle.
    pub fn check_watertight(&self) -> MeshResult<()> {
        let mut edges = HashSet::with_capacity(self.triangle_count() * 3);
        for [a, b, c] in self.triangles() {
            for (from, to) in [(a, b), (b, c), (c, a)] {
                if !edges.insert((from, to)) {
                    return Err(MeshError::NonManifoldEdge { from, to });
                }
            }
        }

        match edges.iter().find(|(from, to)| !edges.contains(&(*to, *from))) {
            Some(&(from, to)) => Err(MeshError::OpenEdge { from, to }),
            None => Ok(()),
        }
    }

    /// Recomputes normals from triangle adjacency.
    ///
    /// Each vertex gets the normalized sum of the area-weighted normals of the
    /// triangles around it.
    pub(crate) fn recompute_normals(&mut self) {
        let mut normals = vec![Vec3::ZERO; self.positions.len()];

        for [a, b, c] in self.triangles() {
            let v0 = self.positions[a as usize];
            let v1 = self.positions[b as usize];
            let v2 = self.positions[c as usize];
            let normal = (v1 - v0).cross(v2 - v0);

            normals[a as usize] += normal;
            normals[b as usize] += normal;
            normals[c as usize] += normal;
        }

        for normal in &mut normals {
            *normal = normal.normalize_or_zero();
        }

        self.normals = normals;
    }

    /// Exports positions as a flat f32 array for GPU upload.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn positions_f32(&self) -> Vec<f32> {
        self.positions.iter().flat_map(|p| p.to_array()).collect()
    }

    /// Exports normals as a flat f32 array for GPU upload.
    pub fn normals_f32(&self) -> Vec<f32> {
        self.normals.iter().flat_map(|n| n.to_array()).collect()
    }
}
