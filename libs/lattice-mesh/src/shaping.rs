//! # Vertex Shaping
//!
//! Maps a surface lattice coordinate to its final position and normal.
//!
//! | Shape | Position | Normal |
//! |-------|----------|--------|
//! | Box | lattice coordinate | outward boundary direction |
//! | Rounded box | `inner + normal * r` | `normalize(lattice - inner)` |
//! | Sphere | `s * radius` | `s`, the cube-to-sphere warp |
//!
//! The auxiliary coordinate never goes through shaping; it is taken from the
//! raw lattice point by the builder.

use crate::lattice::{Axis, GridDims, LatticeCoord};
use crate::params::Shape;
use glam::Vec3;

/// Position and normal of one shaped vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapedVertex {
    pub position: Vec3,
    pub normal: Vec3,
}

impl Shape {
    /// Shapes one surface lattice coordinate.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lattice_mesh::{GridDims, LatticeCoord, Shape};
    /// use glam::Vec3;
    ///
    /// let dims = GridDims::uniform(2);
    /// let top = Shape::Sphere { radius: 3.0 }.shape_vertex(&dims, LatticeCoord::new(1, 2, 1));
    /// assert_eq!(top.normal, Vec3::Y);
    /// assert_eq!(top.position, Vec3::new(0.0, 3.0, 0.0));
    /// ```
    pub fn shape_vertex(&self, dims: &GridDims, coord: LatticeCoord) -> ShapedVertex {
        match *self {
            Shape::Box => box_vertex(dims, coord),
            Shape::RoundedBox { roundness } => rounded_vertex(dims, coord, roundness),
            Shape::Sphere { radius } => sphere_vertex(dims, coord, radius),
        }
    }
}

#[inline]
fn lattice_point(coord: LatticeCoord) -> Vec3 {
    Vec3::new(coord.x as f32, coord.y as f32, coord.z as f32)
}

/// Unit vector pointing out of every box boundary the coordinate touches.
///
/// Faces give an axis, edges a face diagonal, corners a cube diagonal.
pub fn boundary_normal(dims: &GridDims, coord: LatticeCoord) -> Vec3 {
    let mut direction = Vec3::ZERO;
    for axis in Axis::ALL {
        let value = coord.get(axis);
        if value == 0 {
            direction[axis.index()] = -1.0;
        } else if value == dims.get(axis) {
            direction[axis.index()] = 1.0;
        }
    }
    debug_assert!(direction != Vec3::ZERO, "{coord:?} is not on the surface");
    direction.normalize_or_zero()
}

fn box_vertex(dims: &GridDims, coord: LatticeCoord) -> ShapedVertex {
    ShapedVertex {
        position: lattice_point(coord),
        normal: boundary_normal(dims, coord),
    }
}

fn rounded_vertex(dims: &GridDims, coord: LatticeCoord, roundness: u32) -> ShapedVertex {
    let r = roundness as f32;
    let point = lattice_point(coord);
    let size = Vec3::new(dims.x as f32, dims.y as f32, dims.z as f32);
    let inner = point.clamp(Vec3::splat(r), size - r);

    // Zero roundness leaves the point on its own anchor
    let normal = (point - inner)
        .try_normalize()
        .unwrap_or_else(|| boundary_normal(dims, coord));

    ShapedVertex {
        position: inner + normal * r,
        normal,
    }
}

fn sphere_vertex(dims: &GridDims, coord: LatticeCoord, radius: f32) -> ShapedVertex {
    let size = Vec3::new(dims.x as f32, dims.y as f32, dims.z as f32);
    let v = lattice_point(coord) * 2.0 / size - Vec3::ONE;
    let s = cube_to_sphere(v);

    ShapedVertex {
        position: s * radius,
        normal: s,
    }
}

/// Warps a point on the surface of the `[-1, 1]` cube onto the unit sphere.
///
/// Spreads vertices more evenly than plain normalization, which bunches them
/// toward the face centers.
pub fn cube_to_sphere(v: Vec3) -> Vec3 {
    let x2 = v.x * v.x;
    let y2 = v.y * v.y;
    let z2 = v.z * v.z;

    Vec3::new(
        v.x * (1.0 - y2 / 2.0 - z2 / 2.0 + y2 * z2 / 3.0).sqrt(),
        v.y * (1.0 - x2 / 2.0 - z2 / 2.0 + x2 * z2 / 3.0).sqrt(),
        v.z * (1.0 - x2 / 2.0 - y2 / 2.0 + x2 * y2 / 3.0).sqrt(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_box_is_identity() {
        let dims = GridDims::new(3, 2, 4);
        let shaped = Shape::Box.shape_vertex(&dims, LatticeCoord::new(3, 1, 2));
        assert_eq!(shaped.position, Vec3::new(3.0, 1.0, 2.0));
        assert_eq!(shaped.normal, Vec3::X);
    }

    #[test]
    fn test_boundary_normal_corner_and_edge() {
        let dims = GridDims::new(2, 2, 2);
        let corner = boundary_normal(&dims, LatticeCoord::new(0, 2, 0));
        assert_abs_diff_eq!(corner.length(), 1.0, epsilon = 1e-6);
        assert!(corner.x < 0.0 && corner.y > 0.0 && corner.z < 0.0);

        let edge = boundary_normal(&dims, LatticeCoord::new(2, 1, 2));
        assert_abs_diff_eq!(edge.x, std::f32::consts::FRAC_1_SQRT_2, epsilon = 1e-6);
        assert_eq!(edge.y, 0.0);
    }

    #[test]
    fn test_rounded_face_center_is_flat() {
        let dims = GridDims::uniform(4);
        let shaped = Shape::RoundedBox { roundness: 1 }.shape_vertex(&dims, LatticeCoord::new(2, 2, 0));
        assert_eq!(shaped.normal, Vec3::NEG_Z);
        assert_eq!(shaped.position, Vec3::new(2.0, 2.0, 0.0));
    }

    #[test]
    fn test_rounded_corner_offset() {
        let dims = GridDims::uniform(4);
        let shaped = Shape::RoundedBox { roundness: 1 }.shape_vertex(&dims, LatticeCoord::new(4, 4, 4));
        let inner = Vec3::splat(3.0);
        assert_abs_diff_eq!((shaped.position - inner).length(), 1.0, epsilon = 1e-6);
        assert!(shaped.normal.x > 0.0 && shaped.normal.y > 0.0 && shaped.normal.z > 0.0);
    }

    #[test]
    fn test_rounded_zero_roundness_matches_box() {
        let dims = GridDims::new(2, 3, 2);
        for coord in dims.surface_coords() {
            let rounded = Shape::RoundedBox { roundness: 0 }.shape_vertex(&dims, coord);
            let flat = Shape::Box.shape_vertex(&dims, coord);
            assert_eq!(rounded, flat);
        }
    }

    #[test]
    fn test_cube_to_sphere_is_unit_length() {
        for v in [
            Vec3::ONE,
            Vec3::new(1.0, 0.3, -0.7),
            Vec3::new(-0.2, -1.0, 0.9),
            Vec3::new(0.0, 0.0, 1.0),
        ] {
            assert_abs_diff_eq!(cube_to_sphere(v).length(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_sphere_face_centers_are_cardinal() {
        let dims = GridDims::uniform(4);
        let shape = Shape::Sphere { radius: 2.0 };
        let front = shape.shape_vertex(&dims, LatticeCoord::new(2, 2, 0));
        assert_eq!(front.normal, Vec3::NEG_Z);
        assert_eq!(front.position, Vec3::new(0.0, 0.0, -2.0));
    }
}
