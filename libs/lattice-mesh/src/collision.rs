//! # Collision Shapes
//!
//! Primitive colliders approximating each generated shape, in the same space
//! as the mesh positions. Only the descriptions are produced; attaching them to
//! a physics world is up to the caller.
//!
//! A rounded box is covered by three slabs (one per axis, full length along
//! that axis and shrunk by the rounding on the other two) plus a capsule along
//! each of the twelve cube edges.

use crate::error::ConfigurationError;
use crate::lattice::{Axis, GridDims};
use crate::params::{MeshConfig, Shape};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// One primitive collider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CollisionShape {
    Box {
        center: Vec3,
        size: Vec3,
    },
    /// Capsule whose segment runs along `axis`; `height` includes both caps.
    Capsule {
        center: Vec3,
        axis: Axis,
        radius: f32,
        height: f32,
    },
    Sphere {
        center: Vec3,
        radius: f32,
    },
}

/// Derives the colliders for `config`.
///
/// # Example
///
/// ```rust
/// use lattice_mesh::{collision_shapes, CollisionShape, GridDims, MeshConfig};
///
/// let shapes = collision_shapes(&MeshConfig::rounded_box(GridDims::uniform(4), 1)).unwrap();
/// assert_eq!(shapes.len(), 15);
/// assert!(matches!(shapes[0], CollisionShape::Box { .. }));
/// ```
pub fn collision_shapes(config: &MeshConfig) -> Result<Vec<CollisionShape>, ConfigurationError> {
    config.validate()?;

    let shapes = match config.shape {
        Shape::Box | Shape::RoundedBox { roundness: 0 } => vec![CollisionShape::Box {
            center: half_size(&config.dims),
            size: size(&config.dims),
        }],
        Shape::RoundedBox { roundness } => rounded_box(&config.dims, roundness as f32),
        Shape::Sphere { radius } => vec![CollisionShape::Sphere {
            center: Vec3::ZERO,
            radius,
        }],
    };

    Ok(shapes)
}

fn size(dims: &GridDims) -> Vec3 {
    Vec3::new(dims.x as f32, dims.y as f32, dims.z as f32)
}

fn half_size(dims: &GridDims) -> Vec3 {
    size(dims) * 0.5
}

fn rounded_box(dims: &GridDims, roundness: f32) -> Vec<CollisionShape> {
    let size = size(dims);
    let center = half_size(dims);
    let mut shapes = Vec::with_capacity(15);

    for axis in Axis::ALL {
        let mut slab = size - Vec3::splat(2.0 * roundness);
        slab[axis.index()] = size[axis.index()];
        shapes.push(CollisionShape::Box { center, size: slab });
    }

    for axis in Axis::ALL {
        let (u, v) = match axis {
            Axis::X => (Axis::Y, Axis::Z),
            Axis::Y => (Axis::X, Axis::Z),
            Axis::Z => (Axis::X, Axis::Y),
        };
        for near_u in [true, false] {
            for near_v in [true, false] {
                let mut edge_center = center;
                edge_center[u.index()] = edge_offset(size[u.index()], roundness, near_u);
                edge_center[v.index()] = edge_offset(size[v.index()], roundness, near_v);
                shapes.push(CollisionShape::Capsule {
                    center: edge_center,
                    axis,
                    radius: roundness,
                    height: size[axis.index()],
                });
            }
        }
    }

    shapes
}

fn edge_offset(size: f32, roundness: f32, near: bool) -> f32 {
    if near {
        roundness
    } else {
        size - roundness
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_is_single_collider() {
        let config = MeshConfig::new_box(GridDims::new(2, 4, 6));
        assert_eq!(
            collision_shapes(&config).unwrap(),
            vec![CollisionShape::Box {
                center: Vec3::new(1.0, 2.0, 3.0),
                size: Vec3::new(2.0, 4.0, 6.0),
            }]
        );
    }

    #[test]
    fn test_zero_roundness_matches_box() {
        let dims = GridDims::new(3, 3, 5);
        assert_eq!(
            collision_shapes(&MeshConfig::rounded_box(dims, 0)).unwrap(),
            collision_shapes(&MeshConfig::new_box(dims)).unwrap()
        );
    }

    #[test]
    fn test_rounded_box_slabs_and_edges() {
        let shapes = collision_shapes(&MeshConfig::rounded_box(GridDims::new(4, 6, 8), 1)).unwrap();
        assert_eq!(shapes.len(), 15);

        assert_eq!(
            shapes[0],
            CollisionShape::Box {
                center: Vec3::new(2.0, 3.0, 4.0),
                size: Vec3::new(4.0, 4.0, 6.0),
            }
        );

        let capsules: Vec<_> = shapes
            .iter()
            .filter_map(|shape| match *shape {
                CollisionShape::Capsule {
                    center,
                    axis,
                    radius,
                    height,
                } => Some((center, axis, radius, height)),
                _ => None,
            })
            .collect();
        assert_eq!(capsules.len(), 12);
        for axis in Axis::ALL {
            assert_eq!(capsules.iter().filter(|c| c.1 == axis).count(), 4);
        }
        assert!(capsules.iter().all(|c| c.2 == 1.0));

        // First Y edge sits at the front-left corner, spanning the full height
        assert!(capsules.contains(&(Vec3::new(1.0, 3.0, 1.0), Axis::Y, 1.0, 6.0)));
        assert!(capsules.contains(&(Vec3::new(3.0, 3.0, 7.0), Axis::Y, 1.0, 6.0)));
    }

    #[test]
    fn test_sphere_collider() {
        let shapes = collision_shapes(&MeshConfig::sphere(4, 2.5)).unwrap();
        assert_eq!(
            shapes,
            vec![CollisionShape::Sphere {
                center: Vec3::ZERO,
                radius: 2.5
            }]
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = MeshConfig::rounded_box(GridDims::uniform(2), 2);
        assert!(matches!(
            collision_shapes(&config),
            Err(ConfigurationError::RoundnessTooLarge { .. })
        ));
    }
}
