//! # Mesh Deformer
//!
//! Spring-mass overlay that dents a finished mesh and lets it spring back.
//!
//! The deformer keeps its own copy of the rest positions, the displaced
//! positions and per-vertex velocities. Index buffers are never touched;
//! normals are recomputed from triangle adjacency when the displaced positions
//! are written back.
//!
//! ## Example
//!
//! ```rust
//! use lattice_mesh::{build, DeformerSettings, MeshConfig, MeshDeformer};
//! use glam::Vec3;
//!
//! let mut mesh = build(&MeshConfig::sphere(8, 1.0)).unwrap();
//! let mut deformer = MeshDeformer::new(&mesh, DeformerSettings::default()).unwrap();
//!
//! // Push in from just outside the +Z pole
//! deformer.apply_force(Vec3::new(0.0, 0.0, 1.1), -10.0, 1.0 / 60.0);
//! deformer.step(1.0 / 60.0);
//! deformer.write_to(&mut mesh).unwrap();
//! ```

use crate::error::{ConfigurationError, MeshError, MeshResult};
use crate::mesh::MeshData;
use config::constants::{DEFAULT_DAMPING, DEFAULT_SPRING_FORCE, DEFAULT_UNIFORM_SCALE};
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Spring-mass parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeformerSettings {
    /// Stiffness pulling vertices back to rest.
    pub spring_force: f32,
    /// Fraction of velocity removed per second.
    pub damping: f32,
    /// Uniform scale the mesh is displayed at; keeps the response size independent.
    pub uniform_scale: f32,
}

impl Default for DeformerSettings {
    fn default() -> Self {
        Self {
            spring_force: DEFAULT_SPRING_FORCE,
            damping: DEFAULT_DAMPING,
            uniform_scale: DEFAULT_UNIFORM_SCALE,
        }
    }
}

impl DeformerSettings {
    /// Validates every parameter.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let checks = [
            ("spring_force", self.spring_force, self.spring_force >= 0.0),
            ("damping", self.damping, self.damping >= 0.0),
            ("uniform_scale", self.uniform_scale, self.uniform_scale > 0.0),
        ];
        for (parameter, value, in_range) in checks {
            if !(in_range && value.is_finite()) {
                return Err(ConfigurationError::InvalidDeformer { parameter, value });
            }
        }
        Ok(())
    }
}

/// Spring-mass state for one mesh.
#[derive(Debug, Clone)]
pub struct MeshDeformer {
    settings: DeformerSettings,
    original: Vec<Vec3>,
    displaced: Vec<Vec3>,
    velocities: Vec<Vec3>,
}

impl MeshDeformer {
    /// Captures `mesh`'s positions as the rest state.
    ///
    /// Invalid settings are reported as [`MeshError::Configuration`].
    pub fn new(mesh: &MeshData, settings: DeformerSettings) -> MeshResult<Self> {
        settings.validate()?;
        let original = mesh.positions().to_vec();
        Ok(Self {
            settings,
            displaced: original.clone(),
            velocities: vec![Vec3::ZERO; original.len()],
            original,
        })
    }

    pub fn settings(&self) -> &DeformerSettings {
        &self.settings
    }

    /// Current displaced positions.
    pub fn positions(&self) -> &[Vec3] {
        &self.displaced
    }

    /// Current per-vertex velocities.
    pub fn velocities(&self) -> &[Vec3] {
        &self.velocities
    }

    /// Pushes every vertex away from `point` (mesh-local space).
    ///
    /// The push falls off with the inverse square of distance; a negative
    /// `magnitude` pulls toward the point instead.
    pub fn apply_force(&mut self, point: Vec3, magnitude: f32, dt: f32) {
        let scale = self.settings.uniform_scale;
        for (displaced, velocity) in self.displaced.iter().zip(&mut self.velocities) {
            let point_to_vertex = (*displaced - point) * scale;
            let attenuated = magnitude / (1.0 + point_to_vertex.length_squared());
            *velocity += point_to_vertex.normalize_or_zero() * (attenuated * dt);
        }
    }

    /// Advances the springs by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        let DeformerSettings {
            spring_force,
            damping,
            uniform_scale,
        } = self.settings;

        let vertices = self
            .displaced
            .iter_mut()
            .zip(&mut self.velocities)
            .zip(&self.original);

        for ((displaced, velocity), original) in vertices {
            let displacement = (*displaced - *original) * uniform_scale;
            *velocity -= displacement * spring_force * dt;
            *velocity *= 1.0 - damping * dt;
            *displaced += *velocity * (dt / uniform_scale);
        }
    }

    /// Largest distance of any vertex from its rest position.
    pub fn max_displacement(&self) -> f32 {
        self.displaced
            .iter()
            .zip(&self.original)
            .map(|(d, o)| d.distance(*o))
            .fold(0.0, f32::max)
    }

    /// Returns every vertex to rest with zero velocity.
    pub fn reset(&mut self) {
        self.displaced.copy_from_slice(&self.original);
        self.velocities.fill(Vec3::ZERO);
    }

    /// Writes displaced positions into `mesh` and recomputes its normals.
    ///
    /// Fails without touching `mesh` when its vertex count differs from the
    /// mesh this deformer was created from.
    pub fn write_to(&self, mesh: &mut MeshData) -> MeshResult<()> {
        if mesh.positions.len() != self.displaced.len() {
            return Err(MeshError::LengthMismatch {
                attribute: "positions",
                expected: self.displaced.len(),
                actual: mesh.positions.len(),
            });
        }
        mesh.positions.copy_from_slice(&self.displaced);
        mesh.recompute_normals();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build, MeshConfig};
    use approx::assert_abs_diff_eq;

    const DT: f32 = 1.0 / 60.0;

    fn sphere() -> MeshData {
        build(&MeshConfig::sphere(6, 1.0)).unwrap()
    }

    #[test]
    fn test_settings_validation() {
        assert!(DeformerSettings::default().validate().is_ok());
        let bad = DeformerSettings {
            uniform_scale: 0.0,
            ..Default::default()
        };
        assert_eq!(
            bad.validate().unwrap_err(),
            ConfigurationError::InvalidDeformer {
                parameter: "uniform_scale",
                value: 0.0
            }
        );
        let bad = DeformerSettings {
            damping: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            MeshDeformer::new(&sphere(), bad),
            Err(MeshError::Configuration(ConfigurationError::InvalidDeformer {
                parameter: "damping",
                ..
            }))
        ));
    }

    #[test]
    fn test_force_pushes_nearby_vertices_hardest() {
        let mesh = sphere();
        let mut deformer = MeshDeformer::new(&mesh, DeformerSettings::default()).unwrap();
        deformer.apply_force(Vec3::new(0.0, 0.0, 1.5), 10.0, DT);

        let speeds: Vec<f32> = deformer.velocities().iter().map(|v| v.length()).collect();
        let (near, far) = mesh
            .positions()
            .iter()
            .zip(&speeds)
            .fold((0.0f32, f32::MAX), |(near, far), (p, &s)| {
                if p.z > 0.9 {
                    (near.max(s), far)
                } else if p.z < -0.9 {
                    (near, far.min(s))
                } else {
                    (near, far)
                }
            });
        assert!(near > far);
    }

    #[test]
    fn test_springs_return_to_rest() {
        let mesh = sphere();
        let mut deformer = MeshDeformer::new(&mesh, DeformerSettings::default()).unwrap();
        deformer.apply_force(Vec3::new(0.0, 0.0, 1.2), -20.0, DT);
        deformer.step(DT);
        assert!(deformer.max_displacement() > 0.0);

        for _ in 0..600 {
            deformer.step(DT);
        }
        assert!(deformer.max_displacement() < 1e-3);
    }

    #[test]
    fn test_reset() {
        let mesh = sphere();
        let mut deformer = MeshDeformer::new(&mesh, DeformerSettings::default()).unwrap();
        deformer.apply_force(Vec3::ZERO, 5.0, DT);
        deformer.step(DT);
        deformer.reset();
        assert_eq!(deformer.positions(), mesh.positions());
        assert!(deformer.velocities().iter().all(|v| *v == Vec3::ZERO));
    }

    #[test]
    fn test_write_keeps_indices_and_renormalizes() {
        let mut mesh = sphere();
        let submeshes = mesh.submeshes().to_vec();
        let mut deformer = MeshDeformer::new(&mesh, DeformerSettings::default()).unwrap();
        deformer.apply_force(Vec3::new(0.0, 1.2, 0.0), -15.0, DT);
        deformer.step(DT);
        deformer.write_to(&mut mesh).unwrap();

        assert_eq!(mesh.submeshes(), submeshes.as_slice());
        assert_eq!(mesh.positions(), deformer.positions());
        for normal in mesh.normals() {
            assert_abs_diff_eq!(normal.length(), 1.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_write_rejects_other_mesh() {
        let small = build(&MeshConfig::sphere(2, 1.0)).unwrap();
        let mut large = build(&MeshConfig::sphere(4, 1.0)).unwrap();
        let before = large.clone();
        let deformer = MeshDeformer::new(&small, DeformerSettings::default()).unwrap();

        assert_eq!(
            deformer.write_to(&mut large),
            Err(MeshError::LengthMismatch {
                attribute: "positions",
                expected: small.vertex_count(),
                actual: before.vertex_count(),
            })
        );
        assert_eq!(large, before);
    }
}
