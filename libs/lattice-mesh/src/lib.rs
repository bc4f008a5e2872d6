//! # Lattice Mesh
//!
//! Procedural polyhedral meshes built from the surface of an integer lattice
//! box: plain boxes, rounded boxes and cube-spheres.
//!
//! ## Architecture
//!
//! ```text
//! MeshConfig → validate → lattice walk → shaping → quad emission → MeshData
//!                                                                    ↓
//!                                   MeshDeformer / collision_shapes / debug_markers
//! ```
//!
//! ## Components
//!
//! - **Lattice**: surface vertex indexing (perimeter rings, then cap blocks)
//! - **Shaping**: lattice point to position and normal, per shape
//! - **Builder**: side walls and caps emitted into three submeshes
//! - **Deformer**: spring-mass denting over a finished mesh
//!
//! ## Usage
//!
//! ```rust
//! use lattice_mesh::{build, GridDims, MeshConfig};
//!
//! let mesh = build(&MeshConfig::rounded_box(GridDims::new(6, 4, 6), 1)).unwrap();
//! assert_eq!(mesh.submeshes().len(), 3);
//! assert!(mesh.check_watertight().is_ok());
//! ```

pub mod builder;
pub mod collision;
pub mod deform;
pub mod error;
pub mod inspect;
pub mod lattice;
pub mod mesh;
pub mod params;
pub mod shaping;

pub use builder::build;
pub use collision::{collision_shapes, CollisionShape};
pub use deform::{DeformerSettings, MeshDeformer};
pub use error::{ConfigurationError, MeshError, MeshResult};
pub use inspect::{debug_markers, DebugMarker};
pub use lattice::{Axis, GridDims, LatticeCoord, PerimeterWalker};
pub use mesh::{FaceGroup, MeshData, Submesh};
pub use params::{MeshConfig, Shape};
pub use shaping::ShapedVertex;
