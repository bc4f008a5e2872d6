//! # Mesh Parameters
//!
//! Grid dimensions plus the topology to shape them into. A configuration is
//! validated once, before any buffer is sized.

use crate::error::ConfigurationError;
use crate::lattice::{Axis, GridDims};
use config::constants::{GlobalConfig, MIN_AXIS_SIZE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Target topology of a generated mesh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    /// Axis-aligned box; positions are the lattice coordinates.
    Box,
    /// Box whose edges and corners are rounded with the given radius in cells.
    RoundedBox { roundness: u32 },
    /// Lattice box warped onto a sphere of the given radius.
    Sphere { radius: f32 },
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Box => f.write_str("box"),
            Shape::RoundedBox { roundness } => write!(f, "rounded box (r={roundness})"),
            Shape::Sphere { radius } => write!(f, "sphere (radius={radius})"),
        }
    }
}

/// Everything needed to generate one mesh.
///
/// # Example
///
/// ```rust
/// use lattice_mesh::{GridDims, MeshConfig, Shape};
///
/// let config = MeshConfig::sphere(8, 2.5);
/// assert_eq!(config.dims, GridDims::uniform(8));
/// assert_eq!(config.shape, Shape::Sphere { radius: 2.5 });
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MeshConfig {
    pub dims: GridDims,
    pub shape: Shape,
}

impl MeshConfig {
    pub fn new(dims: GridDims, shape: Shape) -> Self {
        Self { dims, shape }
    }

    /// Flat-sided box.
    pub fn new_box(dims: GridDims) -> Self {
        Self::new(dims, Shape::Box)
    }

    /// Box with rounded edges and corners.
    pub fn rounded_box(dims: GridDims, roundness: u32) -> Self {
        Self::new(dims, Shape::RoundedBox { roundness })
    }

    /// Uniform cube-sphere with `grid_size` cells per cube edge.
    pub fn sphere(grid_size: u32, radius: f32) -> Self {
        Self::new(GridDims::uniform(grid_size), Shape::Sphere { radius })
    }

    /// Validates against the default global limits.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.validate_with(&GlobalConfig::default())
    }

    /// Validates dimensions and shape parameters.
    ///
    /// Checks, in order: every axis within `MIN_AXIS_SIZE..=max_axis_size`,
    /// roundness at most `floor(min(size) / 2)`, radius positive and finite.
    pub fn validate_with(&self, global: &GlobalConfig) -> Result<(), ConfigurationError> {
        for axis in Axis::ALL {
            let value = self.dims.get(axis);
            if value < MIN_AXIS_SIZE {
                return Err(ConfigurationError::AxisTooSmall {
                    axis,
                    value,
                    min: MIN_AXIS_SIZE,
                });
            }
            if value > global.max_axis_size {
                return Err(ConfigurationError::AxisTooLarge {
                    axis,
                    value,
                    max: global.max_axis_size,
                });
            }
        }

        match self.shape {
            Shape::Box => {}
            Shape::RoundedBox { roundness } => {
                let max = self.dims.min_size() / 2;
                if roundness > max {
                    return Err(ConfigurationError::RoundnessTooLarge { roundness, max });
                }
            }
            Shape::Sphere { radius } => {
                if !(radius > 0.0 && radius.is_finite()) {
                    return Err(ConfigurationError::InvalidRadius(radius));
                }
            }
        }

        Ok(())
    }
}
