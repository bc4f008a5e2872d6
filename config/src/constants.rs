//! # Configuration Constants
//!
//! Centralized constants for the lattice mesh generator.
//!
//! ## Categories
//!
//! - **Limits**: Bounds on lattice dimensions
//! - **Precision**: Floating-point comparison tolerances
//! - **Deformation**: Spring-mass defaults for the mesh deformer
//! - **Inspection**: Sizes used by debug markers

use std::fmt;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Minimum number of cells along any lattice axis.
///
/// A size of zero would produce a flat, non-closed surface.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_AXIS_SIZE;
///
/// let requested = 0;
/// assert!(requested < MIN_AXIS_SIZE);
/// ```
pub const MIN_AXIS_SIZE: u32 = 1;

/// Maximum number of cells along any lattice axis.
///
/// The auxiliary vertex channel stores the un-shaped lattice coordinate as one
/// byte per axis, so coordinates must fit in `0..=255`.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_AXIS_SIZE;
///
/// let coordinate = MAX_AXIS_SIZE;
/// assert!(u8::try_from(coordinate).is_ok());
/// ```
pub const MAX_AXIS_SIZE: u32 = 255;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Tolerance when checking that a vector is unit length.
///
/// Cube-to-sphere warped normals are unit length by construction but pick up
/// `f32` rounding error, which stays well under this bound.
pub const UNIT_LENGTH_TOLERANCE: f32 = 1e-4;

// =============================================================================
// DEFORMATION CONSTANTS
// =============================================================================

/// Default spring stiffness pulling displaced vertices back to rest.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SPRING_FORCE;
///
/// let user_spring: Option<f32> = None;
/// assert_eq!(user_spring.unwrap_or(DEFAULT_SPRING_FORCE), 20.0);
/// ```
pub const DEFAULT_SPRING_FORCE: f32 = 20.0;

/// Default velocity damping per second.
pub const DEFAULT_DAMPING: f32 = 5.0;

/// Default uniform scale of the object the deformed mesh is drawn with.
pub const DEFAULT_UNIFORM_SCALE: f32 = 1.0;

// =============================================================================
// INSPECTION CONSTANTS
// =============================================================================

/// Radius of the sphere drawn at each vertex by debug inspection.
pub const DEFAULT_MARKER_RADIUS: f32 = 0.1;

/// Length of the normal ray drawn from each vertex by debug inspection.
pub const DEFAULT_NORMAL_RAY_LENGTH: f32 = 1.0;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f32 values are approximately equal within `tolerance`.
///
/// # Example
///
/// ```rust
/// use config::constants::{approx_equal, UNIT_LENGTH_TOLERANCE};
///
/// assert!(approx_equal(1.0, 1.00001, UNIT_LENGTH_TOLERANCE));
/// assert!(!approx_equal(1.0, 1.1, UNIT_LENGTH_TOLERANCE));
/// ```
#[inline]
pub fn approx_equal(a: f32, b: f32, tolerance: f32) -> bool {
    (a - b).abs() < tolerance
}

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of generator-wide settings.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// assert_eq!(config.max_axis_size, 255);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Tolerance used by unit-length and distance checks.
    pub tolerance: f32,
    /// Largest accepted lattice size along one axis.
    pub max_axis_size: u32,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and axis limit.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-3, 64).expect("valid config");
    /// assert_eq!(cfg.max_axis_size, 64);
    /// ```
    pub fn new(tolerance: f32, max_axis_size: u32) -> Result<Self, ConfigError> {
        if !(tolerance > 0.0 && tolerance.is_finite()) {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if !(MIN_AXIS_SIZE..=MAX_AXIS_SIZE).contains(&max_axis_size) {
            return Err(ConfigError::InvalidAxisLimit(max_axis_size));
        }
        Ok(Self {
            tolerance,
            max_axis_size,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: UNIT_LENGTH_TOLERANCE,
            max_axis_size: MAX_AXIS_SIZE,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or not finite.
    InvalidTolerance(f32),
    /// Raised when the axis limit falls outside `MIN_AXIS_SIZE..=MAX_AXIS_SIZE`.
    InvalidAxisLimit(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidAxisLimit(value) => {
                write!(
                    f,
                    "max_axis_size must be within {MIN_AXIS_SIZE}..={MAX_AXIS_SIZE}: {value}"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
