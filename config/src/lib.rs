//! # Config Crate
//!
//! Centralized configuration constants for the lattice mesh generator.
//! Axis limits, numeric tolerances and deformer defaults live here so the
//! generator crate never scatters literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{MAX_AXIS_SIZE, UNIT_LENGTH_TOLERANCE};
//!
//! // Lattice coordinates are stored as bytes in the auxiliary channel
//! assert_eq!(MAX_AXIS_SIZE, u8::MAX as u32);
//!
//! // Tolerance for "is this vector unit length"
//! let length: f32 = 1.00001;
//! assert!((length - 1.0).abs() < UNIT_LENGTH_TOLERANCE);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Pure constants and a small validated snapshot type
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
