//! # Lattice
//!
//! Integer lattice underlying every generated mesh: grid dimensions, surface
//! coordinates, closed-form buffer sizes and the perimeter walk.
//!
//! ## Vertex Order
//!
//! ```text
//! rings:          layer 0, layer 1, ..., layer y_size   (ring vertices each)
//! top interior:   (x_size - 1) * (z_size - 1) vertices at y = y_size
//! bottom interior: (x_size - 1) * (z_size - 1) vertices at y = 0
//! ```
//!
//! A ring starts at the origin corner and walks front (z = 0), right
//! (x = x_size), back (z = z_size) and left (x = 0), sharing each corner once.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// AXES AND DIMENSIONS
// =============================================================================

/// A lattice axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in x, y, z order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Component index of this axis in a vector.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        };
        f.write_str(name)
    }
}

/// Number of lattice cells along each axis.
///
/// # Example
///
/// ```rust
/// use lattice_mesh::GridDims;
///
/// let dims = GridDims::new(2, 3, 4);
/// assert_eq!(dims.ring_size(), 12);
/// assert_eq!(dims.vertex_count(), 8 + 4 * 6 + 2 * (2 + 3 + 6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridDims {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl GridDims {
    /// Creates dimensions from per-axis cell counts.
    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    /// Same cell count on every axis.
    pub const fn uniform(size: u32) -> Self {
        Self::new(size, size, size)
    }

    /// Cell count along `axis`.
    #[inline]
    pub fn get(&self, axis: Axis) -> u32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Smallest cell count over all axes.
    #[inline]
    pub fn min_size(&self) -> u32 {
        self.x.min(self.y).min(self.z)
    }

    /// Vertices in one perimeter ring.
    #[inline]
    pub fn ring_size(&self) -> u32 {
        2 * (self.x + self.z)
    }

    /// Vertices in one cap's interior block.
    #[inline]
    pub fn cap_interior_size(&self) -> u32 {
        self.x.saturating_sub(1) * self.z.saturating_sub(1)
    }

    /// Total vertex count: corners, edge interiors and face interiors.
    ///
    /// Zero when any axis is empty, since such dims enclose no surface.
    pub fn vertex_count(&self) -> u32 {
        if self.min_size() == 0 {
            return 0;
        }
        let corners = 8;
        let edges = (self.x + self.y + self.z - 3) * 4;
        let faces = ((self.x - 1) * (self.y - 1)
            + (self.x - 1) * (self.z - 1)
            + (self.y - 1) * (self.z - 1))
            * 2;
        corners + edges + faces
    }

    /// Quads on the two walls facing along Z.
    #[inline]
    pub fn z_face_quads(&self) -> u32 {
        2 * self.x * self.y
    }

    /// Quads on the two walls facing along X.
    #[inline]
    pub fn x_face_quads(&self) -> u32 {
        2 * self.y * self.z
    }

    /// Quads on the two caps facing along Y.
    #[inline]
    pub fn y_face_quads(&self) -> u32 {
        2 * self.x * self.z
    }

    /// Total quad count over all six faces.
    pub fn quad_count(&self) -> u32 {
        self.z_face_quads() + self.x_face_quads() + self.y_face_quads()
    }

    /// First vertex index of the top cap's interior block.
    #[inline]
    pub fn top_interior_start(&self) -> u32 {
        self.ring_size() * (self.y + 1)
    }

    /// First vertex index of the bottom cap's interior block.
    #[inline]
    pub fn bottom_interior_start(&self) -> u32 {
        self.top_interior_start() + self.cap_interior_size()
    }

    /// Vertex index of ring slot `position` on layer `y`.
    #[inline]
    pub fn ring_vertex(&self, y: u32, position: u32) -> u32 {
        y * self.ring_size() + position
    }

    /// Ring slot of a boundary column `(x, z)`.
    ///
    /// Inverse of the perimeter walk. The column must lie on the boundary
    /// of the cross-section.
    pub fn ring_position(&self, x: u32, z: u32) -> u32 {
        debug_assert!(x <= self.x && z <= self.z);
        if z == 0 {
            x
        } else if x == self.x {
            self.x + z
        } else if z == self.z {
            self.x + self.z + (self.x - x)
        } else {
            debug_assert_eq!(x, 0, "column ({x}, {z}) is not on the perimeter");
            2 * self.x + self.z + (self.z - z)
        }
    }

    /// Vertex index of a surface coordinate, or `None` off the surface.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lattice_mesh::{GridDims, LatticeCoord};
    ///
    /// let dims = GridDims::uniform(2);
    /// assert_eq!(dims.vertex_index(LatticeCoord::new(0, 0, 0)), Some(0));
    /// assert_eq!(dims.vertex_index(LatticeCoord::new(1, 2, 1)), Some(24));
    /// assert_eq!(dims.vertex_index(LatticeCoord::new(1, 1, 1)), None);
    /// ```
    pub fn vertex_index(&self, coord: LatticeCoord) -> Option<u32> {
        let LatticeCoord { x, y, z } = coord;
        if x > self.x || y > self.y || z > self.z {
            return None;
        }
        if x == 0 || x == self.x || z == 0 || z == self.z {
            return Some(self.ring_vertex(y, self.ring_position(x, z)));
        }
        let interior = (z - 1) * (self.x - 1) + (x - 1);
        if y == self.y {
            Some(self.top_interior_start() + interior)
        } else if y == 0 {
            Some(self.bottom_interior_start() + interior)
        } else {
            None
        }
    }

    /// Iterates the perimeter ring of layer `y`.
    pub fn perimeter(&self, y: u32) -> PerimeterWalker {
        PerimeterWalker::new(*self, y)
    }

    /// Iterates every surface lattice coordinate in vertex-index order.
    pub fn surface_coords(&self) -> impl Iterator<Item = LatticeCoord> + '_ {
        let rings = (0..=self.y).flat_map(move |y| self.perimeter(y));
        rings
            .chain(self.cap_interior(self.y))
            .chain(self.cap_interior(0))
    }

    fn cap_interior(&self, y: u32) -> impl Iterator<Item = LatticeCoord> {
        let (x_size, z_size) = (self.x, self.z);
        (1..z_size).flat_map(move |z| (1..x_size).map(move |x| LatticeCoord::new(x, y, z)))
    }
}

impl fmt::Display for GridDims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.x, self.y, self.z)
    }
}

// =============================================================================
// LATTICE COORDINATES
// =============================================================================

/// A point of the integer lattice before shaping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LatticeCoord {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl LatticeCoord {
    pub const fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    /// Coordinate along `axis`.
    #[inline]
    pub fn get(&self, axis: Axis) -> u32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Whether the coordinate lies on the surface of a `dims` box.
    pub fn is_on_surface(&self, dims: &GridDims) -> bool {
        Axis::ALL.iter().any(|&axis| {
            let value = self.get(axis);
            value == 0 || value == dims.get(axis)
        })
    }

    /// Byte encoding stored in the auxiliary vertex channel.
    ///
    /// Dimensions are validated against `MAX_AXIS_SIZE`, so every coordinate
    /// of a built mesh fits. Larger components saturate at `u8::MAX`.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [self.x, self.y, self.z].map(|c| u8::try_from(c).unwrap_or(u8::MAX))
    }
}

// =============================================================================
// PERIMETER WALKER
// =============================================================================

/// Walks one horizontal ring of the lattice surface.
///
/// # Example
///
/// ```rust
/// use lattice_mesh::GridDims;
///
/// let ring: Vec<_> = GridDims::new(1, 1, 1)
///     .perimeter(0)
///     .map(|c| (c.x, c.z))
///     .collect();
/// assert_eq!(ring, vec![(0, 0), (1, 0), (1, 1), (0, 1)]);
/// ```
#[derive(Debug, Clone)]
pub struct PerimeterWalker {
    dims: GridDims,
    y: u32,
    position: u32,
}

impl PerimeterWalker {
    fn new(dims: GridDims, y: u32) -> Self {
        Self {
            dims,
            y,
            position: 0,
        }
    }

    fn coord_at(&self, position: u32) -> LatticeCoord {
        let GridDims { x: xs, z: zs, .. } = self.dims;
        let (x, z) = if position <= xs {
            (position, 0)
        } else if position <= xs + zs {
            (xs, position - xs)
        } else if position <= 2 * xs + zs {
            (2 * xs + zs - position, zs)
        } else {
            (0, 2 * (xs + zs) - position)
        };
        LatticeCoord::new(x, self.y, z)
    }
}

impl Iterator for PerimeterWalker {
    type Item = LatticeCoord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.dims.ring_size() {
            return None;
        }
        let coord = self.coord_at(self.position);
        self.position += 1;
        Some(coord)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.dims.ring_size().saturating_sub(self.position) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PerimeterWalker {}
