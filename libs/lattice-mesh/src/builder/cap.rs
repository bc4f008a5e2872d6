//! # Cap Filler
//!
//! Triangulates the top and bottom faces.
//!
//! A cap is an `x_size × z_size` grid of quads. Its border is the perimeter
//! ring of the extreme layer and its interior is the face block appended after
//! all rings:
//!
//! ```text
//!   z_size  R R R R R      back segment, ring slots run right to left
//!           R i i i R
//!           R i i i R      left segment descends, right segment ascends
//!        0  R R R R R      front segment, ring slots 0..=x_size
//!           0       x_size
//! ```
//!
//! Rows run from the front segment to the back segment. Each column lookup
//! routes border columns into the ring, which is what makes the corner quads
//! wrap onto the next ring vertex instead of advancing into the interior.
//! With an axis of size one there are no `i` vertices and every lookup lands
//! on the ring.

use super::emitter::SubmeshWriter;
use crate::lattice::{GridDims, LatticeCoord};

/// Which cap to fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CapSide {
    Top,
    Bottom,
}

impl CapSide {
    fn layer(self, dims: &GridDims) -> u32 {
        match self {
            CapSide::Top => dims.y,
            CapSide::Bottom => 0,
        }
    }
}

/// Vertex lookup for one cap.
struct CapGrid<'a> {
    dims: &'a GridDims,
    layer: u32,
}

impl CapGrid<'_> {
    fn vertex(&self, x: u32, z: u32) -> u32 {
        let index = self.dims.vertex_index(LatticeCoord::new(x, self.layer, z));
        debug_assert!(index.is_some(), "cap column ({x}, {z}) has no vertex");
        index.unwrap_or_default()
    }
}

/// Emits every quad of one cap.
///
/// The top cap is seen from above with `z` growing away from the front
/// segment; the bottom cap is the same walk mirrored in `z`, which reverses
/// its winding so both caps face outward.
pub(crate) fn fill_cap(writer: &mut SubmeshWriter, dims: &GridDims, side: CapSide) {
    let grid = CapGrid {
        dims,
        layer: side.layer(dims),
    };

    for z in 0..dims.z {
        for x in 0..dims.x {
            let near_left = grid.vertex(x, z);
            let near_right = grid.vertex(x + 1, z);
            let far_left = grid.vertex(x, z + 1);
            let far_right = grid.vertex(x + 1, z + 1);

            match side {
                CapSide::Top => writer.quad(near_left, near_right, far_left, far_right),
                CapSide::Bottom => writer.quad(far_left, far_right, near_left, near_right),
            }
        }
    }
}
