//! # Quad Emitter
//!
//! Turns four corner indices into two triangles sharing the `v10–v01`
//! diagonal.
//!
//! ```text
//! v01 ---- v11
//!  |     / |
//!  |   /   |
//!  | /     |
//! v00 ---- v10
//! ```

use crate::mesh::{FaceGroup, Submesh};

/// Writes the two triangles of a quad at `cursor` and returns the next cursor.
///
/// Triangles are `(v00, v01, v10)` and `(v10, v01, v11)`. The caller
/// guarantees the four indices are distinct and that `buffer` has room for
/// six more indices.
///
/// # Example
///
/// ```rust
/// use lattice_mesh::builder::emit_quad;
///
/// let mut buffer = [0u32; 6];
/// let cursor = emit_quad(&mut buffer, 0, 0, 1, 2, 3);
/// assert_eq!(cursor, 6);
/// assert_eq!(buffer, [0, 2, 1, 1, 2, 3]);
/// ```
#[inline]
pub fn emit_quad(buffer: &mut [u32], cursor: usize, v00: u32, v10: u32, v01: u32, v11: u32) -> usize {
    debug_assert!(
        v00 != v10 && v00 != v01 && v00 != v11 && v10 != v01 && v10 != v11 && v01 != v11,
        "degenerate quad ({v00}, {v10}, {v01}, {v11})"
    );

    buffer[cursor] = v00;
    buffer[cursor + 1] = v01;
    buffer[cursor + 2] = v10;
    buffer[cursor + 3] = v10;
    buffer[cursor + 4] = v01;
    buffer[cursor + 5] = v11;
    cursor + 6
}

/// One submesh index buffer, allocated at its final size, plus its cursor.
#[derive(Debug)]
pub(crate) struct SubmeshWriter {
    group: FaceGroup,
    indices: Vec<u32>,
    cursor: usize,
    vertex_count: u32,
}

impl SubmeshWriter {
    /// Allocates room for exactly `quads` quads.
    pub(crate) fn new(group: FaceGroup, quads: u32, vertex_count: u32) -> Self {
        Self {
            group,
            indices: vec![0; quads as usize * 6],
            cursor: 0,
            vertex_count,
        }
    }

    pub(crate) fn quad(&mut self, v00: u32, v10: u32, v01: u32, v11: u32) {
        debug_assert!(
            [v00, v10, v01, v11].iter().all(|&v| v < self.vertex_count),
            "quad ({v00}, {v10}, {v01}, {v11}) out of range for {} vertices",
            self.vertex_count
        );
        self.cursor = emit_quad(&mut self.indices, self.cursor, v00, v10, v01, v11);
    }

    /// Hands over the filled buffer.
    pub(crate) fn finish(self) -> Submesh {
        debug_assert_eq!(
            self.cursor,
            self.indices.len(),
            "{} buffer not filled exactly",
            self.group
        );
        Submesh {
            group: self.group,
            indices: self.indices,
        }
    }
}
