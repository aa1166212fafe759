//! Triangle template for one character cell.
//!
//! Every segment owns twelve vertices (four triangles). Segments that touch
//! still get their own copies of the shared corners, because each one is
//! colored on its own at draw time.

use std::ops::Range;

use super::{SEGMENT_COUNT, VERTEX_COUNT, VERTICES_PER_SEGMENT};

/// One template vertex: cell-local position plus the segment it belongs to.
///
/// Laid out for direct upload as a vertex buffer (`Float32x2`, `Uint32`).
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SegmentVertex {
    pub position: [f32; 2],
    pub segment: u32,
}

type Outline = [[f32; 2]; VERTICES_PER_SEGMENT];

#[rustfmt::skip]
const OUTLINES: [Outline; SEGMENT_COUNT] = [
    // 0: top left bar
    [[1.0, 1.0],   [2.0, 2.0],   [2.0, 0.0],
     [2.0, 2.0],   [2.0, 0.0],   [6.0, 2.0],
     [2.0, 0.0],   [6.0, 2.0],   [6.0, 0.0],
     [6.0, 2.0],   [6.0, 0.0],   [7.0, 1.0]],
    // 1: top right bar (0 shifted by (6, 0))
    [[7.0, 1.0],   [8.0, 2.0],   [8.0, 0.0],
     [8.0, 2.0],   [8.0, 0.0],   [12.0, 2.0],
     [8.0, 0.0],   [12.0, 2.0],  [12.0, 0.0],
     [12.0, 2.0],  [12.0, 0.0],  [13.0, 1.0]],
    // 2: upper right post
    [[13.0, 1.0],  [12.0, 2.0],  [14.0, 2.0],
     [12.0, 2.0],  [14.0, 2.0],  [12.0, 10.0],
     [14.0, 2.0],  [12.0, 10.0], [14.0, 10.0],
     [12.0, 10.0], [14.0, 10.0], [13.0, 11.0]],
    // 3: lower right post (2 shifted by (0, 10))
    [[13.0, 11.0], [12.0, 12.0], [14.0, 12.0],
     [12.0, 12.0], [14.0, 12.0], [12.0, 20.0],
     [14.0, 12.0], [12.0, 20.0], [14.0, 20.0],
     [12.0, 20.0], [14.0, 20.0], [13.0, 21.0]],
    // 4: bottom right bar (0 shifted by (6, 20))
    [[7.0, 21.0],  [8.0, 22.0],  [8.0, 20.0],
     [8.0, 22.0],  [8.0, 20.0],  [12.0, 22.0],
     [8.0, 20.0],  [12.0, 22.0], [12.0, 20.0],
     [12.0, 22.0], [12.0, 20.0], [13.0, 21.0]],
    // 5: bottom left bar (0 shifted by (0, 20))
    [[1.0, 21.0],  [2.0, 22.0],  [2.0, 20.0],
     [2.0, 22.0],  [2.0, 20.0],  [6.0, 22.0],
     [2.0, 20.0],  [6.0, 22.0],  [6.0, 20.0],
     [6.0, 22.0],  [6.0, 20.0],  [7.0, 21.0]],
    // 6: lower left post (2 shifted by (-12, 10))
    [[1.0, 11.0],  [0.0, 12.0],  [2.0, 12.0],
     [0.0, 12.0],  [2.0, 12.0],  [0.0, 20.0],
     [2.0, 12.0],  [0.0, 20.0],  [2.0, 20.0],
     [0.0, 20.0],  [2.0, 20.0],  [1.0, 21.0]],
    // 7: upper left post (2 shifted by (-12, 0))
    [[1.0, 1.0],   [0.0, 2.0],   [2.0, 2.0],
     [0.0, 2.0],   [2.0, 2.0],   [0.0, 10.0],
     [2.0, 2.0],   [0.0, 10.0],  [2.0, 10.0],
     [0.0, 10.0],  [2.0, 10.0],  [1.0, 11.0]],
    // 8: middle left bar (0 shifted by (0, 10))
    [[1.0, 11.0],  [2.0, 12.0],  [2.0, 10.0],
     [2.0, 12.0],  [2.0, 10.0],  [6.0, 12.0],
     [2.0, 10.0],  [6.0, 12.0],  [6.0, 10.0],
     [6.0, 12.0],  [6.0, 10.0],  [7.0, 11.0]],
    // 9: middle right bar (0 shifted by (6, 10))
    [[7.0, 11.0],  [8.0, 12.0],  [8.0, 10.0],
     [8.0, 12.0],  [8.0, 10.0],  [12.0, 12.0],
     [8.0, 10.0],  [12.0, 12.0], [12.0, 10.0],
     [12.0, 12.0], [12.0, 10.0], [13.0, 11.0]],
    // A: upper left diagonal
    [[2.0, 2.0],   [2.0, 4.3],   [3.0, 2.0],
     [2.0, 4.3],   [3.0, 2.0],   [5.3, 10.0],
     [3.0, 2.0],   [5.3, 10.0],  [6.0, 7.2],
     [5.3, 10.0],  [6.0, 7.2],   [6.0, 10.0]],
    // B: upper center post (2 shifted by (-6, 0))
    [[7.0, 1.0],   [6.0, 2.0],   [8.0, 2.0],
     [6.0, 2.0],   [8.0, 2.0],   [6.0, 10.0],
     [8.0, 2.0],   [6.0, 10.0],  [8.0, 10.0],
     [6.0, 10.0],  [8.0, 10.0],  [7.0, 11.0]],
    // C: upper right diagonal
    [[8.0, 10.0],  [8.7, 10.0],  [8.0, 7.2],
     [8.7, 10.0],  [8.0, 7.2],   [12.0, 4.3],
     [8.0, 7.2],   [12.0, 4.3],  [11.0, 2.0],
     [12.0, 4.3],  [11.0, 2.0],  [12.0, 2.0]],
    // D: lower right diagonal
    [[8.0, 12.0],  [8.0, 14.8],  [8.7, 12.0],
     [8.0, 14.8],  [8.7, 12.0],  [11.0, 20.0],
     [8.7, 12.0],  [11.0, 20.0], [12.0, 17.7],
     [11.0, 20.0], [12.0, 17.7], [12.0, 20.0]],
    // E: lower center post (2 shifted by (-6, 10))
    [[7.0, 11.0],  [6.0, 12.0],  [8.0, 12.0],
     [6.0, 12.0],  [8.0, 12.0],  [6.0, 20.0],
     [8.0, 12.0],  [6.0, 20.0],  [8.0, 20.0],
     [6.0, 20.0],  [8.0, 20.0],  [7.0, 21.0]],
    // F: lower left diagonal
    [[2.0, 20.0],  [3.0, 20.0],  [2.0, 17.7],
     [3.0, 20.0],  [2.0, 17.7],  [6.0, 14.8],
     [2.0, 17.7],  [6.0, 14.8],  [5.3, 12.0],
     [6.0, 14.8],  [5.3, 12.0],  [6.0, 12.0]],
];

const fn build_template() -> [SegmentVertex; VERTEX_COUNT] {
    let mut out = [SegmentVertex { position: [0.0, 0.0], segment: 0 }; VERTEX_COUNT];
    let mut s = 0;
    while s < SEGMENT_COUNT {
        let mut v = 0;
        while v < VERTICES_PER_SEGMENT {
            out[s * VERTICES_PER_SEGMENT + v] = SegmentVertex {
                position: OUTLINES[s][v],
                segment: s as u32,
            };
            v += 1;
        }
        s += 1;
    }
    out
}

static TEMPLATE: [SegmentVertex; VERTEX_COUNT] = build_template();

/// The shared, immutable vertex list for one character cell.
pub fn template() -> &'static [SegmentVertex; VERTEX_COUNT] {
    &TEMPLATE
}

/// Index range of `segment`'s vertices inside [`template`], or `None` past
/// the last segment.
pub fn segment_range(segment: usize) -> Option<Range<usize>> {
    if segment >= SEGMENT_COUNT {
        return None;
    }
    let start = segment * VERTICES_PER_SEGMENT;
    Some(start..start + VERTICES_PER_SEGMENT)
}
