//! CPU mirror of the segment shader's coloring rule.
//!
//! The GPU does this per vertex in `segments.wgsl`; these functions exist so
//! the rule can be checked without a device and for software previews.

use crate::color::Rgba;
use crate::font;

/// True when bit `segment` of `activation` is set.
pub fn is_lit(activation: u16, segment: u32) -> bool {
    segment < 16 && activation & (1 << segment) != 0
}

/// Color of a vertex owned by `segment` in a slot showing `activation`.
pub fn vertex_color(activation: u16, segment: u32, on: Rgba, off: Rgba) -> Rgba {
    if is_lit(activation, segment) { on } else { off }
}

/// Per-vertex colors for one slot, in template order.
pub fn shade_slot(activation: u16, on: Rgba, off: Rgba) -> Vec<Rgba> {
    font::template()
        .iter()
        .map(|v| vertex_color(activation, v.segment, on, off))
        .collect()
}

/// Segment indices lit by `activation`, ascending.
pub fn lit_segments(activation: u16) -> impl Iterator<Item = u32> {
    (0..16).filter(move |&s| is_lit(activation, s))
}
