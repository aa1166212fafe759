//! The segment font: glyph bit patterns plus the geometry they index.
//!
//! Segments (bit index, hex):
//!
//! ```text
//!   *-0-*-1-*
//!   |\  |  /|
//!   7 A B C 2
//!   |  \|/  |
//!   *-8-*-9-*
//!   |  /|\  |
//!   6 F E D 3
//!   |/  |  \|
//!   *-5-*-4-*
//! ```
//!
//! Bit `i` of a pattern lights the twelve vertices tagged with segment `i`
//! in the template.

mod patterns;
mod segments;

pub use patterns::{CHAR_COUNT, CHAR_OFFSET, lookup, lookup_char, patterns};
pub use segments::{SegmentVertex, segment_range, template};

/// Character cell width before scaling or slanting.
pub const CHARACTER_WIDTH: u32 = 16;

/// Character cell height before scaling or slanting.
pub const CHARACTER_HEIGHT: u32 = 24;

/// Number of independently lit segments per character.
pub const SEGMENT_COUNT: usize = 16;

/// Four triangles per segment.
pub const VERTICES_PER_SEGMENT: usize = 12;

/// Vertices in the full template: one draw instance worth of geometry.
pub const VERTEX_COUNT: usize = SEGMENT_COUNT * VERTICES_PER_SEGMENT;
