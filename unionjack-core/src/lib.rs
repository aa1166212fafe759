//! UnionJack Core — 16-segment ("Union Jack") display model.
//!
//! Everything in this crate is backend-agnostic: the glyph table and the
//! segment geometry template, per-display slot state, layout helpers, the
//! model transform, and the `Backend` trait a renderer implements to get
//! the instanced draw onto a GPU.

pub mod backend;
pub mod color;
pub mod display;
pub mod font;
pub mod layout;
pub mod shading;
pub mod transform;

// Re-export the types most callers need so they can write
// `unionjack_core::Display` instead of digging through modules.
pub use backend::{Backend, DrawTarget, InstancedDraw, SegmentUniforms};
pub use color::Rgba;
pub use display::{DEFAULT_LENGTH, Display, DisplaySlot, SegmentFont};
pub use font::{CHARACTER_HEIGHT, CHARACTER_WIDTH, SegmentVertex};
pub use layout::Rect;
