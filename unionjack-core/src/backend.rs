//! The graphics backend seam.
//!
//! A `Backend` turns the segment template and per-display instance data into
//! GPU resources; a `DrawTarget` accepts the one instanced draw each display
//! issues per frame. `unionjack-bridge` implements both on top of wgpu, and
//! the tests implement them with an in-memory recorder.

use glam::Mat4;

use crate::color::Rgba;
use crate::font::SegmentVertex;

/// Shader parameters for one display's draw.
///
/// Matches the WGSL `Uniforms` block: a column-major 4x4 matrix followed by
/// the two colors, 96 bytes total.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SegmentUniforms {
    pub model_view_projection: [[f32; 4]; 4],
    pub on_color: [f32; 4],
    pub off_color: [f32; 4],
}

impl SegmentUniforms {
    pub fn new(model_view_projection: Mat4, on: Rgba, off: Rgba) -> Self {
        Self {
            model_view_projection: model_view_projection.to_cols_array_2d(),
            on_color: on.to_array(),
            off_color: off.to_array(),
        }
    }
}

/// Resource factory for segment displays.
///
/// Buffer writes replace the whole buffer; there are no partial updates.
pub trait Backend {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Immutable template vertex buffer plus the shader program that colors it.
    type Font;
    /// Per-instance activation masks, one `u32` per character slot.
    type ValueBuffer;
    /// Per-instance cell offsets, written once.
    type OffsetBuffer;
    /// Per-display [`SegmentUniforms`].
    type UniformBuffer;

    fn create_font(&self, template: &[SegmentVertex]) -> Result<Self::Font, Self::Error>;

    fn create_value_buffer(&self, values: &[u32]) -> Result<Self::ValueBuffer, Self::Error>;

    fn write_values(&self, buffer: &Self::ValueBuffer, values: &[u32]);

    fn create_offset_buffer(
        &self,
        offsets: &[[f32; 2]],
    ) -> Result<Self::OffsetBuffer, Self::Error>;

    fn create_uniform_buffer(&self, font: &Self::Font)
    -> Result<Self::UniformBuffer, Self::Error>;

    fn write_uniforms(&self, buffer: &Self::UniformBuffer, uniforms: &SegmentUniforms);
}

/// Everything needed for one instanced draw of the segment template.
pub struct InstancedDraw<'a, B: Backend + ?Sized> {
    pub font: &'a B::Font,
    pub values: &'a B::ValueBuffer,
    pub offsets: &'a B::OffsetBuffer,
    pub uniforms: &'a B::UniformBuffer,
    pub vertex_count: u32,
    pub instance_count: u32,
}

/// Something a display can be drawn into (a render pass, a recorder).
pub trait DrawTarget<B: Backend + ?Sized> {
    fn draw_instanced(&mut self, draw: InstancedDraw<'_, B>);
}
