//! A row of 16-segment characters drawn with one instanced call.
//!
//! The display keeps a CPU copy of every slot's activation mask and mirrors
//! it into the backend's value buffer. Text updates only touch that buffer;
//! the template and offsets never change after construction.

use std::sync::Arc;

use glam::{Mat4, Vec2};

use crate::backend::{Backend, DrawTarget, InstancedDraw, SegmentUniforms};
use crate::color::Rgba;
use crate::font::{self, CHARACTER_WIDTH, VERTEX_COUNT};
use crate::transform;

/// Number of character slots in a display when the caller has no preference.
pub const DEFAULT_LENGTH: usize = 10;

/// Default shear; positive leans right.
pub const DEFAULT_SLANT: f32 = 0.2;

// ════════════════════════════════════════════════════════════════════
// Shared Font Resources
// ════════════════════════════════════════════════════════════════════

/// Backend copy of the segment template and shader.
///
/// Build one per backend and hand clones of the `Arc` to every display.
pub struct SegmentFont<B: Backend> {
    resources: B::Font,
}

impl<B: Backend> SegmentFont<B> {
    pub fn new(backend: &B) -> Result<Arc<Self>, B::Error> {
        let resources = backend.create_font(font::template())?;
        tracing::debug!(vertices = VERTEX_COUNT, "segment font uploaded");
        Ok(Arc::new(Self { resources }))
    }

    pub fn resources(&self) -> &B::Font {
        &self.resources
    }
}

// ════════════════════════════════════════════════════════════════════
// Slots
// ════════════════════════════════════════════════════════════════════

/// One character position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplaySlot {
    /// Cell-space offset of this character, `[index * 16, 0]`.
    pub offset: [f32; 2],
    /// Segment mask currently shown.
    pub value: u16,
}

// ════════════════════════════════════════════════════════════════════
// Display
// ════════════════════════════════════════════════════════════════════

pub struct Display<B: Backend> {
    font: Arc<SegmentFont<B>>,
    slots: Vec<DisplaySlot>,
    text: String,

    pub(crate) position: Vec2,
    pub(crate) scale: f32,
    pub(crate) slant: f32,
    on_color: Rgba,
    off_color: Rgba,

    /// Set when `slots` differs from what the value buffer holds.
    dirty: bool,

    values: B::ValueBuffer,
    offsets: B::OffsetBuffer,
    uniforms: B::UniformBuffer,
}

impl<B: Backend> Display<B> {
    /// Allocate a blank display with `length` character slots.
    pub fn new(backend: &B, font: Arc<SegmentFont<B>>, length: usize) -> Result<Self, B::Error> {
        let slots: Vec<DisplaySlot> = (0..length)
            .map(|d| DisplaySlot {
                offset: [(CHARACTER_WIDTH as usize * d) as f32, 0.0],
                value: 0,
            })
            .collect();

        let offsets: Vec<[f32; 2]> = slots.iter().map(|s| s.offset).collect();
        let values = vec![0u32; length];

        let values = backend.create_value_buffer(&values)?;
        let offsets = backend.create_offset_buffer(&offsets)?;
        let uniforms = backend.create_uniform_buffer(font.resources())?;

        tracing::debug!(length, "display created");

        Ok(Self {
            font,
            slots,
            text: " ".repeat(length),
            position: Vec2::ZERO,
            scale: 1.0,
            slant: DEFAULT_SLANT,
            on_color: Rgba::DEFAULT_ON,
            off_color: Rgba::DEFAULT_OFF,
            dirty: false,
            values,
            offsets,
            uniforms,
        })
    }

    // ── Configuration (chainable) ────────────────────────────────────

    /// Set the top-left position.
    pub fn position(&mut self, p: Vec2) -> &mut Self {
        self.position = p;
        self
    }

    /// Shear factor. Positive leans right, negative leans left.
    pub fn slant(&mut self, s: f32) -> &mut Self {
        self.slant = s;
        self
    }

    /// Uniform scale. The unscaled cell is 16 x 24.
    pub fn scale(&mut self, s: f32) -> &mut Self {
        self.scale = s;
        self
    }

    pub fn colors(&mut self, on: Rgba, off: Rgba) -> &mut Self {
        self.on_color = on;
        self.off_color = off;
        self
    }

    /// Show `text`. Longer strings are truncated, shorter ones padded with
    /// spaces. Characters without a pattern render blank.
    pub fn display(&mut self, text: &str) -> &mut Self {
        let mut chars = text.chars();
        let mut shown = String::with_capacity(self.slots.len());
        let mut changed = false;

        for slot in &mut self.slots {
            let c = chars.next().unwrap_or(' ');
            shown.push(c);
            let value = font::lookup_char(c);
            if slot.value != value {
                slot.value = value;
                changed = true;
            }
        }

        self.text = shown;
        self.dirty |= changed;
        self
    }

    // ── Accessors ────────────────────────────────────────────────────

    pub fn get_position(&self) -> Vec2 {
        self.position
    }

    pub fn get_scale(&self) -> f32 {
        self.scale
    }

    pub fn get_slant(&self) -> f32 {
        self.slant
    }

    pub fn on_color(&self) -> Rgba {
        self.on_color
    }

    pub fn off_color(&self) -> Rgba {
        self.off_color
    }

    /// Number of character slots. Fixed at construction.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slots(&self) -> &[DisplaySlot] {
        &self.slots
    }

    /// Current activation mask of every slot, in order.
    pub fn activations(&self) -> Vec<u16> {
        self.slots.iter().map(|s| s.value).collect()
    }

    /// The text as shown: exactly `len()` characters after padding/truncation.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Pattern lookup, kept on the display for callers that only hold one.
    pub fn value_of(&self, c: char) -> u16 {
        font::lookup_char(c)
    }

    pub fn font(&self) -> &Arc<SegmentFont<B>> {
        &self.font
    }

    // ── Rendering ────────────────────────────────────────────────────

    /// Model transform lifted to 4x4 for the shader.
    pub fn model_matrix(&self) -> Mat4 {
        transform::affine_to_mat4(transform::model_transform(
            self.position,
            self.scale,
            self.slant,
        ))
    }

    /// Push pending text changes into the backend's value buffer.
    ///
    /// Returns true if a write happened. `draw` calls this itself.
    pub fn sync(&mut self, backend: &B) -> bool {
        if !self.dirty {
            return false;
        }
        let values: Vec<u32> = self.slots.iter().map(|s| u32::from(s.value)).collect();
        backend.write_values(&self.values, &values);
        self.dirty = false;
        tracing::debug!(text = %self.text, "activation buffer written");
        true
    }

    /// Issue this display's instanced draw.
    ///
    /// `view_projection` maps the display's coordinate space to clip space;
    /// see [`transform::pixel_projection`].
    pub fn draw<T>(&mut self, backend: &B, target: &mut T, view_projection: Mat4)
    where
        T: DrawTarget<B> + ?Sized,
    {
        if self.slots.is_empty() {
            return;
        }

        self.sync(backend);

        let uniforms = SegmentUniforms::new(
            view_projection * self.model_matrix(),
            self.on_color,
            self.off_color,
        );
        backend.write_uniforms(&self.uniforms, &uniforms);

        target.draw_instanced(InstancedDraw {
            font: self.font.resources(),
            values: &self.values,
            offsets: &self.offsets,
            uniforms: &self.uniforms,
            vertex_count: VERTEX_COUNT as u32,
            instance_count: self.slots.len() as u32,
        });
    }
}

impl<B: Backend> std::fmt::Debug for Display<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Display")
            .field("text", &self.text)
            .field("position", &self.position)
            .field("scale", &self.scale)
            .field("slant", &self.slant)
            .field("on_color", &self.on_color)
            .field("off_color", &self.off_color)
            .finish_non_exhaustive()
    }
}
