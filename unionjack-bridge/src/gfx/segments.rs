// unionjack-bridge/src/gfx/segments.rs
//! Instanced segment pipeline.
//!
//! Implements the core `Backend` on wgpu. The template lives in one static
//! vertex buffer; each display adds two per-instance buffers (cell offsets
//! and activation masks) and a uniform buffer for its MVP and colors. The
//! segments.wgsl vertex shader picks the on/off color per vertex.

use wgpu::util::DeviceExt;
use wgpu::{
    BindGroup, BindGroupLayout, Buffer, BufferUsages, Device, Queue, RenderPass, RenderPipeline,
    TextureFormat,
};

use unionjack_core::{Backend, DrawTarget, InstancedDraw, SegmentUniforms, SegmentVertex};

use super::GfxError;

// ════════════════════════════════════════════════════════════════════
// Vertex Layouts
// ════════════════════════════════════════════════════════════════════

const TEMPLATE_ATTRIBS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x2, 1 => Uint32];
const OFFSET_ATTRIBS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![2 => Float32x2];
const VALUE_ATTRIBS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![3 => Uint32];

fn template_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<SegmentVertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &TEMPLATE_ATTRIBS,
    }
}

fn offset_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &OFFSET_ATTRIBS,
    }
}

fn value_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<u32>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &VALUE_ATTRIBS,
    }
}

// ════════════════════════════════════════════════════════════════════
// Resources
// ════════════════════════════════════════════════════════════════════

/// Template vertex buffer plus the pipeline that draws it.
pub struct WgpuFont {
    pipeline: RenderPipeline,
    uniform_layout: BindGroupLayout,
    vertices: Buffer,
}

/// A display's uniform buffer and the bind group exposing it.
pub struct WgpuUniforms {
    buffer: Buffer,
    bind_group: BindGroup,
}

// ════════════════════════════════════════════════════════════════════
// Backend
// ════════════════════════════════════════════════════════════════════

/// wgpu implementation of the segment display backend.
pub struct WgpuBackend {
    device: Device,
    queue: Queue,
    format: TextureFormat,
}

impl WgpuBackend {
    pub fn new(device: Device, queue: Queue, format: TextureFormat) -> Self {
        Self {
            device,
            queue,
            format,
        }
    }

    pub fn device(&self) -> &Device {
        &self.device
    }

    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    pub fn format(&self) -> TextureFormat {
        self.format
    }

    fn check_size(&self, label: &'static str, size: usize) -> Result<(), GfxError> {
        let max = self.device.limits().max_buffer_size;
        let size = size as u64;
        if size > max {
            return Err(GfxError::BufferTooLarge { label, size, max });
        }
        Ok(())
    }

    fn create_pipeline(&self, uniform_layout: &BindGroupLayout) -> RenderPipeline {
        let shader = self
            .device
            .create_shader_module(wgpu::ShaderModuleDescriptor {
                label: Some("segments.wgsl"),
                source: wgpu::ShaderSource::Wgsl(include_str!("segments.wgsl").into()),
            });

        let pipeline_layout = self
            .device
            .create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("segments-pl"),
                bind_group_layouts: &[uniform_layout],
                immediate_size: 0,
            });

        self.device
            .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some("segments-pipeline"),
                layout: Some(&pipeline_layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    buffers: &[template_layout(), offset_layout(), value_layout()],
                    compilation_options: Default::default(),
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: self.format,
                        blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                    compilation_options: Default::default(),
                }),
                primitive: wgpu::PrimitiveState {
                    topology: wgpu::PrimitiveTopology::TriangleList,
                    // Template winding is mixed; every triangle must draw.
                    cull_mode: None,
                    ..Default::default()
                },
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                cache: None,
                multiview_mask: None,
            })
    }
}

impl Backend for WgpuBackend {
    type Error = GfxError;
    type Font = WgpuFont;
    type ValueBuffer = Buffer;
    type OffsetBuffer = Buffer;
    type UniformBuffer = WgpuUniforms;

    fn create_font(&self, template: &[SegmentVertex]) -> Result<WgpuFont, GfxError> {
        let uniform_layout =
            self.device
                .create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                    label: Some("segments-bgl"),
                    entries: &[wgpu::BindGroupLayoutEntry {
                        binding: 0,
                        visibility: wgpu::ShaderStages::VERTEX,
                        ty: wgpu::BindingType::Buffer {
                            ty: wgpu::BufferBindingType::Uniform,
                            has_dynamic_offset: false,
                            min_binding_size: None,
                        },
                        count: None,
                    }],
                });

        let pipeline = self.create_pipeline(&uniform_layout);

        let vertices = self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("segments-template"),
                contents: bytemuck::cast_slice(template),
                usage: BufferUsages::VERTEX,
            });

        tracing::info!(vertices = template.len(), format = ?self.format, "segment pipeline ready");

        Ok(WgpuFont {
            pipeline,
            uniform_layout,
            vertices,
        })
    }

    fn create_value_buffer(&self, values: &[u32]) -> Result<Buffer, GfxError> {
        let bytes: &[u8] = bytemuck::cast_slice(values);
        self.check_size("segments-values", bytes.len())?;
        Ok(self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("segments-values"),
                contents: bytes,
                usage: BufferUsages::VERTEX | BufferUsages::COPY_DST,
            }))
    }

    fn write_values(&self, buffer: &Buffer, values: &[u32]) {
        if values.is_empty() {
            return;
        }
        self.queue
            .write_buffer(buffer, 0, bytemuck::cast_slice(values));
    }

    fn create_offset_buffer(&self, offsets: &[[f32; 2]]) -> Result<Buffer, GfxError> {
        let bytes: &[u8] = bytemuck::cast_slice(offsets);
        self.check_size("segments-offsets", bytes.len())?;
        Ok(self
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("segments-offsets"),
                contents: bytes,
                usage: BufferUsages::VERTEX,
            }))
    }

    fn create_uniform_buffer(&self, font: &WgpuFont) -> Result<WgpuUniforms, GfxError> {
        let buffer = self.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("segments-uniforms"),
            size: std::mem::size_of::<SegmentUniforms>() as u64,
            usage: BufferUsages::UNIFORM | BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = self.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("segments-bg"),
            layout: &font.uniform_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
        });

        Ok(WgpuUniforms { buffer, bind_group })
    }

    fn write_uniforms(&self, buffer: &WgpuUniforms, uniforms: &SegmentUniforms) {
        let mut uniforms = *uniforms;
        // sRGB targets blend in linear space; configured colors are sRGB.
        if self.format.is_srgb() {
            uniforms.on_color = unionjack_core::Rgba::from(uniforms.on_color)
                .to_linear()
                .to_array();
            uniforms.off_color = unionjack_core::Rgba::from(uniforms.off_color)
                .to_linear()
                .to_array();
        }
        self.queue
            .write_buffer(&buffer.buffer, 0, bytemuck::bytes_of(&uniforms));
    }
}

// ════════════════════════════════════════════════════════════════════
// Draw Target
// ════════════════════════════════════════════════════════════════════

impl DrawTarget<WgpuBackend> for RenderPass<'_> {
    fn draw_instanced(&mut self, draw: InstancedDraw<'_, WgpuBackend>) {
        self.set_pipeline(&draw.font.pipeline);
        self.set_bind_group(0, &draw.uniforms.bind_group, &[]);
        self.set_vertex_buffer(0, draw.font.vertices.slice(..));
        self.set_vertex_buffer(1, draw.offsets.slice(..));
        self.set_vertex_buffer(2, draw.values.slice(..));
        self.draw(0..draw.vertex_count, 0..draw.instance_count);
    }
}
