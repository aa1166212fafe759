//! wgpu device/surface lifecycle and per-frame orchestration.
//!
//! GpuState owns the surface and the segment backend (device + queue). It
//! acquires the swapchain texture each frame, opens one render pass, and
//! hands it to the caller to draw displays into.

use std::sync::Arc;

use glam::Mat4;
use wgpu::{
    Backends, DeviceDescriptor, Instance, InstanceDescriptor, PowerPreference, RenderPass,
    RequestAdapterOptions, Surface, SurfaceConfiguration, TextureUsages, TextureViewDescriptor,
};
use winit::dpi::PhysicalSize;
use winit::window::Window;

use unionjack_core::transform::pixel_projection;
use unionjack_core::{Rgba, SegmentFont};

use super::{GfxError, WgpuBackend};

/// Owns all GPU state. Created once per window.
pub struct GpuState {
    pub surface: Surface<'static>,
    pub config: SurfaceConfiguration,
    pub size: PhysicalSize<u32>,

    pub backend: WgpuBackend,
    /// Shared segment template + pipeline for every display on this device.
    pub font: Arc<SegmentFont<WgpuBackend>>,
}

impl GpuState {
    /// Initialize wgpu with the given window. Blocks until the adapter is ready.
    pub fn new(window: Arc<Window>) -> Result<Self, GfxError> {
        let size = window.inner_size();
        let width = size.width.max(1);
        let height = size.height.max(1);

        let instance = Instance::new(&InstanceDescriptor {
            backends: Backends::all(),
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = pollster::block_on(instance.request_adapter(&RequestAdapterOptions {
            power_preference: PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))?;

        tracing::info!(
            "GPU adapter: {} ({:?})",
            adapter.get_info().name,
            adapter.get_info().backend
        );

        let (device, queue) = pollster::block_on(adapter.request_device(&DeviceDescriptor {
            label: Some("unionjack-device"),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            ..Default::default()
        }))?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .ok_or(GfxError::NoSurfaceFormat)?;

        let config = SurfaceConfiguration {
            usage: TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let backend = WgpuBackend::new(device, queue, format);
        let font = SegmentFont::new(&backend)?;

        Ok(Self {
            surface,
            config,
            size: PhysicalSize::new(width, height),
            backend,
            font,
        })
    }

    /// Handle window resize.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.size = new_size;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(self.backend.device(), &self.config);
    }

    /// Pixel-space projection for the current surface size.
    pub fn view_projection(&self) -> Mat4 {
        pixel_projection(self.config.width as f32, self.config.height as f32)
    }

    /// Render a frame. Returns Ok(true) if a frame was presented, Ok(false) if skipped.
    pub fn render_frame(
        &mut self,
        clear_color: Rgba,
        draw_fn: impl FnOnce(&mut RenderPass<'_>, &WgpuBackend, Mat4),
    ) -> Result<bool, GfxError> {
        let output = match self.surface.get_current_texture() {
            Ok(tex) => tex,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(self.backend.device(), &self.config);
                return Ok(false);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                return Err(GfxError::OutOfMemory);
            }
            Err(e) => {
                tracing::warn!("Surface error: {:?}", e);
                return Ok(false);
            }
        };

        let view = output
            .texture
            .create_view(&TextureViewDescriptor::default());

        let view_projection = self.view_projection();
        let clear = if self.backend.format().is_srgb() {
            clear_color.to_linear()
        } else {
            clear_color
        };

        let mut encoder =
            self.backend
                .device()
                .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                    label: Some("frame-encoder"),
                });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("main-pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: clear.r as f64,
                            g: clear.g as f64,
                            b: clear.b as f64,
                            a: clear.a as f64,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

            // Displays write their buffers through the queue before the
            // encoder is submitted, so the pass sees this frame's data.
            draw_fn(&mut pass, &self.backend, view_projection);
        }

        self.backend
            .queue()
            .submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(true)
    }
}
