//! GPU Rendering Subsystem.
//!
//! Manages the wgpu device, surface, and the segment pipeline.
//! Sub-modules:
//!   renderer — wgpu device/surface lifecycle, frame orchestration
//!   segments — instanced 16-segment pipeline (the core `Backend` on wgpu)
//!   error    — setup and resource errors

mod error;
mod renderer;
mod segments;

pub use error::GfxError;
pub use renderer::GpuState;
pub use segments::{WgpuBackend, WgpuFont, WgpuUniforms};
