//! GPU setup and resource errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GfxError {
    #[error("failed to create window surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),

    #[error("no suitable GPU adapter found: {0}")]
    NoAdapter(#[from] wgpu::RequestAdapterError),

    #[error("GPU device request failed: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),

    #[error("surface reports no supported formats")]
    NoSurfaceFormat,

    #[error("{label} needs {size} bytes, device limit is {max}")]
    BufferTooLarge {
        label: &'static str,
        size: u64,
        max: u64,
    },

    #[error("GPU out of memory")]
    OutOfMemory,
}
