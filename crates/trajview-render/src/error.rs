//! Rendering error types.

use thiserror::Error;

/// Errors that can occur during rendering operations.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Failed to create wgpu adapter.
    #[error("failed to create graphics adapter")]
    AdapterCreationFailed,

    /// Failed to create wgpu device.
    #[error("failed to create graphics device: {0}")]
    DeviceCreationFailed(#[from] wgpu::RequestDeviceError),

    /// Failed to create surface.
    #[error("failed to create surface: {0}")]
    SurfaceCreationFailed(#[from] wgpu::CreateSurfaceError),

    /// The engine was asked to render in a mode it was not built for.
    #[error("no render target: {0}")]
    NoRenderTarget(&'static str),

    /// Out of memory.
    #[error("out of memory")]
    OutOfMemory,

    /// Reading rendered pixels back from the GPU failed.
    #[error("pixel readback failed: {0}")]
    ReadbackFailed(String),
}

/// A specialized Result type for rendering operations.
pub type RenderResult<T> = std::result::Result<T, RenderError>;
