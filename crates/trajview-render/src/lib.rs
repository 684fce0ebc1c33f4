//! Rendering backend for trajview-rs.
//!
//! This crate provides the wgpu-based rendering engine:
//! - GPU resource management (surface, depth buffer, pipelines)
//! - The line-set shader (WGSL) and its buffers
//! - Camera and view management

pub mod camera;
pub mod engine;
pub mod error;
pub mod line_render;

pub use camera::Camera;
pub use engine::{CameraUniforms, RenderEngine};
pub use error::{RenderError, RenderResult};
pub use line_render::{build_trajectory_lines, LineSetRenderData, LineVertex};
