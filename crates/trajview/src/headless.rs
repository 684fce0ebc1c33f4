//! Headless rendering API.
//!
//! Renders a trajectory to a raw pixel buffer without opening a window.
//! Useful for integration tests and batch screenshot generation.

use pollster::FutureExt;

use trajview_core::{Result, Trajectory, TrajviewError, ViewerOptions};
use trajview_render::{build_trajectory_lines, Camera, LineSetRenderData, RenderEngine};

/// Renders one frame of the trajectory to an RGBA pixel buffer.
///
/// The returned buffer holds `width * height * 4` bytes, rows ordered
/// top-left to bottom-right. Fails if no GPU adapter is available.
pub fn render_to_image(
    trajectory: &Trajectory,
    options: &ViewerOptions,
    width: u32,
    height: u32,
) -> Result<Vec<u8>> {
    let mut engine = RenderEngine::new_headless(width, height, options)
        .block_on()
        .map_err(|e| TrajviewError::Render(format!("failed to create headless engine: {e}")))?;

    let mut camera = Camera::from_options(options);
    camera.set_viewport(width, height);
    engine.update_camera_uniforms(&camera);

    let vertices = build_trajectory_lines(trajectory, options.axis_scale);
    let lines = LineSetRenderData::new(
        &engine.device,
        engine.bind_group_layout(),
        engine.camera_buffer(),
        &vertices,
    );

    engine
        .render_headless(&lines)
        .map_err(|e| TrajviewError::Render(format!("headless render failed: {e}")))
}
