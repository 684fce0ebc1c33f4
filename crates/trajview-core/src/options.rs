//! Viewer configuration.
//!
//! The window and camera constants live in one structure instead of being
//! scattered as literals, so tests can run with small synthetic viewports or
//! a headless backend.

use std::time::Duration;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Configuration for the trajectory viewer window and camera.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewerOptions {
    /// Window width in pixels.
    pub width: u32,
    /// Window height in pixels.
    pub height: u32,

    /// Horizontal focal length in pixels.
    pub fx: f32,
    /// Vertical focal length in pixels.
    pub fy: f32,
    /// Principal point x, in pixels.
    pub cx: f32,
    /// Principal point y, in pixels.
    pub cy: f32,
    /// Near clip plane.
    pub near: f32,
    /// Far clip plane.
    pub far: f32,

    /// Initial camera position.
    pub eye: Vec3,
    /// Initial look-at target.
    pub target: Vec3,
    /// Up direction. The default views the trajectory with Y inverted.
    pub up: Vec3,

    /// Window title.
    pub title: String,
    /// Background color (RGB).
    pub background_color: Vec3,
    /// Length of each pose's axis segments, in world units.
    pub axis_scale: f32,
    /// Fixed per-frame sleep capping the frame rate.
    pub frame_interval: Duration,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            fx: 500.0,
            fy: 500.0,
            cx: 512.0,
            cy: 389.0,
            near: 0.1,
            far: 1000.0,
            eye: Vec3::new(0.0, -0.1, -1.8),
            target: Vec3::ZERO,
            up: Vec3::NEG_Y,
            title: "Trajectory Viewer".to_string(),
            background_color: Vec3::ONE,
            axis_scale: 0.1,
            frame_interval: Duration::from_millis(5),
        }
    }
}
