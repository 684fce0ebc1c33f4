//! Camera and view management.

use glam::{Mat4, Vec3, Vec4};

use trajview_core::ViewerOptions;

/// A 3D camera with a perspective projection parameterized by pinhole
/// intrinsics (fx, fy, cx, cy), as calibrated viewers express it.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space.
    pub position: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Up vector.
    pub up: Vec3,
    /// Viewport width in pixels.
    pub width: f32,
    /// Viewport height in pixels.
    pub height: f32,
    /// Horizontal focal length in pixels.
    pub fx: f32,
    /// Vertical focal length in pixels.
    pub fy: f32,
    /// Principal point x.
    pub cx: f32,
    /// Principal point y.
    pub cy: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
}

impl Camera {
    /// Creates a camera from the viewer configuration.
    #[must_use]
    pub fn from_options(options: &ViewerOptions) -> Self {
        Self {
            position: options.eye,
            target: options.target,
            up: options.up,
            width: options.width as f32,
            height: options.height as f32,
            fx: options.fx,
            fy: options.fy,
            cx: options.cx,
            cy: options.cy,
            near: options.near,
            far: options.far,
        }
    }

    /// Returns the view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Returns the projection matrix: a right-handed perspective frustum
    /// built from the pinhole intrinsics, mapping depth to wgpu's [0, 1]
    /// clip range.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        // Frustum bounds at the near plane.
        let left = -self.cx * self.near / self.fx;
        let right = (self.width - self.cx) * self.near / self.fx;
        let bottom = -self.cy * self.near / self.fy;
        let top = (self.height - self.cy) * self.near / self.fy;

        let (n, f) = (self.near, self.far);
        Mat4::from_cols(
            Vec4::new(2.0 * n / (right - left), 0.0, 0.0, 0.0),
            Vec4::new(0.0, 2.0 * n / (top - bottom), 0.0, 0.0),
            Vec4::new(
                (right + left) / (right - left),
                (top + bottom) / (top - bottom),
                f / (n - f),
                -1.0,
            ),
            Vec4::new(0.0, 0.0, n * f / (n - f), 0.0),
        )
    }

    /// Returns the combined view-projection matrix.
    #[must_use]
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Returns the camera's forward direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }

    /// Returns the camera's right direction.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.forward().cross(self.up).normalize()
    }

    /// Rescales the intrinsics so the field of view is preserved when the
    /// viewport changes size.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        let (w, h) = (width.max(1) as f32, height.max(1) as f32);
        let sx = w / self.width;
        let sy = h / self.height;
        self.fx *= sx;
        self.cx *= sx;
        self.fy *= sy;
        self.cy *= sy;
        self.width = w;
        self.height = h;
    }

    /// Orbits the camera around the target (turntable about the world Y
    /// axis, clamped away from the poles).
    pub fn orbit(&mut self, delta_x: f32, delta_y: f32) {
        let radius = (self.position - self.target).length();
        let mut theta = (self.position.x - self.target.x).atan2(self.position.z - self.target.z);
        let mut phi = ((self.position.y - self.target.y) / radius).acos();

        theta -= delta_x;
        phi = (phi - delta_y).clamp(0.01, std::f32::consts::PI - 0.01);

        self.position = self.target
            + Vec3::new(
                radius * phi.sin() * theta.sin(),
                radius * phi.cos(),
                radius * phi.sin() * theta.cos(),
            );
    }

    /// Pans the camera: moves position and target together along the
    /// camera's right/up directions.
    pub fn pan(&mut self, delta_x: f32, delta_y: f32) {
        let offset = self.right() * delta_x + self.up * delta_y;
        self.position += offset;
        self.target += offset;
    }

    /// Zooms the camera by moving along the view ray toward or away from
    /// the target, clamped to a minimum distance.
    pub fn zoom(&mut self, delta: f32) {
        let direction = self.forward();
        let distance = (self.position - self.target).length();
        let new_distance = (distance - delta).max(0.1);
        self.position = self.target - direction * new_distance;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_camera() -> Camera {
        Camera::from_options(&ViewerOptions::default())
    }

    #[test]
    fn test_from_options_defaults() {
        let camera = reference_camera();
        assert_eq!(camera.position, Vec3::new(0.0, -0.1, -1.8));
        assert_eq!(camera.target, Vec3::ZERO);
        assert_eq!(camera.up, Vec3::NEG_Y);
        assert_eq!(camera.width, 1024.0);
        assert_eq!(camera.near, 0.1);
        assert_eq!(camera.far, 1000.0);
    }

    #[test]
    fn test_projection_matches_symmetric_perspective() {
        // With the principal point at the viewport center, the pinhole
        // frustum collapses to a symmetric perspective with
        // tan(fov_y / 2) = (h / 2) / fy.
        let camera = Camera {
            cx: 512.0,
            cy: 384.0,
            ..reference_camera()
        };
        let proj = camera.projection_matrix();

        let fov_y = 2.0 * (camera.height / 2.0 / camera.fy).atan();
        let aspect = camera.width / camera.height;
        let expected = Mat4::perspective_rh(fov_y, aspect, camera.near, camera.far);

        for (a, b) in proj
            .to_cols_array()
            .iter()
            .zip(expected.to_cols_array().iter())
        {
            assert!((a - b).abs() < 1e-4, "projection mismatch: {a} vs {b}");
        }
    }

    #[test]
    fn test_projection_is_perspective() {
        let proj = reference_camera().projection_matrix();
        assert!(proj.z_axis.w != 0.0);
        assert_eq!(proj.w_axis.w, 0.0);
    }

    #[test]
    fn test_view_matrix_looks_at_target() {
        let camera = reference_camera();
        let view = camera.view_matrix();
        // The target projects onto the negative view-space Z axis.
        let target_view = view.transform_point3(camera.target);
        assert!(target_view.x.abs() < 1e-6);
        assert!(target_view.y.abs() < 1e-6);
        assert!(target_view.z < 0.0);
    }

    #[test]
    fn test_orbit_preserves_radius() {
        let mut camera = reference_camera();
        let radius = (camera.position - camera.target).length();
        camera.orbit(0.3, -0.2);
        let new_radius = (camera.position - camera.target).length();
        assert!((radius - new_radius).abs() < 1e-4);
    }

    #[test]
    fn test_pan_moves_position_and_target_together() {
        let mut camera = reference_camera();
        let offset_before = camera.position - camera.target;
        camera.pan(0.5, -0.25);
        let offset_after = camera.position - camera.target;
        assert!(offset_before.abs_diff_eq(offset_after, 1e-5));
    }

    #[test]
    fn test_zoom_clamps_minimum_distance() {
        let mut camera = reference_camera();
        camera.zoom(100.0);
        let distance = (camera.position - camera.target).length();
        assert!((distance - 0.1).abs() < 1e-5);
    }

    #[test]
    fn test_set_viewport_preserves_fov() {
        let mut camera = reference_camera();
        let fov_before = 2.0 * (camera.height / 2.0 / camera.fy).atan();
        camera.set_viewport(512, 384);
        let fov_after = 2.0 * (camera.height / 2.0 / camera.fy).atan();
        assert!((fov_before - fov_after).abs() < 1e-6);
        assert_eq!(camera.width, 512.0);
    }
}
