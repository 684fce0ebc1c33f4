//! Line-set geometry and GPU rendering resources.

use glam::Vec3;
use wgpu::util::DeviceExt;

use trajview_core::Trajectory;

/// Axis segment color for the local X axis.
pub const AXIS_X_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Axis segment color for the local Y axis.
pub const AXIS_Y_COLOR: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
/// Axis segment color for the local Z axis.
pub const AXIS_Z_COLOR: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
/// Path segment color.
pub const PATH_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// A single line-list vertex. Position and color are padded to vec4 to
/// match the WGSL storage buffer layout.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LineVertex {
    /// World-space position (w = 1).
    pub position: [f32; 4],
    /// RGBA color.
    pub color: [f32; 4],
}

impl LineVertex {
    fn new(position: Vec3, color: [f32; 4]) -> Self {
        Self {
            position: [position.x, position.y, position.z, 1.0],
            color,
        }
    }
}

/// Expands a trajectory into line-list vertices.
///
/// For every pose, three colored segments run from the translation to the
/// tips of the pose's local X (red), Y (green), and Z (blue) axes, each
/// `axis_scale` units long. After the axes, one black segment connects each
/// pose's translation to the next pose's translation; there is no segment
/// after the final pose.
#[must_use]
pub fn build_trajectory_lines(trajectory: &Trajectory, axis_scale: f32) -> Vec<LineVertex> {
    let n = trajectory.len();
    let mut vertices = Vec::with_capacity((3 * n + trajectory.segment_count()) * 2);

    for pose in trajectory.poses() {
        let origin = pose.translation;
        let [x_tip, y_tip, z_tip] = pose.axis_endpoints(axis_scale);
        vertices.push(LineVertex::new(origin, AXIS_X_COLOR));
        vertices.push(LineVertex::new(x_tip, AXIS_X_COLOR));
        vertices.push(LineVertex::new(origin, AXIS_Y_COLOR));
        vertices.push(LineVertex::new(y_tip, AXIS_Y_COLOR));
        vertices.push(LineVertex::new(origin, AXIS_Z_COLOR));
        vertices.push(LineVertex::new(z_tip, AXIS_Z_COLOR));
    }

    for pair in trajectory.poses().windows(2) {
        vertices.push(LineVertex::new(pair[0].translation, PATH_COLOR));
        vertices.push(LineVertex::new(pair[1].translation, PATH_COLOR));
    }

    vertices
}

/// GPU resources for rendering a set of line segments.
pub struct LineSetRenderData {
    /// Vertex storage buffer (position + color per vertex).
    pub vertex_buffer: wgpu::Buffer,
    /// Bind group for this line set.
    pub bind_group: wgpu::BindGroup,
    /// Number of vertices to draw (two per segment).
    pub num_vertices: u32,
}

impl LineSetRenderData {
    /// Creates new render data from line-list vertices.
    #[must_use]
    pub fn new(
        device: &wgpu::Device,
        bind_group_layout: &wgpu::BindGroupLayout,
        camera_buffer: &wgpu::Buffer,
        vertices: &[LineVertex],
    ) -> Self {
        // wgpu rejects zero-sized buffers; an empty set keeps one zeroed
        // vertex and draws none of it.
        let contents: &[LineVertex] = if vertices.is_empty() {
            &[LineVertex {
                position: [0.0; 4],
                color: [0.0; 4],
            }]
        } else {
            vertices
        };

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("line set vertices"),
            contents: bytemuck::cast_slice(contents),
            usage: wgpu::BufferUsages::STORAGE | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("line set bind group"),
            layout: bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: camera_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: vertex_buffer.as_entire_binding(),
                },
            ],
        });

        Self {
            vertex_buffer,
            bind_group,
            num_vertices: vertices.len() as u32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Quat;
    use trajview_core::Pose;

    fn trajectory_of(n: usize) -> Trajectory {
        (0..n)
            .map(|i| Pose::from_parts(Vec3::new(i as f32, 0.0, 0.0), Quat::IDENTITY))
            .collect()
    }

    #[test]
    fn test_vertex_counts() {
        // 3 axis segments per pose plus N-1 path segments, 2 vertices each.
        assert_eq!(build_trajectory_lines(&trajectory_of(0), 0.1).len(), 0);
        assert_eq!(build_trajectory_lines(&trajectory_of(1), 0.1).len(), 6);
        assert_eq!(build_trajectory_lines(&trajectory_of(4), 0.1).len(), 30);
    }

    #[test]
    fn test_axis_segments_and_colors() {
        let traj = Trajectory::new(vec![Pose::from_parts(
            Vec3::new(1.0, 2.0, 3.0),
            Quat::IDENTITY,
        )]);
        let verts = build_trajectory_lines(&traj, 0.1);

        assert_eq!(verts[0].position, [1.0, 2.0, 3.0, 1.0]);
        assert_eq!(verts[1].position, [1.1, 2.0, 3.0, 1.0]);
        assert_eq!(verts[0].color, AXIS_X_COLOR);
        assert_eq!(verts[3].position, [1.0, 2.1, 3.0, 1.0]);
        assert_eq!(verts[3].color, AXIS_Y_COLOR);
        assert_eq!(verts[5].position, [1.0, 2.0, 3.1, 1.0]);
        assert_eq!(verts[5].color, AXIS_Z_COLOR);
    }

    #[test]
    fn test_path_segments_connect_consecutive_poses() {
        let traj = trajectory_of(3);
        let verts = build_trajectory_lines(&traj, 0.1);

        // Axis vertices first (3 poses * 6), then 2 path segments.
        let path = &verts[18..];
        assert_eq!(path.len(), 4);
        assert_eq!(path[0].position, [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(path[1].position, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(path[2].position, [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(path[3].position, [2.0, 0.0, 0.0, 1.0]);
        assert!(path.iter().all(|v| v.color == PATH_COLOR));
    }

    #[test]
    fn test_rotated_axis_endpoints() {
        // 90 degrees about Z: local X points along world Y.
        let rot = Quat::from_rotation_z(std::f32::consts::FRAC_PI_2);
        let traj = Trajectory::new(vec![Pose::from_parts(Vec3::ZERO, rot)]);
        let verts = build_trajectory_lines(&traj, 0.1);

        let x_tip = Vec3::new(verts[1].position[0], verts[1].position[1], verts[1].position[2]);
        assert!(x_tip.abs_diff_eq(Vec3::new(0.0, 0.1, 0.0), 1e-6));
    }

    #[test]
    fn test_line_vertex_layout() {
        // Two vec4s per vertex; must match the WGSL LineVertex struct.
        assert_eq!(std::mem::size_of::<LineVertex>(), 32);
        assert_eq!(std::mem::size_of::<LineVertex>() % 16, 0);
    }
}
