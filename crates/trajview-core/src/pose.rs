//! Rigid-body pose representation.

use glam::{Quat, Vec3};

/// A rigid 3D transform: a unit-quaternion rotation plus a translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Rotation component. Always unit-norm.
    pub rotation: Quat,
    /// Translation component.
    pub translation: Vec3,
}

impl Pose {
    /// The identity pose.
    pub const IDENTITY: Self = Self {
        rotation: Quat::IDENTITY,
        translation: Vec3::ZERO,
    };

    /// Creates a pose from a translation and a quaternion.
    ///
    /// Quaternions read from trajectory files are not guaranteed to be
    /// exactly unit-norm, so the rotation is normalized here. A degenerate
    /// (zero or non-finite) quaternion falls back to the identity rotation.
    #[must_use]
    pub fn from_parts(translation: Vec3, rotation: Quat) -> Self {
        let norm_sq = rotation.length_squared();
        let rotation = if norm_sq.is_finite() && norm_sq > f32::EPSILON {
            rotation.normalize()
        } else {
            Quat::IDENTITY
        };
        Self {
            rotation,
            translation,
        }
    }

    /// Applies this transform to a point: `rotation * p + translation`.
    #[must_use]
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        self.rotation * p + self.translation
    }

    /// World-space endpoints of the local X/Y/Z axes, each `scale` units
    /// long, anchored at this pose's translation.
    #[must_use]
    pub fn axis_endpoints(&self, scale: f32) -> [Vec3; 3] {
        [
            self.transform_point(Vec3::X * scale),
            self.transform_point(Vec3::Y * scale),
            self.transform_point(Vec3::Z * scale),
        ]
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}
