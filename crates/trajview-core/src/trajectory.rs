//! Ordered pose sequences.

use glam::Vec3;

use crate::Pose;

/// An ordered sequence of poses. Insertion order equals file order equals
/// time order, and the sequence is immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    poses: Vec<Pose>,
}

impl Trajectory {
    /// Creates a trajectory from poses already in time order.
    #[must_use]
    pub fn new(poses: Vec<Pose>) -> Self {
        Self { poses }
    }

    /// Number of poses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.poses.len()
    }

    /// Returns true if the trajectory holds no poses.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.poses.is_empty()
    }

    /// The poses, in file order.
    #[must_use]
    pub fn poses(&self) -> &[Pose] {
        &self.poses
    }

    /// Number of connecting path segments: one between every consecutive
    /// pair of poses, none after the final pose.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.poses.len().saturating_sub(1)
    }

    /// The pose translations, in file order.
    #[must_use]
    pub fn positions(&self) -> Vec<Vec3> {
        self.poses.iter().map(|p| p.translation).collect()
    }
}

impl FromIterator<Pose> for Trajectory {
    fn from_iter<I: IntoIterator<Item = Pose>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Quat;

    fn pose_at(x: f32) -> Pose {
        Pose::from_parts(Vec3::new(x, 0.0, 0.0), Quat::IDENTITY)
    }

    #[test]
    fn test_segment_count() {
        assert_eq!(Trajectory::default().segment_count(), 0);
        assert_eq!(Trajectory::new(vec![pose_at(0.0)]).segment_count(), 0);

        let traj: Trajectory = (0..5).map(|i| pose_at(i as f32)).collect();
        assert_eq!(traj.len(), 5);
        assert_eq!(traj.segment_count(), 4);
    }

    #[test]
    fn test_positions_preserve_order() {
        let traj: Trajectory = (0..3).map(|i| pose_at(i as f32)).collect();
        let positions = traj.positions();
        assert_eq!(positions.len(), 3);
        for (i, p) in positions.iter().enumerate() {
            assert_eq!(p.x, i as f32);
        }
    }
}
