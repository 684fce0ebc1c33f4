//! Core data model for trajview-rs.
//!
//! This crate holds everything that does not touch a GPU: the [`Pose`] and
//! [`Trajectory`] types, the trajectory file loader, the viewer
//! configuration, and the shared error type.

pub mod error;
pub mod loader;
pub mod options;
pub mod pose;
pub mod trajectory;

pub use error::{Result, TrajviewError};
pub use loader::{load_trajectory, parse_trajectory};
pub use options::ViewerOptions;
pub use pose::Pose;
pub use trajectory::Trajectory;

// Re-export the math types used throughout the public API.
pub use glam::{Mat4, Quat, Vec3, Vec4};
