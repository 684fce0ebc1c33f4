//! trajview: an interactive viewer for timestamped camera trajectories.
//!
//! Loads poses from a whitespace-delimited text file (one record per
//! timestamp: `time tx ty tz qx qy qz qw`), then draws each pose as a
//! small RGB coordinate triad with black segments connecting consecutive
//! positions. The window supports orbit, pan, and zoom with the mouse.
//!
//! ```no_run
//! use trajview::{load_trajectory, show, ViewerOptions};
//!
//! let trajectory = load_trajectory("trajectory.txt").unwrap();
//! show(trajectory, ViewerOptions::default()).unwrap();
//! ```

pub mod app;
pub mod headless;

pub use trajview_core::{
    load_trajectory, Pose, Result, Trajectory, TrajviewError, ViewerOptions,
};
pub use trajview_render::{Camera, RenderEngine};

pub use app::show;
pub use headless::render_to_image;
