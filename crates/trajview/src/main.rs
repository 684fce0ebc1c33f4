//! Trajectory viewer binary.
//!
//! Usage: `trajview [trajectory-file]`. The file defaults to
//! `trajectory.txt` in the current directory.

use std::process::ExitCode;

use trajview::{load_trajectory, show, ViewerOptions};

const DEFAULT_TRAJECTORY_FILE: &str = "trajectory.txt";

fn main() -> ExitCode {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_TRAJECTORY_FILE.to_string());

    let trajectory = match load_trajectory(&path) {
        Ok(trajectory) => trajectory,
        Err(e) => {
            println!("cannot find trajectory file at {path}");
            log::error!("failed to load {path}: {e}");
            return ExitCode::FAILURE;
        }
    };
    println!("read total {} pose entries", trajectory.len());

    if let Err(e) = show(trajectory, ViewerOptions::default()) {
        log::error!("viewer exited with error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
