//! Trajectory file loading.
//!
//! Input format: plain text, 8 whitespace-separated numeric fields per
//! record, `time tx ty tz qx qy qz qw`. No header, no delimiter other than
//! whitespace. The timestamp is read but not retained.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use glam::{Quat, Vec3};

use crate::error::Result;
use crate::{Pose, Trajectory};

const FIELDS_PER_RECORD: usize = 8;

/// Loads a trajectory from a file on disk.
///
/// # Errors
///
/// Returns [`crate::TrajviewError::Io`] when the path cannot be opened.
/// There is no retry and no fallback path.
pub fn load_trajectory(path: impl AsRef<Path>) -> Result<Trajectory> {
    let file = File::open(path.as_ref())?;
    parse_trajectory(BufReader::new(file))
}

/// Parses a trajectory from any buffered reader.
///
/// Reads records until the input is exhausted. The read is strict: a record
/// is appended only once all 8 of its fields have parsed, so a trailing
/// partial record or a malformed numeric token ends the read at the last
/// complete record with a warning, never with a spurious pose.
///
/// # Errors
///
/// Returns [`crate::TrajviewError::Io`] when reading from the underlying
/// stream fails.
pub fn parse_trajectory(reader: impl BufRead) -> Result<Trajectory> {
    let mut poses = Vec::new();
    let mut fields = [0.0f32; FIELDS_PER_RECORD];
    let mut filled = 0usize;

    for line in reader.lines() {
        for token in line?.split_whitespace() {
            let Ok(value) = token.parse::<f32>() else {
                log::warn!(
                    "stopping at malformed numeric token {token:?} after {} complete records",
                    poses.len()
                );
                return Ok(finish(poses, filled));
            };
            fields[filled] = value;
            filled += 1;
            if filled == FIELDS_PER_RECORD {
                poses.push(record_to_pose(&fields));
                filled = 0;
            }
        }
    }

    Ok(finish(poses, filled))
}

fn finish(poses: Vec<Pose>, leftover: usize) -> Trajectory {
    if leftover > 0 {
        log::warn!("dropping trailing partial record ({leftover} of {FIELDS_PER_RECORD} fields)");
    }
    Trajectory::new(poses)
}

fn record_to_pose(fields: &[f32; FIELDS_PER_RECORD]) -> Pose {
    // fields[0] is the timestamp, which the viewer does not use.
    let translation = Vec3::new(fields[1], fields[2], fields[3]);
    let rotation = Quat::from_xyzw(fields[4], fields[5], fields[6], fields[7]);
    Pose::from_parts(translation, rotation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::fmt::Write as _;
    use std::io::Cursor;

    fn parse_str(input: &str) -> Trajectory {
        parse_trajectory(Cursor::new(input)).expect("in-memory parse cannot fail")
    }

    #[test]
    fn test_single_record() {
        let traj = parse_str("0 1 2 3 0 0 0 1\n");
        assert_eq!(traj.len(), 1);
        let pose = traj.poses()[0];
        assert_eq!(pose.translation, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(pose.rotation, Quat::IDENTITY);

        let [x, y, z] = pose.axis_endpoints(0.1);
        assert!(x.abs_diff_eq(Vec3::new(1.1, 2.0, 3.0), 1e-6));
        assert!(y.abs_diff_eq(Vec3::new(1.0, 2.1, 3.0), 1e-6));
        assert!(z.abs_diff_eq(Vec3::new(1.0, 2.0, 3.1), 1e-6));
    }

    #[test]
    fn test_multiple_records_one_per_line() {
        let traj = parse_str(
            "0.0 0 0 0 0 0 0 1\n\
             0.1 1 0 0 0 0 0 1\n\
             0.2 2 0 0 0 0 0 1\n",
        );
        assert_eq!(traj.len(), 3);
        assert_eq!(traj.segment_count(), 2);
        assert_eq!(traj.poses()[2].translation, Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_token_stream_without_newlines() {
        // Records may span lines arbitrarily; only token order matters.
        let traj = parse_str("0 0 0 0 0 0 0 1 1 1\n0 0 0 0 0 1");
        assert_eq!(traj.len(), 2);
        assert_eq!(traj.poses()[1].translation, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_missing_trailing_newline() {
        let traj = parse_str("0 1 2 3 0 0 0 1");
        assert_eq!(traj.len(), 1);
    }

    #[test]
    fn test_trailing_partial_record_is_dropped() {
        let traj = parse_str("0 1 2 3 0 0 0 1\n0.1 4 5\n");
        assert_eq!(traj.len(), 1);
    }

    #[test]
    fn test_malformed_token_stops_at_last_complete_record() {
        let traj = parse_str("0 1 2 3 0 0 0 1\n0.1 x 5 6 0 0 0 1\n");
        assert_eq!(traj.len(), 1);
        assert_eq!(traj.poses()[0].translation, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_str("").is_empty());
        assert!(parse_str("\n\n  \n").is_empty());
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("trajview-no-such-file-48151623.txt");
        let err = load_trajectory(&path).unwrap_err();
        match err {
            crate::TrajviewError::Io(io) => {
                assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("expected I/O error, got {other}"),
        }
    }

    #[test]
    fn test_load_from_disk() {
        let path = std::env::temp_dir().join("trajview-loader-test.txt");
        std::fs::write(&path, "0 1 2 3 0 0 0 1\n1 4 5 6 0 0 0 1\n").unwrap();
        let traj = load_trajectory(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(traj.len(), 2);
        assert_eq!(traj.poses()[1].translation, Vec3::new(4.0, 5.0, 6.0));
    }

    proptest! {
        /// Formatting any finite records as text and parsing them back
        /// yields the same count and the same translations.
        #[test]
        fn prop_format_parse_roundtrip(records in prop::collection::vec(
            (-1000.0f32..1000.0, -1000.0f32..1000.0, -1000.0f32..1000.0),
            0..32,
        )) {
            let mut text = String::new();
            for (i, (tx, ty, tz)) in records.iter().enumerate() {
                writeln!(text, "{i} {tx} {ty} {tz} 0 0 0 1").unwrap();
            }

            let traj = parse_str(&text);
            prop_assert_eq!(traj.len(), records.len());
            for (pose, (tx, ty, tz)) in traj.poses().iter().zip(&records) {
                prop_assert!(pose.translation.abs_diff_eq(Vec3::new(*tx, *ty, *tz), 1e-3));
            }
        }
    }
}
