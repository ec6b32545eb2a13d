//! High-level facade for the `lidar-boiler-*` workspace.
//!
//! This crate provides:
//! - re-exports of the geometry core and the boiler detector
//! - JSON frame/report helpers (`io`)
//! - the `lidar-boiler` CLI (feature `cli`)
//!
//! ## Quickstart
//!
//! ```
//! use lidar_boiler::core::{Point, Segment};
//! use lidar_boiler::detector::Alliance;
//!
//! let segments = [
//!     Segment::new(Point::new(1924, 383), Point::new(1000, 0)),
//!     Segment::new(Point::new(1000, 0), Point::new(1924, -383)),
//! ];
//! let location = lidar_boiler::locate_boiler(&segments, Alliance::Blue.tag());
//! assert!(!location.is_not_found());
//! ```
//!
//! ## API map
//! - `lidar_boiler::core`: points, segments, the segment ring, angle and
//!   adjacency primitives, logger setup.
//! - `lidar_boiler::detector`: corner scan, offset resolution, parameters.
//! - `lidar_boiler::io`: `SegmentFrame` / `BoilerReport` JSON helpers.

pub use lidar_boiler_core as core;
pub use lidar_boiler_detector as detector;

pub use lidar_boiler_core::{Point, Segment, SegmentRing};
pub use lidar_boiler_detector::{
    Alliance, BoilerDetectionResult, BoilerDetector, BoilerLocation, BoilerParams,
};

pub mod io;

/// One-shot lookup with default parameters and a raw alliance tag
/// (0 = blue, 1 = red).
///
/// Returns the `(0, 0)` sentinel for an empty frame, an unknown tag, or a
/// frame without the boiler corner.
pub fn locate_boiler(segments: &[Segment], alliance_tag: u8) -> BoilerLocation {
    match SegmentRing::new(segments) {
        Ok(ring) => BoilerDetector::default().locate_tagged(&ring, alliance_tag),
        Err(err) => {
            log::debug!("{err}");
            BoilerLocation::NOT_FOUND
        }
    }
}
