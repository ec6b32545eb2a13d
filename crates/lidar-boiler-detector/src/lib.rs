//! Boiler detector built on top of `lidar-boiler-core`.
//!
//! ## Quickstart
//!
//! ```
//! use lidar_boiler_core::{Point, Segment, SegmentRing};
//! use lidar_boiler_detector::{Alliance, BoilerDetector, BoilerParams};
//!
//! let segments = vec![
//!     Segment::new(Point::new(1924, 383), Point::new(1000, 0)),
//!     Segment::new(Point::new(1000, 0), Point::new(1924, -383)),
//! ];
//! let ring = SegmentRing::new(&segments)?;
//! let detector = BoilerDetector::new(BoilerParams::default())?;
//!
//! let location = detector.locate(&ring, Alliance::Blue);
//! println!("boiler at ({}, {})", location.delta_x, location.delta_y);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Algorithm:
//! 1. Walk the segment ring once, starting at a chosen segment.
//! 2. For each `(current, next)` pair compute the turn angle and keep the
//!    pair if it lies within `target_angle ± angle_range` (135° by default).
//! 3. Require `current.end` to be within `endpoint_distance_mm` of
//!    `next.start`; this rules out turns between unrelated fitted lines.
//! 4. Stop at the first pair passing both tests. Only one boiler is
//!    reported per frame, and with several visible 135° corners the winner
//!    depends on the start segment.
//! 5. Blue measures from `next.start` along `next`, red from `current.end`
//!    along `current`. Half the boiler width goes along the face, the depth
//!    across it with opposite signs for the two alliances.

mod alliance;
mod detector;
mod error;
mod params;
mod resolve;
mod result;
mod scan;

pub use alliance::Alliance;
pub use detector::BoilerDetector;
pub use error::{AllianceError, BoilerParamsError};
pub use params::{
    BoilerGeometry, BoilerParams, CornerParams, ANGLE_RANGE, BOILER_DEPTH, BOILER_WIDTH,
    ENDPOINT_DISTANCE, TARGET_ANGLE,
};
pub use resolve::{reference_face, target_offset};
pub use result::{BoilerDetectionResult, BoilerLocation};
pub use scan::{scan_for_corner, CornerMatch, ScanOutcome};
