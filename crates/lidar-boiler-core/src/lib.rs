//! Core types and geometric primitives for boiler localization.
//!
//! This crate is intentionally small and purely geometric. It does *not*
//! depend on any lidar driver or line fitter; callers hand it segments that
//! were already fitted to one sensor frame.

mod adjacency;
mod angle;
mod logger;
mod point;
mod ring;
mod segment;

pub use adjacency::{endpoint_gap_sq, endpoints_adjacent};
pub use angle::{segment_angle, turn_angle};
pub use point::Point;
pub use ring::{RingError, RingPairs, SegmentRing};
pub use segment::{segments_from_closed_polyline, Segment};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_from_verbosity;
