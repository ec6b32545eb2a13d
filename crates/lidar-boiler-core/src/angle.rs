use std::f64::consts::TAU;

use crate::Segment;

/// Angle in radians of the vector from `end` to `start`.
#[inline]
pub fn segment_angle(segment: &Segment) -> f64 {
    let dy = f64::from(segment.start.y) - f64::from(segment.end.y);
    let dx = f64::from(segment.start.x) - f64::from(segment.end.x);
    dy.atan2(dx)
}

/// Turn at the corner shared by two consecutive segments, in `[0, 2π)`.
pub fn turn_angle(first: &Segment, second: &Segment) -> f64 {
    let mut angle = segment_angle(second) - segment_angle(first);
    if angle < 0.0 {
        angle += TAU;
    }
    // A tiny negative difference can round up to exactly 2π.
    if angle >= TAU {
        angle -= TAU;
    }
    angle
}
