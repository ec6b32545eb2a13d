use crate::Segment;

/// Squared distance between `first.end` and `second.start`.
#[inline]
pub fn endpoint_gap_sq(first: &Segment, second: &Segment) -> i64 {
    first.end.distance_sq(second.start)
}

/// True when `first` ends strictly closer than `max_distance` millimeters to
/// where `second` starts.
///
/// The threshold is an absolute distance; it is not scaled by segment length.
#[inline]
pub fn endpoints_adjacent(first: &Segment, second: &Segment, max_distance: u16) -> bool {
    let limit = i64::from(max_distance);
    endpoint_gap_sq(first, second) < limit * limit
}
