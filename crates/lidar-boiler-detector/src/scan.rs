//! Corner scanner: one bounded forward pass over the segment ring.

use lidar_boiler_core::{endpoint_gap_sq, endpoints_adjacent, turn_angle, SegmentRing};
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::CornerParams;

/// Accepted corner between `first` and its successor `second` in the ring.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CornerMatch {
    pub first: usize,
    pub second: usize,
    /// Turn angle at the corner, radians in `[0, 2π)`.
    pub turn_angle: f64,
    /// Squared distance between `first.end` and `second.start`, mm².
    pub gap_sq: i64,
}

/// Terminal state of a scan.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScanOutcome {
    Found(CornerMatch),
    NotFound,
}

impl ScanOutcome {
    pub fn corner(self) -> Option<CornerMatch> {
        match self {
            ScanOutcome::Found(corner) => Some(corner),
            ScanOutcome::NotFound => None,
        }
    }
}

/// Walk the ring from `start` and stop at the first pair whose turn angle is
/// inside the corner window and whose endpoints are adjacent.
///
/// Visits at most `ring.len()` pairs. When several pairs qualify the result
/// depends on `start`.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(ring, params), fields(segments = ring.len()))
)]
pub fn scan_for_corner(ring: &SegmentRing<'_>, start: usize, params: &CornerParams) -> ScanOutcome {
    for (index, current, next) in ring.pairs_from(start) {
        let angle = turn_angle(current, next);
        log::trace!("pair {index}: turn {:.2}°", angle.to_degrees());
        if !params.accepts_angle(angle) {
            continue;
        }

        let gap_sq = endpoint_gap_sq(current, next);
        if !endpoints_adjacent(current, next, params.endpoint_distance_mm) {
            log::debug!(
                "pair {index}: turn {:.2}° in window but endpoint gap² {gap_sq} not below {}²",
                angle.to_degrees(),
                params.endpoint_distance_mm
            );
            continue;
        }

        let corner = CornerMatch {
            first: index,
            second: ring.next_index(index),
            turn_angle: angle,
            gap_sq,
        };
        log::debug!(
            "corner accepted at segments {}->{} (turn {:.2}°, gap² {gap_sq})",
            corner.first,
            corner.second,
            angle.to_degrees()
        );
        return ScanOutcome::Found(corner);
    }

    ScanOutcome::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use lidar_boiler_core::{segments_from_closed_polyline, Point, Segment};
    use std::f64::consts::FRAC_PI_4;

    fn corner_ring() -> Vec<Segment> {
        segments_from_closed_polyline(&[
            Point::new(1924, 383),
            Point::new(1000, 0),
            Point::new(1924, -383),
            Point::new(2600, -1400),
            Point::new(3400, 0),
            Point::new(2600, 1400),
        ])
    }

    #[test]
    fn finds_the_single_corner() {
        let segs = corner_ring();
        let ring = SegmentRing::new(&segs).expect("ring");
        let corner = scan_for_corner(&ring, 0, &CornerParams::default())
            .corner()
            .expect("corner");
        assert_eq!((corner.first, corner.second), (0, 1));
        assert_eq!(corner.gap_sq, 0);
        assert_abs_diff_eq!(corner.turn_angle, 3.0 * FRAC_PI_4, epsilon = 1e-3);
    }

    #[test]
    fn corner_across_the_wraparound_is_found() {
        let mut segs = corner_ring();
        segs.rotate_left(1);
        let ring = SegmentRing::new(&segs).expect("ring");
        let corner = scan_for_corner(&ring, 0, &CornerParams::default())
            .corner()
            .expect("corner");
        assert_eq!((corner.first, corner.second), (5, 0));
    }

    #[test]
    fn square_has_no_corner() {
        let segs = segments_from_closed_polyline(&[
            Point::new(-500, -500),
            Point::new(500, -500),
            Point::new(500, 500),
            Point::new(-500, 500),
        ]);
        let ring = SegmentRing::new(&segs).expect("ring");
        for start in 0..segs.len() {
            assert_eq!(
                scan_for_corner(&ring, start, &CornerParams::default()),
                ScanOutcome::NotFound
            );
        }
    }

    #[test]
    fn distant_endpoints_are_rejected() {
        let mut segs = corner_ring();
        // Shift the second face sideways; its direction (and the turn) is unchanged.
        segs[1] = Segment::new(Point::new(1000, 150), Point::new(1924, -233));
        let ring = SegmentRing::new(&segs).expect("ring");

        let strict = CornerParams::default().with_endpoint_distance(150);
        assert_eq!(scan_for_corner(&ring, 0, &strict), ScanOutcome::NotFound);

        let loose = CornerParams::default().with_endpoint_distance(151);
        let corner = scan_for_corner(&ring, 0, &loose).corner().expect("corner");
        assert_eq!(corner.gap_sq, 150 * 150);
    }

    #[test]
    fn scan_agrees_with_endpoint_adjacency() {
        let mut segs = corner_ring();
        segs[1] = Segment::new(Point::new(1000, 150), Point::new(1924, -233));
        let ring = SegmentRing::new(&segs).expect("ring");
        for distance in [0_u16, 1, 149, 150, 151, 500, u16::MAX] {
            let params = CornerParams::default().with_endpoint_distance(distance);
            let found = scan_for_corner(&ring, 0, &params).corner().is_some();
            assert_eq!(
                found,
                endpoints_adjacent(&segs[0], &segs[1], distance),
                "distance {distance}"
            );
        }
    }

    #[test]
    fn narrow_window_rejects_the_corner() {
        let segs = corner_ring();
        let ring = SegmentRing::new(&segs).expect("ring");
        // Actual turn is ~134.97°, so a window of ±0.01° around 135° misses it.
        let params = CornerParams::default().with_angle_range(0.01_f64.to_radians());
        assert_eq!(scan_for_corner(&ring, 0, &params), ScanOutcome::NotFound);
    }

    #[test]
    fn single_segment_ring_terminates() {
        let segs = [Segment::new(Point::new(0, 0), Point::new(100, 100))];
        let ring = SegmentRing::new(&segs).expect("ring");
        assert_eq!(
            scan_for_corner(&ring, 0, &CornerParams::default()),
            ScanOutcome::NotFound
        );
    }
}
