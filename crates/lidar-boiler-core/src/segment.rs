use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::Point;

/// Directed line segment produced by the line fitter.
///
/// `start -> end` follows the fitter's traversal order, so the direction is
/// meaningful for the turn-angle test.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    #[inline]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// `(end.x - start.x, end.y - start.y)` in integer millimeters.
    #[inline]
    pub fn delta(&self) -> (i32, i32) {
        (
            i32::from(self.end.x) - i32::from(self.start.x),
            i32::from(self.end.y) - i32::from(self.start.y),
        )
    }

    /// Unit vector along `start -> end`, or `None` for a zero-length segment.
    pub fn direction(&self) -> Option<Vector2<f64>> {
        let (dx, dy) = self.delta();
        if dx == 0 && dy == 0 {
            return None;
        }
        Some(Vector2::new(f64::from(dx), f64::from(dy)).normalize())
    }
}

/// Build a closed ring of segments from polygon vertices.
///
/// Segment `i` runs from `vertices[i]` to `vertices[i + 1]`; the last one
/// closes back to `vertices[0]`. Fewer than two vertices yield no segments.
pub fn segments_from_closed_polyline(vertices: &[Point]) -> Vec<Segment> {
    if vertices.len() < 2 {
        return Vec::new();
    }
    vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .map(|(&start, &end)| Segment { start, end })
        .collect()
}
