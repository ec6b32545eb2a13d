//! Offset resolver: turns an accepted corner into the boiler target point.
//!
//! The face used depends on the alliance: blue measures from the face that
//! leaves the corner (`second`), red from the face that arrives at it
//! (`first`). Half the boiler width is laid along the face and the depth
//! across it, with the depth sign flipped between alliances.
//!
//! Faces with `dx < dy` ("steep") are decomposed in the axis-swapped frame.
//! Working on unit vectors keeps horizontal and vertical faces well defined.

use lidar_boiler_core::{Point, Segment, SegmentRing};
use nalgebra::Vector2;

use crate::{Alliance, BoilerGeometry, CornerMatch};

/// Reference face and anchor vertex used by `alliance`.
pub fn reference_face<'a>(
    ring: &SegmentRing<'a>,
    corner: &CornerMatch,
    alliance: Alliance,
) -> (&'a Segment, Point) {
    match alliance {
        Alliance::Blue => {
            let face = ring.get(corner.second);
            (face, face.start)
        }
        Alliance::Red => {
            let face = ring.get(corner.first);
            (face, face.end)
        }
    }
}

/// Offset from the anchor vertex to the target point, in mm.
///
/// Returns `None` for a zero-length face, which has no orientation.
pub fn target_offset(
    face: &Segment,
    alliance: Alliance,
    geometry: &BoilerGeometry,
) -> Option<Vector2<f64>> {
    let dir = face.direction()?;
    let (dx, dy) = face.delta();
    let half_width = 0.5 * geometry.width_mm;
    let depth = alliance.depth_sign() * geometry.depth_mm;

    if dx < dy {
        let w = dir * axis_sign(dy);
        let local = -half_width * w + depth * rotate_cw(w);
        Some(Vector2::new(local.y, local.x))
    } else {
        let t = dir * axis_sign(dx);
        Some(half_width * t + depth * rotate_cw(t))
    }
}

#[inline]
fn axis_sign(d: i32) -> f64 {
    if d < 0 {
        -1.0
    } else {
        1.0
    }
}

#[inline]
fn rotate_cw(v: Vector2<f64>) -> Vector2<f64> {
    Vector2::new(v.y, -v.x)
}
