use lidar_boiler_core::Point;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::{Alliance, CornerMatch};

/// Sensor-relative position of the boiler target point, in mm.
///
/// `(0, 0)` doubles as the "not found" sentinel, so a boiler exactly at the
/// sensor origin cannot be told apart from a miss. Use
/// [`crate::BoilerDetector::detect`] when that distinction matters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoilerLocation {
    pub delta_x: i16,
    pub delta_y: i16,
}

impl BoilerLocation {
    pub const NOT_FOUND: BoilerLocation = BoilerLocation {
        delta_x: 0,
        delta_y: 0,
    };

    pub const fn new(delta_x: i16, delta_y: i16) -> Self {
        Self { delta_x, delta_y }
    }

    pub fn is_not_found(&self) -> bool {
        *self == Self::NOT_FOUND
    }

    /// `anchor + offset`, rounded to the nearest mm and saturated to `i16`.
    pub fn from_anchor_offset(anchor: Point, offset: Vector2<f64>) -> Self {
        let target = anchor.to_vector() + offset;
        Self {
            delta_x: target.x.round() as i16,
            delta_y: target.y.round() as i16,
        }
    }
}

/// Output of a successful boiler detection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoilerDetectionResult {
    pub location: BoilerLocation,
    /// Corner vertex the offset was measured from.
    pub anchor: Point,
    /// Unrounded offset from `anchor` to the target point.
    pub offset_mm: Vector2<f64>,
    pub alliance: Alliance,
    pub corner: CornerMatch,
}
