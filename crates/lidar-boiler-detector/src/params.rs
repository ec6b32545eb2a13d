use std::f64::consts::{FRAC_PI_4, PI, TAU};

use serde::{Deserialize, Serialize};

use crate::BoilerParamsError;

/// Interior corner of the boiler as seen by the turn-angle test (135°).
pub const TARGET_ANGLE: f64 = 3.0 * FRAC_PI_4;
/// Default tolerance around [`TARGET_ANGLE`] (10°).
pub const ANGLE_RANGE: f64 = PI / 18.0;
/// Default maximum gap between consecutive segment endpoints, in mm.
pub const ENDPOINT_DISTANCE: u16 = 100;
/// Default boiler face width, in mm.
pub const BOILER_WIDTH: f64 = 1067.0;
/// Default boiler depth from the recognised face to the target point, in mm.
pub const BOILER_DEPTH: f64 = 381.0;

/// Corner acceptance settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CornerParams {
    /// Expected turn angle at the corner (radians).
    pub target_angle: f64,
    /// Accepted deviation from `target_angle` on either side (radians).
    pub angle_range: f64,
    /// Consecutive segments count as adjacent when `current.end` lies
    /// strictly closer than this to `next.start`.
    pub endpoint_distance_mm: u16,
}

impl Default for CornerParams {
    fn default() -> Self {
        Self {
            target_angle: TARGET_ANGLE,
            angle_range: ANGLE_RANGE,
            endpoint_distance_mm: ENDPOINT_DISTANCE,
        }
    }
}

impl CornerParams {
    /// Closed window `[target - range, target + range]`.
    #[inline]
    pub fn accepts_angle(&self, angle: f64) -> bool {
        let lo = self.target_angle - self.angle_range;
        let hi = self.target_angle + self.angle_range;
        (lo..=hi).contains(&angle)
    }

    pub fn with_target_angle(mut self, radians: f64) -> Self {
        self.target_angle = radians;
        self
    }

    pub fn with_angle_range(mut self, radians: f64) -> Self {
        self.angle_range = radians;
        self
    }

    pub fn with_endpoint_distance(mut self, mm: u16) -> Self {
        self.endpoint_distance_mm = mm;
        self
    }
}

/// Known boiler dimensions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoilerGeometry {
    /// Full face width; half of it is applied along the face.
    pub width_mm: f64,
    /// Distance from the face to the target point, perpendicular to the face.
    pub depth_mm: f64,
}

impl Default for BoilerGeometry {
    fn default() -> Self {
        Self {
            width_mm: BOILER_WIDTH,
            depth_mm: BOILER_DEPTH,
        }
    }
}

/// Parameters for [`crate::BoilerDetector`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoilerParams {
    #[serde(default)]
    pub corner: CornerParams,
    #[serde(default)]
    pub geometry: BoilerGeometry,
}

impl BoilerParams {
    pub fn with_corner(mut self, corner: CornerParams) -> Self {
        self.corner = corner;
        self
    }

    pub fn with_geometry(mut self, width_mm: f64, depth_mm: f64) -> Self {
        self.geometry = BoilerGeometry { width_mm, depth_mm };
        self
    }

    pub fn validate(&self) -> Result<(), BoilerParamsError> {
        for (name, value) in [
            ("width", self.geometry.width_mm),
            ("depth", self.geometry.depth_mm),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(BoilerParamsError::InvalidDimension { name, value });
            }
        }
        let target = self.corner.target_angle;
        if !(target > 0.0 && target < TAU) {
            return Err(BoilerParamsError::InvalidTargetAngle(target));
        }
        let range = self.corner.angle_range;
        if !(0.0..PI).contains(&range) {
            return Err(BoilerParamsError::InvalidAngleRange(range));
        }
        Ok(())
    }
}
