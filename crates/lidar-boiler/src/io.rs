//! JSON frame and report helpers.

use std::{fs, path::Path};

use lidar_boiler_core::{RingError, Segment, SegmentRing};
use lidar_boiler_detector::{
    Alliance, BoilerDetectionResult, BoilerLocation, BoilerParams, BoilerParamsError, CornerMatch,
};
use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug)]
pub enum LidarBoilerIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Ring(#[from] RingError),
    #[error(transparent)]
    Params(#[from] BoilerParamsError),
}

/// Fitted segments of one lidar sweep, in traversal order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmentFrame {
    pub segments: Vec<Segment>,
}

impl SegmentFrame {
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, LidarBoilerIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), LidarBoilerIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn ring(&self) -> Result<SegmentRing<'_>, RingError> {
        SegmentRing::new(&self.segments)
    }
}

/// Load detector parameters from JSON and validate them.
pub fn load_params(path: impl AsRef<Path>) -> Result<BoilerParams, LidarBoilerIoError> {
    let raw = fs::read_to_string(path)?;
    let params: BoilerParams = serde_json::from_str(&raw)?;
    params.validate()?;
    Ok(params)
}

/// Per-frame detection report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoilerReport {
    #[serde(default)]
    pub frame: Option<String>,
    pub alliance: Alliance,
    pub found: bool,
    /// Sentinel `(0, 0)` when `found` is false.
    pub location: BoilerLocation,
    #[serde(default)]
    pub corner: Option<CornerMatch>,
    #[serde(default)]
    pub offset_mm: Option<[f64; 2]>,
}

impl BoilerReport {
    pub fn new(alliance: Alliance, detection: Option<&BoilerDetectionResult>) -> Self {
        match detection {
            Some(found) => Self {
                frame: None,
                alliance,
                found: true,
                location: found.location,
                corner: Some(found.corner),
                offset_mm: Some([found.offset_mm.x, found.offset_mm.y]),
            },
            None => Self {
                frame: None,
                alliance,
                found: false,
                location: BoilerLocation::NOT_FOUND,
                corner: None,
                offset_mm: None,
            },
        }
    }

    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.frame = Some(frame.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lidar_boiler_core::Point;
    use lidar_boiler_detector::BoilerDetector;

    fn frame() -> SegmentFrame {
        SegmentFrame {
            segments: vec![
                Segment::new(Point::new(1924, 383), Point::new(1000, 0)),
                Segment::new(Point::new(1000, 0), Point::new(1924, -383)),
            ],
        }
    }

    #[test]
    fn frame_survives_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("frame.json");
        frame().write_json(&path).expect("write");
        assert_eq!(SegmentFrame::load_json(&path).expect("load"), frame());
    }

    #[test]
    fn empty_frame_has_no_ring() {
        let empty = SegmentFrame::default();
        assert!(matches!(empty.ring(), Err(RingError::Empty)));
    }

    #[test]
    fn invalid_params_file_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("params.json");
        fs::write(&path, r#"{"geometry": {"width_mm": -5.0}}"#).expect("write");
        assert!(matches!(
            load_params(&path),
            Err(LidarBoilerIoError::Params(_))
        ));
    }

    #[test]
    fn report_reflects_detection() {
        let frame = frame();
        let ring = frame.ring().expect("ring");
        let detection = BoilerDetector::default().detect(&ring, Alliance::Blue);
        let report = BoilerReport::new(Alliance::Blue, detection.as_ref()).with_frame("f0");
        assert!(report.found);
        assert_eq!(report.corner.map(|c| (c.first, c.second)), Some((0, 1)));
        assert_eq!(report.frame.as_deref(), Some("f0"));

        let miss = BoilerReport::new(Alliance::Red, None);
        assert!(!miss.found);
        assert!(miss.location.is_not_found());
        let json = serde_json::to_value(&miss).expect("json");
        assert_eq!(json["alliance"], "red");
    }
}
