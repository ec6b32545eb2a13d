use lidar_boiler_core::SegmentRing;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::resolve::{reference_face, target_offset};
use crate::scan::{scan_for_corner, ScanOutcome};
use crate::{Alliance, BoilerDetectionResult, BoilerLocation, BoilerParams, BoilerParamsError};

/// Boiler detector: 135° corner scan followed by the alliance-specific offset.
///
/// Holds only validated parameters; every call processes one frame and keeps
/// no state between frames.
#[derive(Clone, Debug, Default)]
pub struct BoilerDetector {
    params: BoilerParams,
}

impl BoilerDetector {
    pub fn new(params: BoilerParams) -> Result<Self, BoilerParamsError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &BoilerParams {
        &self.params
    }

    /// Scan from the ring's first segment.
    pub fn detect(
        &self,
        ring: &SegmentRing<'_>,
        alliance: Alliance,
    ) -> Option<BoilerDetectionResult> {
        self.detect_from(ring, 0, alliance)
    }

    /// Scan starting at segment `start` (wrapping), resolve the first
    /// qualifying corner for `alliance`.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "info", skip(self, ring), fields(segments = ring.len()))
    )]
    pub fn detect_from(
        &self,
        ring: &SegmentRing<'_>,
        start: usize,
        alliance: Alliance,
    ) -> Option<BoilerDetectionResult> {
        let corner = match scan_for_corner(ring, start, &self.params.corner) {
            ScanOutcome::Found(corner) => corner,
            ScanOutcome::NotFound => {
                log::debug!("no boiler corner among {} segments", ring.len());
                return None;
            }
        };

        let (face, anchor) = reference_face(ring, &corner, alliance);
        let Some(offset_mm) = target_offset(face, alliance, &self.params.geometry) else {
            log::warn!(
                "{alliance} reference face at corner {}->{} has zero length",
                corner.first,
                corner.second
            );
            return None;
        };

        let location = BoilerLocation::from_anchor_offset(anchor, offset_mm);
        log::debug!(
            "{alliance} boiler at ({}, {}) from anchor ({}, {})",
            location.delta_x,
            location.delta_y,
            anchor.x,
            anchor.y
        );
        Some(BoilerDetectionResult {
            location,
            anchor,
            offset_mm,
            alliance,
            corner,
        })
    }

    /// Sentinel form of [`Self::detect`]: `(0, 0)` when nothing is found.
    pub fn locate(&self, ring: &SegmentRing<'_>, alliance: Alliance) -> BoilerLocation {
        self.detect(ring, alliance)
            .map(|found| found.location)
            .unwrap_or(BoilerLocation::NOT_FOUND)
    }

    /// Like [`Self::locate`] but takes the raw alliance tag (0 = blue, 1 = red).
    /// Any other tag yields the sentinel without scanning.
    pub fn locate_tagged(&self, ring: &SegmentRing<'_>, tag: u8) -> BoilerLocation {
        match Alliance::try_from(tag) {
            Ok(alliance) => self.locate(ring, alliance),
            Err(err) => {
                log::debug!("{err}");
                BoilerLocation::NOT_FOUND
            }
        }
    }
}
