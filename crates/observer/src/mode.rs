//! Detection modes for visibility classification.
//!
//! Two strategies coexist on purpose: overlap-ratio for fine-grained
//! reveal animation, offset for coarse navigation highlighting. They
//! are selectable per subscription because subscribers rely on
//! different semantics; unifying them would change observable behavior.

use crate::ObserverError;
use vantage_types::{Rect, Viewport};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DetectionMode {
    /// Visible when at least `threshold` of the region's height is
    /// inside the viewport. `threshold` must lie in [0, 1].
    OverlapRatio { threshold: f32 },
    /// Visible once the scroll offset has passed the region's top minus
    /// `margin_px`. A single-boundary check: the region stays satisfied
    /// no matter how far past it the viewport scrolls.
    Offset { margin_px: f32 },
}

impl DetectionMode {
    pub(crate) fn validate(&self) -> Result<(), ObserverError> {
        match *self {
            DetectionMode::OverlapRatio { threshold } => {
                if !(0.0..=1.0).contains(&threshold) || threshold.is_nan() {
                    return Err(ObserverError::InvalidThreshold(threshold));
                }
                Ok(())
            }
            DetectionMode::Offset { .. } => Ok(()),
        }
    }

    /// Classify measured bounds against the current viewport. Returns
    /// (visible, intersection ratio). Offset mode reports the ratio as
    /// 0 or 1 since it has no partial-intersection notion.
    pub(crate) fn classify(&self, viewport: &Viewport, bounds: &Rect) -> (bool, f32) {
        match *self {
            DetectionMode::OverlapRatio { threshold } => {
                match viewport.overlap_ratio(bounds) {
                    Some(ratio) => (ratio >= threshold, ratio),
                    // Zero-height regions never satisfy overlap mode.
                    None => (false, 0.0),
                }
            }
            DetectionMode::Offset { margin_px } => {
                let visible = viewport.scroll_offset >= bounds.top() - margin_px;
                (visible, if visible { 1.0 } else { 0.0 })
            }
        }
    }
}
