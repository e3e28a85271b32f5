//! Animated SVG progress ring on the demo panel.

use crate::scheduler::{Scheduler, TaskControl, TaskHandle};
use rand::Rng;
use std::f32::consts::PI;
use vantage_traits::{PresentationSurface, StyleMutation};
use vantage_types::RegionId;

/// Interval between progress increments, in ms.
pub const STEP_MS: u64 = 300;
/// Percentage the ring settles at.
pub const TARGET_PERCENT: f32 = 85.0;
/// Upper bound of one random increment, in percent.
pub const MAX_INCREMENT: f32 = 30.0;

/// Stroke-dashoffset driven progress ring.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressRing {
    region: RegionId,
    circumference: f32,
}

impl ProgressRing {
    pub fn new(region: RegionId, radius: f32) -> Self {
        Self {
            region,
            circumference: 2.0 * PI * radius,
        }
    }

    /// Initialize the ring fully undrawn (offset equals circumference).
    pub fn begin(&self, surface: &mut dyn PresentationSurface) {
        surface.apply(
            &self.region,
            StyleMutation::StrokeDasharray(self.circumference),
        );
        surface.apply(
            &self.region,
            StyleMutation::StrokeDashoffset(self.circumference),
        );
    }

    /// Dash offset corresponding to a fill percentage.
    pub fn offset_for(&self, percent: f32) -> f32 {
        self.circumference - (percent / 100.0) * self.circumference
    }

    pub fn circumference(&self) -> f32 {
        self.circumference
    }

    /// Animate the fill in random increments up to [`TARGET_PERCENT`].
    pub fn animate(self, scheduler: &mut Scheduler) -> TaskHandle {
        let mut progress = 0.0f32;
        scheduler.schedule_repeating(STEP_MS, move |ctx| {
            if progress < TARGET_PERCENT {
                progress += rand::rng().random_range(0.0..MAX_INCREMENT);
                let shown = progress.min(TARGET_PERCENT);
                ctx.surface.apply(
                    &self.region,
                    StyleMutation::StrokeDashoffset(self.offset_for(shown)),
                );
                TaskControl::Continue
            } else {
                ctx.surface.apply(
                    &self.region,
                    StyleMutation::StrokeDashoffset(self.offset_for(TARGET_PERCENT)),
                );
                TaskControl::Stop
            }
        })
    }
}
