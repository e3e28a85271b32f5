//! Counting-up number animation for hero statistics.

use crate::scheduler::{Scheduler, TaskControl, TaskHandle};
use vantage_traits::StyleMutation;
use vantage_types::RegionId;

/// Nominal step between counter updates, matching a display refresh.
pub const STEP_MS: u64 = 16;

/// Animate a stat element's text from 0 to `target` over roughly
/// `duration_ms`. Intermediate values are floored; the final write is
/// the exact target.
pub fn animate_counter(
    scheduler: &mut Scheduler,
    region: RegionId,
    target: u64,
    duration_ms: u64,
) -> TaskHandle {
    let increment = target as f64 / (duration_ms.max(STEP_MS) as f64 / STEP_MS as f64);
    let mut current = 0.0f64;
    scheduler.schedule_repeating(STEP_MS, move |ctx| {
        current += increment;
        if current >= target as f64 {
            ctx.surface
                .apply(&region, StyleMutation::Text(target.to_string()));
            TaskControl::Stop
        } else {
            let shown = current.floor() as u64;
            ctx.surface
                .apply(&region, StyleMutation::Text(shown.to_string()));
            TaskControl::Continue
        }
    })
}
