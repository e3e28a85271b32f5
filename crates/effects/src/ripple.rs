//! Click ripple effect for buttons.

use crate::scheduler::{Scheduler, TaskControl};
use vantage_traits::{PresentationSurface, SpawnSpec};
use vantage_types::{Rect, RegionId};

/// How long a ripple lives before it is removed, in ms.
pub const LIFETIME_MS: u64 = 600;

/// Spawn a ripple on a button at pointer coordinates (relative to the
/// document) and schedule its removal. Returns the ripple element id.
pub fn spawn_ripple(
    scheduler: &mut Scheduler,
    surface: &mut dyn PresentationSurface,
    button: &RegionId,
    bounds: &Rect,
    pointer_x: f32,
    pointer_y: f32,
) -> RegionId {
    let size = bounds.width.max(bounds.height);
    let ripple = surface.spawn(
        button,
        SpawnSpec::Ripple {
            x: pointer_x - bounds.x - size / 2.0,
            y: pointer_y - bounds.y - size / 2.0,
            size,
        },
    );
    log::trace!("ripple '{}' on '{}'", ripple, button);

    let target = ripple.clone();
    scheduler.schedule_once(LIFETIME_MS, move |ctx| {
        ctx.surface.remove(&target);
        TaskControl::Stop
    });
    ripple
}
