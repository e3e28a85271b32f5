//! Typewriter text animation.

use crate::scheduler::{Scheduler, TaskControl, TaskHandle};
use vantage_traits::{PresentationSurface, StyleMutation};
use vantage_types::RegionId;

/// Delay between typed characters, in ms.
pub const CHAR_INTERVAL_MS: u64 = 50;

/// Clear the element and type `text` into it one character per tick.
pub fn type_text(
    scheduler: &mut Scheduler,
    surface: &mut dyn PresentationSurface,
    region: RegionId,
    text: &str,
) -> TaskHandle {
    surface.apply(&region, StyleMutation::Text(String::new()));

    let chars: Vec<char> = text.chars().collect();
    let mut shown = String::with_capacity(text.len());
    let mut index = 0;
    scheduler.schedule_repeating(CHAR_INTERVAL_MS, move |ctx| {
        if index >= chars.len() {
            return TaskControl::Stop;
        }
        shown.push(chars[index]);
        index += 1;
        ctx.surface
            .apply(&region, StyleMutation::Text(shown.clone()));
        if index == chars.len() {
            TaskControl::Stop
        } else {
            TaskControl::Continue
        }
    })
}
