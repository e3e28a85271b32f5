//! Transient notification banners with scheduled dismissal.

use crate::scheduler::{Scheduler, TaskControl};
use vantage_traits::{BannerId, NotificationSink, Severity};

/// How long a banner stays fully visible, in ms.
pub const DISPLAY_MS: u64 = 3000;
/// Duration of the exit animation before removal, in ms.
pub const EXIT_MS: u64 = 300;

/// Show a banner and schedule its two-stage dismissal: the exit
/// animation starts after [`DISPLAY_MS`], removal follows [`EXIT_MS`]
/// later. Both stages tolerate the banner being gone already.
pub fn notify(
    scheduler: &mut Scheduler,
    sink: &mut dyn NotificationSink,
    message: &str,
    severity: Severity,
) -> BannerId {
    let banner = sink.show(message, severity);
    log::debug!("notification {:?}: {}", severity, message);

    scheduler.schedule_once(DISPLAY_MS, move |ctx| {
        ctx.notifications.begin_dismiss(banner);
        TaskControl::Stop
    });
    scheduler.schedule_once(DISPLAY_MS + EXIT_MS, move |ctx| {
        ctx.notifications.remove(banner);
        TaskControl::Stop
    });
    banner
}

#[cfg(test)]
mod tests {
    use super::*;
    use vantage_traits::{BannerPhase, InMemoryNotifications, InMemorySurface};

    #[test]
    fn test_banner_dismissed_after_display_window() {
        let mut scheduler = Scheduler::new();
        let mut surface = InMemorySurface::new();
        let mut sink = InMemoryNotifications::new();

        let banner = notify(
            &mut scheduler,
            &mut sink,
            "Account created successfully!",
            Severity::Success,
        );
        assert_eq!(sink.phase_of(banner), Some(BannerPhase::Shown));

        scheduler.tick(DISPLAY_MS, &mut surface, &mut sink);
        assert_eq!(sink.phase_of(banner), Some(BannerPhase::Dismissing));

        scheduler.tick(DISPLAY_MS + EXIT_MS, &mut surface, &mut sink);
        assert!(sink.is_empty());
        assert_eq!(sink.removed(), &[banner]);
    }

    #[test]
    fn test_concurrent_banners_dismiss_independently() {
        let mut scheduler = Scheduler::new();
        let mut surface = InMemorySurface::new();
        let mut sink = InMemoryNotifications::new();

        let first = notify(&mut scheduler, &mut sink, "first", Severity::Info);
        scheduler.tick(1000, &mut surface, &mut sink);
        let second = notify(&mut scheduler, &mut sink, "second", Severity::Error);

        scheduler.tick(DISPLAY_MS + EXIT_MS, &mut surface, &mut sink);
        assert_eq!(sink.phase_of(first), None);
        assert!(sink.phase_of(second).is_some());

        scheduler.tick(1000 + DISPLAY_MS + EXIT_MS, &mut surface, &mut sink);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_dismissal_of_externally_removed_banner_is_noop() {
        let mut scheduler = Scheduler::new();
        let mut surface = InMemorySurface::new();
        let mut sink = InMemoryNotifications::new();

        let banner = notify(&mut scheduler, &mut sink, "bye", Severity::Info);
        sink.remove(banner);

        // The scheduled stages fire against an absent banner: no panic,
        // no double-removal bookkeeping.
        scheduler.tick(DISPLAY_MS + EXIT_MS, &mut surface, &mut sink);
        assert_eq!(sink.removed().len(), 1);
    }
}
