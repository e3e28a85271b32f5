mod common;

use common::LandingPage;
use vantage::RegionId;

#[test]
fn nav_tracks_scroll_position_down_and_back() {
    let mut landing = LandingPage::new();
    landing.load();

    landing.scroll_to(0.0);
    assert_eq!(landing.active_nav().as_deref(), Some("hero"));

    // features top is 700; the 200px margin makes 500 the boundary.
    landing.scroll_to(499.0);
    assert_eq!(landing.active_nav().as_deref(), Some("hero"));
    landing.scroll_to(500.0);
    assert_eq!(landing.active_nav().as_deref(), Some("features"));

    landing.scroll_to(2300.0);
    assert_eq!(landing.active_nav().as_deref(), Some("about"));

    landing.scroll_to(100.0);
    assert_eq!(landing.active_nav().as_deref(), Some("hero"));
}

#[test]
fn exactly_one_nav_entry_active_after_first_transition() {
    let mut landing = LandingPage::new();
    landing.load();

    for offset in [0.0, 600.0, 1700.0, 2500.0, 900.0, 0.0] {
        landing.scroll_to(offset);
        assert!(landing.active_nav().is_some());
    }
    // Every swap the nav surface saw carried exactly one entry.
    assert!(landing.nav.borrow().swaps().iter().all(|s| s.is_some()));
}

#[test]
fn lower_section_wins_when_several_are_past_the_boundary() {
    // At offset 2500 every section top (0, 700, 1600, 2400) is within
    // the margin; the last in document order must be selected.
    let mut landing = LandingPage::new();
    landing.load();
    landing.scroll_to(2500.0);
    assert_eq!(landing.active_nav().as_deref(), Some("about"));
}

#[test]
fn cards_reveal_once_with_stagger() {
    let mut landing = LandingPage::new();
    landing.load();

    // Prepared hidden at build time.
    {
        let surface = landing.surface.borrow();
        for id in ["feature-card-1", "feature-card-2", "feature-card-3"] {
            assert_eq!(surface.opacity_of(&RegionId::new(id)), Some(0.0));
        }
    }

    landing.scroll_to(800.0);
    {
        let surface = landing.surface.borrow();
        for id in ["feature-card-1", "feature-card-2", "feature-card-3"] {
            assert_eq!(surface.opacity_of(&RegionId::new(id)), Some(1.0));
        }
        // Reveals cascade in registration order.
        assert_eq!(
            surface
                .state(&RegionId::new("feature-card-2"))
                .unwrap()
                .animation_delay_ms,
            Some(100)
        );
        assert_eq!(
            surface
                .state(&RegionId::new("feature-card-3"))
                .unwrap()
                .animation_delay_ms,
            Some(200)
        );
    }

    // Scrolling away and back never hides or re-animates them.
    let writes_before = landing.surface.borrow().log().len();
    landing.scroll_to(0.0);
    landing.scroll_to(800.0);
    let surface = landing.surface.borrow();
    assert_eq!(surface.opacity_of(&RegionId::new("feature-card-1")), Some(1.0));
    let card_writes: usize = ["feature-card-1", "feature-card-2", "feature-card-3"]
        .iter()
        .map(|id| surface.log_for(&RegionId::new(*id)).len())
        .sum();
    let card_writes_before: usize = surface.log()[..writes_before]
        .iter()
        .filter(|(id, _)| id.as_str().starts_with("feature-card"))
        .count();
    assert_eq!(card_writes, card_writes_before);
}

#[test]
fn once_subscriptions_detach_after_firing() {
    let mut landing = LandingPage::new();

    // 4 sections + 3 cards + stats trigger.
    assert_eq!(landing.page.watch_count(), 8);

    // The stats trigger fires on load (hero-stats starts inside the
    // viewport) and detaches.
    landing.load();
    assert_eq!(landing.page.watch_count(), 7);

    // The cards fire once scrolled to; only the sections remain.
    landing.scroll_to(800.0);
    assert_eq!(landing.page.watch_count(), 4);
}

#[test]
fn counters_start_once_and_finish_exactly() {
    let mut landing = LandingPage::new();
    landing.load();
    landing.run_until_idle();

    {
        let surface = landing.surface.borrow();
        assert_eq!(surface.text_of(&RegionId::new("stat-users")), Some("10000"));
        assert_eq!(surface.text_of(&RegionId::new("stat-uptime")), Some("99"));
    }

    // Scrolling away and back never restarts the counters.
    landing.scroll_to(2500.0);
    landing.scroll_to(0.0);
    assert_eq!(landing.page.pending_tasks(), 0);
}

#[test]
fn layout_change_is_picked_up_on_next_pass() {
    let mut landing = LandingPage::new();
    landing.load();
    landing.scroll_to(0.0);
    assert_eq!(landing.active_nav().as_deref(), Some("hero"));

    // The features section collapses upward; the same offset now
    // selects it. Bounds are re-measured per pass, not cached.
    landing
        .measurer
        .borrow_mut()
        .set("features", vantage::Rect::band(100.0, 900.0));
    landing.scroll_to(0.0);
    assert_eq!(landing.active_nav().as_deref(), Some("features"));
}
