use std::cell::RefCell;
use std::rc::Rc;
use vantage::{
    HostEvent, InMemoryMeasurer, InMemoryNav, InMemoryNotifications, InMemorySurface,
    LoginSubmission, PageBuilder, PageError, Rect, RegionId,
};

/// A scripted walkthrough of a marketing landing page: load, scroll
/// from the hero to the pricing section, click around, and log in.
/// Everything runs against the in-memory hosts; set RUST_LOG=debug to
/// watch the engine work.
fn main() -> Result<(), PageError> {
    env_logger::init();

    let config = serde_json::json!({
        "sections": ["hero", "features", "pricing", "about"],
        "animated": ["feature-card-1", "feature-card-2", "feature-card-3"],
        "pageRoot": "body",
        "hero": "hero",
        "parallax": ["hero-gradient"],
        "buttons": ["cta-button"],
        "menu": { "menu": "nav-menu", "hamburger": "hamburger" },
        "stats": {
            "trigger": "hero-stats",
            "counters": [
                { "region": "stat-users", "target": 10000 },
                { "region": "stat-uptime", "target": 99 }
            ]
        },
        "auth": {
            "loginTab": "login-form",
            "signupTab": "signup-form",
            "loginButton": "login-tab-btn",
            "signupButton": "signup-tab-btn",
            "strengthBar": "strength-bar",
            "strengthText": "strength-text"
        }
    });

    let measurer = Rc::new(RefCell::new(InMemoryMeasurer::new()));
    {
        let mut m = measurer.borrow_mut();
        m.set("hero", Rect::band(0.0, 700.0));
        m.set("hero-stats", Rect::band(500.0, 200.0));
        m.set("features", Rect::band(700.0, 900.0));
        m.set("pricing", Rect::band(1600.0, 800.0));
        m.set("about", Rect::band(2400.0, 600.0));
        m.set("feature-card-1", Rect::band(800.0, 250.0));
        m.set("feature-card-2", Rect::band(1080.0, 250.0));
        m.set("feature-card-3", Rect::band(1360.0, 250.0));
        m.set("cta-button", Rect::new(480.0, 550.0, 240.0, 56.0));
    }
    let surface = Rc::new(RefCell::new(InMemorySurface::new()));
    let nav = Rc::new(RefCell::new(InMemoryNav::new()));
    let notifications = Rc::new(RefCell::new(InMemoryNotifications::new()));

    let mut page = PageBuilder::new()
        .with_config_json(&config.to_string())?
        .with_measurer(measurer)
        .with_surface(surface.clone())
        .with_nav(nav.clone())
        .with_notifications(notifications.clone())
        .with_viewport_height(900.0)
        .build()?;

    page.handle_event(HostEvent::Load);
    println!("loaded; watching {} regions", page.watch_count());

    let mut now = 0;
    for offset in [0.0, 300.0, 800.0, 1500.0, 2300.0] {
        now += 200;
        page.handle_event(HostEvent::Scroll { offset });
        page.handle_event(HostEvent::Tick { now_ms: now });
        println!(
            "scrolled to {:>6}px  active nav: {:?}",
            offset,
            page.active_nav().map(|r| r.to_string())
        );
    }

    page.handle_event(HostEvent::Click {
        target: Some(RegionId::new("cta-button")),
        x: 600.0,
        y: 570.0,
    });

    // Let the counters and the ripple finish.
    for _ in 0..200 {
        now += 16;
        page.handle_event(HostEvent::Tick { now_ms: now });
    }
    {
        let surface = surface.borrow();
        println!(
            "stat-users counted up to {:?}",
            surface.text_of(&RegionId::new("stat-users"))
        );
        println!(
            "feature cards revealed: {}",
            ["feature-card-1", "feature-card-2", "feature-card-3"]
                .iter()
                .filter(|id| page.is_revealed(&RegionId::new(**id)))
                .count()
        );
    }

    page.handle_event(HostEvent::LoginSubmit(LoginSubmission {
        email: "demo@example.com".into(),
        password: "hunter2!".into(),
    }));
    println!(
        "login feedback: {:?}",
        notifications.borrow().visible_messages()
    );

    now += 2000;
    page.handle_event(HostEvent::Tick { now_ms: now });
    if let Some(url) = page.take_navigation() {
        println!("redirecting to {}", url);
    }
    Ok(())
}
