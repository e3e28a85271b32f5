use std::cell::RefCell;
use std::rc::Rc;
use vantage::{
    HostEvent, InMemoryMeasurer, InMemoryNav, InMemoryNotifications, InMemorySurface, PageBuilder,
    PageController, Rect, RegionId,
};

pub const VIEWPORT_HEIGHT: f32 = 800.0;

/// A fully wired landing page over in-memory hosts, with the layout
/// most tests assume:
///
/// hero [0, 700), features [700, 1600), pricing [1600, 2400),
/// about [2400, 3000); three feature cards inside the features
/// section; stats block at the bottom of the hero.
pub struct LandingPage {
    pub measurer: Rc<RefCell<InMemoryMeasurer>>,
    pub surface: Rc<RefCell<InMemorySurface>>,
    pub nav: Rc<RefCell<InMemoryNav>>,
    pub notifications: Rc<RefCell<InMemoryNotifications>>,
    pub page: PageController,
    now_ms: u64,
}

impl LandingPage {
    pub fn new() -> Self {
        Self::with_config(&standard_config())
    }

    pub fn with_config(config_json: &str) -> Self {
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

        let page = PageBuilder::new()
            .with_config_json(config_json)
            .expect("config should parse")
            .with_measurer(measurer.clone())
            .with_surface(surface.clone())
            .with_nav(nav.clone())
            .with_notifications(notifications.clone())
            .with_viewport_height(VIEWPORT_HEIGHT)
            .build()
            .expect("page should build");

        Self {
            measurer,
            surface,
            nav,
            notifications,
            page,
            now_ms: 0,
        }
    }

    pub fn load(&mut self) {
        self.page.handle_event(HostEvent::Load);
    }

    pub fn scroll_to(&mut self, offset: f32) {
        self.page.handle_event(HostEvent::Scroll { offset });
    }

    pub fn click(&mut self, target: &str, x: f32, y: f32) {
        self.page.handle_event(HostEvent::Click {
            target: Some(RegionId::new(target)),
            x,
            y,
        });
    }

    /// Advance the animation clock by `delta_ms` in one tick.
    pub fn advance(&mut self, delta_ms: u64) {
        self.now_ms += delta_ms;
        self.page.handle_event(HostEvent::Tick {
            now_ms: self.now_ms,
        });
    }

    /// Advance the clock in 16 ms steps until no tasks remain.
    pub fn run_until_idle(&mut self) {
        let deadline = self.now_ms + 60_000;
        while self.page.pending_tasks() > 0 {
            self.advance(16);
            assert!(self.now_ms < deadline, "scheduled tasks never drained");
        }
    }

    pub fn active_nav(&self) -> Option<String> {
        self.page.active_nav().map(|r| r.to_string())
    }
}

pub fn standard_config() -> String {
    r#"{
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
                { "region": "stat-users", "target": 10000, "durationMs": 320 },
                { "region": "stat-uptime", "target": 99, "durationMs": 320 }
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
    }"#
    .to_string()
}
