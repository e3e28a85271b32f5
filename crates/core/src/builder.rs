//! Builder assembling a [`PageController`] from a config and host traits.

use crate::config::PageConfig;
use crate::controller::{
    to_regions, PageController, SharedMeasurer, SharedNav, SharedSink, SharedSurface,
};
use crate::error::PageError;
use crate::events::PageCommand;
use std::cell::RefCell;
use std::rc::Rc;
use vantage_highlight::NavHighlighter;
use vantage_observer::{DetectionMode, VisibilityObserver};
use vantage_reveal::{RevealStyle, RevealTrigger};
use vantage_types::{RegionId, TriggerPolicy, Viewport};

/// Builds a [`PageController`] step by step.
///
/// The config and all four host traits are required; `build` wires the
/// visibility subscriptions, prepares animated regions, and applies the
/// initial navigation selection.
#[derive(Default)]
pub struct PageBuilder {
    config: Option<PageConfig>,
    measurer: Option<SharedMeasurer>,
    surface: Option<SharedSurface>,
    nav: Option<SharedNav>,
    notifications: Option<SharedSink>,
    viewport_height: f32,
}

impl PageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: PageConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_config_json(mut self, json: &str) -> Result<Self, PageError> {
        self.config = Some(PageConfig::from_json(json)?);
        Ok(self)
    }

    pub fn with_measurer(mut self, measurer: SharedMeasurer) -> Self {
        self.measurer = Some(measurer);
        self
    }

    pub fn with_surface(mut self, surface: SharedSurface) -> Self {
        self.surface = Some(surface);
        self
    }

    pub fn with_nav(mut self, nav: SharedNav) -> Self {
        self.nav = Some(nav);
        self
    }

    pub fn with_notifications(mut self, notifications: SharedSink) -> Self {
        self.notifications = Some(notifications);
        self
    }

    /// Initial viewport height, before any `Resize` event arrives.
    pub fn with_viewport_height(mut self, height: f32) -> Self {
        self.viewport_height = height;
        self
    }

    pub fn build(self) -> Result<PageController, PageError> {
        let config = required(self.config, "config")?;
        config.validate()?;
        let measurer = required(self.measurer, "measurer")?;
        let surface = required(self.surface, "surface")?;
        let nav = required(self.nav, "nav surface")?;
        let notifications = required(self.notifications, "notification sink")?;

        let mut observer = VisibilityObserver::new();
        let commands = Rc::new(RefCell::new(Vec::new()));

        let default_entry = config
            .nav
            .default_entry
            .as_ref()
            .map(|s| RegionId::from(s.as_str()));
        let highlighter = Rc::new(RefCell::new(NavHighlighter::new(
            to_regions(&config.sections),
            default_entry.as_ref(),
        )));
        if default_entry.is_some() {
            highlighter
                .borrow_mut()
                .initialize(&mut *nav.borrow_mut());
        }

        for section in &config.sections {
            let highlighter = Rc::clone(&highlighter);
            let nav = Rc::clone(&nav);
            observer.register(
                section.as_str(),
                DetectionMode::Offset {
                    margin_px: config.nav.margin_px,
                },
                TriggerPolicy::Repeatable,
                move |transition| {
                    highlighter
                        .borrow_mut()
                        .on_transition(transition, &mut *nav.borrow_mut());
                },
            )?;
        }

        let reveal = Rc::new(RefCell::new(RevealTrigger::new(RevealStyle {
            offset_y: config.reveal.offset_y,
            stagger_ms: config.reveal.stagger_ms,
        })));
        for animated in &config.animated {
            let region = RegionId::from(animated.as_str());
            reveal.borrow().prepare(&region, &mut *surface.borrow_mut());

            let reveal = Rc::clone(&reveal);
            let surface = Rc::clone(&surface);
            observer.register(
                region,
                DetectionMode::OverlapRatio {
                    threshold: config.reveal.threshold,
                },
                TriggerPolicy::Once,
                move |transition| {
                    reveal
                        .borrow_mut()
                        .on_transition(transition, &mut *surface.borrow_mut());
                },
            )?;
        }

        if let Some(stats) = &config.stats {
            let commands = Rc::clone(&commands);
            observer.register(
                stats.trigger.as_str(),
                DetectionMode::OverlapRatio {
                    threshold: config.reveal.threshold,
                },
                TriggerPolicy::Once,
                move |_| {
                    commands.borrow_mut().push(PageCommand::StartCounters);
                },
            )?;
        }

        log::info!(
            "page assembled: {} sections, {} animated regions",
            config.sections.len(),
            config.animated.len()
        );
        Ok(PageController::assemble(
            config,
            observer,
            highlighter,
            reveal,
            commands,
            Viewport::new(0.0, self.viewport_height),
            measurer,
            surface,
            nav,
            notifications,
        ))
    }
}

fn required<T>(value: Option<T>, what: &str) -> Result<T, PageError> {
    value.ok_or_else(|| PageError::Config(format!("missing {}", what)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vantage_traits::{InMemoryMeasurer, InMemoryNav, InMemoryNotifications, InMemorySurface};

    type Hosts = (
        Rc<RefCell<InMemoryMeasurer>>,
        Rc<RefCell<InMemorySurface>>,
        Rc<RefCell<InMemoryNav>>,
        Rc<RefCell<InMemoryNotifications>>,
    );

    fn hosts() -> Hosts {
        (
            Rc::new(RefCell::new(InMemoryMeasurer::new())),
            Rc::new(RefCell::new(InMemorySurface::new())),
            Rc::new(RefCell::new(InMemoryNav::new())),
            Rc::new(RefCell::new(InMemoryNotifications::new())),
        )
    }

    fn builder(json: &str, hosts: &Hosts) -> PageBuilder {
        PageBuilder::new()
            .with_config_json(json)
            .unwrap()
            .with_measurer(hosts.0.clone())
            .with_surface(hosts.1.clone())
            .with_nav(hosts.2.clone())
            .with_notifications(hosts.3.clone())
    }

    #[test]
    fn test_build_registers_all_subscriptions() {
        let hosts = hosts();
        let controller = builder(
            r#"{
                "sections": ["hero", "features"],
                "animated": ["card-1", "card-2", "card-3"],
                "stats": { "trigger": "hero-stats", "counters": [] }
            }"#,
            &hosts,
        )
        .with_viewport_height(800.0)
        .build()
        .unwrap();

        // 2 sections + 3 animated + 1 stats trigger.
        assert_eq!(controller.watch_count(), 6);
    }

    #[test]
    fn test_build_prepares_animated_regions() {
        let hosts = hosts();
        builder(r#"{ "animated": ["card-1"] }"#, &hosts)
            .build()
            .unwrap();

        let surface = hosts.1.borrow();
        let state = surface.state(&RegionId::new("card-1")).unwrap();
        assert_eq!(state.opacity, Some(0.0));
        assert_eq!(state.translate_y, Some(30.0));
    }

    #[test]
    fn test_build_without_hosts_fails() {
        let result = PageBuilder::new()
            .with_config(PageConfig::default())
            .build();
        assert!(matches!(result, Err(PageError::Config(_))));
    }

    #[test]
    fn test_default_nav_entry_applied_at_build() {
        let hosts = hosts();
        builder(
            r#"{ "sections": ["hero"], "nav": { "defaultEntry": "hero" } }"#,
            &hosts,
        )
        .build()
        .unwrap();

        assert_eq!(hosts.2.borrow().active(), Some(&RegionId::new("hero")));
    }
}
