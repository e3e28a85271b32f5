//! The page controller: one synchronous pass per host event.

use crate::config::PageConfig;
use crate::events::{HostEvent, PageCommand};
use crate::menu::Menu;
use crate::pointer::PointerEffects;
use std::cell::RefCell;
use std::rc::Rc;
use vantage_effects::{
    animate_counter, apply_parallax, notify, spawn_particles, spawn_ripple, type_text,
    ProgressRing, Scheduler, TaskControl,
};
use vantage_form::{password_strength, AuthTab, AuthTabs, FollowUp, SubmitOutcome};
use vantage_highlight::NavHighlighter;
use vantage_observer::VisibilityObserver;
use vantage_reveal::RevealTrigger;
use vantage_traits::{
    NavSurface, NotificationSink, PresentationSurface, RegionMeasurer, StyleMutation,
};
use vantage_types::{RegionId, Viewport};

/// Class marking the active auth tab and its panel.
const TAB_CLASS: &str = "active";

/// Host traits are shared between the controller and its subscription
/// callbacks, so they travel as `Rc<RefCell<dyn Trait>>`.
pub type SharedMeasurer = Rc<RefCell<dyn RegionMeasurer>>;
pub type SharedSurface = Rc<RefCell<dyn PresentationSurface>>;
pub type SharedNav = Rc<RefCell<dyn NavSurface>>;
pub type SharedSink = Rc<RefCell<dyn NotificationSink>>;

/// Drives one page: owns the observer, the scheduler, and every
/// subscriber, and translates host events into engine passes.
///
/// All processing is synchronous and single-threaded. Subscription
/// callbacks and scheduled tasks defer anything that needs the
/// controller itself (starting counters, navigation, tab switches)
/// through an internal command queue drained at the end of the pass.
pub struct PageController {
    config: PageConfig,
    observer: VisibilityObserver,
    scheduler: Scheduler,
    highlighter: Rc<RefCell<NavHighlighter>>,
    reveal: Rc<RefCell<RevealTrigger>>,
    tabs: AuthTabs,
    menu: Option<Menu>,
    pointer: PointerEffects,
    viewport: Viewport,
    progress: Option<ProgressRing>,
    counters_started: bool,
    pending_navigation: Option<String>,
    commands: Rc<RefCell<Vec<PageCommand>>>,
    measurer: SharedMeasurer,
    surface: SharedSurface,
    nav: SharedNav,
    notifications: SharedSink,
    now_ms: u64,
}

impl std::fmt::Debug for PageController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageController")
            .field("observer", &self.observer)
            .field("scheduler", &self.scheduler)
            .field("viewport", &self.viewport)
            .finish()
    }
}

impl PageController {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn assemble(
        config: PageConfig,
        observer: VisibilityObserver,
        highlighter: Rc<RefCell<NavHighlighter>>,
        reveal: Rc<RefCell<RevealTrigger>>,
        commands: Rc<RefCell<Vec<PageCommand>>>,
        viewport: Viewport,
        measurer: SharedMeasurer,
        surface: SharedSurface,
        nav: SharedNav,
        notifications: SharedSink,
    ) -> Self {
        let menu = config.menu.as_ref().map(Menu::new);
        let pointer = PointerEffects::new(
            to_regions(&config.tilt),
            to_regions(&config.glow),
        );
        let progress = config
            .progress
            .as_ref()
            .map(|p| ProgressRing::new(RegionId::from(p.region.as_str()), p.radius));
        Self {
            config,
            observer,
            scheduler: Scheduler::new(),
            highlighter,
            reveal,
            tabs: AuthTabs::new(),
            menu,
            pointer,
            viewport,
            progress,
            counters_started: false,
            pending_navigation: None,
            commands,
            measurer,
            surface,
            nav,
            notifications,
            now_ms: 0,
        }
    }

    /// Process one host event to completion.
    pub fn handle_event(&mut self, event: HostEvent) {
        log::trace!("event: {:?}", event);
        match event {
            HostEvent::Load => self.on_load(),
            HostEvent::Scroll { offset } => {
                self.viewport.scroll_offset = offset;
                self.recompute();
                apply_parallax(
                    &mut *self.surface.borrow_mut(),
                    &to_regions(&self.config.parallax),
                    offset,
                );
            }
            HostEvent::Resize { height } => {
                self.viewport.height = height;
                self.recompute();
            }
            HostEvent::Click { target, x, y } => self.on_click(target, x, y),
            HostEvent::PointerMove { x, y } => {
                self.pointer.on_move(
                    x,
                    y,
                    &*self.measurer.borrow(),
                    &mut *self.surface.borrow_mut(),
                );
            }
            HostEvent::PointerLeave => {
                self.pointer.on_leave(&mut *self.surface.borrow_mut());
            }
            HostEvent::PasswordInput { value } => self.on_password_input(&value),
            HostEvent::LoginSubmit(submission) => {
                let redirect_url = self
                    .config
                    .auth
                    .as_ref()
                    .map(|a| a.redirect_url.clone())
                    .unwrap_or_default();
                let outcome = submission.evaluate(&redirect_url);
                self.on_submit_outcome(outcome);
            }
            HostEvent::SignupSubmit(submission) => {
                let outcome = submission.evaluate();
                self.on_submit_outcome(outcome);
            }
            HostEvent::Tick { now_ms } => {
                self.now_ms = self.now_ms.max(now_ms);
                self.scheduler.tick(
                    self.now_ms,
                    &mut *self.surface.borrow_mut(),
                    &mut *self.notifications.borrow_mut(),
                );
            }
        }
        self.drain_commands();
    }

    fn on_load(&mut self) {
        if let Some(root) = &self.config.page_root {
            self.surface
                .borrow_mut()
                .apply(&RegionId::from(root.as_str()), StyleMutation::Opacity(1.0));
        }
        if let Some(hero) = &self.config.hero {
            spawn_particles(&mut *self.surface.borrow_mut(), &RegionId::from(hero.as_str()));
        }
        if let Some(ring) = self.progress.take() {
            ring.begin(&mut *self.surface.borrow_mut());
            ring.animate(&mut self.scheduler);
        }
        self.recompute();
    }

    fn on_click(&mut self, target: Option<RegionId>, x: f32, y: f32) {
        let Some(target) = target else {
            if let Some(menu) = &mut self.menu {
                menu.close(&mut *self.surface.borrow_mut());
            }
            return;
        };

        if let Some(menu) = &mut self.menu
            && menu.hamburger() == &target
        {
            menu.toggle(&mut *self.surface.borrow_mut());
            return;
        }

        if self.config.sections.iter().any(|s| s.as_str() == target.as_str()) {
            self.highlighter
                .borrow_mut()
                .force_active(&target, &mut *self.nav.borrow_mut());
            if let Some(menu) = &mut self.menu {
                menu.close(&mut *self.surface.borrow_mut());
            }
            return;
        }

        if let Some(tab) = self.tab_for(&target) {
            self.activate_tab(tab);
            return;
        }

        if self.config.buttons.iter().any(|b| b.as_str() == target.as_str()) {
            let bounds = self.measurer.borrow().measure(&target);
            if let Some(bounds) = bounds {
                spawn_ripple(
                    &mut self.scheduler,
                    &mut *self.surface.borrow_mut(),
                    &target,
                    &bounds,
                    x,
                    y,
                );
            }
            return;
        }

        // A click anywhere else closes the menu.
        if let Some(menu) = &mut self.menu {
            menu.close(&mut *self.surface.borrow_mut());
        }
    }

    fn on_password_input(&mut self, value: &str) {
        let Some(auth) = &self.config.auth else {
            return;
        };
        let report = password_strength(value);
        let mut surface = self.surface.borrow_mut();
        if let Some(bar) = &auth.strength_bar {
            surface.apply(
                &RegionId::from(bar.as_str()),
                StyleMutation::BarFill(report.percent()),
            );
        }
        if let Some(text) = &auth.strength_text {
            let region = RegionId::from(text.as_str());
            surface.apply(&region, StyleMutation::Text(report.label.text().to_string()));
            surface.apply(
                &region,
                StyleMutation::TextColor(report.label.color().to_string()),
            );
        }
    }

    fn on_submit_outcome(&mut self, outcome: SubmitOutcome) {
        notify(
            &mut self.scheduler,
            &mut *self.notifications.borrow_mut(),
            outcome.message,
            outcome.severity,
        );
        let Some(follow_up) = outcome.follow_up else {
            return;
        };
        let commands = Rc::clone(&self.commands);
        match follow_up {
            FollowUp::Redirect { url, delay_ms } => {
                self.scheduler.schedule_once(delay_ms, move |_| {
                    commands.borrow_mut().push(PageCommand::Navigate(url.clone()));
                    TaskControl::Stop
                });
            }
            FollowUp::SwitchToLogin { delay_ms } => {
                self.scheduler.schedule_once(delay_ms, move |_| {
                    commands
                        .borrow_mut()
                        .push(PageCommand::ActivateTab(AuthTab::Login));
                    TaskControl::Stop
                });
            }
        }
    }

    fn recompute(&mut self) {
        let measurer = self.measurer.borrow();
        self.observer.recompute(&self.viewport, &*measurer);
    }

    fn drain_commands(&mut self) {
        // Commands may enqueue further commands (none do today, but the
        // loop costs nothing).
        loop {
            let drained: Vec<PageCommand> = self.commands.borrow_mut().drain(..).collect();
            if drained.is_empty() {
                break;
            }
            for command in drained {
                match command {
                    PageCommand::StartCounters => self.start_counters(),
                    PageCommand::Navigate(url) => {
                        log::info!("navigating to {}", url);
                        self.pending_navigation = Some(url);
                    }
                    PageCommand::ActivateTab(tab) => self.activate_tab(tab),
                }
            }
        }
    }

    fn start_counters(&mut self) {
        if self.counters_started {
            return;
        }
        self.counters_started = true;
        let Some(stats) = &self.config.stats else {
            return;
        };
        log::debug!("starting {} stat counters", stats.counters.len());
        for counter in &stats.counters {
            animate_counter(
                &mut self.scheduler,
                RegionId::from(counter.region.as_str()),
                counter.target,
                counter.duration_ms,
            );
        }
    }

    fn tab_for(&self, target: &RegionId) -> Option<AuthTab> {
        let auth = self.config.auth.as_ref()?;
        if auth.login_button == target.as_str() {
            Some(AuthTab::Login)
        } else if auth.signup_button == target.as_str() {
            Some(AuthTab::Signup)
        } else {
            None
        }
    }

    fn activate_tab(&mut self, tab: AuthTab) {
        if !self.tabs.activate(tab) {
            return;
        }
        let Some(auth) = &self.config.auth else {
            return;
        };
        let mut surface = self.surface.borrow_mut();
        for (region, active_tab) in [
            (&auth.login_tab, AuthTab::Login),
            (&auth.signup_tab, AuthTab::Signup),
        ] {
            surface.apply(
                &RegionId::from(region.as_str()),
                StyleMutation::Class {
                    name: TAB_CLASS.to_string(),
                    enabled: tab == active_tab,
                },
            );
        }
    }

    /// Type `text` into a region one character per 50 ms tick.
    pub fn start_typing(&mut self, region: impl Into<RegionId>, text: &str) {
        type_text(
            &mut self.scheduler,
            &mut *self.surface.borrow_mut(),
            region.into(),
            text,
        );
    }

    /// The navigation entry currently highlighted, if any.
    pub fn active_nav(&self) -> Option<RegionId> {
        self.highlighter.borrow().selection().cloned()
    }

    /// The auth tab currently active.
    pub fn active_tab(&self) -> AuthTab {
        self.tabs.active()
    }

    /// Whether an animated region has fired its reveal.
    pub fn is_revealed(&self, region: &RegionId) -> bool {
        self.reveal.borrow().is_revealed(region)
    }

    /// Regions still under visibility observation.
    pub fn watch_count(&self) -> usize {
        self.observer.watch_count()
    }

    /// Scheduled tasks still pending.
    pub fn pending_tasks(&self) -> usize {
        self.scheduler.task_count()
    }

    /// A navigation requested by a completed login flow, if any.
    /// Taking it clears the request.
    pub fn take_navigation(&mut self) -> Option<String> {
        self.pending_navigation.take()
    }
}

pub(crate) fn to_regions(ids: &[String]) -> Vec<RegionId> {
    ids.iter().map(|s| RegionId::from(s.as_str())).collect()
}
