//! Responsive menu open/close state.

use crate::config::MenuConfig;
use vantage_traits::{PresentationSurface, StyleMutation};
use vantage_types::RegionId;

/// Class toggled on both the menu container and the hamburger button.
const OPEN_CLASS: &str = "active";

/// Tracks whether the collapsible menu is open and mirrors the state
/// onto the menu container and hamburger regions. The menu closes on
/// navigation clicks and on clicks outside it.
#[derive(Debug)]
pub struct Menu {
    menu: RegionId,
    hamburger: RegionId,
    open: bool,
}

impl Menu {
    pub fn new(config: &MenuConfig) -> Self {
        Self {
            menu: RegionId::from(config.menu.as_str()),
            hamburger: RegionId::from(config.hamburger.as_str()),
            open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn hamburger(&self) -> &RegionId {
        &self.hamburger
    }

    pub fn toggle(&mut self, surface: &mut dyn PresentationSurface) {
        self.open = !self.open;
        self.apply(surface);
    }

    /// Close if open; a no-op otherwise, so stray outside clicks do not
    /// spam the surface.
    pub fn close(&mut self, surface: &mut dyn PresentationSurface) {
        if !self.open {
            return;
        }
        self.open = false;
        self.apply(surface);
    }

    fn apply(&self, surface: &mut dyn PresentationSurface) {
        log::debug!("menu {}", if self.open { "opened" } else { "closed" });
        for region in [&self.menu, &self.hamburger] {
            surface.apply(
                region,
                StyleMutation::Class {
                    name: OPEN_CLASS.to_string(),
                    enabled: self.open,
                },
            );
        }
    }
}
