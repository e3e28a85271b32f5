//! Auth tab toggle (Login / Signup).

/// Which auth tab is showing. Exactly one is active at all times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthTab {
    Login,
    Signup,
}

/// Two-state tab machine. The surface writes (class swaps on the tab
/// panels and buttons) belong to the integration layer; this only
/// tracks which tab holds the active state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthTabs {
    active: AuthTab,
}

impl AuthTabs {
    pub fn new() -> Self {
        Self {
            active: AuthTab::Login,
        }
    }

    pub fn active(&self) -> AuthTab {
        self.active
    }

    /// Activate a tab. Returns true when the active tab changed.
    pub fn activate(&mut self, tab: AuthTab) -> bool {
        if self.active == tab {
            return false;
        }
        self.active = tab;
        true
    }
}

impl Default for AuthTabs {
    fn default() -> Self {
        Self::new()
    }
}
