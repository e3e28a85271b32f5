//! NotificationSink trait for transient user-facing banners.
//!
//! Form validation failures and simulated submission successes surface
//! here. Banners are fire-and-forget: the effects scheduler drives the
//! dismissal timing, and a sink must tolerate dismiss/remove calls for
//! banners it no longer knows about.

use std::fmt::Debug;

/// Opaque handle to a displayed banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BannerId(pub u64);

/// Severity tag controlling banner presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    /// Banner background color used by the stock presentation.
    pub fn color(self) -> &'static str {
        match self {
            Severity::Info => "#6366f1",
            Severity::Success => "#10b981",
            Severity::Error => "#ef4444",
        }
    }
}

/// Lifecycle phase of a banner on the in-memory sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerPhase {
    /// Visible on screen.
    Shown,
    /// Exit animation running; still in the tree.
    Dismissing,
}

/// A trait for displaying transient notification banners.
pub trait NotificationSink: Debug {
    /// Display a banner and return its handle.
    fn show(&mut self, message: &str, severity: Severity) -> BannerId;

    /// Start the banner's exit animation. Unknown ids are a no-op.
    fn begin_dismiss(&mut self, banner: BannerId);

    /// Remove the banner entirely. Idempotent; unknown ids are a no-op.
    fn remove(&mut self, banner: BannerId);

    /// Returns a human-readable name for this sink (for logging).
    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone, PartialEq)]
struct Banner {
    id: BannerId,
    message: String,
    severity: Severity,
    phase: BannerPhase,
}

/// An in-memory notification sink recording the banner lifecycle.
#[derive(Debug, Default)]
pub struct InMemoryNotifications {
    banners: Vec<Banner>,
    removed: Vec<BannerId>,
    next: u64,
}

impl InMemoryNotifications {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages of banners currently on screen (any phase).
    pub fn visible_messages(&self) -> Vec<&str> {
        self.banners.iter().map(|b| b.message.as_str()).collect()
    }

    pub fn phase_of(&self, banner: BannerId) -> Option<BannerPhase> {
        self.banners.iter().find(|b| b.id == banner).map(|b| b.phase)
    }

    pub fn severity_of(&self, banner: BannerId) -> Option<Severity> {
        self.banners
            .iter()
            .find(|b| b.id == banner)
            .map(|b| b.severity)
    }

    pub fn removed(&self) -> &[BannerId] {
        &self.removed
    }

    pub fn is_empty(&self) -> bool {
        self.banners.is_empty()
    }
}

impl NotificationSink for InMemoryNotifications {
    fn show(&mut self, message: &str, severity: Severity) -> BannerId {
        let id = BannerId(self.next);
        self.next += 1;
        self.banners.push(Banner {
            id,
            message: message.to_string(),
            severity,
            phase: BannerPhase::Shown,
        });
        id
    }

    fn begin_dismiss(&mut self, banner: BannerId) {
        if let Some(b) = self.banners.iter_mut().find(|b| b.id == banner) {
            b.phase = BannerPhase::Dismissing;
        }
    }

    fn remove(&mut self, banner: BannerId) {
        let before = self.banners.len();
        self.banners.retain(|b| b.id != banner);
        if self.banners.len() != before {
            self.removed.push(banner);
        }
    }

    fn name(&self) -> &'static str {
        "InMemoryNotifications"
    }
}
