//! Declarative page description.
//!
//! A `PageConfig` names the regions of the host page and which engine
//! behaviors bind to them. It is plain data, typically parsed from
//! JSON; the builder turns it into live subscriptions.
//!
//! Region ids must be unique across everything that registers a
//! visibility subscription (sections, animated regions, the stats
//! trigger): the observer rejects duplicates at registration.

use crate::error::PageError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Full description of one page.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    /// Navigation-bound sections, in document order (top to bottom).
    #[serde(default)]
    pub sections: Vec<String>,
    /// Decorative regions revealed on first entry.
    #[serde(default)]
    pub animated: Vec<String>,
    #[serde(default)]
    pub nav: NavConfig,
    #[serde(default)]
    pub reveal: RevealConfig,
    /// Region whose opacity is raised on page load.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_root: Option<String>,
    /// Parent region for floating particles.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero: Option<String>,
    /// Regions translated at half scroll speed.
    #[serde(default)]
    pub parallax: Vec<String>,
    /// Regions tilted toward the pointer.
    #[serde(default)]
    pub tilt: Vec<String>,
    /// Regions that glow when the pointer is near.
    #[serde(default)]
    pub glow: Vec<String>,
    /// Buttons that ripple on click.
    #[serde(default)]
    pub buttons: Vec<String>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<StatsConfig>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<ProgressConfig>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu: Option<MenuConfig>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth: Option<AuthConfig>,
}

impl PageConfig {
    pub fn from_json(json: &str) -> Result<Self, PageError> {
        let config: PageConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the cross-field constraints serde cannot express.
    pub fn validate(&self) -> Result<(), PageError> {
        let mut watched = HashSet::new();
        let stats_region = self.stats.as_ref().map(|s| s.trigger.as_str());
        for id in self
            .sections
            .iter()
            .chain(self.animated.iter())
            .map(String::as_str)
            .chain(stats_region)
        {
            if !watched.insert(id) {
                return Err(PageError::Config(format!(
                    "region '{}' is bound to more than one visibility subscription",
                    id
                )));
            }
        }
        if let Some(default) = &self.nav.default_entry
            && !self.sections.contains(default)
        {
            return Err(PageError::Config(format!(
                "default navigation entry '{}' is not a section",
                default
            )));
        }
        Ok(())
    }
}

/// Navigation highlighting settings.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NavConfig {
    /// Offset-mode margin: a section counts as reached once the scroll
    /// offset passes its top minus this many pixels.
    #[serde(default = "default_nav_margin")]
    pub margin_px: f32,
    /// Entry marked active before any section has triggered.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_entry: Option<String>,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            margin_px: default_nav_margin(),
            default_entry: None,
        }
    }
}

fn default_nav_margin() -> f32 {
    200.0
}

/// Reveal animation settings.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RevealConfig {
    /// Overlap fraction required before a region reveals.
    #[serde(default = "default_reveal_threshold")]
    pub threshold: f32,
    /// Hidden-state vertical offset, in pixels.
    #[serde(default = "default_reveal_offset")]
    pub offset_y: f32,
    /// Cascade delay between reveals, in ms.
    #[serde(default = "default_reveal_stagger")]
    pub stagger_ms: u64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: default_reveal_threshold(),
            offset_y: default_reveal_offset(),
            stagger_ms: default_reveal_stagger(),
        }
    }
}

fn default_reveal_threshold() -> f32 {
    0.1
}

fn default_reveal_offset() -> f32 {
    30.0
}

fn default_reveal_stagger() -> u64 {
    100
}

/// Hero statistic counters, started when the trigger region scrolls in.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatsConfig {
    /// Region whose first entry starts every counter.
    pub trigger: String,
    pub counters: Vec<CounterConfig>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CounterConfig {
    pub region: String,
    pub target: u64,
    #[serde(default = "default_counter_duration")]
    pub duration_ms: u64,
}

fn default_counter_duration() -> u64 {
    2000
}

/// Animated SVG progress ring.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressConfig {
    pub region: String,
    pub radius: f32,
}

/// Responsive menu regions.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MenuConfig {
    /// The collapsible menu container.
    pub menu: String,
    /// The hamburger toggle button.
    pub hamburger: String,
}

/// Auth form regions and behavior.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthConfig {
    pub login_tab: String,
    pub signup_tab: String,
    pub login_button: String,
    pub signup_button: String,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength_bar: Option<String>,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strength_text: Option<String>,
    #[serde(default = "default_redirect_url")]
    pub redirect_url: String,
}

fn default_redirect_url() -> String {
    "http://localhost:8501".to_string()
}
