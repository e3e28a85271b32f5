//! PresentationSurface and NavSurface traits for abstracting style
//! mutation.
//!
//! All visual writes the engine performs flow through these traits as
//! typed operations, so a single subscriber owns each presentation
//! concern and tests can assert on the exact mutations issued.

use std::collections::{BTreeSet, HashMap};
use std::fmt::Debug;
use vantage_types::RegionId;

/// A typed style write against one region.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleMutation {
    /// Element opacity in [0, 1].
    Opacity(f32),
    /// Vertical translation in pixels (0 = resting position).
    TranslateY(f32),
    /// 3D tilt in degrees, from pointer tracking.
    Tilt { rotate_x: f32, rotate_y: f32 },
    /// Proximity glow strength in [0, 1]; `None` clears the glow.
    Glow(Option<f32>),
    /// Replace the element's text content.
    Text(String),
    /// Text color as a CSS color string.
    TextColor(String),
    /// Fill percentage of a bar-style indicator, in [0, 100].
    BarFill(f32),
    /// Toggle a class on or off.
    Class { name: String, enabled: bool },
    /// Show or hide the element outright.
    Display(bool),
    /// Delay before the element's entry animation starts, in ms.
    AnimationDelay(u64),
    /// SVG stroke dash pattern length (progress rings).
    StrokeDasharray(f32),
    /// SVG stroke dash offset (progress rings).
    StrokeDashoffset(f32),
}

/// A request to create a short-lived decorative element under a parent
/// region.
#[derive(Debug, Clone, PartialEq)]
pub enum SpawnSpec {
    /// A click ripple at pointer coordinates relative to the parent.
    Ripple { x: f32, y: f32, size: f32 },
    /// A floating background particle (position in percent of parent).
    Particle {
        diameter: f32,
        left_pct: f32,
        top_pct: f32,
        opacity: f32,
        period_s: f32,
    },
}

/// A trait for applying presentation mutations.
///
/// The engine owns *what* changes; implementations own *how* the change
/// lands on their platform (inline styles, class lists, a retained
/// scene graph, ...).
pub trait PresentationSurface: Debug {
    /// Apply a single style mutation to a region.
    fn apply(&mut self, region: &RegionId, mutation: StyleMutation);

    /// Create a decorative child element and return its generated id.
    fn spawn(&mut self, parent: &RegionId, spec: SpawnSpec) -> RegionId;

    /// Remove an element. Removing an already-removed or unknown
    /// element is a no-op: timer-driven cleanups may outlive their
    /// target.
    fn remove(&mut self, region: &RegionId);

    /// Returns a human-readable name for this surface (for logging).
    fn name(&self) -> &'static str;
}

/// A trait for the navigation active-entry swap.
///
/// `set_active` replaces the previous active entry in one call, so a
/// caller never observes an intermediate state with zero or multiple
/// active entries.
pub trait NavSurface: Debug {
    fn set_active(&mut self, active: Option<&RegionId>);

    fn name(&self) -> &'static str;
}

/// Accumulated visual state of one element on the in-memory surface.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementState {
    pub opacity: Option<f32>,
    pub translate_y: Option<f32>,
    pub tilt: Option<(f32, f32)>,
    pub glow: Option<f32>,
    pub text: Option<String>,
    pub text_color: Option<String>,
    pub bar_fill: Option<f32>,
    pub classes: BTreeSet<String>,
    pub visible: Option<bool>,
    pub animation_delay_ms: Option<u64>,
    pub stroke_dasharray: Option<f32>,
    pub stroke_dashoffset: Option<f32>,
}

impl ElementState {
    pub fn has_class(&self, name: &str) -> bool {
        self.classes.contains(name)
    }
}

/// An in-memory presentation surface.
///
/// Tracks the resulting visual state per element and keeps a full log
/// of applied mutations, which is what most engine tests assert on.
#[derive(Debug, Default)]
pub struct InMemorySurface {
    elements: HashMap<RegionId, ElementState>,
    log: Vec<(RegionId, StyleMutation)>,
    spawned: Vec<(RegionId, RegionId, SpawnSpec)>,
    removed: Vec<RegionId>,
    next_spawn: u64,
}

impl InMemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated state of an element, if any mutation touched it.
    pub fn state(&self, region: &RegionId) -> Option<&ElementState> {
        self.elements.get(region)
    }

    pub fn opacity_of(&self, region: &RegionId) -> Option<f32> {
        self.state(region).and_then(|s| s.opacity)
    }

    pub fn text_of(&self, region: &RegionId) -> Option<&str> {
        self.state(region).and_then(|s| s.text.as_deref())
    }

    pub fn has_class(&self, region: &RegionId, class: &str) -> bool {
        self.state(region).is_some_and(|s| s.has_class(class))
    }

    /// All mutations applied so far, in order.
    pub fn log(&self) -> &[(RegionId, StyleMutation)] {
        &self.log
    }

    /// Mutations applied to one region, in order.
    pub fn log_for(&self, region: &RegionId) -> Vec<&StyleMutation> {
        self.log
            .iter()
            .filter(|(id, _)| id == region)
            .map(|(_, m)| m)
            .collect()
    }

    /// Spawned decorations as (parent, child, spec).
    pub fn spawned(&self) -> &[(RegionId, RegionId, SpawnSpec)] {
        &self.spawned
    }

    /// Elements removed so far, in removal order.
    pub fn removed(&self) -> &[RegionId] {
        &self.removed
    }

    /// Whether a spawned element is still alive (spawned, not removed).
    pub fn is_alive(&self, region: &RegionId) -> bool {
        self.spawned.iter().any(|(_, child, _)| child == region)
            && !self.removed.contains(region)
    }
}

impl PresentationSurface for InMemorySurface {
    fn apply(&mut self, region: &RegionId, mutation: StyleMutation) {
        let state = self.elements.entry(region.clone()).or_default();
        match &mutation {
            StyleMutation::Opacity(value) => state.opacity = Some(*value),
            StyleMutation::TranslateY(px) => state.translate_y = Some(*px),
            StyleMutation::Tilt { rotate_x, rotate_y } => {
                state.tilt = Some((*rotate_x, *rotate_y));
            }
            StyleMutation::Glow(strength) => state.glow = *strength,
            StyleMutation::Text(text) => state.text = Some(text.clone()),
            StyleMutation::TextColor(color) => state.text_color = Some(color.clone()),
            StyleMutation::BarFill(percent) => state.bar_fill = Some(*percent),
            StyleMutation::Class { name, enabled } => {
                if *enabled {
                    state.classes.insert(name.clone());
                } else {
                    state.classes.remove(name);
                }
            }
            StyleMutation::Display(visible) => state.visible = Some(*visible),
            StyleMutation::AnimationDelay(ms) => state.animation_delay_ms = Some(*ms),
            StyleMutation::StrokeDasharray(len) => state.stroke_dasharray = Some(*len),
            StyleMutation::StrokeDashoffset(offset) => state.stroke_dashoffset = Some(*offset),
        }
        self.log.push((region.clone(), mutation));
    }

    fn spawn(&mut self, parent: &RegionId, spec: SpawnSpec) -> RegionId {
        let kind = match spec {
            SpawnSpec::Ripple { .. } => "ripple",
            SpawnSpec::Particle { .. } => "particle",
        };
        let child = RegionId::new(format!("{}#{}-{}", parent, kind, self.next_spawn));
        self.next_spawn += 1;
        self.spawned.push((parent.clone(), child.clone(), spec));
        child
    }

    fn remove(&mut self, region: &RegionId) {
        if self.removed.contains(region) {
            return;
        }
        self.elements.remove(region);
        self.removed.push(region.clone());
    }

    fn name(&self) -> &'static str {
        "InMemorySurface"
    }
}

/// An in-memory navigation surface recording every active-entry swap.
#[derive(Debug, Default)]
pub struct InMemoryNav {
    active: Option<RegionId>,
    swaps: Vec<Option<RegionId>>,
}

impl InMemoryNav {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<&RegionId> {
        self.active.as_ref()
    }

    /// Every `set_active` call observed, in order.
    pub fn swaps(&self) -> &[Option<RegionId>] {
        &self.swaps
    }
}

impl NavSurface for InMemoryNav {
    fn set_active(&mut self, active: Option<&RegionId>) {
        self.active = active.cloned();
        self.swaps.push(self.active.clone());
    }

    fn name(&self) -> &'static str {
        "InMemoryNav"
    }
}
