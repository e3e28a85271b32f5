//! Vantage: a scroll-driven viewport visibility engine.
//!
//! The engine watches named page regions, classifies each as hidden or
//! visible against the current viewport, and dispatches transitions to
//! subscribers: a navigation highlighter, a one-shot reveal trigger,
//! and a set of scheduled presentation effects. All host interaction
//! flows through four traits (measurement, presentation, navigation,
//! notifications), so the same engine runs against a real page or
//! entirely in memory.

// Foundation types
pub use vantage_types::{Rect, RegionId, TriggerPolicy, Viewport, VisibilityState};

// Host traits and their in-memory implementations
pub use vantage_traits::{
    BannerId, BannerPhase, ElementState, InMemoryMeasurer, InMemoryNav, InMemoryNotifications,
    InMemorySurface, NavSurface, NotificationSink, PresentationSurface, RegionMeasurer, Severity,
    SpawnSpec, StyleMutation,
};

// The visibility observer
pub use vantage_observer::{
    DetectionMode, ObserverError, PassSummary, SubscriptionHandle, Transition, VisibilityObserver,
};

// Subscribers
pub use vantage_highlight::NavHighlighter;
pub use vantage_reveal::{RevealStyle, RevealTrigger};

// Effects and scheduling
pub use vantage_effects::{Scheduler, TaskControl, TaskHandle};

// Form collaborators
pub use vantage_form::{
    password_strength, AuthTab, LoginSubmission, SignupSubmission, StrengthLabel,
};

// Integration layer
pub use vantage_core::{
    HostEvent, PageBuilder, PageConfig, PageController, PageError, SharedMeasurer, SharedNav,
    SharedSink, SharedSurface,
};
