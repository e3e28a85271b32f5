use thiserror::Error;
use vantage_types::RegionId;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ObserverError {
    #[error("Detection threshold {0} is outside the valid range [0, 1].")]
    InvalidThreshold(f32),
    #[error("Region '{0}' is already registered.")]
    DuplicateId(RegionId),
}

pub(crate) mod engine;
pub mod mode;

pub use self::engine::{
    PassSummary, SubscriptionHandle, Transition, TransitionCallback, VisibilityObserver,
};
pub use self::mode::DetectionMode;

// Re-export the types the observer API is expressed in, to prevent
// version mismatches for downstream subscriber crates.
pub use vantage_types::{Rect, RegionId as Region, TriggerPolicy, Viewport, VisibilityState};
