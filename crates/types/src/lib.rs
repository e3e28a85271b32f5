pub mod geometry;
pub mod ids;
pub mod visibility;

pub use geometry::{Rect, Viewport};
pub use ids::RegionId;
pub use visibility::{TriggerPolicy, VisibilityState};
