pub mod measure;
pub mod notify;
pub mod surface;

pub use measure::{InMemoryMeasurer, RegionMeasurer};
pub use notify::{BannerId, BannerPhase, InMemoryNotifications, NotificationSink, Severity};
pub use surface::{
    ElementState, InMemoryNav, InMemorySurface, NavSurface, PresentationSurface, SpawnSpec,
    StyleMutation,
};
