//! Integration layer wiring the visibility engine to a page.
//!
//! A [`PageConfig`] describes the regions of one page; the
//! [`PageBuilder`] assembles a [`PageController`] over the four host
//! traits; the controller then processes [`HostEvent`]s one at a time,
//! driving the observer, the subscribers, and the effect scheduler.

pub mod builder;
pub mod config;
pub mod controller;
pub mod error;
pub mod events;
pub mod menu;
pub mod pointer;

pub use builder::PageBuilder;
pub use config::{
    AuthConfig, CounterConfig, MenuConfig, NavConfig, PageConfig, ProgressConfig, RevealConfig,
    StatsConfig,
};
pub use controller::{PageController, SharedMeasurer, SharedNav, SharedSink, SharedSurface};
pub use error::PageError;
pub use events::HostEvent;
