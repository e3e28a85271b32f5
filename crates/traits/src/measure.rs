//! RegionMeasurer trait for abstracting layout measurement.
//!
//! The observer never caches bounds across passes; it asks the host for
//! fresh measurements on every recomputation so layout changes are
//! picked up automatically.

use std::collections::HashMap;
use std::fmt::Debug;
use vantage_types::{Rect, RegionId};

/// A trait for measuring the current document-space bounds of regions.
///
/// # Implementations
///
/// - `InMemoryMeasurer`: serves bounds from a pre-populated map (always
///   available, used by tests and simulations)
/// - host bindings measure live elements on their platform
pub trait RegionMeasurer: Debug {
    /// Measure the current bounds of a region.
    ///
    /// Returns `None` when the region cannot be measured this pass
    /// (e.g. it is not currently present in the document). That is a
    /// transient condition, not an error: the observer skips the region
    /// and retries on the next pass.
    fn measure(&self, id: &RegionId) -> Option<Rect>;

    /// Returns a human-readable name for this measurer (for logging).
    fn name(&self) -> &'static str;
}

/// An in-memory measurer backed by a map of fixed bounds.
///
/// Bounds can be updated between passes to simulate layout changes, and
/// removed to simulate a region that is temporarily unmeasurable.
#[derive(Debug, Default)]
pub struct InMemoryMeasurer {
    bounds: HashMap<RegionId, Rect>,
}

impl InMemoryMeasurer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or replace the bounds for a region.
    pub fn set(&mut self, id: impl Into<RegionId>, bounds: Rect) {
        self.bounds.insert(id.into(), bounds);
    }

    /// Remove a region's bounds, making it unmeasurable until re-set.
    pub fn remove(&mut self, id: &RegionId) -> Option<Rect> {
        self.bounds.remove(id)
    }

    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }
}

impl RegionMeasurer for InMemoryMeasurer {
    fn measure(&self, id: &RegionId) -> Option<Rect> {
        self.bounds.get(id).copied()
    }

    fn name(&self) -> &'static str {
        "InMemoryMeasurer"
    }
}
