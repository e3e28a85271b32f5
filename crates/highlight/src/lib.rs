//! Navigation highlighter.
//!
//! Consumes offset-mode transitions for the fixed, ordered list of
//! navigation-bound sections and keeps exactly one navigation entry
//! active: the last entry in document order whose offset predicate is
//! currently satisfied. A manual click pins an entry until the next
//! scroll-driven transition.

use itertools::Itertools;
use vantage_observer::Transition;
use vantage_traits::NavSurface;
use vantage_types::RegionId;

/// Selects the active navigation entry from region transitions.
///
/// Entry order is document order; the integration layer builds it from
/// the page section list. All writes go through [`NavSurface::set_active`]
/// as a single swap, and only when the selection actually changes, so
/// no intermediate frame shows zero or multiple active entries.
#[derive(Debug)]
pub struct NavHighlighter {
    entries: Vec<RegionId>,
    satisfied: Vec<bool>,
    pinned: Option<usize>,
    default_entry: Option<usize>,
    applied: Option<Option<usize>>,
}

impl NavHighlighter {
    /// Build a highlighter over entries in document order. An unknown
    /// `default_entry` is treated as no default.
    pub fn new(entries: Vec<RegionId>, default_entry: Option<&RegionId>) -> Self {
        let default_entry =
            default_entry.and_then(|id| entries.iter().find_position(|e| *e == id).map(|(i, _)| i));
        let satisfied = vec![false; entries.len()];
        Self {
            entries,
            satisfied,
            pinned: None,
            default_entry,
            applied: None,
        }
    }

    /// Apply the initial selection (the configured default, or none).
    pub fn initialize(&mut self, nav: &mut dyn NavSurface) {
        self.apply(nav);
    }

    /// Feed one offset-mode transition. Transitions for regions outside
    /// the entry list are ignored. Any scroll-driven transition clears
    /// a manual pin.
    pub fn on_transition(&mut self, transition: &Transition, nav: &mut dyn NavSurface) {
        let Some((index, _)) = self
            .entries
            .iter()
            .find_position(|e| **e == transition.region)
        else {
            log::trace!(
                "ignoring transition for non-navigation region '{}'",
                transition.region
            );
            return;
        };
        self.satisfied[index] = transition.entered();
        self.pinned = None;
        self.apply(nav);
    }

    /// Force an entry active immediately (a manual navigation click).
    /// Stays pinned until the next scroll-driven transition. Returns
    /// false for ids that are not navigation entries.
    pub fn force_active(&mut self, entry: &RegionId, nav: &mut dyn NavSurface) -> bool {
        let Some((index, _)) = self.entries.iter().find_position(|e| *e == entry) else {
            return false;
        };
        self.pinned = Some(index);
        self.apply(nav);
        true
    }

    /// The currently selected entry, if any.
    pub fn selection(&self) -> Option<&RegionId> {
        self.selection_index().map(|i| &self.entries[i])
    }

    fn selection_index(&self) -> Option<usize> {
        self.pinned
            .or_else(|| self.satisfied.iter().rposition(|s| *s))
            .or(self.default_entry)
    }

    fn apply(&mut self, nav: &mut dyn NavSurface) {
        let selection = self.selection_index();
        if self.applied == Some(selection) {
            return;
        }
        log::debug!(
            "nav selection -> {:?}",
            selection.map(|i| self.entries[i].as_str())
        );
        nav.set_active(selection.map(|i| &self.entries[i]));
        self.applied = Some(selection);
    }
}
