//! The visibility observation engine.
//!
//! A registry of watched regions whose visibility classification is
//! recomputed per host event. Each pass runs in two phases: first every
//! watch is measured and classified, then the resulting transitions are
//! dispatched in registration order. Callbacks receive only the
//! transition value and hold no reference back to the observer, so they
//! cannot re-enter `register`/`unregister` mid-pass; `Once` watches
//! that fired are detached at the end of the pass.

use crate::mode::DetectionMode;
use crate::ObserverError;
use std::fmt;
use vantage_traits::RegionMeasurer;
use vantage_types::{RegionId, TriggerPolicy, Viewport, VisibilityState};

/// Opaque handle identifying one subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle(u64);

/// A visibility classification change for one region, produced by a
/// recomputation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub region: RegionId,
    pub from: VisibilityState,
    pub to: VisibilityState,
    /// Intersection ratio at classification time. Offset-mode
    /// subscriptions report 0 or 1.
    pub ratio: f32,
}

impl Transition {
    /// True for a `Hidden -> Visible` crossing.
    pub fn entered(&self) -> bool {
        self.to.is_visible()
    }
}

/// Callback invoked on each transition of the subscribed region.
pub type TransitionCallback = Box<dyn FnMut(&Transition)>;

/// Counts from one recomputation pass, mostly useful for logging and
/// tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassSummary {
    /// Watches that were measured and classified.
    pub evaluated: usize,
    /// Watches skipped because their region was unmeasurable.
    pub skipped: usize,
    /// Transitions dispatched.
    pub transitions: usize,
}

struct Watch {
    handle: SubscriptionHandle,
    region: RegionId,
    mode: DetectionMode,
    policy: TriggerPolicy,
    state: VisibilityState,
    callback: TransitionCallback,
}

/// Watches a registered set of page regions and dispatches visibility
/// transitions to their subscribers.
///
/// Recomputation is driven by the host (scroll/resize/load events);
/// the observer never polls. Bounds are re-measured every pass through
/// the [`RegionMeasurer`], so layout changes between passes are picked
/// up without invalidation bookkeeping.
#[derive(Default)]
pub struct VisibilityObserver {
    watches: Vec<Watch>,
    next_handle: u64,
}

impl fmt::Debug for VisibilityObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisibilityObserver")
            .field(
                "watches",
                &self.watches.iter().map(|w| &w.region).collect::<Vec<_>>(),
            )
            .field("next_handle", &self.next_handle)
            .finish()
    }
}

impl VisibilityObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a region to the watched set.
    ///
    /// Fails with [`ObserverError::InvalidThreshold`] if an
    /// overlap-ratio threshold lies outside [0, 1], and with
    /// [`ObserverError::DuplicateId`] if the region is already watched.
    /// A failed registration leaves the watched set untouched.
    pub fn register(
        &mut self,
        region: impl Into<RegionId>,
        mode: DetectionMode,
        policy: TriggerPolicy,
        callback: impl FnMut(&Transition) + 'static,
    ) -> Result<SubscriptionHandle, ObserverError> {
        mode.validate()?;
        let region = region.into();
        if self.watches.iter().any(|w| w.region == region) {
            return Err(ObserverError::DuplicateId(region));
        }

        let handle = SubscriptionHandle(self.next_handle);
        self.next_handle += 1;
        log::debug!("watching region '{}' with {:?} ({:?})", region, mode, policy);
        self.watches.push(Watch {
            handle,
            region,
            mode,
            policy,
            state: VisibilityState::Hidden,
            callback: Box::new(callback),
        });
        Ok(handle)
    }

    /// Remove a subscription. Unregistering an unknown or already
    /// removed handle is a no-op, not an error.
    pub fn unregister(&mut self, handle: SubscriptionHandle) {
        let before = self.watches.len();
        self.watches.retain(|w| w.handle != handle);
        if self.watches.len() != before {
            log::debug!("unregistered subscription {:?}", handle);
        }
    }

    /// Number of regions currently watched.
    pub fn watch_count(&self) -> usize {
        self.watches.len()
    }

    /// Whether the given region is in the watched set.
    pub fn is_watching(&self, region: &RegionId) -> bool {
        self.watches.iter().any(|w| &w.region == region)
    }

    /// Current classification of a watched region.
    pub fn state_of(&self, region: &RegionId) -> Option<VisibilityState> {
        self.watches
            .iter()
            .find(|w| &w.region == region)
            .map(|w| w.state)
    }

    /// Run one recomputation pass against the current viewport.
    ///
    /// Watches are evaluated in registration order; all callbacks from
    /// this pass run to completion before the method returns, so two
    /// passes never interleave. A region the measurer cannot measure is
    /// skipped with its state untouched and retried next pass.
    pub fn recompute(
        &mut self,
        viewport: &Viewport,
        measurer: &dyn RegionMeasurer,
    ) -> PassSummary {
        let mut summary = PassSummary::default();
        let mut fired: Vec<(usize, Transition)> = Vec::new();

        // Phase 1: measure and classify every watch. No callbacks run
        // here, so classification sees a consistent watched set.
        for (index, watch) in self.watches.iter_mut().enumerate() {
            let Some(bounds) = measurer.measure(&watch.region) else {
                log::trace!("region '{}' unmeasurable, skipping", watch.region);
                summary.skipped += 1;
                continue;
            };
            summary.evaluated += 1;

            let (visible, ratio) = watch.mode.classify(viewport, &bounds);
            let next = if visible {
                VisibilityState::Visible
            } else {
                VisibilityState::Hidden
            };
            if next == watch.state {
                continue;
            }
            // Once watches only ever cross forward; they are detached
            // after firing, so the reverse crossing must not transition.
            if !next.is_visible() && watch.policy == TriggerPolicy::Once {
                continue;
            }

            let transition = Transition {
                region: watch.region.clone(),
                from: watch.state,
                to: next,
                ratio,
            };
            watch.state = next;
            fired.push((index, transition));
        }

        // Phase 2: dispatch in registration order.
        for (index, transition) in &fired {
            log::debug!(
                "region '{}' {:?} -> {:?} (ratio {:.2})",
                transition.region,
                transition.from,
                transition.to,
                transition.ratio
            );
            (self.watches[*index].callback)(transition);
        }
        summary.transitions = fired.len();

        // Detach Once watches that fired this pass.
        self.watches
            .retain(|w| !(w.policy == TriggerPolicy::Once && w.state.is_visible()));

        log::trace!(
            "pass at offset {:.0}: {} evaluated, {} skipped, {} transitions",
            viewport.scroll_offset,
            summary.evaluated,
            summary.skipped,
            summary.transitions
        );
        summary
    }
}
