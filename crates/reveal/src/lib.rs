//! Reveal trigger.
//!
//! Consumes overlap-ratio `Hidden -> Visible` transitions for
//! decorative regions and applies a terminal reveal: opacity 0 -> 1 and
//! translate-y offset -> 0. The mutation is irreversible; a region
//! already revealed never re-animates, even if the same transition is
//! replayed.

use std::collections::HashSet;
use vantage_observer::Transition;
use vantage_traits::{PresentationSurface, StyleMutation};
use vantage_types::RegionId;

/// Visual parameters of the reveal animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    /// Resting vertical offset applied while hidden, in pixels.
    pub offset_y: f32,
    /// Delay between consecutive reveals registered in one batch, so
    /// staggered card entrances keep their cascade, in ms.
    pub stagger_ms: u64,
}

impl Default for RevealStyle {
    fn default() -> Self {
        Self {
            offset_y: 30.0,
            stagger_ms: 100,
        }
    }
}

/// Applies the one-shot reveal mutation on first entry.
///
/// The observer's `Once` policy already detaches the subscription after
/// the first crossing; the applied set here additionally guards against
/// replayed transitions so the reveal is idempotent from any caller.
#[derive(Debug, Default)]
pub struct RevealTrigger {
    style: RevealStyle,
    revealed: HashSet<RegionId>,
    reveal_order: usize,
}

impl RevealTrigger {
    pub fn new(style: RevealStyle) -> Self {
        Self {
            style,
            revealed: HashSet::new(),
            reveal_order: 0,
        }
    }

    /// Put a region into its pre-reveal state (transparent, offset).
    /// Called at page setup for every animated region.
    pub fn prepare(&self, region: &RegionId, surface: &mut dyn PresentationSurface) {
        surface.apply(region, StyleMutation::Opacity(0.0));
        surface.apply(region, StyleMutation::TranslateY(self.style.offset_y));
    }

    /// Feed one transition. Exits and repeated entries are no-ops.
    pub fn on_transition(&mut self, transition: &Transition, surface: &mut dyn PresentationSurface) {
        if !transition.entered() {
            return;
        }
        self.reveal(&transition.region, surface);
    }

    /// Reveal a region now, once.
    pub fn reveal(&mut self, region: &RegionId, surface: &mut dyn PresentationSurface) {
        if !self.revealed.insert(region.clone()) {
            return;
        }
        let delay = self.reveal_order as u64 * self.style.stagger_ms;
        self.reveal_order += 1;
        log::debug!("revealing region '{}' (delay {}ms)", region, delay);
        if delay > 0 {
            surface.apply(region, StyleMutation::AnimationDelay(delay));
        }
        surface.apply(region, StyleMutation::Opacity(1.0));
        surface.apply(region, StyleMutation::TranslateY(0.0));
    }

    /// Whether the region has already been revealed.
    pub fn is_revealed(&self, region: &RegionId) -> bool {
        self.revealed.contains(region)
    }

    /// Number of regions revealed so far.
    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vantage_traits::InMemorySurface;
    use vantage_types::VisibilityState;

    fn entered(id: &str) -> Transition {
        Transition {
            region: RegionId::new(id),
            from: VisibilityState::Hidden,
            to: VisibilityState::Visible,
            ratio: 0.4,
        }
    }

    #[test]
    fn test_prepare_then_reveal() {
        let mut surface = InMemorySurface::new();
        let mut trigger = RevealTrigger::new(RevealStyle::default());
        let card = RegionId::new("feature-card-1");

        trigger.prepare(&card, &mut surface);
        assert_eq!(surface.opacity_of(&card), Some(0.0));

        trigger.on_transition(&entered("feature-card-1"), &mut surface);
        let state = surface.state(&card).unwrap();
        assert_eq!(state.opacity, Some(1.0));
        assert_eq!(state.translate_y, Some(0.0));
    }

    #[test]
    fn test_reveal_is_irreversible_and_idempotent() {
        let mut surface = InMemorySurface::new();
        let mut trigger = RevealTrigger::new(RevealStyle::default());
        let card = RegionId::new("step-2");

        trigger.on_transition(&entered("step-2"), &mut surface);
        let writes_after_first = surface.log_for(&card).len();

        // A replayed entry transition must not touch the surface again.
        trigger.on_transition(&entered("step-2"), &mut surface);
        assert_eq!(surface.log_for(&card).len(), writes_after_first);
        assert!(trigger.is_revealed(&card));
        assert_eq!(trigger.revealed_count(), 1);
    }

    #[test]
    fn test_exit_transition_never_hides() {
        let mut surface = InMemorySurface::new();
        let mut trigger = RevealTrigger::new(RevealStyle::default());
        let card = RegionId::new("pricing-card-3");

        trigger.on_transition(&entered("pricing-card-3"), &mut surface);
        trigger.on_transition(
            &Transition {
                region: card.clone(),
                from: VisibilityState::Visible,
                to: VisibilityState::Hidden,
                ratio: 0.0,
            },
            &mut surface,
        );

        assert_eq!(surface.opacity_of(&card), Some(1.0));
    }

    #[test]
    fn test_stagger_delays_cascade() {
        let mut surface = InMemorySurface::new();
        let mut trigger = RevealTrigger::new(RevealStyle {
            offset_y: 30.0,
            stagger_ms: 100,
        });

        for id in ["card-a", "card-b", "card-c"] {
            trigger.on_transition(&entered(id), &mut surface);
        }

        // First reveal has no delay write; later ones cascade.
        assert_eq!(
            surface.state(&RegionId::new("card-a")).unwrap().animation_delay_ms,
            None
        );
        assert_eq!(
            surface.state(&RegionId::new("card-b")).unwrap().animation_delay_ms,
            Some(100)
        );
        assert_eq!(
            surface.state(&RegionId::new("card-c")).unwrap().animation_delay_ms,
            Some(200)
        );
    }
}
