//! Scroll parallax for hero backdrop elements.

use vantage_traits::{PresentationSurface, StyleMutation};
use vantage_types::RegionId;

/// Parallax elements move at half the scroll speed.
pub const FACTOR: f32 = 0.5;

/// Apply the parallax translation for the current scroll offset. Called
/// directly from the scroll handler; this is not a scheduled effect.
pub fn apply_parallax(
    surface: &mut dyn PresentationSurface,
    regions: &[RegionId],
    scroll_offset: f32,
) {
    let offset = scroll_offset * FACTOR;
    for region in regions {
        surface.apply(region, StyleMutation::TranslateY(offset));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vantage_traits::InMemorySurface;

    #[test]
    fn test_parallax_translates_at_half_speed() {
        let mut surface = InMemorySurface::new();
        let backdrop = RegionId::new("hero-gradient");

        apply_parallax(&mut surface, &[backdrop.clone()], 340.0);
        assert_eq!(surface.state(&backdrop).unwrap().translate_y, Some(170.0));

        apply_parallax(&mut surface, &[backdrop.clone()], 0.0);
        assert_eq!(surface.state(&backdrop).unwrap().translate_y, Some(0.0));
    }
}
