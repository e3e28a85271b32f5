//! Floating background particles for the hero section.

use rand::Rng;
use vantage_traits::{PresentationSurface, SpawnSpec};
use vantage_types::RegionId;

/// Number of particles spawned per batch.
pub const PARTICLE_COUNT: usize = 5;

/// Spawn a batch of randomized floating particles under the hero
/// region. Particles live until the page is torn down; there is no
/// scheduled cleanup.
pub fn spawn_particles(surface: &mut dyn PresentationSurface, hero: &RegionId) -> Vec<RegionId> {
    let mut rng = rand::rng();
    (0..PARTICLE_COUNT)
        .map(|_| {
            surface.spawn(
                hero,
                SpawnSpec::Particle {
                    diameter: rng.random_range(50.0..150.0),
                    left_pct: rng.random_range(0.0..100.0),
                    top_pct: rng.random_range(0.0..100.0),
                    opacity: rng.random_range(0.0..0.1),
                    period_s: rng.random_range(4.0..8.0),
                },
            )
        })
        .collect()
}
