//! Pointer-driven card tilt and proximity glow.
//!
//! Both effects are direct surface mutations driven by pointer
//! position; nothing here is scheduled. Regions the measurer cannot
//! measure are skipped for the current move and picked up again once
//! they measure.

use vantage_traits::{PresentationSurface, RegionMeasurer, StyleMutation};
use vantage_types::{Rect, RegionId};

/// Divisor mapping pointer distance from the card center to degrees.
pub const TILT_DIVISOR: f32 = 10.0;
/// Pointer distance within which a glow region lights up, in pixels.
pub const GLOW_RADIUS: f32 = 200.0;

/// Applies tilt while the pointer is over a card and glow while it is
/// near one, and clears both when the pointer moves away.
#[derive(Debug, Default)]
pub struct PointerEffects {
    tilt: Vec<RegionId>,
    glow: Vec<RegionId>,
    tilted: Vec<RegionId>,
    glowing: Vec<RegionId>,
}

impl PointerEffects {
    pub fn new(tilt: Vec<RegionId>, glow: Vec<RegionId>) -> Self {
        Self {
            tilt,
            glow,
            tilted: Vec::new(),
            glowing: Vec::new(),
        }
    }

    pub fn on_move(
        &mut self,
        x: f32,
        y: f32,
        measurer: &dyn RegionMeasurer,
        surface: &mut dyn PresentationSurface,
    ) {
        for region in &self.tilt {
            let Some(bounds) = measurer.measure(region) else {
                continue;
            };
            if contains(&bounds, x, y) {
                let (cx, cy) = center(&bounds);
                surface.apply(
                    region,
                    StyleMutation::Tilt {
                        rotate_x: (y - cy) / TILT_DIVISOR,
                        rotate_y: (cx - x) / TILT_DIVISOR,
                    },
                );
                if !self.tilted.contains(region) {
                    self.tilted.push(region.clone());
                }
            } else if let Some(pos) = self.tilted.iter().position(|r| r == region) {
                self.tilted.swap_remove(pos);
                surface.apply(
                    region,
                    StyleMutation::Tilt {
                        rotate_x: 0.0,
                        rotate_y: 0.0,
                    },
                );
            }
        }

        for region in &self.glow {
            let Some(bounds) = measurer.measure(region) else {
                continue;
            };
            let (cx, cy) = center(&bounds);
            let distance = ((x - cx).powi(2) + (y - cy).powi(2)).sqrt();
            if distance < GLOW_RADIUS {
                let strength = 1.0 - distance / GLOW_RADIUS;
                surface.apply(region, StyleMutation::Glow(Some(strength)));
                if !self.glowing.contains(region) {
                    self.glowing.push(region.clone());
                }
            } else if let Some(pos) = self.glowing.iter().position(|r| r == region) {
                self.glowing.swap_remove(pos);
                surface.apply(region, StyleMutation::Glow(None));
            }
        }
    }

    /// Reset every active tilt and glow (pointer left the page).
    pub fn on_leave(&mut self, surface: &mut dyn PresentationSurface) {
        for region in self.tilted.drain(..) {
            surface.apply(
                &region,
                StyleMutation::Tilt {
                    rotate_x: 0.0,
                    rotate_y: 0.0,
                },
            );
        }
        for region in self.glowing.drain(..) {
            surface.apply(&region, StyleMutation::Glow(None));
        }
    }
}

fn contains(bounds: &Rect, x: f32, y: f32) -> bool {
    x >= bounds.x && x <= bounds.x + bounds.width && y >= bounds.top() && y <= bounds.bottom()
}

fn center(bounds: &Rect) -> (f32, f32) {
    (bounds.x + bounds.width / 2.0, bounds.top() + bounds.height / 2.0)
}
