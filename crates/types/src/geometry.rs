use serde::{Deserialize, Serialize};

/// A rectangle in document coordinates. `y` grows downward from the top
/// of the document, matching how a presentation host reports measured
/// element bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// A rectangle spanning the full document width at the given
    /// vertical band. Section bounds are vertical bands in practice.
    pub fn band(top: f32, height: f32) -> Self {
        Self {
            x: 0.0,
            y: top,
            width: f32::INFINITY,
            height,
        }
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// The currently visible window of the document: a scroll offset from
/// the document top and the window height. Produced by the host and
/// read-only to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub scroll_offset: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(scroll_offset: f32, height: f32) -> Self {
        Self {
            scroll_offset,
            height,
        }
    }

    pub fn top(&self) -> f32 {
        self.scroll_offset
    }

    pub fn bottom(&self) -> f32 {
        self.scroll_offset + self.height
    }

    /// Vertical overlap between this viewport and a rectangle, in
    /// document pixels. Zero when they do not intersect.
    pub fn overlap(&self, rect: &Rect) -> f32 {
        let overlap = self.bottom().min(rect.bottom()) - self.top().max(rect.top());
        overlap.max(0.0)
    }

    /// Fraction of the rectangle's height currently inside the viewport,
    /// in [0, 1]. Returns `None` for zero- or negative-height rectangles,
    /// for which the ratio is undefined.
    pub fn overlap_ratio(&self, rect: &Rect) -> Option<f32> {
        if rect.height <= 0.0 {
            return None;
        }
        Some((self.overlap(rect) / rect.height).min(1.0))
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            scroll_offset: 0.0,
            height: 720.0,
        }
    }
}
