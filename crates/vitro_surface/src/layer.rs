//! Surface layers
//!
//! A glass surface composites three layers in fixed order: backdrop blur,
//! tint gradient, interaction highlight. Layers are plain geometry + paint
//! state; the surface keeps their frames and rounding locked to its own
//! bounds, and a renderer consumes them as-is.

use vitro_core::{CornerCurve, CornerRadius, Point, Rect};

/// One layer in the glass stack
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceLayer {
    /// Frame in the surface's coordinate space
    pub frame: Rect,
    pub corner_radius: CornerRadius,
    pub corner_curve: CornerCurve,
    /// Layer opacity (0.0 to 1.0)
    pub opacity: f32,
    /// Hidden layers are skipped by the renderer entirely
    pub visible: bool,
}

impl SurfaceLayer {
    pub fn new() -> Self {
        Self {
            frame: Rect::ZERO,
            corner_radius: CornerRadius::ZERO,
            corner_curve: CornerCurve::default(),
            opacity: 1.0,
            visible: true,
        }
    }

    /// Match frame and rounding to the owning surface
    pub fn sync_geometry(&mut self, frame: Rect, radius: CornerRadius, curve: CornerCurve) {
        self.frame = frame;
        self.corner_radius = radius;
        self.corner_curve = curve;
    }
}

impl Default for SurfaceLayer {
    fn default() -> Self {
        Self::new()
    }
}

/// Circular press-highlight spot
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HighlightSpot {
    pub center: Point,
    pub radius: f32,
}

impl HighlightSpot {
    /// Bounding rect of the spot, for clip computation
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.radius * 2.0,
            self.radius * 2.0,
        )
    }
}

/// The interaction-highlight layer: base layer state plus an optional spot
///
/// The spot is placed where the gesture landed; the layer's frame and
/// rounding still clip it to the surface shape.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HighlightLayer {
    pub layer: SurfaceLayer,
    pub spot: Option<HighlightSpot>,
}

impl Default for HighlightLayer {
    fn default() -> Self {
        Self::new()
    }
}

impl HighlightLayer {
    pub fn new() -> Self {
        Self {
            layer: SurfaceLayer {
                opacity: 0.0,
                ..SurfaceLayer::new()
            },
            spot: None,
        }
    }

    pub fn show_spot(&mut self, center: Point, radius: f32) {
        self.spot = Some(HighlightSpot { center, radius });
    }

    pub fn clear_spot(&mut self) {
        self.spot = None;
    }
}
