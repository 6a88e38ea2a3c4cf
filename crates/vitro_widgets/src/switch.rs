//! Glass switch thumb
//!
//! Retrofits a glass face onto an existing switch control. The host exposes
//! its thumb geometry through the [`ThumbHost`] capability trait; there is
//! no introspection of the host's internals.

use vitro_core::{Color, Point, Rect};
use vitro_surface::{GlassContext, GlassSurface};

/// Thumb face gradient: bright top-left falling to the bottom-right
const THUMB_GRADIENT_ALPHAS: [f32; 2] = [0.8, 0.3];

/// Tint the host should apply to its on-state track
const TRACK_TINT_ALPHA: f32 = 0.2;

/// Capability a switch control exposes so its thumb can be reskinned
pub trait ThumbHost {
    /// Current thumb frame in the host's coordinate space
    fn thumb_frame(&self) -> Rect;
}

/// A glass face attached over a host switch's thumb
pub struct GlassSwitchThumb {
    surface: GlassSurface,
}

impl GlassSwitchThumb {
    /// Attach to a host, taking the thumb's current geometry
    pub fn attach(ctx: &GlassContext, host: &dyn ThumbHost) -> Self {
        let frame = host.thumb_frame();
        let mut surface = ctx.create_surface(frame.height() / 2.0);
        surface.set_bounds(frame);

        let colors: Vec<Color> = THUMB_GRADIENT_ALPHAS
            .iter()
            .map(|&a| Color::WHITE.with_alpha(a))
            .collect();
        surface.set_gradient_colors(&colors);
        surface.set_tint_axis(Point::new(0.0, 0.0), Point::new(1.0, 1.0));

        Self { surface }
    }

    /// Re-read the host's thumb geometry after it moves or relayouts
    pub fn sync_to_host(&mut self, host: &dyn ThumbHost) {
        let frame = host.thumb_frame();
        self.surface.set_bounds(frame);
        self.surface.set_corner_radius(frame.height() / 2.0);
    }

    /// Per-frame update; call after the context clock advances
    pub fn update(&mut self) {
        self.surface.sync();
    }

    pub fn surface(&self) -> &GlassSurface {
        &self.surface
    }

    /// Translucent tint for the host's on-state track
    pub fn track_tint() -> Color {
        Color::WHITE.with_alpha(TRACK_TINT_ALPHA)
    }
}
