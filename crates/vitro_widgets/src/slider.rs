//! Glass slider thumb
//!
//! A circular glass thumb riding a translucent two-layer track. The
//! embedder owns value semantics and gesture recognition; this widget
//! positions the thumb for a [0, 1] fraction and runs the press animations
//! while the thumb is grabbed.

use vitro_core::{Color, CornerRadius, Point, Rect, Size};
use vitro_surface::{
    GlassContext, GlassSurface, InteractionOutcome, InteractionState, TouchInteraction,
};

/// Thumb diameter in points
const THUMB_SIZE: f32 = 28.0;

/// Track height in points
const TRACK_HEIGHT: f32 = 4.0;

const TRACK_BACKGROUND_ALPHA: f32 = 0.1;
const TRACK_VALUE_ALPHA: f32 = 0.3;

/// Thumb face gradient: bright center falling off to the rim
const THUMB_GRADIENT_ALPHAS: [f32; 2] = [0.8, 0.3];

/// One translucent track bar
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackLayer {
    pub frame: Rect,
    pub color: Color,
    pub corner_radius: CornerRadius,
}

/// A slider thumb rendered as a circular glass surface
pub struct GlassSliderThumb {
    surface: GlassSurface,
    interaction: TouchInteraction,
    /// Full track rect in the embedder's coordinate space
    track_bounds: Rect,
    /// Thumb position along the track, 0.0 to 1.0
    fraction: f32,
}

impl GlassSliderThumb {
    pub fn new(ctx: &GlassContext) -> Self {
        let mut surface = ctx.create_surface(THUMB_SIZE / 2.0);
        let colors: Vec<Color> = THUMB_GRADIENT_ALPHAS
            .iter()
            .map(|&a| Color::WHITE.with_alpha(a))
            .collect();
        surface.set_gradient_colors(&colors);

        Self {
            surface,
            interaction: TouchInteraction::new(),
            track_bounds: Rect::ZERO,
            fraction: 0.0,
        }
    }

    /// The embedder's track bounds changed
    pub fn set_track_bounds(&mut self, bounds: Rect) {
        self.track_bounds = bounds;
        self.reposition();
    }

    /// Move the thumb to a fraction of the track, clamped to [0, 1]
    pub fn set_fraction(&mut self, fraction: f32) {
        self.fraction = fraction.clamp(0.0, 1.0);
        self.reposition();
    }

    pub fn fraction(&self) -> f32 {
        self.fraction
    }

    /// Background bar spanning the whole track
    pub fn background_track(&self) -> TrackLayer {
        TrackLayer {
            frame: self.track_rect(self.track_bounds.width()),
            color: Color::WHITE.with_alpha(TRACK_BACKGROUND_ALPHA),
            corner_radius: CornerRadius::uniform(TRACK_HEIGHT / 2.0),
        }
    }

    /// Filled bar up to the current fraction
    pub fn value_track(&self) -> TrackLayer {
        TrackLayer {
            frame: self.track_rect(self.track_bounds.width() * self.fraction),
            color: Color::WHITE.with_alpha(TRACK_VALUE_ALPHA),
            corner_radius: CornerRadius::uniform(TRACK_HEIGHT / 2.0),
        }
    }

    // =========================================================================
    // Gesture lifecycle for the thumb grab
    // =========================================================================

    pub fn grab_began(&mut self, at: Point) {
        self.interaction.gesture_began(&mut self.surface, at);
    }

    pub fn grab_ended(&mut self, inside: bool) -> Option<InteractionOutcome> {
        self.interaction.gesture_ended(&mut self.surface, inside)
    }

    pub fn grab_cancelled(&mut self) -> Option<InteractionOutcome> {
        self.interaction.gesture_cancelled(&mut self.surface)
    }

    /// Per-frame update; call after the context clock advances
    pub fn update(&mut self) {
        self.surface.sync();
        self.interaction.poll(&self.surface);
    }

    pub fn state(&self) -> InteractionState {
        self.interaction.state()
    }

    pub fn surface(&self) -> &GlassSurface {
        &self.surface
    }

    fn reposition(&mut self) {
        let center = Point::new(
            self.track_bounds.x() + self.track_bounds.width() * self.fraction,
            self.track_bounds.center().y,
        );
        self.surface
            .set_bounds(Rect::from_center(center, Size::new(THUMB_SIZE, THUMB_SIZE)));
    }

    fn track_rect(&self, width: f32) -> Rect {
        Rect::new(
            self.track_bounds.x(),
            self.track_bounds.center().y - TRACK_HEIGHT / 2.0,
            width,
            TRACK_HEIGHT,
        )
    }
}
