//! Glass button
//!
//! A pressable widget backed by one glass surface. The embedder forwards
//! its bounds and the platform gesture lifecycle; the button reports the
//! resolved outcome and fires its press handler on a confirmed press.

use tracing::debug;
use vitro_core::{Color, Point, Rect, Size};
use vitro_surface::{
    GlassContext, GlassSurface, HapticFeedback, InteractionOutcome, InteractionState,
    TouchInteraction,
};

/// Default corner radius for glass buttons
const DEFAULT_CORNER_RADIUS: f32 = 12.0;

/// Hold-stretch factors for press-and-hold buttons (recording style):
/// wider and slightly flattened while held
const HOLD_STRETCH_X: f32 = 1.2;
const HOLD_STRETCH_Y: f32 = 0.9;

/// Durations for entering and leaving the hold stretch, in milliseconds
const HOLD_STRETCH_MS: u32 = 200;
const HOLD_RESTORE_MS: u32 = 300;

type PressHandler = Box<dyn Fn() + Send + Sync>;

/// A button rendered as a glass surface
pub struct GlassButton {
    surface: GlassSurface,
    interaction: TouchInteraction,
    /// Bounds reported by the embedder; the rest size the hold stretch
    /// restores to
    host_bounds: Rect,
    on_press: Option<PressHandler>,
}

impl GlassButton {
    pub fn new(ctx: &GlassContext) -> Self {
        Self {
            surface: ctx.create_surface(DEFAULT_CORNER_RADIUS),
            interaction: TouchInteraction::new(),
            host_bounds: Rect::ZERO,
            on_press: None,
        }
    }

    /// Set the corner radius (builder pattern)
    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.surface.set_corner_radius(radius);
        self
    }

    /// Tint the glass gradient (builder pattern)
    pub fn tint(mut self, color: Color) -> Self {
        self.surface.set_tint_color(color);
        self
    }

    /// Use a real haptic actuator (builder pattern)
    pub fn haptics(mut self, haptics: Box<dyn HapticFeedback + Send>) -> Self {
        self.interaction = TouchInteraction::with_haptics(haptics);
        self
    }

    /// Handler fired on a confirmed press (builder pattern)
    pub fn on_press<F>(mut self, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_press = Some(Box::new(handler));
        self
    }

    /// The embedder's bounds changed
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.host_bounds = bounds;
        self.surface.set_bounds(bounds);
    }

    // =========================================================================
    // Gesture lifecycle (forwarded verbatim by the embedder)
    // =========================================================================

    pub fn press_began(&mut self, at: Point) {
        self.interaction.gesture_began(&mut self.surface, at);
    }

    pub fn press_ended(&mut self, inside: bool) -> Option<InteractionOutcome> {
        let outcome = self.interaction.gesture_ended(&mut self.surface, inside);
        if outcome == Some(InteractionOutcome::PressConfirmed) {
            if let Some(handler) = &self.on_press {
                handler();
            }
        }
        outcome
    }

    pub fn press_cancelled(&mut self) -> Option<InteractionOutcome> {
        self.interaction.gesture_cancelled(&mut self.surface)
    }

    // =========================================================================
    // Hold stretch (press-and-hold recording style)
    // =========================================================================

    /// Stretch wider and flatter while held down
    pub fn begin_hold_stretch(&mut self) {
        let size = self.host_bounds.size();
        let stretched = Size::new(size.width * HOLD_STRETCH_X, size.height * HOLD_STRETCH_Y);
        self.surface.apply_stretch(stretched, HOLD_STRETCH_MS);
        debug!(?stretched, "hold stretch began");
    }

    /// Restore the embedder's bounds when the hold ends
    pub fn end_hold_stretch(&mut self) {
        self.surface
            .apply_stretch(self.host_bounds.size(), HOLD_RESTORE_MS);
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;
    use std::time::Duration;
    use vitro_surface::RenderCaps;

    fn run(ctx: &GlassContext, button: &mut GlassButton, frames: usize) {
        for _ in 0..frames {
            ctx.advance(Duration::from_millis(16));
            button.update();
        }
    }

    #[test]
    fn test_confirmed_press_fires_handler() {
        let ctx = GlassContext::new(RenderCaps::default());
        let presses = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&presses);

        let mut button = GlassButton::new(&ctx).on_press(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        button.set_bounds(Rect::new(0.0, 0.0, 120.0, 44.0));

        button.press_began(Point::new(20.0, 20.0));
        run(&ctx, &mut button, 8);
        let outcome = button.press_ended(true);

        assert_eq!(outcome, Some(InteractionOutcome::PressConfirmed));
        assert_eq!(presses.load(Ordering::SeqCst), 1);

        run(&ctx, &mut button, 20);
        assert_eq!(button.state(), InteractionState::Idle);
        assert_eq!(button.surface().scale(), 1.0);
    }

    #[test]
    fn test_cancel_does_not_fire_handler() {
        let ctx = GlassContext::new(RenderCaps::default());
        let presses = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&presses);

        let mut button = GlassButton::new(&ctx).on_press(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        button.set_bounds(Rect::new(0.0, 0.0, 120.0, 44.0));

        button.press_began(Point::new(20.0, 20.0));
        run(&ctx, &mut button, 4);
        button.press_cancelled();
        run(&ctx, &mut button, 10);

        assert_eq!(presses.load(Ordering::SeqCst), 0);
        assert_eq!(button.state(), InteractionState::Idle);
        assert_eq!(button.surface().scale(), 1.0);
    }

    #[test]
    fn test_hold_stretch_round_trip() {
        let ctx = GlassContext::new(RenderCaps::default());
        let mut button = GlassButton::new(&ctx);
        button.set_bounds(Rect::new(0.0, 0.0, 100.0, 40.0));

        button.begin_hold_stretch();
        run(&ctx, &mut button, 20);
        assert_eq!(button.surface().bounds().size(), Size::new(120.0, 36.0));

        button.end_hold_stretch();
        run(&ctx, &mut button, 25);
        assert_eq!(button.surface().bounds().size(), Size::new(100.0, 40.0));
    }

    #[test]
    fn test_tint_builder_applies_gradient() {
        let ctx = GlassContext::new(RenderCaps::default());
        let button = GlassButton::new(&ctx).tint(Color::BLUE);
        let stops = &button.surface().tint_resource().unwrap().stops;
        assert_eq!(stops.len(), 3);
        assert_eq!(stops[0].color.b, 1.0);
        assert_eq!(stops[0].color.a, 0.2);
    }
}
