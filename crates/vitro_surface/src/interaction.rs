//! Touch interaction state machine
//!
//! Consumes the gesture lifecycle a host widget forwards (begin, end,
//! cancel) and drives the surface's highlight and transform animations.
//! Exactly one gesture is tracked per surface; gesture dispatch is assumed
//! to serialize touches upstream.
//!
//! Events that are not valid from the current state are ignored, never
//! errors: a stray `gesture_ended` with no prior begin is a no-op.

use tracing::debug;
use vitro_core::{Point, VitroError};

use crate::surface::GlassSurface;

/// Interaction states
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionState {
    #[default]
    Idle,
    /// A gesture is down; highlight visible, surface bounced up
    Pressed,
    /// Release bounce playing out
    Releasing,
    /// Cancel fade playing out
    Cancelled,
}

impl InteractionState {
    fn as_str(self) -> &'static str {
        match self {
            InteractionState::Idle => "Idle",
            InteractionState::Pressed => "Pressed",
            InteractionState::Releasing => "Releasing",
            InteractionState::Cancelled => "Cancelled",
        }
    }
}

/// Outcome reported to the embedding widget when a gesture resolves
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionOutcome {
    /// The gesture ended inside the surface: a confirmed press
    PressConfirmed,
    /// The gesture ended outside, failed, or was cancelled
    Cancelled,
}

/// Haptic feedback hook
///
/// `prepare` is called when a gesture begins so the actuator can spin up;
/// `impact` fires at the moment a confirmed release arrives, before any
/// animation work. Cancelled gestures produce no haptics.
pub trait HapticFeedback {
    fn prepare(&mut self) {}
    fn impact(&mut self) {}
}

/// No-op haptics for embedders without an actuator
#[derive(Clone, Copy, Debug, Default)]
pub struct NoHaptics;

impl HapticFeedback for NoHaptics {}

/// Touch-driven animation state machine for one glass surface
pub struct TouchInteraction {
    state: InteractionState,
    haptics: Box<dyn HapticFeedback + Send>,
}

impl TouchInteraction {
    pub fn new() -> Self {
        Self {
            state: InteractionState::Idle,
            haptics: Box::new(NoHaptics),
        }
    }

    pub fn with_haptics(haptics: Box<dyn HapticFeedback + Send>) -> Self {
        Self {
            state: InteractionState::Idle,
            haptics,
        }
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// A gesture touched down at `at` (surface-local)
    ///
    /// Valid from `Idle` and from the exit states: a press landing before a
    /// prior release or cancel animation finished takes over from the live
    /// interpolated state.
    pub fn gesture_began(&mut self, surface: &mut GlassSurface, at: Point) {
        match self.state {
            InteractionState::Idle
            | InteractionState::Releasing
            | InteractionState::Cancelled => {
                surface.show_highlight(at);
                self.haptics.prepare();
                self.state = InteractionState::Pressed;
                debug!(x = at.x, y = at.y, "gesture began");
            }
            InteractionState::Pressed => self.ignore("gesture_began"),
        }
    }

    /// The gesture lifted; `inside` reports whether it ended in bounds
    pub fn gesture_ended(
        &mut self,
        surface: &mut GlassSurface,
        inside: bool,
    ) -> Option<InteractionOutcome> {
        if self.state != InteractionState::Pressed {
            self.ignore("gesture_ended");
            return None;
        }

        if inside {
            // Haptic fires the moment the gesture ends, not when the
            // animation completes
            self.haptics.impact();
            surface.release_highlight();
            self.state = InteractionState::Releasing;
            debug!("gesture ended inside; press confirmed");
            Some(InteractionOutcome::PressConfirmed)
        } else {
            surface.cancel_highlight();
            self.state = InteractionState::Cancelled;
            debug!("gesture ended outside; cancelled");
            Some(InteractionOutcome::Cancelled)
        }
    }

    /// The platform cancelled or failed the gesture
    pub fn gesture_cancelled(&mut self, surface: &mut GlassSurface) -> Option<InteractionOutcome> {
        if self.state != InteractionState::Pressed {
            self.ignore("gesture_cancelled");
            return None;
        }

        surface.cancel_highlight();
        self.state = InteractionState::Cancelled;
        debug!("gesture cancelled");
        Some(InteractionOutcome::Cancelled)
    }

    /// Retire exit states once their animations settle
    ///
    /// Call once per frame after the surface `sync`.
    pub fn poll(&mut self, surface: &GlassSurface) {
        match self.state {
            InteractionState::Releasing => {
                if surface.scale_settled() && surface.highlight_settled() {
                    self.state = InteractionState::Idle;
                }
            }
            InteractionState::Cancelled => {
                if surface.highlight_settled() {
                    self.state = InteractionState::Idle;
                }
            }
            InteractionState::Idle | InteractionState::Pressed => {}
        }
    }

    /// Snap to `Idle` and reset the surface without exit animations
    ///
    /// For teardown, or when the embedder loses the gesture stream entirely.
    pub fn force_reset(&mut self, surface: &mut GlassSurface) {
        surface.force_reset();
        self.state = InteractionState::Idle;
        debug!("interaction force reset");
    }

    fn ignore(&self, event: &'static str) {
        debug!(
            "{}",
            VitroError::MisuseReentry {
                event,
                state: self.state.as_str(),
            }
        );
    }
}

impl Default for TouchInteraction {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ResourceCache;
    use crate::capability::RenderCaps;
    use crate::config::GlassConfig;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use vitro_animation::AnimationScheduler;
    use vitro_core::Rect;

    /// Records haptic calls for assertions
    #[derive(Clone, Default)]
    struct RecordingHaptics {
        log: Arc<Mutex<Vec<&'static str>>>,
    }

    impl HapticFeedback for RecordingHaptics {
        fn prepare(&mut self) {
            self.log.lock().unwrap().push("prepare");
        }

        fn impact(&mut self) {
            self.log.lock().unwrap().push("impact");
        }
    }

    fn fixture() -> (AnimationScheduler, GlassSurface) {
        let scheduler = AnimationScheduler::new();
        let cache = Arc::new(ResourceCache::new());
        let mut surface = GlassSurface::new(
            cache,
            scheduler.handle(),
            RenderCaps::default(),
            GlassConfig::default(),
            12.0,
        );
        surface.set_bounds(Rect::new(0.0, 0.0, 100.0, 40.0));
        (scheduler, surface)
    }

    fn settle(
        scheduler: &AnimationScheduler,
        surface: &mut GlassSurface,
        interaction: &mut TouchInteraction,
        ms: u64,
    ) {
        scheduler.advance(Duration::from_millis(ms));
        surface.sync();
        interaction.poll(surface);
    }

    #[test]
    fn test_confirmed_press_cycle() {
        let (scheduler, mut surface) = fixture();
        let haptics = RecordingHaptics::default();
        let log = Arc::clone(&haptics.log);
        let mut interaction = TouchInteraction::with_haptics(Box::new(haptics));

        interaction.gesture_began(&mut surface, Point::new(10.0, 10.0));
        assert_eq!(interaction.state(), InteractionState::Pressed);
        assert_eq!(*log.lock().unwrap(), vec!["prepare"]);

        settle(&scheduler, &mut surface, &mut interaction, 120);

        let outcome = interaction.gesture_ended(&mut surface, true);
        assert_eq!(outcome, Some(InteractionOutcome::PressConfirmed));
        assert_eq!(interaction.state(), InteractionState::Releasing);
        // Impact fired at the release instant, before the animation settles
        assert_eq!(*log.lock().unwrap(), vec!["prepare", "impact"]);

        settle(&scheduler, &mut surface, &mut interaction, 200);

        assert_eq!(interaction.state(), InteractionState::Idle);
        assert_eq!(surface.scale(), 1.0);
        assert_eq!(surface.highlight_opacity(), 0.0);
    }

    #[test]
    fn test_cancelled_gesture_has_no_haptics() {
        let (scheduler, mut surface) = fixture();
        let haptics = RecordingHaptics::default();
        let log = Arc::clone(&haptics.log);
        let mut interaction = TouchInteraction::with_haptics(Box::new(haptics));

        interaction.gesture_began(&mut surface, Point::new(10.0, 10.0));
        settle(&scheduler, &mut surface, &mut interaction, 50);

        let outcome = interaction.gesture_cancelled(&mut surface);
        assert_eq!(outcome, Some(InteractionOutcome::Cancelled));
        assert_eq!(surface.scale(), 1.0);
        assert_eq!(*log.lock().unwrap(), vec!["prepare"]);

        settle(&scheduler, &mut surface, &mut interaction, 100);
        assert_eq!(interaction.state(), InteractionState::Idle);
    }

    #[test]
    fn test_release_outside_cancels() {
        let (scheduler, mut surface) = fixture();
        let mut interaction = TouchInteraction::new();

        interaction.gesture_began(&mut surface, Point::new(10.0, 10.0));
        settle(&scheduler, &mut surface, &mut interaction, 120);

        let outcome = interaction.gesture_ended(&mut surface, false);
        assert_eq!(outcome, Some(InteractionOutcome::Cancelled));
        assert_eq!(interaction.state(), InteractionState::Cancelled);
        assert_eq!(surface.scale(), 1.0);
    }

    #[test]
    fn test_stray_events_are_ignored() {
        let (_scheduler, mut surface) = fixture();
        let mut interaction = TouchInteraction::new();

        assert_eq!(interaction.gesture_ended(&mut surface, true), None);
        assert_eq!(interaction.gesture_cancelled(&mut surface), None);
        assert_eq!(interaction.state(), InteractionState::Idle);

        interaction.gesture_began(&mut surface, Point::new(1.0, 1.0));
        // A second begin while pressed is undefined upstream; ignored here
        interaction.gesture_began(&mut surface, Point::new(2.0, 2.0));
        assert_eq!(interaction.state(), InteractionState::Pressed);
    }

    #[test]
    fn test_press_before_release_settles() {
        let (scheduler, mut surface) = fixture();
        let mut interaction = TouchInteraction::new();

        interaction.gesture_began(&mut surface, Point::new(10.0, 10.0));
        settle(&scheduler, &mut surface, &mut interaction, 120);
        interaction.gesture_ended(&mut surface, true);
        settle(&scheduler, &mut surface, &mut interaction, 40);

        // Release still in flight; a new press takes over
        assert_eq!(interaction.state(), InteractionState::Releasing);
        interaction.gesture_began(&mut surface, Point::new(20.0, 20.0));
        assert_eq!(interaction.state(), InteractionState::Pressed);

        settle(&scheduler, &mut surface, &mut interaction, 200);
        assert_eq!(interaction.state(), InteractionState::Pressed);
        assert_eq!(surface.scale(), 1.05);
    }

    #[test]
    fn test_force_reset_from_any_state() {
        let (scheduler, mut surface) = fixture();
        let mut interaction = TouchInteraction::new();

        interaction.gesture_began(&mut surface, Point::new(10.0, 10.0));
        settle(&scheduler, &mut surface, &mut interaction, 30);

        interaction.force_reset(&mut surface);
        assert_eq!(interaction.state(), InteractionState::Idle);
        assert_eq!(surface.scale(), 1.0);
        assert_eq!(surface.highlight_opacity(), 0.0);
        assert!(!surface.is_animating());
    }
}
