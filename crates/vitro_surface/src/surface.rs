//! Glass surface compositor
//!
//! `GlassSurface` owns the blur → tint → highlight layer stack, keeps every
//! layer's geometry locked to its own bounds, and runs the touch-driven
//! animations (press highlight, release bounce, cancel fade, stretch
//! resize) as explicit scheduler tracks.
//!
//! The surface is single-threaded by design: all mutation happens on the
//! rendering thread, and the host drives one `sync()` per frame after
//! advancing the scheduler. Starting an animation on a property that already
//! has one in flight replaces the track and continues from the live
//! interpolated value; animations never stack.

use std::sync::Arc;
use tracing::trace;
use vitro_animation::{
    Easing, FloatTrackId, KeyframeTrack, SchedulerHandle, SizeTrackId, SpringResponse,
};
use vitro_core::{Color, CornerCurve, CornerRadius, Point, Rect, Size};

use crate::cache::{BlurResource, GradientResource, GradientSpec, ResourceCache};
use crate::capability::RenderCaps;
use crate::config::GlassConfig;
use crate::layer::{HighlightLayer, SurfaceLayer};

/// Alpha fractions applied to a tint color for the three gradient stops
const TINT_ALPHAS: [f32; 3] = [0.2, 0.05, 0.1];

/// Default (untinted) glass gradient: white fading down the surface
const DEFAULT_GLASS_ALPHAS: [f32; 3] = [0.25, 0.1, 0.05];

/// A composited glass surface: blur, tint gradient, and press highlight
/// layers with synchronized geometry
pub struct GlassSurface {
    config: GlassConfig,
    corner_curve: CornerCurve,

    bounds: Rect,
    corner_radius: CornerRadius,
    /// Current visual scale factor, identity at rest
    scale: f32,
    blur_enabled: bool,

    blur_layer: SurfaceLayer,
    tint_layer: SurfaceLayer,
    highlight: HighlightLayer,

    /// Gradient axis in unit coordinates (start, end)
    tint_axis: (Point, Point),

    blur_resource: Arc<BlurResource>,
    tint_resource: Option<Arc<GradientResource>>,

    cache: Arc<ResourceCache>,
    scheduler: SchedulerHandle,

    scale_track: Option<FloatTrackId>,
    highlight_track: Option<FloatTrackId>,
    stretch_track: Option<SizeTrackId>,
}

impl GlassSurface {
    pub fn new(
        cache: Arc<ResourceCache>,
        scheduler: SchedulerHandle,
        caps: RenderCaps,
        config: GlassConfig,
        corner_radius: impl Into<CornerRadius>,
    ) -> Self {
        let blur_resource = cache.blur(config.material);
        let default_stops: Vec<Color> = DEFAULT_GLASS_ALPHAS
            .iter()
            .map(|&a| Color::WHITE.with_alpha(a))
            .collect();
        let tint_resource = cache.gradient(&GradientSpec::from_colors(&default_stops));

        let mut surface = Self {
            config,
            corner_curve: caps.corner_curve(),
            bounds: Rect::ZERO,
            corner_radius: corner_radius.into(),
            scale: 1.0,
            blur_enabled: true,
            blur_layer: SurfaceLayer::new(),
            tint_layer: SurfaceLayer::new(),
            highlight: HighlightLayer::new(),
            tint_axis: (Point::new(0.5, 0.0), Point::new(0.5, 1.0)),
            blur_resource,
            tint_resource,
            cache,
            scheduler,
            scale_track: None,
            highlight_track: None,
            stretch_track: None,
        };
        surface.sync_geometry();
        surface
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Resize the surface; all three layers follow synchronously
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.sync_geometry();
    }

    /// Propagate a corner radius to the surface and every layer atomically
    pub fn set_corner_radius(&mut self, radius: impl Into<CornerRadius>) {
        self.corner_radius = radius.into();
        self.sync_geometry();
    }

    /// Toggle the blur layer's visibility; other layers are unaffected
    pub fn set_blur_enabled(&mut self, enabled: bool) {
        self.blur_enabled = enabled;
        self.blur_layer.visible = enabled;
    }

    /// Set the gradient axis in unit coordinates
    pub fn set_tint_axis(&mut self, start: Point, end: Point) {
        self.tint_axis = (start, end);
    }

    /// Recompute the tint gradient as alpha fractions of the given color
    pub fn set_tint_color(&mut self, color: Color) {
        let stops: Vec<Color> = TINT_ALPHAS.iter().map(|&a| color.with_alpha(a)).collect();
        self.set_gradient_colors(&stops);
    }

    /// Replace the tint gradient with an explicit color sequence
    ///
    /// Stops are spaced evenly and resolved through the cache. Fewer than
    /// two colors leaves the current gradient in place.
    pub fn set_gradient_colors(&mut self, colors: &[Color]) {
        if let Some(resource) = self.cache.gradient(&GradientSpec::from_colors(colors)) {
            self.tint_resource = Some(resource);
        }
    }

    /// Re-request blur and gradient resources from the cache
    ///
    /// Only needed when the embedder wants to drop references into a cleared
    /// cache; held resources stay valid without this.
    pub fn refresh_resources(&mut self) {
        self.blur_resource = self.cache.blur(self.config.material);
        if let Some(resource) = &self.tint_resource {
            let colors: Vec<Color> = resource.stops.iter().map(|s| s.color).collect();
            self.tint_resource = self.cache.gradient(&GradientSpec::from_colors(&colors));
        }
    }

    // =========================================================================
    // Animations
    // =========================================================================

    /// Animate the surface's size to `target` with an ease-in-out curve
    ///
    /// The blur layer follows in lockstep through the per-frame geometry
    /// sync. Re-entrant: a stretch started mid-flight continues from the
    /// live interpolated size, not the original one.
    pub fn apply_stretch(&mut self, target: Size, duration_ms: u32) {
        let current = self.current_size();
        self.replace_stretch_track(
            KeyframeTrack::from_to(duration_ms, current, target, Easing::EaseInOut).started(),
        );
        trace!(?target, duration_ms, "stretch started");
    }

    /// Show the circular press highlight at a gesture point
    ///
    /// Fades the highlight in and concurrently bounces the surface scale up.
    pub fn show_highlight(&mut self, at: Point) {
        self.show_highlight_with_radius(at, self.config.highlight_radius);
    }

    pub fn show_highlight_with_radius(&mut self, at: Point, radius: f32) {
        self.highlight.show_spot(at, radius);

        let opacity = self.highlight.layer.opacity;
        self.replace_highlight_track(
            KeyframeTrack::from_to(
                self.config.highlight_fade_ms(),
                opacity,
                self.config.highlight_opacity,
                Easing::EaseOut,
            )
            .started(),
        );

        let scale = self.scale;
        self.replace_scale_track(
            KeyframeTrack::from_to(
                self.config.press_scale_ms(),
                scale,
                self.config.bounce_scale,
                Easing::EaseOut,
            )
            .started(),
        );
        trace!(x = at.x, y = at.y, "highlight shown");
    }

    /// Play the release bounce and fade the highlight out
    ///
    /// The scale runs a three-keyframe sequence (bounce, dip, identity) with
    /// a damped-spring settle into 1.0; the terminal scale is exactly 1.0.
    pub fn release_highlight(&mut self) {
        let scale = self.scale;
        self.replace_scale_track(
            KeyframeTrack::new(self.config.release_bounce_ms())
                .keyframe(0.0, scale, Easing::Linear)
                .keyframe(0.5, self.config.release_dip_scale, Easing::EaseInOut)
                .keyframe(1.0, 1.0, SpringResponse::new(0.4, 0.5))
                .started(),
        );

        let opacity = self.highlight.layer.opacity;
        self.replace_highlight_track(
            KeyframeTrack::from_to(self.config.highlight_fade_ms(), opacity, 0.0, Easing::EaseIn)
                .started(),
        );
        trace!("release bounce started");
    }

    /// Fade the highlight out and reset the scale directly, with no bounce
    pub fn cancel_highlight(&mut self) {
        let opacity = self.highlight.layer.opacity;
        self.replace_highlight_track(
            KeyframeTrack::from_to(self.config.highlight_fade_ms(), opacity, 0.0, Easing::EaseIn)
                .started(),
        );

        if let Some(id) = self.scale_track.take() {
            self.scheduler.remove_float(id);
        }
        self.scale = 1.0;
        trace!("highlight cancelled");
    }

    /// Snap to the rest state without playing exit animations
    pub fn force_reset(&mut self) {
        if let Some(id) = self.scale_track.take() {
            self.scheduler.remove_float(id);
        }
        if let Some(id) = self.highlight_track.take() {
            self.scheduler.remove_float(id);
        }
        if let Some(id) = self.stretch_track.take() {
            self.scheduler.remove_size(id);
        }
        self.scale = 1.0;
        self.highlight.layer.opacity = 0.0;
        self.highlight.clear_spot();
        self.sync_geometry();
    }

    // =========================================================================
    // Frame update
    // =========================================================================

    /// Apply live animation values and re-establish the layer invariant
    ///
    /// Call once per frame after the scheduler has advanced. Completed
    /// tracks snap their property to the exact terminal value and are
    /// dropped, leaving no residual interpolation state.
    pub fn sync(&mut self) {
        if let Some(id) = self.stretch_track {
            if let Some(size) = self.scheduler.size_value(id) {
                self.bounds.size = size;
            }
            if !self.scheduler.is_size_playing(id) {
                if let Some(end) = self.scheduler.size_end_value(id) {
                    self.bounds.size = end;
                }
                self.scheduler.remove_size(id);
                self.stretch_track = None;
            }
        }

        if let Some(id) = self.scale_track {
            if let Some(scale) = self.scheduler.float_value(id) {
                self.scale = scale;
            }
            if !self.scheduler.is_float_playing(id) {
                if let Some(end) = self.scheduler.float_end_value(id) {
                    self.scale = end;
                }
                self.scheduler.remove_float(id);
                self.scale_track = None;
            }
        }

        if let Some(id) = self.highlight_track {
            if let Some(opacity) = self.scheduler.float_value(id) {
                self.highlight.layer.opacity = opacity;
            }
            if !self.scheduler.is_float_playing(id) {
                if let Some(end) = self.scheduler.float_end_value(id) {
                    self.highlight.layer.opacity = end;
                }
                self.scheduler.remove_float(id);
                self.highlight_track = None;
                if self.highlight.layer.opacity == 0.0 {
                    self.highlight.clear_spot();
                }
            }
        }

        self.sync_geometry();
    }

    /// Whether any of the surface's animations is still in flight
    pub fn is_animating(&self) -> bool {
        self.scale_track
            .map(|id| self.scheduler.is_float_playing(id))
            .unwrap_or(false)
            || self
                .highlight_track
                .map(|id| self.scheduler.is_float_playing(id))
                .unwrap_or(false)
            || self
                .stretch_track
                .map(|id| self.scheduler.is_size_playing(id))
                .unwrap_or(false)
    }

    /// Whether the scale has no in-flight animation
    pub fn scale_settled(&self) -> bool {
        self.scale_track.is_none()
    }

    /// Whether the highlight opacity has no in-flight animation
    pub fn highlight_settled(&self) -> bool {
        self.highlight_track.is_none()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn corner_radius(&self) -> CornerRadius {
        self.corner_radius
    }

    pub fn corner_curve(&self) -> CornerCurve {
        self.corner_curve
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn is_blur_enabled(&self) -> bool {
        self.blur_enabled
    }

    pub fn highlight_opacity(&self) -> f32 {
        self.highlight.layer.opacity
    }

    pub fn blur_layer(&self) -> &SurfaceLayer {
        &self.blur_layer
    }

    pub fn tint_layer(&self) -> &SurfaceLayer {
        &self.tint_layer
    }

    pub fn highlight_layer(&self) -> &HighlightLayer {
        &self.highlight
    }

    pub fn blur_resource(&self) -> &Arc<BlurResource> {
        &self.blur_resource
    }

    pub fn tint_resource(&self) -> Option<&Arc<GradientResource>> {
        self.tint_resource.as_ref()
    }

    pub fn tint_axis(&self) -> (Point, Point) {
        self.tint_axis
    }

    pub fn config(&self) -> &GlassConfig {
        &self.config
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn current_size(&self) -> Size {
        self.stretch_track
            .and_then(|id| self.scheduler.size_value(id))
            .unwrap_or(self.bounds.size)
    }

    fn replace_scale_track(&mut self, track: KeyframeTrack<f32>) {
        if let Some(id) = self.scale_track.take() {
            self.scheduler.remove_float(id);
        }
        self.scale_track = self.scheduler.register_float(track);
    }

    fn replace_highlight_track(&mut self, track: KeyframeTrack<f32>) {
        if let Some(id) = self.highlight_track.take() {
            self.scheduler.remove_float(id);
        }
        self.highlight_track = self.scheduler.register_float(track);
    }

    fn replace_stretch_track(&mut self, track: KeyframeTrack<Size>) {
        if let Some(id) = self.stretch_track.take() {
            self.scheduler.remove_size(id);
        }
        self.stretch_track = self.scheduler.register_size(track);
    }

    fn sync_geometry(&mut self) {
        self.blur_layer
            .sync_geometry(self.bounds, self.corner_radius, self.corner_curve);
        self.tint_layer
            .sync_geometry(self.bounds, self.corner_radius, self.corner_curve);
        self.highlight
            .layer
            .sync_geometry(self.bounds, self.corner_radius, self.corner_curve);
        self.blur_layer.visible = self.blur_enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use vitro_animation::AnimationScheduler;

    fn fixture() -> (AnimationScheduler, GlassSurface) {
        let scheduler = AnimationScheduler::new();
        let cache = Arc::new(ResourceCache::new());
        let surface = GlassSurface::new(
            cache,
            scheduler.handle(),
            RenderCaps::default(),
            GlassConfig::default(),
            12.0,
        );
        (scheduler, surface)
    }

    fn step(scheduler: &AnimationScheduler, surface: &mut GlassSurface, ms: u64) {
        scheduler.advance(Duration::from_millis(ms));
        surface.sync();
    }

    #[test]
    fn test_layers_follow_bounds_and_radius() {
        let (_scheduler, mut surface) = fixture();

        surface.set_bounds(Rect::new(0.0, 0.0, 120.0, 44.0));
        surface.set_corner_radius(16.0);

        for layer in [
            surface.blur_layer(),
            surface.tint_layer(),
            &surface.highlight_layer().layer,
        ] {
            assert_eq!(layer.frame, surface.bounds());
            assert_eq!(layer.corner_radius, CornerRadius::uniform(16.0));
        }

        surface.set_bounds(Rect::new(10.0, 10.0, 60.0, 60.0));
        assert_eq!(surface.tint_layer().frame, Rect::new(10.0, 10.0, 60.0, 60.0));
    }

    #[test]
    fn test_blur_toggle_only_affects_blur_layer() {
        let (_scheduler, mut surface) = fixture();

        surface.set_blur_enabled(false);
        assert!(!surface.blur_layer().visible);
        assert!(surface.tint_layer().visible);

        surface.set_blur_enabled(true);
        assert!(surface.blur_layer().visible);
    }

    #[test]
    fn test_default_gradient_is_white_fade() {
        let (_scheduler, surface) = fixture();
        let resource = surface.tint_resource().unwrap();

        let alphas: Vec<f32> = resource.stops.iter().map(|s| s.color.a).collect();
        assert_eq!(alphas, vec![0.25, 0.1, 0.05]);
        let offsets: Vec<f32> = resource.stops.iter().map(|s| s.offset).collect();
        assert_eq!(offsets, vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_tint_color_stops() {
        let (_scheduler, mut surface) = fixture();

        surface.set_tint_color(Color::RED);
        let resource = surface.tint_resource().unwrap();

        assert_eq!(resource.stops.len(), 3);
        for (stop, &alpha) in resource.stops.iter().zip(TINT_ALPHAS.iter()) {
            assert_eq!(stop.color.r, 1.0);
            assert_eq!(stop.color.g, 0.0);
            assert_eq!(stop.color.b, 0.0);
            assert_eq!(stop.color.a, alpha);
        }
    }

    #[test]
    fn test_stretch_lands_exactly() {
        let (scheduler, mut surface) = fixture();
        surface.set_bounds(Rect::new(0.0, 0.0, 100.0, 100.0));

        surface.apply_stretch(Size::new(200.0, 50.0), 200);
        step(&scheduler, &mut surface, 250);

        assert_eq!(surface.bounds().size(), Size::new(200.0, 50.0));
        assert!(!surface.is_animating());
        // Blur layer stretched in lockstep
        assert_eq!(surface.blur_layer().frame.size(), Size::new(200.0, 50.0));
    }

    #[test]
    fn test_stretch_reentry_continues_from_live_size() {
        let (scheduler, mut surface) = fixture();
        surface.set_bounds(Rect::new(0.0, 0.0, 100.0, 100.0));

        surface.apply_stretch(Size::new(200.0, 100.0), 200);
        step(&scheduler, &mut surface, 100);

        let mid = surface.bounds().size();
        assert!(mid.width > 100.0 && mid.width < 200.0);

        // Restart toward a new target; the starting size is the live one
        surface.apply_stretch(Size::new(50.0, 100.0), 200);
        surface.sync();
        let start = surface.bounds().size();
        assert!((start.width - mid.width).abs() < 1e-3);

        step(&scheduler, &mut surface, 250);
        assert_eq!(surface.bounds().size(), Size::new(50.0, 100.0));
    }

    #[test]
    fn test_press_release_terminal_state() {
        let (scheduler, mut surface) = fixture();
        surface.set_bounds(Rect::new(0.0, 0.0, 100.0, 40.0));

        surface.show_highlight(Point::new(10.0, 10.0));
        step(&scheduler, &mut surface, 120);

        assert_eq!(surface.scale(), 1.05);
        assert!((surface.highlight_opacity() - 0.3).abs() < 1e-5);
        assert!(surface.highlight_layer().spot.is_some());

        surface.release_highlight();
        step(&scheduler, &mut surface, 200);

        assert_eq!(surface.scale(), 1.0);
        assert_eq!(surface.highlight_opacity(), 0.0);
        assert!(surface.highlight_layer().spot.is_none());
        assert!(!surface.is_animating());
    }

    #[test]
    fn test_release_dips_below_identity() {
        let (scheduler, mut surface) = fixture();
        surface.show_highlight(Point::new(5.0, 5.0));
        step(&scheduler, &mut surface, 120);

        surface.release_highlight();
        // Half-way through the bounce the scale passes the dip
        step(&scheduler, &mut surface, 75);
        assert!((surface.scale() - 0.98).abs() < 1e-4);

        step(&scheduler, &mut surface, 100);
        assert_eq!(surface.scale(), 1.0);
    }

    #[test]
    fn test_cancel_resets_scale_immediately() {
        let (scheduler, mut surface) = fixture();
        surface.show_highlight(Point::new(5.0, 5.0));
        step(&scheduler, &mut surface, 50);

        surface.cancel_highlight();
        assert_eq!(surface.scale(), 1.0);
        assert!(surface.scale_settled());

        // Fade still runs to zero
        step(&scheduler, &mut surface, 100);
        assert_eq!(surface.highlight_opacity(), 0.0);
    }

    #[test]
    fn test_press_during_release_continues_from_live_scale() {
        let (scheduler, mut surface) = fixture();
        surface.show_highlight(Point::new(5.0, 5.0));
        step(&scheduler, &mut surface, 120);

        surface.release_highlight();
        step(&scheduler, &mut surface, 40);
        let live = surface.scale();
        assert!(live < 1.05);

        // New press mid-release: the scale-up starts from the live value
        surface.show_highlight(Point::new(8.0, 8.0));
        step(&scheduler, &mut surface, 1);
        assert!(surface.scale() >= live - 1e-3);
        assert!(surface.scale() < 1.05);

        step(&scheduler, &mut surface, 200);
        assert_eq!(surface.scale(), 1.05);
    }

    #[test]
    fn test_force_reset_snaps_to_rest() {
        let (scheduler, mut surface) = fixture();
        surface.show_highlight(Point::new(5.0, 5.0));
        surface.apply_stretch(Size::new(300.0, 20.0), 500);
        step(&scheduler, &mut surface, 30);

        surface.force_reset();

        assert_eq!(surface.scale(), 1.0);
        assert_eq!(surface.highlight_opacity(), 0.0);
        assert!(surface.highlight_layer().spot.is_none());
        assert!(!surface.is_animating());
    }
}
