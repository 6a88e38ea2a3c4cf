//! Glass context
//!
//! The composition root: owns the animation scheduler and the resource
//! cache, carries the capability flags and configuration, and stamps out
//! surfaces wired to all of them. The embedding application creates one
//! context, forwards its display clock to `advance`, and routes the
//! platform's low-memory signal to `notify_memory_pressure`.

use std::sync::Arc;
use std::time::Duration;
use vitro_animation::{AnimationScheduler, SchedulerHandle};
use vitro_core::CornerRadius;

use crate::cache::ResourceCache;
use crate::capability::{GlassBackend, RenderCaps};
use crate::config::GlassConfig;
use crate::surface::GlassSurface;

/// Owns the shared machinery behind every glass surface
pub struct GlassContext {
    scheduler: AnimationScheduler,
    cache: Arc<ResourceCache>,
    caps: RenderCaps,
    config: GlassConfig,
    backend: GlassBackend,
}

impl GlassContext {
    pub fn new(caps: RenderCaps) -> Self {
        Self::with_config(caps, GlassConfig::default())
    }

    pub fn with_config(caps: RenderCaps, config: GlassConfig) -> Self {
        Self {
            scheduler: AnimationScheduler::new(),
            cache: Arc::new(ResourceCache::new()),
            caps,
            config,
            backend: GlassBackend::select(caps),
        }
    }

    /// Create a surface wired to this context's cache and scheduler
    pub fn create_surface(&self, corner_radius: impl Into<CornerRadius>) -> GlassSurface {
        GlassSurface::new(
            Arc::clone(&self.cache),
            self.scheduler.handle(),
            self.caps,
            self.config,
            corner_radius,
        )
    }

    /// Advance every in-flight animation by the host frame delta
    ///
    /// Returns true while any animation still needs frames.
    pub fn advance(&self, dt: Duration) -> bool {
        self.scheduler.advance(dt)
    }

    /// Forward of the platform's low-memory signal
    ///
    /// Safe to call from any thread.
    pub fn notify_memory_pressure(&self) {
        self.cache.handle_memory_pressure();
    }

    pub fn cache(&self) -> &Arc<ResourceCache> {
        &self.cache
    }

    pub fn scheduler_handle(&self) -> SchedulerHandle {
        self.scheduler.handle()
    }

    pub fn caps(&self) -> RenderCaps {
        self.caps
    }

    pub fn config(&self) -> &GlassConfig {
        &self.config
    }

    /// The glass implementation selected at construction
    pub fn backend(&self) -> GlassBackend {
        self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitro_core::{CornerCurve, Rect, Size};

    #[test]
    fn test_surfaces_share_one_cache() {
        let ctx = GlassContext::new(RenderCaps::default());

        let _a = ctx.create_surface(12.0);
        let _b = ctx.create_surface(12.0);

        // Same material and same default gradient: realized once
        assert_eq!(ctx.cache().blur_builds(), 1);
        assert_eq!(ctx.cache().gradient_builds(), 1);
    }

    #[test]
    fn test_memory_pressure_reaches_cache() {
        let ctx = GlassContext::new(RenderCaps::default());
        let _surface = ctx.create_surface(8.0);

        ctx.notify_memory_pressure();
        let _another = ctx.create_surface(8.0);

        assert_eq!(ctx.cache().blur_builds(), 2);
    }

    #[test]
    fn test_caps_select_corner_curve_once() {
        let ctx = GlassContext::new(RenderCaps {
            continuous_corners: true,
            native_glass: false,
        });
        let surface = ctx.create_surface(10.0);
        assert_eq!(surface.corner_curve(), CornerCurve::Continuous);
        assert_eq!(ctx.backend(), GlassBackend::Composited);
    }

    #[test]
    fn test_context_clock_drives_surfaces() {
        let ctx = GlassContext::new(RenderCaps::default());
        let mut surface = ctx.create_surface(10.0);
        surface.set_bounds(Rect::new(0.0, 0.0, 100.0, 100.0));

        surface.apply_stretch(Size::new(200.0, 50.0), 200);
        assert!(ctx.advance(Duration::from_millis(100)));
        surface.sync();
        assert!(surface.bounds().width() > 100.0);

        assert!(!ctx.advance(Duration::from_millis(150)));
        surface.sync();
        assert_eq!(surface.bounds().size(), Size::new(200.0, 50.0));
    }
}
