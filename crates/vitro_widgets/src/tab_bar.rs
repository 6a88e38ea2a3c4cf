//! Glass tab-bar lens strip
//!
//! One glass lens per tab, laid out by dividing the strip bounds evenly.
//! Each lens is an independent surface; only the top corners are rounded so
//! the lenses sit flush on the bar's bottom edge.

use tracing::debug;
use vitro_core::{Color, CornerRadius, Rect};
use vitro_surface::{GlassContext, GlassSurface};

/// Top-corner radius of each lens
const LENS_CORNER_RADIUS: f32 = 20.0;

/// Lens gradient: subtle white fade with a brighter bottom lip
const LENS_GRADIENT_ALPHAS: [f32; 3] = [0.15, 0.05, 0.1];

/// A strip of glass lenses, one per tab
pub struct GlassTabStrip {
    lenses: Vec<GlassSurface>,
    bounds: Rect,
    selected: usize,
}

impl GlassTabStrip {
    pub fn new(ctx: &GlassContext, tab_count: usize) -> Self {
        let mut strip = Self {
            lenses: Vec::new(),
            bounds: Rect::ZERO,
            selected: 0,
        };
        strip.rebuild_lenses(ctx, tab_count);
        strip
    }

    /// The embedder's bar bounds changed; lenses re-divide the width
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.layout();
    }

    /// Change the number of tabs; lens surfaces are rebuilt
    pub fn set_tab_count(&mut self, ctx: &GlassContext, tab_count: usize) {
        self.rebuild_lenses(ctx, tab_count);
    }

    /// Mark a tab as selected; out-of-range indices are ignored
    pub fn select(&mut self, index: usize) {
        if index < self.lenses.len() {
            self.selected = index;
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn tab_count(&self) -> usize {
        self.lenses.len()
    }

    pub fn lens(&self, index: usize) -> Option<&GlassSurface> {
        self.lenses.get(index)
    }

    pub fn lenses(&self) -> &[GlassSurface] {
        &self.lenses
    }

    /// Per-frame update; call after the context clock advances
    pub fn update(&mut self) {
        for lens in &mut self.lenses {
            lens.sync();
        }
    }

    fn rebuild_lenses(&mut self, ctx: &GlassContext, tab_count: usize) {
        let colors: Vec<Color> = LENS_GRADIENT_ALPHAS
            .iter()
            .map(|&a| Color::WHITE.with_alpha(a))
            .collect();

        self.lenses = (0..tab_count)
            .map(|_| {
                let mut lens = ctx.create_surface(CornerRadius::top(LENS_CORNER_RADIUS));
                lens.set_gradient_colors(&colors);
                lens
            })
            .collect();
        self.selected = self.selected.min(tab_count.saturating_sub(1));
        self.layout();
        debug!(tab_count, "tab strip rebuilt");
    }

    fn layout(&mut self) {
        if self.lenses.is_empty() {
            return;
        }

        let tab_width = self.bounds.width() / self.lenses.len() as f32;
        for (i, lens) in self.lenses.iter_mut().enumerate() {
            lens.set_bounds(Rect::new(
                self.bounds.x() + i as f32 * tab_width,
                self.bounds.y(),
                tab_width,
                self.bounds.height(),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitro_surface::RenderCaps;

    #[test]
    fn test_lenses_divide_bounds_evenly() {
        let ctx = GlassContext::new(RenderCaps::default());
        let mut strip = GlassTabStrip::new(&ctx, 4);
        strip.set_bounds(Rect::new(0.0, 0.0, 400.0, 56.0));

        assert_eq!(strip.tab_count(), 4);
        for (i, lens) in strip.lenses().iter().enumerate() {
            assert_eq!(lens.bounds(), Rect::new(i as f32 * 100.0, 0.0, 100.0, 56.0));
        }
    }

    #[test]
    fn test_lenses_round_top_corners_only() {
        let ctx = GlassContext::new(RenderCaps::default());
        let strip = GlassTabStrip::new(&ctx, 2);
        let radius = strip.lens(0).unwrap().corner_radius();

        assert_eq!(radius.top_left, LENS_CORNER_RADIUS);
        assert_eq!(radius.top_right, LENS_CORNER_RADIUS);
        assert_eq!(radius.bottom_left, 0.0);
        assert_eq!(radius.bottom_right, 0.0);
    }

    #[test]
    fn test_identical_lens_gradients_realize_once() {
        let ctx = GlassContext::new(RenderCaps::default());
        let _strip = GlassTabStrip::new(&ctx, 5);

        // One default surface gradient + one shared lens gradient
        assert_eq!(ctx.cache().gradient_builds(), 2);
    }

    #[test]
    fn test_selection_clamps_on_rebuild() {
        let ctx = GlassContext::new(RenderCaps::default());
        let mut strip = GlassTabStrip::new(&ctx, 5);

        strip.select(4);
        assert_eq!(strip.selected(), 4);

        strip.select(9);
        assert_eq!(strip.selected(), 4);

        strip.set_tab_count(&ctx, 2);
        assert_eq!(strip.selected(), 1);
    }
}
