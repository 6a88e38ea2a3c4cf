//! Resource cache
//!
//! Memoizes realized blur and gradient resources keyed by their construction
//! parameters, and drops everything when the platform signals memory
//! pressure. The cache is constructed by the composition root and shared by
//! handle; there is no global instance.
//!
//! The pressure signal may arrive on any thread, so lookups and the clear
//! run under one mutex: a reader observes the maps strictly before or
//! strictly after a clear, never partway through. Resources are shared as
//! `Arc`s, so a clear never invalidates a reference a live surface already
//! holds; only future lookups rebuild.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use std::fmt::Write as _;
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};
use vitro_core::{BlurMaterial, Color, GradientStop, VitroError};

/// A realized backdrop blur
///
/// Construction is pure: the same material always realizes to a value-equal
/// resource.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlurResource {
    pub material: BlurMaterial,
    /// Blur radius in pixels
    pub radius: f32,
}

impl BlurResource {
    fn realize(material: BlurMaterial) -> Self {
        Self {
            material,
            radius: material.blur_radius(),
        }
    }
}

/// An ordered color-stop sequence describing a tint gradient
///
/// Stops are (color, position) with positions non-decreasing in [0, 1].
/// `from_colors` spaces positions evenly, which is how every built-in glass
/// gradient is specified.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientSpec {
    stops: SmallVec<[(Color, f32); 4]>,
}

impl GradientSpec {
    /// Spec from a color sequence with evenly spaced stop positions
    pub fn from_colors(colors: &[Color]) -> Self {
        let last = colors.len().saturating_sub(1).max(1) as f32;
        Self {
            stops: colors
                .iter()
                .enumerate()
                .map(|(i, &color)| (color, i as f32 / last))
                .collect(),
        }
    }

    /// Spec from explicit (color, position) stops
    ///
    /// Positions are clamped to [0, 1] and must be supplied non-decreasing.
    pub fn with_stops(stops: impl IntoIterator<Item = (Color, f32)>) -> Self {
        Self {
            stops: stops
                .into_iter()
                .map(|(color, pos)| (color, pos.clamp(0.0, 1.0)))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn stops(&self) -> &[(Color, f32)] {
        &self.stops
    }

    /// Deterministic cache key over the color sequence
    ///
    /// Deliberately order-sensitive: the same colors in a different order
    /// are a different gradient (positions derive from sequence order), so
    /// they occupy a distinct entry. Channels are serialized bit-exactly.
    pub fn cache_key(&self) -> String {
        let mut key = String::with_capacity(self.stops.len() * 36);
        for (color, _) in &self.stops {
            for channel in color.to_array() {
                let _ = write!(key, "{:08x}", channel.to_bits());
            }
            key.push('-');
        }
        key
    }
}

/// A realized tint gradient
#[derive(Clone, Debug, PartialEq)]
pub struct GradientResource {
    pub stops: SmallVec<[GradientStop; 4]>,
}

impl GradientResource {
    fn realize(spec: &GradientSpec) -> Self {
        Self {
            stops: spec
                .stops
                .iter()
                .map(|&(color, pos)| GradientStop::new(pos, color))
                .collect(),
        }
    }
}

struct CacheInner {
    blurs: FxHashMap<BlurMaterial, Arc<BlurResource>>,
    gradients: FxHashMap<String, Arc<GradientResource>>,
    blur_builds: u64,
    gradient_builds: u64,
}

/// Memoization store for realized blur and gradient resources
pub struct ResourceCache {
    inner: Mutex<CacheInner>,
}

impl ResourceCache {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(CacheInner {
                blurs: FxHashMap::default(),
                gradients: FxHashMap::default(),
                blur_builds: 0,
                gradient_builds: 0,
            }),
        }
    }

    /// Cached blur resource for a material tier, realizing it on first use
    pub fn blur(&self, material: BlurMaterial) -> Arc<BlurResource> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(resource) = inner.blurs.get(&material) {
            return Arc::clone(resource);
        }

        let resource = Arc::new(BlurResource::realize(material));
        inner.blurs.insert(material, Arc::clone(&resource));
        inner.blur_builds += 1;
        debug!(?material, "realized blur resource");
        resource
    }

    /// Cached gradient resource for a spec, realizing it on first use
    ///
    /// Returns `None` for specs with fewer than two stops; invalid input is
    /// reported, not fatal.
    pub fn gradient(&self, spec: &GradientSpec) -> Option<Arc<GradientResource>> {
        if spec.len() < 2 {
            warn!(
                "{}",
                VitroError::InvalidGradientSpec { stops: spec.len() }
            );
            return None;
        }

        let key = spec.cache_key();
        let mut inner = self.inner.lock().unwrap();
        if let Some(resource) = inner.gradients.get(&key) {
            return Some(Arc::clone(resource));
        }

        let resource = Arc::new(GradientResource::realize(spec));
        inner.gradients.insert(key, Arc::clone(&resource));
        inner.gradient_builds += 1;
        debug!(stops = spec.len(), "realized gradient resource");
        Some(resource)
    }

    /// Drop every cached entry in response to a memory-pressure signal
    ///
    /// References already handed out stay valid; subsequent lookups rebuild.
    pub fn handle_memory_pressure(&self) {
        let mut inner = self.inner.lock().unwrap();
        let dropped = inner.blurs.len() + inner.gradients.len();
        inner.blurs.clear();
        inner.gradients.clear();
        debug!(dropped, "cleared resource cache under memory pressure");
    }

    /// Number of blur realizations performed (not lookups)
    pub fn blur_builds(&self) -> u64 {
        self.inner.lock().unwrap().blur_builds
    }

    /// Number of gradient realizations performed (not lookups)
    pub fn gradient_builds(&self) -> u64 {
        self.inner.lock().unwrap().gradient_builds
    }
}

impl Default for ResourceCache {
    fn default() -> Self {
        Self::new()
    }
}
