//! Rendering capability strategy
//!
//! The embedder declares what its rendering backend supports once, at
//! construction; nothing downstream branches on platform versions. A
//! capability the backend lacks degrades to the nearest supported rendering
//! without surfacing an error.

use tracing::debug;
use vitro_core::CornerCurve;

/// Capabilities injected by the embedder at construction time
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderCaps {
    /// Backend can rasterize continuous (squircle) corner curves
    pub continuous_corners: bool,
    /// Platform provides a native glass effect that supersedes the
    /// composited one
    pub native_glass: bool,
}

impl RenderCaps {
    /// Corner curve the backend will actually render
    pub fn corner_curve(&self) -> CornerCurve {
        if self.continuous_corners {
            CornerCurve::Continuous
        } else {
            debug!("continuous corners unavailable, using circular arcs");
            CornerCurve::Circular
        }
    }
}

/// Which glass implementation a surface is backed by
///
/// Selected exactly once per context; `Native` delegates rendering to the
/// platform and is otherwise outside this crate's concern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlassBackend {
    /// Platform-native glass effect
    Native,
    /// The composited blur/tint/highlight stack implemented here
    Composited,
}

impl GlassBackend {
    pub fn select(caps: RenderCaps) -> Self {
        if caps.native_glass {
            GlassBackend::Native
        } else {
            GlassBackend::Composited
        }
    }
}
