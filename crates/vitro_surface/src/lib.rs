//! Vitro Glass Surface Compositor
//!
//! Renders a translucent "glass" surface as a composited stack of three
//! layers (backdrop blur, tint gradient, interaction highlight) with
//! continuous corner rounding, and reacts to touch input with a small,
//! bounded set of animated transitions: press highlight, release bounce,
//! cancel fade, stretch resize.
//!
//! # Architecture
//!
//! - [`ResourceCache`] memoizes realized blur and gradient resources and
//!   clears itself on memory pressure
//! - [`GlassSurface`] owns the layer stack, keeps layer geometry locked to
//!   its bounds, and runs animations as explicit scheduler tracks
//! - [`TouchInteraction`] turns the gesture lifecycle into surface
//!   animations and reports `pressed`/`cancelled` outcomes upward
//! - [`GlassContext`] is the composition root that owns the scheduler and
//!   cache and stamps out wired surfaces
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use vitro_core::{Point, Rect};
//! use vitro_surface::{GlassContext, InteractionOutcome, RenderCaps, TouchInteraction};
//!
//! let ctx = GlassContext::new(RenderCaps::default());
//! let mut surface = ctx.create_surface(12.0);
//! let mut interaction = TouchInteraction::new();
//!
//! surface.set_bounds(Rect::new(0.0, 0.0, 120.0, 44.0));
//!
//! interaction.gesture_began(&mut surface, Point::new(10.0, 10.0));
//! let outcome = interaction.gesture_ended(&mut surface, true);
//! assert_eq!(outcome, Some(InteractionOutcome::PressConfirmed));
//!
//! // The host display clock drives animation progress
//! while ctx.advance(Duration::from_millis(16)) {
//!     surface.sync();
//!     interaction.poll(&surface);
//! }
//! surface.sync();
//! interaction.poll(&surface);
//! assert_eq!(surface.scale(), 1.0);
//! ```

pub mod cache;
pub mod capability;
pub mod config;
pub mod context;
pub mod interaction;
pub mod layer;
pub mod surface;

pub use cache::{BlurResource, GradientResource, GradientSpec, ResourceCache};
pub use capability::{GlassBackend, RenderCaps};
pub use config::GlassConfig;
pub use context::GlassContext;
pub use interaction::{
    HapticFeedback, InteractionOutcome, InteractionState, NoHaptics, TouchInteraction,
};
pub use layer::{HighlightLayer, HighlightSpot, SurfaceLayer};
pub use surface::GlassSurface;
