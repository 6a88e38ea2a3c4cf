//! Vitro Core Types
//!
//! Foundational value types shared by every Vitro crate:
//!
//! - **Geometry**: `Point`, `Size`, `Rect`
//! - **Color**: RGBA colors and gradient stops
//! - **Rounding**: per-corner radii and the corner curve family
//! - **Materials**: blur material tiers realized by the resource cache
//!
//! Everything here is a plain `Copy`/`Clone` value with no behavior beyond
//! construction and arithmetic; the compositor in `vitro_surface` owns all
//! mutable state.

pub mod color;
pub mod error;
pub mod geometry;
pub mod material;
pub mod rounding;

pub use color::{Color, GradientStop};
pub use error::VitroError;
pub use geometry::{Point, Rect, Size};
pub use material::BlurMaterial;
pub use rounding::{CornerCurve, CornerRadius};
