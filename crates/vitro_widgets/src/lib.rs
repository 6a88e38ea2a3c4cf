//! Vitro Glass Widgets
//!
//! Thin widgets over [`vitro_surface`]: each owns one or more glass
//! surfaces plus an interaction machine and forwards the embedder contract
//! (bounds changes and the gesture lifecycle) verbatim. Layout, gesture
//! recognition, and rendering stay with the host.

pub mod button;
pub mod slider;
pub mod switch;
pub mod tab_bar;

pub use button::GlassButton;
pub use slider::{GlassSliderThumb, TrackLayer};
pub use switch::{GlassSwitchThumb, ThumbHost};
pub use tab_bar::GlassTabStrip;
