//! Glass surface configuration
//!
//! All animation timings derive from one base duration; the press/release
//! sub-animations run at fixed fractions of it.

use serde::{Deserialize, Serialize};
use vitro_core::BlurMaterial;

/// Tuning knobs for a glass surface
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlassConfig {
    /// Base animation duration in milliseconds; highlight and bounce
    /// durations are fractions of this
    pub base_duration_ms: u32,
    /// Scale the surface bounces up to while pressed
    pub bounce_scale: f32,
    /// Scale dipped through on release, before settling at identity
    pub release_dip_scale: f32,
    /// Peak opacity of the press highlight
    pub highlight_opacity: f32,
    /// Radius of the circular press highlight, in points
    pub highlight_radius: f32,
    /// Default duration for stretch resizes, in milliseconds
    pub stretch_duration_ms: u32,
    /// Backdrop blur tier realized through the resource cache
    pub material: BlurMaterial,
}

impl Default for GlassConfig {
    fn default() -> Self {
        Self {
            base_duration_ms: 250,
            bounce_scale: 1.05,
            release_dip_scale: 0.98,
            highlight_opacity: 0.3,
            highlight_radius: 30.0,
            stretch_duration_ms: 300,
            material: BlurMaterial::Regular,
        }
    }
}

impl GlassConfig {
    /// Parse a config from TOML; absent keys keep their defaults
    pub fn from_toml_str(input: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(input)
    }

    /// Duration of the highlight fade (in or out): 30% of base
    pub fn highlight_fade_ms(&self) -> u32 {
        self.base_duration_ms * 3 / 10
    }

    /// Duration of the press scale-up: 40% of base
    pub fn press_scale_ms(&self) -> u32 {
        self.base_duration_ms * 2 / 5
    }

    /// Duration of the release bounce sequence: 60% of base
    pub fn release_bounce_ms(&self) -> u32 {
        self.base_duration_ms * 3 / 5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fractions() {
        let config = GlassConfig::default();
        assert_eq!(config.highlight_fade_ms(), 75);
        assert_eq!(config.press_scale_ms(), 100);
        assert_eq!(config.release_bounce_ms(), 150);
    }

    #[test]
    fn test_toml_partial_override() {
        let config = GlassConfig::from_toml_str(
            r#"
            base_duration_ms = 500
            material = "thick"
            "#,
        )
        .unwrap();
        assert_eq!(config.base_duration_ms, 500);
        assert_eq!(config.material, BlurMaterial::Thick);
        assert_eq!(config.bounce_scale, 1.05);
    }

    #[test]
    fn test_toml_empty_is_default() {
        let config = GlassConfig::from_toml_str("").unwrap();
        assert_eq!(config, GlassConfig::default());
    }
}
