//! Blur material tiers
//!
//! A `BlurMaterial` names a backdrop-blur intensity tier. Realizing a tier
//! into a concrete blur resource is deterministic, so the resource cache can
//! key entries on the tier alone.

/// Backdrop blur material tier
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum BlurMaterial {
    /// Subtle blur
    UltraThin,
    /// Light blur
    Thin,
    /// Standard blur
    #[default]
    Regular,
    /// Heavy blur
    Thick,
}

impl BlurMaterial {
    /// Blur radius in pixels for this tier
    pub fn blur_radius(self) -> f32 {
        match self {
            BlurMaterial::UltraThin => 10.0,
            BlurMaterial::Thin => 15.0,
            BlurMaterial::Regular => 20.0,
            BlurMaterial::Thick => 30.0,
        }
    }
}
