//! Static lookup tables for output platforms, quality tiers, social encoder presets and
//! container formats.

pub mod formats;
pub mod platform;
pub mod quality;
pub mod social;

use serde::Serialize;

pub use formats::{FORMATS, FormatInfo, OutputFormat};
pub use platform::{PLATFORMS, PlatformPreset, platform};
pub use quality::{DEFAULT_QUALITY, QUALITY_TIERS, QualityTier, quality};
pub use social::{CustomOptions, SOCIAL_PRESETS, SocialPreset, social};

/// Every table at once, as served by `GET /api/presets`.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct PresetListing {
    pub platforms: &'static [PlatformPreset],
    pub qualities: &'static [QualityTier],
    pub social: &'static [SocialPreset],
    pub formats: &'static [FormatInfo],
}

pub fn listing() -> PresetListing {
    PresetListing {
        platforms: &PLATFORMS,
        qualities: &QUALITY_TIERS,
        social: &SOCIAL_PRESETS,
        formats: &FORMATS,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/presets/presets.rs"]
mod tests;
