use serde::Serialize;

use crate::{
    foundation::error::{StudioError, StudioResult},
    presets::platform::preset_key,
};

/// Encoder quality tier for the default output path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityTier {
    pub name: &'static str,
    pub label: &'static str,
    pub crf: u8,
    pub video_bitrate: &'static str,
    pub audio_bitrate: &'static str,
    pub x264_preset: &'static str,
    pub description: &'static str,
}

pub const QUALITY_TIERS: [QualityTier; 4] = [
    QualityTier {
        name: "draft",
        label: "Draft",
        crf: 28,
        video_bitrate: "2M",
        audio_bitrate: "96k",
        x264_preset: "veryfast",
        description: "Fast render, lower quality",
    },
    QualityTier {
        name: "standard",
        label: "Standard",
        crf: 23,
        video_bitrate: "6M",
        audio_bitrate: "128k",
        x264_preset: "medium",
        description: "Balanced for social media",
    },
    QualityTier {
        name: "high",
        label: "High",
        crf: 18,
        video_bitrate: "12M",
        audio_bitrate: "192k",
        x264_preset: "slow",
        description: "High quality for distribution",
    },
    QualityTier {
        name: "professional",
        label: "Professional",
        crf: 15,
        video_bitrate: "20M",
        audio_bitrate: "320k",
        x264_preset: "slower",
        description: "Maximum quality",
    },
];

pub const DEFAULT_QUALITY: &str = "high";

pub fn quality(name: &str) -> StudioResult<&'static QualityTier> {
    let key = preset_key(name);
    QUALITY_TIERS
        .iter()
        .find(|q| q.name == key)
        .ok_or_else(|| StudioError::validation(format!("unknown quality tier '{name}'")))
}
