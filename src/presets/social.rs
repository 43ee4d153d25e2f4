use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::presets::platform::preset_key;

/// Encoder settings tuned for one social network's upload pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialPreset {
    pub name: &'static str,
    pub codec: &'static str,
    pub crf: Option<u8>,
    pub video_bitrate: Option<&'static str>,
    pub x264_preset: &'static str,
    pub audio_codec: &'static str,
    pub audio_bitrate: &'static str,
    pub description: &'static str,
    pub max_duration: &'static str,
    pub bitrate_target: &'static str,
}

pub const SOCIAL_PRESETS: [SocialPreset; 6] = [
    SocialPreset {
        name: "tiktok",
        codec: "h264",
        crf: Some(20),
        video_bitrate: None,
        x264_preset: "medium",
        audio_codec: "aac",
        audio_bitrate: "128k",
        description: "TikTok Reels (1080x1920, 60fps recommended)",
        max_duration: "60 seconds",
        bitrate_target: "8 Mbps - Optimized for mobile upload",
    },
    SocialPreset {
        name: "instagram",
        codec: "h264",
        crf: Some(20),
        video_bitrate: None,
        x264_preset: "medium",
        audio_codec: "aac",
        audio_bitrate: "192k",
        description: "Instagram Reels/IGTV (1080x1920, 30-60fps)",
        max_duration: "90 seconds (Reels), 60 minutes (IGTV)",
        bitrate_target: "10 Mbps - Higher quality for feed",
    },
    SocialPreset {
        name: "youtube",
        codec: "h264",
        crf: Some(18),
        video_bitrate: None,
        x264_preset: "slow",
        audio_codec: "aac",
        audio_bitrate: "320k",
        description: "YouTube (1920x1080, 30-60fps)",
        max_duration: "12 hours max",
        bitrate_target: "20 Mbps - High quality for streaming",
    },
    SocialPreset {
        name: "twitter",
        codec: "h264",
        crf: None,
        video_bitrate: Some("6M"),
        x264_preset: "fast",
        audio_codec: "aac",
        audio_bitrate: "128k",
        description: "Twitter/X Video (1920x1080, 30fps)",
        max_duration: "2 minutes 20 seconds",
        bitrate_target: "6 Mbps - Fast upload, good quality",
    },
    SocialPreset {
        name: "facebook",
        codec: "h264",
        crf: Some(20),
        video_bitrate: None,
        x264_preset: "medium",
        audio_codec: "aac",
        audio_bitrate: "192k",
        description: "Facebook Reels/Feed (1080x1920 or 1920x1080)",
        max_duration: "240 minutes",
        bitrate_target: "8 Mbps - Balanced for social",
    },
    SocialPreset {
        name: "linkedin",
        codec: "h264",
        crf: Some(20),
        video_bitrate: None,
        x264_preset: "medium",
        audio_codec: "aac",
        audio_bitrate: "192k",
        description: "LinkedIn Video (1920x1080, 30fps)",
        max_duration: "10 minutes",
        bitrate_target: "10 Mbps - Professional quality",
    },
];

pub const FALLBACK_SOCIAL: &str = "instagram";

/// Look up a social preset. Missing or unknown names select `instagram`.
pub fn social(name: Option<&str>) -> &'static SocialPreset {
    let key = preset_key(name.unwrap_or(FALLBACK_SOCIAL));
    match SOCIAL_PRESETS.iter().find(|p| p.name == key) {
        Some(p) => p,
        None => {
            warn!(preset = %key, "unknown social preset, using {FALLBACK_SOCIAL}");
            &SOCIAL_PRESETS[1]
        }
    }
}

/// Client-supplied encoder options. When present they replace any preset entirely.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CustomOptions {
    pub codec: Option<String>,
    pub crf: Option<u8>,
    pub video_bitrate: Option<String>,
    pub x264_preset: Option<String>,
    pub audio_codec: Option<String>,
    pub audio_bitrate: Option<String>,
}
