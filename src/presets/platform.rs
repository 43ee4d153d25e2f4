use serde::Serialize;

use crate::foundation::{
    core::{Canvas, Fps},
    error::{StudioError, StudioResult},
};

/// Output size for a target platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PlatformPreset {
    pub name: &'static str,
    pub label: &'static str,
    pub width: u32,
    pub height: u32,
    pub fps: u32,
}

impl PlatformPreset {
    pub const fn canvas(&self) -> Canvas {
        Canvas::new(self.width, self.height)
    }

    pub const fn frame_rate(&self) -> Fps {
        Fps::whole(self.fps)
    }
}

const fn preset(name: &'static str, label: &'static str, width: u32, height: u32) -> PlatformPreset {
    PlatformPreset {
        name,
        label,
        width,
        height,
        fps: 30,
    }
}

pub const PLATFORMS: [PlatformPreset; 7] = [
    preset("tiktok", "TikTok", 1080, 1920),
    preset("reels", "Reels", 1080, 1920),
    preset("youtube_shorts", "YouTube Shorts", 1080, 1920),
    preset("youtube", "YouTube", 1920, 1080),
    preset("twitter", "Twitter", 1280, 720),
    preset("linkedin", "LinkedIn", 1200, 627),
    preset("instagram_post", "Instagram Post", 1080, 1080),
];

/// `YouTube-Shorts`, `youtube_shorts` and `youtube-shorts` name the same preset.
pub(crate) fn preset_key(name: &str) -> String {
    name.trim().to_ascii_lowercase().replace('-', "_")
}

pub fn platform(name: &str) -> StudioResult<&'static PlatformPreset> {
    let key = preset_key(name);
    PLATFORMS
        .iter()
        .find(|p| p.name == key)
        .ok_or_else(|| StudioError::validation(format!("unknown platform '{name}'")))
}
