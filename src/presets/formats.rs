use serde::{Deserialize, Serialize};

use crate::{
    foundation::error::{StudioError, StudioResult},
    presets::platform::preset_key,
};

/// Container and codec family of a rendered file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Mp4,
    Webm,
    Prores,
}

/// Static description of an [`OutputFormat`] for listings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatInfo {
    pub name: &'static str,
    pub label: &'static str,
    pub extension: &'static str,
    pub video_encoder: &'static str,
    pub audio_codec: &'static str,
    pub pixel_format: &'static str,
}

pub const FORMATS: [FormatInfo; 3] = [
    FormatInfo {
        name: "mp4",
        label: "MP4 (H.264)",
        extension: "mp4",
        video_encoder: "libx264",
        audio_codec: "aac",
        pixel_format: "yuv420p",
    },
    FormatInfo {
        name: "webm",
        label: "WebM (VP9)",
        extension: "webm",
        video_encoder: "libvpx-vp9",
        audio_codec: "libopus",
        pixel_format: "yuv420p",
    },
    FormatInfo {
        name: "prores",
        label: "ProRes",
        extension: "mov",
        video_encoder: "prores_ks",
        audio_codec: "pcm_s16le",
        pixel_format: "yuv422p10le",
    },
];

impl OutputFormat {
    pub fn parse(name: &str) -> StudioResult<Self> {
        match preset_key(name).as_str() {
            "mp4" | "h264" => Ok(Self::Mp4),
            "webm" | "vp9" => Ok(Self::Webm),
            "prores" | "mov" => Ok(Self::Prores),
            _ => Err(StudioError::validation(format!("unknown output format '{name}'"))),
        }
    }

    pub fn info(self) -> &'static FormatInfo {
        match self {
            Self::Mp4 => &FORMATS[0],
            Self::Webm => &FORMATS[1],
            Self::Prores => &FORMATS[2],
        }
    }

    pub fn extension(self) -> &'static str {
        self.info().extension
    }

    /// Whether the pixel format subsamples chroma and so needs even dimensions.
    pub fn needs_even_dimensions(self) -> bool {
        self.info().pixel_format.starts_with("yuv420")
    }
}
