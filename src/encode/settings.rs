use serde::Serialize;
use tracing::debug;

use crate::{
    foundation::{
        core::Canvas,
        error::{StudioError, StudioResult},
    },
    presets::{
        formats::OutputFormat,
        quality::QualityTier,
        social::{CustomOptions, SocialPreset, social},
    },
};

/// Video codec written by the encoder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoCodec {
    #[default]
    H264,
    Vp9,
    Prores,
}

impl VideoCodec {
    pub fn parse(name: &str) -> StudioResult<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "h264" | "libx264" | "mp4" => Ok(Self::H264),
            "vp9" | "libvpx-vp9" | "webm" => Ok(Self::Vp9),
            "prores" | "prores_ks" | "mov" => Ok(Self::Prores),
            other => Err(StudioError::validation(format!("unsupported codec '{other}'"))),
        }
    }

    pub fn for_format(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Mp4 => Self::H264,
            OutputFormat::Webm => Self::Vp9,
            OutputFormat::Prores => Self::Prores,
        }
    }

    /// Container the codec is written into.
    pub fn format(self) -> OutputFormat {
        match self {
            Self::H264 => OutputFormat::Mp4,
            Self::Vp9 => OutputFormat::Webm,
            Self::Prores => OutputFormat::Prores,
        }
    }
}

/// Resolved encoder configuration for one render.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EncoderSettings {
    pub codec: VideoCodec,
    pub crf: Option<u8>,
    pub video_bitrate: Option<String>,
    pub x264_preset: String,
    pub audio_codec: String,
    pub audio_bitrate: String,
    pub pixel_format: String,
    /// Human summary of where the settings came from.
    pub description: String,
}

impl Default for EncoderSettings {
    fn default() -> Self {
        Self::from_social(social(None), OutputFormat::Mp4)
    }
}

impl EncoderSettings {
    pub fn from_quality(tier: &QualityTier, format: OutputFormat) -> Self {
        let info = format.info();
        Self {
            codec: VideoCodec::for_format(format),
            crf: Some(tier.crf),
            video_bitrate: Some(tier.video_bitrate.to_owned()),
            x264_preset: tier.x264_preset.to_owned(),
            audio_codec: info.audio_codec.to_owned(),
            audio_bitrate: tier.audio_bitrate.to_owned(),
            pixel_format: info.pixel_format.to_owned(),
            description: format!("{} quality ({})", tier.label, info.label),
        }
    }

    pub fn from_social(preset: &SocialPreset, format: OutputFormat) -> Self {
        let info = format.info();
        Self {
            codec: VideoCodec::for_format(format),
            crf: preset.crf,
            video_bitrate: preset.video_bitrate.map(str::to_owned),
            x264_preset: preset.x264_preset.to_owned(),
            audio_codec: info.audio_codec.to_owned(),
            audio_bitrate: preset.audio_bitrate.to_owned(),
            pixel_format: info.pixel_format.to_owned(),
            description: preset.description.to_owned(),
        }
    }

    /// Client options replace any preset: codec defaults to h264, preset to medium, audio to
    /// 128k aac; crf and bitrate are taken as given.
    pub fn from_custom(opts: &CustomOptions) -> StudioResult<Self> {
        let codec = match opts.codec.as_deref() {
            Some(c) if !c.trim().is_empty() => VideoCodec::parse(c)?,
            _ => VideoCodec::H264,
        };
        if let Some(crf) = opts.crf
            && crf > 63
        {
            return Err(StudioError::validation(format!("crf must be <= 63, got {crf}")));
        }
        if let Some(b) = opts.video_bitrate.as_deref() {
            validate_bitrate(b)?;
        }
        let info = codec.format().info();
        Ok(Self {
            codec,
            crf: opts.crf,
            video_bitrate: opts.video_bitrate.clone(),
            x264_preset: opts.x264_preset.clone().unwrap_or_else(|| "medium".to_owned()),
            audio_codec: opts.audio_codec.clone().unwrap_or_else(|| "aac".to_owned()),
            audio_bitrate: opts.audio_bitrate.clone().unwrap_or_else(|| "128k".to_owned()),
            pixel_format: info.pixel_format.to_owned(),
            description: "Custom configuration".to_owned(),
        })
    }

    /// Pick settings for a request: custom options win, then a social preset, then the tier.
    pub fn select(
        custom: Option<&CustomOptions>,
        preset: Option<&str>,
        tier: &QualityTier,
        format: OutputFormat,
    ) -> StudioResult<Self> {
        let settings = match (custom, preset) {
            (Some(opts), _) => Self::from_custom(opts)?,
            (None, Some(name)) => Self::from_social(social(Some(name)), format),
            (None, None) => Self::from_quality(tier, format),
        };
        debug!(codec = ?settings.codec, crf = ?settings.crf, "encoder settings selected");
        Ok(settings)
    }

    pub fn format(&self) -> OutputFormat {
        self.codec.format()
    }

    /// `ffmpeg` output arguments for the video stream.
    pub fn video_args(&self) -> Vec<String> {
        let mut args: Vec<String> = Vec::new();
        let mut push = |a: &str| args.push(a.to_owned());
        match self.codec {
            VideoCodec::H264 => {
                push("-c:v");
                push("libx264");
                push("-preset");
                push(&self.x264_preset);
            }
            VideoCodec::Vp9 => {
                push("-c:v");
                push("libvpx-vp9");
                push("-row-mt");
                push("1");
            }
            VideoCodec::Prores => {
                push("-c:v");
                push("prores_ks");
                push("-profile:v");
                push("3");
            }
        }
        if self.codec != VideoCodec::Prores {
            match (self.crf, self.video_bitrate.as_deref()) {
                (Some(crf), Some(b)) => {
                    push("-crf");
                    push(&crf.to_string());
                    push("-maxrate");
                    push(b);
                    push("-bufsize");
                    push(b);
                }
                (Some(crf), None) => {
                    push("-crf");
                    push(&crf.to_string());
                    if self.codec == VideoCodec::Vp9 {
                        push("-b:v");
                        push("0");
                    }
                }
                (None, Some(b)) => {
                    push("-b:v");
                    push(b);
                }
                (None, None) => {}
            }
        }
        push("-pix_fmt");
        push(&self.pixel_format);
        if self.codec == VideoCodec::H264 {
            push("-movflags");
            push("+faststart");
        }
        args
    }
}

fn validate_bitrate(b: &str) -> StudioResult<()> {
    let digits = b.trim_end_matches(['k', 'K', 'm', 'M']);
    if digits.is_empty() || digits.parse::<f64>().map_or(true, |v| v <= 0.0) {
        return Err(StudioError::validation(format!("invalid bitrate '{b}'")));
    }
    Ok(())
}

/// Round odd output dimensions down to even, as 4:2:0 chroma subsampling requires.
pub fn even_canvas(canvas: Canvas) -> Canvas {
    let even = |v: u32| (v & !1).max(2);
    Canvas::new(even(canvas.width), even(canvas.height))
}

#[cfg(test)]
#[path = "../../tests/unit/encode/settings.rs"]
mod tests;
