//! Server-sent events emitted while a render request runs.
//!
//! Event names are `status`, `progress`, `complete` and `error`; the payload is the JSON of the
//! wrapped struct.

use axum::response::sse::Event;
use serde::Serialize;

use crate::{
    encode::settings::{EncoderSettings, VideoCodec},
    render::progress::{RenderProgress, RenderStage},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderStatus {
    Initializing,
    Selecting,
    Rendering,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusEvent {
    pub status: RenderStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<EncoderSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codec: Option<VideoCodec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crf: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<String>,
}

impl StatusEvent {
    fn bare(status: RenderStatus, message: String) -> Self {
        Self {
            status,
            message,
            preset: None,
            quality: None,
            file_name: None,
            codec: None,
            crf: None,
            bitrate: None,
        }
    }

    pub fn initializing(preset: &str, settings: &EncoderSettings) -> Self {
        Self {
            preset: Some(preset.to_owned()),
            quality: Some(settings.clone()),
            ..Self::bare(
                RenderStatus::Initializing,
                format!("Starting render with {preset} preset..."),
            )
        }
    }

    pub fn selecting() -> Self {
        Self::bare(RenderStatus::Selecting, "Selecting composition...".to_owned())
    }

    pub fn rendering(file_name: &str, settings: &EncoderSettings) -> Self {
        Self {
            file_name: Some(file_name.to_owned()),
            codec: Some(settings.codec),
            crf: settings.crf,
            bitrate: settings.video_bitrate.clone(),
            ..Self::bare(RenderStatus::Rendering, "Rendering video...".to_owned())
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEvent {
    /// Whole percent, 0..=100.
    pub progress: u8,
    pub rendered_frames: u64,
    pub encoded_frames: u64,
    pub stage: RenderStage,
}

impl From<RenderProgress> for ProgressEvent {
    fn from(p: RenderProgress) -> Self {
        Self {
            progress: p.percent(),
            rendered_frames: p.rendered_frames,
            encoded_frames: p.encoded_frames,
            stage: p.stage,
        }
    }
}

/// Turns per-frame pipeline progress into SSE progress events, dropping snapshots whose whole
/// percentage and stage match the previous event.
#[derive(Debug, Default)]
pub struct ProgressRelay {
    last: Option<(u8, RenderStage)>,
}

impl ProgressRelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self, p: RenderProgress) -> Option<ProgressEvent> {
        let ev = ProgressEvent::from(p);
        let key = (ev.progress, ev.stage);
        if self.last == Some(key) {
            return None;
        }
        self.last = Some(key);
        Some(ev)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteEvent {
    pub success: bool,
    pub file_path: String,
    pub file_name: String,
    pub download_url: String,
    pub preset: String,
    pub quality: EncoderSettings,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ErrorEvent {
    pub error: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RenderEvent {
    Status(StatusEvent),
    Progress(ProgressEvent),
    Complete(CompleteEvent),
    Error(ErrorEvent),
}

impl RenderEvent {
    pub fn error(message: impl std::fmt::Display) -> Self {
        Self::Error(ErrorEvent {
            error: message.to_string(),
        })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Status(_) => "status",
            Self::Progress(_) => "progress",
            Self::Complete(_) => "complete",
            Self::Error(_) => "error",
        }
    }

    /// Whether the stream ends after this event.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete(_) | Self::Error(_))
    }

    pub fn to_sse(&self) -> Event {
        let event = Event::default().event(self.name());
        match serde_json::to_string(self) {
            Ok(data) => event.data(data),
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize render event");
                event.data(r#"{"error":"event serialization failed"}"#)
            }
        }
    }
}
