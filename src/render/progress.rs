use serde::Serialize;

/// Phase of a render operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderStage {
    Rendering,
    Encoding,
    Muxing,
    Done,
}

/// Snapshot reported to progress callbacks.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderProgress {
    /// Overall completion in `[0, 1]`; rasterizing and encoding weigh equally.
    pub progress: f64,
    pub rendered_frames: u64,
    pub encoded_frames: u64,
    pub total_frames: u64,
    pub stage: RenderStage,
}

impl RenderProgress {
    pub fn new(total_frames: u64) -> Self {
        Self {
            progress: 0.0,
            rendered_frames: 0,
            encoded_frames: 0,
            total_frames,
            stage: RenderStage::Rendering,
        }
    }

    pub(crate) fn update(&mut self, stage: RenderStage) -> Self {
        self.stage = stage;
        self.progress = match stage {
            RenderStage::Done => 1.0,
            _ if self.total_frames == 0 => 0.0,
            _ => {
                let done = self.rendered_frames + self.encoded_frames;
                (done as f64 / (2 * self.total_frames) as f64).min(1.0)
            }
        };
        *self
    }

    /// Completion as a whole percentage.
    pub fn percent(&self) -> u8 {
        (self.progress * 100.0).round().clamp(0.0, 100.0) as u8
    }
}
