use crate::{
    foundation::{
        core::{Fps, FrameIndex},
        error::{StudioError, StudioResult},
    },
    render::backend::FrameRGBA,
};

/// Output geometry announced to a sink before the first frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkConfig {
    pub width: u32,
    pub height: u32,
    pub fps: Fps,
}

/// Receives rendered frames. The pipeline calls `begin` once, then `push_frame` with strictly
/// increasing indices, then `end` once.
pub trait FrameSink: Send {
    fn begin(&mut self, cfg: SinkConfig) -> StudioResult<()>;
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> StudioResult<()>;
    fn end(&mut self) -> StudioResult<()>;
}

/// Keeps every pushed frame; used by previews and tests.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, FrameRGBA)>,
    finished: bool,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    pub fn frames(&self) -> &[(FrameIndex, FrameRGBA)] {
        &self.frames
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> StudioResult<()> {
        *self = Self {
            cfg: Some(cfg),
            ..Self::default()
        };
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> StudioResult<()> {
        let Some(cfg) = self.cfg else {
            return Err(StudioError::encode("push_frame before begin"));
        };
        if self.finished {
            return Err(StudioError::encode("push_frame after end"));
        }
        if (frame.width, frame.height) != (cfg.width, cfg.height) {
            return Err(StudioError::encode(format!(
                "frame {} is {}x{}, sink expects {}x{}",
                idx.0, frame.width, frame.height, cfg.width, cfg.height
            )));
        }
        if self.frames.last().is_some_and(|(last, _)| idx <= *last) {
            return Err(StudioError::encode(format!(
                "frame {} arrived out of order",
                idx.0
            )));
        }
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> StudioResult<()> {
        self.finished = true;
        Ok(())
    }
}
