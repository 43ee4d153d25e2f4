use std::{fmt, sync::Arc};

use crate::{
    composition::ctx::FrameCtx,
    foundation::{
        core::{Canvas, Fps, FrameIndex, FrameRange},
        error::{StudioError, StudioResult},
    },
    scene::model::Scene,
};

/// Frame drawing callback shared between render workers.
pub type DrawFn = Arc<dyn Fn(&FrameCtx) -> StudioResult<Scene> + Send + Sync>;

/// A drawable timeline: canvas, frame rate, length and a pure per-frame draw function.
///
/// Cloning is cheap; the draw function is shared.
#[derive(Clone)]
pub struct Composition {
    pub id: String,
    pub canvas: Canvas,
    pub fps: Fps,
    /// Length in output frames.
    pub duration: u64,
    native_fps: Fps,
    native_duration: u64,
    draw: DrawFn,
}

impl fmt::Debug for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composition")
            .field("id", &self.id)
            .field("canvas", &self.canvas)
            .field("fps", &self.fps)
            .field("duration", &self.duration)
            .finish_non_exhaustive()
    }
}

impl Composition {
    pub fn new<F>(
        id: impl Into<String>,
        canvas: Canvas,
        fps: Fps,
        duration: u64,
        draw: F,
    ) -> StudioResult<Self>
    where
        F: Fn(&FrameCtx) -> StudioResult<Scene> + Send + Sync + 'static,
    {
        canvas.validate()?;
        Fps::new(fps.num, fps.den)?;
        if duration == 0 {
            return Err(StudioError::validation("composition duration must be > 0"));
        }
        Ok(Self {
            id: id.into(),
            canvas,
            fps,
            duration,
            native_fps: fps,
            native_duration: duration,
            draw: Arc::new(draw),
        })
    }

    pub fn range(&self) -> FrameRange {
        FrameRange::first(self.duration)
    }

    pub fn duration_secs(&self) -> f64 {
        self.fps.frames_to_secs(self.duration)
    }

    /// Re-target the composition to another output size and frame rate.
    ///
    /// The length in seconds is kept: the duration is rescaled to the new rate and output frames
    /// are mapped back onto the timeline the draw function was written for.
    pub fn with_output(mut self, canvas: Canvas, fps: Fps) -> StudioResult<Self> {
        canvas.validate()?;
        Fps::new(fps.num, fps.den)?;
        let secs = self.native_fps.frames_to_secs(self.native_duration);
        self.duration = fps.secs_to_frames_round(secs).max(1);
        self.canvas = canvas;
        self.fps = fps;
        Ok(self)
    }

    /// Context handed to the draw function for output frame `frame`.
    pub fn ctx_at(&self, frame: FrameIndex) -> FrameCtx {
        let native = if self.fps == self.native_fps {
            frame.0 as f64
        } else {
            frame.0 as f64 * self.native_fps.as_f64() / self.fps.as_f64()
        };
        FrameCtx {
            frame: native,
            fps: self.native_fps,
            canvas: self.canvas,
            duration: self.native_duration,
        }
    }

    /// Evaluate the scene for output frame `frame`.
    pub fn scene_at(&self, frame: FrameIndex) -> StudioResult<Scene> {
        if frame.0 >= self.duration {
            return Err(StudioError::evaluation(format!(
                "frame {} is out of range for '{}' ({} frames)",
                frame.0, self.id, self.duration
            )));
        }
        let scene = (self.draw)(&self.ctx_at(frame))?;
        if scene.canvas != self.canvas {
            return Err(StudioError::evaluation(format!(
                "'{}' drew a {}x{} scene on a {}x{} canvas",
                self.id, scene.canvas.width, scene.canvas.height, self.canvas.width,
                self.canvas.height
            )));
        }
        Ok(scene)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composition/composition.rs"]
mod tests;
