use crate::{
    animation::{
        interpolate::tween,
        ease::Ease,
        noise::random,
        spring::{SpringConfig, SpringParams, spring},
        timing::frame_progress,
    },
    foundation::core::{Canvas, Fps, FrameIndex, Point},
    foundation::error::StudioResult,
};

/// Everything a template needs to draw one frame.
///
/// `frame` is a float so sequences can re-time their children; whole frames come from the
/// render loop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameCtx {
    pub frame: f64,
    pub fps: Fps,
    pub canvas: Canvas,
    /// Length of the enclosing timeline in frames.
    pub duration: u64,
}

impl FrameCtx {
    pub fn new(frame: FrameIndex, fps: Fps, canvas: Canvas, duration: u64) -> Self {
        Self {
            frame: frame.0 as f64,
            fps,
            canvas,
            duration,
        }
    }

    pub fn frame_index(&self) -> FrameIndex {
        FrameIndex(self.frame.max(0.0).floor() as u64)
    }

    /// Seconds since the start of the timeline.
    pub fn secs(&self) -> f64 {
        self.frame / self.fps.as_f64()
    }

    /// Frames in `secs` seconds at this context's rate.
    pub fn frames(&self, secs: f64) -> f64 {
        secs * self.fps.as_f64()
    }

    /// Linear progress through `[start, start + len)`, clamped to `[0, 1]`.
    pub fn progress(&self, start: f64, len: f64) -> f64 {
        frame_progress(self.frame, start, len)
    }

    /// Eased progress through `[start, start + len)`.
    pub fn eased(&self, start: f64, len: f64, ease: Ease) -> f64 {
        tween(self.frame, (start, start + len), (0.0, 1.0), ease)
    }

    /// `0 -> 1` spring starting at `delay` frames.
    pub fn spring(&self, delay: f64, config: SpringConfig) -> StudioResult<f64> {
        spring(SpringParams::new(self.frame, self.fps).config(config).delay(delay))
    }

    /// Deterministic value in `[0, 1)` keyed by the current frame and `salt`.
    pub fn random(&self, salt: u64) -> f64 {
        random((self.frame_index().0 << 16) ^ salt)
    }

    /// Percentage of canvas width.
    pub fn vw(&self, pct: f64) -> f64 {
        f64::from(self.canvas.width) * pct / 100.0
    }

    /// Percentage of canvas height.
    pub fn vh(&self, pct: f64) -> f64 {
        f64::from(self.canvas.height) * pct / 100.0
    }

    /// Scale factor relative to a 1080 px short side, for type and stroke sizes.
    pub fn unit(&self) -> f64 {
        self.canvas.min_side() / 1080.0
    }

    pub fn center(&self) -> Point {
        self.canvas.center()
    }

    /// Context re-based so that `start` becomes local frame 0.
    pub fn local(&self, start: f64, duration: u64) -> Self {
        Self {
            frame: self.frame - start,
            duration,
            ..*self
        }
    }
}
