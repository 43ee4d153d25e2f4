use serde::{Deserialize, Serialize};

use crate::foundation::error::{StudioError, StudioResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Zero-based output frame number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FrameIndex(pub u64);

/// Frames `[start, end)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameRange {
    pub start: FrameIndex,
    pub end: FrameIndex,
}

impl FrameRange {
    pub fn new(start: FrameIndex, end: FrameIndex) -> StudioResult<Self> {
        if end < start {
            return Err(StudioError::validation(format!(
                "frame range end {} precedes start {}",
                end.0, start.0
            )));
        }
        Ok(Self { start, end })
    }

    /// `[0, len)`.
    pub fn first(len: u64) -> Self {
        Self {
            start: FrameIndex(0),
            end: FrameIndex(len),
        }
    }

    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }

    pub fn is_empty(self) -> bool {
        self.len_frames() == 0
    }

    pub fn contains(self, f: FrameIndex) -> bool {
        (self.start..self.end).contains(&f)
    }

    pub fn iter(self) -> impl Iterator<Item = FrameIndex> {
        (self.start.0..self.end.0).map(FrameIndex)
    }
}

/// Rational frame rate, e.g. `30000/1001`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32,
}

impl Fps {
    pub fn new(num: u32, den: u32) -> StudioResult<Self> {
        if num == 0 || den == 0 {
            return Err(StudioError::validation(format!(
                "frame rate {num}/{den} must have a positive numerator and denominator"
            )));
        }
        Ok(Self { num, den })
    }

    pub const fn whole(num: u32) -> Self {
        Self { num, den: 1 }
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    pub fn frames_to_secs(self, frames: u64) -> f64 {
        frames as f64 * f64::from(self.den) / f64::from(self.num)
    }

    pub fn secs_to_frames_round(self, secs: f64) -> u64 {
        (secs * self.as_f64()).round().max(0.0) as u64
    }
}

/// Output size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn validate(self) -> StudioResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(StudioError::validation(format!(
                "canvas must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    pub fn is_portrait(self) -> bool {
        self.height > self.width
    }

    pub fn center(self) -> Point {
        self.rect().center()
    }

    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }

    /// Shorter side; layouts scale against it so portrait and landscape outputs match.
    pub fn min_side(self) -> f64 {
        f64::from(self.width.min(self.height))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
