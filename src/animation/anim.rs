use serde::{Deserialize, Serialize};

use crate::{
    animation::ease::Ease,
    assets::color::Color,
    foundation::{
        core::{Affine, Point, Vec2},
        error::{StudioError, StudioResult},
    },
};

/// Values that can be blended along a track.
pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a.lerp(*b, t)
    }
}

impl Lerp for Point {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a.lerp(*b, t)
    }
}

/// Coefficient-wise; fine for translate/scale tracks, skews under large rotations.
impl Lerp for Affine {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        let (ca, cb) = (a.as_coeffs(), b.as_coeffs());
        Affine::new(std::array::from_fn(|i| ca[i] + (cb[i] - ca[i]) * t))
    }
}

impl Lerp for Color {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a.mix(*b, t)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpMode {
    /// Step to each key's value when its frame is reached.
    Hold,
    #[default]
    Linear,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyframe<T> {
    pub frame: f64,
    pub value: T,
    /// Curve toward the next key.
    #[serde(default)]
    pub ease: Ease,
}

/// Sorted keys sampled at fractional frames. Before the first key the first value holds, after
/// the last key the last value holds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyframes<T> {
    pub keys: Vec<Keyframe<T>>,
    #[serde(default)]
    pub mode: InterpMode,
    /// Used when `keys` is empty. A missing field is `None`.
    pub default: Option<T>,
}

impl<T: Lerp + Clone> Keyframes<T> {
    pub fn new(mode: InterpMode) -> Self {
        Self {
            keys: Vec::new(),
            mode,
            default: None,
        }
    }

    pub fn key(mut self, frame: f64, value: T, ease: Ease) -> Self {
        self.keys.push(Keyframe { frame, value, ease });
        self
    }

    pub fn validate(&self) -> StudioResult<()> {
        if self.keys.is_empty() && self.default.is_none() {
            return Err(StudioError::animation("keyframes need a key or a default value"));
        }
        if self.keys.iter().any(|k| !k.frame.is_finite()) {
            return Err(StudioError::animation("keyframe frames must be finite"));
        }
        if self.keys.windows(2).any(|w| w[0].frame > w[1].frame) {
            return Err(StudioError::animation("keyframes must be sorted by frame"));
        }
        Ok(())
    }

    pub fn sample(&self, frame: f64) -> StudioResult<T> {
        let (Some(first), Some(last)) = (self.keys.first(), self.keys.last()) else {
            return self
                .default
                .clone()
                .ok_or_else(|| StudioError::animation("keyframes have no keys and no default"));
        };
        let next = self.keys.partition_point(|k| k.frame <= frame);
        if next == 0 {
            return Ok(first.value.clone());
        }
        let (a, Some(b)) = (&self.keys[next - 1], self.keys.get(next)) else {
            return Ok(last.value.clone());
        };
        match self.mode {
            InterpMode::Hold => Ok(a.value.clone()),
            InterpMode::Linear => {
                let t = (frame - a.frame) / (b.frame - a.frame);
                Ok(T::lerp(&a.value, &b.value, a.ease.apply(t)))
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoopMode {
    Repeat,
    PingPong,
}

/// A value animated over local frames: a keyframe track or a time remap of another animation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Anim<T> {
    Keyframes(Keyframes<T>),
    Delay {
        inner: Box<Anim<T>>,
        by: f64,
    },
    Speed {
        inner: Box<Anim<T>>,
        factor: f64,
    },
    /// Plays `inner` backwards over `[0, duration]`.
    Reverse {
        inner: Box<Anim<T>>,
        duration: f64,
    },
    Loop {
        inner: Box<Anim<T>>,
        period: f64,
        mode: LoopMode,
    },
    Mix {
        a: Box<Anim<T>>,
        b: Box<Anim<T>>,
        t: Box<Anim<f64>>,
    },
}

impl<T: Lerp + Clone> Anim<T> {
    pub fn constant(value: T) -> Self {
        Self::Keyframes(Keyframes::new(InterpMode::Hold).key(0.0, value, Ease::Linear))
    }

    /// `from` until `start`, eased to `to` at `end`, then held.
    pub fn tween(start: u64, end: u64, from: T, to: T, ease: Ease) -> Self {
        Self::Keyframes(
            Keyframes::new(InterpMode::Linear)
                .key(start as f64, from, ease)
                .key(end as f64, to, Ease::Linear),
        )
    }

    pub fn delay(self, by: f64) -> Self {
        Self::Delay {
            inner: Box::new(self),
            by,
        }
    }

    pub fn speed(self, factor: f64) -> Self {
        Self::Speed {
            inner: Box::new(self),
            factor,
        }
    }

    pub fn reverse(self, duration: f64) -> Self {
        Self::Reverse {
            inner: Box::new(self),
            duration,
        }
    }

    pub fn loop_(self, period: f64, mode: LoopMode) -> Self {
        Self::Loop {
            inner: Box::new(self),
            period,
            mode,
        }
    }

    /// Blend `a` into `b` by `t` (clamped to `[0, 1]`).
    pub fn mix(a: Self, b: Self, t: Anim<f64>) -> Self {
        Self::Mix {
            a: Box::new(a),
            b: Box::new(b),
            t: Box::new(t),
        }
    }

    /// Play `self` for `len` frames, then `next` from its own frame 0.
    pub fn then(self, len: u64, next: Self) -> Self {
        let switch = Anim::Keyframes(
            Keyframes::new(InterpMode::Hold)
                .key(0.0, 0.0, Ease::Linear)
                .key(len as f64, 1.0, Ease::Linear),
        );
        Self::mix(self, next.delay(len as f64), switch)
    }

    pub fn validate(&self) -> StudioResult<()> {
        match self {
            Self::Keyframes(kf) => kf.validate(),
            Self::Delay { inner, by } => {
                if !by.is_finite() {
                    return Err(StudioError::animation("delay must be finite"));
                }
                inner.validate()
            }
            Self::Speed { inner, factor } => {
                if !factor.is_finite() || *factor <= 0.0 {
                    return Err(StudioError::animation("speed factor must be > 0"));
                }
                inner.validate()
            }
            Self::Reverse { inner, duration } => {
                if !duration.is_finite() || *duration <= 0.0 {
                    return Err(StudioError::animation("reverse duration must be > 0"));
                }
                inner.validate()
            }
            Self::Loop { inner, period, .. } => {
                if !period.is_finite() || *period <= 0.0 {
                    return Err(StudioError::animation("loop period must be > 0"));
                }
                inner.validate()
            }
            Self::Mix { a, b, t } => {
                a.validate()?;
                b.validate()?;
                t.validate()
            }
        }
    }

    /// Value at local frame `frame`. Invalid remaps are reported, not clamped.
    pub fn sample(&self, frame: f64) -> StudioResult<T> {
        match self {
            Self::Keyframes(kf) => kf.sample(frame),
            Self::Delay { inner, by } => inner.sample((frame - by).max(0.0)),
            Self::Speed { inner, factor } => {
                if *factor <= 0.0 {
                    return Err(StudioError::animation("speed factor must be > 0"));
                }
                inner.sample(frame * factor)
            }
            Self::Reverse { inner, duration } => {
                inner.sample((duration - frame.clamp(0.0, *duration)).max(0.0))
            }
            Self::Loop {
                inner,
                period,
                mode,
            } => {
                if *period <= 0.0 {
                    return Err(StudioError::animation("loop period must be > 0"));
                }
                let local = match mode {
                    LoopMode::Repeat => frame.rem_euclid(*period),
                    LoopMode::PingPong => {
                        let pos = frame.rem_euclid(2.0 * period);
                        if pos <= *period { pos } else { 2.0 * period - pos }
                    }
                };
                inner.sample(local)
            }
            Self::Mix { a, b, t } => {
                let t = t.sample(frame)?.clamp(0.0, 1.0);
                Ok(T::lerp(&a.sample(frame)?, &b.sample(frame)?, t))
            }
        }
    }
}

/// Start each animation at its offset; later offsets take over from earlier ones.
pub fn stagger(mut parts: Vec<(u64, Anim<f64>)>) -> Anim<f64> {
    parts.sort_by_key(|(offset, _)| *offset);
    let mut parts = parts.into_iter();
    let Some((first_offset, first)) = parts.next() else {
        return Anim::constant(0.0);
    };
    parts.fold(first.delay(first_offset as f64), |acc, (offset, next)| {
        acc.then(offset, next)
    })
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;
