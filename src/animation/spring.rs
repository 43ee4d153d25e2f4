use crate::foundation::{
    core::Fps,
    error::{StudioError, StudioResult},
};

/// Physical parameters of a damped spring.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub mass: f64,
    pub stiffness: f64,
    pub damping: f64,
    /// Never move past the target value.
    pub overshoot_clamping: bool,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            mass: 1.0,
            stiffness: 100.0,
            damping: 10.0,
            overshoot_clamping: false,
        }
    }
}

impl SpringConfig {
    pub fn with_damping(damping: f64) -> Self {
        Self {
            damping,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> StudioResult<()> {
        if !(self.mass > 0.0 && self.mass.is_finite()) {
            return Err(StudioError::animation("spring mass must be > 0"));
        }
        if !(self.stiffness > 0.0 && self.stiffness.is_finite()) {
            return Err(StudioError::animation("spring stiffness must be > 0"));
        }
        if !(self.damping >= 0.0 && self.damping.is_finite()) {
            return Err(StudioError::animation("spring damping must be >= 0"));
        }
        Ok(())
    }
}

/// Inputs of [`spring`].
#[derive(Clone, Copy, Debug)]
pub struct SpringParams {
    pub frame: f64,
    pub fps: Fps,
    pub config: SpringConfig,
    pub from: f64,
    pub to: f64,
    /// Stretch the spring so it settles at this frame.
    pub duration_in_frames: Option<f64>,
    /// Frames before the spring starts moving.
    pub delay: f64,
}

impl SpringParams {
    /// A `0 -> 1` spring at `frame` with the default config.
    pub fn new(frame: f64, fps: Fps) -> Self {
        Self {
            frame,
            fps,
            config: SpringConfig::default(),
            from: 0.0,
            to: 1.0,
            duration_in_frames: None,
            delay: 0.0,
        }
    }

    pub fn config(mut self, config: SpringConfig) -> Self {
        self.config = config;
        self
    }

    pub fn delay(mut self, frames: f64) -> Self {
        self.delay = frames;
        self
    }

    pub fn range(mut self, from: f64, to: f64) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    pub fn duration(mut self, frames: f64) -> Self {
        self.duration_in_frames = Some(frames);
        self
    }
}

#[derive(Clone, Copy, Debug)]
struct SpringState {
    current: f64,
    velocity: f64,
    last_ms: f64,
}

/// Advance a unit spring (target 1.0) to absolute time `now_ms` using the closed-form solution.
fn advance(state: SpringState, now_ms: f64, cfg: &SpringConfig) -> SpringState {
    // Large gaps are split by the caller; cap the step like a 15 fps tick.
    let dt = (now_ms - state.last_ms).min(64.0) / 1000.0;
    let (c, m, k) = (cfg.damping, cfg.mass, cfg.stiffness);
    let v0 = -state.velocity;
    let x0 = 1.0 - state.current;

    let zeta = c / (2.0 * (k * m).sqrt());
    let omega0 = (k / m).sqrt();

    let (position, velocity) = if zeta < 1.0 {
        let omega1 = omega0 * (1.0 - zeta * zeta).sqrt();
        let (sin1, cos1) = (omega1 * dt).sin_cos();
        let envelope = (-zeta * omega0 * dt).exp();
        let frag = envelope * (sin1 * ((v0 + zeta * omega0 * x0) / omega1) + x0 * cos1);
        let pos = 1.0 - frag;
        let vel = zeta * omega0 * frag
            - envelope * (cos1 * (v0 + zeta * omega0 * x0) - omega1 * x0 * sin1);
        (pos, vel)
    } else {
        let envelope = (-omega0 * dt).exp();
        let pos = 1.0 - envelope * (x0 + (v0 + omega0 * x0) * dt);
        let vel = envelope * (v0 * (dt * omega0 - 1.0) + dt * x0 * omega0 * omega0);
        (pos, vel)
    };

    SpringState {
        current: position,
        velocity,
        last_ms: now_ms,
    }
}

/// Unit spring progress (`0 -> 1`, may overshoot) at a possibly fractional frame.
///
/// Stepping stops once the spring is at rest, so late frames cost no more than the settle time.
/// A spring still moving after `MAX_SPRING_FRAMES` is an error.
fn unit_spring(frame: f64, fps: Fps, cfg: &SpringConfig) -> StudioResult<SpringState> {
    let frame = frame.max(0.0);
    let whole = frame.floor() as u64;
    let rest = frame - frame.floor();
    let frame_ms = 1000.0 / fps.as_f64();

    let mut state = SpringState {
        current: 0.0,
        velocity: 0.0,
        last_ms: 0.0,
    };
    for f in 0..=whole {
        if state.last_ms > 0.0 && at_rest(&state) {
            return Ok(SpringState {
                current: 1.0,
                velocity: 0.0,
                last_ms: frame * frame_ms,
            });
        }
        if f > MAX_SPRING_FRAMES {
            return Err(StudioError::animation(format!(
                "spring still moving after {MAX_SPRING_FRAMES} frames"
            )));
        }
        let t = if f == whole { f as f64 + rest } else { f as f64 };
        state = advance(state, t * frame_ms, cfg);
    }
    Ok(state)
}

fn at_rest(state: &SpringState) -> bool {
    (1.0 - state.current).abs() < REST_EPSILON && state.velocity.abs() < REST_EPSILON
}

/// Sample a spring animation at `params.frame`.
pub fn spring(params: SpringParams) -> StudioResult<f64> {
    params.config.validate()?;
    if !params.frame.is_finite() {
        return Err(StudioError::animation("spring frame must be finite"));
    }

    let mut frame = params.frame - params.delay;
    if frame <= 0.0 {
        return Ok(params.from);
    }

    if let Some(duration) = params.duration_in_frames {
        if duration.is_nan() || duration <= 0.0 {
            return Err(StudioError::animation("spring duration must be > 0"));
        }
        let natural = measure_spring(params.fps, params.config, DEFAULT_THRESHOLD)? as f64;
        frame *= natural / duration;
    }

    let mut p = unit_spring(frame, params.fps, &params.config)?.current;
    if params.config.overshoot_clamping {
        p = p.min(1.0);
    }
    Ok(params.from + (params.to - params.from) * p)
}

const DEFAULT_THRESHOLD: f64 = 0.005;
const MAX_SPRING_FRAMES: u64 = 100_000;
const REST_EPSILON: f64 = 1e-9;

/// Number of frames until a unit spring settles within `threshold` of its target and stays
/// there for 20 frames.
pub fn measure_spring(fps: Fps, config: SpringConfig, threshold: f64) -> StudioResult<u64> {
    config.validate()?;
    if threshold.is_nan() || threshold <= 0.0 {
        return Err(StudioError::animation("spring threshold must be > 0"));
    }

    let frame_ms = 1000.0 / fps.as_f64();
    let mut state = SpringState {
        current: 0.0,
        velocity: 0.0,
        last_ms: 0.0,
    };
    let mut frame = 0u64;
    state = advance(state, 0.0, &config);
    while (1.0 - state.current).abs() >= threshold {
        frame += 1;
        if frame > MAX_SPRING_FRAMES {
            return Err(StudioError::animation("spring does not settle"));
        }
        state = advance(state, frame as f64 * frame_ms, &config);
    }

    let mut finished = frame;
    let mut calm = 0;
    while calm < 20 {
        frame += 1;
        if frame > MAX_SPRING_FRAMES {
            return Err(StudioError::animation("spring does not settle"));
        }
        state = advance(state, frame as f64 * frame_ms, &config);
        if (1.0 - state.current).abs() >= threshold {
            calm = 0;
            finished = frame + 1;
        } else {
            calm += 1;
        }
    }
    Ok(finished)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
