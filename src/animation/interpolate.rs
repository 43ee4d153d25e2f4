use crate::{
    animation::ease::Ease,
    assets::color::Color,
    foundation::error::{StudioError, StudioResult},
};

/// Behavior of [`interpolate`] outside the input range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extrapolate {
    /// Continue the slope of the outermost segment.
    #[default]
    Extend,
    /// Hold the outermost output value.
    Clamp,
    /// Return the input unchanged.
    Identity,
}

/// Options for [`interpolate`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InterpolateOpts {
    pub ease: Ease,
    pub left: Extrapolate,
    pub right: Extrapolate,
}

impl InterpolateOpts {
    /// Clamp on both sides.
    pub fn clamped() -> Self {
        Self {
            ease: Ease::Linear,
            left: Extrapolate::Clamp,
            right: Extrapolate::Clamp,
        }
    }

    pub fn eased(ease: Ease) -> Self {
        Self {
            ease,
            ..Self::clamped()
        }
    }
}

/// Map `input` from `input_range` to `output_range`, piecewise and eased per segment.
///
/// `input_range` must be strictly increasing and both ranges must have the same length (>= 2).
pub fn interpolate(
    input: f64,
    input_range: &[f64],
    output_range: &[f64],
    opts: InterpolateOpts,
) -> StudioResult<f64> {
    validate_ranges(input, input_range, output_range)?;

    let last = input_range.len() - 1;
    let seg = if input <= input_range[0] {
        0
    } else if input >= input_range[last] {
        last - 1
    } else {
        input_range.partition_point(|v| *v <= input).saturating_sub(1).min(last - 1)
    };

    Ok(interpolate_segment(
        input,
        (input_range[seg], input_range[seg + 1]),
        (output_range[seg], output_range[seg + 1]),
        opts,
    ))
}

/// [`interpolate`] clamped on both sides, with an ease. The common case inside templates.
///
/// Callers pass literal ranges, so a malformed range degrades to the first output value rather
/// than failing the frame.
pub fn tween(input: f64, from: (f64, f64), to: (f64, f64), ease: Ease) -> f64 {
    interpolate(input, &[from.0, from.1], &[to.0, to.1], InterpolateOpts::eased(ease))
        .unwrap_or(to.0)
}

fn validate_ranges(input: f64, input_range: &[f64], output_range: &[f64]) -> StudioResult<()> {
    if input_range.len() != output_range.len() {
        return Err(StudioError::animation(format!(
            "input range ({}) and output range ({}) must have the same length",
            input_range.len(),
            output_range.len()
        )));
    }
    if input_range.len() < 2 {
        return Err(StudioError::animation(
            "interpolate needs at least two points in each range",
        ));
    }
    if !input.is_finite() {
        return Err(StudioError::animation(format!(
            "interpolate input must be finite, got {input}"
        )));
    }
    if input_range
        .iter()
        .chain(output_range.iter())
        .any(|v| !v.is_finite())
    {
        return Err(StudioError::animation("interpolate ranges must be finite"));
    }
    if !input_range.windows(2).all(|w| w[0] < w[1]) {
        return Err(StudioError::animation(format!(
            "input range must be strictly increasing, got {input_range:?}"
        )));
    }
    Ok(())
}

fn interpolate_segment(
    input: f64,
    (in_a, in_b): (f64, f64),
    (out_a, out_b): (f64, f64),
    opts: InterpolateOpts,
) -> f64 {
    if input < in_a {
        match opts.left {
            Extrapolate::Clamp => return out_a,
            Extrapolate::Identity => return input,
            Extrapolate::Extend => {}
        }
    }
    if input > in_b {
        match opts.right {
            Extrapolate::Clamp => return out_b,
            Extrapolate::Identity => return input,
            Extrapolate::Extend => {}
        }
    }

    let t = (input - in_a) / (in_b - in_a);
    // Easing is only defined on [0, 1]; extension continues linearly.
    let te = if (0.0..=1.0).contains(&t) {
        opts.ease.apply(t)
    } else {
        t
    };
    out_a + (out_b - out_a) * te
}

/// Blend colors across `input_range` (clamped on both sides).
pub fn interpolate_color(input: f64, input_range: &[f64], colors: &[Color]) -> StudioResult<Color> {
    if colors.len() != input_range.len() {
        return Err(StudioError::animation(
            "interpolate_color needs one color per input point",
        ));
    }
    let idx: Vec<f64> = (0..colors.len()).map(|i| i as f64).collect();
    let pos = interpolate(input, input_range, &idx, InterpolateOpts::clamped())?;
    let i = (pos.floor() as usize).min(colors.len() - 2);
    Ok(colors[i].mix(colors[i + 1], pos - i as f64))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
