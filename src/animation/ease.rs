use std::f64::consts::PI;

/// Easing curves mapping normalized time `t` in `[0, 1]` to eased progress.
///
/// All curves satisfy `apply(0) == 0` and `apply(1) == 1`. `Back` and `Elastic` overshoot in
/// between.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    #[default]
    Linear,
    InQuad,
    OutQuad,
    InOutQuad,
    InCubic,
    OutCubic,
    InOutCubic,
    InQuart,
    OutQuart,
    InOutQuart,
    InQuint,
    OutQuint,
    InOutQuint,
    InSine,
    OutSine,
    InOutSine,
    InExpo,
    OutExpo,
    InOutExpo,
    InCirc,
    OutCirc,
    InOutCirc,
    InBack,
    OutBack,
    OutElastic,
    OutBounce,
    /// CSS `cubic-bezier(x1, y1, x2, y2)`; `x1` and `x2` must lie in `[0, 1]`.
    Bezier(f64, f64, f64, f64),
}

const BACK_C1: f64 = 1.70158;
const BACK_C3: f64 = BACK_C1 + 1.0;

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::InQuart => t.powi(4),
            Self::OutQuart => 1.0 - (1.0 - t).powi(4),
            Self::InOutQuart => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(4) / 2.0)
                }
            }
            Self::InQuint => t.powi(5),
            Self::OutQuint => 1.0 - (1.0 - t).powi(5),
            Self::InOutQuint => {
                if t < 0.5 {
                    16.0 * t.powi(5)
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(5) / 2.0)
                }
            }
            Self::InSine => 1.0 - (t * PI / 2.0).cos(),
            Self::OutSine => (t * PI / 2.0).sin(),
            Self::InOutSine => -((PI * t).cos() - 1.0) / 2.0,
            Self::InExpo => {
                if t == 0.0 {
                    0.0
                } else {
                    2f64.powf(10.0 * t - 10.0)
                }
            }
            Self::OutExpo => {
                if t == 1.0 {
                    1.0
                } else {
                    1.0 - 2f64.powf(-10.0 * t)
                }
            }
            Self::InOutExpo => {
                if t == 0.0 || t == 1.0 {
                    t
                } else if t < 0.5 {
                    2f64.powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - 2f64.powf(-20.0 * t + 10.0)) / 2.0
                }
            }
            Self::InCirc => 1.0 - (1.0 - t * t).sqrt(),
            Self::OutCirc => (1.0 - (t - 1.0).powi(2)).sqrt(),
            Self::InOutCirc => {
                if t < 0.5 {
                    (1.0 - (1.0 - (2.0 * t).powi(2)).sqrt()) / 2.0
                } else {
                    ((1.0 - (-2.0 * t + 2.0).powi(2)).sqrt() + 1.0) / 2.0
                }
            }
            Self::InBack => BACK_C3 * t * t * t - BACK_C1 * t * t,
            Self::OutBack => {
                1.0 + BACK_C3 * (t - 1.0).powi(3) + BACK_C1 * (t - 1.0).powi(2)
            }
            Self::OutElastic => {
                if t == 0.0 || t == 1.0 {
                    t
                } else {
                    let c4 = (2.0 * PI) / 3.0;
                    2f64.powf(-10.0 * t) * ((t * 10.0 - 0.75) * c4).sin() + 1.0
                }
            }
            Self::OutBounce => bounce_out(t),
            Self::Bezier(x1, y1, x2, y2) => cubic_bezier(x1, y1, x2, y2, t),
        }
    }

    /// Parse a CSS-ish easing name (`ease-out`, `easeInOutCubic`, `cubic-bezier(...)`).
    pub fn parse(name: &str) -> Option<Self> {
        let raw = name.trim();
        if let Some(args) = raw
            .strip_prefix("cubic-bezier(")
            .and_then(|s| s.strip_suffix(')'))
        {
            let v: Vec<f64> = args
                .split(',')
                .map(|p| p.trim().parse::<f64>())
                .collect::<Result<_, _>>()
                .ok()?;
            if v.len() != 4 || !(0.0..=1.0).contains(&v[0]) || !(0.0..=1.0).contains(&v[2]) {
                return None;
            }
            return Some(Self::Bezier(v[0], v[1], v[2], v[3]));
        }

        let key: String = raw
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_ascii_lowercase();
        let key = key.strip_prefix("ease").unwrap_or(&key);
        Some(match key {
            "" => Self::Bezier(0.25, 0.1, 0.25, 1.0),
            "linear" => Self::Linear,
            "in" => Self::Bezier(0.42, 0.0, 1.0, 1.0),
            "out" => Self::Bezier(0.0, 0.0, 0.58, 1.0),
            "inout" => Self::Bezier(0.42, 0.0, 0.58, 1.0),
            "inquad" => Self::InQuad,
            "outquad" => Self::OutQuad,
            "inoutquad" => Self::InOutQuad,
            "incubic" => Self::InCubic,
            "outcubic" => Self::OutCubic,
            "inoutcubic" => Self::InOutCubic,
            "inquart" => Self::InQuart,
            "outquart" => Self::OutQuart,
            "inoutquart" => Self::InOutQuart,
            "inquint" => Self::InQuint,
            "outquint" => Self::OutQuint,
            "inoutquint" => Self::InOutQuint,
            "insine" => Self::InSine,
            "outsine" => Self::OutSine,
            "inoutsine" => Self::InOutSine,
            "inexpo" => Self::InExpo,
            "outexpo" => Self::OutExpo,
            "inoutexpo" => Self::InOutExpo,
            "incirc" => Self::InCirc,
            "outcirc" => Self::OutCirc,
            "inoutcirc" => Self::InOutCirc,
            "inback" => Self::InBack,
            "outback" => Self::OutBack,
            "outelastic" | "elastic" => Self::OutElastic,
            "outbounce" | "bounce" => Self::OutBounce,
            _ => return None,
        })
    }
}

fn bounce_out(t: f64) -> f64 {
    const N1: f64 = 7.5625;
    const D1: f64 = 2.75;
    if t < 1.0 / D1 {
        N1 * t * t
    } else if t < 2.0 / D1 {
        let t = t - 1.5 / D1;
        N1 * t * t + 0.75
    } else if t < 2.5 / D1 {
        let t = t - 2.25 / D1;
        N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / D1;
        N1 * t * t + 0.984375
    }
}

/// Solve a CSS cubic-bezier for `y` at horizontal position `x`.
///
/// Newton iterations on the x polynomial, falling back to bisection when the slope is too flat.
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;
    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let sample_x = |s: f64| ((ax * s + bx) * s + cx) * s;
    let sample_y = |s: f64| ((ay * s + by) * s + cy) * s;
    let slope_x = |s: f64| (3.0 * ax * s + 2.0 * bx) * s + cx;

    let mut s = x;
    for _ in 0..8 {
        let err = sample_x(s) - x;
        if err.abs() < 1e-7 {
            return sample_y(s);
        }
        let d = slope_x(s);
        if d.abs() < 1e-6 {
            break;
        }
        s -= err / d;
    }

    let (mut lo, mut hi) = (0.0f64, 1.0f64);
    s = x;
    for _ in 0..64 {
        let v = sample_x(s);
        if (v - x).abs() < 1e-7 {
            break;
        }
        if v < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    sample_y(s)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
