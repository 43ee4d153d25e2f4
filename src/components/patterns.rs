//! Tiled pattern backgrounds and looping animated backdrops.

use crate::{
    animation::{
        interpolate::{InterpolateOpts, interpolate},
        noise::Rng64,
    },
    assets::color::Color,
    components::shapes::{circle, circle_path},
    composition::ctx::FrameCtx,
    foundation::core::{BezPath, Point, Rect},
    scene::{
        dsl::{group, rect, shape},
        model::{GradientStop, Node, Paint, Stroke},
    },
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    #[default]
    Grid,
    Dots,
    Diagonal,
    Checkerboard,
    Waves,
    Zigzag,
    Circles,
}

impl Pattern {
    /// Tile edge in pixels at scale 1.
    pub fn tile(self) -> f64 {
        match self {
            Self::Grid | Self::Diagonal | Self::Checkerboard => 40.0,
            Self::Dots | Self::Circles => 30.0,
            Self::Waves | Self::Zigzag => 20.0,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct PatternBackground {
    pub pattern: Pattern,
    pub color: Color,
    pub background: Color,
    pub scale: f64,
    /// Applies to the whole layer, background included.
    pub opacity: f64,
    /// Scroll the pattern upward, 40 px every 100 frames.
    pub animated: bool,
    pub start: f64,
}

impl Default for PatternBackground {
    fn default() -> Self {
        Self {
            pattern: Pattern::Grid,
            color: Color::WHITE,
            background: Color::BLACK,
            scale: 1.0,
            opacity: 0.1,
            animated: false,
            start: 0.0,
        }
    }
}

enum Ink {
    Fill(BezPath),
    Line(BezPath, f64),
}

/// Vertical scroll of an animated pattern, wrapped to one tile so the loop is seamless.
pub fn pattern_offset(frame: f64, start: f64, tile: f64) -> f64 {
    -((frame - start).max(0.0) * 40.0 / 100.0).rem_euclid(tile)
}

pub fn pattern_background(ctx: &FrameCtx, p: &PatternBackground) -> Node {
    let area = ctx.canvas.rect();
    let t = (p.pattern.tile() * p.scale).max(4.0);
    let shift = if p.animated {
        pattern_offset(ctx.frame, p.start, t)
    } else {
        0.0
    };
    // One spare tile on every side keeps the edges covered while scrolling.
    let cover = area.inflate(t, t);

    let ink = match p.pattern {
        Pattern::Grid => Ink::Line(grid_path(cover, t), 1.0),
        Pattern::Dots => Ink::Fill(lattice(cover, t, |c| circle_path(c, 2.0 * p.scale))),
        Pattern::Circles => Ink::Line(lattice(cover, t, |c| circle_path(c, t * 0.3)), 1.0),
        Pattern::Checkerboard => Ink::Fill(checkers(cover, t / 2.0)),
        Pattern::Diagonal => Ink::Line(diagonals(cover, t / 2.0), t / 8.0),
        Pattern::Waves => Ink::Line(waves(cover, t), 1.5 * p.scale),
        Pattern::Zigzag => Ink::Line(zigzags(cover, t), 2.0 * p.scale),
    };
    let layer = match ink {
        Ink::Fill(path) => shape(path).fill(p.color),
        Ink::Line(path, width) => shape(path).stroke(Stroke::new(p.color, width)),
    };

    group()
        .opacity(p.opacity)
        .clip(area)
        .child(rect(area, p.background))
        .child(group().translate(0.0, shift).child(layer))
        .build()
}

/// Calls `cell` with the center of every tile in `area`.
fn lattice(area: Rect, t: f64, cell: impl Fn(Point) -> BezPath) -> BezPath {
    let mut out = BezPath::new();
    let mut y = area.y0 + t / 2.0;
    while y < area.y1 {
        let mut x = area.x0 + t / 2.0;
        while x < area.x1 {
            out.extend(cell(Point::new(x, y)).elements().iter().copied());
            x += t;
        }
        y += t;
    }
    out
}

fn grid_path(area: Rect, t: f64) -> BezPath {
    let mut path = BezPath::new();
    let mut x = area.x0;
    while x <= area.x1 {
        path.move_to((x, area.y0));
        path.line_to((x, area.y1));
        x += t;
    }
    let mut y = area.y0;
    while y <= area.y1 {
        path.move_to((area.x0, y));
        path.line_to((area.x1, y));
        y += t;
    }
    path
}

fn checkers(area: Rect, side: f64) -> BezPath {
    let mut path = BezPath::new();
    let (cols, rows) = (
        (area.width() / side).ceil() as usize,
        (area.height() / side).ceil() as usize,
    );
    for row in 0..rows {
        for col in (row % 2..cols).step_by(2) {
            let (x, y) = (area.x0 + col as f64 * side, area.y0 + row as f64 * side);
            path.move_to((x, y));
            path.line_to((x + side, y));
            path.line_to((x + side, y + side));
            path.line_to((x, y + side));
            path.close_path();
        }
    }
    path
}

/// 45 degree hatching, lines `gap` apart measured along the x axis.
fn diagonals(area: Rect, gap: f64) -> BezPath {
    let mut path = BezPath::new();
    let h = area.height();
    let mut x = area.x0 - h;
    while x <= area.x1 {
        path.move_to((x, area.y1));
        path.line_to((x + h, area.y0));
        x += gap;
    }
    path
}

fn waves(area: Rect, t: f64) -> BezPath {
    let mut path = BezPath::new();
    let amp = t / 4.0;
    let mut y = area.y0;
    while y <= area.y1 {
        path.move_to((area.x0, y));
        let mut x = area.x0;
        let mut up = true;
        while x < area.x1 {
            let dy = if up { -amp } else { amp };
            path.quad_to((x + t / 2.0, y + 2.0 * dy), (x + t, y));
            x += t;
            up = !up;
        }
        y += t;
    }
    path
}

fn zigzags(area: Rect, t: f64) -> BezPath {
    let mut path = BezPath::new();
    let half = t / 2.0;
    let mut y = area.y0;
    while y <= area.y1 {
        path.move_to((area.x0, y));
        let mut x = area.x0;
        let mut up = true;
        while x < area.x1 {
            x += half;
            path.line_to((x, if up { y - half } else { y }));
            up = !up;
        }
        y += t;
    }
    path
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimatedPatternKind {
    #[default]
    PulseGrid,
    MovingDots,
    ExpandingCircles,
    ScanningLines,
}

#[derive(Clone, Copy, Debug)]
pub struct AnimatedPattern {
    pub kind: AnimatedPatternKind,
    pub primary: Color,
    pub secondary: Color,
    pub background: Color,
    /// Playback rate; 2 runs every cycle twice as fast.
    pub speed: f64,
    pub start: f64,
    /// Dot layout for [`AnimatedPatternKind::MovingDots`].
    pub seed: u64,
}

impl Default for AnimatedPattern {
    fn default() -> Self {
        Self {
            kind: AnimatedPatternKind::PulseGrid,
            primary: Color::from_u32(0x3b82f6),
            secondary: Color::from_u32(0x8b5cf6),
            background: Color::from_u32(0x0a0a0a),
            speed: 1.0,
            start: 0.0,
            seed: 0x646f_7473,
        }
    }
}

const PULSE_CYCLE: f64 = 120.0;
const RIPPLE_COUNT: usize = 5;
const RIPPLE_DELAY: f64 = 40.0;
const RIPPLE_LIFE: f64 = 60.0;
const SCAN_CYCLE: f64 = 200.0;

/// Grid opacity breathing `0.05 -> 0.15 -> 0.05` every 120 frames.
pub fn pulse_opacity(local: f64) -> f64 {
    interpolate(
        local.max(0.0).rem_euclid(PULSE_CYCLE),
        &[0.0, 60.0, PULSE_CYCLE],
        &[0.05, 0.15, 0.05],
        InterpolateOpts::clamped(),
    )
    .unwrap_or(0.05)
}

/// `(scale, opacity)` of ripple `i`, or `None` before it first fires.
pub fn ripple(local: f64, i: usize) -> Option<(f64, f64)> {
    let age = local - i as f64 * RIPPLE_DELAY;
    if age < 0.0 {
        return None;
    }
    let cycle = RIPPLE_COUNT as f64 * RIPPLE_DELAY;
    let p = (age.rem_euclid(cycle) / RIPPLE_LIFE).min(1.0);
    Some((1.0 + p * 5.0, (1.0 - p) * 0.3))
}

/// Scan line position in `[0, 1]` of the canvas height.
pub fn scan_position(local: f64) -> f64 {
    local.max(0.0).rem_euclid(SCAN_CYCLE) / SCAN_CYCLE
}

pub fn animated_pattern(ctx: &FrameCtx, a: &AnimatedPattern) -> Node {
    let area = ctx.canvas.rect();
    let local = (ctx.frame - a.start) * a.speed;
    let layer = match a.kind {
        AnimatedPatternKind::PulseGrid => shape(grid_path(area, 40.0))
            .stroke(Stroke::new(a.primary, 1.0))
            .opacity(pulse_opacity(local))
            .build(),
        AnimatedPatternKind::MovingDots => moving_dots(ctx, a, local),
        AnimatedPatternKind::ExpandingCircles => {
            let center = ctx.center();
            let rings: Vec<Node> = (0..RIPPLE_COUNT)
                .filter_map(|i| {
                    let (scale, opacity) = ripple(local, i)?;
                    let color = if i % 2 == 0 { a.primary } else { a.secondary };
                    Some(
                        shape(circle_path(center, 100.0 * scale))
                            .stroke(Stroke::new(color, 2.0 * scale))
                            .opacity(opacity)
                            .build(),
                    )
                })
                .collect();
            group().children(rings).build()
        }
        AnimatedPatternKind::ScanningLines => {
            let y = area.height() * scan_position(local);
            let line = Paint::linear(
                90.0,
                vec![
                    GradientStop::new(0.0, Color::TRANSPARENT),
                    GradientStop::new(0.25, a.primary),
                    GradientStop::new(0.5, a.secondary),
                    GradientStop::new(0.75, a.primary),
                    GradientStop::new(1.0, Color::TRANSPARENT),
                ],
            );
            let band = Paint::linear(
                180.0,
                vec![
                    GradientStop::new(0.0, Color::TRANSPARENT),
                    GradientStop::new(0.5, a.primary.with_alpha(0x20 as f64 / 255.0)),
                    GradientStop::new(1.0, Color::TRANSPARENT),
                ],
            );
            let bar = Rect::new(area.x0, y, area.x1, y + 4.0);
            group()
                .child(rect(Rect::new(area.x0, y, area.x1, y + 60.0), band))
                .child(group().blur(20.0).child(rect(bar, line.clone())))
                .child(rect(bar, line))
                .build()
        }
    };
    group()
        .clip(area)
        .child(rect(area, a.background))
        .child(layer)
        .build()
}

fn moving_dots(ctx: &FrameCtx, a: &AnimatedPattern, local: f64) -> Node {
    let mut rng = Rng64::new(a.seed);
    let t = local.max(0.0);
    let dots: Vec<Node> = (0..20)
        .map(|_| {
            let (x0, y0) = (rng.range(0.0, 100.0), rng.range(0.0, 100.0));
            let size = rng.range(4.0, 12.0);
            let pace = rng.range(0.1, 0.3);
            let color = if rng.next_f64_01() > 0.5 { a.primary } else { a.secondary };
            let x = (x0 + t * pace).rem_euclid(100.0);
            let y = (y0 + t * pace * 0.7).rem_euclid(100.0);
            let c = Point::new(ctx.vw(x) + size / 2.0, ctx.vh(y) + size / 2.0);
            circle(c, size / 2.0, color).opacity(0.6).build()
        })
        .collect();
    group().children(dots).build()
}

#[cfg(test)]
#[path = "../../tests/unit/components/patterns.rs"]
mod tests;
