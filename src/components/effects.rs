//! Full-frame texture and background effects.

use std::f64::consts::TAU;

use crate::{
    animation::noise::{Rng64, SimplexNoise},
    assets::color::Color,
    composition::ctx::FrameCtx,
    foundation::core::{BezPath, Point, Rect, Vec2},
    scene::{
        dsl::{group, rect, shape},
        model::{GradientStop, Node, Paint, Stroke},
    },
};

use super::shapes::circle;

#[derive(Clone, Copy, Debug)]
pub struct FilmGrain {
    /// Speckles per frame.
    pub count: usize,
    pub opacity: f64,
    /// Speckle side in pixels.
    pub size: f64,
    pub seed: u64,
}

impl Default for FilmGrain {
    fn default() -> Self {
        Self {
            count: 400,
            opacity: 0.08,
            size: 2.0,
            seed: 0x6772_6169_6e,
        }
    }
}

/// Random light and dark speckles, re-seeded every frame.
pub fn film_grain(ctx: &FrameCtx, g: &FilmGrain) -> Node {
    let mut rng = Rng64::new(g.seed ^ ctx.frame_index().0.wrapping_mul(0x9E37_79B9_7F4A_7C15));
    let (w, h) = (f64::from(ctx.canvas.width), f64::from(ctx.canvas.height));
    let s = g.size * ctx.unit().max(0.5);
    let speckles: Vec<Node> = (0..g.count)
        .map(|_| {
            let x = rng.range(0.0, w);
            let y = rng.range(0.0, h);
            let light = rng.next_f64_01() > 0.5;
            let alpha = rng.range(0.3, 1.0);
            let color = if light { Color::WHITE } else { Color::BLACK };
            rect(Rect::new(x, y, x + s, y + s), color)
                .opacity(alpha)
                .build()
        })
        .collect();
    group().opacity(g.opacity).children(speckles).build()
}

/// Darkened edges; `strength` is the corner alpha.
pub fn vignette(ctx: &FrameCtx, strength: f64) -> Node {
    let paint = Paint::radial(
        0.75,
        vec![
            GradientStop::new(0.0, Color::TRANSPARENT),
            GradientStop::new(0.55, Color::TRANSPARENT),
            GradientStop::new(1.0, Color::BLACK.with_alpha(strength)),
        ],
    );
    rect(ctx.canvas.rect(), paint).build()
}

/// Full-canvas translucent wash, e.g. a named gradient over footage-like backgrounds.
pub fn gradient_overlay(ctx: &FrameCtx, paint: impl Into<Paint>, opacity: f64) -> Node {
    rect(ctx.canvas.rect(), paint).opacity(opacity).build()
}

#[derive(Clone, Copy, Debug)]
pub struct NoiseGrid {
    pub cols: u32,
    pub rows: u32,
    /// Noise-space step per cell.
    pub scale: f64,
    /// Noise-space drift per frame.
    pub speed: f64,
    pub seed: u64,
}

impl Default for NoiseGrid {
    fn default() -> Self {
        Self {
            cols: 50,
            rows: 50,
            scale: 0.1,
            speed: 0.01,
            seed: 42,
        }
    }
}

/// Grid of cells colored by drifting simplex noise: hue and opacity follow the noise value.
pub fn noise_grid(ctx: &FrameCtx, g: &NoiseGrid) -> Node {
    let noise = SimplexNoise::new(g.seed);
    let area = ctx.canvas.rect();
    let (cw, ch) = (
        area.width() / f64::from(g.cols.max(1)),
        area.height() / f64::from(g.rows.max(1)),
    );
    let drift = ctx.frame * g.speed;

    let mut cells = Vec::with_capacity((g.cols * g.rows) as usize);
    for y in 0..g.rows {
        for x in 0..g.cols {
            let v = noise.noise2(
                f64::from(x) * g.scale + drift,
                f64::from(y) * g.scale + drift,
            );
            let opacity = (v + 1.0) / 2.0;
            if opacity < 0.02 {
                continue;
            }
            let (x0, y0) = (f64::from(x) * cw, f64::from(y) * ch);
            cells.push(
                rect(
                    Rect::new(x0, y0, x0 + cw, y0 + ch),
                    Color::hsl((v + 1.0) * 180.0, 0.7, 0.5),
                )
                .opacity(opacity)
                .build(),
            );
        }
    }
    group().children(cells).build()
}

#[derive(Clone, Copy, Debug)]
pub struct NoiseParticles {
    pub count: usize,
    pub center: Point,
    /// Pixels per unit of noise radius (radius spans 0..100).
    pub spread: f64,
    pub speed: f64,
    pub seed: u64,
}

/// Particles orbiting `center` on noise-driven angles, radii, sizes and hues.
pub fn noise_particles(ctx: &FrameCtx, p: &NoiseParticles) -> Node {
    let noise = SimplexNoise::new(p.seed);
    let t = ctx.frame * p.speed;
    let unit = ctx.unit();
    let dots: Vec<Node> = (0..p.count)
        .map(|i| {
            let i = i as f64;
            let angle = noise.noise2(i, t) * TAU;
            let radius = 50.0 + noise.noise2(i + 100.0, t) * 50.0;
            let size = 5.0 + noise.noise2(i + 200.0, t) * 5.0;
            let hue = (noise.noise2(i + 300.0, t) + 1.0) * 180.0;
            let pos = p.center + Vec2::from_angle(angle) * radius * p.spread;
            circle(pos, size.max(0.5) * unit, Color::hsl(hue, 0.8, 0.6))
                .opacity(0.8)
                .build()
        })
        .collect();
    group().children(dots).build()
}

#[derive(Clone, Copy, Debug)]
pub struct GridBackground {
    pub spacing: f64,
    pub color: Color,
    pub line_width: f64,
    /// Pixels per frame the grid scrolls down and right.
    pub scroll: f64,
}

impl Default for GridBackground {
    fn default() -> Self {
        Self {
            spacing: 60.0,
            color: Color::rgba(1.0, 1.0, 1.0, 0.06),
            line_width: 1.0,
            scroll: 0.5,
        }
    }
}

/// Square line grid covering the canvas.
pub fn grid_background(ctx: &FrameCtx, g: &GridBackground) -> Node {
    let area = ctx.canvas.rect();
    let spacing = g.spacing.max(4.0);
    let shift = (ctx.frame * g.scroll).rem_euclid(spacing);
    let mut path = BezPath::new();

    let mut x = shift - spacing;
    while x <= area.x1 {
        path.move_to((x, area.y0));
        path.line_to((x, area.y1));
        x += spacing;
    }
    let mut y = shift - spacing;
    while y <= area.y1 {
        path.move_to((area.x0, y));
        path.line_to((area.x1, y));
        y += spacing;
    }
    shape(path).stroke(Stroke::new(g.color, g.line_width)).build()
}
