//! Neon, glow and drop-shadow treatments.

use std::f64::consts::TAU;

use crate::{
    assets::color::Color,
    components::shapes::{circle, circle_path, rounded_rect},
    composition::ctx::FrameCtx,
    foundation::core::{Point, Rect, Vec2},
    scene::{
        dsl::{group, shape, text},
        model::{GradientStop, Node, Paint, Stroke, TextStyle},
    },
};

/// Outlined text over two blurred color layers that ramp up over 60 frames.
#[derive(Clone, Debug)]
pub struct NeonText<'a> {
    pub text: &'a str,
    /// Baseline position; meaning follows `style.anchor`.
    pub pos: Point,
    pub style: TextStyle,
    pub color: Color,
    pub secondary: Color,
    /// Peak glow strength in `[0, 1]`.
    pub intensity: f64,
    pub blur: f64,
    pub start: f64,
}

impl<'a> NeonText<'a> {
    pub fn new(text: &'a str, pos: Point, size: f64) -> Self {
        Self {
            text,
            pos,
            style: TextStyle::sized(size).weight(800),
            color: Color::from_u32(0x00ff88),
            secondary: Color::from_u32(0xff00ff),
            intensity: 1.0,
            blur: 10.0,
            start: 0.0,
        }
    }
}

/// Glow strength at the current frame.
pub fn neon_glow(ctx: &FrameCtx, start: f64, intensity: f64) -> f64 {
    ctx.progress(start, 60.0) * intensity.clamp(0.0, 1.0)
}

pub fn neon_text(ctx: &FrameCtx, n: &NeonText<'_>) -> Node {
    let glow = neon_glow(ctx, n.start, n.intensity);
    let layer = |color: Color, at: Point| {
        text(n.text, at).style(n.style.clone()).fill(color)
    };

    let mut children = Vec::with_capacity(3);
    if glow > 0.0 {
        children.push(
            group()
                .blur(n.blur * 0.5 * glow)
                .opacity(0.6 * glow)
                .child(layer(n.secondary, n.pos + Vec2::new(2.0, 2.0)))
                .build(),
        );
        children.push(
            group()
                .blur(n.blur * glow)
                .opacity(0.8 * glow)
                .child(layer(n.color, n.pos))
                .build(),
        );
    }
    children.push(
        layer(Color::TRANSPARENT, n.pos)
            .outline(Stroke::new(n.color, 2.0))
            .build(),
    );
    group().children(children).build()
}

/// Panel with a blurred gradient halo fading in over 30 frames.
#[derive(Clone, Copy, Debug)]
pub struct GlowBox {
    pub bounds: Rect,
    pub color: Color,
    pub glow_color: Color,
    pub glow_size: f64,
    pub background: Color,
    pub radius: f64,
    pub start: f64,
}

impl GlowBox {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            color: Color::from_u32(0x3b82f6),
            glow_color: Color::from_u32(0x3b82f6),
            glow_size: 20.0,
            background: Color::from_u32(0x111111),
            radius: 12.0,
            start: 0.0,
        }
    }
}

/// Draws `content` on the panel; `content` is positioned in canvas space.
pub fn glow_box(ctx: &FrameCtx, b: &GlowBox, content: Node) -> Node {
    let shown = ctx.progress(b.start, 30.0);
    let halo = Paint::linear(
        135.0,
        vec![
            GradientStop::new(0.0, b.color),
            GradientStop::new(0.5, b.glow_color),
            GradientStop::new(1.0, b.color),
        ],
    );
    group()
        .child(
            group()
                .blur(b.glow_size)
                .opacity(0.5 * shown)
                .child(rounded_rect(b.bounds.inflate(3.0, 3.0), b.radius + 3.0, halo)),
        )
        .child(rounded_rect(b.bounds, b.radius, b.background))
        .child(content)
        .build()
}

/// Soft blob breathing around a fixed ring.
#[derive(Clone, Copy, Debug)]
pub struct PulsingOrb {
    pub center: Point,
    pub color: Color,
    /// Diameter in pixels.
    pub size: f64,
    /// Pulses per 60 frames.
    pub speed: f64,
    pub start: f64,
}

impl PulsingOrb {
    pub fn new(center: Point) -> Self {
        Self {
            center,
            color: Color::from_u32(0x3b82f6),
            size: 100.0,
            speed: 1.0,
            start: 0.0,
        }
    }
}

/// `(scale, opacity)` of the blob; both hold at rest before `start`.
pub fn orb_pulse(frame: f64, start: f64, speed: f64) -> (f64, f64) {
    let t = (frame - start).max(0.0) * speed / 60.0;
    let wave = (t * TAU).sin();
    (1.0 + 0.1 * wave, 0.5 + 0.2 * wave)
}

pub fn pulsing_orb(ctx: &FrameCtx, o: &PulsingOrb) -> Node {
    let (scale, opacity) = orb_pulse(ctx.frame, o.start, o.speed);
    let r = o.size / 2.0;
    group()
        .child(
            group()
                .scale_about(o.center, scale)
                .blur(20.0)
                .opacity(opacity)
                .child(circle(o.center, r, o.color)),
        )
        .child(
            shape(circle_path(o.center, r * 0.6))
                .stroke(Stroke::new(o.color, 2.0))
                .opacity(0.5),
        )
        .build()
}

/// Offset, blurred silhouette behind `content`.
#[derive(Clone, Copy, Debug)]
pub struct ShadowDrop {
    /// Footprint of the content casting the shadow.
    pub bounds: Rect,
    pub radius: f64,
    pub color: Color,
    pub offset: Vec2,
    pub blur: f64,
    pub opacity: f64,
    /// Fade the shadow in over 30 frames instead of showing it at once.
    pub animated: bool,
    pub start: f64,
}

impl ShadowDrop {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            radius: 0.0,
            color: Color::BLACK,
            offset: Vec2::new(10.0, 10.0),
            blur: 20.0,
            opacity: 0.5,
            animated: false,
            start: 0.0,
        }
    }
}

pub fn shadow_drop(ctx: &FrameCtx, s: &ShadowDrop, content: Node) -> Node {
    let opacity = if s.animated {
        s.opacity * ctx.progress(s.start, 30.0)
    } else {
        s.opacity
    };
    group()
        .child(
            group()
                .translate(s.offset.x, s.offset.y)
                .blur(s.blur)
                .opacity(opacity)
                .child(rounded_rect(s.bounds, s.radius, s.color)),
        )
        .child(content)
        .build()
}

#[cfg(test)]
#[path = "../../tests/unit/components/glow.rs"]
mod tests;
