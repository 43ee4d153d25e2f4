//! Enter, exit and cross transitions that wrap a node in an animated group.

use crate::{
    animation::{
        ease::Ease,
        interpolate::{InterpolateOpts, interpolate},
    },
    assets::color::Color,
    components::shapes::Direction,
    composition::ctx::FrameCtx,
    foundation::core::{Rect, Vec2},
    scene::{
        dsl::{group, rect},
        model::Node,
    },
};

/// Whether a transition brings content in or takes it out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    In,
    Out,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Transition {
    #[default]
    Fade,
    Slide {
        #[serde(default)]
        direction: Direction,
    },
    Wipe {
        #[serde(default)]
        direction: Direction,
    },
    Zoom,
    Blur,
}

const MAX_BLUR: f64 = 20.0;

/// Visibility of content at the current frame, `0 -> 1` for `In` and `1 -> 0` for `Out`.
fn amount(ctx: &FrameCtx, start: f64, duration: f64, phase: Phase) -> f64 {
    let p = ctx.eased(start, duration, Ease::InOutCubic);
    match phase {
        Phase::In => p,
        Phase::Out => 1.0 - p,
    }
}

pub fn fade(ctx: &FrameCtx, child: Node, start: f64, duration: f64, phase: Phase) -> Node {
    child.with_opacity(amount(ctx, start, duration, phase))
}

/// Full-canvas `color` overlay that rises to opaque at the midpoint and falls back, to be drawn
/// above a cut.
pub fn fade_through(ctx: &FrameCtx, color: Color, start: f64, duration: f64) -> Option<Node> {
    let half = duration / 2.0;
    let o = interpolate(
        ctx.frame,
        &[start, start + half, start + duration],
        &[0.0, 1.0, 0.0],
        InterpolateOpts::eased(Ease::InOutQuad),
    )
    .unwrap_or(0.0);
    (o > 0.0).then(|| rect(ctx.canvas.rect(), color).opacity(o).build())
}

fn offset(ctx: &FrameCtx, dir: Direction, shown: f64, phase: Phase) -> Vec2 {
    let (w, h) = (f64::from(ctx.canvas.width), f64::from(ctx.canvas.height));
    // Entering content arrives from the side opposite to `dir`; leaving content exits towards it.
    let d = match phase {
        Phase::In => 1.0 - shown,
        Phase::Out => -(1.0 - shown),
    };
    match dir {
        Direction::Left => Vec2::new(w * d, 0.0),
        Direction::Right => Vec2::new(-w * d, 0.0),
        Direction::Up => Vec2::new(0.0, h * d),
        Direction::Down => Vec2::new(0.0, -h * d),
    }
}

/// Push content across the canvas moving towards `dir`.
pub fn slide(
    ctx: &FrameCtx,
    child: Node,
    start: f64,
    duration: f64,
    dir: Direction,
    phase: Phase,
) -> Node {
    let v = offset(ctx, dir, amount(ctx, start, duration, phase), phase);
    group().translate(v.x, v.y).child(child).build()
}

/// Reveal (or hide) content behind an edge travelling towards `dir`.
pub fn wipe(
    ctx: &FrameCtx,
    child: Node,
    start: f64,
    duration: f64,
    dir: Direction,
    phase: Phase,
) -> Node {
    let full = ctx.canvas.rect();
    let p = ctx.eased(start, duration, Ease::InOutCubic);
    let (w, h) = (full.width(), full.height());
    let clip = match (dir, phase) {
        (Direction::Right, Phase::In) => Rect::new(0.0, 0.0, w * p, h),
        (Direction::Right, Phase::Out) => Rect::new(w * p, 0.0, w, h),
        (Direction::Left, Phase::In) => Rect::new(w * (1.0 - p), 0.0, w, h),
        (Direction::Left, Phase::Out) => Rect::new(0.0, 0.0, w * (1.0 - p), h),
        (Direction::Down, Phase::In) => Rect::new(0.0, 0.0, w, h * p),
        (Direction::Down, Phase::Out) => Rect::new(0.0, h * p, w, h),
        (Direction::Up, Phase::In) => Rect::new(0.0, h * (1.0 - p), w, h),
        (Direction::Up, Phase::Out) => Rect::new(0.0, 0.0, w, h * (1.0 - p)),
    };
    group().clip(clip).child(child).build()
}

/// Scale from 1.2 while fading in, or up to 1.2 while fading out.
pub fn zoom(ctx: &FrameCtx, child: Node, start: f64, duration: f64, phase: Phase) -> Node {
    let shown = amount(ctx, start, duration, phase);
    group()
        .scale_about(ctx.center(), 1.0 + 0.2 * (1.0 - shown))
        .opacity(shown)
        .child(child)
        .build()
}

pub fn blur(ctx: &FrameCtx, child: Node, start: f64, duration: f64, phase: Phase) -> Node {
    let shown = amount(ctx, start, duration, phase);
    group()
        .blur(MAX_BLUR * (1.0 - shown))
        .opacity(shown)
        .child(child)
        .build()
}

impl Transition {
    pub fn apply(
        self,
        ctx: &FrameCtx,
        child: Node,
        start: f64,
        duration: f64,
        phase: Phase,
    ) -> Node {
        match self {
            Self::Fade => fade(ctx, child, start, duration, phase),
            Self::Slide { direction } => slide(ctx, child, start, duration, direction, phase),
            Self::Wipe { direction } => wipe(ctx, child, start, duration, direction, phase),
            Self::Zoom => zoom(ctx, child, start, duration, phase),
            Self::Blur => blur(ctx, child, start, duration, phase),
        }
    }

    /// Outgoing and incoming content over the overlap window, outgoing painted first.
    ///
    /// Wipes only animate the incoming layer; the outgoing one stays put underneath.
    pub fn cross(
        self,
        ctx: &FrameCtx,
        outgoing: Node,
        incoming: Node,
        start: f64,
        duration: f64,
    ) -> Node {
        let out = match self {
            Self::Wipe { .. } => outgoing,
            _ => self.apply(ctx, outgoing, start, duration, Phase::Out),
        };
        group()
            .child(out)
            .child(self.apply(ctx, incoming, start, duration, Phase::In))
            .build()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/components/transitions.rs"]
mod tests;
