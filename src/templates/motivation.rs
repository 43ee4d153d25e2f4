//! Ten-scene vertical motivation reel with hard cuts and a film-grain overlay.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::{
    animation::{ease::Ease, interpolate::tween, noise::random, spring::SpringConfig},
    assets::color::Color,
    components::{
        effects::{FilmGrain, film_grain},
        shapes::{centered_rect, circle, circle_path, ring_arc_path},
        typography::{Glitch, SplitText, glitch_text, slide_up_reveal, split_words},
    },
    composition::{
        ctx::FrameCtx,
        series::Series,
        template::{Template, TemplateInfo},
    },
    foundation::{
        core::{Affine, BezPath, Canvas, Fps, Point, Rect},
        error::{StudioError, StudioResult},
    },
    scene::{
        dsl::{SceneBuilder, group, rect, shape, text},
        model::{GradientStop, Node, Paint, Scene, Stroke, TextAnchor, TextStyle},
    },
};

/// Scene lengths in seconds, in play order.
pub const SCENE_SECONDS: [f64; 10] = [4.0, 4.0, 4.0, 4.0, 4.0, 4.0, 6.0, 5.0, 2.0, 8.0];

const TITLE_FONT: &str = "Oswald, Impact, Arial Narrow, sans-serif";
const BODY_FONT: &str = "Montserrat, Inter, Arial, sans-serif";

const TITLE_SPRING: SpringConfig = SpringConfig {
    mass: 0.8,
    stiffness: 100.0,
    damping: 15.0,
    overshoot_clamping: false,
};

const ICON_X: &[&str] = &["M18 6 6 18", "m6 6 12 12"];
const ICON_ARROW: &[&str] = &["M18 8L22 12L18 16", "M2 12H22"];
const ICON_CHECK: &[&str] = &["M20 6 9 17l-5-5"];
const ICON_ZAP: &[&str] = &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"];
const ICON_MAGNET: &[&str] = &[
    "m6 15-4-4 6.75-6.77a7.79 7.79 0 0 1 11 11L13 22l-4-4 6.39-6.36a2.14 2.14 0 0 0-3-3L6 15",
    "m5 8 4 4",
    "m12 15 4 4",
];
const ICON_APERTURE: &[&str] = &[
    "M22 12a10 10 0 1 1-20 0a10 10 0 1 1 20 0",
    "m14.31 8 5.74 9.94",
    "M9.69 8h11.48",
    "m7.38 12 5.74-9.94",
    "M9.69 16 3.95 6.06",
    "M14.31 16H2.83",
    "m16.62 12-5.74 9.94",
];

/// High-contrast vertical reel: tunnel, glitch, chill, minimal, focus, energy, attract,
/// identity, stop and outro.
pub struct MotivationReel;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct MotivationReelProps {
    /// Film-grain overlay on every frame.
    pub grain: bool,
    pub grain_opacity: f64,
    pub accent: Color,
    pub danger: Color,
    pub seed: u64,
}

impl Default for MotivationReelProps {
    fn default() -> Self {
        Self {
            grain: true,
            grain_opacity: 0.15,
            accent: Color::from_u32(0xccff00),
            danger: Color::from_u32(0xff2a2a),
            seed: 1,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Theme {
    black: Color,
    off_white: Color,
    accent: Color,
    danger: Color,
    glass: Color,
}

impl Theme {
    fn from_props(p: &MotivationReelProps) -> Self {
        Self {
            black: Color::from_u32(0x050505),
            off_white: Color::from_u32(0xeaeaea),
            accent: p.accent,
            danger: p.danger,
            glass: Color::rgba(1.0, 1.0, 1.0, 0.05),
        }
    }
}

fn timeline(fps: Fps) -> Series {
    Series::from_secs(fps, &SCENE_SECONDS)
}

fn title_style(size: f64) -> TextStyle {
    TextStyle {
        family: TITLE_FONT.to_owned(),
        ..TextStyle::sized(size)
    }
    .weight(700)
}

fn body_style(size: f64) -> TextStyle {
    TextStyle {
        family: BODY_FONT.to_owned(),
        ..TextStyle::sized(size)
    }
}

/// Stroked outline icon drawn on a 24-unit grid, centered at `center` and `size` pixels wide.
fn icon(paths: &[&str], center: Point, size: f64, color: Color) -> StudioResult<Node> {
    let k = size / 24.0;
    let xf = Affine::translate((center.x - size / 2.0, center.y - size / 2.0)) * Affine::scale(k);
    let mut g = group();
    for d in paths {
        let path = BezPath::from_svg(d)
            .map_err(|e| StudioError::render(format!("icon path {d:?}: {e}")))?;
        g = g.child(
            shape(xf * path)
                .stroke(Stroke::new(color, 2.0 * k).round())
                .build(),
        );
    }
    Ok(g.build())
}

/// Two-line title: a solid line over an outlined one, each sliding up out of its own mask.
struct ProTitle<'a> {
    line1: &'a str,
    line2: Option<&'a str>,
    color: Color,
    delay: f64,
    /// Vertical center of the block.
    center_y: f64,
}

fn pro_title(ctx: &FrameCtx, t: &ProTitle<'_>) -> StudioResult<Node> {
    let u = ctx.unit();
    let line_h = 130.0 * u;
    let style = title_style(120.0 * u).letter_spacing(-2.0 * u);
    let lines = if t.line2.is_some() { 2.0 } else { 1.0 };
    let top = t.center_y - line_h * lines / 2.0;
    let (cx, width) = (ctx.center().x, f64::from(ctx.canvas.width));

    let first = text(t.line1.to_uppercase(), Point::new(cx, top + line_h * 0.85))
        .style(style.clone())
        .fill(t.color)
        .build();
    let mut g = group().child(slide_up_reveal(
        ctx,
        first,
        Rect::new(0.0, top, width, top + line_h),
        t.delay,
        TITLE_SPRING,
    )?);

    if let Some(line2) = t.line2 {
        let top2 = top + line_h;
        let second = text(line2.to_uppercase(), Point::new(cx, top2 + line_h * 0.85))
            .style(style)
            .fill(Color::TRANSPARENT)
            .outline(Stroke::new(t.color, 2.0 * u))
            .opacity(0.7)
            .build();
        g = g.child(slide_up_reveal(
            ctx,
            second,
            Rect::new(0.0, top2, width, top2 + line_h),
            t.delay,
            TITLE_SPRING,
        )?);
    }
    Ok(g.build())
}

/// Receding perspective grid with growing camera shake.
fn tunnel(ctx: &FrameCtx, th: &Theme) -> StudioResult<Node> {
    let u = ctx.unit();
    let (w, h) = (f64::from(ctx.canvas.width), f64::from(ctx.canvas.height));
    let horizon = h * 0.5;
    let c = ctx.center();

    let shake = tween(ctx.frame, (80.0, 120.0), (0.0, 10.0), Ease::Linear) * u;
    let dx = (ctx.random(1) - 0.5) * shake;
    let dy = (ctx.random(2) - 0.5) * shake;

    let travel = (ctx.frame * 50.0) % 200.0 / 200.0;
    let line = Stroke::new(th.glass.with_alpha(0.12), 2.0 * u);
    let mut floor = BezPath::new();
    for i in 0..18 {
        let z = f64::from(i) + 1.0 - travel;
        let y = horizon + (h - horizon) * 2.0 / (1.0 + z);
        if y > h {
            continue;
        }
        floor.move_to((0.0, y));
        floor.line_to((w, y));
    }
    for j in -10..=10 {
        let x = c.x + f64::from(j) * 220.0 * u;
        floor.move_to((x + (x - c.x) * 2.0, h));
        floor.line_to((c.x, horizon));
    }
    let grid = group()
        .clip(Rect::new(0.0, horizon, w, h))
        .child(shape(floor).stroke(line))
        .child(
            rect(
                Rect::new(0.0, horizon, w, h),
                Paint::linear(
                    180.0,
                    vec![
                        GradientStop::new(0.0, th.black),
                        GradientStop::new(0.4, th.black.with_alpha(0.0)),
                    ],
                ),
            ),
        );

    let title = if ctx.frame < 60.0 {
        pro_title(
            ctx,
            &ProTitle {
                line1: "WHY WE",
                line2: Some("CHASE?"),
                color: th.off_white,
                delay: 0.0,
                center_y: c.y,
            },
        )?
    } else {
        pro_title(
            ctx,
            &ProTitle {
                line1: "IT RUNS",
                line2: Some("AWAY"),
                color: th.danger,
                delay: 60.0,
                center_y: c.y,
            },
        )?
    };

    let size = 48.0 * u;
    let arrow_y = h - 300.0 * u;
    let mut arrows = group().opacity(0.5);
    for k in -1..=1 {
        let x = c.x + f64::from(k) * (size + 20.0 * u);
        arrows = arrows.child(icon(ICON_ARROW, Point::new(x, arrow_y), size, th.off_white)?);
    }

    Ok(group()
        .translate(dx, dy)
        .child(grid)
        .child(title)
        .child(arrows)
        .build())
}

/// Strobing error screen with a chromatic split title.
fn glitch(ctx: &FrameCtx, th: &Theme) -> Node {
    let u = ctx.unit();
    let c = ctx.center();
    let frame = ctx.frame_index().0;
    let active = ctx.frame > 20.0;
    let flash = active && frame % 4 < 2;
    let (bg, fg) = if flash {
        (th.off_white, th.black)
    } else {
        (th.black, th.off_white)
    };

    let split = if active { (ctx.frame * 0.8).sin() * 4.0 * u } else { 0.0 };
    let size = 200.0 * u;
    let style = title_style(size).letter_spacing(-10.0 * u);
    let word = "DESPERATE";
    let bar_w = style.approx_width(word);
    let main = Glitch {
        style,
        color: fg,
        split,
        intensity: 0.0,
        frequency: 0.0,
        ..Glitch::new(word, Point::new(c.x, c.y + size * 0.35), size)
    };

    group()
        .child(rect(ctx.canvas.rect(), bg))
        .child(glitch_text(ctx, &main))
        .child(rect(
            centered_rect(Point::new(c.x, c.y + size * 0.35 + 30.0 * u), bar_w, 10.0 * u),
            th.danger,
        ))
        .child(
            text("SYSTEM ERROR // REVERSE", Point::new(c.x, ctx.vh(20.0)))
                .style(body_style(36.0 * u).weight(700).letter_spacing(5.0 * u))
                .fill(th.danger)
                .opacity(if active { 1.0 } else { 0.0 }),
        )
        .build()
}

/// Slow drifting bokeh under a framed "stay chill" card.
fn chill(ctx: &FrameCtx, th: &Theme) -> Node {
    let u = ctx.unit();
    let c = ctx.center();
    let (w, h) = (f64::from(ctx.canvas.width), f64::from(ctx.canvas.height));
    let scale = tween(ctx.frame, (0.0, 120.0), (1.1, 1.0), Ease::Linear);
    let lift = tween(ctx.frame, (0.0, 120.0), (0.0, -50.0), Ease::Linear) * u;

    let lights: Vec<Node> = (0..24u64)
        .map(|i| {
            let x = random(i * 3 + 1) * w;
            let y = random(i * 3 + 2) * h;
            let r = (30.0 + random(i * 3 + 3) * 90.0) * u;
            let color = if i % 3 == 0 { th.accent } else { th.off_white };
            circle(Point::new(x, y), r, color).opacity(0.12).build()
        })
        .collect();
    let backdrop = group()
        .translate(0.0, lift)
        .scale_about(c, scale)
        .blur(12.0 * u)
        .children(lights);

    let title = body_style(100.0 * u).weight(800);
    let card_w = title.approx_width("STAY CHILL") + 120.0 * u;
    let card_h = 100.0 * u + 80.0 * u;
    let card = centered_rect(c, card_w, card_h);

    group()
        .child(rect(ctx.canvas.rect(), Color::from_u32(0x0b0f14)))
        .child(backdrop)
        .child(rect(
            ctx.canvas.rect(),
            Paint::linear(
                0.0,
                vec![
                    GradientStop::new(0.0, Color::BLACK),
                    GradientStop::new(0.8, Color::BLACK.with_alpha(0.0)),
                ],
            ),
        ))
        .child(rect(card, Color::rgba(0.0, 0.0, 0.0, 0.3)).stroke(Stroke::new(th.accent, 2.0 * u)))
        .child(
            text("STAY CHILL", c)
                .style(title)
                .fill(th.off_white)
                .centered_v(),
        )
        .child(
            text("AUTO-CORRECT MODE", Point::new(c.x, card.y1 + 60.0 * u))
                .style(body_style(28.0 * u).weight(600).letter_spacing(4.0 * u))
                .fill(th.accent),
        )
        .build()
}

/// Light screen with a slowly turning aperture and a single rule.
fn minimal(ctx: &FrameCtx, th: &Theme) -> StudioResult<Node> {
    let u = ctx.unit();
    let c = ctx.center();
    let angle = tween(ctx.frame, (0.0, 120.0), (0.0, 90.0), Ease::Bezier(0.25, 1.0, 0.5, 1.0));
    let aperture = group()
        .rotate_about(c, angle)
        .opacity(0.1)
        .child(icon(ICON_APERTURE, c, 800.0 * u, th.black)?);

    let title = pro_title(
        ctx,
        &ProTitle {
            line1: "LIFE",
            line2: Some("RULE #1"),
            color: th.black,
            delay: 0.0,
            center_y: c.y - 60.0 * u,
        },
    )?;

    let row_y = c.y + 160.0 * u;
    let label = body_style(30.0 * u).weight(900);
    let gap = 20.0 * u;
    let icon_size = 50.0 * u;
    let row_w = icon_size + gap + label.approx_width("NO OVERTHINK");
    let left = c.x - row_w / 2.0;
    let reveal = ctx.progress(15.0, 15.0);

    Ok(group()
        .child(rect(ctx.canvas.rect(), th.off_white))
        .child(aperture)
        .child(title)
        .child(
            group()
                .opacity(reveal)
                .child(icon(ICON_X, Point::new(left + icon_size / 2.0, row_y), icon_size, th.danger)?)
                .child(
                    text("NO OVERTHINK", Point::new(left + icon_size + gap, row_y))
                        .style(label.anchor(TextAnchor::Start))
                        .fill(th.black)
                        .centered_v(),
                ),
        )
        .build())
}

/// Target rings collapsing onto a crosshair.
fn focus(ctx: &FrameCtx, th: &Theme) -> StudioResult<Node> {
    let u = ctx.unit();
    let c = Point::new(ctx.center().x, ctx.vh(32.0));
    let squeeze = tween(ctx.frame, (0.0, 45.0), (2.5, 1.0), Ease::OutCubic);
    let mut target = group().opacity(ctx.progress(0.0, 10.0));
    for (k, base) in [1.0, 0.6, 0.2].into_iter().enumerate() {
        let r = 200.0 * u * base * squeeze;
        let width = if k == 2 { 0.0 } else { 4.0 * u };
        let node = if width > 0.0 {
            shape(circle_path(c, r)).stroke(Stroke::new(th.accent, width)).build()
        } else {
            circle(c, r, th.accent).build()
        };
        target = target.child(node);
    }
    let arm = 260.0 * u;
    let mut cross = BezPath::new();
    cross.move_to((c.x - arm, c.y));
    cross.line_to((c.x + arm, c.y));
    cross.move_to((c.x, c.y - arm));
    cross.line_to((c.x, c.y + arm));
    target = target.child(
        shape(cross)
            .stroke(Stroke::new(th.off_white, 1.0 * u))
            .opacity(0.4),
    );

    let locked = ctx.frame >= 45.0;
    Ok(group()
        .child(rect(ctx.canvas.rect(), th.black))
        .child(target)
        .child(pro_title(
            ctx,
            &ProTitle {
                line1: "ONE THING",
                line2: Some("AT A TIME"),
                color: th.off_white,
                delay: 10.0,
                center_y: ctx.vh(62.0),
            },
        )?)
        .child(
            text("TARGET LOCKED", Point::new(c.x, ctx.vh(80.0)))
                .style(body_style(28.0 * u).weight(700).letter_spacing(6.0 * u))
                .fill(th.accent)
                .opacity(if locked { ctx.progress(45.0, 10.0) } else { 0.0 }),
        )
        .build())
}

/// Lightning bolt with flash frames and a charging bar.
fn energy(ctx: &FrameCtx, th: &Theme) -> StudioResult<Node> {
    let u = ctx.unit();
    let c = ctx.center();
    let frame = ctx.frame_index().0;
    let flash = matches!(frame, 30..=32 | 70..=71);
    let pop = ctx.spring(0.0, SpringConfig::with_damping(8.0))?;
    let bolt_c = Point::new(c.x, ctx.vh(30.0));
    let bolt = group()
        .scale_about(bolt_c, 0.4 + 0.6 * pop)
        .child(icon(ICON_ZAP, bolt_c, 360.0 * u, th.accent)?);

    let charge = ctx.eased(10.0, 90.0, Ease::InOutCubic);
    let bar = centered_rect(Point::new(c.x, ctx.vh(78.0)), 600.0 * u, 16.0 * u);
    let fill = Rect::new(bar.x0, bar.y0, bar.x0 + bar.width() * charge, bar.y1);

    Ok(group()
        .child(rect(ctx.canvas.rect(), if flash { th.off_white } else { th.black }))
        .child(bolt)
        .child(pro_title(
            ctx,
            &ProTitle {
                line1: "MOVE",
                line2: Some("FAST"),
                color: if flash { th.black } else { th.off_white },
                delay: 5.0,
                center_y: ctx.vh(58.0),
            },
        )?)
        .child(rect(bar, th.glass.with_alpha(0.15)))
        .child(rect(fill, th.accent))
        .child(
            text(
                format!("CHARGING {:.0}%", charge * 100.0),
                Point::new(c.x, bar.y1 + 50.0 * u),
            )
            .style(body_style(26.0 * u).weight(700).letter_spacing(4.0 * u))
            .fill(th.accent),
        )
        .build())
}

/// Particles spiralling into a magnet ring.
fn attract(ctx: &FrameCtx, th: &Theme) -> StudioResult<Node> {
    let u = ctx.unit();
    let c = ctx.center();
    let h = f64::from(ctx.canvas.height);

    let particles: Vec<Node> = (0..15)
        .filter_map(|i| {
            let t = ctx.frame - f64::from(i) * 2.0;
            let opacity = if t <= 0.0 || t >= 60.0 {
                0.0
            } else if t < 50.0 {
                t / 50.0
            } else {
                (60.0 - t) / 10.0
            };
            if opacity <= 0.0 {
                return None;
            }
            let radius = tween(t, (0.0, 60.0), (600.0, 100.0), Ease::Linear) * u;
            let angle = f64::from(i) / 15.0 * TAU + ctx.frame * 0.02;
            let p = Point::new(c.x + angle.cos() * radius, c.y + angle.sin() * radius);
            Some(circle(p, 5.0 * u, th.accent).opacity(opacity).build())
        })
        .collect();

    Ok(group()
        .child(rect(ctx.canvas.rect(), Color::from_u32(0x111111)))
        .children(particles)
        .child(
            group()
                .blur(30.0 * u)
                .child(circle(c, 100.0 * u, th.accent.with_alpha(0.2))),
        )
        .child(shape(circle_path(c, 100.0 * u)).stroke(Stroke::new(th.accent, 4.0 * u)))
        .child(icon(ICON_MAGNET, c, 100.0 * u, th.accent)?)
        .child(pro_title(
            ctx,
            &ProTitle {
                line1: "IT COMES",
                line2: Some("TO YOU"),
                color: th.off_white,
                delay: 10.0,
                center_y: h - 200.0 * u - 130.0 * u,
            },
        )?)
        .build())
}

/// Fingerprint ridges drawing themselves around a centered title.
fn identity(ctx: &FrameCtx, th: &Theme, seed: u64) -> StudioResult<Node> {
    let u = ctx.unit();
    let c = Point::new(ctx.center().x, ctx.vh(34.0));
    let ridges: Vec<Node> = (0..9u64)
        .map(|i| {
            let jitter = random(seed.wrapping_mul(31) + i);
            let r = (40.0 + i as f64 * 30.0) * u;
            let start = -120.0 + jitter * 60.0;
            let sweep = (200.0 + jitter * 120.0) * ctx.eased(i as f64 * 6.0, 45.0, Ease::OutCubic);
            shape(ring_arc_path(c, r, start, sweep))
                .stroke(Stroke::new(th.off_white, 6.0 * u).round())
                .opacity(0.35 + 0.06 * i as f64)
                .build()
        })
        .collect();

    let tagline = SplitText {
        style: body_style(34.0 * u).weight(600).letter_spacing(3.0 * u),
        color: th.accent,
        start: 60.0,
        ..SplitText::new("NO ONE ELSE HAS YOUR PRINT", Point::new(c.x, ctx.vh(80.0)), 34.0 * u)
    };

    Ok(group()
        .child(rect(ctx.canvas.rect(), th.black))
        .children(ridges)
        .child(pro_title(
            ctx,
            &ProTitle {
                line1: "BE",
                line2: Some("YOURSELF"),
                color: th.off_white,
                delay: 20.0,
                center_y: ctx.vh(62.0),
            },
        )?)
        .child(split_words(ctx, &tagline))
        .build())
}

/// Two-second strobe on the danger color.
fn stop(ctx: &FrameCtx, th: &Theme) -> StudioResult<Node> {
    let u = ctx.unit();
    let c = ctx.center();
    let strobe = ctx.frame_index().0 % 6 < 3;
    let (bg, fg) = if strobe {
        (th.danger, th.black)
    } else {
        (th.black, th.danger)
    };
    let punch = 1.0 + 0.4 * (1.0 - ctx.spring(0.0, SpringConfig::with_damping(12.0))?);
    let size = 260.0 * u;
    let word = Glitch {
        style: title_style(size).letter_spacing(-6.0 * u),
        color: fg,
        split: 6.0 * u,
        intensity: 24.0 * u,
        frequency: 0.4,
        ..Glitch::new("STOP", Point::new(c.x, c.y + size * 0.35), size)
    };
    Ok(group()
        .child(rect(ctx.canvas.rect(), bg))
        .child(group().scale_about(c, punch).child(glitch_text(ctx, &word)))
        .child(
            text("CHASING", Point::new(c.x, c.y + size * 0.35 + 110.0 * u))
                .style(body_style(48.0 * u).weight(900).letter_spacing(20.0 * u))
                .fill(fg),
        )
        .build())
}

/// Check mark drawn inside an accent ring, then a fade to black.
fn outro(ctx: &FrameCtx, th: &Theme) -> StudioResult<Node> {
    let u = ctx.unit();
    let c = Point::new(ctx.center().x, ctx.vh(30.0));
    let size = 220.0 * u;
    let ring = ctx.eased(0.0, 30.0, Ease::OutCubic);
    let check_len = 30.0 * size / 24.0;
    let drawn = ctx.eased(20.0, 25.0, Ease::OutCubic);
    let check = BezPath::from_svg(ICON_CHECK[0])
        .map_err(|e| StudioError::render(format!("icon path: {e}")))?;
    let k = size / 24.0;
    let check = Affine::translate((c.x - size / 2.0, c.y - size / 2.0)) * Affine::scale(k) * check;

    let tagline = SplitText {
        style: body_style(36.0 * u).weight(600).letter_spacing(2.0 * u),
        color: th.off_white,
        start: 70.0,
        max_width: Some(ctx.vw(80.0)),
        ..SplitText::new(
            "STOP CHASING. START ATTRACTING.",
            Point::new(ctx.center().x, ctx.vh(76.0)),
            36.0 * u,
        )
    };
    let line_w = ctx.vw(60.0) * ctx.eased(90.0, 90.0, Ease::InOutCubic);
    let fade = ctx.progress(210.0, 30.0);

    Ok(group()
        .child(rect(ctx.canvas.rect(), th.black))
        .child(
            shape(ring_arc_path(c, size * 0.75, 0.0, 360.0 * ring))
                .stroke(Stroke::new(th.accent, 6.0 * u).round()),
        )
        .child(
            shape(check).stroke(
                Stroke::new(th.accent, 2.0 * k)
                    .round()
                    .dashed(vec![check_len, check_len], check_len * (1.0 - drawn)),
            ),
        )
        .child(pro_title(
            ctx,
            &ProTitle {
                line1: "LET IT",
                line2: Some("FLOW"),
                color: th.off_white,
                delay: 20.0,
                center_y: ctx.vh(57.0),
            },
        )?)
        .child(split_words(ctx, &tagline))
        .child(rect(
            centered_rect(Point::new(ctx.center().x, ctx.vh(86.0)), line_w, 4.0 * u),
            th.accent,
        ))
        .child(rect(ctx.canvas.rect(), Color::BLACK).opacity(fade))
        .build())
}

impl Template for MotivationReel {
    type Props = MotivationReelProps;

    fn info(&self) -> TemplateInfo {
        let fps = Fps::whole(30);
        TemplateInfo {
            id: "motivation-reel",
            name: "MotivationReel",
            description: "Ten-scene 9:16 motivation reel with hard cuts and film grain",
            canvas: Canvas::new(1080, 1920),
            fps,
            duration: timeline(fps).total_frames(),
        }
    }

    fn draw(&self, ctx: &FrameCtx, p: &Self::Props) -> StudioResult<Scene> {
        if !(0.0..=1.0).contains(&p.grain_opacity) {
            return Err(StudioError::validation("grain opacity must lie in [0, 1]"));
        }
        let th = Theme::from_props(p);
        let body = timeline(ctx.fps).compose(ctx, |i, local| match i {
            0 => tunnel(local, &th),
            1 => Ok(glitch(local, &th)),
            2 => Ok(chill(local, &th)),
            3 => minimal(local, &th),
            4 => focus(local, &th),
            5 => energy(local, &th),
            6 => attract(local, &th),
            7 => identity(local, &th, p.seed),
            8 => stop(local, &th),
            _ => outro(local, &th),
        })?;

        let grain = p.grain.then(|| {
            film_grain(
                ctx,
                &FilmGrain {
                    opacity: p.grain_opacity,
                    seed: p.seed,
                    ..FilmGrain::default()
                },
            )
        });
        Ok(SceneBuilder::new(ctx.canvas)
            .background(th.black)
            .node(body)
            .maybe(grain)
            .build())
    }
}
