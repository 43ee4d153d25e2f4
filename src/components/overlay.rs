//! Broadcast overlays: lower thirds, corner bugs and burned-in clocks.
//!
//! Sizes are authored against a 1080 px short side and scaled with [`FrameCtx::unit`].

use chrono::{NaiveDateTime, TimeDelta};

use crate::{
    assets::color::Color,
    components::shapes::rounded_rect,
    composition::ctx::FrameCtx,
    foundation::core::{Affine, Point, Rect},
    scene::{
        dsl::{group, text},
        model::{Node, TextAnchor, TextStyle},
    },
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LowerThirdStyle {
    #[default]
    Standard,
    Minimal,
    Boxed,
    Slide,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorScheme {
    #[default]
    Dark,
    Light,
}

struct SchemeColors {
    bg: Color,
    text: Color,
    accent: Color,
}

impl ColorScheme {
    fn colors(self) -> SchemeColors {
        let accent = Color::from_u32(0x3b82f6);
        match self {
            Self::Dark => SchemeColors {
                bg: Color::BLACK.with_alpha(0.85),
                text: Color::WHITE,
                accent,
            },
            Self::Light => SchemeColors {
                bg: Color::WHITE.with_alpha(0.9),
                text: Color::BLACK,
                accent,
            },
        }
    }
}

/// Name and title strap in the bottom-left corner.
#[derive(Clone, Debug)]
pub struct LowerThird<'a> {
    pub name: &'a str,
    pub title: Option<&'a str>,
    pub style: LowerThirdStyle,
    pub scheme: ColorScheme,
    pub start: f64,
    /// Frames on screen, including the 30 frame entrance.
    pub duration: f64,
}

impl<'a> LowerThird<'a> {
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            title: None,
            style: LowerThirdStyle::Standard,
            scheme: ColorScheme::Dark,
            start: 0.0,
            duration: 120.0,
        }
    }
}

/// `(enter, exit)` progress: in over 30 frames, out over 15 frames starting 30 before the end.
pub fn lower_third_phase(frame: f64, start: f64, duration: f64) -> (f64, f64) {
    let enter = ((frame - start) / 30.0).clamp(0.0, 1.0);
    let exit = ((frame - (start + duration - 30.0)) / 15.0).clamp(0.0, 1.0);
    (enter, exit)
}

pub fn lower_third(ctx: &FrameCtx, l: &LowerThird<'_>) -> Node {
    let (enter, exit) = lower_third_phase(ctx.frame, l.start, l.duration);
    let opacity = if exit > 0.0 { 1.0 - exit } else { enter };
    let u = ctx.unit();
    let c = l.scheme.colors();
    let left = 80.0 * u;
    let bottom = f64::from(ctx.canvas.height) - 120.0 * u;
    let style = |size: f64, weight: u16| {
        TextStyle::sized(size * u)
            .weight(weight)
            .anchor(TextAnchor::Start)
    };
    let line = |content: &str, at: Point, s: TextStyle, color: Color, alpha: f64| {
        text(content, at).style(s).fill(color).opacity(alpha).build()
    };

    let children: Vec<Node> = match l.style {
        LowerThirdStyle::Minimal => {
            let (name_s, title_s) = (style(28.0, 600), style(18.0, 400));
            let height = name_s.size * 1.2 + l.title.map_or(0.0, |_| title_s.size * 1.2);
            let top = bottom - height.max(40.0 * u);
            let tx = left + 24.0 * u;
            let bar = Rect::new(left, top, left + 4.0 * u, top + 40.0 * u);
            let mut out = vec![
                rounded_rect(bar, 2.0 * u, c.accent).build(),
                line(l.name, Point::new(tx, top + name_s.size), name_s.clone(), c.text, 1.0),
            ];
            if let Some(title) = l.title {
                let y = top + name_s.size * 1.2 + title_s.size;
                out.push(line(title, Point::new(tx, y), title_s, c.text, 0.7));
            }
            out
        }
        LowerThirdStyle::Boxed | LowerThirdStyle::Standard => {
            let boxed = l.style == LowerThirdStyle::Boxed;
            let (name_s, title_s, title_alpha, pad, radius) = if boxed {
                (style(24.0, 600), style(16.0, 400), 0.7, (24.0 * u, 16.0 * u), 8.0 * u)
            } else {
                (style(28.0, 600), style(18.0, 400), 0.8, (20.0 * u, 12.0 * u), 4.0 * u)
            };
            let width = l
                .title
                .map_or(0.0, |t| title_s.approx_width(t))
                .max(name_s.approx_width(l.name));
            let height = name_s.size * 1.2 + l.title.map_or(0.0, |_| title_s.size * 1.2 + 4.0 * u);
            let panel = Rect::new(
                left,
                bottom - height - 2.0 * pad.1,
                left + 4.0 * u + width + 2.0 * pad.0,
                bottom,
            );
            let bar = Rect::new(panel.x0, panel.y0, panel.x0 + 4.0 * u, panel.y1);
            let tx = panel.x0 + 4.0 * u + pad.0;
            let name_y = panel.y0 + pad.1 + name_s.size;
            let mut out = vec![
                rounded_rect(panel, radius, c.bg).build(),
                rounded_rect(bar, radius.min(2.0 * u), c.accent).build(),
                line(l.name, Point::new(tx, name_y), name_s.clone(), c.text, 1.0),
            ];
            if let Some(title) = l.title {
                let y = panel.y0 + pad.1 + name_s.size * 1.2 + 4.0 * u + title_s.size;
                out.push(line(title, Point::new(tx, y), title_s, c.text, title_alpha));
            }
            out
        }
        LowerThirdStyle::Slide => {
            let s = style(20.0, 700);
            let pad = (20.0 * u, 12.0 * u);
            let chip = |x0: f64, content: &str, fill: Color, ink: Color, s: TextStyle| {
                let w = s.approx_width(content) + 2.0 * pad.0;
                let r = Rect::new(x0, bottom - s.size - 2.0 * pad.1, x0 + w, bottom);
                let baseline = Point::new(r.x0 + pad.0, r.y1 - pad.1 - s.size * 0.15);
                let label = line(content, baseline, s, ink, 1.0);
                (r.x1, [rounded_rect(r, 4.0 * u, fill).build(), label])
            };
            let (end, name_chip) = chip(left, l.name, c.accent, Color::WHITE, s.clone());
            let mut out = name_chip.to_vec();
            if let Some(title) = l.title {
                let (_, title_chip) = chip(end + 20.0 * u, title, c.bg, c.text, s.weight(400));
                out.extend(title_chip);
            }
            out
        }
    };

    let mut g = group().opacity(opacity);
    if l.style == LowerThirdStyle::Slide {
        g = g.translate(-100.0 * u * (1.0 - enter), 0.0);
    }
    g.children(children).build()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    #[default]
    BottomRight,
}

impl Corner {
    /// Top-left of a `size` box inset `margin` from this corner of `area`.
    pub fn place(self, area: Rect, size: (f64, f64), margin: f64) -> Point {
        let x = match self {
            Self::TopLeft | Self::BottomLeft => area.x0 + margin,
            Self::TopRight | Self::BottomRight => area.x1 - margin - size.0,
        };
        let y = match self {
            Self::TopLeft | Self::TopRight => area.y0 + margin,
            Self::BottomLeft | Self::BottomRight => area.y1 - margin - size.1,
        };
        Point::new(x, y)
    }

    fn is_right(self) -> bool {
        matches!(self, Self::TopRight | Self::BottomRight)
    }
}

/// Station-style logo bug fading in over 20 frames.
#[derive(Clone, Debug)]
pub struct BugLogo {
    /// Mark drawn inside a 100x100 box at the origin.
    pub mark: Node,
    pub corner: Corner,
    pub size: f64,
    pub opacity: f64,
    pub start: f64,
}

impl BugLogo {
    pub fn new(mark: Node) -> Self {
        Self {
            mark,
            corner: Corner::BottomRight,
            size: 60.0,
            opacity: 0.8,
            start: 0.0,
        }
    }
}

/// Initials on a rounded tile, usable as a [`BugLogo`] mark.
pub fn monogram(initials: &str, fill: Color, ink: Color) -> Node {
    group()
        .child(rounded_rect(Rect::new(0.0, 0.0, 100.0, 100.0), 18.0, fill))
        .child(
            text(initials, Point::new(50.0, 50.0))
                .style(TextStyle::sized(44.0).weight(800))
                .fill(ink)
                .centered_v(),
        )
        .build()
}

pub fn bug_logo(ctx: &FrameCtx, b: &BugLogo) -> Node {
    let u = ctx.unit();
    let side = b.size * u;
    let at = b.corner.place(ctx.canvas.rect(), (side, side), 30.0 * u);
    group()
        .opacity(b.opacity * ctx.progress(b.start, 20.0))
        .translate(at.x, at.y)
        .transform(Affine::scale(side / 100.0))
        .child(b.mark.clone())
        .build()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampFormat {
    #[default]
    Time,
    Date,
    DateTime,
    Frames,
}

/// Burned-in clock. Wall time is `clock_start` plus the timeline position, so renders repeat.
#[derive(Clone, Copy, Debug)]
pub struct Timestamp {
    pub format: TimestampFormat,
    pub color: Color,
    pub size: f64,
    pub corner: Corner,
    pub clock_start: NaiveDateTime,
}

impl Default for Timestamp {
    fn default() -> Self {
        Self {
            format: TimestampFormat::Time,
            color: Color::WHITE,
            size: 20.0,
            corner: Corner::TopLeft,
            clock_start: NaiveDateTime::default(),
        }
    }
}

/// Text shown by `t` at `ctx`.
pub fn timestamp_label(ctx: &FrameCtx, t: &Timestamp) -> String {
    let elapsed = TimeDelta::try_milliseconds((ctx.secs().max(0.0) * 1000.0).round() as i64)
        .unwrap_or(TimeDelta::zero());
    let now = t.clock_start.checked_add_signed(elapsed).unwrap_or(t.clock_start);
    match t.format {
        TimestampFormat::Time => now.format("%H:%M:%S").to_string(),
        TimestampFormat::Date => now.format("%-m/%-d/%Y").to_string(),
        TimestampFormat::DateTime => now.format("%-m/%-d/%Y %H:%M:%S").to_string(),
        TimestampFormat::Frames => format!("Frame: {}", ctx.frame_index().0),
    }
}

pub fn timestamp(ctx: &FrameCtx, t: &Timestamp) -> Node {
    let u = ctx.unit();
    let size = t.size * u;
    let label = timestamp_label(ctx, t);
    let style = TextStyle::mono(size);
    let box_size = (style.approx_width(&label), size);
    let at = t.corner.place(ctx.canvas.rect(), box_size, 30.0 * u);
    let (x, anchor) = if t.corner.is_right() {
        (at.x + box_size.0, TextAnchor::End)
    } else {
        (at.x, TextAnchor::Start)
    };
    text(label, Point::new(x, at.y + size * 0.85))
        .style(style.anchor(anchor))
        .fill(t.color)
        .opacity(0.8)
        .build()
}

#[cfg(test)]
#[path = "../../tests/unit/components/overlay.rs"]
mod tests;
