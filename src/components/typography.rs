//! Animated text components.

use crate::{
    animation::{
        ease::Ease,
        interpolate::{InterpolateOpts, interpolate},
        spring::SpringConfig,
    },
    assets::color::Color,
    components::shapes::rounded_rect,
    composition::ctx::FrameCtx,
    foundation::core::{Point, Rect},
    foundation::error::StudioResult,
    scene::{
        dsl::{group, rect, text},
        model::{Node, TextAnchor, TextStyle},
    },
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorStyle {
    Block,
    #[default]
    Line,
    Underscore,
}

/// Text revealed one character every `frames_per_char` frames.
#[derive(Clone, Debug)]
pub struct Typewriter<'a> {
    pub text: &'a str,
    /// Baseline start of the first line.
    pub origin: Point,
    pub style: TextStyle,
    pub color: Color,
    pub frames_per_char: f64,
    pub cursor: Option<CursorStyle>,
    pub cursor_color: Color,
    pub start: f64,
    pub line_height: f64,
}

impl<'a> Typewriter<'a> {
    pub fn new(text: &'a str, origin: Point, size: f64) -> Self {
        Self {
            text,
            origin,
            style: TextStyle::mono(size),
            color: Color::from_u32(0x00ff88),
            frames_per_char: 3.0,
            cursor: Some(CursorStyle::Line),
            cursor_color: Color::from_u32(0x00ff88),
            start: 0.0,
            line_height: 1.4,
        }
    }
}

/// Characters of `total` visible at `frame`.
pub fn chars_revealed(frame: f64, start: f64, frames_per_char: f64, total: usize) -> usize {
    if frames_per_char <= 0.0 {
        return total;
    }
    let n = ((frame - start) / frames_per_char).floor();
    if n <= 0.0 { 0 } else { (n as usize).min(total) }
}

/// Cursor opacity blinking `1 -> 0 -> 1` every 30 frames.
pub fn cursor_blink(frame: f64, start: f64) -> f64 {
    let local = (frame - start).max(0.0) % 30.0;
    interpolate(local, &[0.0, 15.0, 30.0], &[1.0, 0.0, 1.0], InterpolateOpts::clamped())
        .unwrap_or(1.0)
}

pub fn typewriter(ctx: &FrameCtx, p: &Typewriter<'_>) -> Node {
    let total = p.text.chars().count();
    let n = chars_revealed(ctx.frame, p.start, p.frames_per_char, total);
    let shown: String = p.text.chars().take(n).collect();
    let style = p.style.clone().anchor(TextAnchor::Start);
    let step = style.size * p.line_height;

    let lines: Vec<&str> = shown.split('\n').collect();
    let mut children: Vec<Node> = lines
        .iter()
        .enumerate()
        .filter(|(_, l)| !l.is_empty())
        .map(|(i, line)| {
            text(*line, Point::new(p.origin.x, p.origin.y + step * i as f64))
                .style(style.clone())
                .fill(p.color)
                .build()
        })
        .collect();

    if let Some(kind) = p.cursor
        && n < total
    {
        let last = lines.last().copied().unwrap_or_default();
        let x = p.origin.x + style.approx_width(last) + 4.0;
        let baseline = p.origin.y + step * (lines.len().saturating_sub(1)) as f64;
        let s = style.size;
        let r = match kind {
            CursorStyle::Block => Rect::new(x, baseline - s * 0.8, x + s * 0.6, baseline + s * 0.1),
            CursorStyle::Line => Rect::new(x, baseline - s * 0.75, x + 2.0, baseline + s * 0.05),
            CursorStyle::Underscore => Rect::new(x, baseline + 2.0, x + s * 0.8, baseline + 5.0),
        };
        children.push(
            rect(r, p.cursor_color)
                .opacity(cursor_blink(ctx.frame, p.start))
                .build(),
        );
    }

    group().children(children).build()
}

/// RGB-split title with deterministic per-frame jitter.
#[derive(Clone, Debug)]
pub struct Glitch<'a> {
    pub text: &'a str,
    /// Baseline position; meaning follows `style.anchor`.
    pub pos: Point,
    pub style: TextStyle,
    pub color: Color,
    /// Constant channel separation in pixels.
    pub split: f64,
    /// Maximum extra jitter in pixels.
    pub intensity: f64,
    /// Chance per frame and channel that the jitter fires.
    pub frequency: f64,
    pub seed: u64,
}

impl<'a> Glitch<'a> {
    pub fn new(text: &'a str, pos: Point, size: f64) -> Self {
        Self {
            text,
            pos,
            style: TextStyle::sized(size).weight(800),
            color: Color::WHITE,
            split: 3.0,
            intensity: 12.0,
            frequency: 0.15,
            seed: 7,
        }
    }
}

/// Horizontal jitter for one channel of a glitch at the current frame.
pub fn glitch_offset(ctx: &FrameCtx, seed: u64, frequency: f64, intensity: f64) -> f64 {
    if ctx.random(seed.wrapping_mul(2)) > 1.0 - frequency {
        (ctx.random(seed.wrapping_mul(2) + 1) - 0.5) * 2.0 * intensity
    } else {
        0.0
    }
}

pub fn glitch_text(ctx: &FrameCtx, g: &Glitch<'_>) -> Node {
    let red = glitch_offset(ctx, g.seed, g.frequency, g.intensity);
    let blue = glitch_offset(ctx, g.seed.wrapping_add(101), g.frequency, g.intensity);
    let layer = |dx: f64, color: Color| {
        text(g.text, Point::new(g.pos.x + dx, g.pos.y))
            .style(g.style.clone())
            .fill(color)
            .build()
    };

    group()
        .child(layer(-g.split + red, Color::rgba(1.0, 0.0, 0.2, 0.8)))
        .child(layer(g.split + blue, Color::rgba(0.0, 0.6, 1.0, 0.8)))
        .child(layer(0.0, g.color))
        .build()
}

/// Reveal `child` by sliding it up from under the `mask` edge with a spring.
pub fn slide_up_reveal(
    ctx: &FrameCtx,
    child: Node,
    mask: Rect,
    delay: f64,
    config: SpringConfig,
) -> StudioResult<Node> {
    let p = ctx.spring(delay, config)?;
    let dy = (1.0 - p) * mask.height() * 1.1;
    Ok(group()
        .clip(mask)
        .child(group().translate(0.0, dy).child(child))
        .build())
}

/// Fade in while rising `distance` pixels.
pub fn fade_up(ctx: &FrameCtx, child: Node, start: f64, duration: f64, distance: f64) -> Node {
    let p = ctx.eased(start, duration, Ease::OutCubic);
    group()
        .translate(0.0, (1.0 - p) * distance)
        .opacity(ctx.progress(start, duration))
        .child(child)
        .build()
}

/// Grow from half size about `pivot` while fading in.
pub fn scale_in(ctx: &FrameCtx, child: Node, pivot: Point, start: f64, duration: f64) -> Node {
    let p = ctx.eased(start, duration, Ease::OutCubic);
    group()
        .scale_about(pivot, 0.5 + 0.5 * p)
        .opacity(p)
        .child(child)
        .build()
}

/// Sharpen from `max_blur` while fading in.
pub fn blur_in(ctx: &FrameCtx, child: Node, start: f64, duration: f64, max_blur: f64) -> Node {
    let p = ctx.eased(start, duration, Ease::OutQuad);
    group()
        .blur((1.0 - p) * max_blur)
        .opacity(p)
        .child(child)
        .build()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitMode {
    #[default]
    Word,
    Char,
}

/// Staggered per-word (or per-character) reveal, wrapped and centered on `center`.
#[derive(Clone, Debug)]
pub struct SplitText<'a> {
    pub text: &'a str,
    /// Baseline center of the first line.
    pub center: Point,
    pub style: TextStyle,
    pub color: Color,
    pub mode: SplitMode,
    pub stagger: f64,
    pub duration: f64,
    pub start: f64,
    pub max_width: Option<f64>,
    pub line_height: f64,
}

impl<'a> SplitText<'a> {
    pub fn new(text: &'a str, center: Point, size: f64) -> Self {
        Self {
            text,
            center,
            style: TextStyle::sized(size).weight(600),
            color: Color::WHITE,
            mode: SplitMode::Word,
            stagger: 5.0,
            duration: 30.0,
            start: 0.0,
            max_width: None,
            line_height: 1.3,
        }
    }
}

/// Greedy word wrap using the approximate advance of `style`.
pub fn wrap_text(content: &str, style: &TextStyle, max_width: f64) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in content.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_owned()
        } else {
            format!("{current} {word}")
        };
        if !current.is_empty() && style.approx_width(&candidate) > max_width {
            lines.push(std::mem::replace(&mut current, word.to_owned()));
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

pub fn split_words(ctx: &FrameCtx, s: &SplitText<'_>) -> Node {
    let style = s.style.clone().anchor(TextAnchor::Start);
    let space = style.size * 0.25;
    let lines = match s.max_width {
        Some(w) => wrap_text(s.text, &style, w),
        None => vec![s.text.to_owned()],
    };

    let mut children = Vec::new();
    let mut index = 0usize;
    for (li, line) in lines.iter().enumerate() {
        let items: Vec<String> = match s.mode {
            SplitMode::Word => line.split_whitespace().map(str::to_owned).collect(),
            SplitMode::Char => line.chars().map(String::from).collect(),
        };
        let gap = if s.mode == SplitMode::Word { space } else { 0.0 };
        let widths: Vec<f64> = items.iter().map(|i| style.approx_width(i)).collect();
        let total = widths.iter().sum::<f64>() + gap * items.len().saturating_sub(1) as f64;
        let y = s.center.y + style.size * s.line_height * li as f64;
        let mut x = s.center.x - total / 2.0;

        for (item, w) in items.iter().zip(&widths) {
            let p = ctx.progress(s.start + index as f64 * s.stagger, s.duration);
            if p > 0.0 && !item.trim().is_empty() {
                children.push(
                    text(item.as_str(), Point::new(x, y + (1.0 - p) * 20.0))
                        .style(style.clone())
                        .fill(s.color)
                        .opacity(p)
                        .build(),
                );
            }
            x += w + gap;
            index += 1;
        }
    }
    group().children(children).build()
}

/// Timed caption in seconds.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Caption {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

pub fn active_caption(captions: &[Caption], secs: f64) -> Option<&Caption> {
    captions.iter().find(|c| secs >= c.start && secs < c.end)
}

/// Active caption on a translucent pill, centered on `baseline_center`.
pub fn caption(
    ctx: &FrameCtx,
    captions: &[Caption],
    baseline_center: Point,
    style: &TextStyle,
) -> Option<Node> {
    let secs = ctx.secs();
    let c = active_caption(captions, secs)?;
    let fade = ctx.frames(0.2);
    let start = ctx.frames(c.start);
    let end = ctx.frames(c.end);
    let opacity = ctx
        .progress(start, fade)
        .min(1.0 - ctx.progress(end - fade, fade));

    let style = style.clone().anchor(TextAnchor::Middle);
    let w = style.approx_width(&c.text) + style.size * 1.2;
    let h = style.size * 1.6;
    let pill = Rect::from_center_size(
        Point::new(baseline_center.x, baseline_center.y - style.size * 0.35),
        (w, h),
    );
    Some(
        group()
            .opacity(opacity)
            .child(rounded_rect(pill, h / 4.0, Color::rgba(0.0, 0.0, 0.0, 0.7)))
            .child(
                text(c.text.as_str(), baseline_center)
                    .style(style)
                    .fill(Color::WHITE),
            )
            .build(),
    )
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    Str,
    Comment,
    Function,
    Number,
    Text,
}

const KEYWORDS: &[&str] = &[
    "async", "await", "class", "const", "default", "else", "enum", "export", "fn", "for",
    "function", "if", "impl", "import", "interface", "let", "match", "mut", "pub", "return",
    "struct", "type", "use", "var", "while",
];

/// Split one line of code into colored tokens.
pub fn highlight_line(line: &str) -> Vec<(TokenKind, String)> {
    let chars: Vec<char> = line.chars().collect();
    let mut out: Vec<(TokenKind, String)> = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if c == '/' && chars.get(i + 1) == Some(&'/') {
            out.push((TokenKind::Comment, chars[i..].iter().collect()));
            break;
        }
        if matches!(c, '"' | '\'' | '`') {
            let end = chars[i + 1..]
                .iter()
                .position(|&d| d == c)
                .map_or(chars.len(), |p| i + 1 + p + 1);
            out.push((TokenKind::Str, chars[i..end].iter().collect()));
            i = end;
            continue;
        }
        if c.is_ascii_digit() {
            let end = chars[i..]
                .iter()
                .position(|d| !(d.is_ascii_alphanumeric() || *d == '.' || *d == '_'))
                .map_or(chars.len(), |p| i + p);
            out.push((TokenKind::Number, chars[i..end].iter().collect()));
            i = end;
            continue;
        }
        if c.is_alphabetic() || c == '_' {
            let end = chars[i..]
                .iter()
                .position(|d| !(d.is_alphanumeric() || *d == '_'))
                .map_or(chars.len(), |p| i + p);
            let word: String = chars[i..end].iter().collect();
            let after_decl = matches!(
                out.iter().rev().find(|(k, t)| !(*k == TokenKind::Text && t.trim().is_empty())),
                Some((TokenKind::Keyword, kw)) if kw == "fn" || kw == "function"
            );
            let kind = if KEYWORDS.contains(&word.as_str()) {
                TokenKind::Keyword
            } else if after_decl || chars.get(end) == Some(&'(') {
                TokenKind::Function
            } else {
                TokenKind::Text
            };
            out.push((kind, word));
            i = end;
            continue;
        }
        match out.last_mut() {
            Some((TokenKind::Text, t)) if !t.chars().any(char::is_alphanumeric) => t.push(c),
            _ => out.push((TokenKind::Text, c.to_string())),
        }
        i += 1;
    }
    out
}

fn token_color(kind: TokenKind) -> Color {
    match kind {
        TokenKind::Keyword => Color::from_u32(0xff7b72),
        TokenKind::Str => Color::from_u32(0xa5d6ff),
        TokenKind::Comment => Color::from_u32(0x8b949e),
        TokenKind::Function => Color::from_u32(0xd2a8ff),
        TokenKind::Number => Color::from_u32(0x79c0ff),
        TokenKind::Text => Color::WHITE,
    }
}

/// Editor-style code panel typed out character by character.
#[derive(Clone, Debug)]
pub struct CodeBlock<'a> {
    pub code: &'a str,
    /// Top-left corner of the panel.
    pub origin: Point,
    pub width: f64,
    pub size: f64,
    pub frames_per_char: f64,
    pub start: f64,
}

const CODE_PAD: f64 = 24.0;

impl CodeBlock<'_> {
    /// Panel bounds for the whole snippet, typed or not.
    pub fn panel(&self) -> Rect {
        let lines = self.code.lines().count().max(1);
        let height = CODE_PAD * 2.0 + self.size * 1.5 * lines as f64;
        Rect::new(
            self.origin.x,
            self.origin.y,
            self.origin.x + self.width,
            self.origin.y + height,
        )
    }
}

pub fn code_block(ctx: &FrameCtx, b: &CodeBlock<'_>) -> Node {
    let pad = CODE_PAD;
    let line_h = b.size * 1.5;
    let char_w = b.size * 0.6;
    let gutter = char_w * 4.0;
    let lines: Vec<&str> = b.code.lines().collect();
    let panel = b.panel();

    let total: usize = lines.iter().map(|l| l.chars().count() + 1).sum();
    let mut budget = chars_revealed(ctx.frame, b.start, b.frames_per_char, total);
    let mono = TextStyle::mono(b.size);

    let mut children = vec![rounded_rect(panel, 8.0, Color::from_u32(0x1e1e1e)).build()];
    let mut cursor_found = false;
    for (li, line) in lines.iter().enumerate() {
        let top = b.origin.y + pad + line_h * li as f64;
        let baseline = top + line_h * 0.72;
        let len = line.chars().count();
        if !cursor_found && budget <= len {
            cursor_found = true;
            children.push(
                rect(
                    Rect::new(panel.x0, top, panel.x1, top + line_h),
                    Color::rgba(1.0, 1.0, 1.0, 0.05),
                )
                .build(),
            );
        }
        children.push(
            text(format!("{}", li + 1), Point::new(b.origin.x + pad + gutter - char_w, baseline))
                .style(mono.clone().anchor(TextAnchor::End))
                .fill(Color::from_u32(0x6e7681))
                .build(),
        );

        let mut x = b.origin.x + pad + gutter + char_w;
        let mut left = budget.min(len);
        for (kind, tok) in highlight_line(line) {
            if left == 0 {
                break;
            }
            let n = tok.chars().count();
            let shown: String = tok.chars().take(left).collect();
            if !shown.trim().is_empty() {
                children.push(
                    text(shown, Point::new(x, baseline))
                        .style(mono.clone())
                        .fill(token_color(kind))
                        .build(),
                );
            }
            x += char_w * n as f64;
            left = left.saturating_sub(n);
        }
        budget = budget.saturating_sub(len + 1);
    }

    group().children(children).build()
}

#[cfg(test)]
#[path = "../../tests/unit/components/typography.rs"]
mod tests;
