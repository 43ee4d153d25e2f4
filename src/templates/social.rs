//! Vertical social-media templates.

use serde::{Deserialize, Serialize};

use crate::{
    assets::color::Color,
    components::{
        overlay::{BugLogo, Corner, bug_logo, monogram},
        shapes::{circle, polyline_closed, rounded_rect},
        typography::wrap_text,
    },
    composition::{
        ctx::FrameCtx,
        template::{Template, TemplateInfo},
    },
    foundation::{
        core::{BezPath, Canvas, Fps, Point, Rect},
        error::StudioResult,
    },
    scene::{
        dsl::{SceneBuilder, group, rect, shape, text},
        model::{GradientStop, Node, Paint, Scene, Stroke, TextAnchor, TextStyle},
    },
    templates::{PillStyle, pill},
};

/// Gradient orb, headline and call-to-action pill.
pub struct TikTokIntro;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct TikTokIntroProps {
    pub title: String,
    pub cta: String,
    pub accent: Color,
}

impl Default for TikTokIntroProps {
    fn default() -> Self {
        Self {
            title: "SWIPE UP".to_owned(),
            cta: "Follow for more".to_owned(),
            accent: Color::from_u32(0xff0050),
        }
    }
}

impl Template for TikTokIntro {
    type Props = TikTokIntroProps;

    fn info(&self) -> TemplateInfo {
        TemplateInfo {
            id: "tiktok-intro",
            name: "TikTokIntro",
            description: "Vertical intro with a growing gradient orb and a call to action",
            canvas: Canvas::new(1080, 1920),
            fps: Fps::whole(30),
            duration: 150,
        }
    }

    fn draw(&self, ctx: &FrameCtx, p: &Self::Props) -> StudioResult<Scene> {
        let u = ctx.unit();
        let scale = 0.5 + 0.5 * ctx.progress(0.0, 30.0);
        let opacity = ctx.progress(0.0, 15.0);
        let c = ctx.center();

        let orb_r = 150.0 * u;
        let title_size = 120.0 * u;
        let pill_h = 52.0 * u;
        let column = orb_r * 2.0 + 40.0 * u + title_size * 1.2 + 20.0 * u + pill_h;
        let top = c.y - column / 2.0;
        let orb_c = Point::new(c.x, top + orb_r);
        let title_y = top + orb_r * 2.0 + 40.0 * u + title_size * 0.95;
        let pill_c = Point::new(c.x, top + column - pill_h / 2.0);

        let orb_paint = Paint::linear(
            135.0,
            vec![
                GradientStop::new(0.0, p.accent),
                GradientStop::new(1.0, Color::from_u32(0xff00a0)),
            ],
        );
        let orb = group()
            .scale_about(orb_c, scale)
            .opacity(opacity)
            .child(circle(orb_c, orb_r, orb_paint));

        let title = text(p.title.as_str(), Point::new(c.x, title_y))
            .family("Bebas Neue, Oswald, Impact, sans-serif")
            .size(title_size)
            .weight(700)
            .letter_spacing(4.0 * u)
            .fill(Color::WHITE)
            .opacity(opacity);

        let cta = pill(
            pill_c,
            &p.cta,
            &PillStyle {
                size: 24.0 * u,
                pad_x: 32.0 * u,
                height: pill_h,
                fill: p.accent.into(),
                ..PillStyle::default()
            },
        )
        .with_opacity(opacity);

        Ok(SceneBuilder::new(ctx.canvas)
            .background(Color::BLACK)
            .node(orb)
            .node(title)
            .node(cta)
            .build())
    }
}

/// Shorts-style overlay: channel row, description, action buttons and a progress bar.
pub struct YouTubeShorts;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct YouTubeShortsProps {
    pub channel: String,
    pub handle: String,
    pub description: String,
    pub likes: String,
    pub comments: String,
    /// Initials for a channel bug in the top-right corner.
    pub bug: Option<String>,
}

impl Default for YouTubeShortsProps {
    fn default() -> Self {
        Self {
            channel: "Channel Name".to_owned(),
            handle: "@channelname".to_owned(),
            description: "Check out this amazing YouTube Shorts video! Don't forget to like and \
                          subscribe for more content."
                .to_owned(),
            likes: "12K".to_owned(),
            comments: "456".to_owned(),
            bug: None,
        }
    }
}

const YT_RED: Color = Color::from_u32(0xff0000);

fn heart_path(c: Point, s: f64) -> BezPath {
    let mut p = BezPath::new();
    p.move_to((c.x, c.y + 0.35 * s));
    p.curve_to(
        (c.x - 0.6 * s, c.y - 0.05 * s),
        (c.x - 0.35 * s, c.y - 0.55 * s),
        (c.x, c.y - 0.2 * s),
    );
    p.curve_to(
        (c.x + 0.35 * s, c.y - 0.55 * s),
        (c.x + 0.6 * s, c.y - 0.05 * s),
        (c.x, c.y + 0.35 * s),
    );
    p.close_path();
    p
}

fn bubble_icon(c: Point, s: f64) -> Node {
    let body = Rect::from_center_size(Point::new(c.x, c.y - 0.05 * s), (0.8 * s, 0.55 * s));
    let tail = polyline_closed(&[
        Point::new(c.x - 0.2 * s, body.y1 - 1.0),
        Point::new(c.x - 0.3 * s, body.y1 + 0.2 * s),
        Point::new(c.x, body.y1 - 1.0),
    ]);
    group()
        .child(rounded_rect(body, 0.12 * s, Color::WHITE))
        .child(shape(tail).fill(Color::WHITE))
        .build()
}

fn share_icon(c: Point, s: f64) -> Node {
    let mut p = BezPath::new();
    p.move_to((c.x - 0.35 * s, c.y + 0.3 * s));
    p.quad_to((c.x - 0.3 * s, c.y - 0.1 * s), (c.x + 0.1 * s, c.y - 0.1 * s));
    p.move_to((c.x - 0.05 * s, c.y - 0.3 * s));
    p.line_to((c.x + 0.35 * s, c.y - 0.1 * s));
    p.line_to((c.x - 0.05 * s, c.y + 0.1 * s));
    shape(p)
        .stroke(Stroke::new(Color::WHITE, 0.09 * s).round())
        .build()
}

impl Template for YouTubeShorts {
    type Props = YouTubeShortsProps;

    fn info(&self) -> TemplateInfo {
        TemplateInfo {
            id: "youtube-shorts",
            name: "YouTubeShorts",
            description: "Shorts overlay with channel info, description and actions",
            canvas: Canvas::new(1080, 1920),
            fps: Fps::whole(30),
            duration: 180,
        }
    }

    fn draw(&self, ctx: &FrameCtx, p: &Self::Props) -> StudioResult<Scene> {
        let u = ctx.unit();
        let (w, h) = (f64::from(ctx.canvas.width), f64::from(ctx.canvas.height));
        let pad = 40.0 * u;
        let intro = (ctx.frame / 60.0).clamp(0.0, 1.0);
        let muted = Color::rgba(1.0, 1.0, 1.0, 0.7);

        // Column is laid out bottom-up from the padding edge.
        let mut y = h - pad - 12.0 * u;
        let action = 50.0 * u;
        let labels_y = y;
        let icons_y = labels_y - 14.0 * u - 8.0 * u - action / 2.0;
        let actions = [
            (p.likes.as_str(), shape(heart_path(Point::ZERO, action * 0.55)).fill(YT_RED).build()),
            (p.comments.as_str(), bubble_icon(Point::ZERO, action * 0.6)),
            ("Share", share_icon(Point::ZERO, action * 0.6)),
        ];
        let mut row = Vec::new();
        for (i, (label, icon)) in actions.into_iter().enumerate() {
            let cx = pad + action / 2.0 + i as f64 * (action + 20.0 * u);
            row.push(circle(Point::new(cx, icons_y), action / 2.0, Color::rgba(1.0, 1.0, 1.0, 0.1)).build());
            row.push(group().translate(cx, icons_y).child(icon).build());
            row.push(
                text(label, Point::new(cx, labels_y))
                    .size(14.0 * u)
                    .fill(muted)
                    .build(),
            );
        }
        y = icons_y - action / 2.0 - 20.0 * u;

        let desc_style = TextStyle::sized(32.0 * u).anchor(TextAnchor::Start);
        let lines = wrap_text(&p.description, &desc_style, w - pad * 2.0);
        let line_h = 32.0 * u * 1.4;
        let first_line = y - line_h * (lines.len().saturating_sub(1)) as f64 - 8.0 * u;
        let description: Vec<Node> = lines
            .iter()
            .enumerate()
            .map(|(i, l)| {
                text(l.as_str(), Point::new(pad, first_line + line_h * i as f64))
                    .style(desc_style.clone())
                    .fill(Color::WHITE)
                    .build()
            })
            .collect();
        y = first_line - 32.0 * u - 20.0 * u;

        let avatar = 60.0 * u;
        let row_c = y - avatar / 2.0;
        let header = group()
            .child(circle(Point::new(pad + avatar / 2.0, row_c), avatar / 2.0, YT_RED))
            .child(
                text(p.channel.as_str(), Point::new(pad + avatar + 16.0 * u, row_c - 4.0 * u))
                    .size(24.0 * u)
                    .weight(600)
                    .anchor(TextAnchor::Start)
                    .fill(Color::WHITE),
            )
            .child(
                text(p.handle.as_str(), Point::new(pad + avatar + 16.0 * u, row_c + 20.0 * u))
                    .size(16.0 * u)
                    .anchor(TextAnchor::Start)
                    .fill(muted),
            )
            .child({
                let style = PillStyle {
                    size: 18.0 * u,
                    pad_x: 24.0 * u,
                    height: 40.0 * u,
                    fill: YT_RED.into(),
                    ..PillStyle::default()
                };
                let half = style.width("SUBSCRIBE") / 2.0;
                pill(Point::new(w - pad - half, row_c), "SUBSCRIBE", &style)
            });

        let content = group()
            .translate(0.0, (1.0 - intro) * 60.0 * u)
            .opacity(intro)
            .child(header)
            .children(description)
            .children(row);

        let played = ctx.frame / ctx.duration.max(1) as f64;
        let track = Rect::new(0.0, h - 6.0 * u, w, h);
        let background = Paint::linear(
            180.0,
            vec![
                GradientStop::new(0.0, Color::from_u32(0x1a1a1a)),
                GradientStop::new(1.0, Color::from_u32(0x0a0a0a)),
            ],
        );

        let bug = p.bug.as_deref().map(|initials| {
            let logo = BugLogo {
                corner: Corner::TopRight,
                size: 72.0,
                start: 30.0,
                ..BugLogo::new(monogram(initials, YT_RED, Color::WHITE))
            };
            bug_logo(ctx, &logo)
        });

        Ok(SceneBuilder::new(ctx.canvas)
            .background(background)
            .maybe(bug)
            .node(content)
            .node(rect(track, Color::rgba(1.0, 1.0, 1.0, 0.2)))
            .node(rect(
                Rect::new(0.0, track.y0, w * played.clamp(0.0, 1.0), track.y1),
                YT_RED,
            ))
            .build())
    }
}
