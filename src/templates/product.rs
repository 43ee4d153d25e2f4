use serde::{Deserialize, Serialize};

use crate::{
    animation::{ease::Ease, interpolate::tween},
    assets::color::{Color, gradient},
    components::{
        overlay::{LowerThird, LowerThirdStyle, lower_third},
        shapes::rounded_rect,
        transitions::Transition,
    },
    composition::{
        ctx::FrameCtx,
        series::Series,
        template::{Template, TemplateInfo},
    },
    foundation::{
        core::{Affine, Canvas, Fps, Point, Rect},
        error::StudioResult,
    },
    scene::{
        dsl::{SceneBuilder, group, rect, text},
        model::{GradientStop, Node, Paint, Scene, Stroke},
    },
    templates::{PillStyle, pill},
};

/// Three-part launch: teaser, product reveal and call to action.
pub struct ProductAnnouncement;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct ProductAnnouncementProps {
    pub intro: String,
    pub product: String,
    pub tagline: String,
    pub headline: String,
    pub primary_cta: String,
    pub secondary_cta: String,
    /// Named gradient behind the teaser.
    pub gradient: String,
    /// Name shown in a lower third during the product reveal.
    pub presenter: Option<String>,
    pub presenter_title: Option<String>,
}

impl Default for ProductAnnouncementProps {
    fn default() -> Self {
        Self {
            intro: "Introducing".to_owned(),
            product: "Product Name".to_owned(),
            tagline: "The future of productivity".to_owned(),
            headline: "Available Now".to_owned(),
            primary_cta: "Get Started".to_owned(),
            secondary_cta: "Learn More".to_owned(),
            gradient: "primary".to_owned(),
            presenter: None,
            presenter_title: None,
        }
    }
}

const BLUE: Color = Color::from_u32(0x3b82f6);
const DARK: Color = Color::from_u32(0x0a0a0a);
/// Lower third enters once the reveal has settled.
const PRESENTER_START: f64 = 110.0;

fn timeline() -> Series {
    Series::new()
        .then(100)
        .then_with(Transition::Fade, 20, 100)
        .then_with(Transition::Fade, 20, 140)
}

fn teaser(ctx: &FrameCtx, p: &ProductAnnouncementProps) -> Node {
    let u = ctx.unit();
    let rise = tween(ctx.frame, (0.0, 30.0), (50.0, 0.0), Ease::OutCubic) * u;
    group()
        .child(rect(ctx.canvas.rect(), gradient(&p.gradient)))
        .child(
            text(p.intro.as_str(), ctx.center())
                .size(80.0 * u)
                .weight(800)
                .fill(Color::WHITE)
                .opacity(ctx.progress(0.0, 30.0))
                .centered_v()
                .build()
                .with_transform(Affine::translate((0.0, rise))),
        )
        .build()
}

fn reveal(ctx: &FrameCtx, p: &ProductAnnouncementProps) -> Node {
    let u = ctx.unit();
    let c = ctx.center();
    let scale = tween(ctx.frame, (0.0, 30.0), (0.8, 1.0), Ease::OutCubic);
    let side = 400.0 * u;
    let box_c = Point::new(c.x, c.y - 90.0 * u);
    let square = Rect::from_center_size(box_c, (side, side));
    let paint = Paint::linear(
        135.0,
        vec![
            GradientStop::new(0.0, BLUE),
            GradientStop::new(1.0, Color::from_u32(0x8b5cf6)),
        ],
    );
    group()
        .child(rect(ctx.canvas.rect(), DARK))
        .child(
            group()
                .scale_about(box_c, scale)
                .child(rounded_rect(square, 24.0 * u, paint)),
        )
        .child(
            text(p.product.as_str(), Point::new(c.x, square.y1 + 40.0 * u + 64.0 * u))
                .size(64.0 * u)
                .weight(700)
                .fill(Color::WHITE),
        )
        .child(
            text(p.tagline.as_str(), Point::new(c.x, square.y1 + 160.0 * u))
                .size(28.0 * u)
                .fill(Color::rgba(1.0, 1.0, 1.0, 0.7)),
        )
        .build()
}

fn call_to_action(ctx: &FrameCtx, p: &ProductAnnouncementProps) -> Node {
    let u = ctx.unit();
    let c = ctx.center();
    let base = PillStyle {
        size: 24.0 * u,
        pad_x: 48.0 * u,
        height: 24.0 * u + 32.0 * u,
        radius: Some(12.0 * u),
        fill: BLUE.into(),
        ..PillStyle::default()
    };
    let ghost = PillStyle {
        fill: Color::TRANSPARENT.into(),
        text_color: BLUE,
        outline: Some(Stroke::new(BLUE, 2.0 * u)),
        ..base.clone()
    };
    let (w1, w2) = (base.width(&p.primary_cta), ghost.width(&p.secondary_cta));
    let gap = 20.0 * u;
    let left = c.x - (w1 + gap + w2) / 2.0;
    let row_y = c.y + 60.0 * u;

    group()
        .child(rect(ctx.canvas.rect(), DARK))
        .child(
            text(p.headline.as_str(), Point::new(c.x, c.y - 40.0 * u))
                .size(56.0 * u)
                .weight(700)
                .fill(Color::WHITE),
        )
        .child(pill(Point::new(left + w1 / 2.0, row_y), &p.primary_cta, &base))
        .child(pill(
            Point::new(left + w1 + gap + w2 / 2.0, row_y),
            &p.secondary_cta,
            &ghost,
        ))
        .build()
}

impl Template for ProductAnnouncement {
    type Props = ProductAnnouncementProps;

    fn info(&self) -> TemplateInfo {
        TemplateInfo {
            id: "product-announcement",
            name: "ProductAnnouncement",
            description: "Teaser, product reveal and call to action joined by crossfades",
            canvas: Canvas::new(1920, 1080),
            fps: Fps::whole(30),
            duration: timeline().total_frames(),
        }
    }

    fn draw(&self, ctx: &FrameCtx, p: &Self::Props) -> StudioResult<Scene> {
        let body = timeline().compose(ctx, |i, local| {
            Ok(match i {
                0 => teaser(local, p),
                1 => reveal(local, p),
                _ => call_to_action(local, p),
            })
        })?;
        let strap = p.presenter.as_deref().map(|name| {
            let l = LowerThird {
                title: p.presenter_title.as_deref(),
                style: LowerThirdStyle::Boxed,
                start: PRESENTER_START,
                duration: 120.0,
                ..LowerThird::new(name)
            };
            lower_third(ctx, &l)
        });
        Ok(SceneBuilder::new(ctx.canvas)
            .background(DARK)
            .node(body)
            .maybe(strap)
            .build())
    }
}
