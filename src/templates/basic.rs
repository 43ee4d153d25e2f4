//! Minimal text templates.

use serde::{Deserialize, Serialize};

use crate::{
    animation::{ease::Ease, interpolate::tween},
    assets::color::{Color, gradient},
    components::glow::{NeonText, PulsingOrb, neon_text, pulsing_orb},
    composition::{
        ctx::FrameCtx,
        template::{Template, TemplateInfo},
    },
    foundation::{
        core::{Canvas, Fps, Point},
        error::StudioResult,
    },
    scene::{
        dsl::{SceneBuilder, group, text},
        model::{Paint, Scene},
    },
};

/// Static centered headline.
pub struct HelloWorld;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct HelloWorldProps {
    pub text: String,
    pub background: Color,
    pub color: Color,
    /// Outlined neon headline over a pulsing orb, glowing up over two seconds.
    pub neon: bool,
}

impl Default for HelloWorldProps {
    fn default() -> Self {
        Self {
            text: "Hello World".to_owned(),
            background: Color::from_u32(0x0a0a0a),
            color: Color::WHITE,
            neon: false,
        }
    }
}

impl Template for HelloWorld {
    type Props = HelloWorldProps;

    fn info(&self) -> TemplateInfo {
        TemplateInfo {
            id: "hello-world",
            name: "HelloWorld",
            description: "Centered headline on a dark background",
            canvas: Canvas::new(1920, 1080),
            fps: Fps::whole(30),
            duration: 150,
        }
    }

    fn draw(&self, ctx: &FrameCtx, p: &Self::Props) -> StudioResult<Scene> {
        let size = 80.0 * ctx.unit();
        if p.neon {
            let orb = PulsingOrb {
                color: p.color,
                size: 4.5 * size,
                ..PulsingOrb::new(ctx.center())
            };
            let mut baseline = ctx.center();
            baseline.y += size * 0.35;
            let headline = NeonText {
                color: p.color,
                blur: 12.0 * ctx.unit(),
                ..NeonText::new(&p.text, baseline, size)
            };
            return Ok(SceneBuilder::new(ctx.canvas)
                .background(p.background)
                .node(pulsing_orb(ctx, &orb))
                .node(neon_text(ctx, &headline))
                .build());
        }
        Ok(SceneBuilder::new(ctx.canvas)
            .background(p.background)
            .node(
                text(p.text.as_str(), ctx.center())
                    .size(size)
                    .weight(800)
                    .fill(p.color)
                    .centered_v(),
            )
            .build())
    }
}

/// Gradient title card with a fade-and-rise entrance.
pub struct TitleCard;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct TitleCardProps {
    pub title: String,
    pub subtitle: String,
    /// Named gradient; unknown names fall back to `primary`.
    pub gradient: String,
}

impl Default for TitleCardProps {
    fn default() -> Self {
        Self {
            title: "Professional Title Card".to_owned(),
            subtitle: "Perfect for your video content".to_owned(),
            gradient: "primary".to_owned(),
        }
    }
}

impl Template for TitleCard {
    type Props = TitleCardProps;

    fn info(&self) -> TemplateInfo {
        TemplateInfo {
            id: "title-card",
            name: "TitleCard",
            description: "Title and subtitle fading up over a named gradient",
            canvas: Canvas::new(1920, 1080),
            fps: Fps::whole(30),
            duration: 150,
        }
    }

    fn draw(&self, ctx: &FrameCtx, p: &Self::Props) -> StudioResult<Scene> {
        let u = ctx.unit();
        let opacity = ctx.progress(0.0, 30.0);
        let rise = tween(ctx.frame, (0.0, 30.0), (50.0, 0.0), Ease::OutCubic) * u;
        let c = ctx.center();

        let content = group()
            .translate(0.0, rise)
            .opacity(opacity)
            .child(
                text(p.title.as_str(), Point::new(c.x, c.y - 20.0 * u))
                    .size(72.0 * u)
                    .weight(800)
                    .fill(Color::WHITE),
            )
            .child(
                text(p.subtitle.as_str(), Point::new(c.x, c.y + 50.0 * u))
                    .size(28.0 * u)
                    .fill(Color::WHITE)
                    .opacity(0.8),
            );

        Ok(SceneBuilder::new(ctx.canvas)
            .background(Paint::from(gradient(&p.gradient)))
            .node(content)
            .build())
    }
}
