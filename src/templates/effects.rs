//! Text-effect and data-visualization templates.

use serde::{Deserialize, Serialize};

use crate::{
    assets::color::Color,
    components::{
        charts::{BarChart, Datum, LineChart, bar_chart, line_chart},
        effects::{GridBackground, grid_background},
        patterns::{AnimatedPattern, AnimatedPatternKind, animated_pattern},
        typography::{Glitch, fade_up, glitch_text},
    },
    composition::{
        ctx::FrameCtx,
        template::{Template, TemplateInfo},
    },
    foundation::{
        core::{Canvas, Fps, Point, Rect},
        error::{StudioError, StudioResult},
    },
    scene::{
        dsl::{SceneBuilder, text},
        model::Scene,
    },
};

/// RGB-split title with random jitter bursts.
pub struct GlitchTitle;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct GlitchTitleProps {
    pub text: String,
    /// Jitter multiplier; 0 keeps only the static channel split.
    pub intensity: f64,
    pub seed: u64,
    /// Looping backdrop behind the title.
    pub backdrop: Option<AnimatedPatternKind>,
}

impl Default for GlitchTitleProps {
    fn default() -> Self {
        Self {
            text: "GLITCH".to_owned(),
            intensity: 1.0,
            seed: 7,
            backdrop: None,
        }
    }
}

impl Template for GlitchTitle {
    type Props = GlitchTitleProps;

    fn info(&self) -> TemplateInfo {
        TemplateInfo {
            id: "glitch-title",
            name: "GlitchTitle",
            description: "Chromatic-aberration title with deterministic glitch bursts",
            canvas: Canvas::new(1920, 1080),
            fps: Fps::whole(30),
            duration: 150,
        }
    }

    fn draw(&self, ctx: &FrameCtx, p: &Self::Props) -> StudioResult<Scene> {
        if !p.intensity.is_finite() || p.intensity < 0.0 {
            return Err(StudioError::validation("glitch intensity must be >= 0"));
        }
        let u = ctx.unit();
        let glitch = Glitch {
            split: 3.0 * u,
            intensity: 12.0 * u * p.intensity,
            frequency: 0.05 + 0.1 * p.intensity.min(3.0),
            seed: p.seed,
            ..Glitch::new(&p.text, Point::new(ctx.center().x, ctx.center().y + 42.0 * u), 120.0 * u)
        };
        let backdrop = p.backdrop.map(|kind| {
            let a = AnimatedPattern {
                kind,
                seed: p.seed,
                ..AnimatedPattern::default()
            };
            animated_pattern(ctx, &a)
        });
        Ok(SceneBuilder::new(ctx.canvas)
            .background(Color::from_u32(0x0a0a0a))
            .maybe(backdrop)
            .node(glitch_text(ctx, &glitch))
            .build())
    }
}

fn default_bars() -> Vec<Datum> {
    vec![
        Datum::new("Jan", 40.0, Color::from_u32(0x3b82f6)),
        Datum::new("Feb", 65.0, Color::from_u32(0x8b5cf6)),
        Datum::new("Mar", 55.0, Color::from_u32(0x06b6d4)),
        Datum::new("Apr", 85.0, Color::from_u32(0x10b981)),
        Datum::new("May", 70.0, Color::from_u32(0xf59e0b)),
    ]
}

/// Staggered bar chart under a title.
pub struct AnimatedChart;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct AnimatedChartProps {
    pub title: String,
    pub data: Vec<Datum>,
}

impl Default for AnimatedChartProps {
    fn default() -> Self {
        Self {
            title: "Monthly Performance".to_owned(),
            data: default_bars(),
        }
    }
}

impl Template for AnimatedChart {
    type Props = AnimatedChartProps;

    fn info(&self) -> TemplateInfo {
        TemplateInfo {
            id: "animated-chart",
            name: "AnimatedChart",
            description: "Bar chart whose bars grow one after another",
            canvas: Canvas::new(1920, 1080),
            fps: Fps::whole(30),
            duration: 180,
        }
    }

    fn draw(&self, ctx: &FrameCtx, p: &Self::Props) -> StudioResult<Scene> {
        let u = ctx.unit();
        let c = ctx.center();
        let chart = BarChart {
            bar_width: 80.0 * u,
            gap: 40.0 * u,
            max_height: 300.0 * u,
            label_size: 20.0 * u,
            ..BarChart::new(&p.data, Point::new(c.x, c.y + 200.0 * u))
        };
        Ok(SceneBuilder::new(ctx.canvas)
            .background(Color::from_u32(0x0a0a0a))
            .node(
                text(p.title.as_str(), Point::new(c.x, c.y - 180.0 * u))
                    .size(48.0 * u)
                    .weight(700)
                    .fill(Color::WHITE),
            )
            .node(bar_chart(ctx, &chart))
            .build())
    }
}

/// Self-drawing line chart over a scrolling grid.
pub struct LineChartTemplate;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct LineChartProps {
    pub title: String,
    pub values: Vec<f64>,
    pub color: Color,
    pub smooth: bool,
}

impl Default for LineChartProps {
    fn default() -> Self {
        Self {
            title: "Growth".to_owned(),
            values: vec![12.0, 19.0, 15.0, 28.0, 24.0, 36.0, 42.0, 39.0, 55.0],
            color: Color::from_u32(0x10b981),
            smooth: true,
        }
    }
}

impl Template for LineChartTemplate {
    type Props = LineChartProps;

    fn info(&self) -> TemplateInfo {
        TemplateInfo {
            id: "line-chart",
            name: "LineChart",
            description: "Line chart drawn progressively with a gradient fill",
            canvas: Canvas::new(1920, 1080),
            fps: Fps::whole(30),
            duration: 150,
        }
    }

    fn draw(&self, ctx: &FrameCtx, p: &Self::Props) -> StudioResult<Scene> {
        if p.values.iter().any(|v| !v.is_finite()) {
            return Err(StudioError::validation("line chart values must be finite"));
        }
        let u = ctx.unit();
        let area = Rect::new(ctx.vw(12.0), ctx.vh(30.0), ctx.vw(88.0), ctx.vh(82.0));
        let chart = LineChart {
            color: p.color,
            smooth: p.smooth,
            stroke_width: 5.0 * u,
            start: 10.0,
            duration: 75.0,
            ..LineChart::new(&p.values, area)
        };
        let title = text(p.title.as_str(), Point::new(ctx.center().x, ctx.vh(18.0)))
            .size(56.0 * u)
            .weight(800)
            .fill(Color::WHITE)
            .build();

        Ok(SceneBuilder::new(ctx.canvas)
            .background(Color::from_u32(0x0b1120))
            .node(grid_background(ctx, &GridBackground::default()))
            .node(fade_up(ctx, title, 0.0, 20.0, 30.0 * u))
            .node(line_chart(ctx, &chart))
            .build())
    }
}
