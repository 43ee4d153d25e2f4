//! Procedural showcase templates: shapes, noise and code.

use serde::{Deserialize, Serialize};

use crate::{
    animation::{
        anim::{Anim, LoopMode},
        ease::Ease,
        spring::SpringConfig,
    },
    assets::color::Color,
    components::{
        effects::{NoiseGrid, NoiseParticles, noise_grid, noise_particles, vignette},
        glow::{GlowBox, ShadowDrop, glow_box, shadow_drop},
        overlay::{Corner, Timestamp, TimestampFormat, timestamp},
        patterns::{Pattern, PatternBackground, pattern_background},
        shapes::{Direction, circle, polygon, rounded_rect, star, triangle},
        typography::{CodeBlock, code_block, fade_up},
    },
    composition::{
        ctx::FrameCtx,
        template::{Template, TemplateInfo},
    },
    foundation::{
        core::{Canvas, Fps, Point, Rect, Vec2},
        error::{StudioError, StudioResult},
    },
    scene::{
        dsl::{SceneBuilder, group, rect, rect_path, shape, text},
        model::{Node, Scene, Stroke},
    },
};

/// Grid of primitive shapes popping in one after another.
pub struct ShapesShowcase;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct ShapesShowcaseProps {
    pub background: Color,
    /// Frames between consecutive shapes popping in.
    pub stagger: f64,
    /// Slowly spin polygons and the star.
    pub spin: bool,
    /// Tiled backdrop behind the shapes.
    pub pattern: Option<Pattern>,
}

impl Default for ShapesShowcaseProps {
    fn default() -> Self {
        Self {
            background: Color::from_u32(0x0a0a0a),
            stagger: 4.0,
            spin: true,
            pattern: None,
        }
    }
}

impl Template for ShapesShowcase {
    type Props = ShapesShowcaseProps;

    fn info(&self) -> TemplateInfo {
        TemplateInfo {
            id: "shapes-showcase",
            name: "ShapesScene",
            description: "Circles, rectangles, triangles, polygons and a star",
            canvas: Canvas::new(1920, 1080),
            fps: Fps::whole(30),
            duration: 150,
        }
    }

    fn draw(&self, ctx: &FrameCtx, p: &Self::Props) -> StudioResult<Scene> {
        let u = ctx.unit();
        let at = |x: f64, y: f64| Point::new(ctx.vw(x), ctx.vh(y));
        let spin = if p.spin { ctx.frame * 0.6 } else { 0.0 };
        let hex = |v: u32| Color::from_u32(v);

        let outline = Rect::from_center_size(at(80.0, 15.0), (100.0 * u, 100.0 * u));
        // Outline pulses white to cyan and back every three seconds.
        let outline_color = Anim::tween(0, 45, Color::WHITE, hex(0x00ffff), Ease::InOutSine)
            .loop_(45.0, LoopMode::PingPong)
            .sample(ctx.frame)?;
        let soft = Rect::from_center_size(at(80.0, 40.0), (100.0 * u, 100.0 * u));
        let shapes: Vec<(Point, Node)> = vec![
            (at(15.0, 20.0), circle(at(15.0, 20.0), 100.0 * u, hex(0x0070f3)).build()),
            (at(25.0, 35.0), circle(at(25.0, 35.0), 80.0 * u, hex(0xff6b6b)).build()),
            (at(35.0, 50.0), circle(at(35.0, 50.0), 60.0 * u, hex(0x00ff00)).build()),
            (
                at(60.0, 20.0),
                rect(Rect::from_center_size(at(60.0, 20.0), (150.0 * u, 100.0 * u)), hex(0xff00ff))
                    .build(),
            ),
            (
                at(65.0, 35.0),
                rect(Rect::from_center_size(at(65.0, 35.0), (120.0 * u, 80.0 * u)), hex(0xffff00))
                    .build(),
            ),
            (
                at(70.0, 50.0),
                rect(Rect::from_center_size(at(70.0, 50.0), (90.0 * u, 60.0 * u)), hex(0x00ffff))
                    .build(),
            ),
            (
                at(15.0, 60.0),
                triangle(at(15.0, 60.0), 120.0 * u, Direction::Up, hex(0xff9900)).build(),
            ),
            (
                at(25.0, 75.0),
                triangle(at(25.0, 75.0), 100.0 * u, Direction::Up, hex(0x0099ff)).build(),
            ),
            (at(50.0, 60.0), polygon(at(50.0, 60.0), 80.0 * u, 6, spin, hex(0x99ff00)).build()),
            (at(65.0, 75.0), polygon(at(65.0, 75.0), 60.0 * u, 8, -spin, hex(0xff0099)).build()),
            (
                at(50.0, 80.0),
                group()
                    .rotate_about(at(50.0, 80.0), spin)
                    .child(star(at(50.0, 80.0), 5, 80.0 * u, 30.0 * u, hex(0xffff99)))
                    .build(),
            ),
            (
                outline.center(),
                shape(rect_path(outline))
                    .stroke(Stroke::new(outline_color, 2.0 * u))
                    .build(),
            ),
            (
                soft.center(),
                rounded_rect(soft, 10.0 * u, Color::rgba(1.0, 0.42, 0.42, 0.3))
                    .stroke(Stroke::new(hex(0xff6b6b), 3.0 * u))
                    .build(),
            ),
        ];

        let cfg = SpringConfig::with_damping(12.0);
        let mut nodes = Vec::with_capacity(shapes.len());
        for (i, (pivot, node)) in shapes.into_iter().enumerate() {
            let s = ctx.spring(i as f64 * p.stagger, cfg)?;
            if s <= 0.0 {
                continue;
            }
            nodes.push(group().scale_about(pivot, s).child(node).build());
        }

        let backdrop = p.pattern.map(|pattern| {
            let tiles = PatternBackground {
                pattern,
                background: p.background,
                scale: u.max(0.5),
                opacity: 0.15,
                ..PatternBackground::default()
            };
            pattern_background(ctx, &tiles)
        });

        Ok(SceneBuilder::new(ctx.canvas)
            .background(p.background)
            .maybe(backdrop)
            .nodes(nodes)
            .build())
    }
}

/// Drifting simplex-noise color field with orbiting particles.
pub struct NoiseTexture;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct NoiseTextureProps {
    pub seed: u64,
    pub cols: u32,
    pub rows: u32,
    pub scale: f64,
    pub speed: f64,
    pub particles: usize,
}

impl Default for NoiseTextureProps {
    fn default() -> Self {
        Self {
            seed: 42,
            cols: 50,
            rows: 50,
            scale: 0.1,
            speed: 0.01,
            particles: 30,
        }
    }
}

impl Template for NoiseTexture {
    type Props = NoiseTextureProps;

    fn info(&self) -> TemplateInfo {
        TemplateInfo {
            id: "noise-texture",
            name: "NoiseTexture",
            description: "Animated simplex-noise grid and particles",
            canvas: Canvas::new(1920, 1080),
            fps: Fps::whole(30),
            duration: 300,
        }
    }

    fn draw(&self, ctx: &FrameCtx, p: &Self::Props) -> StudioResult<Scene> {
        if p.cols == 0 || p.rows == 0 || p.cols > 400 || p.rows > 400 {
            return Err(StudioError::validation("noise grid must be 1..=400 cells per side"));
        }
        let grid = NoiseGrid {
            cols: p.cols,
            rows: p.rows,
            scale: p.scale,
            speed: p.speed,
            seed: p.seed,
        };
        let particles = NoiseParticles {
            count: p.particles,
            center: ctx.center(),
            spread: ctx.canvas.min_side() / 250.0,
            speed: p.speed,
            seed: p.seed.wrapping_add(1),
        };
        Ok(SceneBuilder::new(ctx.canvas)
            .background(Color::BLACK)
            .node(noise_grid(ctx, &grid))
            .node(noise_particles(ctx, &particles))
            .node(vignette(ctx, 0.6))
            .build())
    }
}

/// Editor panel typing out a code snippet.
pub struct TypewriterCode;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct TypewriterCodeProps {
    pub title: String,
    pub code: String,
    pub frames_per_char: f64,
    /// Frames to hold the finished snippet.
    pub hold: u64,
    /// Soft drop shadow under the editor panel.
    pub shadow: bool,
    /// Halo color around the editor panel.
    pub glow: Option<Color>,
    /// Burned-in clock in the top-right corner.
    pub timestamp: Option<TimestampFormat>,
}

impl Default for TypewriterCodeProps {
    fn default() -> Self {
        Self {
            title: "main.rs".to_owned(),
            code: [
                "// render one frame",
                "fn main() {",
                "    let fps = 30;",
                "    let scene = draw(frame, \"hello\");",
                "    encode(scene);",
                "}",
            ]
            .join("\n"),
            frames_per_char: 1.0,
            hold: 60,
            shadow: true,
            glow: None,
            timestamp: None,
        }
    }
}

const CODE_INTRO: f64 = 20.0;

impl Template for TypewriterCode {
    type Props = TypewriterCodeProps;

    fn info(&self) -> TemplateInfo {
        TemplateInfo {
            id: "typewriter-code",
            name: "TypewriterCode",
            description: "Syntax-highlighted code typed out in an editor panel",
            canvas: Canvas::new(1920, 1080),
            fps: Fps::whole(30),
            duration: 240,
        }
    }

    fn duration_frames(&self, p: &Self::Props) -> u64 {
        let chars = p.code.chars().count() as f64;
        let typing = (chars * p.frames_per_char.max(0.0)).ceil() as u64;
        (CODE_INTRO as u64 + typing + p.hold).max(30)
    }

    fn draw(&self, ctx: &FrameCtx, p: &Self::Props) -> StudioResult<Scene> {
        if !p.frames_per_char.is_finite() || p.frames_per_char < 0.0 {
            return Err(StudioError::validation("framesPerChar must be >= 0"));
        }
        let u = ctx.unit();
        let width = ctx.vw(70.0);
        let origin = Point::new(ctx.center().x - width / 2.0, ctx.vh(28.0));
        let block = CodeBlock {
            code: &p.code,
            origin,
            width,
            size: 30.0 * u,
            frames_per_char: p.frames_per_char,
            start: CODE_INTRO,
        };

        let bar_h = 44.0 * u;
        let bar = Rect::new(origin.x, origin.y - bar_h, origin.x + width, origin.y + 8.0 * u);
        let dots = [0xff5f56, 0xffbd2e, 0x27c93f]
            .iter()
            .enumerate()
            .map(|(i, c)| {
                circle(
                    Point::new(origin.x + (24.0 + 22.0 * i as f64) * u, origin.y - bar_h / 2.0),
                    7.0 * u,
                    Color::from_u32(*c),
                )
                .build()
            });
        let window = Rect::new(bar.x0, bar.y0, bar.x1, block.panel().y1);
        let chrome = group()
            .child(rounded_rect(bar, 8.0 * u, Color::from_u32(0x2d2d2d)))
            .children(dots)
            .child(
                text(p.title.as_str(), Point::new(ctx.center().x, origin.y - bar_h / 2.0))
                    .size(18.0 * u)
                    .fill(Color::rgba(1.0, 1.0, 1.0, 0.6))
                    .centered_v(),
            )
            .child(code_block(ctx, &block))
            .build();
        let chrome = match p.glow {
            Some(color) => {
                let halo = GlowBox {
                    color,
                    glow_color: color,
                    glow_size: 24.0 * u,
                    background: Color::from_u32(0x1e1e1e),
                    radius: 8.0 * u,
                    start: CODE_INTRO,
                    ..GlowBox::new(window)
                };
                glow_box(ctx, &halo, chrome)
            }
            None => chrome,
        };
        let chrome = if p.shadow {
            let drop = ShadowDrop {
                radius: 8.0 * u,
                offset: Vec2::new(0.0, 20.0 * u),
                blur: 30.0 * u,
                ..ShadowDrop::new(window)
            };
            shadow_drop(ctx, &drop, chrome)
        } else {
            chrome
        };
        let clock = p.timestamp.map(|format| {
            let stamp = Timestamp {
                format,
                corner: Corner::TopRight,
                color: Color::rgba(1.0, 1.0, 1.0, 0.6),
                ..Timestamp::default()
            };
            timestamp(ctx, &stamp)
        });

        Ok(SceneBuilder::new(ctx.canvas)
            .background(Color::from_u32(0x0d1117))
            .node(fade_up(ctx, chrome, 0.0, CODE_INTRO, 40.0 * u))
            .maybe(clock)
            .build())
    }
}
