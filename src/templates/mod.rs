//! Built-in templates.

/// Hello world and the title card.
pub mod basic;
/// Glitch title and chart templates.
pub mod effects;
/// The multi-scene motivation reel.
pub mod motivation;
/// Multi-part product launch.
pub mod product;
/// Shapes, noise and code showcases.
pub mod scenes;
/// Vertical social formats.
pub mod social;

use crate::{
    assets::color::Color,
    components::shapes::rounded_rect,
    composition::catalog::Catalog,
    foundation::core::{Point, Rect},
    scene::{
        dsl::{group, text},
        model::{Node, Paint, Stroke, TextStyle},
    },
};

pub(crate) fn register_builtin(catalog: &mut Catalog) {
    catalog.register(motivation::MotivationReel);
    catalog.register(basic::HelloWorld);
    catalog.register(basic::TitleCard);
    catalog.register(effects::GlitchTitle);
    catalog.register(effects::AnimatedChart);
    catalog.register(effects::LineChartTemplate);
    catalog.register(social::TikTokIntro);
    catalog.register(social::YouTubeShorts);
    catalog.register(product::ProductAnnouncement);
    catalog.register(scenes::ShapesShowcase);
    catalog.register(scenes::NoiseTexture);
    catalog.register(scenes::TypewriterCode);
}

/// Rounded label button.
#[derive(Clone, Debug)]
pub(crate) struct PillStyle {
    pub size: f64,
    pub weight: u16,
    pub pad_x: f64,
    pub height: f64,
    pub fill: Paint,
    pub text_color: Color,
    pub outline: Option<Stroke>,
    /// Corner radius; fully rounded when `None`.
    pub radius: Option<f64>,
}

impl Default for PillStyle {
    fn default() -> Self {
        Self {
            size: 24.0,
            weight: 600,
            pad_x: 32.0,
            height: 52.0,
            fill: Color::WHITE.into(),
            text_color: Color::WHITE,
            outline: None,
            radius: None,
        }
    }
}

impl PillStyle {
    fn text_style(&self) -> TextStyle {
        TextStyle::sized(self.size).weight(self.weight)
    }

    pub fn width(&self, label: &str) -> f64 {
        self.text_style().approx_width(label) + self.pad_x * 2.0
    }
}

/// Pill button centered on `center`.
pub(crate) fn pill(center: Point, label: &str, style: &PillStyle) -> Node {
    let r = Rect::from_center_size(center, (style.width(label), style.height));
    let mut body = rounded_rect(r, style.radius.unwrap_or(style.height / 2.0), style.fill.clone());
    if let Some(stroke) = &style.outline {
        body = body.stroke(stroke.clone());
    }
    group()
        .child(body)
        .child(
            text(label, center)
                .style(style.text_style())
                .fill(style.text_color)
                .centered_v(),
        )
        .build()
}
