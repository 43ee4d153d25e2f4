use crate::{
    assets::color::{Color, GradientDef},
    foundation::core::{Affine, BezPath, Canvas, Point, Rect},
};
use serde::Serialize;

/// Renderer-agnostic description of one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub canvas: Canvas,
    pub background: Paint,
    pub nodes: Vec<Node>,
}

impl Scene {
    pub fn new(canvas: Canvas, background: impl Into<Paint>) -> Self {
        Self {
            canvas,
            background: background.into(),
            nodes: Vec::new(),
        }
    }

    /// Total number of nodes, groups included.
    pub fn node_count(&self) -> usize {
        fn count(nodes: &[Node]) -> usize {
            nodes
                .iter()
                .map(|n| match n {
                    Node::Group(g) => 1 + count(&g.children),
                    _ => 1,
                })
                .sum()
        }
        count(&self.nodes)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Node {
    Shape(ShapeNode),
    Text(TextNode),
    Group(GroupNode),
}

impl Node {
    /// Identity group over `children`.
    pub fn group(children: Vec<Node>) -> Self {
        Self::Group(GroupNode {
            children,
            ..GroupNode::default()
        })
    }

    /// Wrap the node in a group with `opacity`, collapsing to the node itself when fully opaque.
    pub fn with_opacity(self, opacity: f64) -> Self {
        if opacity >= 1.0 {
            return self;
        }
        Self::Group(GroupNode {
            opacity: opacity.max(0.0),
            children: vec![self],
            ..GroupNode::default()
        })
    }

    pub fn with_transform(self, transform: Affine) -> Self {
        if transform == Affine::IDENTITY {
            return self;
        }
        Self::Group(GroupNode {
            transform,
            children: vec![self],
            ..GroupNode::default()
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeNode {
    pub path: BezPath,
    pub fill: Option<Paint>,
    pub stroke: Option<Stroke>,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stroke {
    pub paint: Paint,
    pub width: f64,
    pub dash: Vec<f64>,
    pub dash_offset: f64,
    pub round_caps: bool,
}

impl Stroke {
    pub fn new(paint: impl Into<Paint>, width: f64) -> Self {
        Self {
            paint: paint.into(),
            width,
            dash: Vec::new(),
            dash_offset: 0.0,
            round_caps: false,
        }
    }

    pub fn round(mut self) -> Self {
        self.round_caps = true;
        self
    }

    pub fn dashed(mut self, dash: Vec<f64>, offset: f64) -> Self {
        self.dash = dash;
        self.dash_offset = offset;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextNode {
    pub content: String,
    /// Anchor point on the baseline; horizontal meaning depends on [`TextStyle::anchor`].
    pub pos: Point,
    pub style: TextStyle,
    pub fill: Paint,
    pub stroke: Option<Stroke>,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextStyle {
    pub family: String,
    pub size: f64,
    pub weight: u16,
    pub anchor: TextAnchor,
    pub letter_spacing: f64,
    pub italic: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            family: "Inter, Helvetica, Arial, sans-serif".to_owned(),
            size: 48.0,
            weight: 400,
            anchor: TextAnchor::Middle,
            letter_spacing: 0.0,
            italic: false,
        }
    }
}

impl TextStyle {
    pub fn sized(size: f64) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn mono(size: f64) -> Self {
        Self {
            family: "JetBrains Mono, Fira Code, Menlo, monospace".to_owned(),
            size,
            anchor: TextAnchor::Start,
            ..Self::default()
        }
    }

    pub fn weight(mut self, weight: u16) -> Self {
        self.weight = weight;
        self
    }

    pub fn anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn letter_spacing(mut self, spacing: f64) -> Self {
        self.letter_spacing = spacing;
        self
    }

    /// Rough advance width of `content`; used for layout without shaping.
    pub fn approx_width(&self, content: &str) -> f64 {
        let per_char = if self.family.contains("mono") {
            0.6
        } else {
            0.55
        };
        let n = content.chars().count() as f64;
        n * (self.size * per_char + self.letter_spacing)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    Start,
    #[default]
    Middle,
    End,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupNode {
    pub transform: Affine,
    pub opacity: f64,
    /// Clip rectangle in the group's local coordinates.
    pub clip: Option<Rect>,
    /// Gaussian blur standard deviation in pixels.
    pub blur: Option<f64>,
    pub children: Vec<Node>,
}

impl Default for GroupNode {
    fn default() -> Self {
        Self {
            transform: Affine::IDENTITY,
            opacity: 1.0,
            clip: None,
            blur: None,
            children: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Paint {
    Solid { color: Color },
    Linear(LinearGradient),
    Radial(RadialGradient),
}

impl Paint {
    /// CSS-style linear gradient (`0deg` points up, `90deg` right) across the shape's bounding box.
    pub fn linear(angle_deg: f64, stops: Vec<GradientStop>) -> Self {
        Self::Linear(LinearGradient { angle_deg, stops })
    }

    /// Radial gradient centered in the bounding box.
    pub fn radial(radius: f64, stops: Vec<GradientStop>) -> Self {
        Self::Radial(RadialGradient {
            center: Point::new(0.5, 0.5),
            radius,
            stops,
        })
    }

    pub fn is_transparent(&self) -> bool {
        match self {
            Self::Solid { color } => color.a <= 0.0,
            Self::Linear(g) => g.stops.iter().all(|s| s.color.a <= 0.0),
            Self::Radial(g) => g.stops.iter().all(|s| s.color.a <= 0.0),
        }
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::Solid { color }
    }
}

impl From<GradientDef> for Paint {
    fn from(g: GradientDef) -> Self {
        Self::linear(
            g.angle_deg,
            vec![GradientStop::new(0.0, g.from), GradientStop::new(1.0, g.to)],
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GradientStop {
    pub offset: f64,
    pub color: Color,
}

impl GradientStop {
    pub fn new(offset: f64, color: Color) -> Self {
        Self { offset, color }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinearGradient {
    pub angle_deg: f64,
    pub stops: Vec<GradientStop>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadialGradient {
    /// Center in bounding-box fractions.
    pub center: Point,
    /// Radius as a fraction of the bounding box.
    pub radius: f64,
    pub stops: Vec<GradientStop>,
}
