use crate::{
    assets::color::Color,
    foundation::core::{Affine, BezPath, Canvas, Point, Rect, Vec2},
    scene::model::{
        GroupNode, Node, Paint, Scene, ShapeNode, Stroke, TextAnchor, TextNode, TextStyle,
    },
};

/// Builder for [`Scene`].
pub struct SceneBuilder {
    canvas: Canvas,
    background: Paint,
    nodes: Vec<Node>,
}

impl SceneBuilder {
    /// Start a scene with a black background.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            background: Color::BLACK.into(),
            nodes: Vec::new(),
        }
    }

    pub fn background(mut self, paint: impl Into<Paint>) -> Self {
        self.background = paint.into();
        self
    }

    /// Append a node (painted above the previous ones).
    pub fn node(mut self, node: impl Into<Node>) -> Self {
        self.nodes.push(node.into());
        self
    }

    pub fn nodes<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.nodes.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Append `node` only when it is `Some`.
    pub fn maybe(self, node: Option<impl Into<Node>>) -> Self {
        match node {
            Some(n) => self.node(n),
            None => self,
        }
    }

    pub fn build(self) -> Scene {
        Scene {
            canvas: self.canvas,
            background: self.background,
            nodes: self.nodes,
        }
    }
}

/// Builder for [`Node::Group`].
#[derive(Default)]
pub struct GroupBuilder {
    inner: GroupNode,
}

impl GroupBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Post-multiply an arbitrary transform.
    pub fn transform(mut self, t: Affine) -> Self {
        self.inner.transform = self.inner.transform * t;
        self
    }

    pub fn translate(self, x: f64, y: f64) -> Self {
        self.transform(Affine::translate(Vec2::new(x, y)))
    }

    /// Uniform scale about `pivot`.
    pub fn scale_about(self, pivot: Point, s: f64) -> Self {
        let v = pivot.to_vec2();
        self.transform(Affine::translate(v) * Affine::scale(s) * Affine::translate(-v))
    }

    /// Rotation in degrees about `pivot`.
    pub fn rotate_about(self, pivot: Point, deg: f64) -> Self {
        let v = pivot.to_vec2();
        self.transform(
            Affine::translate(v) * Affine::rotate(deg.to_radians()) * Affine::translate(-v),
        )
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.inner.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn clip(mut self, rect: Rect) -> Self {
        self.inner.clip = Some(rect);
        self
    }

    /// Gaussian blur; radii below a tenth of a pixel are dropped.
    pub fn blur(mut self, radius: f64) -> Self {
        self.inner.blur = (radius > 0.1).then_some(radius);
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.inner.children.push(node.into());
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.inner.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> Node {
        Node::Group(self.inner)
    }
}

impl From<GroupBuilder> for Node {
    fn from(b: GroupBuilder) -> Self {
        b.build()
    }
}

/// Builder for [`Node::Shape`].
pub struct ShapeBuilder {
    inner: ShapeNode,
}

impl ShapeBuilder {
    pub fn new(path: BezPath) -> Self {
        Self {
            inner: ShapeNode {
                path,
                fill: None,
                stroke: None,
                opacity: 1.0,
            },
        }
    }

    pub fn fill(mut self, paint: impl Into<Paint>) -> Self {
        self.inner.fill = Some(paint.into());
        self
    }

    pub fn stroke(mut self, stroke: Stroke) -> Self {
        self.inner.stroke = Some(stroke);
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.inner.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    pub fn build(self) -> Node {
        Node::Shape(self.inner)
    }
}

impl From<ShapeBuilder> for Node {
    fn from(b: ShapeBuilder) -> Self {
        b.build()
    }
}

/// Builder for [`Node::Text`].
pub struct TextBuilder {
    inner: TextNode,
}

impl TextBuilder {
    pub fn new(content: impl Into<String>, pos: Point) -> Self {
        Self {
            inner: TextNode {
                content: content.into(),
                pos,
                style: TextStyle::default(),
                fill: Color::WHITE.into(),
                stroke: None,
                opacity: 1.0,
            },
        }
    }

    pub fn style(mut self, style: TextStyle) -> Self {
        self.inner.style = style;
        self
    }

    pub fn size(mut self, size: f64) -> Self {
        self.inner.style.size = size;
        self
    }

    pub fn weight(mut self, weight: u16) -> Self {
        self.inner.style.weight = weight;
        self
    }

    pub fn family(mut self, family: impl Into<String>) -> Self {
        self.inner.style.family = family.into();
        self
    }

    pub fn anchor(mut self, anchor: TextAnchor) -> Self {
        self.inner.style.anchor = anchor;
        self
    }

    pub fn letter_spacing(mut self, spacing: f64) -> Self {
        self.inner.style.letter_spacing = spacing;
        self
    }

    pub fn italic(mut self) -> Self {
        self.inner.style.italic = true;
        self
    }

    pub fn fill(mut self, paint: impl Into<Paint>) -> Self {
        self.inner.fill = paint.into();
        self
    }

    pub fn outline(mut self, stroke: Stroke) -> Self {
        self.inner.stroke = Some(stroke);
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.inner.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Treat `pos` as the visual center line instead of the baseline.
    pub fn centered_v(mut self) -> Self {
        self.inner.pos.y += self.inner.style.size * 0.35;
        self
    }

    pub fn build(self) -> Node {
        Node::Text(self.inner)
    }
}

impl From<TextBuilder> for Node {
    fn from(b: TextBuilder) -> Self {
        b.build()
    }
}

pub fn shape(path: BezPath) -> ShapeBuilder {
    ShapeBuilder::new(path)
}

pub fn text(content: impl Into<String>, pos: Point) -> TextBuilder {
    TextBuilder::new(content, pos)
}

pub fn group() -> GroupBuilder {
    GroupBuilder::new()
}

/// Axis-aligned rectangle path.
pub fn rect_path(r: Rect) -> BezPath {
    let mut p = BezPath::new();
    p.move_to((r.x0, r.y0));
    p.line_to((r.x1, r.y0));
    p.line_to((r.x1, r.y1));
    p.line_to((r.x0, r.y1));
    p.close_path();
    p
}

/// Filled rectangle covering `r`.
pub fn rect(r: Rect, paint: impl Into<Paint>) -> ShapeBuilder {
    shape(rect_path(r)).fill(paint)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/dsl.rs"]
mod tests;
