use std::fmt::Write as _;

use crate::{
    foundation::core::{Affine, BezPath, Rect},
    scene::model::{
        GradientStop, GroupNode, Node, Paint, Scene, ShapeNode, Stroke, TextAnchor, TextNode,
    },
};
use kurbo::PathEl;

/// Serialize a scene to a standalone SVG 1.1 document.
///
/// Output is byte-for-byte deterministic for equal scenes: numbers use fixed rounding and
/// gradient, clip and filter definitions get sequential ids in paint order.
pub fn to_svg(scene: &Scene) -> String {
    let mut w = SvgWriter::default();
    let (cw, ch) = (f64::from(scene.canvas.width), f64::from(scene.canvas.height));

    let bg = w.paint_attrs("fill", &scene.background);
    let mut body = String::new();
    let _ = write!(body, r#"<rect x="0" y="0" width="{}" height="{}"{bg}/>"#, num(cw), num(ch));
    for node in &scene.nodes {
        w.node(&mut body, node);
    }

    let mut out = String::with_capacity(body.len() + w.defs.len() + 256);
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        scene.canvas.width, scene.canvas.height, scene.canvas.width, scene.canvas.height
    );
    if !w.defs.is_empty() {
        out.push_str("<defs>");
        out.push_str(&w.defs);
        out.push_str("</defs>");
    }
    out.push_str(&body);
    out.push_str("</svg>");
    out
}

#[derive(Default)]
struct SvgWriter {
    defs: String,
    next_gradient: usize,
    next_clip: usize,
    next_filter: usize,
}

impl SvgWriter {
    fn node(&mut self, out: &mut String, node: &Node) {
        match node {
            Node::Shape(s) => self.shape(out, s),
            Node::Text(t) => self.text(out, t),
            Node::Group(g) => self.group(out, g),
        }
    }

    fn shape(&mut self, out: &mut String, s: &ShapeNode) {
        if s.opacity <= 0.0 || s.path.elements().is_empty() {
            return;
        }
        let fill = match &s.fill {
            Some(p) => self.paint_attrs("fill", p),
            None => r#" fill="none""#.to_owned(),
        };
        let stroke = s
            .stroke
            .as_ref()
            .map(|st| self.stroke_attrs(st))
            .unwrap_or_default();
        let _ = write!(out, r#"<path d="{}"{fill}{stroke}"#, path_data(&s.path));
        opacity_attr(out, "opacity", s.opacity);
        out.push_str("/>");
    }

    fn text(&mut self, out: &mut String, t: &TextNode) {
        if t.opacity <= 0.0 || t.content.is_empty() {
            return;
        }
        let fill = self.paint_attrs("fill", &t.fill);
        let stroke = t
            .stroke
            .as_ref()
            .map(|st| self.stroke_attrs(st))
            .unwrap_or_default();
        let anchor = match t.style.anchor {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        };
        let _ = write!(
            out,
            r#"<text x="{}" y="{}" font-family="{}" font-size="{}" font-weight="{}" text-anchor="{anchor}""#,
            num(t.pos.x),
            num(t.pos.y),
            escape(&t.style.family),
            num(t.style.size),
            t.style.weight,
        );
        if t.style.letter_spacing != 0.0 {
            let _ = write!(out, r#" letter-spacing="{}""#, num(t.style.letter_spacing));
        }
        if t.style.italic {
            out.push_str(r#" font-style="italic""#);
        }
        out.push_str(&fill);
        out.push_str(&stroke);
        opacity_attr(out, "opacity", t.opacity);
        let _ = write!(out, r#" xml:space="preserve">{}</text>"#, escape(&t.content));
    }

    fn group(&mut self, out: &mut String, g: &GroupNode) {
        if g.opacity <= 0.0 || g.children.is_empty() {
            return;
        }
        out.push_str("<g");
        if g.transform != Affine::IDENTITY {
            let [a, b, c, d, e, f] = g.transform.as_coeffs();
            let _ = write!(
                out,
                r#" transform="matrix({} {} {} {} {} {})""#,
                num(a),
                num(b),
                num(c),
                num(d),
                num(e),
                num(f)
            );
        }
        opacity_attr(out, "opacity", g.opacity);
        if let Some(clip) = g.clip {
            let id = self.clip_def(clip);
            let _ = write!(out, r#" clip-path="url(#{id})""#);
        }
        if let Some(radius) = g.blur {
            let id = self.blur_def(radius);
            let _ = write!(out, r#" filter="url(#{id})""#);
        }
        out.push('>');
        for child in &g.children {
            self.node(out, child);
        }
        out.push_str("</g>");
    }

    fn paint_attrs(&mut self, attr: &str, paint: &Paint) -> String {
        match paint {
            Paint::Solid { color } => {
                let mut s = format!(r#" {attr}="{}""#, color.to_hex());
                opacity_attr(&mut s, &format!("{attr}-opacity"), color.alpha());
                s
            }
            Paint::Linear(g) => {
                let id = self.gradient_id();
                let (s, c) = g.angle_deg.to_radians().sin_cos();
                let _ = write!(
                    self.defs,
                    r#"<linearGradient id="{id}" x1="{}" y1="{}" x2="{}" y2="{}">"#,
                    num(0.5 - 0.5 * s),
                    num(0.5 + 0.5 * c),
                    num(0.5 + 0.5 * s),
                    num(0.5 - 0.5 * c)
                );
                self.stops(&g.stops);
                self.defs.push_str("</linearGradient>");
                format!(r#" {attr}="url(#{id})""#)
            }
            Paint::Radial(g) => {
                let id = self.gradient_id();
                let _ = write!(
                    self.defs,
                    r#"<radialGradient id="{id}" cx="{}" cy="{}" r="{}">"#,
                    num(g.center.x),
                    num(g.center.y),
                    num(g.radius)
                );
                self.stops(&g.stops);
                self.defs.push_str("</radialGradient>");
                format!(r#" {attr}="url(#{id})""#)
            }
        }
    }

    fn stroke_attrs(&mut self, st: &Stroke) -> String {
        let mut s = self.paint_attrs("stroke", &st.paint);
        let _ = write!(s, r#" stroke-width="{}""#, num(st.width));
        if st.round_caps {
            s.push_str(r#" stroke-linecap="round" stroke-linejoin="round""#);
        }
        if !st.dash.is_empty() {
            let dash: Vec<String> = st.dash.iter().map(|d| num(*d)).collect();
            let _ = write!(
                s,
                r#" stroke-dasharray="{}" stroke-dashoffset="{}""#,
                dash.join(" "),
                num(st.dash_offset)
            );
        }
        s
    }

    fn stops(&mut self, stops: &[GradientStop]) {
        for stop in stops {
            let _ = write!(
                self.defs,
                r#"<stop offset="{}" stop-color="{}""#,
                num(stop.offset.clamp(0.0, 1.0)),
                stop.color.to_hex()
            );
            opacity_attr(&mut self.defs, "stop-opacity", stop.color.alpha());
            self.defs.push_str("/>");
        }
    }

    fn gradient_id(&mut self) -> String {
        let id = format!("g{}", self.next_gradient);
        self.next_gradient += 1;
        id
    }

    fn clip_def(&mut self, r: Rect) -> String {
        let id = format!("c{}", self.next_clip);
        self.next_clip += 1;
        let _ = write!(
            self.defs,
            r#"<clipPath id="{id}"><rect x="{}" y="{}" width="{}" height="{}"/></clipPath>"#,
            num(r.x0),
            num(r.y0),
            num(r.width().max(0.0)),
            num(r.height().max(0.0))
        );
        id
    }

    fn blur_def(&mut self, radius: f64) -> String {
        let id = format!("f{}", self.next_filter);
        self.next_filter += 1;
        let _ = write!(
            self.defs,
            r#"<filter id="{id}" x="-50%" y="-50%" width="200%" height="200%"><feGaussianBlur stdDeviation="{}"/></filter>"#,
            num(radius)
        );
        id
    }
}

fn opacity_attr(out: &mut String, attr: &str, v: f64) {
    if v < 1.0 {
        let _ = write!(out, r#" {attr}="{}""#, num(v.max(0.0)));
    }
}

/// Fixed three-decimal formatting with trailing zeros removed.
fn num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_owned();
    }
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "" | "-0" => "0".to_owned(),
        _ => s.to_owned(),
    }
}

fn path_data(path: &BezPath) -> String {
    let mut d = String::new();
    for el in path.elements() {
        if !d.is_empty() {
            d.push(' ');
        }
        let _ = match *el {
            PathEl::MoveTo(p) => write!(d, "M{} {}", num(p.x), num(p.y)),
            PathEl::LineTo(p) => write!(d, "L{} {}", num(p.x), num(p.y)),
            PathEl::QuadTo(a, p) => {
                write!(d, "Q{} {} {} {}", num(a.x), num(a.y), num(p.x), num(p.y))
            }
            PathEl::CurveTo(a, b, p) => write!(
                d,
                "C{} {} {} {} {} {}",
                num(a.x),
                num(a.y),
                num(b.x),
                num(b.y),
                num(p.x),
                num(p.y)
            ),
            PathEl::ClosePath => write!(d, "Z"),
        };
    }
    d
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c if c.is_control() && c != '\t' => {}
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/scene/svg.rs"]
mod tests;
