//! Animated chart widgets.

use kurbo::ParamCurveArclen as _;

use crate::{
    animation::ease::Ease,
    assets::color::Color,
    components::shapes::{circle, ring_arc_path, rounded_rect, wedge_path},
    composition::ctx::FrameCtx,
    foundation::core::{BezPath, Point, Rect, Vec2},
    scene::{
        dsl::{group, shape, text},
        model::{GradientStop, Node, Paint, Stroke, TextAnchor, TextStyle},
    },
};

/// One labelled value.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Datum {
    pub label: String,
    pub value: f64,
    pub color: Color,
}

impl Datum {
    pub fn new(label: impl Into<String>, value: f64, color: Color) -> Self {
        Self {
            label: label.into(),
            value,
            color,
        }
    }
}

#[derive(Clone, Debug)]
pub struct BarChart<'a> {
    pub data: &'a [Datum],
    /// Center of the baseline under the bars.
    pub baseline: Point,
    pub bar_width: f64,
    pub gap: f64,
    pub max_height: f64,
    /// Value mapped to `max_height`; the largest datum when `None`.
    pub max_value: Option<f64>,
    pub start: f64,
    pub stagger: f64,
    pub grow: f64,
    pub label_size: f64,
    pub label_color: Color,
    pub show_values: bool,
}

impl<'a> BarChart<'a> {
    pub fn new(data: &'a [Datum], baseline: Point) -> Self {
        Self {
            data,
            baseline,
            bar_width: 80.0,
            gap: 40.0,
            max_height: 300.0,
            max_value: None,
            start: 0.0,
            stagger: 15.0,
            grow: 30.0,
            label_size: 24.0,
            label_color: Color::rgba(1.0, 1.0, 1.0, 0.8),
            show_values: true,
        }
    }
}

fn max_value(data: &[Datum], explicit: Option<f64>) -> f64 {
    explicit
        .unwrap_or_else(|| data.iter().map(|d| d.value).fold(0.0, f64::max))
        .max(f64::EPSILON)
}

/// Height of bar `i` at the current frame.
pub fn bar_height(ctx: &FrameCtx, c: &BarChart<'_>, i: usize) -> f64 {
    let Some(d) = c.data.get(i) else {
        return 0.0;
    };
    let p = ctx.eased(c.start + i as f64 * c.stagger, c.grow, Ease::OutCubic);
    (d.value / max_value(c.data, c.max_value)).clamp(0.0, 1.0) * c.max_height * p
}

pub fn bar_chart(ctx: &FrameCtx, c: &BarChart<'_>) -> Node {
    let n = c.data.len();
    let total = n as f64 * c.bar_width + n.saturating_sub(1) as f64 * c.gap;
    let left = c.baseline.x - total / 2.0;
    let label = TextStyle::sized(c.label_size).weight(600);

    let mut children = Vec::with_capacity(n * 3);
    for (i, d) in c.data.iter().enumerate() {
        let x0 = left + i as f64 * (c.bar_width + c.gap);
        let cx = x0 + c.bar_width / 2.0;
        let h = bar_height(ctx, c, i);
        if h > 0.5 {
            let bar = Rect::new(x0, c.baseline.y - h, x0 + c.bar_width, c.baseline.y);
            children.push(rounded_rect(bar, 8.0_f64.min(h / 2.0), d.color).build());
        }
        children.push(
            text(d.label.as_str(), Point::new(cx, c.baseline.y + c.label_size * 1.5))
                .style(label.clone())
                .fill(c.label_color)
                .build(),
        );
        if c.show_values {
            let p = ctx.progress(c.start + i as f64 * c.stagger, c.grow);
            if p > 0.0 {
                children.push(
                    text(format!("{}", d.value.round()), Point::new(cx, c.baseline.y - h - 12.0))
                        .style(label.clone().weight(700))
                        .fill(Color::WHITE)
                        .opacity(p)
                        .build(),
                );
            }
        }
    }
    group().children(children).build()
}

#[derive(Clone, Debug)]
pub struct LineChart<'a> {
    pub values: &'a [f64],
    /// Plot area; the minimum value sits on `area.y1`.
    pub area: Rect,
    pub color: Color,
    pub stroke_width: f64,
    pub smooth: bool,
    pub fill: bool,
    pub show_points: bool,
    pub start: f64,
    pub duration: f64,
}

impl<'a> LineChart<'a> {
    pub fn new(values: &'a [f64], area: Rect) -> Self {
        Self {
            values,
            area,
            color: Color::from_u32(0x3b82f6),
            stroke_width: 4.0,
            smooth: true,
            fill: true,
            show_points: true,
            start: 0.0,
            duration: 60.0,
        }
    }
}

/// Values projected into `area`, evenly spaced on x.
pub fn chart_points(values: &[f64], area: Rect) -> Vec<Point> {
    let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = if hi - lo > f64::EPSILON { hi - lo } else { 1.0 };
    let step = if values.len() > 1 {
        area.width() / (values.len() - 1) as f64
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            Point::new(
                area.x0 + step * i as f64,
                area.y1 - (v - lo) / span * area.height(),
            )
        })
        .collect()
}

/// Polyline or Catmull-Rom curve through `points`.
pub fn line_path(points: &[Point], smooth: bool) -> BezPath {
    let mut p = BezPath::new();
    let Some(first) = points.first() else {
        return p;
    };
    p.move_to(*first);
    for i in 1..points.len() {
        if !smooth {
            p.line_to(points[i]);
            continue;
        }
        let p0 = points[i.saturating_sub(2)];
        let p1 = points[i - 1];
        let p2 = points[i];
        let p3 = points[(i + 1).min(points.len() - 1)];
        let c1 = p1 + (p2 - p0) / 6.0;
        let c2 = p2 - (p3 - p1) / 6.0;
        p.curve_to(c1, c2, p2);
    }
    p
}

pub fn path_length(path: &BezPath) -> f64 {
    path.segments().map(|s| s.arclen(0.1)).sum()
}

pub fn line_chart(ctx: &FrameCtx, c: &LineChart<'_>) -> Node {
    let pts = chart_points(c.values, c.area);
    let p = ctx.eased(c.start, c.duration, Ease::InOutCubic);
    let mut children = Vec::new();
    if pts.len() < 2 || p <= 0.0 {
        return group().build();
    }

    let line = line_path(&pts, c.smooth);
    if c.fill {
        let mut area = line.clone();
        area.line_to((c.area.x1, c.area.y1));
        area.line_to((c.area.x0, c.area.y1));
        area.close_path();
        let paint = Paint::linear(
            180.0,
            vec![
                GradientStop::new(0.0, c.color.with_alpha(0.35)),
                GradientStop::new(1.0, c.color.with_alpha(0.0)),
            ],
        );
        children.push(shape(area).fill(paint).opacity(p).build());
    }

    let len = path_length(&line);
    children.push(
        shape(line)
            .stroke(
                Stroke::new(c.color, c.stroke_width)
                    .round()
                    .dashed(vec![len, len], len * (1.0 - p)),
            )
            .build(),
    );

    if c.show_points {
        let last = (pts.len() - 1) as f64;
        for (i, pt) in pts.iter().enumerate() {
            let reached = i as f64 / last;
            if p + 1e-9 >= reached {
                let appear = ctx.progress(c.start + c.duration * reached, 10.0);
                children.push(
                    circle(*pt, c.stroke_width * 1.75 * appear.max(0.2), Color::WHITE)
                        .stroke(Stroke::new(c.color, c.stroke_width * 0.75))
                        .build(),
                );
            }
        }
    }

    group().children(children).build()
}

#[derive(Clone, Debug)]
pub struct PieChart<'a> {
    pub data: &'a [Datum],
    pub center: Point,
    pub radius: f64,
    /// Non-zero for a donut.
    pub inner_radius: f64,
    /// Angular gap between slices in degrees.
    pub gap_deg: f64,
    pub start: f64,
    pub duration: f64,
    pub show_labels: bool,
}

impl<'a> PieChart<'a> {
    pub fn new(data: &'a [Datum], center: Point, radius: f64) -> Self {
        Self {
            data,
            center,
            radius,
            inner_radius: 0.0,
            gap_deg: 2.0,
            start: 0.0,
            duration: 45.0,
            show_labels: true,
        }
    }
}

pub fn pie_chart(ctx: &FrameCtx, c: &PieChart<'_>) -> Node {
    let total: f64 = c.data.iter().map(|d| d.value.max(0.0)).sum();
    if total <= 0.0 {
        return group().build();
    }
    let swept = 360.0 * ctx.eased(c.start, c.duration, Ease::OutCubic);
    let label = TextStyle::sized(c.radius * 0.12).weight(700);
    let label_r = if c.inner_radius > 0.0 {
        (c.radius + c.inner_radius) / 2.0
    } else {
        c.radius * 0.65
    };

    let mut children = Vec::new();
    let mut at = 0.0;
    for d in c.data {
        let sweep = d.value.max(0.0) / total * 360.0;
        let visible = (swept - at).clamp(0.0, sweep);
        let drawn = visible - c.gap_deg.min(sweep / 2.0);
        if drawn > 0.0 {
            let path = wedge_path(
                c.center,
                c.radius,
                c.inner_radius,
                at + c.gap_deg / 2.0,
                drawn,
            );
            children.push(shape(path).fill(d.color).build());
        }
        if c.show_labels && sweep > 12.0 {
            let shown = ((swept - at - sweep / 2.0) / (sweep / 2.0)).clamp(0.0, 1.0);
            if shown > 0.0 {
                let mid = (at + sweep / 2.0).to_radians();
                let pos = c.center + Vec2::new(mid.sin(), -mid.cos()) * label_r;
                children.push(
                    text(format!("{:.0}%", d.value / total * 100.0), pos)
                        .style(label.clone())
                        .fill(Color::WHITE)
                        .opacity(shown)
                        .centered_v()
                        .build(),
                );
            }
        }
        at += sweep;
    }
    group().children(children).build()
}

#[derive(Clone, Debug)]
pub struct ProgressRing {
    pub center: Point,
    pub radius: f64,
    pub width: f64,
    /// Target fill in `[0, 1]`.
    pub value: f64,
    pub color: Color,
    pub track: Color,
    pub start: f64,
    pub duration: f64,
    pub show_percent: bool,
}

impl ProgressRing {
    pub fn new(center: Point, radius: f64, value: f64) -> Self {
        Self {
            center,
            radius,
            width: radius * 0.12,
            value,
            color: Color::from_u32(0x10b981),
            track: Color::rgba(1.0, 1.0, 1.0, 0.1),
            start: 0.0,
            duration: 45.0,
            show_percent: true,
        }
    }
}

pub fn progress_ring(ctx: &FrameCtx, r: &ProgressRing) -> Node {
    let filled = r.value.clamp(0.0, 1.0) * ctx.eased(r.start, r.duration, Ease::OutCubic);
    let mut g = group().child(
        shape(ring_arc_path(r.center, r.radius, 0.0, 360.0)).stroke(Stroke::new(r.track, r.width)),
    );
    if filled > 0.0 {
        g = g.child(
            shape(ring_arc_path(r.center, r.radius, 0.0, 360.0 * filled))
                .stroke(Stroke::new(r.color, r.width).round()),
        );
    }
    if r.show_percent {
        g = g.child(
            text(format!("{:.0}%", filled * 100.0), r.center)
                .style(TextStyle::sized(r.radius * 0.45).weight(800).anchor(TextAnchor::Middle))
                .fill(Color::WHITE)
                .centered_v(),
        );
    }
    g.build()
}

#[cfg(test)]
#[path = "../../tests/unit/components/charts.rs"]
mod tests;
