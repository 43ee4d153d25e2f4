//! Primitive shape paths and filled shape builders.

use std::f64::consts::{FRAC_PI_2, TAU};

use kurbo::{Arc, Circle, RoundedRect, Shape as _};

use crate::{
    foundation::core::{BezPath, Point, Rect, Vec2},
    scene::{
        dsl::{ShapeBuilder, shape},
        model::Paint,
    },
};

const TOLERANCE: f64 = 0.1;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

pub fn circle_path(center: Point, radius: f64) -> BezPath {
    Circle::new(center, radius.max(0.0)).to_path(TOLERANCE)
}

pub fn circle(center: Point, radius: f64, paint: impl Into<Paint>) -> ShapeBuilder {
    shape(circle_path(center, radius)).fill(paint)
}

pub fn rounded_rect_path(rect: Rect, radius: f64) -> BezPath {
    let max = rect.width().min(rect.height()) / 2.0;
    RoundedRect::from_rect(rect, radius.clamp(0.0, max.max(0.0))).to_path(TOLERANCE)
}

pub fn rounded_rect(rect: Rect, radius: f64, paint: impl Into<Paint>) -> ShapeBuilder {
    shape(rounded_rect_path(rect, radius)).fill(paint)
}

/// Rect of `size` centered on `center`.
pub fn centered_rect(center: Point, width: f64, height: f64) -> Rect {
    Rect::from_center_size(center, (width, height))
}

/// Closed path through `points`.
pub fn polyline_closed(points: &[Point]) -> BezPath {
    let mut p = BezPath::new();
    let mut iter = points.iter();
    if let Some(first) = iter.next() {
        p.move_to(*first);
        for pt in iter {
            p.line_to(*pt);
        }
        p.close_path();
    }
    p
}

/// Equilateral triangle with side `length`, centered on its bounding box, pointing `dir`.
pub fn triangle_path(center: Point, length: f64, dir: Direction) -> BezPath {
    let h = length * 3f64.sqrt() / 2.0;
    let (half_l, half_h) = (length / 2.0, h / 2.0);
    let pts = match dir {
        Direction::Up => [(0.0, -half_h), (half_l, half_h), (-half_l, half_h)],
        Direction::Down => [(0.0, half_h), (-half_l, -half_h), (half_l, -half_h)],
        Direction::Left => [(-half_h, 0.0), (half_h, -half_l), (half_h, half_l)],
        Direction::Right => [(half_h, 0.0), (-half_h, half_l), (-half_h, -half_l)],
    };
    let pts: Vec<Point> = pts
        .iter()
        .map(|(x, y)| center + Vec2::new(*x, *y))
        .collect();
    polyline_closed(&pts)
}

pub fn triangle(center: Point, length: f64, dir: Direction, paint: impl Into<Paint>) -> ShapeBuilder {
    shape(triangle_path(center, length, dir)).fill(paint)
}

/// Regular polygon with its first vertex at the top (before `rotation_deg`).
pub fn polygon_path(center: Point, radius: f64, sides: u32, rotation_deg: f64) -> BezPath {
    let sides = sides.max(3);
    let rot = rotation_deg.to_radians() - FRAC_PI_2;
    let pts: Vec<Point> = (0..sides)
        .map(|i| {
            let a = rot + TAU * f64::from(i) / f64::from(sides);
            center + Vec2::new(a.cos(), a.sin()) * radius
        })
        .collect();
    polyline_closed(&pts)
}

pub fn polygon(
    center: Point,
    radius: f64,
    sides: u32,
    rotation_deg: f64,
    paint: impl Into<Paint>,
) -> ShapeBuilder {
    shape(polygon_path(center, radius, sides, rotation_deg)).fill(paint)
}

pub fn star_path(center: Point, points: u32, outer: f64, inner: f64, rotation_deg: f64) -> BezPath {
    let points = points.max(2);
    let rot = rotation_deg.to_radians() - FRAC_PI_2;
    let n = points * 2;
    let pts: Vec<Point> = (0..n)
        .map(|i| {
            let r = if i % 2 == 0 { outer } else { inner };
            let a = rot + TAU * f64::from(i) / f64::from(n);
            center + Vec2::new(a.cos(), a.sin()) * r
        })
        .collect();
    polyline_closed(&pts)
}

pub fn star(
    center: Point,
    points: u32,
    outer: f64,
    inner: f64,
    paint: impl Into<Paint>,
) -> ShapeBuilder {
    shape(star_path(center, points, outer, inner, 0.0)).fill(paint)
}

/// Open circular arc starting at `start_deg` (0 = 12 o'clock, clockwise) sweeping `sweep_deg`.
pub fn ring_arc_path(center: Point, radius: f64, start_deg: f64, sweep_deg: f64) -> BezPath {
    let sweep = sweep_deg.clamp(-360.0, 360.0).to_radians();
    let arc = Arc::new(
        center,
        Vec2::new(radius, radius),
        start_deg.to_radians() - FRAC_PI_2,
        sweep,
        0.0,
    );
    let mut p = BezPath::new();
    if sweep.abs() < 1e-9 {
        return p;
    }
    p.move_to(arc.center + Vec2::from_angle(arc.start_angle) * radius);
    arc.to_cubic_beziers(TOLERANCE, |a, b, c| p.curve_to(a, b, c));
    p
}

/// Filled pie wedge (or donut segment when `inner > 0`).
pub fn wedge_path(center: Point, outer: f64, inner: f64, start_deg: f64, sweep_deg: f64) -> BezPath {
    let mut p = ring_arc_path(center, outer, start_deg, sweep_deg);
    if p.elements().is_empty() {
        return p;
    }
    if inner > 0.0 {
        let back = ring_arc_path(center, inner, start_deg + sweep_deg, -sweep_deg);
        let mut els = back.elements().iter();
        if let Some(kurbo::PathEl::MoveTo(start)) = els.next() {
            p.line_to(*start);
        }
        for el in els {
            p.push(*el);
        }
    } else {
        p.line_to(center);
    }
    p.close_path();
    p
}
