use super::*;
use crate::foundation::core::{Canvas, Fps, FrameIndex};

fn ctx(frame: u64) -> FrameCtx {
    FrameCtx::new(FrameIndex(frame), Fps::whole(30), Canvas::new(1920, 1080), 300)
}

fn data() -> Vec<Datum> {
    vec![
        Datum::new("Jan", 40.0, Color::from_u32(0x3b82f6)),
        Datum::new("Feb", 80.0, Color::from_u32(0x8b5cf6)),
        Datum::new("Mar", 20.0, Color::from_u32(0x06b6d4)),
    ]
}

fn count_shapes(node: &Node) -> usize {
    match node {
        Node::Shape(_) => 1,
        Node::Group(g) => g.children.iter().map(count_shapes).sum(),
        Node::Text(_) => 0,
    }
}

#[test]
fn bars_grow_in_stagger_order() {
    let d = data();
    let c = BarChart::new(&d, Point::new(960.0, 800.0));
    assert_eq!(bar_height(&ctx(0), &c, 0), 0.0);

    let mid = ctx(20);
    assert!(bar_height(&mid, &c, 0) > 0.0);
    assert_eq!(bar_height(&mid, &c, 2), 0.0);

    let done = ctx(200);
    assert!((bar_height(&done, &c, 1) - 300.0).abs() < 1e-9);
    assert!((bar_height(&done, &c, 0) - 150.0).abs() < 1e-9);
    assert_eq!(bar_height(&done, &c, 9), 0.0);
}

#[test]
fn bar_chart_draws_one_bar_per_datum_when_grown() {
    let d = data();
    let c = BarChart::new(&d, Point::new(960.0, 800.0));
    assert_eq!(count_shapes(&bar_chart(&ctx(0), &c)), 0);
    assert_eq!(count_shapes(&bar_chart(&ctx(200), &c)), 3);
}

#[test]
fn chart_points_span_area() {
    let area = Rect::new(0.0, 0.0, 300.0, 100.0);
    let pts = chart_points(&[10.0, 20.0, 30.0, 40.0], area);
    assert_eq!(pts.first(), Some(&Point::new(0.0, 100.0)));
    assert_eq!(pts.last(), Some(&Point::new(300.0, 0.0)));

    let flat = chart_points(&[5.0, 5.0], area);
    assert!(flat.iter().all(|p| p.y == 100.0));
}

#[test]
fn straight_line_length_matches_geometry() {
    let pts = [Point::new(0.0, 0.0), Point::new(3.0, 4.0), Point::new(6.0, 0.0)];
    let straight = line_path(&pts, false);
    assert!((path_length(&straight) - 10.0).abs() < 1e-6);

    let smooth = line_path(&pts, true);
    assert!(path_length(&smooth) >= 10.0 - 1e-6);
}

#[test]
fn line_chart_draws_progressively() {
    let values = [1.0, 3.0, 2.0, 5.0];
    let c = LineChart::new(&values, Rect::new(100.0, 100.0, 900.0, 500.0));
    assert_eq!(count_shapes(&line_chart(&ctx(0), &c)), 0);

    let Node::Group(g) = line_chart(&ctx(30), &c) else {
        panic!("expected group");
    };
    let Node::Shape(line) = &g.children[1] else {
        panic!("expected line");
    };
    let stroke = line.stroke.as_ref().expect("stroke");
    assert!(stroke.dash_offset > 0.0);

    // area + line + all points
    assert_eq!(count_shapes(&line_chart(&ctx(120), &c)), 6);
}

#[test]
fn pie_sweeps_to_full_circle() {
    let d = data();
    let c = PieChart::new(&d, Point::new(500.0, 500.0), 200.0);
    assert_eq!(count_shapes(&pie_chart(&ctx(0), &c)), 0);
    assert_eq!(count_shapes(&pie_chart(&ctx(200), &c)), 3);

    let empty: Vec<Datum> = Vec::new();
    let none = PieChart::new(&empty, Point::ZERO, 10.0);
    assert_eq!(count_shapes(&pie_chart(&ctx(200), &none)), 0);
}

#[test]
fn progress_ring_fills_to_value() {
    let r = ProgressRing::new(Point::new(100.0, 100.0), 80.0, 0.75);
    assert_eq!(count_shapes(&progress_ring(&ctx(0), &r)), 1);
    let Node::Group(g) = progress_ring(&ctx(200), &r) else {
        panic!("expected group");
    };
    assert_eq!(g.children.len(), 3);
    let Node::Text(t) = &g.children[2] else {
        panic!("expected label");
    };
    assert_eq!(t.content, "75%");
}
