use super::*;

#[test]
fn scene_builder_keeps_paint_order() {
    let canvas = Canvas::new(100, 50);
    let scene = SceneBuilder::new(canvas)
        .background(Color::WHITE)
        .node(rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::BLACK))
        .node(text("hi", Point::new(5.0, 5.0)))
        .maybe(None::<Node>)
        .build();

    assert_eq!(scene.canvas, canvas);
    assert_eq!(scene.nodes.len(), 2);
    assert!(matches!(scene.nodes[0], Node::Shape(_)));
    assert!(matches!(scene.nodes[1], Node::Text(_)));
}

#[test]
fn group_builder_composes_transforms() {
    let node = group()
        .translate(10.0, 0.0)
        .scale_about(Point::new(0.0, 0.0), 2.0)
        .opacity(1.5)
        .blur(0.01)
        .child(rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE))
        .build();

    let Node::Group(g) = node else {
        panic!("expected group");
    };
    assert_eq!(g.opacity, 1.0);
    assert_eq!(g.blur, None);
    assert_eq!(g.transform * Point::new(1.0, 1.0), Point::new(12.0, 2.0));
}

#[test]
fn rotate_about_keeps_pivot() {
    let Node::Group(g) = group().rotate_about(Point::new(5.0, 5.0), 90.0).build() else {
        panic!("expected group");
    };
    let p = g.transform * Point::new(5.0, 5.0);
    assert!((p.x - 5.0).abs() < 1e-9 && (p.y - 5.0).abs() < 1e-9);
}

#[test]
fn opacity_wrapper_collapses_when_opaque() {
    let n = rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE).build();
    assert!(matches!(n.clone().with_opacity(1.0), Node::Shape(_)));
    assert!(matches!(n.with_opacity(0.5), Node::Group(_)));
}
