use super::*;
use crate::{
    assets::color::{Color, gradient},
    foundation::core::{Canvas, Point},
    scene::{
        dsl::{SceneBuilder, group, rect, text},
        fingerprint::fingerprint_scene,
        model::Stroke,
    },
};

fn sample_scene(label: &str) -> Scene {
    SceneBuilder::new(Canvas::new(320, 180))
        .background(gradient("ocean"))
        .node(
            group()
                .translate(10.0, 20.0)
                .opacity(0.5)
                .clip(Rect::new(0.0, 0.0, 100.0, 50.0))
                .blur(4.0)
                .child(rect(Rect::new(0.0, 0.0, 50.0, 25.0), Color::rgb8(255, 0, 0))),
        )
        .node(text(label, Point::new(160.0, 90.0)).outline(Stroke::new(Color::BLACK, 2.0)))
        .build()
}

#[test]
fn writes_header_defs_and_nodes() {
    let svg = to_svg(&sample_scene("Hello"));
    assert!(svg.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="320" height="180""#));
    assert!(svg.ends_with("</svg>"));
    assert!(svg.contains(r#"<linearGradient id="g0""#));
    assert!(svg.contains(r#"<clipPath id="c0">"#));
    assert!(svg.contains(r#"<filter id="f0""#));
    assert!(svg.contains(r#"transform="matrix(1 0 0 1 10 20)""#));
    assert!(svg.contains(r##"fill="#ff0000""##));
    assert!(svg.contains(">Hello</text>"));

    let defs_at = svg.find("<defs>").unwrap();
    let body_at = svg.find("<rect x=\"0\"").unwrap();
    assert!(defs_at < body_at);
}

#[test]
fn escapes_text() {
    let svg = to_svg(&sample_scene("a < b & \"c\""));
    assert!(svg.contains("a &lt; b &amp; &quot;c&quot;"));
}

#[test]
fn serialization_is_deterministic() {
    let a = sample_scene("same");
    let b = sample_scene("same");
    assert_eq!(to_svg(&a), to_svg(&b));
    assert_eq!(fingerprint_scene(&a), fingerprint_scene(&b));
    assert_ne!(fingerprint_scene(&a), fingerprint_scene(&sample_scene("other")));
}

#[test]
fn numbers_are_trimmed() {
    assert_eq!(num(1.0), "1");
    assert_eq!(num(0.12345), "0.123");
    assert_eq!(num(-0.0001), "0");
    assert_eq!(num(f64::NAN), "0");
    assert_eq!(num(-2.5), "-2.5");
}

#[test]
fn invisible_nodes_are_skipped() {
    let scene = SceneBuilder::new(Canvas::new(10, 10))
        .node(rect(Rect::new(0.0, 0.0, 5.0, 5.0), Color::WHITE).opacity(0.0))
        .node(group().opacity(0.0).child(text("x", Point::ZERO)))
        .build();
    let svg = to_svg(&scene);
    assert!(!svg.contains("<path"));
    assert!(!svg.contains("<text"));
}
