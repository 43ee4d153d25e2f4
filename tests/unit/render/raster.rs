use super::*;
use crate::{
    assets::color::Color,
    foundation::core::Rect,
    scene::{
        dsl::{SceneBuilder, rect},
        model::Scene,
    },
};

fn split_scene() -> Scene {
    SceneBuilder::new(Canvas::new(8, 4))
        .background(Color::BLACK)
        .node(rect(Rect::new(4.0, 0.0, 8.0, 4.0), Color::rgb8(255, 0, 0)))
        .build()
}

#[test]
fn rasterizes_solid_regions() {
    let mut r = SvgRasterizer::default();
    let frame = r.render_scene(&split_scene()).expect("render");
    assert_eq!((frame.width, frame.height), (8, 4));
    assert_eq!(frame.data.len(), 8 * 4 * 4);
    assert!(frame.premultiplied);
    assert_eq!(frame.pixel(1, 1), Some([0, 0, 0, 255]));
    assert_eq!(frame.pixel(6, 2), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(8, 0), None);
}

#[test]
fn transparent_background_stays_transparent() {
    let scene = SceneBuilder::new(Canvas::new(4, 4))
        .background(Color::TRANSPARENT)
        .build();
    let frame = SvgRasterizer::default().render_scene(&scene).expect("render");
    assert!(frame.data.iter().all(|b| *b == 0));
}

#[test]
fn rejects_malformed_svg() {
    let err = SvgRasterizer::default()
        .render_svg("<svg", Canvas::new(4, 4))
        .expect_err("parse");
    assert!(matches!(err, StudioError::Render(_)));
}

#[test]
fn straight_alpha_unpremultiplies() {
    let frame = FrameRGBA {
        width: 1,
        height: 1,
        data: vec![64, 0, 0, 128],
        premultiplied: true,
    };
    assert_eq!(frame.to_straight(), vec![128, 0, 0, 128]);
}

#[test]
fn workers_share_the_font_library() {
    let r = SvgRasterizer::default();
    let fonts = r.worker_fonts().expect("fonts");
    assert_eq!(fonts.face_count(), r.fonts().face_count());
}
