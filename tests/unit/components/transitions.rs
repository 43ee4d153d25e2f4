use super::*;
use crate::foundation::core::{Canvas, Fps, FrameIndex, Point};
use crate::scene::dsl::text;

fn ctx(frame: u64) -> FrameCtx {
    FrameCtx::new(FrameIndex(frame), Fps::whole(30), Canvas::new(1000, 500), 100)
}

fn child() -> Node {
    text("x", Point::new(10.0, 10.0)).build()
}

fn group_of(node: Node) -> crate::scene::model::GroupNode {
    match node {
        Node::Group(g) => g,
        other => panic!("expected group, got {other:?}"),
    }
}

#[test]
fn fade_in_and_out_are_mirrored() {
    assert_eq!(group_of(fade(&ctx(0), child(), 0.0, 20.0, Phase::In)).opacity, 0.0);
    assert!(matches!(fade(&ctx(20), child(), 0.0, 20.0, Phase::In), Node::Text(_)));
    assert!(matches!(fade(&ctx(0), child(), 0.0, 20.0, Phase::Out), Node::Text(_)));
    let mid_in = group_of(fade(&ctx(10), child(), 0.0, 20.0, Phase::In)).opacity;
    let mid_out = group_of(fade(&ctx(10), child(), 0.0, 20.0, Phase::Out)).opacity;
    assert!((mid_in + mid_out - 1.0).abs() < 1e-9);
}

#[test]
fn fade_through_peaks_mid_window() {
    assert!(fade_through(&ctx(0), Color::BLACK, 0.0, 20.0).is_none());
    let Node::Shape(s) = fade_through(&ctx(10), Color::BLACK, 0.0, 20.0).expect("overlay") else {
        panic!("expected shape");
    };
    assert_eq!(s.opacity, 1.0);
    assert!(fade_through(&ctx(20), Color::BLACK, 0.0, 20.0).is_none());
}

#[test]
fn slide_left_enters_from_right() {
    let start = group_of(slide(&ctx(0), child(), 0.0, 20.0, Direction::Left, Phase::In));
    assert_eq!(start.transform.translation(), Vec2::new(1000.0, 0.0));
    let end = group_of(slide(&ctx(20), child(), 0.0, 20.0, Direction::Left, Phase::In));
    assert_eq!(end.transform.translation(), Vec2::ZERO);
    let gone = group_of(slide(&ctx(20), child(), 0.0, 20.0, Direction::Left, Phase::Out));
    assert_eq!(gone.transform.translation(), Vec2::new(-1000.0, 0.0));
    let down = group_of(slide(&ctx(0), child(), 0.0, 20.0, Direction::Down, Phase::In));
    assert_eq!(down.transform.translation(), Vec2::new(0.0, -500.0));
}

#[test]
fn wipe_clip_grows_from_edge() {
    let half = group_of(wipe(&ctx(10), child(), 0.0, 20.0, Direction::Right, Phase::In));
    assert_eq!(half.clip, Some(Rect::new(0.0, 0.0, 500.0, 500.0)));
    let up = group_of(wipe(&ctx(20), child(), 0.0, 20.0, Direction::Up, Phase::In));
    assert_eq!(up.clip, Some(Rect::new(0.0, 0.0, 1000.0, 500.0)));
}

#[test]
fn zoom_and_blur_settle_when_shown() {
    let z = group_of(zoom(&ctx(20), child(), 0.0, 20.0, Phase::In));
    assert_eq!(z.opacity, 1.0);
    assert_eq!(z.transform * Point::new(3.0, 4.0), Point::new(3.0, 4.0));
    let b = group_of(blur(&ctx(0), child(), 0.0, 20.0, Phase::In));
    assert_eq!(b.blur, Some(MAX_BLUR));
    assert_eq!(group_of(blur(&ctx(20), child(), 0.0, 20.0, Phase::In)).blur, None);
}

#[test]
fn cross_paints_outgoing_first() {
    let g = group_of(Transition::Fade.cross(&ctx(10), child(), child(), 0.0, 20.0));
    assert_eq!(g.children.len(), 2);

    let wipe = group_of(Transition::Wipe { direction: Direction::Left }.cross(
        &ctx(10),
        child(),
        child(),
        0.0,
        20.0,
    ));
    assert!(matches!(wipe.children[0], Node::Text(_)));
}

#[test]
fn transitions_deserialize_with_defaults() {
    let t: Transition = serde_json::from_str(r#"{"type":"slide"}"#).expect("json");
    assert_eq!(t, Transition::Slide { direction: Direction::Up });
    let w: Transition = serde_json::from_str(r#"{"type":"wipe","direction":"left"}"#).expect("json");
    assert_eq!(w, Transition::Wipe { direction: Direction::Left });
}
