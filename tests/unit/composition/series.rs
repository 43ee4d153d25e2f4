use super::*;
use crate::{
    assets::color::Color,
    foundation::core::{Canvas, Fps, FrameIndex, Point},
    scene::dsl::text,
};

fn ctx(frame: u64, total: u64) -> FrameCtx {
    FrameCtx::new(FrameIndex(frame), Fps::whole(30), Canvas::new(100, 100), total)
}

fn label(i: usize, ctx: &FrameCtx) -> StudioResult<Node> {
    Ok(text(format!("{i}@{}", ctx.frame), Point::ZERO)
        .fill(Color::WHITE)
        .build())
}

#[test]
fn hard_cuts_tile_the_timeline() {
    let s = Series::from_secs(Fps::whole(30), &[1.0, 2.0, 0.5]);
    assert_eq!(s.starts(), vec![0, 30, 90]);
    assert_eq!(s.total_frames(), 105);

    let a = s.active(45.0);
    assert_eq!(a.len(), 1);
    assert_eq!(a[0].index, 1);
    assert_eq!(a[0].local_frame, 15.0);
}

#[test]
fn overlaps_shorten_the_series() {
    let s = Series::new()
        .then(60)
        .then_with(Transition::Fade, 20, 60)
        .then(30);
    assert_eq!(s.starts(), vec![0, 40, 100]);
    assert_eq!(s.total_frames(), 130);

    let both = s.active(50.0);
    assert_eq!(both.len(), 2);
    assert_eq!((both[0].index, both[1].index), (0, 1));
    assert_eq!(both[1].local_frame, 10.0);
}

#[test]
fn out_of_range_frames_clamp_to_ends() {
    let s = Series::new().then(10).then(10);
    let end = s.active(500.0);
    assert_eq!(end[0].index, 1);
    assert_eq!(end[0].local_frame, 9.0);
    let before = s.active(-3.0);
    assert_eq!(before[0].index, 0);
    assert_eq!(before[0].local_frame, 0.0);
}

#[test]
fn validate_rejects_bad_segments() {
    assert!(Series::new().validate().is_err());
    assert!(Series::new().then(0).validate().is_err());
    assert!(
        Series::new()
            .then(10)
            .then_with(Transition::Fade, 10, 30)
            .validate()
            .is_err()
    );
    assert!(
        Series::new()
            .then_with(Transition::Fade, 5, 30)
            .validate()
            .is_err()
    );
    assert!(Series::new().then(10).then_with(Transition::Zoom, 4, 10).validate().is_ok());
}

#[test]
fn compose_rebases_and_crosses() {
    let s = Series::new().then(30).then_with(Transition::Fade, 10, 30);
    let Node::Text(t) = s.compose(&ctx(5, 50), label).expect("single") else {
        panic!("expected text");
    };
    assert_eq!(t.content, "0@5");

    let Node::Group(g) = s.compose(&ctx(25, 50), label).expect("cross") else {
        panic!("expected cross group");
    };
    assert_eq!(g.children.len(), 2);
}
