use super::*;
use crate::{assets::color::Color, scene::dsl::SceneBuilder};

fn comp() -> Composition {
    Composition::new("solid", Canvas::new(64, 36), Fps::whole(30), 90, |ctx| {
        let v = (ctx.frame / 90.0).min(1.0);
        Ok(SceneBuilder::new(ctx.canvas)
            .background(Color::rgba(v, v, v, 1.0))
            .build())
    })
    .expect("composition")
}

#[test]
fn rejects_empty_timelines_and_canvases() {
    let draw = |ctx: &FrameCtx| -> StudioResult<Scene> { Ok(Scene::new(ctx.canvas, Color::BLACK)) };
    assert!(Composition::new("x", Canvas::new(10, 10), Fps::whole(30), 0, draw).is_err());
    assert!(Composition::new("x", Canvas::new(0, 10), Fps::whole(30), 10, draw).is_err());
}

#[test]
fn scene_at_checks_bounds() {
    let c = comp();
    assert!(c.scene_at(FrameIndex(0)).is_ok());
    assert!(c.scene_at(FrameIndex(89)).is_ok());
    let err = c.scene_at(FrameIndex(90)).expect_err("out of range");
    assert!(matches!(err, StudioError::Evaluation(_)));
}

#[test]
fn with_output_keeps_seconds() {
    let c = comp()
        .with_output(Canvas::new(128, 72), Fps::whole(60))
        .expect("retarget");
    assert_eq!(c.duration, 180);
    assert_eq!(c.duration_secs(), 3.0);
    assert_eq!(c.range().len_frames(), 180);

    let ctx = c.ctx_at(FrameIndex(120));
    assert_eq!(ctx.frame, 60.0);
    assert_eq!(ctx.fps, Fps::whole(30));
    assert_eq!(ctx.canvas, Canvas::new(128, 72));
    assert_eq!(c.scene_at(FrameIndex(179)).expect("scene").canvas, Canvas::new(128, 72));
}

#[test]
fn mismatched_scene_canvas_is_an_error() {
    let c = Composition::new("bad", Canvas::new(10, 10), Fps::whole(30), 5, |_| {
        Ok(Scene::new(Canvas::new(20, 20), Color::BLACK))
    })
    .expect("composition");
    assert!(c.scene_at(FrameIndex(0)).is_err());
}
