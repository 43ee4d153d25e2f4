use super::*;
use crate::{
    assets::color::Color,
    encode::sink::InMemorySink,
    foundation::core::{Canvas, Fps},
    scene::dsl::SceneBuilder,
};

/// Holds each gray level for four frames.
fn steps(duration: u64) -> Composition {
    Composition::new("steps", Canvas::new(16, 8), Fps::whole(30), duration, |ctx| {
        let v = ((ctx.frame / 4.0).floor() * 0.1).min(1.0);
        Ok(SceneBuilder::new(ctx.canvas)
            .background(Color::rgba(v, v, v, 1.0))
            .build())
    })
    .expect("composition")
}

#[test]
fn single_frame_matches_the_scene() {
    let mut r = SvgRasterizer::default();
    let frame = render_frame(&steps(12), FrameIndex(8), &mut r).expect("frame");
    assert_eq!((frame.width, frame.height), (16, 8));
    assert_eq!(frame.pixel(0, 0), Some([51, 51, 51, 255]));
}

#[test]
fn parallel_output_matches_sequential() {
    let comp = steps(20);
    let mut r = SvgRasterizer::default();
    let seq = render_frames(&comp, comp.range(), &mut r, &RenderThreading::default())
        .expect("sequential");
    let par = render_frames(
        &comp,
        comp.range(),
        &mut r,
        &RenderThreading {
            parallel: true,
            chunk_size: 6,
            threads: Some(2),
            static_frame_elision: false,
        },
    )
    .expect("parallel");
    assert_eq!(seq.len(), 20);
    assert_eq!(seq, par);
}

#[test]
fn elision_reuses_identical_frames() {
    let comp = steps(16);
    let mut r = SvgRasterizer::default();
    let (frames, stats) = render_frames_with_stats(
        &comp,
        comp.range(),
        &mut r,
        &RenderThreading::parallel(Some(2), 8),
    )
    .expect("render");
    assert_eq!(frames.len(), 16);
    assert_eq!(stats.frames_total, 16);
    assert_eq!(stats.frames_rendered, 4);
    assert_eq!(stats.frames_elided, 12);
    assert_eq!(frames[0], frames[3]);
    assert_ne!(frames[3], frames[4]);
}

#[test]
fn sink_receives_frames_in_order_with_progress() {
    let comp = steps(10);
    let mut sink = InMemorySink::new();
    let mut seen = Vec::new();
    let opts = RenderOptions {
        range: None,
        threading: RenderThreading {
            chunk_size: 4,
            ..RenderThreading::default()
        },
        ..RenderOptions::default()
    };
    let stats = render_to_sink(
        &comp,
        &opts,
        &mut SvgRasterizer::default(),
        &mut sink,
        &mut |p| seen.push(p),
    )
    .expect("render");

    assert_eq!(stats.frames_total, 10);
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, (0..10).collect::<Vec<_>>());
    assert!(sink.is_finished());
    assert_eq!(sink.config().map(|c| (c.width, c.height)), Some((16, 8)));

    assert!(seen.windows(2).all(|w| w[0].progress <= w[1].progress));
    let last = seen.last().expect("progress");
    assert_eq!(last.stage, RenderStage::Done);
    assert_eq!(last.progress, 1.0);
    assert_eq!(last.encoded_frames, 10);
    assert!(seen.iter().any(|p| p.stage == RenderStage::Muxing));
}

#[test]
fn partial_ranges_keep_absolute_indices() {
    let comp = steps(10);
    let mut sink = InMemorySink::new();
    let opts = RenderOptions {
        range: Some(FrameRange::new(FrameIndex(3), FrameIndex(6)).expect("range")),
        ..RenderOptions::default()
    };
    render_to_sink(&comp, &opts, &mut SvgRasterizer::default(), &mut sink, &mut |_| {})
        .expect("render");
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, vec![3, 4, 5]);
}

#[test]
fn rejects_bad_ranges_and_thread_counts() {
    let comp = steps(5);
    let mut r = SvgRasterizer::default();
    let t = RenderThreading::default();
    assert!(render_frames(&comp, FrameRange::first(6), &mut r, &t).is_err());
    assert!(render_frames(&comp, FrameRange::first(0), &mut r, &t).is_err());
    let zero = RenderThreading {
        parallel: true,
        threads: Some(0),
        ..RenderThreading::default()
    };
    assert!(render_frames(&comp, comp.range(), &mut r, &zero).is_err());
}

#[test]
fn render_to_file_writes_a_video_when_ffmpeg_exists() {
    if !crate::encode::ffmpeg::is_ffmpeg_on_path() {
        return;
    }
    let dir = tempfile::tempdir().expect("tempdir");
    let out = dir.path().join("steps.mp4");
    let comp = Composition::new("odd", Canvas::new(17, 9), Fps::whole(30), 6, |ctx| {
        Ok(SceneBuilder::new(ctx.canvas).background(Color::WHITE).build())
    })
    .expect("composition");
    render_to_file(
        &comp,
        out.clone(),
        EncoderSettings::default(),
        &RenderOptions::default(),
        &mut SvgRasterizer::default(),
        &mut |_| {},
    )
    .expect("encode");
    assert!(std::fs::metadata(&out).expect("file").len() > 0);
}

#[test]
fn raised_cancel_flag_stops_before_the_sink_finishes() {
    let comp = steps(12);
    let mut sink = InMemorySink::new();
    let cancel = Arc::new(AtomicBool::new(false));
    let opts = RenderOptions {
        threading: RenderThreading {
            chunk_size: 4,
            ..RenderThreading::default()
        },
        cancel: Some(Arc::clone(&cancel)),
        ..RenderOptions::default()
    };
    let err = render_to_sink(
        &comp,
        &opts,
        &mut SvgRasterizer::default(),
        &mut sink,
        &mut |p| {
            if p.encoded_frames == 5 {
                cancel.store(true, Ordering::Relaxed);
            }
        },
    )
    .expect_err("cancelled");

    assert!(matches!(err, StudioError::Cancelled));
    assert_eq!(sink.frames().len(), 5);
    assert!(!sink.is_finished());
}
