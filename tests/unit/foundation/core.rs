use super::*;

#[test]
fn frame_range_is_half_open() {
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert!(!r.contains(FrameIndex(1)));
    assert!(r.contains(FrameIndex(2)));
    assert!(r.contains(FrameIndex(4)));
    assert!(!r.contains(FrameIndex(5)));
    assert_eq!(r.len_frames(), 3);
    assert_eq!(
        r.iter().collect::<Vec<_>>(),
        [FrameIndex(2), FrameIndex(3), FrameIndex(4)]
    );
    assert!(FrameRange::new(FrameIndex(5), FrameIndex(2)).is_err());
    assert!(FrameRange::first(0).is_empty());
}

#[test]
fn fractional_rates_round_trip_frames() {
    let fps = Fps::new(30000, 1001).unwrap();
    let secs = fps.frames_to_secs(123);
    assert_eq!(fps.secs_to_frames_round(secs), 123);
    assert!(Fps::new(30, 0).is_err());
    assert!(Fps::new(0, 1).is_err());
    assert_eq!(Fps::whole(30).secs_to_frames_round(4.0), 120);
    assert_eq!(Fps::whole(25).frames_to_secs(50), 2.0);
}

#[test]
fn canvas_geometry() {
    assert!(Canvas::new(0, 1920).validate().is_err());
    let c = Canvas::new(1080, 1920);
    assert!(c.validate().is_ok());
    assert!(c.is_portrait());
    assert!(!Canvas::new(1920, 1080).is_portrait());
    assert_eq!(c.min_side(), 1080.0);
    assert_eq!(c.center(), Point::new(540.0, 960.0));
    assert_eq!(c.rect().width(), 1080.0);
}
