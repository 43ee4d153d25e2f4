use super::*;

#[test]
fn maps_linearly_inside_range() {
    let v = interpolate(15.0, &[0.0, 30.0], &[0.0, 1.0], InterpolateOpts::default()).unwrap();
    assert!((v - 0.5).abs() < 1e-12);
}

#[test]
fn multi_segment_picks_correct_segment() {
    // Cursor blink: 1 -> 0 -> 1 over 30 frames.
    let r = [0.0, 15.0, 30.0];
    let o = [1.0, 0.0, 1.0];
    let opts = InterpolateOpts::clamped();
    assert_eq!(interpolate(0.0, &r, &o, opts).unwrap(), 1.0);
    assert_eq!(interpolate(15.0, &r, &o, opts).unwrap(), 0.0);
    assert!((interpolate(22.5, &r, &o, opts).unwrap() - 0.5).abs() < 1e-12);
    assert_eq!(interpolate(30.0, &r, &o, opts).unwrap(), 1.0);
}

#[test]
fn extrapolation_modes() {
    let r = [0.0, 10.0];
    let o = [0.0, 100.0];
    let extend = InterpolateOpts::default();
    assert_eq!(interpolate(20.0, &r, &o, extend).unwrap(), 200.0);
    assert_eq!(interpolate(-5.0, &r, &o, extend).unwrap(), -50.0);

    let clamp = InterpolateOpts::clamped();
    assert_eq!(interpolate(20.0, &r, &o, clamp).unwrap(), 100.0);
    assert_eq!(interpolate(-5.0, &r, &o, clamp).unwrap(), 0.0);

    let identity = InterpolateOpts {
        left: Extrapolate::Identity,
        right: Extrapolate::Identity,
        ..InterpolateOpts::default()
    };
    assert_eq!(interpolate(20.0, &r, &o, identity).unwrap(), 20.0);
    assert_eq!(interpolate(-5.0, &r, &o, identity).unwrap(), -5.0);
}

#[test]
fn easing_applies_within_segment() {
    let v = interpolate(
        15.0,
        &[0.0, 30.0],
        &[50.0, 0.0],
        InterpolateOpts::eased(Ease::OutCubic),
    )
    .unwrap();
    // out-cubic at 0.5 is 0.875, so y has travelled 87.5% of the way.
    assert!((v - 6.25).abs() < 1e-9);
}

#[test]
fn rejects_malformed_ranges() {
    let opts = InterpolateOpts::default();
    assert!(interpolate(1.0, &[0.0], &[0.0], opts).is_err());
    assert!(interpolate(1.0, &[0.0, 1.0], &[0.0], opts).is_err());
    assert!(interpolate(1.0, &[1.0, 0.0], &[0.0, 1.0], opts).is_err());
    assert!(interpolate(1.0, &[0.0, 0.0], &[0.0, 1.0], opts).is_err());
    assert!(interpolate(f64::NAN, &[0.0, 1.0], &[0.0, 1.0], opts).is_err());
}

#[test]
fn tween_clamps_and_falls_back() {
    assert_eq!(tween(-10.0, (0.0, 30.0), (0.5, 1.0), Ease::Linear), 0.5);
    assert_eq!(tween(45.0, (0.0, 30.0), (0.5, 1.0), Ease::Linear), 1.0);
    assert_eq!(tween(5.0, (3.0, 3.0), (0.25, 1.0), Ease::Linear), 0.25);
}

#[test]
fn colors_blend_across_stops() {
    let a = Color::rgb8(0, 0, 0);
    let b = Color::rgb8(255, 255, 255);
    let mid = interpolate_color(5.0, &[0.0, 10.0], &[a, b]).unwrap();
    assert!((mid.r - 0.5).abs() < 1e-9);
    let end = interpolate_color(99.0, &[0.0, 10.0], &[a, b]).unwrap();
    assert_eq!(end, b);
}
