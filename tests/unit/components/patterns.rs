use super::*;
use crate::foundation::core::{Canvas, Fps, FrameIndex, Vec2};
use crate::scene::model::GroupNode;

fn ctx(frame: u64) -> FrameCtx {
    FrameCtx::new(FrameIndex(frame), Fps::whole(30), Canvas::new(400, 300), 300)
}

fn group_of(node: Node) -> GroupNode {
    match node {
        Node::Group(g) => g,
        other => panic!("expected group, got {other:?}"),
    }
}

/// The inner (scrolled) group of a pattern layer.
fn scrolled(node: Node) -> GroupNode {
    let mut outer = group_of(node);
    group_of(outer.children.remove(1))
}

#[test]
fn every_pattern_draws_a_clipped_layer() {
    for pattern in [
        Pattern::Grid,
        Pattern::Dots,
        Pattern::Diagonal,
        Pattern::Checkerboard,
        Pattern::Waves,
        Pattern::Zigzag,
        Pattern::Circles,
    ] {
        let p = PatternBackground {
            pattern,
            ..PatternBackground::default()
        };
        let outer = group_of(pattern_background(&ctx(0), &p));
        assert_eq!(outer.clip, Some(Rect::new(0.0, 0.0, 400.0, 300.0)));
        assert!((outer.opacity - 0.1).abs() < 1e-9);
        let inner = scrolled(pattern_background(&ctx(0), &p));
        let Node::Shape(s) = &inner.children[0] else {
            panic!("expected pattern shape for {pattern:?}");
        };
        assert!(!s.path.elements().is_empty(), "{pattern:?} drew nothing");
        let filled = matches!(pattern, Pattern::Dots | Pattern::Checkerboard);
        assert_eq!(s.fill.is_some(), filled, "{pattern:?}");
    }
}

#[test]
fn animated_patterns_scroll_one_tile_and_loop() {
    let p = PatternBackground {
        pattern: Pattern::Dots,
        animated: true,
        ..PatternBackground::default()
    };
    assert_eq!(scrolled(pattern_background(&ctx(0), &p)).transform.translation(), Vec2::ZERO);
    let at_50 = scrolled(pattern_background(&ctx(50), &p)).transform.translation();
    assert!((at_50.y + 20.0).abs() < 1e-9);
    // 75 frames scroll exactly one 30 px tile.
    assert_eq!(pattern_background(&ctx(75), &p), pattern_background(&ctx(0), &p));

    let still = PatternBackground::default();
    assert_eq!(pattern_background(&ctx(50), &still), pattern_background(&ctx(0), &still));
}

#[test]
fn checkerboard_scales_with_tile() {
    let small = PatternBackground {
        pattern: Pattern::Checkerboard,
        ..PatternBackground::default()
    };
    let large = PatternBackground { scale: 2.0, ..small };
    let count = |p: &PatternBackground| {
        let inner = scrolled(pattern_background(&ctx(0), p));
        let Node::Shape(s) = &inner.children[0] else {
            panic!("expected shape");
        };
        s.path.elements().len()
    };
    assert!(count(&small) > 2 * count(&large));
}

#[test]
fn pulse_grid_breathes_every_120_frames() {
    assert!((pulse_opacity(0.0) - 0.05).abs() < 1e-9);
    assert!((pulse_opacity(60.0) - 0.15).abs() < 1e-9);
    assert!((pulse_opacity(150.0) - pulse_opacity(30.0)).abs() < 1e-9);
    assert!((pulse_opacity(-5.0) - 0.05).abs() < 1e-9);
}

#[test]
fn ripples_fire_in_turn_and_fade_out() {
    assert_eq!(ripple(0.0, 0), Some((1.0, 0.3)));
    assert_eq!(ripple(39.0, 1), None);
    let (scale, opacity) = ripple(70.0, 1).expect("second ripple has fired");
    assert!((scale - 1.0 - 2.5).abs() < 1e-9 && (opacity - 0.15).abs() < 1e-9);
    assert_eq!(ripple(60.0, 0), Some((6.0, 0.0)));
    // Each ripple restarts once all five have played.
    assert_eq!(ripple(200.0, 0), Some((1.0, 0.3)));

    let a = AnimatedPattern {
        kind: AnimatedPatternKind::ExpandingCircles,
        ..AnimatedPattern::default()
    };
    let outer = group_of(animated_pattern(&ctx(50), &a));
    let rings = group_of(outer.children[1].clone());
    assert_eq!(rings.children.len(), 2);
}

#[test]
fn moving_dots_are_seeded_and_drift() {
    let a = AnimatedPattern {
        kind: AnimatedPatternKind::MovingDots,
        ..AnimatedPattern::default()
    };
    assert_eq!(animated_pattern(&ctx(10), &a), animated_pattern(&ctx(10), &a));
    assert_ne!(animated_pattern(&ctx(10), &a), animated_pattern(&ctx(11), &a));
    let other = AnimatedPattern { seed: 7, ..a };
    assert_ne!(animated_pattern(&ctx(10), &a), animated_pattern(&ctx(10), &other));
    let outer = group_of(animated_pattern(&ctx(10), &a));
    assert_eq!(group_of(outer.children[1].clone()).children.len(), 20);
}

#[test]
fn scan_line_sweeps_down_and_wraps() {
    assert_eq!(scan_position(0.0), 0.0);
    assert!((scan_position(100.0) - 0.5).abs() < 1e-9);
    assert_eq!(scan_position(200.0), 0.0);

    let a = AnimatedPattern {
        kind: AnimatedPatternKind::ScanningLines,
        speed: 2.0,
        ..AnimatedPattern::default()
    };
    let outer = group_of(animated_pattern(&ctx(50), &a));
    let layer = group_of(outer.children[1].clone());
    let Node::Shape(bar) = &layer.children[2] else {
        panic!("expected scan bar");
    };
    use kurbo::Shape as _;
    assert!((bar.path.bounding_box().y0 - 150.0).abs() < 1e-9);
}

#[test]
fn kinds_use_kebab_case_names() {
    let kind: AnimatedPatternKind = serde_json::from_str("\"expanding-circles\"").unwrap();
    assert_eq!(kind, AnimatedPatternKind::ExpandingCircles);
    let pattern: Pattern = serde_json::from_str("\"checkerboard\"").unwrap();
    assert_eq!(pattern, Pattern::Checkerboard);
}
