use chrono::NaiveDate;

use super::*;
use crate::foundation::core::{Canvas, Fps, FrameIndex, Vec2};
use crate::scene::model::{GroupNode, Paint};

fn ctx(frame: u64) -> FrameCtx {
    FrameCtx::new(FrameIndex(frame), Fps::whole(30), Canvas::new(1080, 1920), 300)
}

fn group_of(node: Node) -> GroupNode {
    match node {
        Node::Group(g) => g,
        other => panic!("expected group, got {other:?}"),
    }
}

fn texts(g: &GroupNode) -> Vec<&str> {
    g.children
        .iter()
        .filter_map(|n| match n {
            Node::Text(t) => Some(t.content.as_str()),
            _ => None,
        })
        .collect()
}

#[test]
fn lower_third_enters_holds_and_exits() {
    assert_eq!(lower_third_phase(0.0, 0.0, 120.0), (0.0, 0.0));
    assert_eq!(lower_third_phase(15.0, 0.0, 120.0), (0.5, 0.0));
    assert_eq!(lower_third_phase(60.0, 0.0, 120.0), (1.0, 0.0));
    assert_eq!(lower_third_phase(105.0, 0.0, 120.0), (1.0, 1.0));

    let l = LowerThird {
        title: Some("Engineer"),
        ..LowerThird::new("Ada")
    };
    assert_eq!(group_of(lower_third(&ctx(15), &l)).opacity, 0.5);
    assert_eq!(group_of(lower_third(&ctx(60), &l)).opacity, 1.0);
    let leaving = group_of(lower_third(&ctx(93), &l));
    assert!((leaving.opacity - 0.8).abs() < 1e-9);
    assert_eq!(group_of(lower_third(&ctx(110), &l)).opacity, 0.0);
}

#[test]
fn every_style_shows_name_and_optional_title() {
    for style in [
        LowerThirdStyle::Standard,
        LowerThirdStyle::Minimal,
        LowerThirdStyle::Boxed,
        LowerThirdStyle::Slide,
    ] {
        let mut l = LowerThird {
            style,
            ..LowerThird::new("Ada Lovelace")
        };
        let bare = group_of(lower_third(&ctx(60), &l));
        assert_eq!(texts(&bare), ["Ada Lovelace"], "{style:?}");

        l.title = Some("Analyst");
        let titled = group_of(lower_third(&ctx(60), &l));
        assert_eq!(texts(&titled), ["Ada Lovelace", "Analyst"], "{style:?}");
        for node in &titled.children {
            if let Node::Text(t) = node {
                assert!(t.pos.y < 1920.0 - 120.0 + 1e-9, "{style:?} text below the strap");
                assert!(t.pos.x >= 80.0, "{style:?} text left of the margin");
            }
        }
    }
}

#[test]
fn slide_style_moves_in_from_the_left() {
    let l = LowerThird {
        style: LowerThirdStyle::Slide,
        ..LowerThird::new("Ada")
    };
    let start = group_of(lower_third(&ctx(0), &l));
    assert_eq!(start.transform.translation(), Vec2::new(-100.0, 0.0));
    let settled = group_of(lower_third(&ctx(30), &l));
    assert_eq!(settled.transform.translation(), Vec2::ZERO);

    let light = LowerThird {
        scheme: ColorScheme::Light,
        title: Some("t"),
        ..l
    };
    let g = group_of(lower_third(&ctx(30), &light));
    let Node::Text(title) = &g.children[3] else {
        panic!("expected title text");
    };
    assert_eq!(title.fill, Paint::from(Color::BLACK));
}

#[test]
fn corners_inset_by_margin() {
    let area = Rect::new(0.0, 0.0, 1000.0, 500.0);
    assert_eq!(Corner::TopLeft.place(area, (60.0, 60.0), 30.0), Point::new(30.0, 30.0));
    assert_eq!(Corner::TopRight.place(area, (60.0, 60.0), 30.0), Point::new(910.0, 30.0));
    assert_eq!(Corner::BottomLeft.place(area, (60.0, 60.0), 30.0), Point::new(30.0, 410.0));
    assert_eq!(Corner::BottomRight.place(area, (60.0, 60.0), 30.0), Point::new(910.0, 410.0));
}

#[test]
fn bug_logo_fades_into_its_corner() {
    let bug = BugLogo::new(monogram("WS", Color::WHITE, Color::BLACK));
    assert_eq!(group_of(bug_logo(&ctx(0), &bug)).opacity, 0.0);
    let shown = group_of(bug_logo(&ctx(20), &bug));
    assert!((shown.opacity - 0.8).abs() < 1e-9);
    let origin = shown.transform * Point::ZERO;
    let far = shown.transform * Point::new(100.0, 100.0);
    assert!((origin - Point::new(1080.0 - 90.0, 1920.0 - 90.0)).hypot() < 1e-9);
    assert!((far - Point::new(1050.0, 1890.0)).hypot() < 1e-9);
}

#[test]
fn timestamps_follow_the_timeline() {
    let clock_start = NaiveDate::from_ymd_opt(2024, 3, 9)
        .and_then(|d| d.and_hms_opt(23, 59, 58))
        .expect("valid date");
    let mut t = Timestamp {
        clock_start,
        ..Timestamp::default()
    };
    assert_eq!(timestamp_label(&ctx(0), &t), "23:59:58");
    assert_eq!(timestamp_label(&ctx(90), &t), "00:00:01");

    t.format = TimestampFormat::Date;
    assert_eq!(timestamp_label(&ctx(0), &t), "3/9/2024");
    assert_eq!(timestamp_label(&ctx(90), &t), "3/10/2024");

    t.format = TimestampFormat::DateTime;
    assert_eq!(timestamp_label(&ctx(30), &t), "3/9/2024 23:59:59");

    t.format = TimestampFormat::Frames;
    assert_eq!(timestamp_label(&ctx(42), &t), "Frame: 42");
}

#[test]
fn right_corner_timestamps_are_end_anchored() {
    let t = Timestamp {
        format: TimestampFormat::Frames,
        corner: Corner::TopRight,
        ..Timestamp::default()
    };
    let Node::Text(label) = timestamp(&ctx(5), &t) else {
        panic!("expected text");
    };
    assert_eq!(label.style.anchor, TextAnchor::End);
    assert!((label.pos.x - 1050.0).abs() < 1e-9);
    assert_eq!(label.opacity, 0.8);

    let left = Timestamp {
        corner: Corner::BottomLeft,
        ..t
    };
    let Node::Text(label) = timestamp(&ctx(5), &left) else {
        panic!("expected text");
    };
    assert_eq!(label.style.anchor, TextAnchor::Start);
    assert!((label.pos.x - 30.0).abs() < 1e-9);
}
