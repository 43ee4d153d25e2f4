use super::*;
use crate::foundation::core::{Canvas, Fps, FrameIndex};
use crate::scene::model::Paint;

fn ctx(frame: u64) -> FrameCtx {
    FrameCtx::new(FrameIndex(frame), Fps::whole(30), Canvas::new(1920, 1080), 300)
}

fn texts(node: &Node) -> Vec<String> {
    match node {
        Node::Text(t) => vec![t.content.clone()],
        Node::Group(g) => g.children.iter().flat_map(texts).collect(),
        Node::Shape(_) => Vec::new(),
    }
}

fn shapes(node: &Node) -> usize {
    match node {
        Node::Shape(_) => 1,
        Node::Group(g) => g.children.iter().map(shapes).sum(),
        Node::Text(_) => 0,
    }
}

#[test]
fn chars_revealed_steps_and_clamps() {
    assert_eq!(chars_revealed(0.0, 0.0, 3.0, 5), 0);
    assert_eq!(chars_revealed(2.0, 0.0, 3.0, 5), 0);
    assert_eq!(chars_revealed(3.0, 0.0, 3.0, 5), 1);
    assert_eq!(chars_revealed(100.0, 0.0, 3.0, 5), 5);
    assert_eq!(chars_revealed(5.0, 10.0, 3.0, 5), 0);
    assert_eq!(chars_revealed(0.0, 0.0, 0.0, 5), 5);
}

#[test]
fn cursor_blinks_every_thirty_frames() {
    assert_eq!(cursor_blink(0.0, 0.0), 1.0);
    assert_eq!(cursor_blink(15.0, 0.0), 0.0);
    assert!((cursor_blink(7.5, 0.0) - 0.5).abs() < 1e-9);
    assert_eq!(cursor_blink(30.0, 0.0), 1.0);
}

#[test]
fn typewriter_shows_prefix_and_cursor_until_done() {
    let tw = Typewriter::new("Hello\nWorld", Point::new(100.0, 200.0), 40.0);
    let partial = typewriter(&ctx(9), &tw);
    assert_eq!(texts(&partial), vec!["Hel".to_owned()]);
    assert_eq!(shapes(&partial), 1);

    let multi = typewriter(&ctx(24), &tw);
    assert_eq!(texts(&multi), vec!["Hello".to_owned(), "Wo".to_owned()]);

    let done = typewriter(&ctx(300), &tw);
    assert_eq!(texts(&done), vec!["Hello".to_owned(), "World".to_owned()]);
    assert_eq!(shapes(&done), 0);
}

#[test]
fn typewriter_without_cursor_draws_text_only() {
    let tw = Typewriter {
        cursor: None,
        ..Typewriter::new("abc", Point::ZERO, 20.0)
    };
    assert_eq!(shapes(&typewriter(&ctx(3), &tw)), 0);
}

#[test]
fn glitch_layers_channels_under_main_text() {
    let g = Glitch::new("GLITCH", Point::new(960.0, 540.0), 120.0);
    let Node::Group(group) = glitch_text(&ctx(10), &g) else {
        panic!("expected group");
    };
    assert_eq!(group.children.len(), 3);
    let Node::Text(top) = &group.children[2] else {
        panic!("expected text");
    };
    assert_eq!(top.pos, Point::new(960.0, 540.0));
    assert_eq!(top.fill, Paint::from(Color::WHITE));
}

#[test]
fn glitch_offset_is_bounded_and_deterministic() {
    for f in 0..60 {
        let c = ctx(f);
        let a = glitch_offset(&c, 3, 0.5, 10.0);
        assert!(a.abs() <= 10.0);
        assert_eq!(a, glitch_offset(&c, 3, 0.5, 10.0));
    }
    assert_eq!(glitch_offset(&ctx(5), 3, 0.0, 10.0), 0.0);
}

#[test]
fn slide_up_reveal_clips_and_settles() {
    let mask = Rect::new(0.0, 0.0, 500.0, 130.0);
    let child = text("TITLE", Point::new(10.0, 100.0)).build();
    let early = slide_up_reveal(&ctx(0), child.clone(), mask, 0.0, SpringConfig::default())
        .expect("spring");
    let Node::Group(outer) = early else {
        panic!("expected group");
    };
    assert_eq!(outer.clip, Some(mask));
    let Node::Group(inner) = &outer.children[0] else {
        panic!("expected inner group");
    };
    assert!(inner.transform.translation().y > 100.0);

    let late = slide_up_reveal(&ctx(200), child, mask, 0.0, SpringConfig::with_damping(200.0))
        .expect("spring");
    let Node::Group(outer) = late else {
        panic!("expected group");
    };
    let Node::Group(inner) = &outer.children[0] else {
        panic!("expected inner group");
    };
    assert!(inner.transform.translation().y.abs() < 1.0);
}

#[test]
fn wrap_text_respects_width() {
    let style = TextStyle::sized(20.0);
    let lines = wrap_text("one two three four five six", &style, 100.0);
    assert!(lines.len() > 1);
    assert_eq!(lines.join(" "), "one two three four five six");
    for l in &lines {
        assert!(style.approx_width(l) <= 100.0 || !l.contains(' '));
    }
}

#[test]
fn split_words_staggers_items() {
    let s = SplitText {
        stagger: 10.0,
        duration: 10.0,
        ..SplitText::new("alpha beta gamma", Point::new(960.0, 540.0), 60.0)
    };
    assert!(texts(&split_words(&ctx(0), &s)).is_empty());
    assert_eq!(texts(&split_words(&ctx(15), &s)), vec!["alpha", "beta"]);
    assert_eq!(texts(&split_words(&ctx(100), &s)).len(), 3);

    let chars = SplitText {
        mode: SplitMode::Char,
        ..s
    };
    assert_eq!(texts(&split_words(&ctx(500), &chars)).len(), 14);
}

#[test]
fn captions_follow_time() {
    let caps = vec![
        Caption {
            start: 0.0,
            end: 1.0,
            text: "first".into(),
        },
        Caption {
            start: 1.0,
            end: 2.0,
            text: "second".into(),
        },
    ];
    assert_eq!(active_caption(&caps, 0.5).map(|c| c.text.as_str()), Some("first"));
    assert_eq!(active_caption(&caps, 1.0).map(|c| c.text.as_str()), Some("second"));
    assert!(active_caption(&caps, 2.5).is_none());

    let style = TextStyle::sized(40.0);
    let node = caption(&ctx(45), &caps, Point::new(960.0, 1000.0), &style).expect("caption");
    assert_eq!(texts(&node), vec!["second".to_owned()]);
    assert!(caption(&ctx(90), &caps, Point::new(960.0, 1000.0), &style).is_none());
}

#[test]
fn highlighter_classifies_tokens() {
    let toks = highlight_line("const x = add(1, 'a'); // sum");
    let kinds: Vec<TokenKind> = toks.iter().map(|(k, _)| *k).collect();
    assert_eq!(toks[0], (TokenKind::Keyword, "const".to_owned()));
    assert!(toks.contains(&(TokenKind::Function, "add".to_owned())));
    assert!(toks.contains(&(TokenKind::Number, "1".to_owned())));
    assert!(toks.contains(&(TokenKind::Str, "'a'".to_owned())));
    assert_eq!(kinds.last(), Some(&TokenKind::Comment));

    let joined: String = toks.iter().map(|(_, t)| t.as_str()).collect();
    assert_eq!(joined, "const x = add(1, 'a'); // sum");

    let decl = highlight_line("fn render() {}");
    assert_eq!(decl[2], (TokenKind::Function, "render".to_owned()));
}

#[test]
fn code_block_types_progressively() {
    let b = CodeBlock {
        code: "let a = 1;\nlet b = 2;",
        origin: Point::new(100.0, 100.0),
        width: 800.0,
        size: 24.0,
        frames_per_char: 1.0,
        start: 0.0,
    };
    let early: String = texts(&code_block(&ctx(3), &b))
        .into_iter()
        .filter(|t| t.parse::<u32>().is_err())
        .collect();
    assert_eq!(early, "let");

    let all = texts(&code_block(&ctx(100), &b));
    assert!(all.contains(&"1".to_owned()));
    assert!(all.contains(&"2".to_owned()));
    assert_eq!(all.iter().filter(|t| t.as_str() == "let").count(), 2);
}
