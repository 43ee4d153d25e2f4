use super::*;
use crate::foundation::core::FrameIndex;

#[test]
fn builtin_registers_every_template_once() {
    let c = Catalog::builtin();
    assert_eq!(c.len(), 12);
    let mut ids: Vec<_> = c.list().iter().map(|i| i.id).collect();
    assert_eq!(ids[0], "motivation-reel");
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 12);
}

#[test]
fn lookup_accepts_id_and_name_spellings() {
    let c = Catalog::builtin();
    for key in ["motivation-reel", "MotivationReel", "motivation_reel", " MOTIVATION-REEL "] {
        assert_eq!(c.get(key).expect("lookup").info().id, "motivation-reel");
    }
    assert_eq!(c.get("ShapesScene").expect("by name").info().id, "shapes-showcase");
}

#[test]
fn unknown_ids_are_not_found() {
    let Err(err) = Catalog::builtin().get("nope") else {
        panic!("unknown id resolved to a template");
    };
    assert!(matches!(err, StudioError::NotFound(_)));
    assert!(Catalog::new().is_empty());
}

#[test]
fn registering_twice_replaces() {
    let mut c = Catalog::new();
    c.register(templates::basic::HelloWorld);
    c.register(templates::basic::HelloWorld);
    assert_eq!(c.len(), 1);
}

#[test]
fn props_are_validated_on_instantiate() {
    let c = Catalog::builtin();
    let err = c
        .instantiate("hello-world", Some(&serde_json::json!({ "bogus": 1 })))
        .expect_err("unknown field");
    assert!(matches!(err, StudioError::Validation(_)));

    let comp = c
        .instantiate("hello-world", Some(&serde_json::Value::Null))
        .expect("defaults");
    assert_eq!(comp.id, "hello-world");
}

#[test]
fn default_props_round_trip_through_instantiate() {
    let c = Catalog::builtin();
    for info in c.list() {
        let entry = c.get(info.id).expect("entry");
        let props = entry.default_props().expect("defaults");
        let comp = c.instantiate(info.id, Some(&props)).expect("instantiate");
        assert_eq!(comp.canvas, info.canvas);
        assert_eq!(comp.fps, info.fps);
    }
}

#[test]
fn every_template_draws_its_first_and_last_frame() {
    let c = Catalog::builtin();
    for info in c.list() {
        let comp = c.instantiate(info.id, None).expect("instantiate");
        assert!(comp.duration > 0, "{} has an empty timeline", info.id);
        for f in [0, comp.duration / 2, comp.duration - 1] {
            let scene = comp
                .scene_at(FrameIndex(f))
                .unwrap_or_else(|e| panic!("{} frame {f}: {e}", info.id));
            assert_eq!(scene.canvas, info.canvas);
        }
    }
}

#[test]
fn list_serializes_for_the_api() {
    let c = Catalog::builtin();
    let v = serde_json::to_value(c.list()).expect("json");
    let reel = v
        .as_array()
        .and_then(|a| a.iter().find(|e| e["id"] == "motivation-reel"))
        .expect("reel listed");
    assert_eq!(reel["width"], 1080);
    assert_eq!(reel["height"], 1920);
    assert_eq!(reel["fps"], 30.0);
    assert_eq!(reel["durationInFrames"], 1350);
}
