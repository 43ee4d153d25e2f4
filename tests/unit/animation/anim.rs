use super::*;

fn ramp(mode: InterpMode, to_frame: f64, to: f64) -> Anim<f64> {
    Anim::Keyframes(
        Keyframes::new(mode)
            .key(0.0, 0.0, Ease::Linear)
            .key(to_frame, to, Ease::Linear),
    )
}

#[test]
fn hold_steps_at_each_key() {
    let anim = ramp(InterpMode::Hold, 10.0, 3.0);
    assert_eq!(anim.sample(5.0).unwrap(), 0.0);
    assert_eq!(anim.sample(9.99).unwrap(), 0.0);
    assert_eq!(anim.sample(10.0).unwrap(), 3.0);
}

#[test]
fn linear_interpolates_fractional_frames() {
    let anim = ramp(InterpMode::Linear, 10.0, 10.0);
    assert_eq!(anim.sample(2.5).unwrap(), 2.5);
    assert_eq!(anim.sample(-4.0).unwrap(), 0.0);
    assert_eq!(anim.sample(50.0).unwrap(), 10.0);
}

#[test]
fn tween_holds_outside_its_window() {
    let anim = Anim::tween(10, 20, 1.0, 2.0, Ease::OutCubic);
    assert_eq!(anim.sample(0.0).unwrap(), 1.0);
    assert!(anim.sample(15.0).unwrap() > 1.5);
    assert_eq!(anim.sample(25.0).unwrap(), 2.0);
}

#[test]
fn delay_speed_and_reverse_remap_time() {
    let r = ramp(InterpMode::Linear, 10.0, 10.0);
    assert_eq!(r.clone().delay(5.0).sample(3.0).unwrap(), 0.0);
    assert_eq!(r.clone().delay(5.0).sample(10.0).unwrap(), 5.0);
    assert_eq!(r.clone().speed(2.0).sample(3.0).unwrap(), 6.0);
    assert_eq!(r.clone().reverse(10.0).sample(0.0).unwrap(), 10.0);
    assert_eq!(r.reverse(10.0).sample(10.0).unwrap(), 0.0);
}

#[test]
fn loops_repeat_and_ping_pong() {
    let r = ramp(InterpMode::Linear, 10.0, 10.0);
    assert_eq!(r.clone().loop_(10.0, LoopMode::Repeat).sample(13.0).unwrap(), 3.0);
    let pp = r.loop_(10.0, LoopMode::PingPong);
    assert_eq!(pp.sample(10.0).unwrap(), 10.0);
    assert_eq!(pp.sample(12.0).unwrap(), 8.0);
    assert_eq!(pp.sample(20.0).unwrap(), 0.0);
}

#[test]
fn then_switches_at_the_boundary() {
    let s = Anim::constant(1.0).then(5, Anim::constant(10.0));
    assert_eq!(s.sample(4.0).unwrap(), 1.0);
    assert_eq!(s.sample(5.0).unwrap(), 10.0);

    let st = stagger(vec![(10, Anim::constant(2.0)), (0, Anim::constant(1.0))]);
    assert_eq!(st.sample(3.0).unwrap(), 1.0);
    assert_eq!(st.sample(12.0).unwrap(), 2.0);
}

#[test]
fn colors_and_points_blend() {
    let c = Anim::tween(0, 10, Color::rgb8(0, 0, 0), Color::rgb8(255, 255, 255), Ease::Linear);
    assert!((c.sample(5.0).unwrap().r - 0.5).abs() < 1e-9);

    let p = Anim::tween(0, 4, Point::new(0.0, 0.0), Point::new(8.0, 4.0), Ease::Linear);
    assert_eq!(p.sample(2.0).unwrap(), Point::new(4.0, 2.0));

    let a = Anim::tween(0, 2, Affine::IDENTITY, Affine::translate((10.0, 0.0)), Ease::Linear);
    assert_eq!(a.sample(1.0).unwrap(), Affine::translate((5.0, 0.0)));
}

#[test]
fn mix_clamps_its_weight() {
    let m = Anim::mix(
        Anim::constant(0.0),
        Anim::constant(10.0),
        ramp(InterpMode::Linear, 10.0, 2.0),
    );
    assert_eq!(m.sample(2.5).unwrap(), 5.0);
    assert_eq!(m.sample(10.0).unwrap(), 10.0);
}

#[test]
fn validation_rejects_bad_tracks() {
    let unsorted: Anim<f64> = Anim::Keyframes(
        Keyframes::new(InterpMode::Linear)
            .key(5.0, 0.0, Ease::Linear)
            .key(1.0, 1.0, Ease::Linear),
    );
    assert!(unsorted.validate().is_err());

    let empty: Keyframes<f64> = Keyframes::new(InterpMode::Linear);
    assert!(empty.validate().is_err());
    assert!(empty.sample(0.0).is_err());
    let with_default = Keyframes {
        default: Some(4.0),
        ..Keyframes::new(InterpMode::Linear)
    };
    assert_eq!(with_default.sample(3.0).unwrap(), 4.0);

    assert!(Anim::constant(1.0).speed(0.0).validate().is_err());
    assert!(Anim::constant(1.0).loop_(0.0, LoopMode::Repeat).validate().is_err());
    assert!(Anim::constant(1.0).reverse(-1.0).validate().is_err());
    assert!(Anim::constant(1.0).delay(3.0).validate().is_ok());
}

#[test]
fn tracks_deserialize_from_json() {
    let anim: Anim<f64> = serde_json::from_value(serde_json::json!({
        "keyframes": {
            "keys": [
                { "frame": 0.0, "value": 0.0, "ease": "out_cubic" },
                { "frame": 30.0, "value": 1.0 }
            ]
        }
    }))
    .unwrap();
    anim.validate().unwrap();
    assert_eq!(anim.sample(30.0).unwrap(), 1.0);
}
