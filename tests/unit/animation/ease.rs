use super::*;

const ALL: &[Ease] = &[
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::InQuart,
    Ease::OutQuart,
    Ease::InOutQuart,
    Ease::InQuint,
    Ease::OutQuint,
    Ease::InOutQuint,
    Ease::InSine,
    Ease::OutSine,
    Ease::InOutSine,
    Ease::InExpo,
    Ease::OutExpo,
    Ease::InOutExpo,
    Ease::InCirc,
    Ease::OutCirc,
    Ease::InOutCirc,
    Ease::InBack,
    Ease::OutBack,
    Ease::OutElastic,
    Ease::OutBounce,
    Ease::Bezier(0.25, 0.1, 0.25, 1.0),
];

#[test]
fn endpoints_are_fixed() {
    for ease in ALL {
        assert!(ease.apply(0.0).abs() < 1e-6, "{ease:?} at 0");
        assert!((ease.apply(1.0) - 1.0).abs() < 1e-6, "{ease:?} at 1");
    }
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::InQuad.apply(-3.0), 0.0);
    assert_eq!(Ease::InQuad.apply(7.0), 1.0);
}

#[test]
fn out_curves_lead_in_curves() {
    assert!(Ease::OutCubic.apply(0.3) > Ease::Linear.apply(0.3));
    assert!(Ease::InCubic.apply(0.3) < Ease::Linear.apply(0.3));
    assert!((Ease::InOutCubic.apply(0.5) - 0.5).abs() < 1e-9);
}

#[test]
fn bezier_linear_control_points_is_identity() {
    let e = Ease::Bezier(1.0 / 3.0, 1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);
    for i in 0..=10 {
        let t = f64::from(i) / 10.0;
        assert!((e.apply(t) - t).abs() < 1e-5);
    }
}

#[test]
fn back_overshoots_below_zero() {
    assert!(Ease::InBack.apply(0.2) < 0.0);
    assert!(Ease::OutBack.apply(0.8) > 1.0);
}

#[test]
fn parse_accepts_css_and_camel_names() {
    assert_eq!(Ease::parse("linear"), Some(Ease::Linear));
    assert_eq!(Ease::parse("easeOutCubic"), Some(Ease::OutCubic));
    assert_eq!(Ease::parse("ease-in-out-sine"), Some(Ease::InOutSine));
    assert_eq!(
        Ease::parse("cubic-bezier(0.4, 0, 0.2, 1)"),
        Some(Ease::Bezier(0.4, 0.0, 0.2, 1.0))
    );
    assert_eq!(Ease::parse("cubic-bezier(1.4, 0, 0.2, 1)"), None);
    assert_eq!(Ease::parse("wobble"), None);
}
