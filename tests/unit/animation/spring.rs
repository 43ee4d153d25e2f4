use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn starts_at_from_and_respects_delay() {
    let p = SpringParams::new(0.0, fps30()).range(110.0, 0.0);
    assert_eq!(spring(p).unwrap(), 110.0);

    let delayed = SpringParams::new(10.0, fps30()).delay(15.0);
    assert_eq!(spring(delayed).unwrap(), 0.0);
}

#[test]
fn settles_at_target() {
    let cfg = SpringConfig::with_damping(200.0);
    let v = spring(SpringParams::new(90.0, fps30()).config(cfg)).unwrap();
    assert!((v - 1.0).abs() < 0.005, "got {v}");
}

#[test]
fn default_config_overshoots_unless_clamped() {
    let max_free = (0..60)
        .map(|f| spring(SpringParams::new(f64::from(f), fps30())).unwrap())
        .fold(f64::MIN, f64::max);
    assert!(max_free > 1.0);

    let clamped = SpringConfig {
        overshoot_clamping: true,
        ..SpringConfig::default()
    };
    for f in 0..60 {
        let v = spring(SpringParams::new(f64::from(f), fps30()).config(clamped)).unwrap();
        assert!(v <= 1.0);
    }
}

#[test]
fn is_monotonic_while_rising_for_heavily_damped_spring() {
    let cfg = SpringConfig::with_damping(200.0);
    let mut prev = 0.0;
    for f in 0..20 {
        let v = spring(SpringParams::new(f64::from(f), fps30()).config(cfg)).unwrap();
        assert!(v >= prev - 1e-12);
        prev = v;
    }
}

#[test]
fn duration_stretches_settling_time() {
    let cfg = SpringConfig::with_damping(200.0);
    let v = spring(
        SpringParams::new(120.0, fps30())
            .config(cfg)
            .duration(120.0),
    )
    .unwrap();
    assert!((v - 1.0).abs() < 0.01, "got {v}");

    let early = spring(SpringParams::new(30.0, fps30()).config(cfg).duration(120.0)).unwrap();
    let early_natural = spring(SpringParams::new(30.0, fps30()).config(cfg)).unwrap();
    assert!(early < early_natural);
}

#[test]
fn measure_spring_is_positive_and_stable() {
    let a = measure_spring(fps30(), SpringConfig::default(), 0.005).unwrap();
    let b = measure_spring(fps30(), SpringConfig::default(), 0.005).unwrap();
    assert!(a > 0);
    assert_eq!(a, b);
}

#[test]
fn rejects_invalid_config() {
    let bad = SpringConfig {
        mass: 0.0,
        ..SpringConfig::default()
    };
    assert!(spring(SpringParams::new(5.0, fps30()).config(bad)).is_err());
    assert!(spring(SpringParams::new(5.0, fps30()).duration(0.0)).is_err());
}

#[test]
fn far_frames_return_the_settled_target() {
    let v = spring(SpringParams::new(1e12, fps30()).range(0.0, 50.0)).unwrap();
    assert_eq!(v, 50.0);
}

#[test]
fn undamped_springs_are_bounded_in_time() {
    let undamped = SpringConfig::with_damping(0.0);
    assert!(spring(SpringParams::new(1e12, fps30()).config(undamped)).is_err());
    assert!(spring(SpringParams::new(45.0, fps30()).config(undamped)).is_ok());
}
