use super::*;
use serde_json::json;

#[test]
fn parses_hex_forms() {
    let c: Color = serde_json::from_value(json!("#ff0000")).unwrap();
    assert_eq!(c, Color::rgba(1.0, 0.0, 0.0, 1.0));

    let c: Color = serde_json::from_value(json!("#0000ff80")).unwrap();
    assert!((c.b - 1.0).abs() < 1e-9);
    assert!((c.a - (128.0 / 255.0)).abs() < 1e-9);

    assert_eq!(Color::parse("#fff").unwrap(), Color::WHITE);
    assert!(Color::parse("#12345").is_err());
}

#[test]
fn parses_css_functions() {
    let c = Color::parse("rgba(255, 0, 0, 0.5)").unwrap();
    assert_eq!(c, Color::rgba(1.0, 0.0, 0.0, 0.5));

    let c = Color::parse("hsl(120, 100%, 50%)").unwrap();
    assert!((c.g - 1.0).abs() < 1e-9);
    assert!(c.r.abs() < 1e-9);

    assert!(Color::parse("cmyk(1,2,3,4)").is_err());
}

#[test]
fn parses_objects_and_arrays() {
    let c: Color = serde_json::from_value(json!({"r": 0.25, "g": 0.5, "b": 0.75})).unwrap();
    assert_eq!(c, Color::rgba(0.25, 0.5, 0.75, 1.0));

    let c: Color = serde_json::from_value(json!([0.25, 0.5, 0.75, 0.9])).unwrap();
    assert_eq!(c, Color::rgba(0.25, 0.5, 0.75, 0.9));

    let c: Color = serde_json::from_value(json!({"h": 0.0, "s": 1.0, "l": 0.5})).unwrap();
    assert!((c.r - 1.0).abs() < 1e-9);
}

#[test]
fn serializes_as_hex() {
    let v = serde_json::to_value(Color::rgb8(0x3b, 0x82, 0xf6)).unwrap();
    assert_eq!(v, json!("#3b82f6"));
    let v = serde_json::to_value(Color::rgb8(0, 0, 0).with_alpha(0.5)).unwrap();
    assert_eq!(v, json!("#00000080"));
}

#[test]
fn mix_and_quantize() {
    let mid = Color::BLACK.mix(Color::WHITE, 0.5);
    assert!((mid.g - 0.5).abs() < 1e-12);
    assert_eq!(Color::WHITE.with_alpha(0.5).to_rgba8(), [255, 255, 255, 128]);
}

#[test]
fn palettes_and_gradients_fall_back() {
    assert_eq!(palette("ocean").primary, Color::from_u32(0x64ffda));
    assert_eq!(palette("nope").name, "dark");
    assert_eq!(gradient("FIRE").from, Color::from_u32(0xf12711));
    assert_eq!(gradient("unknown").name, "primary");
    assert!(GRADIENTS.iter().all(|g| g.angle_deg == 135.0));
}
