use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        StudioError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        StudioError::render("x")
            .to_string()
            .contains("render error:")
    );
    assert!(
        StudioError::encode("x")
            .to_string()
            .contains("encode error:")
    );
    assert!(
        StudioError::not_found("MotivationReel")
            .to_string()
            .contains("not found: MotivationReel")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = StudioError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn serde_json_errors_map_to_serde_variant() {
    let err: StudioError = serde_json::from_str::<u32>("\"nope\"").unwrap_err().into();
    assert!(matches!(err, StudioError::Serde(_)));
}
