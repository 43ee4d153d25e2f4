use super::*;
use crate::foundation::{core::Canvas, error::StudioError};

#[test]
fn tiktok_is_vertical_full_hd() {
    let p = platform("tiktok").expect("tiktok");
    assert_eq!(p.canvas(), Canvas::new(1080, 1920));
    assert_eq!(p.frame_rate().as_f64(), 30.0);
    assert!(PLATFORMS.iter().all(|p| p.fps == 30));
}

#[test]
fn platform_lookup_is_lenient_about_spelling() {
    assert_eq!(platform("YouTube-Shorts").expect("shorts").name, "youtube_shorts");
    assert_eq!(platform(" Instagram_Post ").expect("post").height, 1080);
    assert_eq!(platform("linkedin").expect("linkedin").height, 627);
    let err = platform("myspace").expect_err("unknown");
    assert!(matches!(err, StudioError::Validation(_)));
}

#[test]
fn quality_tiers_match_the_table() {
    assert_eq!(quality("draft").expect("draft").crf, 28);
    assert_eq!(quality("standard").expect("standard").x264_preset, "medium");
    assert_eq!(quality("HIGH").expect("high").video_bitrate, "12M");
    assert_eq!(quality(DEFAULT_QUALITY).expect("default").crf, 18);
    assert_eq!(quality("professional").expect("pro").audio_bitrate, "320k");
    assert!(quality("ultra").is_err());
}

#[test]
fn social_presets_fall_back_to_instagram() {
    assert_eq!(social(None).name, "instagram");
    assert_eq!(social(Some("snapchat")).name, "instagram");
    assert_eq!(social(Some("youtube")).crf, Some(18));

    let twitter = social(Some("Twitter"));
    assert_eq!(twitter.crf, None);
    assert_eq!(twitter.video_bitrate, Some("6M"));
    assert!(SOCIAL_PRESETS.iter().all(|p| p.codec == "h264" && p.audio_codec == "aac"));
}

#[test]
fn formats_parse_and_describe_themselves() {
    assert_eq!(OutputFormat::parse("MP4").expect("mp4"), OutputFormat::Mp4);
    assert_eq!(OutputFormat::parse("webm").expect("webm").info().video_encoder, "libvpx-vp9");
    assert_eq!(OutputFormat::Prores.extension(), "mov");
    assert!(OutputFormat::Mp4.needs_even_dimensions());
    assert!(!OutputFormat::Prores.needs_even_dimensions());
    assert!(OutputFormat::parse("gif").is_err());
}

#[test]
fn custom_options_read_camel_case() {
    let o: CustomOptions = serde_json::from_value(serde_json::json!({
        "codec": "prores",
        "videoBitrate": "8M",
        "x264Preset": "slow"
    }))
    .expect("options");
    assert_eq!(o.codec.as_deref(), Some("prores"));
    assert_eq!(o.video_bitrate.as_deref(), Some("8M"));
    assert_eq!(o.crf, None);
}

#[test]
fn listing_serializes_every_table() {
    let v = serde_json::to_value(listing()).expect("json");
    assert_eq!(v["platforms"].as_array().map(Vec::len), Some(7));
    assert_eq!(v["qualities"].as_array().map(Vec::len), Some(4));
    assert_eq!(v["social"].as_array().map(Vec::len), Some(6));
    assert_eq!(v["formats"].as_array().map(Vec::len), Some(3));
    assert_eq!(v["social"][3]["videoBitrate"], "6M");
}
