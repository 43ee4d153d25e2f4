use super::*;
use crate::presets::quality::quality;

#[test]
fn quality_tier_maps_to_crf_with_a_rate_cap() {
    let s = EncoderSettings::from_quality(quality("draft").expect("draft"), OutputFormat::Mp4);
    assert_eq!(s.crf, Some(28));
    let args = s.video_args();
    let joined = args.join(" ");
    assert!(joined.contains("-c:v libx264 -preset veryfast"));
    assert!(joined.contains("-crf 28 -maxrate 2M"));
    assert!(joined.ends_with("-pix_fmt yuv420p -movflags +faststart"));
}

#[test]
fn twitter_uses_a_target_bitrate() {
    let s = EncoderSettings::select(
        None,
        Some("twitter"),
        quality("high").expect("high"),
        OutputFormat::Mp4,
    )
    .expect("settings");
    assert_eq!(s.crf, None);
    let joined = s.video_args().join(" ");
    assert!(joined.contains("-b:v 6M"));
    assert!(!joined.contains("-crf"));
}

#[test]
fn unknown_preset_falls_back_to_instagram() {
    let tier = quality("high").expect("high");
    let s = EncoderSettings::select(None, Some("friendster"), tier, OutputFormat::Mp4)
        .expect("settings");
    assert_eq!(s.audio_bitrate, "192k");
    assert_eq!(s, EncoderSettings::default());
}

#[test]
fn custom_options_win_and_fill_defaults() {
    let tier = quality("draft").expect("draft");
    let opts = CustomOptions {
        crf: Some(12),
        ..CustomOptions::default()
    };
    let s = EncoderSettings::select(Some(&opts), Some("youtube"), tier, OutputFormat::Webm)
        .expect("custom");
    assert_eq!(s.codec, VideoCodec::H264);
    assert_eq!(s.crf, Some(12));
    assert_eq!(s.x264_preset, "medium");
    assert_eq!(s.audio_bitrate, "128k");
    assert_eq!(s.description, "Custom configuration");
}

#[test]
fn custom_options_are_validated() {
    let bad_codec = CustomOptions {
        codec: Some("divx".to_owned()),
        ..CustomOptions::default()
    };
    assert!(EncoderSettings::from_custom(&bad_codec).is_err());
    let bad_rate = CustomOptions {
        video_bitrate: Some("fast".to_owned()),
        ..CustomOptions::default()
    };
    assert!(EncoderSettings::from_custom(&bad_rate).is_err());
}

#[test]
fn prores_and_vp9_arguments() {
    let prores = EncoderSettings::from_custom(&CustomOptions {
        codec: Some("prores".to_owned()),
        crf: Some(18),
        ..CustomOptions::default()
    })
    .expect("prores");
    assert_eq!(prores.format().extension(), "mov");
    let joined = prores.video_args().join(" ");
    assert!(joined.contains("prores_ks"));
    assert!(!joined.contains("-crf"));

    let vp9 = EncoderSettings::from_social(social(Some("tiktok")), OutputFormat::Webm);
    assert!(vp9.video_args().join(" ").contains("-crf 20 -b:v 0"));
}

#[test]
fn odd_dimensions_round_down() {
    assert_eq!(even_canvas(Canvas::new(1200, 627)), Canvas::new(1200, 626));
    assert_eq!(even_canvas(Canvas::new(1, 3)), Canvas::new(2, 2));
    assert_eq!(even_canvas(Canvas::new(1080, 1920)), Canvas::new(1080, 1920));
}

#[test]
fn settings_serialize_for_status_events() {
    let v = serde_json::to_value(EncoderSettings::default()).expect("json");
    assert_eq!(v["codec"], "h264");
    assert_eq!(v["x264Preset"], "medium");
    assert_eq!(v["crf"], 20);
}
