use super::*;
use crate::{
    assets::fonts::FontLibrary, composition::catalog::Catalog, server::config::ServerConfig,
};
use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use tower::ServiceExt;

fn test_state(output_dir: &std::path::Path) -> AppState {
    let config = ServerConfig {
        output_dir: output_dir.to_path_buf(),
        ..ServerConfig::default()
    };
    AppState::with_parts(config, Catalog::builtin(), FontLibrary::system())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn status_reports_ready() {
    let dir = tempfile::tempdir().unwrap();
    for uri in ["/status", "/api/status"] {
        let (status, v) = get_json(app(test_state(dir.path())), uri).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(v["status"], "ready");
        assert_eq!(v["message"], "Render API is ready");
        assert_eq!(v["compositions"], 12);
        assert!(v["ffmpeg"].is_boolean());
    }
}

#[tokio::test]
async fn presets_list_every_table() {
    let dir = tempfile::tempdir().unwrap();
    let (status, v) = get_json(app(test_state(dir.path())), "/api/presets").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(v["platforms"].as_array().map(Vec::len), Some(7));
    assert_eq!(v["qualities"].as_array().map(Vec::len), Some(4));
    assert_eq!(v["social"].as_array().map(Vec::len), Some(6));
    assert_eq!(v["formats"].as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn compositions_are_listed() {
    let dir = tempfile::tempdir().unwrap();
    let (status, v) = get_json(app(test_state(dir.path())), "/compositions").await;
    assert_eq!(status, StatusCode::OK);
    let list = v.as_array().unwrap();
    assert_eq!(list.len(), 12);
    assert!(list.iter().any(|c| c["id"] == "motivation-reel"));
}

#[tokio::test]
async fn missing_download_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let (status, v) = get_json(app(test_state(dir.path())), "/api/download/video-1.mp4").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(v, serde_json::json!({ "error": "File not found" }));
}

#[tokio::test]
async fn traversal_names_are_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let secret = dir.path().join("secret.txt");
    std::fs::write(&secret, b"nope").unwrap();
    let out = dir.path().join("out");
    std::fs::create_dir_all(&out).unwrap();

    for uri in ["/api/download/..%2Fsecret.txt", "/download/..%5Csecret.txt"] {
        let (status, v) = get_json(app(test_state(&out)), uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(v["error"], "File not found");
    }
}

#[tokio::test]
async fn downloads_are_served_as_attachments() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("video-7.mp4"), b"fake mp4").unwrap();

    let response = app(test_state(dir.path()))
        .oneshot(
            Request::builder()
                .uri("/api/download/video-7.mp4")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "video/mp4");
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"video-7.mp4\""
    );
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"fake mp4");
}

#[tokio::test]
async fn downloads_stream_byte_ranges() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("video-8.webm"), b"0123456789").unwrap();

    let response = app(test_state(dir.path()))
        .oneshot(
            Request::builder()
                .uri("/download/video-8.webm")
                .header(header::RANGE, "bytes=2-5")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::PARTIAL_CONTENT);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "video/webm");
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"video-8.webm\""
    );
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"2345");
}

#[tokio::test]
async fn directories_are_not_downloads() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir(dir.path().join("nested.mp4")).unwrap();
    let (status, v) = get_json(app(test_state(dir.path())), "/api/download/nested.mp4").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(v["error"], "File not found");
}

fn render_request(content_type: Option<&str>, body: &'static str) -> Request<Body> {
    let mut builder = Request::builder().method("POST").uri("/api/render");
    if let Some(ct) = content_type {
        builder = builder.header(header::CONTENT_TYPE, ct);
    }
    builder.body(Body::from(body)).unwrap()
}

#[tokio::test]
async fn malformed_render_bodies_get_json_errors() {
    let dir = tempfile::tempdir().unwrap();
    for body in ["{not json", r#"{"customOptions":{"crf":"20"}}"#] {
        let response = app(test_state(dir.path()))
            .oneshot(render_request(Some("application/json"), body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(
            response.headers()[header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("application/json")
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let v: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(v["error"].as_str().unwrap().contains("invalid render request"));
    }
}

#[tokio::test]
async fn render_accepts_json_without_a_content_type() {
    let dir = tempfile::tempdir().unwrap();
    let response = app(test_state(dir.path()))
        .oneshot(render_request(None, r#"{"compositionId":"NoSuchThing"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.contains("event: status"));
    assert!(text.contains("event: error"));
}

#[tokio::test]
async fn render_of_unknown_composition_streams_status_then_error() {
    let dir = tempfile::tempdir().unwrap();
    let response = app(test_state(dir.path()))
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/render")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"compositionId":"NoSuchThing"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/event-stream")
    );

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    let status_at = text.find("event: status").expect("status event");
    let error_at = text.find("event: error").expect("error event");
    assert!(status_at < error_at);
    assert!(text.contains("initializing"));
    assert!(text.contains("NoSuchThing"));
    assert!(!text.contains("event: complete"));
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let dir = tempfile::tempdir().unwrap();
    let response = app(test_state(dir.path()))
        .oneshot(
            Request::builder()
                .uri("/api/status")
                .header(header::ORIGIN, "http://localhost:5173")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}
