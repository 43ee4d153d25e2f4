use std::convert::Infallible;

use axum::{
    Json,
    body::{Body, Bytes},
    extract::{Path, Request, State},
    http::{HeaderValue, StatusCode, header},
    response::{
        Response,
        sse::{Event, KeepAlive, Sse},
    },
};
use futures::{Stream, stream};
use serde::Serialize;
use tokio::sync::mpsc;
use tower::ServiceExt as _;
use tower_http::services::ServeFile;
use tracing::{error, info, warn};

use crate::{
    assets::paths::sanitize_file_name,
    composition::template::TemplateInfo,
    encode::ffmpeg::is_ffmpeg_on_path,
    presets::{PresetListing, listing},
    server::{
        error::{ApiError, ApiResult},
        events::RenderEvent,
        job::{self, RenderRequest},
        state::AppState,
    },
};

/// `POST /api/render`: start a render and stream its events. A malformed body is a 400 with a
/// JSON error; everything after parsing is reported on the stream.
pub async fn render(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Sse<impl Stream<Item = Result<Event, Infallible>>>> {
    let req = RenderRequest::from_body(&body)
        .inspect_err(|e| warn!(error = %e, "rejected render request"))?;
    let (tx, rx) = mpsc::channel(state.config.progress_channel_buffer);
    let failed = tx.clone();
    tokio::spawn(async move {
        let worker = tokio::task::spawn_blocking(move || job::run(&state, &req, &tx));
        if let Err(e) = worker.await {
            error!(error = %e, "render worker panicked");
            let _ = failed.send(RenderEvent::error("render worker failed")).await;
        }
    });

    let events = stream::unfold(rx, |mut rx| async move {
        let ev = rx.recv().await?;
        Some((Ok(ev.to_sse()), rx))
    });
    Ok(Sse::new(events).keep_alive(KeepAlive::default()))
}

/// `GET /api/download/{filename}`: stream a rendered artifact as an attachment.
pub async fn download(
    State(state): State<AppState>,
    Path(filename): Path<String>,
    request: Request,
) -> ApiResult<Response> {
    let not_found = || ApiError::NotFound("File not found".to_owned());
    let name = sanitize_file_name(&filename).map_err(|_| {
        warn!(%filename, "rejected download name");
        not_found()
    })?;
    let path = state.config.output_dir.join(name);
    let size = match tokio::fs::metadata(&path).await {
        Ok(meta) if meta.is_file() => meta.len(),
        _ => return Err(not_found()),
    };
    info!(file = %path.display(), bytes = size, "serving download");

    let Ok(served) = ServeFile::new(&path).oneshot(request).await;
    if served.status() == StatusCode::NOT_FOUND {
        return Err(not_found());
    }
    let mut response = served.map(Body::new);
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(content_type(name)),
    );
    let disposition = HeaderValue::from_str(&format!("attachment; filename=\"{name}\""))
        .map_err(|e| ApiError::Internal(format!("bad file name header: {e}")))?;
    headers.insert(header::CONTENT_DISPOSITION, disposition);
    Ok(response)
}

fn content_type(name: &str) -> &'static str {
    match name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase()) {
        Some(ext) if ext == "mp4" => "video/mp4",
        Some(ext) if ext == "webm" => "video/webm",
        Some(ext) if ext == "mov" => "video/quicktime",
        _ => "application/octet-stream",
    }
}

#[derive(Debug, Serialize)]
pub struct StatusReply {
    pub status: &'static str,
    pub message: &'static str,
    pub ffmpeg: bool,
    pub compositions: usize,
}

/// `GET /api/status`.
pub async fn status(State(state): State<AppState>) -> Json<StatusReply> {
    let ffmpeg = tokio::task::spawn_blocking(is_ffmpeg_on_path)
        .await
        .unwrap_or(false);
    Json(StatusReply {
        status: "ready",
        message: "Render API is ready",
        ffmpeg,
        compositions: state.catalog.len(),
    })
}

/// `GET /api/presets`.
pub async fn presets() -> Json<PresetListing> {
    Json(listing())
}

/// `GET /api/compositions`.
pub async fn compositions(State(state): State<AppState>) -> Json<Vec<TemplateInfo>> {
    Json(state.catalog.list())
}
