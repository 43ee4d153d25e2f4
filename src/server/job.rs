//! One render request, run on a blocking thread and reported through [`RenderEvent`]s.

use std::{
    path::PathBuf,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use serde::Deserialize;
use tokio::sync::mpsc;
use tracing::{debug, error, info, instrument};

use crate::{
    assets::paths::output_file_name,
    composition::composition::Composition,
    encode::settings::EncoderSettings,
    foundation::error::{StudioError, StudioResult},
    presets::{CustomOptions, DEFAULT_QUALITY, OutputFormat, platform, quality},
    render::{RenderOptions, SvgRasterizer, render_to_file},
    server::{
        events::{CompleteEvent, ProgressRelay, RenderEvent, StatusEvent},
        state::AppState,
    },
};

pub const DEFAULT_COMPOSITION: &str = "MotivationReel";

/// Body of `POST /api/render`. Every field is optional.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderRequest {
    pub composition_id: Option<String>,
    /// Output size and frame rate; the composition's own when omitted.
    pub platform: Option<String>,
    pub quality: Option<String>,
    pub format: Option<String>,
    /// Social encoder preset; wins over `quality`.
    pub preset: Option<String>,
    /// Explicit encoder options; win over `preset` and `quality`.
    pub custom_options: Option<CustomOptions>,
    pub input_props: Option<serde_json::Value>,
}

impl RenderRequest {
    /// Parse a request body. An empty body selects every default, whatever the content type.
    pub fn from_body(body: &[u8]) -> StudioResult<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body)
            .map_err(|e| StudioError::validation(format!("invalid render request: {e}")))
    }
}

/// Resolved request: composition, encoder settings and output location.
#[derive(Debug)]
pub struct RenderJob {
    pub composition: Composition,
    pub settings: EncoderSettings,
    pub preset: String,
    pub file_name: String,
    pub out_path: PathBuf,
}

/// Run `req` to completion, sending every event to `tx`. The final event is `complete` or
/// `error`. The render stops early once the receiving side is gone.
pub fn run(state: &AppState, req: &RenderRequest, tx: &mpsc::Sender<RenderEvent>) {
    let send = |ev: RenderEvent| {
        if tx.blocking_send(ev).is_err() {
            debug!("render event dropped; client disconnected");
        }
    };
    match execute(state, req, &send, &|| tx.is_closed()) {
        Ok(done) => send(done),
        Err(StudioError::Cancelled) => info!("client disconnected, render stopped"),
        Err(e) => {
            error!(error = %e, "render failed");
            send(RenderEvent::error(&e));
        }
    }
}

#[instrument(skip_all, fields(composition = req.composition_id.as_deref().unwrap_or(DEFAULT_COMPOSITION)))]
fn execute(
    state: &AppState,
    req: &RenderRequest,
    send: &dyn Fn(RenderEvent),
    disconnected: &dyn Fn() -> bool,
) -> StudioResult<RenderEvent> {
    let tier = quality(req.quality.as_deref().unwrap_or(DEFAULT_QUALITY))?;
    let format = match req.format.as_deref() {
        Some(name) => OutputFormat::parse(name)?,
        None => OutputFormat::default(),
    };
    let settings = EncoderSettings::select(
        req.custom_options.as_ref(),
        req.preset.as_deref(),
        tier,
        format,
    )?;
    let preset = match (&req.custom_options, &req.preset) {
        (Some(_), _) => "custom".to_owned(),
        (None, Some(name)) => name.clone(),
        (None, None) => tier.name.to_owned(),
    };
    info!(%preset, codec = ?settings.codec, "render requested");
    send(RenderEvent::Status(StatusEvent::initializing(&preset, &settings)));

    send(RenderEvent::Status(StatusEvent::selecting()));
    let job = prepare(state, req, settings, preset)?;

    send(RenderEvent::Status(StatusEvent::rendering(
        &job.file_name,
        &job.settings,
    )));
    let cancel = Arc::new(AtomicBool::new(false));
    let opts = RenderOptions {
        range: None,
        threading: state.config.threading(),
        cancel: Some(Arc::clone(&cancel)),
    };
    let mut renderer = SvgRasterizer::new(state.fonts.clone());
    let mut relay = ProgressRelay::new();
    render_to_file(
        &job.composition,
        job.out_path.clone(),
        job.settings.clone(),
        &opts,
        &mut renderer,
        &mut |p| {
            if disconnected() {
                cancel.store(true, Ordering::Relaxed);
            } else if let Some(ev) = relay.next(p) {
                send(RenderEvent::Progress(ev));
            }
        },
    )
    .inspect_err(|_| {
        if cancel.load(Ordering::Relaxed) {
            let _ = std::fs::remove_file(&job.out_path);
        }
    })?;

    info!(file = %job.out_path.display(), "render complete");
    Ok(RenderEvent::Complete(CompleteEvent {
        success: true,
        file_path: job.out_path.display().to_string(),
        download_url: state.config.download_url(&job.file_name),
        file_name: job.file_name,
        preset: job.preset,
        quality: job.settings,
    }))
}

/// Instantiate the composition and pick the output file.
pub fn prepare(
    state: &AppState,
    req: &RenderRequest,
    settings: EncoderSettings,
    preset: String,
) -> StudioResult<RenderJob> {
    let id = req.composition_id.as_deref().unwrap_or(DEFAULT_COMPOSITION);
    let mut composition = state.catalog.instantiate(id, req.input_props.as_ref())?;
    if let Some(name) = req.platform.as_deref() {
        let p = platform(name)?;
        composition = composition.with_output(p.canvas(), p.frame_rate())?;
    }

    let file_name = output_file_name(
        "video",
        &composition.id,
        chrono::Utc::now().timestamp_millis(),
        settings.format().extension(),
    );
    let out_path = state.config.output_dir.join(&file_name);
    Ok(RenderJob {
        composition,
        settings,
        preset,
        file_name,
        out_path,
    })
}
