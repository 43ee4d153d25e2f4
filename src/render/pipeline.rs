use std::{
    collections::HashMap,
    path::PathBuf,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use rayon::prelude::*;
use tracing::{debug, info, instrument};

use crate::{
    assets::fonts::FontLibrary,
    composition::composition::Composition,
    encode::{
        ffmpeg::{FfmpegSink, FfmpegSinkOpts},
        settings::{EncoderSettings, even_canvas},
        sink::{FrameSink, SinkConfig},
    },
    foundation::{
        core::{FrameIndex, FrameRange},
        error::{StudioError, StudioResult},
    },
    render::{
        backend::{FrameRGBA, FrameRenderer},
        progress::{RenderProgress, RenderStage},
        raster::SvgRasterizer,
    },
    scene::{fingerprint::fingerprint_svg, svg::to_svg},
};

/// Evaluate and rasterize a single frame.
///
/// Returns a [`FrameRGBA`] containing **premultiplied** RGBA8 pixels.
pub fn render_frame(
    comp: &Composition,
    frame: FrameIndex,
    renderer: &mut dyn FrameRenderer,
) -> StudioResult<FrameRGBA> {
    let scene = comp.scene_at(frame)?;
    renderer.render_scene(&scene)
}

/// Threading and chunking controls for multi-frame rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderThreading {
    pub parallel: bool,
    /// Chunk size in frames for batched scheduling.
    pub chunk_size: usize,
    /// Explicit worker thread count; `None` uses the rayon default.
    pub threads: Option<usize>,
    /// Rasterize frames with identical SVG only once.
    pub static_frame_elision: bool,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 32,
            threads: None,
            static_frame_elision: false,
        }
    }
}

impl RenderThreading {
    /// Parallel with elision, the setting used for file output.
    pub fn parallel(threads: Option<usize>, chunk_size: usize) -> Self {
        Self {
            parallel: true,
            chunk_size,
            threads,
            static_frame_elision: true,
        }
    }
}

/// Aggregated rendering counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub frames_total: u64,
    /// Frames that were actually rasterized.
    pub frames_rendered: u64,
    /// Frames reused via static-frame elision.
    pub frames_elided: u64,
}

impl RenderStats {
    fn add(&mut self, other: RenderStats) {
        self.frames_total += other.frames_total;
        self.frames_rendered += other.frames_rendered;
        self.frames_elided += other.frames_elided;
    }
}

/// Render a range of frames (inclusive start, exclusive end).
pub fn render_frames(
    comp: &Composition,
    range: FrameRange,
    renderer: &mut dyn FrameRenderer,
    threading: &RenderThreading,
) -> StudioResult<Vec<FrameRGBA>> {
    render_frames_with_stats(comp, range, renderer, threading).map(|(frames, _)| frames)
}

/// Render a frame range and return both frame data and rendering stats.
#[instrument(skip_all, fields(id = %comp.id, start = range.start.0, end = range.end.0))]
pub fn render_frames_with_stats(
    comp: &Composition,
    range: FrameRange,
    renderer: &mut dyn FrameRenderer,
    threading: &RenderThreading,
) -> StudioResult<(Vec<FrameRGBA>, RenderStats)> {
    check_range(comp, range)?;
    let mut workers = Workers::new(renderer, threading)?;
    let mut out = Vec::with_capacity(range.len_frames().min(4096) as usize);
    let mut stats = RenderStats::default();

    for chunk in chunks(range, threading.chunk_size) {
        let chunk_out = workers.render_chunk(comp, chunk)?;
        stats.add(chunk_out.stats);
        out.extend(chunk_out.into_frames()?);
    }
    Ok((out, stats))
}

/// Options for [`render_to_sink`] and [`render_to_file`].
#[derive(Clone, Debug, Default)]
pub struct RenderOptions {
    /// Frames to render; the whole composition when `None`.
    pub range: Option<FrameRange>,
    pub threading: RenderThreading,
    /// Set from another thread to stop the render before the next frame.
    pub cancel: Option<Arc<AtomicBool>>,
}

impl RenderOptions {
    fn check_cancelled(&self) -> StudioResult<()> {
        match &self.cancel {
            Some(flag) if flag.load(Ordering::Relaxed) => Err(StudioError::Cancelled),
            _ => Ok(()),
        }
    }
}

/// Render frames in chunks and push them to `sink` in strictly increasing order.
///
/// `on_progress` runs after every rendered chunk and every encoded frame, then once for the
/// muxing step and once when the sink has finished. A raised `opts.cancel` flag ends the render
/// with [`StudioError::Cancelled`] without finishing the sink.
#[instrument(skip_all, fields(id = %comp.id))]
pub fn render_to_sink(
    comp: &Composition,
    opts: &RenderOptions,
    renderer: &mut dyn FrameRenderer,
    sink: &mut dyn FrameSink,
    on_progress: &mut dyn FnMut(RenderProgress),
) -> StudioResult<RenderStats> {
    let range = opts.range.unwrap_or_else(|| comp.range());
    check_range(comp, range)?;
    let mut workers = Workers::new(renderer, &opts.threading)?;

    sink.begin(SinkConfig {
        width: comp.canvas.width,
        height: comp.canvas.height,
        fps: comp.fps,
    })?;

    let mut progress = RenderProgress::new(range.len_frames());
    let mut stats = RenderStats::default();
    for chunk in chunks(range, opts.threading.chunk_size) {
        opts.check_cancelled()?;
        let chunk_out = workers.render_chunk(comp, chunk)?;
        progress.rendered_frames += chunk.len_frames();
        on_progress(progress.update(RenderStage::Rendering));

        for (offset, &u) in chunk_out.frame_to_unique.iter().enumerate() {
            let frame = chunk_out.unique_frames.get(u).ok_or_else(|| {
                StudioError::evaluation("internal error: unique frame index out of range")
            })?;
            opts.check_cancelled()?;
            sink.push_frame(FrameIndex(chunk.start.0 + offset as u64), frame)?;
            progress.encoded_frames += 1;
            on_progress(progress.update(RenderStage::Encoding));
        }
        stats.add(chunk_out.stats);
        debug!(
            end = chunk.end.0,
            rendered = stats.frames_rendered,
            elided = stats.frames_elided,
            "chunk encoded"
        );
    }

    on_progress(progress.update(RenderStage::Muxing));
    sink.end()?;
    on_progress(progress.update(RenderStage::Done));
    Ok(stats)
}

/// Render a composition to a video file through the system `ffmpeg`.
///
/// Odd dimensions are rounded down to even first when the codec subsamples chroma.
#[instrument(skip_all, fields(id = %comp.id, path = %out_path.display()))]
pub fn render_to_file(
    comp: &Composition,
    out_path: PathBuf,
    settings: EncoderSettings,
    opts: &RenderOptions,
    renderer: &mut dyn FrameRenderer,
    on_progress: &mut dyn FnMut(RenderProgress),
) -> StudioResult<RenderStats> {
    let comp = if settings.format().needs_even_dimensions() && even_canvas(comp.canvas) != comp.canvas
    {
        let even = even_canvas(comp.canvas);
        info!(
            from = ?(comp.canvas.width, comp.canvas.height),
            to = ?(even.width, even.height),
            "rounding output size down to even dimensions"
        );
        comp.clone().with_output(even, comp.fps)?
    } else {
        comp.clone()
    };

    let mut sink = FfmpegSink::new(FfmpegSinkOpts::new(out_path, settings));
    let stats = render_to_sink(&comp, opts, renderer, &mut sink, on_progress)?;
    info!(
        frames = stats.frames_total,
        elided = stats.frames_elided,
        "render finished"
    );
    Ok(stats)
}

fn check_range(comp: &Composition, range: FrameRange) -> StudioResult<()> {
    if range.is_empty() {
        return Err(StudioError::validation("render range must be non-empty"));
    }
    if range.end.0 > comp.duration {
        return Err(StudioError::validation(format!(
            "render range end {} exceeds composition duration {}",
            range.end.0, comp.duration
        )));
    }
    Ok(())
}

fn chunks(range: FrameRange, chunk_size: usize) -> impl Iterator<Item = FrameRange> {
    let size = chunk_size.max(1) as u64;
    (range.start.0..range.end.0)
        .step_by(size as usize)
        .map(move |start| FrameRange {
            start: FrameIndex(start),
            end: FrameIndex((start + size).min(range.end.0)),
        })
}

/// Sequential renderer or a rayon pool with per-thread rasterizers.
struct Workers<'a> {
    renderer: &'a mut dyn FrameRenderer,
    pool: Option<(rayon::ThreadPool, FontLibrary)>,
    elide: bool,
}

impl<'a> Workers<'a> {
    fn new(renderer: &'a mut dyn FrameRenderer, threading: &RenderThreading) -> StudioResult<Self> {
        let pool = if threading.parallel {
            let fonts = renderer.worker_fonts().ok_or_else(|| {
                StudioError::evaluation("parallel render requires a renderer with worker fonts")
            })?;
            Some((build_thread_pool(threading.threads)?, fonts))
        } else {
            None
        };
        Ok(Self {
            renderer,
            pool,
            elide: threading.static_frame_elision,
        })
    }

    fn render_chunk(&mut self, comp: &Composition, range: FrameRange) -> StudioResult<ChunkOut> {
        let frames: Vec<u64> = (range.start.0..range.end.0).collect();
        let svgs: Vec<String> = match &self.pool {
            Some((pool, _)) => pool.install(|| {
                frames
                    .par_iter()
                    .map(|f| comp.scene_at(FrameIndex(*f)).map(|s| to_svg(&s)))
                    .collect::<StudioResult<Vec<_>>>()
            })?,
            None => frames
                .iter()
                .map(|f| comp.scene_at(FrameIndex(*f)).map(|s| to_svg(&s)))
                .collect::<StudioResult<Vec<_>>>()?,
        };

        let mut unique = Vec::<usize>::with_capacity(svgs.len());
        let mut frame_to_unique = Vec::<usize>::with_capacity(svgs.len());
        if self.elide {
            let mut first = HashMap::new();
            for (idx, svg) in svgs.iter().enumerate() {
                let slot = *first.entry(fingerprint_svg(svg)).or_insert_with(|| {
                    unique.push(idx);
                    unique.len() - 1
                });
                frame_to_unique.push(slot);
            }
        } else {
            unique.extend(0..svgs.len());
            frame_to_unique.extend(0..svgs.len());
        }

        let canvas = comp.canvas;
        let unique_frames = match &self.pool {
            Some((pool, fonts)) => pool.install(|| {
                unique
                    .par_iter()
                    .map_init(
                        || SvgRasterizer::new(fonts.clone()),
                        |r, &i| r.render_svg(&svgs[i], canvas),
                    )
                    .collect::<StudioResult<Vec<_>>>()
            })?,
            None => unique
                .iter()
                .map(|&i| self.renderer.render_svg(&svgs[i], canvas))
                .collect::<StudioResult<Vec<_>>>()?,
        };

        let total = svgs.len() as u64;
        let rendered = unique.len() as u64;
        Ok(ChunkOut {
            unique_frames,
            frame_to_unique,
            stats: RenderStats {
                frames_total: total,
                frames_rendered: rendered,
                frames_elided: total - rendered,
            },
        })
    }
}

struct ChunkOut {
    unique_frames: Vec<FrameRGBA>,
    frame_to_unique: Vec<usize>,
    stats: RenderStats,
}

impl ChunkOut {
    /// Expand to one frame per timeline slot, moving each unique frame on its last use.
    fn into_frames(self) -> StudioResult<Vec<FrameRGBA>> {
        let mut remaining = vec![0usize; self.unique_frames.len()];
        for &u in &self.frame_to_unique {
            remaining[u] += 1;
        }
        let mut slots: Vec<Option<FrameRGBA>> = self.unique_frames.into_iter().map(Some).collect();
        let mut out = Vec::with_capacity(self.frame_to_unique.len());
        for u in self.frame_to_unique {
            remaining[u] -= 1;
            let frame = if remaining[u] == 0 {
                slots[u].take()
            } else {
                slots[u].clone()
            };
            out.push(frame.ok_or_else(|| {
                StudioError::evaluation("internal error: unique frame missing")
            })?);
        }
        Ok(out)
    }
}

fn build_thread_pool(threads: Option<usize>) -> StudioResult<rayon::ThreadPool> {
    if threads == Some(0) {
        return Err(StudioError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| StudioError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
