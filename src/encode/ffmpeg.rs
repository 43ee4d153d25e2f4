use std::{
    io::{Read, Write as _},
    path::{Path, PathBuf},
    process::{Child, ChildStdin, Command, Stdio},
    thread::JoinHandle,
};

use anyhow::Context as _;
use tracing::{debug, info, warn};

use crate::{
    encode::{
        settings::EncoderSettings,
        sink::{FrameSink, SinkConfig},
    },
    foundation::{
        core::FrameIndex,
        error::{StudioError, StudioResult},
        math::mul_div255_u16,
    },
    render::backend::FrameRGBA,
};

/// Where and how [`FfmpegSink`] writes.
#[derive(Clone, Debug)]
pub struct FfmpegSinkOpts {
    pub out_path: PathBuf,
    pub overwrite: bool,
    /// Straight-alpha color translucent pixels are composited over.
    pub bg_rgba: [u8; 4],
    pub settings: EncoderSettings,
}

impl FfmpegSinkOpts {
    pub fn new(out_path: impl Into<PathBuf>, settings: EncoderSettings) -> Self {
        Self {
            out_path: out_path.into(),
            overwrite: true,
            bg_rgba: [0, 0, 0, 255],
            settings,
        }
    }
}

/// A live encoder process.
struct Encoder {
    child: Child,
    stdin: Option<ChildStdin>,
    stderr: Option<JoinHandle<std::io::Result<Vec<u8>>>>,
    cfg: SinkConfig,
    last: Option<FrameIndex>,
    /// Opaque RGBA staging buffer, one frame large.
    staged: Vec<u8>,
}

impl Encoder {
    fn spawn(args: &[String], cfg: SinkConfig) -> StudioResult<Self> {
        let mut child = Command::new("ffmpeg")
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| StudioError::encode(format!("could not start ffmpeg: {e}")))?;

        let stdin = child.stdin.take();
        let stderr = child.stderr.take().map(|mut pipe| {
            std::thread::spawn(move || {
                let mut buf = Vec::new();
                pipe.read_to_end(&mut buf)?;
                Ok(buf)
            })
        });
        if stdin.is_none() {
            let _ = child.kill();
            return Err(StudioError::encode("ffmpeg stdin is not piped"));
        }

        Ok(Self {
            child,
            stdin,
            stderr,
            cfg,
            last: None,
            staged: vec![0; cfg.width as usize * cfg.height as usize * 4],
        })
    }

    fn collect_stderr(&mut self) -> String {
        let Some(handle) = self.stderr.take() else {
            return String::new();
        };
        match handle.join() {
            Ok(Ok(bytes)) => String::from_utf8_lossy(&bytes).trim().to_owned(),
            Ok(Err(e)) => format!("<stderr unreadable: {e}>"),
            Err(_) => "<stderr reader panicked>".to_owned(),
        }
    }
}

/// Pipes raw RGBA frames into a system `ffmpeg` process.
pub struct FfmpegSink {
    opts: FfmpegSinkOpts,
    encoder: Option<Encoder>,
}

impl FfmpegSink {
    pub fn new(opts: FfmpegSinkOpts) -> Self {
        Self {
            opts,
            encoder: None,
        }
    }

    pub fn out_path(&self) -> &Path {
        &self.opts.out_path
    }

    fn check_config(&self, cfg: &SinkConfig) -> StudioResult<()> {
        if cfg.fps.num == 0 || cfg.fps.den == 0 {
            return Err(StudioError::validation("fps must be non-zero"));
        }
        if cfg.width == 0 || cfg.height == 0 {
            return Err(StudioError::validation(format!(
                "cannot encode a {}x{} video",
                cfg.width, cfg.height
            )));
        }
        let odd = cfg.width % 2 == 1 || cfg.height % 2 == 1;
        if odd && self.opts.settings.format().needs_even_dimensions() {
            return Err(StudioError::validation(format!(
                "{} needs even dimensions, got {}x{}",
                self.opts.settings.pixel_format, cfg.width, cfg.height
            )));
        }
        if !self.opts.overwrite && self.opts.out_path.exists() {
            return Err(StudioError::validation(format!(
                "refusing to overwrite '{}'",
                self.opts.out_path.display()
            )));
        }
        Ok(())
    }
}

/// Arguments for encoding `cfg`-shaped rawvideo from stdin into `opts.out_path`.
pub(crate) fn ffmpeg_args(cfg: &SinkConfig, opts: &FfmpegSinkOpts) -> Vec<String> {
    let overwrite = if opts.overwrite { "-y" } else { "-n" };
    let input = [
        overwrite,
        "-loglevel",
        "error",
        "-f",
        "rawvideo",
        "-pix_fmt",
        "rgba",
    ];
    let mut args: Vec<String> = input.iter().map(|s| (*s).to_owned()).collect();
    args.push("-s".to_owned());
    args.push(format!("{}x{}", cfg.width, cfg.height));
    args.push("-r".to_owned());
    args.push(format!("{}/{}", cfg.fps.num, cfg.fps.den));
    args.extend(["-i", "pipe:0", "-an"].map(str::to_owned));
    args.extend(opts.settings.video_args());
    args.push(opts.out_path.display().to_string());
    args
}

impl FrameSink for FfmpegSink {
    fn begin(&mut self, cfg: SinkConfig) -> StudioResult<()> {
        self.check_config(&cfg)?;
        ensure_parent_dir(&self.opts.out_path)?;
        if !is_ffmpeg_on_path() {
            return Err(StudioError::encode("ffmpeg was not found on PATH"));
        }
        let args = ffmpeg_args(&cfg, &self.opts);
        debug!(?args, "starting ffmpeg");
        self.encoder = Some(Encoder::spawn(&args, cfg)?);
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> StudioResult<()> {
        let bg = self.opts.bg_rgba;
        let enc = self
            .encoder
            .as_mut()
            .ok_or_else(|| StudioError::encode("push_frame before begin"))?;
        if enc.last.is_some_and(|last| idx <= last) {
            return Err(StudioError::encode(format!(
                "frame {} arrived out of order",
                idx.0
            )));
        }
        if (frame.width, frame.height) != (enc.cfg.width, enc.cfg.height)
            || frame.data.len() != enc.staged.len()
        {
            return Err(StudioError::validation(format!(
                "frame {} is {}x{}, encoder expects {}x{}",
                idx.0, frame.width, frame.height, enc.cfg.width, enc.cfg.height
            )));
        }
        enc.last = Some(idx);

        if frame.premultiplied {
            flatten_premul_over_bg(&mut enc.staged, &frame.data, bg)?;
        } else {
            enc.staged.copy_from_slice(&frame.data);
        }
        let stdin = enc
            .stdin
            .as_mut()
            .ok_or_else(|| StudioError::encode("ffmpeg input already closed"))?;
        if let Err(e) = stdin.write_all(&enc.staged) {
            let detail = enc.collect_stderr();
            return Err(StudioError::encode(format!(
                "writing frame {} to ffmpeg failed: {e} {detail}",
                idx.0
            )));
        }
        Ok(())
    }

    fn end(&mut self) -> StudioResult<()> {
        let mut enc = self
            .encoder
            .take()
            .ok_or_else(|| StudioError::encode("end before begin"))?;
        drop(enc.stdin.take());
        let status = enc
            .child
            .wait()
            .map_err(|e| StudioError::encode(format!("waiting on ffmpeg failed: {e}")))?;
        let stderr = enc.collect_stderr();
        if !status.success() {
            return Err(StudioError::encode(format!("ffmpeg {status}: {stderr}")));
        }
        if !stderr.is_empty() {
            warn!(%stderr, "ffmpeg reported warnings");
        }
        info!(path = %self.opts.out_path.display(), "video written");
        Ok(())
    }
}

impl Drop for FfmpegSink {
    fn drop(&mut self) {
        // Unfinished encodes are killed so ffmpeg never blocks on a dangling pipe.
        if let Some(mut enc) = self.encoder.take() {
            drop(enc.stdin.take());
            let _ = enc.child.kill();
            let _ = enc.child.wait();
        }
    }
}

/// Composite premultiplied RGBA over an opaque background.
fn flatten_premul_over_bg(dst: &mut [u8], src: &[u8], bg: [u8; 4]) -> StudioResult<()> {
    if dst.len() != src.len() || dst.len() % 4 != 0 {
        return Err(StudioError::validation("mismatched rgba buffers"));
    }
    for (out, px) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let inv = 255 - u16::from(px[3]);
        for c in 0..3 {
            let over = mul_div255_u16(u16::from(bg[c]), inv);
            out[c] = (u16::from(px[c]) + over).min(255) as u8;
        }
        out[3] = 255;
    }
    Ok(())
}

/// Create the directory `path` will be written into.
pub fn ensure_parent_dir(path: &Path) -> StudioResult<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating '{}'", dir.display()))?;
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Whether `ffmpeg -version` runs successfully.
pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok_and(|s| s.success())
}
