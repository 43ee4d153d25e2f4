use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _};
use wavyte_studio::{
    Catalog, Composition, EncoderSettings, FontLibrary, FrameIndex, RenderOptions,
    RenderProgress, RenderThreading, SvgRasterizer,
    encode::is_ffmpeg_on_path,
    presets::{self, CustomOptions, DEFAULT_QUALITY, OutputFormat},
    server::{self, ServerConfig},
};

#[derive(Parser, Debug)]
#[command(name = "wavyte-studio", version, about = "Render video templates or serve the render API")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the built-in compositions.
    List,
    /// Print the platform, quality, social and format tables as JSON.
    Presets,
    /// Render a single frame as a PNG.
    Frame(FrameArgs),
    /// Render a video file (requires `ffmpeg` on PATH).
    Render(RenderArgs),
    /// Run the HTTP render API.
    Serve(ServeArgs),
}

#[derive(Parser, Debug)]
struct CompositionArgs {
    /// Composition id or name, e.g. `motivation-reel`.
    #[arg(long, short, default_value = server::DEFAULT_COMPOSITION)]
    composition: String,

    /// Output platform (resizes and retimes the composition).
    #[arg(long)]
    platform: Option<String>,

    /// Template props as JSON.
    #[arg(long)]
    props: Option<String>,

    /// Extra fonts directory (defaults to `FONTS_DIR`).
    #[arg(long, env = "FONTS_DIR")]
    fonts_dir: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    comp: CompositionArgs,

    /// Frame index (0-based).
    #[arg(long)]
    frame: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    #[command(flatten)]
    comp: CompositionArgs,

    /// Output video path.
    #[arg(long)]
    out: PathBuf,

    /// Quality tier: draft, standard, high or professional.
    #[arg(long, default_value = DEFAULT_QUALITY)]
    quality: String,

    /// Social encoder preset; overrides `--quality`.
    #[arg(long)]
    preset: Option<String>,

    /// Container: mp4, webm or prores.
    #[arg(long, default_value = "mp4")]
    format: String,

    /// Constant rate factor; switches to custom encoder options.
    #[arg(long)]
    crf: Option<u8>,

    /// Worker threads (defaults to `RENDER_THREADS`, then the core count).
    #[arg(long, env = "RENDER_THREADS")]
    threads: Option<usize>,

    #[arg(long, env = "RENDER_CHUNK_SIZE", default_value_t = 32)]
    chunk_size: usize,
}

#[derive(Parser, Debug)]
struct ServeArgs {
    /// Listen port (overrides `SERVER_PORT`).
    #[arg(long)]
    port: Option<u16>,

    /// Artifact directory (overrides `OUTPUT_DIR`).
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    init_logger();
    let cli = Cli::parse();
    match cli.cmd {
        Command::List => cmd_list(),
        Command::Presets => cmd_presets(),
        Command::Frame(args) => cmd_frame(args),
        Command::Render(args) => cmd_render(args),
        Command::Serve(args) => cmd_serve(args),
    }
}

fn init_logger() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

fn cmd_list() -> anyhow::Result<()> {
    for info in Catalog::builtin().list() {
        println!(
            "{:<24} {:>4}x{:<4} {:>5.2}fps {:>5} frames  {}",
            info.id,
            info.canvas.width,
            info.canvas.height,
            info.fps.as_f64(),
            info.duration,
            info.description
        );
    }
    Ok(())
}

fn cmd_presets() -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&presets::listing())?);
    Ok(())
}

fn load_composition(args: &CompositionArgs) -> anyhow::Result<Composition> {
    let props = args
        .props
        .as_deref()
        .map(serde_json::from_str::<serde_json::Value>)
        .transpose()
        .context("parse --props JSON")?;
    let mut comp = Catalog::builtin().instantiate(&args.composition, props.as_ref())?;
    if let Some(name) = args.platform.as_deref() {
        let p = presets::platform(name)?;
        comp = comp.with_output(p.canvas(), p.frame_rate())?;
    }
    info!(
        id = %comp.id,
        width = comp.canvas.width,
        height = comp.canvas.height,
        frames = comp.duration,
        "composition ready"
    );
    Ok(comp)
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let comp = load_composition(&args.comp)?;
    let mut renderer = SvgRasterizer::new(FontLibrary::load(args.comp.fonts_dir.as_deref()));
    let frame = wavyte_studio::render_frame(&comp, FrameIndex(args.frame), &mut renderer)?;

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &args.out,
        &frame.to_straight(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    if !is_ffmpeg_on_path() {
        anyhow::bail!("ffmpeg was not found on PATH");
    }
    let comp = load_composition(&args.comp)?;
    let format = OutputFormat::parse(&args.format)?;
    let custom = args.crf.map(|crf| CustomOptions {
        codec: Some(format.info().name.to_owned()),
        crf: Some(crf),
        ..CustomOptions::default()
    });
    let settings = EncoderSettings::select(
        custom.as_ref(),
        args.preset.as_deref(),
        presets::quality(&args.quality)?,
        format,
    )?;

    let opts = RenderOptions {
        range: None,
        threading: RenderThreading::parallel(args.threads, args.chunk_size),
        ..RenderOptions::default()
    };
    let mut renderer = SvgRasterizer::new(FontLibrary::load(args.comp.fonts_dir.as_deref()));
    let mut last_percent = None;
    let stats = wavyte_studio::render_to_file(
        &comp,
        args.out.clone(),
        settings,
        &opts,
        &mut renderer,
        &mut |p: RenderProgress| {
            let pct = p.percent() / 10 * 10;
            if last_percent != Some(pct) {
                last_percent = Some(pct);
                info!(progress = pct, stage = ?p.stage, "rendering");
            }
        },
    )?;

    eprintln!(
        "wrote {} ({} frames, {} rasterized)",
        args.out.display(),
        stats.frames_total,
        stats.frames_rendered
    );
    Ok(())
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = ServerConfig::from_env();
    if let Some(port) = args.port {
        config = config.with_port(port);
    }
    if let Some(dir) = args.output_dir {
        config.output_dir = dir;
    }
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("start tokio runtime")?
        .block_on(server::serve(config))
}
