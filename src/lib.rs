//! Wavyte Studio: parameterized video templates rendered frame by frame to SVG, rasterized with
//! `resvg` and encoded by the system `ffmpeg`.
//!
//! - Pick a template from the [`Catalog`] and instantiate it into a [`Composition`]
//! - Render single frames with [`render_frame`] or whole videos with [`render_to_file`]
//! - Or run the HTTP render API ([`server::serve`]) that streams progress as server-sent events
#![forbid(unsafe_code)]

pub mod animation;
pub mod assets;
pub mod components;
pub mod composition;
pub mod encode;
pub mod foundation;
pub mod presets;
pub mod render;
pub mod scene;
pub mod server;
pub mod templates;

pub use crate::foundation::core::{
    Affine, BezPath, Canvas, Fps, FrameIndex, FrameRange, Point, Rect,
};
pub use crate::foundation::error::{StudioError, StudioResult};

pub use crate::assets::{color::Color, fonts::FontLibrary};
pub use crate::composition::{
    catalog::Catalog,
    composition::Composition,
    ctx::FrameCtx,
    template::{Template, TemplateInfo},
};
pub use crate::encode::{EncoderSettings, FfmpegSink, FfmpegSinkOpts, FrameSink, InMemorySink};
pub use crate::render::{
    FrameRGBA, FrameRenderer, RenderOptions, RenderProgress, RenderStage, RenderStats,
    RenderThreading, SvgRasterizer, render_frame, render_frames, render_to_file, render_to_sink,
};
pub use crate::scene::model::Scene;
