//! Scene rasterization and the chunked, optionally parallel frame pipeline.

pub mod backend;
pub mod pipeline;
pub mod progress;
pub mod raster;

pub use backend::{FrameRGBA, FrameRenderer};
pub use pipeline::{
    RenderOptions, RenderStats, RenderThreading, render_frame, render_frames,
    render_frames_with_stats, render_to_file, render_to_sink,
};
pub use progress::{RenderProgress, RenderStage};
pub use raster::SvgRasterizer;
