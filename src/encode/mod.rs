//! Frame sinks: the `ffmpeg` encoder, an in-memory collector and encoder settings resolution.

pub mod ffmpeg;
pub mod settings;
pub mod sink;

pub use ffmpeg::{FfmpegSink, FfmpegSinkOpts, is_ffmpeg_on_path};
pub use settings::{EncoderSettings, VideoCodec, even_canvas};
pub use sink::{FrameSink, InMemorySink, SinkConfig};
