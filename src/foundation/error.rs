/// Result alias for every fallible studio API.
pub type StudioResult<T> = Result<T, StudioError>;

/// Failures surfaced by templates, rendering and encoding. The server maps
/// `Validation` to 400 and `NotFound` to 404.
#[derive(thiserror::Error, Debug)]
pub enum StudioError {
    /// Bad props, preset names, canvas sizes or encoder options.
    #[error("validation error: {0}")]
    Validation(String),

    #[error("animation error: {0}")]
    Animation(String),

    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// SVG parsing or rasterization failed.
    #[error("render error: {0}")]
    Render(String),

    /// `ffmpeg` could not be started or exited unsuccessfully.
    #[error("encode error: {0}")]
    Encode(String),

    #[error("not found: {0}")]
    NotFound(String),

    /// Malformed JSON input.
    #[error("serialization error: {0}")]
    Serde(String),

    /// The caller stopped the render, e.g. because its client went away.
    #[error("render cancelled")]
    Cancelled,

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StudioError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// A template failed while drawing a frame.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}

impl From<serde_json::Error> for StudioError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
