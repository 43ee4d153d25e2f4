//! Server configuration read from the environment (and an optional `.env` file).

use std::{
    env,
    path::PathBuf,
    sync::Once,
};

use crate::render::RenderThreading;

static INIT: Once = Once::new();

fn init_env() {
    INIT.call_once(|| {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!("no .env file loaded: {e}");
        }
    });
}

/// Environment variable `key`, or `default` when unset.
#[must_use]
pub fn get_env(key: &str, default: &str) -> String {
    init_env();
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Environment variable `key` parsed as `T`; unset or unparsable values yield `default`.
#[must_use]
pub fn get_env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    init_env();
    match env::var(key) {
        Ok(v) => v.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %v, "ignoring unparsable environment value");
            default
        }),
        Err(_) => default,
    }
}

fn get_env_opt(key: &str) -> Option<String> {
    init_env();
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Where rendered artifacts are written and served from.
    pub output_dir: PathBuf,
    /// Base of the `downloadUrl` reported to clients.
    pub public_url: String,
    pub fonts_dir: Option<PathBuf>,
    pub render_threads: Option<usize>,
    pub render_chunk_size: usize,
    pub progress_channel_buffer: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_owned(),
            port: 3001,
            output_dir: PathBuf::from("output"),
            public_url: "http://localhost:3001".to_owned(),
            fonts_dir: None,
            render_threads: None,
            render_chunk_size: 32,
            progress_channel_buffer: 64,
        }
    }
}

impl ServerConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let port = get_env_parsed("SERVER_PORT", 3001u16);
        Self {
            host: get_env("SERVER_HOST", "0.0.0.0"),
            port,
            output_dir: PathBuf::from(get_env("OUTPUT_DIR", "output")),
            public_url: get_env_opt("PUBLIC_URL")
                .unwrap_or_else(|| format!("http://localhost:{port}")),
            fonts_dir: get_env_opt("FONTS_DIR").map(PathBuf::from),
            render_threads: get_env_opt("RENDER_THREADS")
                .and_then(|v| v.trim().parse().ok())
                .filter(|n| *n > 0),
            render_chunk_size: get_env_parsed("RENDER_CHUNK_SIZE", 32usize).max(1),
            progress_channel_buffer: get_env_parsed("PROGRESS_CHANNEL_BUFFER", 64usize).max(1),
        }
    }

    /// Override the port, keeping a derived public URL in step.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        if self.public_url == format!("http://localhost:{}", self.port) {
            self.public_url = format!("http://localhost:{port}");
        }
        self.port = port;
        self
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn download_url(&self, file_name: &str) -> String {
        format!(
            "{}/api/download/{file_name}",
            self.public_url.trim_end_matches('/')
        )
    }

    pub fn threading(&self) -> RenderThreading {
        RenderThreading::parallel(self.render_threads, self.render_chunk_size)
    }
}
