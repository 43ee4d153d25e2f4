//! State shared by every handler.

use std::sync::Arc;

use crate::{assets::fonts::FontLibrary, composition::catalog::Catalog, server::config::ServerConfig};

/// Cheap to clone; handed to handlers through axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    pub catalog: Arc<Catalog>,
    pub fonts: FontLibrary,
}

impl AppState {
    /// Built-in catalog plus system fonts and `FONTS_DIR`.
    pub fn new(config: ServerConfig) -> Self {
        let fonts = FontLibrary::load(config.fonts_dir.as_deref());
        Self::with_parts(config, Catalog::builtin(), fonts)
    }

    pub fn with_parts(config: ServerConfig, catalog: Catalog, fonts: FontLibrary) -> Self {
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            fonts,
        }
    }
}
