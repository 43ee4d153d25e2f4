use std::{
    path::Path,
    sync::{Arc, OnceLock},
};

use usvg::fontdb::{Database, Family, Query, Stretch, Style, Weight};

/// Generic families tried after the ones a text node asks for.
const FALLBACK_FAMILIES: [Family<'static>; 3] =
    [Family::SansSerif, Family::Serif, Family::Monospace];

/// Fonts available to text in rendered scenes: system faces plus an optional directory
/// (searched recursively). Cloning shares the database.
#[derive(Clone, Debug)]
pub struct FontLibrary {
    db: Arc<Database>,
}

impl FontLibrary {
    pub fn load(fonts_dir: Option<&Path>) -> Self {
        let mut db = Database::new();
        db.load_system_fonts();
        let system = db.len();
        match fonts_dir {
            Some(dir) if dir.is_dir() => db.load_fonts_dir(dir),
            Some(dir) => tracing::warn!(dir = %dir.display(), "fonts directory not found"),
            None => {}
        }
        tracing::debug!(system, extra = db.len() - system, "fonts loaded");
        Self { db: Arc::new(db) }
    }

    /// Shared system-only library, built on first use.
    pub fn system() -> Self {
        static SYSTEM: OnceLock<FontLibrary> = OnceLock::new();
        SYSTEM.get_or_init(|| Self::load(None)).clone()
    }

    pub fn face_count(&self) -> usize {
        self.db.len()
    }

    pub fn usvg_options(&self) -> usvg::Options<'static> {
        usvg::Options {
            fontdb: Arc::clone(&self.db),
            font_resolver: usvg::FontResolver {
                select_font: Box::new(|font, db| select_font(font, db)),
                select_fallback: usvg::FontResolver::default_fallback_selector(),
            },
            ..Default::default()
        }
    }
}

fn family(f: &usvg::FontFamily) -> Family<'_> {
    match f {
        usvg::FontFamily::Serif => Family::Serif,
        usvg::FontFamily::SansSerif => Family::SansSerif,
        usvg::FontFamily::Cursive => Family::Cursive,
        usvg::FontFamily::Fantasy => Family::Fantasy,
        usvg::FontFamily::Monospace => Family::Monospace,
        usvg::FontFamily::Named(name) => Family::Name(name),
    }
}

/// Requested families first, then generic ones, then any face at all so text is never dropped.
fn select_font(font: &usvg::Font, db: &Arc<Database>) -> Option<usvg::fontdb::ID> {
    let families: Vec<Family<'_>> = font
        .families()
        .iter()
        .map(family)
        .chain(FALLBACK_FAMILIES)
        .collect();
    let style = match font.style() {
        usvg::FontStyle::Normal => Style::Normal,
        usvg::FontStyle::Italic => Style::Italic,
        usvg::FontStyle::Oblique => Style::Oblique,
    };
    db.query(&Query {
        families: &families,
        weight: Weight(font.weight()),
        stretch: Stretch::Normal,
        style,
    })
    .or_else(|| db.faces().next().map(|face| face.id))
}
