use crate::{
    assets::fonts::FontLibrary,
    foundation::{core::Canvas, error::StudioResult},
    scene::{model::Scene, svg::to_svg},
};

/// A rendered frame as RGBA8 pixels.
///
/// Frames are **premultiplied alpha** by default; the flag keeps that explicit at API boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Pixel at `(x, y)` or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        self.data.get(i..i + 4).map(|p| [p[0], p[1], p[2], p[3]])
    }

    /// Straight-alpha copy, e.g. for PNG export.
    pub fn to_straight(&self) -> Vec<u8> {
        if !self.premultiplied {
            return self.data.clone();
        }
        let mut out = self.data.clone();
        for px in out.chunks_exact_mut(4) {
            let a = u16::from(px[3]);
            if a == 0 || a == 255 {
                continue;
            }
            for c in &mut px[..3] {
                *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
            }
        }
        out
    }
}

/// Turns scenes into pixels.
///
/// Most callers use [`crate::render::pipeline::render_frame`] and friends, which handle frame
/// evaluation and chunking.
pub trait FrameRenderer {
    /// Rasterize an SVG document into a frame of `canvas` size.
    fn render_svg(&mut self, svg: &str, canvas: Canvas) -> StudioResult<FrameRGBA>;

    fn render_scene(&mut self, scene: &Scene) -> StudioResult<FrameRGBA> {
        self.render_svg(&to_svg(scene), scene.canvas)
    }

    /// Fonts needed to build equivalent per-thread renderers for parallel rendering.
    fn worker_fonts(&self) -> Option<FontLibrary> {
        None
    }
}
