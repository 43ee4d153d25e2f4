use crate::{
    assets::fonts::FontLibrary,
    foundation::{
        core::Canvas,
        error::{StudioError, StudioResult},
    },
    render::backend::{FrameRGBA, FrameRenderer},
};

/// CPU renderer: parses the frame's SVG with `usvg` and rasterizes it with `resvg`.
#[derive(Clone, Debug)]
pub struct SvgRasterizer {
    fonts: FontLibrary,
}

impl SvgRasterizer {
    pub fn new(fonts: FontLibrary) -> Self {
        Self { fonts }
    }

    pub fn fonts(&self) -> &FontLibrary {
        &self.fonts
    }
}

impl Default for SvgRasterizer {
    fn default() -> Self {
        Self::new(FontLibrary::system())
    }
}

impl FrameRenderer for SvgRasterizer {
    fn render_svg(&mut self, svg: &str, canvas: Canvas) -> StudioResult<FrameRGBA> {
        canvas.validate()?;
        let opts = self.fonts.usvg_options();
        let tree = usvg::Tree::from_str(svg, &opts)
            .map_err(|e| StudioError::render(format!("failed to parse frame svg: {e}")))?;
        rasterize_tree(&tree, canvas)
    }

    fn worker_fonts(&self) -> Option<FontLibrary> {
        Some(self.fonts.clone())
    }
}

fn rasterize_tree(tree: &usvg::Tree, canvas: Canvas) -> StudioResult<FrameRGBA> {
    let mut pixmap = resvg::tiny_skia::Pixmap::new(canvas.width, canvas.height)
        .ok_or_else(|| StudioError::render("failed to allocate frame pixmap"))?;

    let size = tree.size();
    if !(size.width() > 0.0 && size.height() > 0.0) {
        return Err(StudioError::render("frame svg has an empty viewport"));
    }
    let sx = canvas.width as f32 / size.width();
    let sy = canvas.height as f32 / size.height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

    resvg::render(tree, xform, &mut pixmap.as_mut());
    Ok(FrameRGBA {
        width: canvas.width,
        height: canvas.height,
        data: pixmap.take(),
        premultiplied: true,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
