/// Colors, palettes and named gradients.
pub mod color;
/// Font database and family resolution for SVG text.
pub mod fonts;
/// File name validation for render artifacts.
pub mod paths;
