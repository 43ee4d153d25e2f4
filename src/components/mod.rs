//! Reusable visual building blocks. Each component is a pure function of the frame context and
//! its parameters.

/// Bar, line, pie and ring charts.
pub mod charts;
/// Grain, vignette, noise fields and grids.
pub mod effects;
/// Neon text, glow panels, pulsing orbs and drop shadows.
pub mod glow;
/// Lower thirds, logo bugs and timestamps.
pub mod overlay;
/// Tiled and animated pattern backgrounds.
pub mod patterns;
/// Primitive shapes.
pub mod shapes;
/// Enter, exit and cross transitions.
pub mod transitions;
/// Animated text.
pub mod typography;
