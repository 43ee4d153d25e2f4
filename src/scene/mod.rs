//! Frame description: nodes, paints, builders and SVG serialization.

/// Fluent builders for scenes, groups, shapes and text.
pub mod dsl;
/// Stable fingerprints of serialized frames.
pub mod fingerprint;
/// Scene data model.
pub mod model;
/// Deterministic SVG serialization.
pub mod svg;
