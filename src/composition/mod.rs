//! Timelines, sequencing and the template catalog.

/// Template registry.
pub mod catalog;
/// Drawable timelines.
#[allow(clippy::module_inception)]
pub mod composition;
/// Per-frame drawing context.
pub mod ctx;
/// Sequential segments with transitions.
pub mod series;
/// The template trait and its type-erased form.
pub mod template;
