/// Keyframed tracks and time-remapping combinators.
pub mod anim;
/// Easing curves.
pub mod ease;
/// Range mapping with extrapolation modes.
pub mod interpolate;
/// Seeded random values and simplex noise.
pub mod noise;
/// Damped spring physics.
pub mod spring;
/// Frame and timecode helpers.
pub mod timing;
