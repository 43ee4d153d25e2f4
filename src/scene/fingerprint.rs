use xxhash_rust::xxh3::xxh3_128_with_seed;

use crate::scene::{model::Scene, svg::to_svg};

const SEED: u64 = 0x5713_d10f_a11e_c0de;

/// 128-bit digest of a frame's SVG document. Frames that serialize identically share one,
/// whatever their index, so the renderer rasterizes them once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameFingerprint(pub u128);

pub fn fingerprint_svg(svg: &str) -> FrameFingerprint {
    FrameFingerprint(xxh3_128_with_seed(svg.as_bytes(), SEED))
}

pub fn fingerprint_scene(scene: &Scene) -> FrameFingerprint {
    fingerprint_svg(&to_svg(scene))
}
