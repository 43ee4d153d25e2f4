/// FNV-1a (64-bit). Seeds derived from it are identical on every platform and build.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64(u64);

impl Fnv1a64 {
    const BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0100_0000_01b3;

    pub(crate) fn new() -> Self {
        Self(Self::BASIS)
    }

    pub(crate) fn update(&mut self, bytes: &[u8]) -> &mut Self {
        self.0 = bytes
            .iter()
            .fold(self.0, |h, &b| (h ^ u64::from(b)).wrapping_mul(Self::PRIME));
        self
    }

    pub(crate) fn digest(&self) -> u64 {
        self.0
    }
}

/// Numeric seed for a string key such as `"grain-3"`.
pub(crate) fn hash_str(s: &str) -> u64 {
    Fnv1a64::new().update(s.as_bytes()).digest()
}

/// `x * y / 255`, rounded, for 8-bit channel blending.
pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    ((u32::from(x) * u32::from(y) + 127) / 255) as u16
}
