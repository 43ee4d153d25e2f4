use crate::foundation::math::{Fnv1a64, hash_str};

/// SplitMix64 generator. Small, fast and fully deterministic for a given seed.
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform value in `[0, 1)` with 53 bits of precision.
    pub fn next_f64_01(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }

    /// Uniform value in `[lo, hi)`.
    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64_01()
    }
}

/// Deterministic pseudo-random value in `[0, 1)` for a numeric seed.
pub fn random(seed: u64) -> f64 {
    Rng64::new(Fnv1a64::new().update(&seed.to_le_bytes()).digest()).next_f64_01()
}

/// [`random`] keyed by a string, e.g. `random_str("grain-12-3")`.
pub fn random_str(seed: &str) -> f64 {
    Rng64::new(hash_str(seed)).next_f64_01()
}

const GRAD3: [[f64; 3]; 12] = [
    [1.0, 1.0, 0.0],
    [-1.0, 1.0, 0.0],
    [1.0, -1.0, 0.0],
    [-1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0],
    [-1.0, 0.0, 1.0],
    [1.0, 0.0, -1.0],
    [-1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0],
    [0.0, -1.0, 1.0],
    [0.0, 1.0, -1.0],
    [0.0, -1.0, -1.0],
];

const F2: f64 = 0.366_025_403_784_438_6; // (sqrt(3) - 1) / 2
const G2: f64 = 0.211_324_865_405_187_1; // (3 - sqrt(3)) / 6
const F3: f64 = 1.0 / 3.0;
const G3: f64 = 1.0 / 6.0;

/// Seeded simplex noise in two and three dimensions. Output lies in `[-1, 1]`.
#[derive(Clone, Debug)]
pub struct SimplexNoise {
    perm: [u8; 512],
}

impl SimplexNoise {
    pub fn new(seed: u64) -> Self {
        let mut table: [u8; 256] = std::array::from_fn(|i| i as u8);
        let mut rng = Rng64::new(seed);
        // Fisher-Yates.
        for i in (1..256).rev() {
            let j = (rng.next_u64() % (i as u64 + 1)) as usize;
            table.swap(i, j);
        }
        let perm = std::array::from_fn(|i| table[i & 255]);
        Self { perm }
    }

    fn p(&self, i: usize) -> usize {
        usize::from(self.perm[i & 511])
    }

    pub fn noise2(&self, x: f64, y: f64) -> f64 {
        let s = (x + y) * F2;
        let i = (x + s).floor();
        let j = (y + s).floor();
        let t = (i + j) * G2;
        let x0 = x - (i - t);
        let y0 = y - (j - t);

        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };
        let x1 = x0 - f64::from(i1) + G2;
        let y1 = y0 - f64::from(j1) + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let ii = (i as i64 & 255) as usize;
        let jj = (j as i64 & 255) as usize;
        let gi0 = self.p(ii + self.p(jj)) % 12;
        let gi1 = self.p(ii + i1 as usize + self.p(jj + j1 as usize)) % 12;
        let gi2 = self.p(ii + 1 + self.p(jj + 1)) % 12;

        let corner = |gi: usize, dx: f64, dy: f64| {
            let t = 0.5 - dx * dx - dy * dy;
            if t < 0.0 {
                0.0
            } else {
                let g = GRAD3[gi];
                let t2 = t * t;
                t2 * t2 * (g[0] * dx + g[1] * dy)
            }
        };

        let n = corner(gi0, x0, y0) + corner(gi1, x1, y1) + corner(gi2, x2, y2);
        (70.0 * n).clamp(-1.0, 1.0)
    }

    pub fn noise3(&self, x: f64, y: f64, z: f64) -> f64 {
        let s = (x + y + z) * F3;
        let i = (x + s).floor();
        let j = (y + s).floor();
        let k = (z + s).floor();
        let t = (i + j + k) * G3;
        let x0 = x - (i - t);
        let y0 = y - (j - t);
        let z0 = z - (k - t);

        let (i1, j1, k1, i2, j2, k2) = if x0 >= y0 {
            if y0 >= z0 {
                (1, 0, 0, 1, 1, 0)
            } else if x0 >= z0 {
                (1, 0, 0, 1, 0, 1)
            } else {
                (0, 0, 1, 1, 0, 1)
            }
        } else if y0 < z0 {
            (0, 0, 1, 0, 1, 1)
        } else if x0 < z0 {
            (0, 1, 0, 0, 1, 1)
        } else {
            (0, 1, 0, 1, 1, 0)
        };

        let offsets = [
            (0usize, 0usize, 0usize, x0, y0, z0),
            (
                i1,
                j1,
                k1,
                x0 - i1 as f64 + G3,
                y0 - j1 as f64 + G3,
                z0 - k1 as f64 + G3,
            ),
            (
                i2,
                j2,
                k2,
                x0 - i2 as f64 + 2.0 * G3,
                y0 - j2 as f64 + 2.0 * G3,
                z0 - k2 as f64 + 2.0 * G3,
            ),
            (1, 1, 1, x0 - 1.0 + 3.0 * G3, y0 - 1.0 + 3.0 * G3, z0 - 1.0 + 3.0 * G3),
        ];

        let ii = (i as i64 & 255) as usize;
        let jj = (j as i64 & 255) as usize;
        let kk = (k as i64 & 255) as usize;

        let n: f64 = offsets
            .iter()
            .map(|&(di, dj, dk, dx, dy, dz)| {
                let t = 0.6 - dx * dx - dy * dy - dz * dz;
                if t < 0.0 {
                    return 0.0;
                }
                let gi = self.p(ii + di + self.p(jj + dj + self.p(kk + dk))) % 12;
                let g = GRAD3[gi];
                let t2 = t * t;
                t2 * t2 * (g[0] * dx + g[1] * dy + g[2] * dz)
            })
            .sum();
        (32.0 * n).clamp(-1.0, 1.0)
    }
}
