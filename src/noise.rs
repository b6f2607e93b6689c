//! Deterministic 2D hash noise for the radial pattern.
//!
//! A `fract(sin(seed) * K)` hash over a linear combination of the
//! coordinates. Cheap and stateless with a visible low-order bias; that
//! bias is part of the look, so the constants are fixed.

use noise::NoiseFn;

/// Weight of the x coordinate in the hash seed
const SEED_X: f64 = 12.9898;
/// Weight of the y coordinate in the hash seed
const SEED_Y: f64 = 78.233;
/// Amplification before taking the fractional part
const HASH_GAIN: f64 = 10000.0;

/// Stateless 2D value hash returning values in [0, 1)
#[derive(Debug, Clone, Copy, Default)]
pub struct NoiseField;

impl NoiseField {
    pub const fn new() -> Self {
        Self
    }

    /// Sample the hash at (x, y)
    ///
    /// Returns value in range [0, 1)
    #[inline]
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        seeded_random(x * SEED_X + y * SEED_Y)
    }
}

impl NoiseFn<f64, 2> for NoiseField {
    fn get(&self, point: [f64; 2]) -> f64 {
        self.sample(point[0], point[1])
    }
}

#[inline]
fn seeded_random(seed: f64) -> f64 {
    let x = seed.sin() * HASH_GAIN;
    let fract = x - x.floor();
    // A tiny negative product rounds up to exactly 1.0
    if fract >= 1.0 {
        0.0
    } else {
        fract
    }
}
