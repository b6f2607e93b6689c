//! 8×8 ordered-dither threshold table.

/// Side length of the threshold table
pub const MATRIX_SIZE: usize = 8;

/// Number of distinct threshold levels
pub const LEVELS: u8 = 64;

/// Bayer arrangement, indexed `[row][column]`
const BAYER_8X8: [[u8; MATRIX_SIZE]; MATRIX_SIZE] = [
    [0, 32, 8, 40, 2, 34, 10, 42],
    [48, 16, 56, 24, 50, 18, 58, 26],
    [12, 44, 4, 36, 14, 46, 6, 38],
    [60, 28, 52, 20, 62, 30, 54, 22],
    [3, 35, 11, 43, 1, 33, 9, 41],
    [51, 19, 59, 27, 49, 17, 57, 25],
    [15, 47, 7, 39, 13, 45, 5, 37],
    [63, 31, 55, 23, 61, 29, 53, 21],
];

/// Immutable threshold lookup, tiled across the raster in blocks
#[derive(Debug, Clone, Copy)]
pub struct DitherMatrix {
    block_size: u32,
}

impl DitherMatrix {
    /// `block_size` must be non-zero; [`crate::params::PatternParams::validate`] enforces it
    pub const fn new(block_size: u32) -> Self {
        Self { block_size }
    }

    /// Raw threshold in [0, 64) for the pixel at (px, py)
    #[inline]
    pub fn threshold(&self, px: u32, py: u32) -> u8 {
        let bs = self.block_size.max(1);
        let bx = (px / bs) as usize % MATRIX_SIZE;
        let by = (py / bs) as usize % MATRIX_SIZE;
        BAYER_8X8[by][bx]
    }

    /// Threshold scaled to [0, 1), compared directly against intensity
    #[inline]
    pub fn normalized(&self, px: u32, py: u32) -> f64 {
        self.threshold(px, py) as f64 / LEVELS as f64
    }

    /// All 64 table cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = u8> {
        BAYER_8X8.into_iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_level_appears_once() {
        let mut seen = [false; LEVELS as usize];
        for cell in DitherMatrix::new(3).cells() {
            assert!(cell < LEVELS);
            assert!(!seen[cell as usize], "threshold {} repeated", cell);
            seen[cell as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_block_indexing() {
        let m = DitherMatrix::new(3);
        // Pixels within one block share a threshold
        assert_eq!(m.threshold(3, 0), m.threshold(5, 2));
        assert_eq!(m.threshold(3, 0), 32);
        assert_eq!(m.threshold(0, 3), 48);
        // Table wraps every 8 blocks
        assert_eq!(m.threshold(0, 0), m.threshold(24, 24));
        assert_eq!(m.threshold(21, 21), 21);
    }

    #[test]
    fn test_normalized_below_one() {
        let m = DitherMatrix::new(1);
        assert_eq!(m.normalized(0, 0), 0.0);
        assert_eq!(m.normalized(0, 7), 63.0 / 64.0);
    }
}
